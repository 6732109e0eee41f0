//! Host event model and audit records.
//!
//! Events arrive from the host analytics framework as immutable per-callback
//! values: a generic named event ([`AppEvent`]) or a commerce event
//! ([`CommerceEvent`]) with an ordered product list. The kit answers each
//! callback with zero or more [`ReportingMessage`] audit records; an absent
//! list means "this kit did not act on this event."

pub mod translation;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Host event taxonomy. Fixed input contract; the kit maps `Search` and
/// `UserPreference` and silently ignores the rest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventKind {
    Unknown,
    Navigation,
    Location,
    Search,
    Transaction,
    UserContent,
    UserPreference,
    Social,
    Other,
}

/// Generic named event supplied by the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppEvent {
    /// Host event-type classification.
    pub kind: EventKind,

    /// Host-assigned event name.
    pub name: String,

    /// Ordinary per-event string attributes.
    #[serde(default)]
    pub custom_attributes: HashMap<String, String>,

    /// Out-of-band directives: flag name → list of string values.
    #[serde(default)]
    pub custom_flags: HashMap<String, Vec<String>>,
}

impl AppEvent {
    pub fn new(kind: EventKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
            custom_attributes: HashMap::new(),
            custom_flags: HashMap::new(),
        }
    }

    /// Attach an ordinary custom attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_attributes.insert(key.into(), value.into());
        self
    }

    /// Attach a custom flag and its values.
    pub fn with_flag(mut self, key: impl Into<String>, values: Vec<String>) -> Self {
        self.custom_flags.insert(key.into(), values);
        self
    }
}

/// Host product-action classification on commerce events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductAction {
    AddToCart,
    RemoveFromCart,
    Checkout,
    CheckoutOption,
    Click,
    ViewDetail,
    Purchase,
    Refund,
    AddToWishlist,
    RemoveFromWishlist,
}

/// One commerce line item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub sku: String,
    pub category: String,
}

impl Product {
    pub fn new(sku: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            category: category.into(),
        }
    }
}

/// Commerce event supplied by the host: a product action over an ordered
/// line-item sequence plus attributes shared by all items.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommerceEvent {
    /// Product-action classification; absent means unclassified.
    pub action: Option<ProductAction>,

    /// Ordered line items.
    #[serde(default)]
    pub products: Vec<Product>,

    /// String attributes shared by every line item.
    #[serde(default)]
    pub custom_attributes: HashMap<String, String>,
}

impl CommerceEvent {
    pub fn new(action: ProductAction, products: Vec<Product>) -> Self {
        Self {
            action: Some(action),
            products,
            custom_attributes: HashMap::new(),
        }
    }

    /// Attach a shared custom attribute.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.custom_attributes.insert(key.into(), value.into());
        self
    }
}

/// Which host callback produced an audit record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    Event,
    Commerce,
}

/// Audit record returned to the host confirming a vendor-bound effect.
///
/// The host uses these for delivery reconciliation; the kit produces one per
/// acted-on directive or classification, never one per product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportingMessage {
    /// Unique record id.
    pub id: Uuid,

    /// Originating callback class.
    pub kind: ReportKind,

    /// Integration name.
    pub kit: String,

    /// Host event name, or the mapped vendor event name for commerce.
    pub event_name: Option<String>,

    /// Record creation time.
    pub timestamp: DateTime<Utc>,
}

impl ReportingMessage {
    /// Audit record for a generic host event.
    pub fn from_event(event: &AppEvent) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ReportKind::Event,
            kit: crate::KIT_NAME.to_string(),
            event_name: Some(event.name.clone()),
            timestamp: Utc::now(),
        }
    }

    /// Audit record for a commerce event, carrying the vendor event name the
    /// product list was fanned out under.
    pub fn from_commerce_event(vendor_event: &str) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind: ReportKind::Commerce,
            kit: crate::KIT_NAME.to_string(),
            event_name: Some(vendor_event.to_string()),
            timestamp: Utc::now(),
        }
    }
}
