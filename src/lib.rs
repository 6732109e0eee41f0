//! # Responsys Kit - Host Analytics → Responsys Event Bridge
//!
//! Embedded integration ("kit") that receives analytics events, commerce
//! events, identity lifecycle callbacks and push intents from a host
//! analytics framework and re-emits them as calls into the Responsys
//! push/marketing SDK:
//! - Commerce product actions fan out to per-product vendor track calls
//! - Generic events map to vendor events, engagement metrics and preferences
//! - Reserved custom flags act as out-of-band directives per event
//! - Identity transitions mirror the customer identifier into the vendor SDK
//! - Push intents are claimed and forwarded to the vendor broadcast receiver
//!
//! ## Architecture
//!
//! The kit follows a single-owner model where `ResponsysKit` owns the vendor
//! client behind an explicit configured/unconfigured state:
//! ```text
//!                     ┌──────────────────────────────────┐
//!   host callbacks →  │          ResponsysKit            │
//!                     │  ┌─────────┐ ┌──────────┐        │
//!                     │  │Commerce │ │ Generic  │        │
//!                     │  │ Mapper  │ │  Mapper  │        │
//!                     │  └─────────┘ └──────────┘        │
//!                     │  ┌─────────┐ ┌──────────┐        │  vendor calls
//!                     │  │Identity │ │   Push   │        │ ──────────────→
//!                     │  │ Bridge  │ │  Router  │        │  audit records
//!                     │  └─────────┘ └──────────┘        │ ──────────────→
//!                     └──────────────────────────────────┘   back to host
//! ```
//!
//! Every callback executes synchronously on the host's calling thread; when
//! the kit is unconfigured all vendor-facing paths are explicit no-ops.

// Enforce strict safety at compile time
#![deny(unsafe_code)]
#![warn(missing_debug_implementations)]
#![warn(rust_2018_idioms)]

// Re-export public API
pub mod events;
pub mod kit;
pub mod types;
pub mod vendor;

// Internal utilities
pub mod observability;
pub(crate) mod validation;

/// Integration name reported to the host framework.
pub const KIT_NAME: &str = "Responsys";

pub use events::{AppEvent, CommerceEvent, EventKind, Product, ProductAction, ReportingMessage};
pub use kit::ResponsysKit;
pub use types::{Error, KitSettings, Result};
