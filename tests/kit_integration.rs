//! Kit integration tests — full callback flows over a recording client:
//! configure → commerce fan-out → flag/kind interaction → identity → push.

use std::collections::HashMap;

use responsys_kit::events::{
    AppEvent, CommerceEvent, EventKind, Product, ProductAction, ReportKind,
};
use responsys_kit::kit::flags::{CUSTOM_FLAG_ENGAGEMENT, CUSTOM_FLAG_IAM};
use responsys_kit::kit::identity::{IdentityType, UserIdentities};
use responsys_kit::kit::push::{PlatformContext, PushIntent};
use responsys_kit::vendor::{PreferenceError, PreferenceType, ResponsysClient};
use responsys_kit::ResponsysKit;
use serde_json::Value;

/// One recorded vendor call.
#[derive(Debug, Clone, PartialEq)]
enum Call {
    Configure {
        api_key: String,
        account_token: String,
        sender_id: String,
        conversion_url: String,
        ri_app_id: String,
    },
    TrackEvent {
        name: String,
        properties: Option<HashMap<String, Value>>,
    },
    TrackEngagement {
        metric: i32,
        properties: Option<HashMap<String, String>>,
    },
    DeclarePreference {
        key: String,
        label: String,
    },
    SetPreference {
        key: String,
        value: String,
    },
    RegisterUserId(String),
    UnregisterUserId,
    SetDeviceToken(String),
    RegisterApp,
    Broadcast {
        package_name: String,
        engagement_id: Option<String>,
    },
}

/// Vendor client fake that records every call in order.
#[derive(Debug, Default)]
struct RecordingClient {
    calls: Vec<Call>,
    reject_configure: bool,
    reject_preferences: bool,
}

impl ResponsysClient for RecordingClient {
    fn configure(
        &mut self,
        api_key: &str,
        account_token: &str,
        sender_id: &str,
        conversion_url: &str,
        ri_app_id: &str,
    ) -> bool {
        self.calls.push(Call::Configure {
            api_key: api_key.to_string(),
            account_token: account_token.to_string(),
            sender_id: sender_id.to_string(),
            conversion_url: conversion_url.to_string(),
            ri_app_id: ri_app_id.to_string(),
        });
        !self.reject_configure
    }

    fn track_event(&mut self, name: &str, properties: Option<HashMap<String, Value>>) {
        self.calls.push(Call::TrackEvent {
            name: name.to_string(),
            properties,
        });
    }

    fn track_engagement(
        &mut self,
        metric: i32,
        properties: Option<HashMap<String, String>>,
        _context: Option<String>,
    ) {
        self.calls.push(Call::TrackEngagement { metric, properties });
    }

    fn declare_preference(
        &mut self,
        key: &str,
        label: &str,
        _kind: PreferenceType,
    ) -> Result<(), PreferenceError> {
        if self.reject_preferences {
            return Err(PreferenceError(format!("rejected: {key}")));
        }
        self.calls.push(Call::DeclarePreference {
            key: key.to_string(),
            label: label.to_string(),
        });
        Ok(())
    }

    fn set_preference(&mut self, key: &str, value: &str) -> Result<(), PreferenceError> {
        self.calls.push(Call::SetPreference {
            key: key.to_string(),
            value: value.to_string(),
        });
        Ok(())
    }

    fn register_user_id(&mut self, user_id: &str) {
        self.calls.push(Call::RegisterUserId(user_id.to_string()));
    }

    fn unregister_user_id(&mut self) {
        self.calls.push(Call::UnregisterUserId);
    }

    fn set_device_token(&mut self, token: &str) {
        self.calls.push(Call::SetDeviceToken(token.to_string()));
    }

    fn register_app(&mut self) {
        self.calls.push(Call::RegisterApp);
    }

    fn handle_push_broadcast(&mut self, context: &PlatformContext, intent: PushIntent) {
        self.calls.push(Call::Broadcast {
            package_name: context.package_name.clone(),
            engagement_id: intent.extra("ei").map(str::to_string),
        });
    }
}

fn settings_map() -> HashMap<String, String> {
    HashMap::from([
        ("apiKey".to_string(), "key-1".to_string()),
        ("accountToken".to_string(), "token-1".to_string()),
        ("conversionUrl".to_string(), "https://conv.example".to_string()),
        ("riAppId".to_string(), "ri-app-1".to_string()),
        ("senderId".to_string(), "12345".to_string()),
    ])
}

/// Helper: configure a kit over a recording client.
fn configured_kit() -> ResponsysKit<RecordingClient> {
    let mut kit = ResponsysKit::new();
    kit.configure(&settings_map(), RecordingClient::default())
        .unwrap();
    kit
}

fn recorded(kit: &ResponsysKit<RecordingClient>) -> &[Call] {
    &kit.instance().unwrap().calls
}

#[test]
fn test_configure_argument_order() {
    let kit = configured_kit();

    assert_eq!(
        recorded(&kit),
        &[Call::Configure {
            api_key: "key-1".to_string(),
            account_token: "token-1".to_string(),
            sender_id: "12345".to_string(),
            conversion_url: "https://conv.example".to_string(),
            ri_app_id: "ri-app-1".to_string(),
        }]
    );
}

#[test]
fn test_configure_rejected_leaves_kit_unconfigured() {
    let mut kit = ResponsysKit::new();
    let client = RecordingClient {
        reject_configure: true,
        ..Default::default()
    };

    assert!(kit.configure(&settings_map(), client).is_err());
    assert!(kit.instance().is_none());

    // Event traffic on the unconfigured kit is a silent no-op
    let event = CommerceEvent::new(ProductAction::Purchase, vec![Product::new("sku-1", "shoes")]);
    assert!(kit.log_commerce_event(&event).is_none());
}

#[test]
fn test_purchase_fan_out() {
    let mut kit = configured_kit();

    let event = CommerceEvent::new(
        ProductAction::Purchase,
        vec![
            Product::new("sku-1", "shoes"),
            Product::new("sku-2", "hats"),
            Product::new("sku-3", "socks"),
        ],
    )
    .with_attribute("campaign", "summer");

    let reports = kit.log_commerce_event(&event).unwrap();
    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, ReportKind::Commerce);

    let calls = &recorded(&kit)[1..]; // skip the configure call
    assert_eq!(calls.len(), 6);

    // Per product: one track call then one purchase engagement
    for (i, sku) in ["sku-1", "sku-2", "sku-3"].iter().enumerate() {
        match &calls[i * 2] {
            Call::TrackEvent { name, properties } => {
                assert_eq!(name, "$PurchasedCart");
                let properties = properties.as_ref().unwrap();
                assert_eq!(properties["Pid"], Value::String((*sku).to_string()));
                assert_eq!(properties["campaign"], Value::String("summer".to_string()));
            }
            other => panic!("expected track event, got {other:?}"),
        }
        match &calls[i * 2 + 1] {
            Call::TrackEngagement { metric, properties } => {
                assert_eq!(*metric, 7);
                assert_eq!(properties.as_ref().unwrap()["campaign"], "summer");
            }
            other => panic!("expected engagement, got {other:?}"),
        }
    }
}

#[test]
fn test_add_to_cart_has_no_engagement() {
    let mut kit = configured_kit();

    let event = CommerceEvent::new(
        ProductAction::AddToCart,
        vec![Product::new("sku-1", "shoes"), Product::new("sku-2", "hats")],
    );

    let reports = kit.log_commerce_event(&event).unwrap();
    assert_eq!(reports.len(), 1);

    let calls = &recorded(&kit)[1..];
    assert_eq!(calls.len(), 2);
    assert!(calls
        .iter()
        .all(|c| matches!(c, Call::TrackEvent { name, .. } if name == "$AddedItemToCart")));
}

#[test]
fn test_search_event_flow() {
    let mut kit = configured_kit();

    let reports = kit
        .log_event(&AppEvent::new(EventKind::Search, "find-shoes"))
        .unwrap();

    assert_eq!(reports.len(), 1);
    assert_eq!(reports[0].kind, ReportKind::Event);
    assert_eq!(
        recorded(&kit)[1],
        Call::TrackEvent {
            name: "$Searched".to_string(),
            properties: None,
        }
    );
}

#[test]
fn test_user_preference_declare_then_set() {
    let mut kit = configured_kit();

    let event =
        AppEvent::new(EventKind::UserPreference, "prefs").with_attribute("color", "blue");
    assert!(kit.log_event(&event).is_none());

    assert_eq!(
        &recorded(&kit)[1..],
        &[
            Call::DeclarePreference {
                key: "color".to_string(),
                label: "color".to_string(),
            },
            Call::SetPreference {
                key: "color".to_string(),
                value: "blue".to_string(),
            },
        ]
    );
}

#[test]
fn test_user_preference_rejection_recovers() {
    let mut kit = ResponsysKit::new();
    kit.configure(
        &settings_map(),
        RecordingClient {
            reject_preferences: true,
            ..Default::default()
        },
    )
    .unwrap();

    let event = AppEvent::new(EventKind::UserPreference, "prefs")
        .with_attribute("color", "blue")
        .with_attribute("size", "10");

    // Both pairs rejected: logged, skipped, no panic, no audit records
    assert!(kit.log_event(&event).is_none());
    assert_eq!(recorded(&kit).len(), 1); // configure only
}

#[test]
fn test_flag_records_survive_search_classification() {
    let mut kit = configured_kit();

    let event = AppEvent::new(EventKind::Search, "find-shoes")
        .with_flag(CUSTOM_FLAG_IAM, Vec::new())
        .with_flag(CUSTOM_FLAG_ENGAGEMENT, vec!["2".to_string()]);

    let reports = kit.log_event(&event).unwrap();
    assert_eq!(reports.len(), 3);

    let calls = &recorded(&kit)[1..];
    assert_eq!(
        calls,
        &[
            Call::TrackEvent {
                name: "find-shoes".to_string(),
                properties: None,
            },
            Call::TrackEngagement {
                metric: 2,
                properties: None,
            },
            Call::TrackEvent {
                name: "$Searched".to_string(),
                properties: None,
            },
        ]
    );
}

#[test]
fn test_flag_records_discarded_on_unhandled_kind() {
    let mut kit = configured_kit();

    let event = AppEvent::new(EventKind::Navigation, "promo-shown")
        .with_flag(CUSTOM_FLAG_IAM, Vec::new());

    // The IAM vendor call fired, but the host sees "not handled"
    assert!(kit.log_event(&event).is_none());
    assert_eq!(
        recorded(&kit)[1],
        Call::TrackEvent {
            name: "promo-shown".to_string(),
            properties: None,
        }
    );
}

#[test]
fn test_invalid_engagement_code_makes_no_call() {
    let mut kit = configured_kit();

    let event = AppEvent::new(EventKind::Navigation, "promo-shown")
        .with_flag(CUSTOM_FLAG_ENGAGEMENT, vec!["abc".to_string()]);

    assert!(kit.log_event(&event).is_none());
    assert_eq!(recorded(&kit).len(), 1); // configure only
}

#[test]
fn test_identity_round_trip() {
    let mut kit = configured_kit();

    let identities = UserIdentities::from([
        (IdentityType::CustomerId, "cust-42".to_string()),
        (IdentityType::Email, "a@example.com".to_string()),
    ]);

    kit.on_login_completed(&identities);
    kit.on_logout_completed();
    // Logout is unconditional: repeat without a prior login
    kit.on_logout_completed();

    assert_eq!(
        &recorded(&kit)[1..],
        &[
            Call::RegisterUserId("cust-42".to_string()),
            Call::UnregisterUserId,
            Call::UnregisterUserId,
        ]
    );
}

#[test]
fn test_push_flow() {
    let mut kit = configured_kit();

    let owned = PushIntent::new().with_extra("ei", "x123");
    let unrelated = PushIntent::new().with_extra("other", "y");

    assert!(kit.will_handle_push_message(&owned));
    assert!(!kit.will_handle_push_message(&unrelated));

    let context = PlatformContext {
        package_name: "com.example.app".to_string(),
    };
    kit.on_push_message_received(&context, &owned);

    assert!(kit.on_push_registration("token-abc", "12345"));

    assert_eq!(
        &recorded(&kit)[1..],
        &[
            Call::Broadcast {
                package_name: "com.example.app".to_string(),
                engagement_id: Some("x123".to_string()),
            },
            Call::SetDeviceToken("token-abc".to_string()),
            Call::RegisterApp,
        ]
    );
}
