//! Push intent router.
//!
//! Decides which inbound push intents belong to this kit and forwards the
//! qualifying ones to the vendor's broadcast entry point. Registration
//! callbacks pass the device token straight through; the vendor call's own
//! outcome is not surfaced at this layer.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kit::ResponsysKit;
use crate::validation::is_blank;
use crate::vendor::ResponsysClient;

/// Intent extra that marks a push message as vendor-owned.
pub const ENGAGEMENT_ID_EXTRA: &str = "ei";

/// Opaque platform intent: an optional action plus string-keyed extras.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PushIntent {
    /// Platform intent action, when one was set.
    pub action: Option<String>,

    /// String-keyed intent extras.
    #[serde(default)]
    pub extras: HashMap<String, String>,
}

impl PushIntent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an extra.
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.extras.insert(key.into(), value.into());
        self
    }

    /// Look up an extra by key.
    pub fn extra(&self, key: &str) -> Option<&str> {
        self.extras.get(key).map(String::as_str)
    }
}

/// Platform context the vendor broadcast entry point is bound to.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlatformContext {
    /// Embedding application package name.
    pub package_name: String,
}

/// True when the intent carries a non-blank vendor engagement id; this is
/// how vendor push intents are told apart from unrelated app intents.
fn is_responsys_push(intent: &PushIntent) -> bool {
    !is_blank(intent.extra(ENGAGEMENT_ID_EXTRA))
}

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Should this kit claim the inbound push intent?
    pub fn will_handle_push_message(&self, intent: &PushIntent) -> bool {
        tracing::trace!("push ownership query");
        is_responsys_push(intent)
    }

    /// Forward a claimed push message to the vendor broadcast receiver,
    /// bound to the current platform context.
    pub fn on_push_message_received(&mut self, context: &PlatformContext, intent: &PushIntent) {
        tracing::trace!("push message received");
        if let Some(client) = self.client.configured_mut() {
            let forwarded = intent.clone();
            client.handle_push_broadcast(context, forwarded);
        }
    }

    /// Push registration callback: hand the device token to the vendor and
    /// trigger its app registration. Registration at this layer always
    /// succeeds; the vendor call's outcome is not surfaced.
    pub fn on_push_registration(&mut self, instance_id: &str, sender_id: &str) -> bool {
        tracing::debug!(instance_id, sender_id, "push registration");
        if let Some(client) = self.client.configured_mut() {
            client.set_device_token(instance_id);
            client.register_app();
        }
        true
    }
}
