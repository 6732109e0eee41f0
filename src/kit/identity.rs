//! Identity bridge.
//!
//! Mirrors host identity lifecycle transitions into the vendor client. No
//! transition state is kept between callbacks; each one reads only the
//! identity set it is handed.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::kit::ResponsysKit;
use crate::validation::is_blank;
use crate::vendor::ResponsysClient;

/// Host identity taxonomy. The kit reads only the `CustomerId` entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IdentityType {
    CustomerId,
    Email,
    Alias,
    Facebook,
    Google,
    Microsoft,
    Twitter,
    Yahoo,
    Other,
}

/// Identity set supplied by the host on lifecycle transitions.
pub type UserIdentities = HashMap<IdentityType, String>;

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Login completed: register the customer identifier with the vendor,
    /// when one is present and non-blank.
    pub fn on_login_completed(&mut self, identities: &UserIdentities) {
        tracing::debug!("login completed");
        let Some(client) = self.client.configured_mut() else {
            return;
        };
        if let Some(user_id) = identities.get(&IdentityType::CustomerId) {
            if !is_blank(Some(user_id)) {
                client.register_user_id(user_id);
            }
        }
    }

    /// Logout completed: unconditionally clear the registered identifier.
    pub fn on_logout_completed(&mut self) {
        tracing::debug!("logout completed");
        if let Some(client) = self.client.configured_mut() {
            client.unregister_user_id();
        }
    }

    /// Reserved; not mapped to any vendor call today.
    pub fn on_identify_completed(&mut self, _identities: &UserIdentities) {}

    /// Reserved; not mapped to any vendor call today.
    pub fn on_modify_completed(&mut self, _identities: &UserIdentities) {}

    /// Reserved; not mapped to any vendor call today.
    pub fn on_user_identified(&mut self, _identities: &UserIdentities) {}
}
