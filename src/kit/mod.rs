//! Kit - the adapter owning the vendor client.
//!
//! `ResponsysKit` owns the vendor client behind an explicit
//! configured/unconfigured state and receives every host callback on the
//! calling thread. Subsystems (commerce mapper, generic event mapper, custom
//! flag interpreter, identity bridge, push router) are sibling files with
//! impl blocks on the kit, not separate actors.

pub mod commerce;
pub mod events;
pub mod flags;
pub mod identity;
pub mod push;

use std::collections::HashMap;

use crate::events::ReportingMessage;
use crate::types::{Error, KitSettings, Result};
use crate::vendor::ResponsysClient;

/// Vendor client handle: fully configured or absent, nothing in between.
///
/// All vendor-facing operations check this explicitly and no-op when
/// unconfigured; no call site dereferences a maybe-null handle.
#[derive(Debug)]
pub enum ClientState<C> {
    Unconfigured,
    Configured(C),
}

impl<C> ClientState<C> {
    fn configured_mut(&mut self) -> Option<&mut C> {
        match self {
            Self::Configured(client) => Some(client),
            Self::Unconfigured => None,
        }
    }

    fn configured(&self) -> Option<&C> {
        match self {
            Self::Configured(client) => Some(client),
            Self::Unconfigured => None,
        }
    }
}

/// The Responsys integration kit.
///
/// Generic over the vendor client so tests can substitute a mock; the
/// embedding application supplies the real SDK binding.
#[derive(Debug)]
pub struct ResponsysKit<C> {
    pub(crate) client: ClientState<C>,
}

impl<C> ResponsysKit<C> {
    /// Create an unconfigured kit. No vendor-facing callback acts until
    /// [`configure`](ResponsysKit::configure) succeeds.
    pub fn new() -> Self {
        Self {
            client: ClientState::Unconfigured,
        }
    }

    /// Integration name reported to the host framework.
    pub fn name(&self) -> &'static str {
        crate::KIT_NAME
    }

    /// The configured vendor client, if any.
    pub fn instance(&self) -> Option<&C> {
        self.client.configured()
    }
}

impl<C> Default for ResponsysKit<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Validate the host settings map and configure the vendor client.
    ///
    /// All five credentials are required; the vendor `configure` call is made
    /// with them in its fixed argument order. Any failure is fatal for this
    /// kit instance; there are no retries. On success the client is stored
    /// and an empty reporting list is returned to the host.
    pub fn configure(
        &mut self,
        settings: &HashMap<String, String>,
        mut client: C,
    ) -> Result<Vec<ReportingMessage>> {
        tracing::debug!("Responsys kit detected");
        let settings = KitSettings::from_map(settings)?;

        tracing::trace!(
            api_key = %settings.api_key,
            account_token = %settings.account_token,
            sender_id = %settings.sender_id,
            conversion_url = %settings.conversion_url,
            ri_app_id = %settings.ri_app_id,
            "configuring vendor SDK"
        );

        let configured = client.configure(
            &settings.api_key,
            &settings.account_token,
            &settings.sender_id,
            &settings.conversion_url,
            &settings.ri_app_id,
        );
        if !configured {
            return Err(Error::configuration("Responsys SDK configuration failed"));
        }

        self.client = ClientState::Configured(client);
        Ok(Vec::new())
    }

    /// Opt-out is acknowledged but not forwarded; the vendor SDK has no
    /// counterpart call on this surface.
    pub fn set_opt_out(&mut self, opted_out: bool) -> bool {
        tracing::debug!(opted_out, "opt-out acknowledged");
        true
    }

    /// Lifetime-value increases are not forwarded.
    pub fn log_ltv_increase(
        &mut self,
        _increase: f64,
        _total: f64,
        _name: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Breadcrumbs are not forwarded.
    pub fn leave_breadcrumb(&mut self, _breadcrumb: &str) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Host error reports are not forwarded.
    pub fn log_error(
        &mut self,
        _message: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Host exception reports are not forwarded.
    pub fn log_exception(
        &mut self,
        _message: &str,
        _attributes: &HashMap<String, String>,
        _description: &str,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }

    /// Screen views are not forwarded.
    pub fn log_screen(
        &mut self,
        _screen_name: &str,
        _attributes: &HashMap<String, String>,
    ) -> Vec<ReportingMessage> {
        Vec::new()
    }
}
