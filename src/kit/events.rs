//! Generic event classifier & mapper.
//!
//! Custom-flag directives are processed first and their audit records
//! collected; kind-based classification runs after. An unhandled kind (or a
//! preference event with no attributes) discards the entire result,
//! including records the flag pass already collected. That all-or-nothing
//! policy is part of the observable contract; partial accumulation would
//! change the host's audit output.

use crate::events::translation::SEARCHED;
use crate::events::{AppEvent, EventKind, ReportingMessage};
use crate::kit::ResponsysKit;
use crate::vendor::{PreferenceType, ResponsysClient};

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Translate a generic host event into vendor calls.
    ///
    /// Returns the union of custom-flag and kind-based audit records, or
    /// `None` when nothing was acted on.
    pub fn log_event(&mut self, event: &AppEvent) -> Option<Vec<ReportingMessage>> {
        let mut reports = self.process_custom_flags(event);
        tracing::debug!(kind = ?event.kind, name = %event.name, "generic event");

        let Some(client) = self.client.configured_mut() else {
            tracing::debug!("vendor client not configured, event dropped");
            return None;
        };

        match event.kind {
            EventKind::Search => {
                client.track_event(SEARCHED, None);
                reports.push(ReportingMessage::from_event(event));
            }
            EventKind::UserPreference => {
                if event.custom_attributes.is_empty() {
                    return None;
                }
                for (key, value) in &event.custom_attributes {
                    let mut result = client.declare_preference(key, key, PreferenceType::String);
                    if result.is_ok() {
                        result = client.set_preference(key, value);
                    }
                    if let Err(err) = result {
                        tracing::debug!(key = %key, "invalid preference: {err}");
                    }
                }
            }
            // Unhandled kinds discard the whole result, flag records included
            _ => return None,
        }

        if reports.is_empty() {
            None
        } else {
            Some(reports)
        }
    }
}
