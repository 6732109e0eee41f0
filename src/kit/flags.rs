//! Custom flag interpreter.
//!
//! Two reserved flag keys act as out-of-band directives on any generic
//! event. The checks are independent; both may fire for the same event,
//! producing up to two audit records before kind-based classification runs.

use crate::events::{AppEvent, ReportingMessage};
use crate::kit::ResponsysKit;
use crate::vendor::ResponsysClient;

/// Immediate-action-message marker. Key presence alone (value ignored)
/// replays the event under its own name as a vendor event.
pub const CUSTOM_FLAG_IAM: &str = "Responsys.Custom.iam";

/// Engagement-type marker. The first list value is a decimal engagement
/// metric code.
pub const CUSTOM_FLAG_ENGAGEMENT: &str = "Responsys.Custom.e";

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Scan an event's custom flags for the reserved directives and trigger
    /// the corresponding vendor calls.
    ///
    /// A non-numeric engagement code is logged and skipped; it never
    /// produces a call, a record, or a panic.
    pub(crate) fn process_custom_flags(&mut self, event: &AppEvent) -> Vec<ReportingMessage> {
        let mut reports = Vec::new();
        let Some(client) = self.client.configured_mut() else {
            return reports;
        };

        if event.custom_flags.contains_key(CUSTOM_FLAG_IAM) {
            tracing::trace!(name = %event.name, "immediate-action-message flag");
            client.track_event(&event.name, None);
            reports.push(ReportingMessage::from_event(event));
        }

        if let Some(values) = event.custom_flags.get(CUSTOM_FLAG_ENGAGEMENT) {
            if let Some(raw) = values.first() {
                match raw.parse::<i32>() {
                    Ok(metric) => {
                        tracing::trace!(metric, "engagement flag");
                        client.track_engagement(metric, None, None);
                        reports.push(ReportingMessage::from_event(event));
                    }
                    Err(_) => {
                        tracing::error!("invalid engagement type: {raw}");
                        tracing::error!(
                            "supported engagement types are the vendor::engagement metric constants"
                        );
                    }
                }
            }
        }

        reports
    }
}
