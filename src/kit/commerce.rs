//! Commerce event classifier & mapper.
//!
//! A mapped product action fans out to one vendor track call per line item;
//! a purchase additionally records the purchase engagement metric per line
//! item. The whole event yields exactly one audit record, never one per
//! product.

use crate::events::translation::{commerce_event_name, product_properties};
use crate::events::{CommerceEvent, ProductAction, ReportingMessage};
use crate::kit::ResponsysKit;
use crate::vendor::{engagement, ResponsysClient};

impl<C: ResponsysClient> ResponsysKit<C> {
    /// Translate a host commerce event into vendor calls.
    ///
    /// Returns `None` ("not handled") when the action is absent or unmapped,
    /// the product list is empty, or the kit is unconfigured; no partial
    /// output is produced in those cases.
    pub fn log_commerce_event(&mut self, event: &CommerceEvent) -> Option<Vec<ReportingMessage>> {
        let action = event.action?;
        tracing::debug!(?action, products = event.products.len(), "commerce event");

        let vendor_event = commerce_event_name(action)?;
        if event.products.is_empty() {
            return None;
        }

        let Some(client) = self.client.configured_mut() else {
            tracing::debug!("vendor client not configured, commerce event dropped");
            return None;
        };

        for product in &event.products {
            let properties = product_properties(product, &event.custom_attributes);
            client.track_event(vendor_event, Some(properties));

            if action == ProductAction::Purchase {
                client.track_engagement(
                    engagement::PURCHASE,
                    Some(event.custom_attributes.clone()),
                    None,
                );
            }
        }

        Some(vec![ReportingMessage::from_commerce_event(vendor_event)])
    }
}
