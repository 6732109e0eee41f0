//! Event translation — host commerce actions → vendor event names.
//!
//! Pure deterministic mapping. The dispatch is an exhaustive match with a
//! required default arm: unknown product actions are silently filtered to
//! `None` rather than erroring.
//!
//! Translation rules:
//!   add-to-cart      → $AddedItemToCart
//!   remove-from-cart → $RemovedItemFromCart
//!   purchase         → $PurchasedCart
//!   view-detail      → $Browsed
//!   checkout         → $UpdatedStageOfCart
//!   (all others)     → None (not forwarded to the vendor)

use serde_json::Value;
use std::collections::HashMap;

use super::{Product, ProductAction};

/// Vendor commerce event: item added to cart.
pub const ADDED_ITEM_TO_CART: &str = "$AddedItemToCart";
/// Vendor commerce event: item removed from cart.
pub const REMOVED_ITEM_FROM_CART: &str = "$RemovedItemFromCart";
/// Vendor commerce event: cart purchased.
pub const PURCHASED_CART: &str = "$PurchasedCart";
/// Vendor commerce event: product detail browsed.
pub const BROWSED: &str = "$Browsed";
/// Vendor commerce event: checkout stage reached.
pub const UPDATED_STAGE_OF_CART: &str = "$UpdatedStageOfCart";
/// Vendor event for host search events.
pub const SEARCHED: &str = "$Searched";

/// Vendor property key for the product SKU.
pub const PROPERTY_PRODUCT_ID: &str = "Pid";
/// Vendor property key for the product category.
pub const PROPERTY_PRODUCT_CATEGORY: &str = "Pc";

/// Translate a host product action into the vendor commerce event name.
///
/// Returns `None` for actions the vendor has no counterpart for; the caller
/// treats that as "not handled."
pub fn commerce_event_name(action: ProductAction) -> Option<&'static str> {
    match action {
        ProductAction::AddToCart => Some(ADDED_ITEM_TO_CART),
        ProductAction::RemoveFromCart => Some(REMOVED_ITEM_FROM_CART),
        ProductAction::Purchase => Some(PURCHASED_CART),
        ProductAction::ViewDetail => Some(BROWSED),
        ProductAction::Checkout => Some(UPDATED_STAGE_OF_CART),
        // Click, refund, wishlist and checkout-option actions are not
        // forwarded to the vendor
        _ => None,
    }
}

/// Build the vendor property map for one line item.
///
/// `Pid`/`Pc` are set first, then the event's shared custom attributes are
/// merged in. A custom attribute literally named `Pid` or `Pc` overwrites the
/// product fields; collisions are not special-cased.
pub fn product_properties(
    product: &Product,
    custom_attributes: &HashMap<String, String>,
) -> HashMap<String, Value> {
    let mut properties = HashMap::new();
    properties.insert(
        PROPERTY_PRODUCT_ID.to_string(),
        Value::String(product.sku.clone()),
    );
    properties.insert(
        PROPERTY_PRODUCT_CATEGORY.to_string(),
        Value::String(product.category.clone()),
    );
    for (key, value) in custom_attributes {
        properties.insert(key.clone(), Value::String(value.clone()));
    }
    properties
}
