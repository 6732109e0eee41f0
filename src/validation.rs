//! Input validation utilities.

use std::collections::HashMap;

use crate::types::{Error, Result};

/// True when the value is absent, empty, or whitespace-only.
pub fn is_blank(value: Option<&str>) -> bool {
    value.map_or(true, |s| s.trim().is_empty())
}

/// Look up a required setting, failing with a fatal configuration error
/// when the key is missing or blank.
pub fn require_setting<'a>(
    settings: &'a HashMap<String, String>,
    key: &str,
    label: &str,
) -> Result<&'a str> {
    match settings.get(key) {
        Some(value) if !is_blank(Some(value)) => Ok(value),
        _ => Err(Error::configuration(format!("{} is empty", label))),
    }
}
