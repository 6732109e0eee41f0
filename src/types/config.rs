//! Configuration structures.
//!
//! The host framework hands the kit a flat string-keyed settings map; this
//! module parses it into the five-credential record the vendor SDK is
//! configured with. Parsing fails fast — a missing or blank credential is a
//! fatal configuration error, never a recoverable one.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::types::Result;
use crate::validation::require_setting;

/// Settings key for the Responsys API key.
pub const SETTING_API_KEY: &str = "apiKey";
/// Settings key for the Responsys account token.
pub const SETTING_ACCOUNT_TOKEN: &str = "accountToken";
/// Settings key for the conversion URL.
pub const SETTING_CONVERSION_URL: &str = "conversionUrl";
/// Settings key for the RI app id.
pub const SETTING_RI_APP_ID: &str = "riAppId";
/// Settings key for the GCM/FCM sender id.
pub const SETTING_SENDER_ID: &str = "senderId";

/// Vendor SDK credentials, parsed once at kit startup and never mutated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KitSettings {
    /// Responsys API key.
    pub api_key: String,

    /// Responsys account token.
    pub account_token: String,

    /// Conversion tracking URL.
    pub conversion_url: String,

    /// Responsys Interact app id.
    pub ri_app_id: String,

    /// GCM/FCM sender id used for push registration.
    pub sender_id: String,
}

impl KitSettings {
    /// Parse the host's flat settings map.
    ///
    /// All five credentials are required and must be non-blank; the first
    /// missing one fails the whole parse with a fatal configuration error.
    pub fn from_map(settings: &HashMap<String, String>) -> Result<Self> {
        let api_key = require_setting(settings, SETTING_API_KEY, "Responsys API Key")?;
        let account_token =
            require_setting(settings, SETTING_ACCOUNT_TOKEN, "Responsys Account Token")?;
        let conversion_url =
            require_setting(settings, SETTING_CONVERSION_URL, "Responsys Conversion Url")?;
        let ri_app_id = require_setting(settings, SETTING_RI_APP_ID, "Responsys RI App Id")?;
        let sender_id = require_setting(settings, SETTING_SENDER_ID, "GCM/FCM Sender ID")?;

        Ok(Self {
            api_key: api_key.to_string(),
            account_token: account_token.to_string(),
            conversion_url: conversion_url.to_string(),
            ri_app_id: ri_app_id.to_string(),
            sender_id: sender_id.to_string(),
        })
    }
}
