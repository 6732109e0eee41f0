//! Core types for the Responsys kit.
//!
//! This module provides foundational types used throughout the kit:
//! - **Errors**: Application error types with thiserror derives
//! - **Config**: The five-credential settings record parsed from the host

mod config;
mod errors;

pub use config::KitSettings;
pub use errors::{Error, Result};
