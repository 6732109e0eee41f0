//! Application error types.
//!
//! All errors use `thiserror` for automatic Error trait derivation and provide
//! clear error messages with context.

use thiserror::Error;

/// Application result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Main error enum for the Responsys kit.
///
/// Only `Configuration` is ever surfaced to the host: it is fatal and stops
/// kit initialization. Everything after configuration recovers locally or
/// signals "nothing to do" with `None`/`false` returns.
#[derive(Error, Debug)]
pub enum Error {
    /// Missing or blank required setting, or the vendor SDK rejecting its
    /// configuration call. Fatal; the kit cannot start.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Malformed host input outside the configuration path.
    #[error("validation error: {0}")]
    Validation(String),
}

// Convenience constructors
impl Error {
    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }
}
