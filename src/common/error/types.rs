//! Unified error types for litchi-style.
//!
//! Only malformed configuration and out-of-range scalar input surface as errors.
//! Unrecognized enum names and format masks that do not match an expected
//! pattern are absorbed by documented defaults instead.
use thiserror::Error;

/// Main error type for style and record operations.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error while writing records
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed input passed to a structured "apply styles" entry point
    #[error("Invalid style configuration: {0}")]
    Configuration(String),

    /// Scalar input outside of its valid domain
    #[error("{field} out of range: {value} (allowed: {allowed})")]
    DomainRange {
        field: &'static str,
        value: i64,
        allowed: &'static str,
    },
}

/// Result type for litchi-style operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub(crate) fn configuration(message: impl Into<String>) -> Self {
        Error::Configuration(message.into())
    }
}
