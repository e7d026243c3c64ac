//! Unified error types for litchi-style.
//!
//! Configuration and domain-range failures share one error type so callers can
//! propagate them from any layer with `?`.

// Submodule declarations
pub mod types;

// Re-exports
pub use types::{Error, Result};
