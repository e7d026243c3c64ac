//! Common types shared across the crate.

// Submodule declarations
pub mod color;
pub mod error;

// Re-exports for convenience
pub use color::RGBColor;
pub use error::{Error, Result};
