//! Litchi Style - cell styles and number formats for legacy Excel workbooks
//!
//! This library models cell formatting, encodes it as BIFF5/BIFF8 XF records
//! and renders values under Excel number-format codes.
//!
//! # Features
//!
//! - **Style model**: alignment, borders, fill, protection and number format
//!   components with single-owner publication slots
//! - **XF encoder**: bit-exact BIFF5 (20 byte) and BIFF8 (24 byte) XF records
//! - **XF table**: content-hash interning of styles into XF indices
//! - **Number formats**: sections, colors, dates, percentages, fractions,
//!   scientific and grouped numeric masks
//! - **Style definitions**: apply structured (YAML) style definitions
//!
//! # Example - Encoding a cell style
//!
//! ```rust
//! use litchi_style::common::RGBColor;
//! use litchi_style::style::{BorderStyle, Fill, Style};
//! use litchi_style::xls::{BiffVersion, XfIndices, XfKind, encode_xf};
//!
//! let mut style = Style::new();
//! style.borders_mut().bottom_mut().style = BorderStyle::Thin;
//! *style.fill_mut() = Fill::solid(RGBColor::new(255, 255, 0));
//!
//! let record = encode_xf(&style, XfIndices::new(0, 164), BiffVersion::Biff8, XfKind::Cell);
//! assert_eq!(&record[..4], &[0xE0, 0x00, 0x14, 0x00]);
//! ```
//!
//! # Example - Formatting numbers
//!
//! ```rust
//! use litchi_style::numfmt::{NumberFormatter, NumberLocale};
//!
//! let formatter = NumberFormatter::new(NumberLocale::en_us());
//! assert_eq!(formatter.format(1234.5, "#,##0.00", None), "1,234.50");
//! assert_eq!(formatter.format(45000.0, "yyyy-mm-dd", None), "2023-03-15");
//! assert_eq!(formatter.format_builtin(0.25, 9, None), "25%");
//! ```

/// Shared color and error types
pub mod common;

/// Number-format interpreter
///
/// Renders numeric values under Excel format codes and resolves built-in
/// format indices.
pub mod numfmt;

/// Cell style model
pub mod style;

/// BIFF5/BIFF8 XF records
pub mod xls;

// Re-export commonly used types for convenience
pub use common::{Error, RGBColor, Result};
pub use numfmt::{NumberFormatter, NumberLocale, to_formatted_string};
pub use style::{Style, StyleDefinition};
pub use xls::{BiffVersion, XfIndices, XfKind, XfTable, encode_xf};
