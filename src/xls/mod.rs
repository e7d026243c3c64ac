//! Legacy Excel (BIFF5/BIFF8) style records.
//!
//! This module turns [`Style`](crate::style::Style) values into XF records and
//! writes the protection records that accompany them.
//!
//! # Example
//!
//! ```rust
//! use litchi_style::style::{HorizontalAlignment, Style};
//! use litchi_style::xls::{BiffVersion, XfIndices, XfKind, XfTable, encode_xf};
//!
//! let mut style = Style::new();
//! style.alignment_mut().set_horizontal(HorizontalAlignment::Right);
//!
//! let record = encode_xf(&style, XfIndices::default(), BiffVersion::Biff8, XfKind::Cell);
//! assert_eq!(record.len(), 24);
//!
//! let mut table = XfTable::new(BiffVersion::Biff8);
//! let index = table.intern(&style, XfIndices::default()).unwrap();
//! assert_eq!(table.intern(&style, XfIndices::default()).unwrap(), index);
//! ```

/// BIFF record framing and protection records
pub mod biff;

/// Style enums to BIFF codes
pub mod mapping;

/// Default color palette
pub mod palette;

/// XF record encoder
pub mod xf;

/// XF interning table
pub mod xf_table;

// Re-export public types
pub use biff::{write_protection, write_record, write_record_header};
pub use palette::{AUTOMATIC_BACKGROUND, AUTOMATIC_FOREGROUND, palette_color, palette_index};
pub use xf::{
    Biff5XfPayload, Biff8XfPayload, BiffVersion, UsedAttributes, XfFields, XfIndices, XfKind,
    XfRecord, encode_xf, write_xf,
};
pub use xf_table::{XfEntry, XfTable};
