//! Workbook XF table.
//!
//! Interns styles into XF indices and writes the whole table in index order.
//! The first 21 entries are fixed:
//!
//! - 0..=14: default style XFs (1, 2 use font 1; 3, 4 use font 2)
//! - 15: default cell XF
//! - 16..=20: built-in style XFs for the comma, currency and percent styles
//!
//! Cell XFs registered through [`XfTable::intern`] follow. Styles with equal
//! content and indices share one entry.

use super::xf::{BiffVersion, XfIndices, XfKind, XfRecord};
use crate::common::{Error, Result};
use crate::style::Style;
use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::io::Write;

/// Number of default style XFs.
pub const STYLE_XF_COUNT: u16 = 15;
/// Index of the default cell XF.
pub const DEFAULT_CELL_XF_INDEX: u16 = STYLE_XF_COUNT;
/// Number formats of the built-in style XFs following the default cell XF.
pub const BUILTIN_STYLE_FORMATS: [u16; 5] = [0x002B, 0x0029, 0x002C, 0x002A, 0x0009];
/// First index handed out to interned cell XFs.
pub const FIRST_USER_XF_INDEX: u16 = DEFAULT_CELL_XF_INDEX + 1 + BUILTIN_STYLE_FORMATS.len() as u16;
/// Largest XF count Excel accepts.
pub const MAX_XF_COUNT: usize = 4050;

/// One XF table entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct XfEntry {
    pub style: Style,
    pub indices: XfIndices,
    pub kind: XfKind,
}

impl XfEntry {
    pub fn record(&self) -> XfRecord<'_> {
        XfRecord::new(&self.style, self.indices, self.kind)
    }
}

/// XF records of one workbook.
#[derive(Debug, Clone)]
pub struct XfTable {
    version: BiffVersion,
    entries: Vec<XfEntry>,
    // content hash -> indices of entries with that hash
    lookup: HashMap<u64, Vec<u16>>,
}

impl XfTable {
    /// Create a table holding the fixed default entries.
    pub fn new(version: BiffVersion) -> Self {
        let mut table = Self {
            version,
            entries: Vec::with_capacity(FIRST_USER_XF_INDEX as usize),
            lookup: HashMap::new(),
        };

        for i in 0..STYLE_XF_COUNT {
            let font = match i {
                1 | 2 => 1,
                3 | 4 => 2,
                _ => 0,
            };
            table.push(Style::new(), XfIndices::new(font, 0), XfKind::Style);
        }

        let default_cell = table.push(Style::new(), XfIndices::default(), XfKind::Cell);
        table.register(default_cell);

        for number_format in BUILTIN_STYLE_FORMATS {
            table.push(
                Style::new(),
                XfIndices::new(0, number_format),
                XfKind::Style,
            );
        }

        table
    }

    #[inline]
    pub fn version(&self) -> BiffVersion {
        self.version
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn get(&self, index: u16) -> Option<&XfEntry> {
        self.entries.get(index as usize)
    }

    pub fn iter(&self) -> impl Iterator<Item = &XfEntry> {
        self.entries.iter()
    }

    /// Cell XF index for `style`, adding an entry when no equal one exists.
    ///
    /// A default style with default indices resolves to the default cell XF.
    pub fn intern(&mut self, style: &Style, indices: XfIndices) -> Result<u16> {
        let key = content_key(style, indices, XfKind::Cell);
        if let Some(candidates) = self.lookup.get(&key) {
            for &index in candidates {
                let entry = &self.entries[index as usize];
                if entry.kind == XfKind::Cell && entry.indices == indices && entry.style == *style {
                    return Ok(index);
                }
            }
        }

        if self.entries.len() >= MAX_XF_COUNT {
            return Err(Error::DomainRange {
                field: "XF count",
                value: self.entries.len() as i64 + 1,
                allowed: "1..=4050",
            });
        }

        let index = self.push(style.clone(), indices, XfKind::Cell);
        self.register(index);
        Ok(index)
    }

    /// Write every XF record in index order.
    pub fn write_all<W: Write>(&self, writer: &mut W) -> Result<()> {
        for entry in &self.entries {
            entry.record().write_to(writer, self.version)?;
        }
        Ok(())
    }

    /// Encoded XF records in index order.
    pub fn to_bytes(&self) -> Vec<u8> {
        let record_len = 4 + self.version.xf_payload_len() as usize;
        let mut out = Vec::with_capacity(self.entries.len() * record_len);
        for entry in &self.entries {
            out.extend_from_slice(&entry.record().encode(self.version));
        }
        out
    }

    fn push(&mut self, style: Style, indices: XfIndices, kind: XfKind) -> u16 {
        let index = self.entries.len() as u16;
        self.entries.push(XfEntry {
            style,
            indices,
            kind,
        });
        index
    }

    fn register(&mut self, index: u16) {
        let entry = &self.entries[index as usize];
        let key = content_key(&entry.style, entry.indices, entry.kind);
        self.lookup.entry(key).or_default().push(index);
    }
}

impl Default for XfTable {
    fn default() -> Self {
        Self::new(BiffVersion::default())
    }
}

fn content_key(style: &Style, indices: XfIndices, kind: XfKind) -> u64 {
    let mut hasher = DefaultHasher::new();
    style.hash_code().hash(&mut hasher);
    indices.hash(&mut hasher);
    kind.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{BorderStyle, HorizontalAlignment};

    fn centered() -> Style {
        let mut style = Style::new();
        style
            .alignment_mut()
            .set_horizontal(HorizontalAlignment::Center);
        style
    }

    #[test]
    fn test_default_layout() {
        let table = XfTable::default();
        assert_eq!(table.len(), FIRST_USER_XF_INDEX as usize);
        assert_eq!(table.get(0).unwrap().kind, XfKind::Style);
        assert_eq!(table.get(1).unwrap().indices.font, 1);
        assert_eq!(table.get(4).unwrap().indices.font, 2);
        assert_eq!(table.get(15).unwrap().kind, XfKind::Cell);
        assert_eq!(table.get(20).unwrap().indices.number_format, 0x0009);
        assert!(table.get(21).is_none());
    }

    #[test]
    fn test_default_style_uses_default_cell_xf() {
        let mut table = XfTable::default();
        let index = table.intern(&Style::new(), XfIndices::default()).unwrap();
        assert_eq!(index, DEFAULT_CELL_XF_INDEX);
        assert_eq!(table.len(), FIRST_USER_XF_INDEX as usize);
    }

    #[test]
    fn test_equal_styles_share_index() {
        let mut table = XfTable::default();
        let first = table.intern(&centered(), XfIndices::default()).unwrap();
        let second = table.intern(&centered(), XfIndices::default()).unwrap();
        assert_eq!(first, FIRST_USER_XF_INDEX);
        assert_eq!(first, second);

        let mut bordered = centered();
        bordered.borders_mut().top_mut().style = BorderStyle::Thin;
        let third = table.intern(&bordered, XfIndices::default()).unwrap();
        assert_eq!(third, first + 1);

        // Same style, different font
        let fourth = table.intern(&centered(), XfIndices::new(4, 0)).unwrap();
        assert_eq!(fourth, first + 2);
    }

    #[test]
    fn test_write_all() {
        let mut table = XfTable::new(BiffVersion::Biff8);
        table.intern(&centered(), XfIndices::default()).unwrap();

        let mut out = Vec::new();
        table.write_all(&mut out).unwrap();
        assert_eq!(out.len(), table.len() * 24);
        assert_eq!(out, table.to_bytes());

        // Record 15 is the default cell XF
        let cell = &out[15 * 24..16 * 24];
        assert_eq!(&cell[..4], &[0xE0, 0x00, 0x14, 0x00]);
        assert_eq!(u16::from_le_bytes([cell[8], cell[9]]), 0x0001);
        // Record 0 is a style XF
        assert_eq!(u16::from_le_bytes([out[8], out[9]]), 0xFFF5);
    }

    #[test]
    fn test_biff5_table() {
        let table = XfTable::new(BiffVersion::Biff5);
        assert_eq!(table.to_bytes().len(), table.len() * 20);
    }

    #[test]
    fn test_table_limit() {
        let mut table = XfTable::default();
        let mut result = Ok(0);
        for font in 0..MAX_XF_COUNT as u16 {
            result = table.intern(&Style::new(), XfIndices::new(font + 1, 0));
            if result.is_err() {
                break;
            }
        }
        assert!(matches!(result, Err(Error::DomainRange { .. })));
        assert_eq!(table.len(), MAX_XF_COUNT);
    }
}
