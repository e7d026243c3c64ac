//! Built-in number format registry.
//!
//! Excel reserves small format indices for standard format codes. Indices
//! 23..=26, 28..=29, 31..=35, 41..=43, 51..=56, 58 and 63..=66 are
//! locale-specific and absent here.

use once_cell::sync::Lazy;
use std::collections::{BTreeMap, HashMap};

/// Built-in format codes keyed by their reserved index.
const BUILTIN_FORMAT_CODES: &[(u16, &str)] = &[
    // General
    (0, "General"),
    (1, "0"),
    (2, "0.00"),
    (3, "#,##0"),
    (4, "#,##0.00"),
    (9, "0%"),
    (10, "0.00%"),
    (11, "0.00E+00"),
    (12, "# ?/?"),
    (13, "# ??/??"),
    (14, "mm-dd-yy"),
    (15, "d-mmm-yy"),
    (16, "d-mmm"),
    (17, "mmm-yy"),
    (18, "h:mm AM/PM"),
    (19, "h:mm:ss AM/PM"),
    (20, "h:mm"),
    (21, "h:mm:ss"),
    (22, "m/d/yy h:mm"),
    (27, "[$-404]e/m/d"),
    (30, "m/d/yy"),
    (36, "[$-404]e/m/d"),
    (37, "#,##0 ;(#,##0)"),
    (38, "#,##0 ;[Red](#,##0)"),
    (39, "#,##0.00;(#,##0.00)"),
    (40, "#,##0.00;[Red](#,##0.00)"),
    (44, r#"_("$"* #,##0.00_);_("$"* \(#,##0.00\);_("$"* "-"??_);_(@_)"#),
    (45, "mm:ss"),
    (46, "[h]:mm:ss"),
    (47, "mmss.0"),
    (48, "##0.0E+0"),
    (49, "@"),
    // CHT
    (50, "[$-404]e/m/d"),
    (57, "[$-404]e/m/d"),
    // THA
    (59, "t0"),
    (60, "t0.00"),
    (61, "t#,##0"),
    (62, "t#,##0.00"),
    (67, "t0%"),
    (68, "t0.00%"),
    (69, "t# ?/?"),
    (70, "t# ??/??"),
];

/// Immutable bidirectional map between built-in indices and format codes.
///
/// Several indices share one code; the reverse lookup resolves such codes to
/// the highest index.
#[derive(Debug, Clone)]
pub struct BuiltinFormats {
    by_index: BTreeMap<u16, &'static str>,
    by_code: HashMap<&'static str, u16>,
}

static SHARED: Lazy<BuiltinFormats> = Lazy::new(BuiltinFormats::new);

impl BuiltinFormats {
    /// Build a registry from the standard table.
    pub fn new() -> Self {
        let mut by_index = BTreeMap::new();
        let mut by_code = HashMap::with_capacity(BUILTIN_FORMAT_CODES.len());
        for &(index, code) in BUILTIN_FORMAT_CODES {
            by_index.insert(index, code);
            // Ascending order: later (higher) indices overwrite
            by_code.insert(code, index);
        }
        Self { by_index, by_code }
    }

    /// Process-wide registry, built once on first use.
    #[inline]
    pub fn shared() -> &'static BuiltinFormats {
        &SHARED
    }

    /// Format code for a built-in index.
    #[inline]
    pub fn code(&self, index: u16) -> Option<&'static str> {
        self.by_index.get(&index).copied()
    }

    /// Built-in index for a format code.
    #[inline]
    pub fn index_of(&self, code: &str) -> Option<u16> {
        self.by_code.get(code).copied()
    }

    /// All entries in index order.
    pub fn iter(&self) -> impl Iterator<Item = (u16, &'static str)> + '_ {
        self.by_index.iter().map(|(&index, &code)| (index, code))
    }

    pub fn len(&self) -> usize {
        self.by_index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_index.is_empty()
    }
}

impl Default for BuiltinFormats {
    fn default() -> Self {
        Self::new()
    }
}

/// Format code of a built-in index in the shared registry.
pub fn builtin_format_code(index: u16) -> Option<&'static str> {
    BuiltinFormats::shared().code(index)
}

/// Built-in index of a format code in the shared registry.
pub fn builtin_format_code_index(code: &str) -> Option<u16> {
    BuiltinFormats::shared().index_of(code)
}
