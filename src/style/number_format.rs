//! Number format component of a cell style.

use crate::numfmt::{BuiltinFormats, FORMAT_GENERAL};

/// Number format information.
///
/// Excel number formats control how cell values are displayed. Built-in
/// formats carry their reserved index; custom codes have none and receive a
/// table index from the workbook layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NumberFormat {
    code: String,
    builtin_id: Option<u16>,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            code: FORMAT_GENERAL.to_string(),
            builtin_id: Some(0),
        }
    }
}

impl NumberFormat {
    /// Create a number format from a format code, resolving its built-in index.
    pub fn new(code: impl Into<String>) -> Self {
        let mut format = Self::default();
        format.set_format_code(code);
        format
    }

    /// Create a number format from a built-in index.
    ///
    /// Unknown indices fall back to `General`.
    pub fn from_builtin(id: u16) -> Self {
        match BuiltinFormats::shared().code(id) {
            Some(code) => Self {
                code: code.to_string(),
                builtin_id: Some(id),
            },
            None => {
                log::debug!("unknown built-in number format {}, using General", id);
                Self::default()
            },
        }
    }

    #[inline]
    pub fn format_code(&self) -> &str {
        &self.code
    }

    /// Replace the format code; an empty code means `General`.
    pub fn set_format_code(&mut self, code: impl Into<String>) -> &mut Self {
        let mut code = code.into();
        if code.is_empty() {
            code = FORMAT_GENERAL.to_string();
        }
        self.builtin_id = BuiltinFormats::shared().index_of(&code);
        self.code = code;
        self
    }

    /// Built-in index, `None` for custom codes.
    #[inline]
    pub fn builtin_id(&self) -> Option<u16> {
        self.builtin_id
    }

    #[inline]
    pub fn is_builtin(&self) -> bool {
        self.builtin_id.is_some()
    }
}
