//! Cell alignment information.

use crate::common::{Error, Result};
use phf::phf_map;

/// Horizontal alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlignment {
    #[default]
    General,
    Left,
    Center,
    Right,
    Fill,
    Justify,
    CenterContinuous,
    Distributed,
}

static HORIZONTAL_NAMES: phf::Map<&'static str, HorizontalAlignment> = phf_map! {
    "general" => HorizontalAlignment::General,
    "left" => HorizontalAlignment::Left,
    "center" => HorizontalAlignment::Center,
    "right" => HorizontalAlignment::Right,
    "fill" => HorizontalAlignment::Fill,
    "justify" => HorizontalAlignment::Justify,
    "centercontinuous" => HorizontalAlignment::CenterContinuous,
    "distributed" => HorizontalAlignment::Distributed,
};

impl HorizontalAlignment {
    /// Parse an alignment name (case-insensitive, e.g. `"centerContinuous"`).
    ///
    /// Unknown names fall back to [`HorizontalAlignment::General`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&HORIZONTAL_NAMES, name, "horizontal alignment")
    }

    /// Whether an indent may be combined with this alignment.
    #[inline]
    pub fn allows_indent(self) -> bool {
        matches!(
            self,
            HorizontalAlignment::General | HorizontalAlignment::Left | HorizontalAlignment::Right
        )
    }
}

/// Vertical alignment of cell content.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlignment {
    Top,
    Center,
    #[default]
    Bottom,
    Justify,
    Distributed,
}

static VERTICAL_NAMES: phf::Map<&'static str, VerticalAlignment> = phf_map! {
    "top" => VerticalAlignment::Top,
    "center" => VerticalAlignment::Center,
    "bottom" => VerticalAlignment::Bottom,
    "justify" => VerticalAlignment::Justify,
    "distributed" => VerticalAlignment::Distributed,
};

impl VerticalAlignment {
    /// Parse an alignment name; unknown names fall back to [`VerticalAlignment::Bottom`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&VERTICAL_NAMES, name, "vertical alignment")
    }
}

/// Largest indent level the XF record can carry.
pub const MAX_INDENT: u8 = 15;

/// Rotation value that stacks letters vertically.
pub const STACKED_TEXT_ROTATION: i16 = -165;

/// Alignment information for cell content.
///
/// Fields are private so that the rotation range and the indent rule are
/// enforced by the setters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Alignment {
    horizontal: HorizontalAlignment,
    vertical: VerticalAlignment,
    text_rotation: i16,
    wrap_text: bool,
    shrink_to_fit: bool,
    indent: u8,
}

impl Alignment {
    /// Create a new default alignment (general / bottom).
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn horizontal(&self) -> HorizontalAlignment {
        self.horizontal
    }

    /// Set the horizontal alignment.
    ///
    /// Switching to an alignment that does not support indentation resets the
    /// indent to 0.
    pub fn set_horizontal(&mut self, horizontal: HorizontalAlignment) -> &mut Self {
        self.horizontal = horizontal;
        if !horizontal.allows_indent() {
            self.indent = 0;
        }
        self
    }

    #[inline]
    pub fn vertical(&self) -> VerticalAlignment {
        self.vertical
    }

    pub fn set_vertical(&mut self, vertical: VerticalAlignment) -> &mut Self {
        self.vertical = vertical;
        self
    }

    /// Text rotation in degrees; `-165` means stacked text.
    #[inline]
    pub fn text_rotation(&self) -> i16 {
        self.text_rotation
    }

    /// Set the text rotation.
    ///
    /// Valid values are `-90..=90` and [`STACKED_TEXT_ROTATION`]. Anything else
    /// is rejected and leaves the alignment untouched.
    pub fn set_text_rotation(&mut self, rotation: i16) -> Result<&mut Self> {
        validate_text_rotation(rotation)?;
        self.text_rotation = rotation;
        Ok(self)
    }

    #[inline]
    pub fn wrap_text(&self) -> bool {
        self.wrap_text
    }

    pub fn set_wrap_text(&mut self, wrap: bool) -> &mut Self {
        self.wrap_text = wrap;
        self
    }

    #[inline]
    pub fn shrink_to_fit(&self) -> bool {
        self.shrink_to_fit
    }

    pub fn set_shrink_to_fit(&mut self, shrink: bool) -> &mut Self {
        self.shrink_to_fit = shrink;
        self
    }

    #[inline]
    pub fn indent(&self) -> u8 {
        self.indent
    }

    /// Set the indent level.
    ///
    /// The indent is forced to 0 unless the horizontal alignment is general,
    /// left or right, and clamped to [`MAX_INDENT`].
    pub fn set_indent(&mut self, indent: u8) -> &mut Self {
        self.indent = if self.horizontal.allows_indent() {
            if indent > MAX_INDENT {
                log::debug!("indent {} clamped to {}", indent, MAX_INDENT);
            }
            indent.min(MAX_INDENT)
        } else {
            0
        };
        self
    }
}

pub(crate) fn validate_text_rotation(rotation: i16) -> Result<()> {
    if (-90..=90).contains(&rotation) || rotation == STACKED_TEXT_ROTATION {
        Ok(())
    } else {
        Err(Error::DomainRange {
            field: "text rotation",
            value: rotation as i64,
            allowed: "-90..=90 or -165",
        })
    }
}

/// Case-insensitive lookup in a static name table with a logged fallback.
pub(crate) fn lookup_name<T: Copy + Default>(
    table: &phf::Map<&'static str, T>,
    name: &str,
    what: &str,
) -> T {
    let key = name.trim().to_ascii_lowercase();
    match table.get(key.as_str()) {
        Some(value) => *value,
        None => {
            log::debug!("unrecognized {} {:?}, using default", what, name);
            T::default()
        },
    }
}
