//! Structured style definitions.
//!
//! A [`StyleDefinition`] describes a partial style the way workbook authoring
//! code usually spells it out (names instead of enums, hex strings instead of
//! colors). [`Style::apply`] validates the whole definition before touching
//! the style, so a rejected definition leaves the style unchanged.
//!
//! ```rust
//! use litchi_style::style::{BorderStyle, Style, StyleDefinition};
//!
//! # fn main() -> litchi_style::Result<()> {
//! let definition = StyleDefinition::from_yaml(
//!     r#"
//! alignment:
//!   horizontal: center
//!   wrapText: true
//! borders:
//!   bottom:
//!     style: double
//!     color: "FF0000"
//! "#,
//! )?;
//!
//! let mut style = Style::new();
//! style.apply(&definition)?;
//! assert_eq!(style.borders().bottom().style, BorderStyle::Double);
//! # Ok(())
//! # }
//! ```

use super::alignment::validate_text_rotation;
use super::{
    Border, BorderSide, BorderStyle, DiagonalDirection, FillType, HorizontalAlignment,
    NumberFormat, ProtectionState, Style, VerticalAlignment,
};
use crate::common::{Error, RGBColor, Result};
use crate::numfmt::BuiltinFormats;
use serde::Deserialize;

/// A partial style; absent fields leave the target untouched.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct StyleDefinition {
    pub alignment: Option<AlignmentDefinition>,
    pub borders: Option<BordersDefinition>,
    pub fill: Option<FillDefinition>,
    pub protection: Option<ProtectionDefinition>,
    pub number_format: Option<NumberFormatDefinition>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct AlignmentDefinition {
    pub horizontal: Option<String>,
    pub vertical: Option<String>,
    pub rotation: Option<i16>,
    pub wrap_text: Option<bool>,
    pub shrink_to_fit: Option<bool>,
    pub indent: Option<u8>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BorderDefinition {
    pub style: Option<String>,
    /// `RRGGBB` or `AARRGGBB`
    pub color: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct BordersDefinition {
    /// Applied to the four outer sides and the inner grid lines
    pub all_borders: Option<BorderDefinition>,
    /// Applied to the four outer sides
    pub outer: Option<BorderDefinition>,
    pub left: Option<BorderDefinition>,
    pub right: Option<BorderDefinition>,
    pub top: Option<BorderDefinition>,
    pub bottom: Option<BorderDefinition>,
    pub diagonal: Option<BorderDefinition>,
    pub vertical: Option<BorderDefinition>,
    pub horizontal: Option<BorderDefinition>,
    pub diagonal_direction: Option<String>,
    pub outline: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct FillDefinition {
    #[serde(rename = "type")]
    pub fill_type: Option<String>,
    pub start_color: Option<String>,
    pub end_color: Option<String>,
    pub rotation: Option<u16>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ProtectionDefinition {
    pub locked: Option<String>,
    pub hidden: Option<String>,
}

/// Either a format code or a built-in index, not both.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct NumberFormatDefinition {
    pub code: Option<String>,
    pub builtin: Option<u16>,
}

impl StyleDefinition {
    /// Parse a definition from a YAML document.
    #[cfg(feature = "yaml")]
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_saphyr::from_str(yaml).map_err(|e| {
            Error::configuration(format!("malformed style definition: {}", e))
        })
    }
}

/// Border update with colors already parsed.
#[derive(Debug, Clone, Copy)]
struct BorderUpdate {
    style: Option<BorderStyle>,
    color: Option<RGBColor>,
}

impl BorderUpdate {
    fn apply_to(&self, border: &mut Border) {
        if let Some(style) = self.style {
            border.style = style;
        }
        if let Some(color) = self.color {
            border.color = color;
        }
    }
}

#[derive(Debug, Clone, Copy)]
enum BorderTarget {
    All,
    Outer,
    Side(BorderSide),
}

fn parse_color(value: Option<&String>, field: &str) -> Result<Option<RGBColor>> {
    value
        .map(|hex| {
            RGBColor::from_hex(hex).ok_or_else(|| {
                Error::configuration(format!("{}: malformed color {:?}", field, hex))
            })
        })
        .transpose()
}

fn resolve_border(definition: &BorderDefinition, field: &str) -> Result<BorderUpdate> {
    Ok(BorderUpdate {
        style: definition.style.as_deref().map(BorderStyle::from_name),
        color: parse_color(definition.color.as_ref(), field)?,
    })
}

fn resolve_borders(definition: &BordersDefinition) -> Result<Vec<(BorderTarget, BorderUpdate)>> {
    // General groups first so that individual sides override them
    let entries = [
        (BorderTarget::All, &definition.all_borders, "borders.allBorders"),
        (BorderTarget::Outer, &definition.outer, "borders.outer"),
        (BorderTarget::Side(BorderSide::Left), &definition.left, "borders.left"),
        (BorderTarget::Side(BorderSide::Right), &definition.right, "borders.right"),
        (BorderTarget::Side(BorderSide::Top), &definition.top, "borders.top"),
        (BorderTarget::Side(BorderSide::Bottom), &definition.bottom, "borders.bottom"),
        (BorderTarget::Side(BorderSide::Diagonal), &definition.diagonal, "borders.diagonal"),
        (BorderTarget::Side(BorderSide::Vertical), &definition.vertical, "borders.vertical"),
        (
            BorderTarget::Side(BorderSide::Horizontal),
            &definition.horizontal,
            "borders.horizontal",
        ),
    ];

    let mut updates = Vec::new();
    for (target, border, field) in entries {
        if let Some(border) = border {
            updates.push((target, resolve_border(border, field)?));
        }
    }
    Ok(updates)
}

fn resolve_number_format(definition: &NumberFormatDefinition) -> Result<Option<NumberFormat>> {
    match (&definition.code, definition.builtin) {
        (Some(_), Some(_)) => Err(Error::configuration(
            "numberFormat: specify either code or builtin, not both",
        )),
        (Some(code), None) => Ok(Some(NumberFormat::new(code.as_str()))),
        (None, Some(id)) => {
            if BuiltinFormats::shared().code(id).is_none() {
                return Err(Error::configuration(format!(
                    "numberFormat: unknown built-in index {}",
                    id
                )));
            }
            Ok(Some(NumberFormat::from_builtin(id)))
        },
        (None, None) => Ok(None),
    }
}

impl Style {
    /// Apply a structured definition.
    ///
    /// Every field is validated first; on error the style is left untouched.
    /// Only the components the definition mentions are published.
    pub fn apply(&mut self, definition: &StyleDefinition) -> Result<()> {
        // Validation pass
        if let Some(rotation) = definition.alignment.as_ref().and_then(|a| a.rotation) {
            validate_text_rotation(rotation)?;
        }
        let border_updates = definition
            .borders
            .as_ref()
            .map(resolve_borders)
            .transpose()?;
        let fill_colors = match &definition.fill {
            Some(fill) => Some((
                parse_color(fill.start_color.as_ref(), "fill.startColor")?,
                parse_color(fill.end_color.as_ref(), "fill.endColor")?,
            )),
            None => None,
        };
        let number_format = match &definition.number_format {
            Some(number_format) => resolve_number_format(number_format)?,
            None => None,
        };

        // Mutation pass, infallible from here on
        if let Some(alignment) = &definition.alignment {
            let target = self.alignment_mut();
            if let Some(horizontal) = &alignment.horizontal {
                target.set_horizontal(HorizontalAlignment::from_name(horizontal));
            }
            if let Some(vertical) = &alignment.vertical {
                target.set_vertical(VerticalAlignment::from_name(vertical));
            }
            if let Some(rotation) = alignment.rotation {
                target.set_text_rotation(rotation)?;
            }
            if let Some(wrap) = alignment.wrap_text {
                target.set_wrap_text(wrap);
            }
            if let Some(shrink) = alignment.shrink_to_fit {
                target.set_shrink_to_fit(shrink);
            }
            if let Some(indent) = alignment.indent {
                target.set_indent(indent);
            }
        }

        if let (Some(borders), Some(updates)) = (&definition.borders, border_updates) {
            let target = self.borders_mut();
            for (side, update) in updates {
                match side {
                    BorderTarget::All => {
                        for side in [
                            BorderSide::Left,
                            BorderSide::Right,
                            BorderSide::Top,
                            BorderSide::Bottom,
                            BorderSide::Vertical,
                            BorderSide::Horizontal,
                        ] {
                            update.apply_to(target.side_mut(side));
                        }
                    },
                    BorderTarget::Outer => {
                        for side in [
                            BorderSide::Left,
                            BorderSide::Right,
                            BorderSide::Top,
                            BorderSide::Bottom,
                        ] {
                            update.apply_to(target.side_mut(side));
                        }
                    },
                    BorderTarget::Side(side) => update.apply_to(target.side_mut(side)),
                }
            }
            if let Some(direction) = &borders.diagonal_direction {
                target.set_diagonal_direction(DiagonalDirection::from_name(direction));
            }
            if let Some(outline) = borders.outline {
                target.set_outline(outline);
            }
        }

        if let (Some(fill), Some((start, end))) = (&definition.fill, fill_colors) {
            let target = self.fill_mut();
            if let Some(fill_type) = &fill.fill_type {
                target.fill_type = FillType::from_name(fill_type);
            }
            if let Some(start) = start {
                target.start_color = start;
            }
            if let Some(end) = end {
                target.end_color = end;
            }
            if let Some(rotation) = fill.rotation {
                target.rotation = rotation;
            }
        }

        if let Some(protection) = &definition.protection {
            let target = self.protection_mut();
            if let Some(locked) = &protection.locked {
                target.locked = ProtectionState::from_name(locked);
            }
            if let Some(hidden) = &protection.hidden {
                target.hidden = ProtectionState::from_name(hidden);
            }
        }

        if let Some(number_format) = number_format {
            *self.number_format_mut() = number_format;
        }

        Ok(())
    }

    /// Parse a YAML definition and apply it.
    #[cfg(feature = "yaml")]
    pub fn apply_yaml(&mut self, yaml: &str) -> Result<()> {
        let definition = StyleDefinition::from_yaml(yaml)?;
        self.apply(&definition)
    }
}
