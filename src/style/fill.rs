//! Cell fill (background) definitions.

use super::alignment::lookup_name;
use crate::common::RGBColor;
use phf::phf_map;

/// Fill pattern type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FillType {
    #[default]
    None,
    Solid,
    GradientLinear,
    GradientPath,
    MediumGray,
    DarkGray,
    LightGray,
    DarkHorizontal,
    DarkVertical,
    DarkDown,
    DarkUp,
    DarkGrid,
    DarkTrellis,
    LightHorizontal,
    LightVertical,
    LightDown,
    LightUp,
    LightGrid,
    LightTrellis,
    Gray125,
    Gray0625,
}

static FILL_TYPE_NAMES: phf::Map<&'static str, FillType> = phf_map! {
    "none" => FillType::None,
    "solid" => FillType::Solid,
    "linear" => FillType::GradientLinear,
    "path" => FillType::GradientPath,
    "mediumgray" => FillType::MediumGray,
    "darkgray" => FillType::DarkGray,
    "lightgray" => FillType::LightGray,
    "darkhorizontal" => FillType::DarkHorizontal,
    "darkvertical" => FillType::DarkVertical,
    "darkdown" => FillType::DarkDown,
    "darkup" => FillType::DarkUp,
    "darkgrid" => FillType::DarkGrid,
    "darktrellis" => FillType::DarkTrellis,
    "lighthorizontal" => FillType::LightHorizontal,
    "lightvertical" => FillType::LightVertical,
    "lightdown" => FillType::LightDown,
    "lightup" => FillType::LightUp,
    "lightgrid" => FillType::LightGrid,
    "lighttrellis" => FillType::LightTrellis,
    "gray125" => FillType::Gray125,
    "gray0625" => FillType::Gray0625,
};

impl FillType {
    /// Parse a fill type name; unknown names fall back to [`FillType::None`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&FILL_TYPE_NAMES, name, "fill type")
    }
}

/// Cell fill: pattern plus foreground (start) and background (end) colors.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Fill {
    pub fill_type: FillType,
    /// Pattern foreground / gradient start color
    pub start_color: RGBColor,
    /// Pattern background / gradient end color
    pub end_color: RGBColor,
    /// Gradient angle in degrees (ignored by the XF record)
    pub rotation: u16,
}

impl Default for Fill {
    fn default() -> Self {
        Self {
            fill_type: FillType::None,
            start_color: RGBColor::WHITE,
            end_color: RGBColor::BLACK,
            rotation: 0,
        }
    }
}

impl Fill {
    pub fn new() -> Self {
        Self::default()
    }

    /// A solid fill in the given color.
    pub fn solid(color: RGBColor) -> Self {
        Self {
            fill_type: FillType::Solid,
            start_color: color,
            ..Self::default()
        }
    }
}
