//! Style enums to BIFF codes.

use crate::style::{
    BorderStyle, FillType, HorizontalAlignment, ProtectionState, STACKED_TEXT_ROTATION,
    VerticalAlignment,
};

/// Rotation code for vertically stacked text.
pub const STACKED_ROTATION_CODE: u8 = 0xFF;

/// BIFF line style code of a border.
pub fn map_border_style(style: BorderStyle) -> u8 {
    match style {
        BorderStyle::None => 0x00,
        BorderStyle::Thin => 0x01,
        BorderStyle::Medium => 0x02,
        BorderStyle::Dashed => 0x03,
        BorderStyle::Dotted => 0x04,
        BorderStyle::Thick => 0x05,
        BorderStyle::Double => 0x06,
        BorderStyle::Hair => 0x07,
        BorderStyle::MediumDashed => 0x08,
        BorderStyle::DashDot => 0x09,
        BorderStyle::MediumDashDot => 0x0A,
        BorderStyle::DashDotDot => 0x0B,
        BorderStyle::MediumDashDotDot => 0x0C,
        BorderStyle::SlantDashDot => 0x0D,
    }
}

/// BIFF5 line style code of a border.
///
/// The legacy layout has 3 bits per side, so the BIFF8-only styles fold onto
/// the closest legacy line: medium variants onto dashed, light dash-dot
/// variants onto dotted. Only [`BorderStyle::None`] maps to 0.
pub fn map_border_style_biff5(style: BorderStyle) -> u8 {
    match style {
        BorderStyle::MediumDashed
        | BorderStyle::MediumDashDot
        | BorderStyle::MediumDashDotDot
        | BorderStyle::SlantDashDot => 0x03,
        BorderStyle::DashDot | BorderStyle::DashDotDot => 0x04,
        other => map_border_style(other),
    }
}

/// BIFF fill pattern code. Gradients have no BIFF pattern and map to none.
pub fn map_fill_type(fill_type: FillType) -> u8 {
    match fill_type {
        FillType::None | FillType::GradientLinear | FillType::GradientPath => 0x00,
        FillType::Solid => 0x01,
        FillType::MediumGray => 0x02,
        FillType::DarkGray => 0x03,
        FillType::LightGray => 0x04,
        FillType::DarkHorizontal => 0x05,
        FillType::DarkVertical => 0x06,
        FillType::DarkDown => 0x07,
        FillType::DarkUp => 0x08,
        FillType::DarkGrid => 0x09,
        FillType::DarkTrellis => 0x0A,
        FillType::LightHorizontal => 0x0B,
        FillType::LightVertical => 0x0C,
        FillType::LightDown => 0x0D,
        FillType::LightUp => 0x0E,
        FillType::LightGrid => 0x0F,
        FillType::LightTrellis => 0x10,
        FillType::Gray125 => 0x11,
        FillType::Gray0625 => 0x12,
    }
}

pub fn map_horizontal(alignment: HorizontalAlignment) -> u8 {
    match alignment {
        HorizontalAlignment::General => 0,
        HorizontalAlignment::Left => 1,
        HorizontalAlignment::Center => 2,
        HorizontalAlignment::Right => 3,
        HorizontalAlignment::Fill => 4,
        HorizontalAlignment::Justify => 5,
        HorizontalAlignment::CenterContinuous => 6,
        HorizontalAlignment::Distributed => 7,
    }
}

pub fn map_vertical(alignment: VerticalAlignment) -> u8 {
    match alignment {
        VerticalAlignment::Top => 0,
        VerticalAlignment::Center => 1,
        VerticalAlignment::Bottom => 2,
        VerticalAlignment::Justify => 3,
        VerticalAlignment::Distributed => 4,
    }
}

/// BIFF8 rotation byte.
///
/// 0..=90 are counter-clockwise degrees, 91..=180 encode -1..=-90 as
/// `90 - angle`, and 255 marks stacked text.
pub fn map_text_rotation(angle: i16) -> u8 {
    if angle == STACKED_TEXT_ROTATION {
        STACKED_ROTATION_CODE
    } else if angle >= 0 {
        angle.min(90) as u8
    } else {
        (90 - angle.max(-90)) as u8
    }
}

/// "Locked" bit; cells are locked unless explicitly unprotected.
pub fn map_locked(state: ProtectionState) -> u8 {
    match state {
        ProtectionState::Inherit | ProtectionState::Protected => 1,
        ProtectionState::Unprotected => 0,
    }
}

/// "Hidden" bit; formulas are visible unless explicitly protected.
pub fn map_hidden(state: ProtectionState) -> u8 {
    match state {
        ProtectionState::Protected => 1,
        ProtectionState::Inherit | ProtectionState::Unprotected => 0,
    }
}
