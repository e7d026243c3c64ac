//! XF (extended format) record encoder.
//!
//! An XF record combines font, number format, alignment, borders, fill and
//! protection into one formatting definition shared by cells. The encoder
//! resolves a [`Style`] into an intermediate [`XfFields`] and packs it into
//! one of two fixed little-endian layouts:
//!
//! | Version | Header length | Payload |
//! |---|---|---|
//! | BIFF5 | 0x0010 | eight 16-bit words |
//! | BIFF8 | 0x0014 | three words, four bytes, two 32-bit words, one word |
//!
//! Diagonal borders are part of the style model but are always emitted as
//! zero.

use super::biff::{RECORD_XF, write_record_header};
use super::mapping::{
    map_border_style, map_border_style_biff5, map_fill_type, map_hidden, map_horizontal,
    map_locked, map_text_rotation, map_vertical,
};
use super::palette::{AUTOMATIC_BACKGROUND, AUTOMATIC_FOREGROUND, palette_index};
use crate::common::Result;
use crate::style::{Border, FillType, STACKED_TEXT_ROTATION, Style};
use bitflags::bitflags;
use std::io::Write;
use zerocopy::IntoBytes;
use zerocopy::byteorder::little_endian::{U16, U32};

/// `type_flags` value of a style XF.
pub const STYLE_XF_TYPE_FLAGS: u16 = 0xFFF5;

/// Record format version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BiffVersion {
    /// Excel 5.0/95
    Biff5,
    /// Excel 97-2003
    #[default]
    Biff8,
}

impl BiffVersion {
    /// Payload length announced in the record header.
    #[inline]
    pub const fn xf_payload_len(self) -> u16 {
        match self {
            BiffVersion::Biff5 => 0x0010,
            BiffVersion::Biff8 => 0x0014,
        }
    }
}

/// Whether an XF describes a named style or a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum XfKind {
    Style,
    #[default]
    Cell,
}

/// Table indices resolved by the workbook layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct XfIndices {
    pub font: u16,
    pub number_format: u16,
}

impl XfIndices {
    pub const fn new(font: u16, number_format: u16) -> Self {
        Self {
            font,
            number_format,
        }
    }
}

bitflags! {
    /// "Attribute differs from the parent style" flags.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct UsedAttributes: u8 {
        const NUMBER_FORMAT = 0x01;
        const FONT = 0x02;
        const ALIGNMENT = 0x04;
        const BORDER = 0x08;
        const PATTERN = 0x10;
        const PROTECTION = 0x20;
    }
}

/// Border codes and palette color of one side; the color is 0 when the side
/// has no line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SideCode {
    /// BIFF8 line style
    pub style: u8,
    /// BIFF5 line style, 0 exactly when `style` is 0
    pub legacy_style: u8,
    pub color: u8,
}

impl SideCode {
    fn resolve(border: &Border) -> Self {
        let style = map_border_style(border.style);
        let color = if style == 0 {
            0
        } else {
            palette_index(border.color) & 0x7F
        };
        Self {
            style,
            legacy_style: map_border_style_biff5(border.style),
            color,
        }
    }
}

/// Version-independent XF values, already mapped to their BIFF codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct XfFields {
    pub font_index: u16,
    pub number_format_index: u16,
    pub type_flags: u16,
    pub used: UsedAttributes,
    pub horizontal: u8,
    pub vertical: u8,
    pub wrap_text: bool,
    pub justify_last: bool,
    pub rotation: u8,
    pub stacked: bool,
    pub indent: u8,
    pub shrink_to_fit: bool,
    pub left: SideCode,
    pub right: SideCode,
    pub top: SideCode,
    pub bottom: SideCode,
    pub pattern: u8,
    pub fill_foreground: u8,
    pub fill_background: u8,
}

impl XfFields {
    /// Resolve a style and its external indices.
    pub fn resolve(style: &Style, indices: XfIndices, kind: XfKind) -> Self {
        let alignment = style.alignment();
        let borders = style.borders();
        let fill = style.fill();
        let protection = style.protection();

        let type_flags = match kind {
            XfKind::Style => STYLE_XF_TYPE_FLAGS,
            XfKind::Cell => {
                (map_locked(protection.locked) | (map_hidden(protection.hidden) << 1)) as u16
            },
        };

        let left = SideCode::resolve(borders.left());
        let right = SideCode::resolve(borders.right());
        let top = SideCode::resolve(borders.top());
        let bottom = SideCode::resolve(borders.bottom());

        let pattern = map_fill_type(fill.fill_type);
        let (fill_foreground, fill_background) = if fill.fill_type == FillType::None {
            (AUTOMATIC_FOREGROUND, AUTOMATIC_BACKGROUND)
        } else {
            (palette_index(fill.start_color), palette_index(fill.end_color))
        };

        let mut used = UsedAttributes::empty();
        used.set(UsedAttributes::NUMBER_FORMAT, indices.number_format != 0);
        used.set(UsedAttributes::FONT, indices.font != 0);
        used.set(UsedAttributes::ALIGNMENT, alignment.wrap_text());
        used.set(
            UsedAttributes::BORDER,
            [left, right, top, bottom].iter().any(|side| side.style != 0),
        );
        used.set(
            UsedAttributes::PATTERN,
            fill_foreground != AUTOMATIC_FOREGROUND
                || fill_background != AUTOMATIC_BACKGROUND
                || pattern != 0,
        );
        used.set(UsedAttributes::PROTECTION, protection.is_customized());

        Self {
            font_index: indices.font,
            number_format_index: indices.number_format,
            type_flags,
            used,
            horizontal: map_horizontal(alignment.horizontal()),
            vertical: map_vertical(alignment.vertical()),
            wrap_text: alignment.wrap_text(),
            justify_last: false,
            rotation: map_text_rotation(alignment.text_rotation()),
            stacked: alignment.text_rotation() == STACKED_TEXT_ROTATION,
            indent: alignment.indent(),
            shrink_to_fit: alignment.shrink_to_fit(),
            left,
            right,
            top,
            bottom,
            pattern,
            fill_foreground,
            fill_background,
        }
    }
}

/// BIFF5 XF payload (16 bytes).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    zerocopy_derive::IntoBytes,
    zerocopy_derive::FromBytes,
    zerocopy_derive::Immutable,
    zerocopy_derive::KnownLayout,
    zerocopy_derive::Unaligned,
)]
#[repr(C)]
pub struct Biff5XfPayload {
    pub font_index: U16,
    pub number_format_index: U16,
    pub type_flags: U16,
    /// h(3) wrap(1) v(3) justLast(1) stacked(1) reserved(1) used(6)
    pub alignment: U16,
    /// fg(7) bg(7)
    pub colors: U16,
    /// pattern(6) bottom(3) bottomColor(7)
    pub fill_bottom: U16,
    /// top(3) left(3) right(3) topColor(7)
    pub border1: U16,
    /// leftColor(7) rightColor(7)
    pub border2: U16,
}

/// BIFF8 XF payload (20 bytes).
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    zerocopy_derive::IntoBytes,
    zerocopy_derive::FromBytes,
    zerocopy_derive::Immutable,
    zerocopy_derive::KnownLayout,
    zerocopy_derive::Unaligned,
)]
#[repr(C)]
pub struct Biff8XfPayload {
    pub font_index: U16,
    pub number_format_index: U16,
    pub type_flags: U16,
    /// h(3) wrap(1) v(3) justLast(1)
    pub alignment: u8,
    pub rotation: u8,
    /// indent(4) shrink(1)
    pub options: u8,
    /// used attributes in bits 2..=7
    pub used_attributes: u8,
    /// left(4) right(4) top(4) bottom(4) leftColor(7) rightColor(7) diagTL(1) diagTR(1)
    pub border1: U32,
    /// topColor(7) bottomColor(7) diagColor(7) diagStyle(4) reserved(1) pattern(6)
    pub border2: U32,
    /// fg(7) bg(7)
    pub fill_colors: U16,
}

/// Pack fields into the BIFF5 layout.
pub fn biff5_payload(fields: &XfFields) -> Biff5XfPayload {
    let alignment = (fields.horizontal as u16 & 0x07)
        | ((fields.wrap_text as u16) << 3)
        | ((fields.vertical as u16 & 0x07) << 4)
        | ((fields.justify_last as u16) << 7)
        | ((fields.stacked as u16) << 8)
        | ((fields.used.bits() as u16) << 10);

    let colors =
        (fields.fill_foreground as u16 & 0x7F) | ((fields.fill_background as u16 & 0x7F) << 7);

    let fill_bottom = (fields.pattern as u16 & 0x3F)
        | ((fields.bottom.legacy_style as u16) << 6)
        | ((fields.bottom.color as u16 & 0x7F) << 9);

    let border1 = fields.top.legacy_style as u16
        | ((fields.left.legacy_style as u16) << 3)
        | ((fields.right.legacy_style as u16) << 6)
        | ((fields.top.color as u16 & 0x7F) << 9);

    let border2 = (fields.left.color as u16 & 0x7F) | ((fields.right.color as u16 & 0x7F) << 7);

    Biff5XfPayload {
        font_index: U16::new(fields.font_index),
        number_format_index: U16::new(fields.number_format_index),
        type_flags: U16::new(fields.type_flags),
        alignment: U16::new(alignment),
        colors: U16::new(colors),
        fill_bottom: U16::new(fill_bottom),
        border1: U16::new(border1),
        border2: U16::new(border2),
    }
}

/// Pack fields into the BIFF8 layout.
pub fn biff8_payload(fields: &XfFields) -> Biff8XfPayload {
    let alignment = (fields.horizontal & 0x07)
        | ((fields.wrap_text as u8) << 3)
        | ((fields.vertical & 0x07) << 4)
        | ((fields.justify_last as u8) << 7);

    let options = (fields.indent & 0x0F) | ((fields.shrink_to_fit as u8) << 4);

    let border1 = (fields.left.style as u32 & 0x0F)
        | ((fields.right.style as u32 & 0x0F) << 4)
        | ((fields.top.style as u32 & 0x0F) << 8)
        | ((fields.bottom.style as u32 & 0x0F) << 12)
        | ((fields.left.color as u32 & 0x7F) << 16)
        | ((fields.right.color as u32 & 0x7F) << 23);

    // Diagonal color and style (bits 14..=24) stay zero
    let border2 = (fields.top.color as u32 & 0x7F)
        | ((fields.bottom.color as u32 & 0x7F) << 7)
        | ((fields.pattern as u32 & 0x3F) << 26);

    let fill_colors =
        (fields.fill_foreground as u16 & 0x7F) | ((fields.fill_background as u16 & 0x7F) << 7);

    Biff8XfPayload {
        font_index: U16::new(fields.font_index),
        number_format_index: U16::new(fields.number_format_index),
        type_flags: U16::new(fields.type_flags),
        alignment,
        rotation: fields.rotation,
        options,
        used_attributes: fields.used.bits() << 2,
        border1: U32::new(border1),
        border2: U32::new(border2),
        fill_colors: U16::new(fill_colors),
    }
}

/// One XF record ready to be encoded.
#[derive(Debug, Clone, Copy)]
pub struct XfRecord<'a> {
    style: &'a Style,
    indices: XfIndices,
    kind: XfKind,
}

impl<'a> XfRecord<'a> {
    pub fn new(style: &'a Style, indices: XfIndices, kind: XfKind) -> Self {
        Self {
            style,
            indices,
            kind,
        }
    }

    pub fn fields(&self) -> XfFields {
        XfFields::resolve(self.style, self.indices, self.kind)
    }

    /// Encode header and payload.
    pub fn encode(&self, version: BiffVersion) -> Vec<u8> {
        let mut out = Vec::with_capacity(4 + version.xf_payload_len() as usize);
        out.extend_from_slice(&RECORD_XF.to_le_bytes());
        out.extend_from_slice(&version.xf_payload_len().to_le_bytes());
        let fields = self.fields();
        match version {
            BiffVersion::Biff5 => out.extend_from_slice(biff5_payload(&fields).as_bytes()),
            BiffVersion::Biff8 => out.extend_from_slice(biff8_payload(&fields).as_bytes()),
        }
        out
    }

    /// Write header and payload to `writer`.
    pub fn write_to<W: Write>(&self, writer: &mut W, version: BiffVersion) -> Result<()> {
        write_record_header(writer, RECORD_XF, version.xf_payload_len())?;
        let fields = self.fields();
        match version {
            BiffVersion::Biff5 => writer.write_all(biff5_payload(&fields).as_bytes())?,
            BiffVersion::Biff8 => writer.write_all(biff8_payload(&fields).as_bytes())?,
        }
        Ok(())
    }
}

/// Encode one XF record (header included).
pub fn encode_xf(style: &Style, indices: XfIndices, version: BiffVersion, kind: XfKind) -> Vec<u8> {
    XfRecord::new(style, indices, kind).encode(version)
}

/// Write XF (Extended Format) record (0x00E0)
///
/// # Arguments
///
/// * `writer` - Output writer
/// * `style` - Style to encode
/// * `indices` - Resolved font and number format indices
/// * `version` - Target record layout
/// * `kind` - Style XF or cell XF
pub fn write_xf<W: Write>(
    writer: &mut W,
    style: &Style,
    indices: XfIndices,
    version: BiffVersion,
    kind: XfKind,
) -> Result<()> {
    XfRecord::new(style, indices, kind).write_to(writer, version)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::style::{BorderStyle, Fill, HorizontalAlignment, ProtectionState, VerticalAlignment};
    use proptest::prelude::*;
    use zerocopy::FromBytes;

    fn cell_record(style: &Style, version: BiffVersion) -> Vec<u8> {
        encode_xf(style, XfIndices::default(), version, XfKind::Cell)
    }

    fn decode8(bytes: &[u8]) -> Biff8XfPayload {
        Biff8XfPayload::read_from_bytes(&bytes[4..]).unwrap()
    }

    fn decode5(bytes: &[u8]) -> Biff5XfPayload {
        Biff5XfPayload::read_from_bytes(&bytes[4..]).unwrap()
    }

    fn sample_style() -> Style {
        let mut style = Style::new();
        style
            .alignment_mut()
            .set_horizontal(HorizontalAlignment::Center)
            .set_vertical(VerticalAlignment::Top)
            .set_wrap_text(true)
            .set_text_rotation(45)
            .unwrap();
        style.borders_mut().bottom_mut().style = BorderStyle::Thick;
        style.borders_mut().bottom_mut().color = RGBColor::new(255, 0, 0);
        style.borders_mut().left_mut().style = BorderStyle::Thin;
        *style.fill_mut() = Fill::solid(RGBColor::new(255, 255, 0));
        style.protection_mut().locked = ProtectionState::Unprotected;
        style
    }

    #[test]
    fn test_record_lengths() {
        let style = Style::new();
        let biff5 = cell_record(&style, BiffVersion::Biff5);
        let biff8 = cell_record(&style, BiffVersion::Biff8);
        assert_eq!(biff5.len(), 20);
        assert_eq!(biff8.len(), 24);
        assert_eq!(&biff5[..4], &[0xE0, 0x00, 0x10, 0x00]);
        assert_eq!(&biff8[..4], &[0xE0, 0x00, 0x14, 0x00]);
    }

    #[test]
    fn test_default_cell_xf_biff8() {
        let bytes = cell_record(&Style::new(), BiffVersion::Biff8);
        let payload = decode8(&bytes);
        assert_eq!(payload.type_flags.get(), 0x0001);
        // General / bottom
        assert_eq!(payload.alignment, 0x20);
        assert_eq!(payload.used_attributes, 0);
        assert_eq!(payload.border1.get(), 0);
        assert_eq!(payload.border2.get(), 0);
        assert_eq!(payload.fill_colors.get(), 0x40 | (0x41 << 7));
    }

    #[test]
    fn test_style_xf_sentinel() {
        let bytes = encode_xf(
            &sample_style(),
            XfIndices::default(),
            BiffVersion::Biff8,
            XfKind::Style,
        );
        assert_eq!(decode8(&bytes).type_flags.get(), STYLE_XF_TYPE_FLAGS);
    }

    #[test]
    fn test_biff8_fields() {
        let indices = XfIndices::new(5, 164);
        let bytes = encode_xf(&sample_style(), indices, BiffVersion::Biff8, XfKind::Cell);
        let payload = decode8(&bytes);

        assert_eq!(payload.font_index.get(), 5);
        assert_eq!(payload.number_format_index.get(), 164);
        // locked = 0, hidden = 0
        assert_eq!(payload.type_flags.get(), 0);
        assert_eq!(payload.alignment, 2 | (1 << 3));
        assert_eq!(payload.rotation, 45);
        assert_eq!(payload.options, 0);
        // All six attributes
        assert_eq!(payload.used_attributes, 0xFC);

        let border1 = payload.border1.get();
        assert_eq!(border1 & 0x0F, 1); // left thin
        assert_eq!((border1 >> 4) & 0x0F, 0); // right none
        assert_eq!((border1 >> 12) & 0x0F, 5); // bottom thick
        assert_eq!((border1 >> 16) & 0x7F, 0x08); // left black
        assert_eq!((border1 >> 23) & 0x7F, 0); // right none => color 0
        assert_eq!(border1 >> 30, 0);

        let border2 = payload.border2.get();
        assert_eq!(border2 & 0x7F, 0); // top none
        assert_eq!((border2 >> 7) & 0x7F, 0x0A); // bottom red
        assert_eq!((border2 >> 14) & 0xFFF, 0); // no diagonal
        assert_eq!(border2 >> 26, 1); // solid

        let fill = payload.fill_colors.get();
        assert_eq!(fill & 0x7F, 0x0D); // yellow
        assert_eq!(fill >> 7, 0x08); // default end color black
    }

    #[test]
    fn test_biff5_fields() {
        let indices = XfIndices::new(0, 2);
        let bytes = encode_xf(&sample_style(), indices, BiffVersion::Biff5, XfKind::Cell);
        let payload = decode5(&bytes);

        let alignment = payload.alignment.get();
        assert_eq!(alignment & 0x07, 2);
        assert_eq!((alignment >> 3) & 1, 1);
        assert_eq!((alignment >> 4) & 0x07, 0);
        assert_eq!((alignment >> 8) & 1, 0); // not stacked
        // number format, alignment, border, pattern, protection; no font
        assert_eq!(alignment >> 10, 0b11_1101);

        assert_eq!(payload.colors.get(), 0x0D | (0x08 << 7));

        let fill_bottom = payload.fill_bottom.get();
        assert_eq!(fill_bottom & 0x3F, 1);
        assert_eq!((fill_bottom >> 6) & 0x07, 5);
        assert_eq!(fill_bottom >> 9, 0x0A);

        let border1 = payload.border1.get();
        assert_eq!(border1 & 0x07, 0); // top
        assert_eq!((border1 >> 3) & 0x07, 1); // left
        assert_eq!((border1 >> 6) & 0x07, 0); // right
        assert_eq!(border1 >> 9, 0); // top color

        assert_eq!(payload.border2.get(), 0x08);
    }

    #[test]
    fn test_stacked_rotation() {
        let mut style = Style::new();
        style.alignment_mut().set_text_rotation(-165).unwrap();

        let biff8 = cell_record(&style, BiffVersion::Biff8);
        assert_eq!(decode8(&biff8).rotation, 0xFF);

        let biff5 = cell_record(&style, BiffVersion::Biff5);
        assert_eq!((decode5(&biff5).alignment.get() >> 8) & 1, 1);
    }

    #[test]
    fn test_indent_and_shrink() {
        let mut style = Style::new();
        style
            .alignment_mut()
            .set_horizontal(HorizontalAlignment::Left)
            .set_indent(3)
            .set_shrink_to_fit(true);
        let bytes = cell_record(&style, BiffVersion::Biff8);
        assert_eq!(decode8(&bytes).options, 3 | (1 << 4));

        style
            .alignment_mut()
            .set_indent(20)
            .set_shrink_to_fit(false);
        let bytes = cell_record(&style, BiffVersion::Biff8);
        assert_eq!(decode8(&bytes).options, 0x0F);
    }

    #[test]
    fn test_write_matches_encode() {
        let style = sample_style();
        let indices = XfIndices::new(1, 4);
        for version in [BiffVersion::Biff5, BiffVersion::Biff8] {
            let mut written = Vec::new();
            write_xf(&mut written, &style, indices, version, XfKind::Cell).unwrap();
            assert_eq!(written, encode_xf(&style, indices, version, XfKind::Cell));
        }
    }

    #[test]
    fn test_gradient_fill_has_no_pattern() {
        let mut style = Style::new();
        style.fill_mut().fill_type = FillType::GradientLinear;
        let fields = XfFields::resolve(&style, XfIndices::default(), XfKind::Cell);
        assert_eq!(fields.pattern, 0);
        // Colors are still resolved, so the pattern attribute is set
        assert!(fields.used.contains(UsedAttributes::PATTERN));
    }

    #[test]
    fn test_biff5_folds_wide_border_styles() {
        let mut style = Style::new();
        *style.borders_mut().bottom_mut() =
            Border::new(BorderStyle::MediumDashed, RGBColor::new(255, 0, 0));
        *style.borders_mut().left_mut() =
            Border::new(BorderStyle::DashDotDot, RGBColor::new(0, 0, 255));

        let bytes = cell_record(&style, BiffVersion::Biff5);
        let payload = decode5(&bytes);
        let fill_bottom = payload.fill_bottom.get();
        assert_eq!((fill_bottom >> 6) & 0x07, 3); // dashed
        assert_eq!(fill_bottom >> 9, 0x0A);
        assert_eq!((payload.border1.get() >> 3) & 0x07, 4); // dotted
        assert_eq!(payload.border2.get() & 0x7F, 0x0C);

        // BIFF8 keeps the exact codes
        let bytes = cell_record(&style, BiffVersion::Biff8);
        let border1 = decode8(&bytes).border1.get();
        assert_eq!((border1 >> 12) & 0x0F, 0x08);
        assert_eq!(border1 & 0x0F, 0x0B);
    }

    fn border_style(code: u8) -> BorderStyle {
        match code % 8 {
            0 | 1 => BorderStyle::None,
            2 => BorderStyle::Thin,
            3 => BorderStyle::Double,
            4 => BorderStyle::MediumDashed,
            5 => BorderStyle::DashDot,
            6 => BorderStyle::SlantDashDot,
            _ => BorderStyle::MediumDashDotDot,
        }
    }

    proptest! {
        #[test]
        fn prop_border_color_zero_without_line(
            left in any::<u8>(),
            right in any::<u8>(),
            top in any::<u8>(),
            bottom in any::<u8>(),
            r in any::<u8>(),
            g in any::<u8>(),
            b in any::<u8>(),
        ) {
            let color = RGBColor::new(r, g, b);
            let mut style = Style::new();
            {
                let borders = style.borders_mut();
                *borders.left_mut() = Border::new(border_style(left), color);
                *borders.right_mut() = Border::new(border_style(right), color);
                *borders.top_mut() = Border::new(border_style(top), color);
                *borders.bottom_mut() = Border::new(border_style(bottom), color);
            }

            let bytes = cell_record(&style, BiffVersion::Biff8);
            let payload = decode8(&bytes);
            let border1 = payload.border1.get();
            let border2 = payload.border2.get();

            let sides = [
                (border1 & 0x0F, (border1 >> 16) & 0x7F),
                ((border1 >> 4) & 0x0F, (border1 >> 23) & 0x7F),
                ((border1 >> 8) & 0x0F, border2 & 0x7F),
                ((border1 >> 12) & 0x0F, (border2 >> 7) & 0x7F),
            ];
            for (code, color_index) in sides {
                if code == 0 {
                    prop_assert_eq!(color_index, 0);
                } else {
                    prop_assert!((8..64).contains(&color_index));
                }
            }

            let bytes = cell_record(&style, BiffVersion::Biff5);
            let payload = decode5(&bytes);
            let alignment = payload.alignment.get();
            let fill_bottom = payload.fill_bottom.get();
            let border1 = payload.border1.get();
            let border2 = payload.border2.get();

            let sides = [
                ((border1 >> 3) & 0x07, border2 & 0x7F),
                ((border1 >> 6) & 0x07, (border2 >> 7) & 0x7F),
                (border1 & 0x07, border1 >> 9),
                ((fill_bottom >> 6) & 0x07, fill_bottom >> 9),
            ];
            let mut any_line = false;
            for (code, color_index) in sides {
                if code == 0 {
                    prop_assert_eq!(color_index, 0);
                } else {
                    any_line = true;
                    prop_assert!((8..64).contains(&color_index));
                }
            }
            // Border attribute flag agrees with the emitted codes
            prop_assert_eq!((alignment >> 13) & 1 == 1, any_line);
        }
    }
}
