//! Default BIFF8 color palette.
//!
//! XF records reference colors by 7-bit palette index. Indices 8..=63 hold
//! the default palette; 0x40 and 0x41 are the automatic pattern foreground and
//! background.

use crate::common::RGBColor;

/// Automatic foreground (pattern color)
pub const AUTOMATIC_FOREGROUND: u8 = 0x40;
/// Automatic background (pattern background color)
pub const AUTOMATIC_BACKGROUND: u8 = 0x41;

/// Index of the first palette entry.
pub const PALETTE_OFFSET: u8 = 8;

const fn rgb(value: u32) -> RGBColor {
    RGBColor::new((value >> 16) as u8, (value >> 8) as u8, value as u8)
}

/// Default palette, entry `i` is index `i + 8`.
#[rustfmt::skip]
pub const DEFAULT_PALETTE: [RGBColor; 56] = [
    rgb(0x000000), rgb(0xFFFFFF), rgb(0xFF0000), rgb(0x00FF00),
    rgb(0x0000FF), rgb(0xFFFF00), rgb(0xFF00FF), rgb(0x00FFFF),
    rgb(0x800000), rgb(0x008000), rgb(0x000080), rgb(0x808000),
    rgb(0x800080), rgb(0x008080), rgb(0xC0C0C0), rgb(0x808080),
    rgb(0x9999FF), rgb(0x993366), rgb(0xFFFFCC), rgb(0xCCFFFF),
    rgb(0x660066), rgb(0xFF8080), rgb(0x0066CC), rgb(0xCCCCFF),
    rgb(0x000080), rgb(0xFF00FF), rgb(0xFFFF00), rgb(0x00FFFF),
    rgb(0x800080), rgb(0x800000), rgb(0x008080), rgb(0x0000FF),
    rgb(0x00CCFF), rgb(0xCCFFFF), rgb(0xCCFFCC), rgb(0xFFFF99),
    rgb(0x99CCFF), rgb(0xFF99CC), rgb(0xCC99FF), rgb(0xFFCC99),
    rgb(0x3366FF), rgb(0x33CCCC), rgb(0x99CC00), rgb(0xFFCC00),
    rgb(0xFF9900), rgb(0xFF6600), rgb(0x666699), rgb(0x969696),
    rgb(0x003366), rgb(0x339966), rgb(0x003300), rgb(0x333300),
    rgb(0x993300), rgb(0x993366), rgb(0x333399), rgb(0x333333),
];

/// Resolve a color to its palette index.
///
/// Exact matches win (lowest index first); anything else maps to the nearest
/// entry by squared RGB distance.
pub fn palette_index(color: RGBColor) -> u8 {
    let mut best = 0usize;
    let mut best_distance = u32::MAX;
    for (i, entry) in DEFAULT_PALETTE.iter().enumerate() {
        let distance = entry.distance_sq(&color);
        if distance < best_distance {
            best = i;
            best_distance = distance;
            if distance == 0 {
                break;
            }
        }
    }
    if best_distance != 0 {
        log::debug!("color {} not in palette, using nearest entry", color);
    }
    best as u8 + PALETTE_OFFSET
}

/// Color of a palette index, if it is one of the default entries.
pub fn palette_color(index: u8) -> Option<RGBColor> {
    index
        .checked_sub(PALETTE_OFFSET)
        .and_then(|i| DEFAULT_PALETTE.get(i as usize))
        .copied()
}
