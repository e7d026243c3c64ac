//! Cell border definitions.

use super::alignment::lookup_name;
use crate::common::RGBColor;
use phf::phf_map;

/// Line style of a single border side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum BorderStyle {
    #[default]
    None,
    Thin,
    Medium,
    Dashed,
    Dotted,
    Thick,
    Double,
    Hair,
    MediumDashed,
    DashDot,
    MediumDashDot,
    DashDotDot,
    MediumDashDotDot,
    SlantDashDot,
}

static BORDER_STYLE_NAMES: phf::Map<&'static str, BorderStyle> = phf_map! {
    "none" => BorderStyle::None,
    "thin" => BorderStyle::Thin,
    "medium" => BorderStyle::Medium,
    "dashed" => BorderStyle::Dashed,
    "dotted" => BorderStyle::Dotted,
    "thick" => BorderStyle::Thick,
    "double" => BorderStyle::Double,
    "hair" => BorderStyle::Hair,
    "mediumdashed" => BorderStyle::MediumDashed,
    "dashdot" => BorderStyle::DashDot,
    "mediumdashdot" => BorderStyle::MediumDashDot,
    "dashdotdot" => BorderStyle::DashDotDot,
    "mediumdashdotdot" => BorderStyle::MediumDashDotDot,
    "slantdashdot" => BorderStyle::SlantDashDot,
};

impl BorderStyle {
    /// Parse a border style name; unknown names fall back to [`BorderStyle::None`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&BORDER_STYLE_NAMES, name, "border style")
    }
}

/// Which diagonals of a cell are drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DiagonalDirection {
    #[default]
    None,
    /// Bottom-left to top-right
    Up,
    /// Top-left to bottom-right
    Down,
    Both,
}

static DIAGONAL_NAMES: phf::Map<&'static str, DiagonalDirection> = phf_map! {
    "none" => DiagonalDirection::None,
    "up" => DiagonalDirection::Up,
    "down" => DiagonalDirection::Down,
    "both" => DiagonalDirection::Both,
};

impl DiagonalDirection {
    /// Parse a diagonal direction; unknown names fall back to [`DiagonalDirection::None`].
    pub fn from_name(name: &str) -> Self {
        lookup_name(&DIAGONAL_NAMES, name, "diagonal direction")
    }
}

/// One border side: a line style and its color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Border {
    pub style: BorderStyle,
    pub color: RGBColor,
}

impl Border {
    #[inline]
    pub const fn new(style: BorderStyle, color: RGBColor) -> Self {
        Self { style, color }
    }

    /// A border with the given style and the default (black) color.
    #[inline]
    pub const fn with_style(style: BorderStyle) -> Self {
        Self::new(style, RGBColor::BLACK)
    }

    #[inline]
    pub fn is_none(&self) -> bool {
        self.style == BorderStyle::None
    }
}

/// Identifies one of the seven border slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BorderSide {
    Left,
    Right,
    Top,
    Bottom,
    Diagonal,
    Vertical,
    Horizontal,
}

/// Cell borders.
///
/// `vertical` and `horizontal` describe inner borders of a range; the XF
/// record only carries the four outer sides.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Borders {
    left: Border,
    right: Border,
    top: Border,
    bottom: Border,
    diagonal: Border,
    vertical: Border,
    horizontal: Border,
    diagonal_direction: DiagonalDirection,
    outline: bool,
}

impl Default for Borders {
    fn default() -> Self {
        Self {
            left: Border::default(),
            right: Border::default(),
            top: Border::default(),
            bottom: Border::default(),
            diagonal: Border::default(),
            vertical: Border::default(),
            horizontal: Border::default(),
            diagonal_direction: DiagonalDirection::None,
            outline: true,
        }
    }
}

impl Borders {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn side(&self, side: BorderSide) -> &Border {
        match side {
            BorderSide::Left => &self.left,
            BorderSide::Right => &self.right,
            BorderSide::Top => &self.top,
            BorderSide::Bottom => &self.bottom,
            BorderSide::Diagonal => &self.diagonal,
            BorderSide::Vertical => &self.vertical,
            BorderSide::Horizontal => &self.horizontal,
        }
    }

    pub fn side_mut(&mut self, side: BorderSide) -> &mut Border {
        match side {
            BorderSide::Left => &mut self.left,
            BorderSide::Right => &mut self.right,
            BorderSide::Top => &mut self.top,
            BorderSide::Bottom => &mut self.bottom,
            BorderSide::Diagonal => &mut self.diagonal,
            BorderSide::Vertical => &mut self.vertical,
            BorderSide::Horizontal => &mut self.horizontal,
        }
    }

    #[inline]
    pub fn left(&self) -> &Border {
        &self.left
    }

    #[inline]
    pub fn left_mut(&mut self) -> &mut Border {
        &mut self.left
    }

    #[inline]
    pub fn right(&self) -> &Border {
        &self.right
    }

    #[inline]
    pub fn right_mut(&mut self) -> &mut Border {
        &mut self.right
    }

    #[inline]
    pub fn top(&self) -> &Border {
        &self.top
    }

    #[inline]
    pub fn top_mut(&mut self) -> &mut Border {
        &mut self.top
    }

    #[inline]
    pub fn bottom(&self) -> &Border {
        &self.bottom
    }

    #[inline]
    pub fn bottom_mut(&mut self) -> &mut Border {
        &mut self.bottom
    }

    #[inline]
    pub fn diagonal(&self) -> &Border {
        &self.diagonal
    }

    #[inline]
    pub fn diagonal_mut(&mut self) -> &mut Border {
        &mut self.diagonal
    }

    #[inline]
    pub fn vertical(&self) -> &Border {
        &self.vertical
    }

    #[inline]
    pub fn horizontal(&self) -> &Border {
        &self.horizontal
    }

    #[inline]
    pub fn diagonal_direction(&self) -> DiagonalDirection {
        self.diagonal_direction
    }

    pub fn set_diagonal_direction(&mut self, direction: DiagonalDirection) -> &mut Self {
        self.diagonal_direction = direction;
        self
    }

    #[inline]
    pub fn outline(&self) -> bool {
        self.outline
    }

    pub fn set_outline(&mut self, outline: bool) -> &mut Self {
        self.outline = outline;
        self
    }

    /// Apply the same border to the four outer sides.
    pub fn set_outer(&mut self, border: Border) -> &mut Self {
        self.left = border;
        self.right = border;
        self.top = border;
        self.bottom = border;
        self
    }

    /// Apply the same border to the outer sides and the inner grid lines.
    pub fn set_all(&mut self, border: Border) -> &mut Self {
        self.set_outer(border);
        self.vertical = border;
        self.horizontal = border;
        self
    }

    /// Whether any of the four outer sides carries a line.
    pub fn has_outer_border(&self) -> bool {
        [&self.left, &self.right, &self.top, &self.bottom]
            .iter()
            .any(|b| !b.is_none())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let borders = Borders::new();
        assert!(borders.outline());
        assert_eq!(borders.left().style, BorderStyle::None);
        assert_eq!(borders.left().color, RGBColor::BLACK);
        assert_eq!(borders.diagonal_direction(), DiagonalDirection::None);
        assert!(!borders.has_outer_border());
    }

    #[test]
    fn test_set_all_and_side_access() {
        let mut borders = Borders::new();
        borders.set_all(Border::with_style(BorderStyle::Dashed));
        for side in [
            BorderSide::Left,
            BorderSide::Right,
            BorderSide::Top,
            BorderSide::Bottom,
            BorderSide::Vertical,
            BorderSide::Horizontal,
        ] {
            assert_eq!(borders.side(side).style, BorderStyle::Dashed);
        }
        assert_eq!(borders.side(BorderSide::Diagonal).style, BorderStyle::None);

        borders.side_mut(BorderSide::Top).style = BorderStyle::Thick;
        assert_eq!(borders.top().style, BorderStyle::Thick);
    }

    #[test]
    fn test_border_style_names() {
        assert_eq!(
            BorderStyle::from_name("mediumDashDotDot"),
            BorderStyle::MediumDashDotDot
        );
        assert_eq!(BorderStyle::from_name("wavy"), BorderStyle::None);
        assert_eq!(
            DiagonalDirection::from_name("Both"),
            DiagonalDirection::Both
        );
    }
}
