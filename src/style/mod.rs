//! Cell style model.
//!
//! A [`Style`] aggregates the formatting components of one XF record:
//! alignment, borders, fill, protection and number format. Components live in
//! publication slots (see [`binding`]) so that a style owns exactly one
//! authoritative instance of each. Font and number-format table indices are
//! resolved by the workbook layer and handed to the encoder separately.
//!
//! # Example
//!
//! ```rust
//! use litchi_style::style::{BorderStyle, HorizontalAlignment, Style};
//!
//! let mut style = Style::new();
//! style
//!     .alignment_mut()
//!     .set_horizontal(HorizontalAlignment::Center)
//!     .set_wrap_text(true);
//! style.borders_mut().bottom_mut().style = BorderStyle::Double;
//!
//! let mut same = Style::new();
//! same.alignment_mut()
//!     .set_horizontal(HorizontalAlignment::Center)
//!     .set_wrap_text(true);
//! same.borders_mut().bottom_mut().style = BorderStyle::Double;
//! assert_eq!(style.hash_code(), same.hash_code());
//! ```

// Submodule declarations
pub mod alignment;
pub mod binding;
pub mod borders;
pub mod definition;
pub mod fill;
pub mod number_format;
pub mod protection;

// Re-exports
pub use alignment::{
    Alignment, HorizontalAlignment, MAX_INDENT, STACKED_TEXT_ROTATION, VerticalAlignment,
};
pub use binding::{Detached, Slot, SlotName, StyleComponent, StyleId};
pub use borders::{Border, BorderSide, BorderStyle, Borders, DiagonalDirection};
pub use definition::StyleDefinition;
pub use fill::{Fill, FillType};
pub use number_format::NumberFormat;
pub use protection::{PasswordInput, Protection, ProtectionState, SheetPassword, hash_password};

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

/// Formatting definition shared by cells and named styles.
///
/// Equality and hashing cover component values only. Every instance, clones
/// included, carries its own [`StyleId`].
#[derive(Debug)]
pub struct Style {
    id: StyleId,
    alignment: Slot<Alignment>,
    borders: Slot<Borders>,
    fill: Slot<Fill>,
    protection: Slot<Protection>,
    number_format: Slot<NumberFormat>,
}

impl Default for Style {
    fn default() -> Self {
        Self {
            id: StyleId::next(),
            alignment: Slot::default(),
            borders: Slot::default(),
            fill: Slot::default(),
            protection: Slot::default(),
            number_format: Slot::default(),
        }
    }
}

impl Clone for Style {
    fn clone(&self) -> Self {
        Self {
            id: StyleId::next(),
            alignment: self.alignment.clone(),
            borders: self.borders.clone(),
            fill: self.fill.clone(),
            protection: self.protection.clone(),
            number_format: self.number_format.clone(),
        }
    }
}

impl PartialEq for Style {
    fn eq(&self, other: &Self) -> bool {
        self.alignment == other.alignment
            && self.borders == other.borders
            && self.fill == other.fill
            && self.protection == other.protection
            && self.number_format == other.number_format
    }
}

impl Eq for Style {}

impl Hash for Style {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.alignment.hash(state);
        self.borders.hash(state);
        self.fill.hash(state);
        self.protection.hash(state);
        self.number_format.hash(state);
    }
}

impl Style {
    pub fn new() -> Self {
        Self::default()
    }

    /// Identity of this instance, used by [`Detached`] to stay with one style.
    #[inline]
    pub fn id(&self) -> StyleId {
        self.id
    }

    /// Read a component; never publishes.
    #[inline]
    pub fn component<T: StyleComponent>(&self) -> &T {
        T::slot(self).get()
    }

    /// Access a component for mutation, publishing its slot.
    #[inline]
    pub fn component_mut<T: StyleComponent>(&mut self) -> &mut T {
        T::slot_mut(self).publish_in_place()
    }

    /// Publish `candidate` unless the slot already holds a published instance.
    ///
    /// Returns the authoritative instance, which is not `candidate` when the
    /// slot was already taken.
    pub fn bind<T: StyleComponent>(&mut self, candidate: T) -> &mut T {
        T::slot_mut(self).publish_if_absent(candidate)
    }

    #[inline]
    pub fn is_published<T: StyleComponent>(&self) -> bool {
        T::slot(self).is_published()
    }

    #[inline]
    pub fn alignment(&self) -> &Alignment {
        self.alignment.get()
    }

    #[inline]
    pub fn alignment_mut(&mut self) -> &mut Alignment {
        self.alignment.publish_in_place()
    }

    #[inline]
    pub fn borders(&self) -> &Borders {
        self.borders.get()
    }

    #[inline]
    pub fn borders_mut(&mut self) -> &mut Borders {
        self.borders.publish_in_place()
    }

    #[inline]
    pub fn fill(&self) -> &Fill {
        self.fill.get()
    }

    #[inline]
    pub fn fill_mut(&mut self) -> &mut Fill {
        self.fill.publish_in_place()
    }

    #[inline]
    pub fn protection(&self) -> &Protection {
        self.protection.get()
    }

    #[inline]
    pub fn protection_mut(&mut self) -> &mut Protection {
        self.protection.publish_in_place()
    }

    #[inline]
    pub fn number_format(&self) -> &NumberFormat {
        self.number_format.get()
    }

    #[inline]
    pub fn number_format_mut(&mut self) -> &mut NumberFormat {
        self.number_format.publish_in_place()
    }

    /// Content hash of the style.
    ///
    /// Depends only on component values, so two styles with the same hash can
    /// share one XF record.
    pub fn hash_code(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash(&mut hasher);
        hasher.finish()
    }
}

/// Content hash of a single component.
pub fn component_hash<T: StyleComponent>(component: &T) -> u64 {
    let mut hasher = DefaultHasher::new();
    T::SLOT.hash(&mut hasher);
    component.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use proptest::prelude::*;

    #[test]
    fn test_reads_do_not_publish() {
        let style = Style::new();
        assert_eq!(style.alignment().vertical(), VerticalAlignment::Bottom);
        assert_eq!(style.number_format().format_code(), "General");
        assert!(!style.is_published::<Alignment>());
        assert!(!style.is_published::<NumberFormat>());
    }

    #[test]
    fn test_nested_mutable_access_publishes() {
        let mut style = Style::new();
        style.borders_mut().left_mut().style = BorderStyle::Thin;
        assert!(style.is_published::<Borders>());
        assert!(!style.is_published::<Fill>());
    }

    #[test]
    fn test_bind_is_set_if_absent() {
        let mut style = Style::new();
        let first = style.bind(Fill::solid(RGBColor::new(255, 0, 0)));
        assert_eq!(first.fill_type, FillType::Solid);

        let second = style.bind(Fill::new());
        assert_eq!(second.fill_type, FillType::Solid);
        assert_eq!(style.fill().start_color, RGBColor::new(255, 0, 0));
    }

    #[test]
    fn test_clone_is_equal_but_distinct() {
        let mut style = Style::new();
        style.borders_mut().left_mut().style = BorderStyle::Thin;
        let copy = style.clone();
        assert_eq!(copy, style);
        assert_eq!(copy.hash_code(), style.hash_code());
        assert_ne!(copy.id(), style.id());
        assert_ne!(Style::new().id(), Style::new().id());
    }

    #[test]
    fn test_hash_ignores_publication_state() {
        let mut touched = Style::new();
        touched.protection_mut();
        touched.alignment_mut();
        assert_eq!(touched.hash_code(), Style::new().hash_code());
    }

    #[test]
    fn test_component_hash_differs_by_value() {
        let plain = Protection::new();
        let locked = Protection {
            locked: ProtectionState::Protected,
            ..Protection::default()
        };
        assert_eq!(component_hash(&plain), component_hash(&Protection::new()));
        assert_ne!(component_hash(&plain), component_hash(&locked));
    }

    fn styled(rotation: i16, wrap: bool, border: u8, red: u8, code: &str) -> Style {
        let mut style = Style::new();
        style
            .alignment_mut()
            .set_wrap_text(wrap)
            .set_text_rotation(rotation)
            .unwrap();
        let border_style = match border % 3 {
            0 => BorderStyle::None,
            1 => BorderStyle::Thin,
            _ => BorderStyle::Thick,
        };
        *style.borders_mut().top_mut() = Border::new(border_style, RGBColor::new(red, 0, 0));
        style.number_format_mut().set_format_code(code);
        style
    }

    proptest! {
        #[test]
        fn prop_equal_fields_equal_hash(
            rotation in -90i16..=90,
            wrap in any::<bool>(),
            border in any::<u8>(),
            red in any::<u8>(),
            code in "[0#.,%]{1,8}",
        ) {
            let a = styled(rotation, wrap, border, red, &code);
            let b = styled(rotation, wrap, border, red, &code);
            prop_assert_eq!(a.hash_code(), b.hash_code());
        }

        #[test]
        fn prop_single_field_change_changes_hash(
            rotation in -89i16..=89,
            wrap in any::<bool>(),
            red in any::<u8>(),
        ) {
            let base = styled(rotation, wrap, 1, red, "0.00");
            let rotated = styled(rotation + 1, wrap, 1, red, "0.00");
            let wrapped = styled(rotation, !wrap, 1, red, "0.00");
            let recolored = styled(rotation, wrap, 1, red.wrapping_add(1), "0.00");
            prop_assert_ne!(base.hash_code(), rotated.hash_code());
            prop_assert_ne!(base.hash_code(), wrapped.hash_code());
            prop_assert_ne!(base.hash_code(), recolored.hash_code());
        }
    }
}
