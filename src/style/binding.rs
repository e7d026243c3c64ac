//! Publication slots for style components.
//!
//! A [`Style`] owns one [`Slot`] per component kind. A slot starts out holding
//! a default value and becomes *published* on the first write-capable access;
//! from then on it is the only authoritative instance for that kind.
//!
//! Components built away from a style are wrapped in [`Detached`]. Once
//! prepared for binding they resolve against the style they are bound to: if
//! the slot is already published they read (and write) through to it, so
//! several would-be instances converge on a single one. The value a redirected
//! handle carried is discarded without error; always use the reference returned
//! by [`Detached::begin_bind`] rather than an earlier one.
//!
//! A handle belongs to the style it was prepared for. Handing it any other
//! style is a mismatch: the handle never reads from or publishes into it.

use super::{Alignment, Borders, Fill, NumberFormat, Protection, Style};
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Identity of one [`Style`] instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct StyleId(u64);

impl StyleId {
    pub(crate) fn next() -> Self {
        static NEXT: AtomicU64 = AtomicU64::new(1);
        StyleId(NEXT.fetch_add(1, Ordering::Relaxed))
    }
}

/// Names the component slots of a [`Style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SlotName {
    Alignment,
    Borders,
    Fill,
    Protection,
    NumberFormat,
}

/// A component that lives in one slot of a [`Style`].
pub trait StyleComponent: Clone + Default + Hash + PartialEq + std::fmt::Debug {
    const SLOT: SlotName;

    fn slot(style: &Style) -> &Slot<Self>;

    fn slot_mut(style: &mut Style) -> &mut Slot<Self>;
}

macro_rules! impl_style_component {
    ($ty:ty, $slot:ident, $field:ident) => {
        impl StyleComponent for $ty {
            const SLOT: SlotName = SlotName::$slot;

            #[inline]
            fn slot(style: &Style) -> &Slot<Self> {
                &style.$field
            }

            #[inline]
            fn slot_mut(style: &mut Style) -> &mut Slot<Self> {
                &mut style.$field
            }
        }
    };
}

impl_style_component!(Alignment, Alignment, alignment);
impl_style_component!(Borders, Borders, borders);
impl_style_component!(Fill, Fill, fill);
impl_style_component!(Protection, Protection, protection);
impl_style_component!(NumberFormat, NumberFormat, number_format);

/// Set-if-absent storage for one component of a style.
///
/// Equality and hashing only consider the held value, never the publication
/// state.
#[derive(Debug, Clone, Default)]
pub struct Slot<T> {
    value: T,
    published: bool,
}

impl<T> Slot<T> {
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    #[inline]
    pub fn is_published(&self) -> bool {
        self.published
    }

    /// Publish `candidate` unless an instance is already published.
    ///
    /// Returns the authoritative instance either way.
    pub fn publish_if_absent(&mut self, candidate: T) -> &mut T {
        if self.published {
            log::debug!(
                "{} slot already published, discarding candidate",
                std::any::type_name::<T>()
            );
        } else {
            self.value = candidate;
            self.published = true;
        }
        &mut self.value
    }

    /// Publish the currently held value and return it for mutation.
    #[inline]
    pub fn publish_in_place(&mut self) -> &mut T {
        self.published = true;
        &mut self.value
    }
}

impl<T: PartialEq> PartialEq for Slot<T> {
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
    }
}

impl<T: Eq> Eq for Slot<T> {}

impl<T: Hash> Hash for Slot<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

#[derive(Debug, Clone)]
enum BindState<T> {
    /// Not associated with any slot; authoritative on its own
    Free(T),
    /// Intended for the slot of `owner` but not yet published
    Prepared { value: T, owner: StyleId },
    /// Bound: all access goes through the slot of `owner`
    Bound { owner: StyleId },
}

/// A style component that is not (yet) owned by a [`Style`].
#[derive(Debug, Clone)]
pub struct Detached<T> {
    state: BindState<T>,
}

impl<T: StyleComponent> Detached<T> {
    pub fn new(value: T) -> Self {
        Self {
            state: BindState::Free(value),
        }
    }

    /// Mark the component as intended for its kind's slot in `style` without
    /// publishing it.
    ///
    /// A prepared component may be re-targeted until it is published. Has no
    /// effect on a component that is already bound.
    pub fn prepare_bind(&mut self, style: &Style) -> &mut Self {
        let owner = style.id();
        self.state = match std::mem::replace(&mut self.state, BindState::Bound { owner }) {
            BindState::Free(value) | BindState::Prepared { value, .. } => {
                BindState::Prepared { value, owner }
            },
            BindState::Bound { owner: bound } => {
                if bound != owner {
                    log::debug!("{:?} handle already bound, ignoring prepare", T::SLOT);
                }
                BindState::Bound { owner: bound }
            },
        };
        self
    }

    #[inline]
    pub fn is_prepared(&self) -> bool {
        matches!(self.state, BindState::Prepared { .. })
    }

    #[inline]
    pub fn is_bound(&self) -> bool {
        matches!(self.state, BindState::Bound { .. })
    }

    /// Style this handle is prepared for or bound to.
    pub fn owner(&self) -> Option<StyleId> {
        match self.state {
            BindState::Free(_) => None,
            BindState::Prepared { owner, .. } | BindState::Bound { owner } => Some(owner),
        }
    }

    /// Resolve the authoritative instance for reading.
    ///
    /// Never publishes anything. Returns `None` only for a bound handle asked
    /// about a style other than its owner.
    pub fn get_bound<'a>(&'a self, style: &'a Style) -> Option<&'a T> {
        match &self.state {
            BindState::Free(value) => Some(value),
            BindState::Prepared { value, owner } => {
                let slot = T::slot(style);
                if *owner != style.id() {
                    log_mismatch::<T>();
                    Some(value)
                } else if slot.is_published() {
                    Some(slot.get())
                } else {
                    Some(value)
                }
            },
            BindState::Bound { owner } => {
                if *owner == style.id() {
                    Some(T::slot(style).get())
                } else {
                    log_mismatch::<T>();
                    None
                }
            },
        }
    }

    /// Resolve the authoritative instance for mutation.
    ///
    /// A prepared component whose slot is still empty is moved into the style
    /// and published. A prepared component whose slot is already taken is
    /// dropped and the published instance is returned instead. In both cases
    /// this handle reads through the style from now on.
    ///
    /// A style other than the owner is never touched: a prepared handle
    /// returns its own value, a bound handle returns `None`.
    pub fn begin_bind<'a>(&'a mut self, style: &'a mut Style) -> Option<&'a mut T> {
        let id = style.id();
        if matches!(self.state, BindState::Prepared { owner, .. } if owner == id) {
            return match std::mem::replace(&mut self.state, BindState::Bound { owner: id }) {
                BindState::Prepared { value, .. } => {
                    Some(T::slot_mut(style).publish_if_absent(value))
                },
                _ => Some(T::slot_mut(style).publish_in_place()),
            };
        }
        match self.state {
            BindState::Free(ref mut value) => Some(value),
            BindState::Prepared { ref mut value, .. } => {
                log_mismatch::<T>();
                Some(value)
            },
            BindState::Bound { owner } if owner == id => {
                Some(T::slot_mut(style).publish_in_place())
            },
            BindState::Bound { .. } => {
                log_mismatch::<T>();
                None
            },
        }
    }
}

fn log_mismatch<T: StyleComponent>() {
    log::debug!(
        "{:?} handle used with a style it does not belong to",
        T::SLOT
    );
}

impl<T: StyleComponent> From<T> for Detached<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{HorizontalAlignment, VerticalAlignment};

    fn centered() -> Alignment {
        let mut alignment = Alignment::new();
        alignment.set_horizontal(HorizontalAlignment::Center);
        alignment
    }

    #[test]
    fn test_free_component_is_authoritative() {
        let mut style = Style::new();
        let mut detached = Detached::new(centered());

        assert_eq!(
            detached.get_bound(&style).unwrap().horizontal(),
            HorizontalAlignment::Center
        );
        detached
            .begin_bind(&mut style)
            .unwrap()
            .set_horizontal(HorizontalAlignment::Right);

        // A free component never touches the style
        assert!(!style.is_published::<Alignment>());
        assert_eq!(style.alignment().horizontal(), HorizontalAlignment::General);
        assert_eq!(
            detached.get_bound(&style).unwrap().horizontal(),
            HorizontalAlignment::Right
        );
        assert_eq!(detached.owner(), None);
    }

    #[test]
    fn test_prepare_does_not_publish() {
        let style = Style::new();
        let mut detached = Detached::new(centered());
        detached.prepare_bind(&style);

        assert!(detached.is_prepared());
        assert_eq!(detached.owner(), Some(style.id()));
        assert!(!style.is_published::<Alignment>());
        assert_eq!(
            detached.get_bound(&style).unwrap().horizontal(),
            HorizontalAlignment::Center
        );
    }

    #[test]
    fn test_first_binding_wins() {
        let mut style = Style::new();

        let mut first = Detached::new(centered());
        first.prepare_bind(&style);
        first.begin_bind(&mut style);
        assert!(first.is_bound());
        assert!(style.is_published::<Alignment>());

        let mut second = Detached::new(Alignment::new());
        second.prepare_bind(&style);
        // Reads redirect before any write
        assert_eq!(
            second.get_bound(&style).unwrap().horizontal(),
            HorizontalAlignment::Center
        );

        second
            .begin_bind(&mut style)
            .unwrap()
            .set_wrap_text(true);
        assert!(style.alignment().wrap_text());
        assert_eq!(style.alignment().horizontal(), HorizontalAlignment::Center);

        // Both handles observe the single published instance
        assert!(first.get_bound(&style).unwrap().wrap_text());
        assert!(second.get_bound(&style).unwrap().wrap_text());
    }

    #[test]
    fn test_style_accessor_publication_blocks_detached() {
        let mut style = Style::new();
        style.alignment_mut().set_vertical(VerticalAlignment::Top);

        let mut late = Detached::new(centered());
        late.prepare_bind(&style);
        let bound = late.begin_bind(&mut style).unwrap();
        assert_eq!(bound.horizontal(), HorizontalAlignment::General);
        assert_eq!(bound.vertical(), VerticalAlignment::Top);
    }

    #[test]
    fn test_bound_handle_stays_with_its_style() {
        let mut owner = Style::new();
        let mut other = Style::new();

        let mut handle = Detached::new(Alignment::new());
        handle.prepare_bind(&owner);
        handle.begin_bind(&mut owner).unwrap().set_wrap_text(true);

        assert!(handle.get_bound(&owner).unwrap().wrap_text());
        assert!(handle.get_bound(&other).is_none());
        assert!(handle.begin_bind(&mut other).is_none());
        assert!(!other.is_published::<Alignment>());
        assert!(!other.alignment().wrap_text());

        // Re-preparing a bound handle does not move it
        handle.prepare_bind(&other);
        assert_eq!(handle.owner(), Some(owner.id()));
    }

    #[test]
    fn test_prepared_handle_ignores_foreign_style() {
        let owner = Style::new();
        let mut other = Style::new();
        other.alignment_mut().set_wrap_text(true);

        let mut handle = Detached::new(centered());
        handle.prepare_bind(&owner);

        // Reads and writes stay on the handle's own value
        assert!(!handle.get_bound(&other).unwrap().wrap_text());
        handle
            .begin_bind(&mut other)
            .unwrap()
            .set_horizontal(HorizontalAlignment::Right);
        assert!(handle.is_prepared());
        assert_eq!(other.alignment().horizontal(), HorizontalAlignment::General);
        assert_eq!(
            handle.get_bound(&owner).unwrap().horizontal(),
            HorizontalAlignment::Right
        );
    }

    #[test]
    fn test_cloned_style_is_a_different_owner() {
        let mut style = Style::new();
        let mut handle = Detached::new(centered());
        handle.prepare_bind(&style);
        handle.begin_bind(&mut style);

        let copy = style.clone();
        assert_eq!(copy.alignment(), style.alignment());
        assert!(handle.get_bound(&copy).is_none());
    }

    #[test]
    fn test_slot_equality_ignores_publication() {
        let mut published = Slot::<Fill>::default();
        published.publish_in_place();
        assert_eq!(published, Slot::<Fill>::default());
    }
}
