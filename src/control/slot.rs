//! Single-value storage backing [`Optional`](super::Optional).
//!
//! A `Slot<T>` is either vacant or holds exactly one live `T`. Only the
//! `Occupied` variant owns a value, so the value is dropped exactly when the
//! slot is occupied.

use std::mem;

#[derive(Clone, PartialEq, Eq, Hash)]
pub(crate) enum Slot<T> {
    Vacant,
    Occupied(T),
}

impl<T> Slot<T> {
    #[inline]
    pub(crate) const fn is_occupied(&self) -> bool {
        matches!(self, Self::Occupied(_))
    }

    #[inline]
    pub(crate) const fn get(&self) -> Option<&T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Vacant => None,
        }
    }

    #[inline]
    pub(crate) const fn get_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Vacant => None,
        }
    }

    /// Drops the previous occupant, then stores `value`.
    pub(crate) fn put(&mut self, value: T) -> &mut T {
        self.clear();
        *self = Self::Occupied(value);
        match self {
            Self::Occupied(value) => value,
            Self::Vacant => unreachable!("slot was just filled"),
        }
    }

    #[inline]
    pub(crate) fn take(&mut self) -> Option<T> {
        match mem::replace(self, Self::Vacant) {
            Self::Occupied(value) => Some(value),
            Self::Vacant => None,
        }
    }

    #[inline]
    pub(crate) fn clear(&mut self) {
        *self = Self::Vacant;
    }

    #[inline]
    pub(crate) fn into_inner(self) -> Option<T> {
        match self {
            Self::Occupied(value) => Some(value),
            Self::Vacant => None,
        }
    }
}

impl<T> Default for Slot<T> {
    #[inline]
    fn default() -> Self {
        Self::Vacant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use std::cell::Cell;
    use std::rc::Rc;

    struct DropCounter(Rc<Cell<usize>>);

    impl Drop for DropCounter {
        fn drop(&mut self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[rstest]
    fn test_put_drops_previous_occupant() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::Vacant;
        slot.put(DropCounter(Rc::clone(&drops)));
        assert_eq!(drops.get(), 0);
        slot.put(DropCounter(Rc::clone(&drops)));
        assert_eq!(drops.get(), 1);
        drop(slot);
        assert_eq!(drops.get(), 2);
    }

    #[rstest]
    fn test_clear_is_idempotent() {
        let drops = Rc::new(Cell::new(0));
        let mut slot = Slot::Occupied(DropCounter(Rc::clone(&drops)));
        slot.clear();
        slot.clear();
        assert!(!slot.is_occupied());
        assert_eq!(drops.get(), 1);
    }

    #[rstest]
    fn test_take_leaves_slot_vacant() {
        let mut slot = Slot::Occupied(7);
        assert_eq!(slot.take(), Some(7));
        assert_eq!(slot.take(), None);
        assert!(slot.get().is_none());
    }
}
