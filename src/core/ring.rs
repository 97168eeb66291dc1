//! An ordered collection with an optional focused element.
//!
//! `Ring` backs the group registry: groups form a fixed sequence
//! indexed `0..N-1`, and at most one of them is in focus at a time.

use std::collections::VecDeque;
use std::ops::{Index, IndexMut};

use super::types::Direction;

/// A way of selecting an element inside a [`Ring`].
pub enum Selector<'a, T> {
    /// Any element; resolves to the focused one.
    Any,
    /// The focused element.
    Focused,
    /// The element at the given index.
    Index(usize),
    /// The first element satisfying the given condition.
    Condition(&'a dyn Fn(&T) -> bool),
}

impl<T> std::fmt::Debug for Selector<'_, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Selector::Any => write!(f, "Selector::Any"),
            Selector::Focused => write!(f, "Selector::Focused"),
            Selector::Index(i) => write!(f, "Selector::Index({})", i),
            Selector::Condition(_) => write!(f, "Selector::Condition(..)"),
        }
    }
}

/// An ordered sequence of items with an optional focused item.
///
/// Insertion order is stable: `append` adds to the back and never
/// disturbs existing indices.
#[derive(Debug, Clone)]
pub struct Ring<T> {
    items: VecDeque<T>,
    focused: Option<usize>,
}

impl<T> Default for Ring<T> {
    fn default() -> Ring<T> {
        Ring::new()
    }
}

impl<T> Ring<T> {
    /// Creates a new, empty Ring.
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
            focused: None,
        }
    }

    /// Creates a new Ring with the given capacity.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            items: VecDeque::with_capacity(cap),
            focused: None,
        }
    }

    /// The number of items in the Ring.
    #[inline(always)]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Tests whether the Ring is empty.
    #[inline(always)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an item to the end of the Ring.
    pub fn append(&mut self, item: T) {
        self.items.push_back(item)
    }

    /// Returns a reference to the item at the given index.
    pub fn get(&self, idx: usize) -> Option<&T> {
        self.items.get(idx)
    }

    /// Returns a mutable reference to the item at the given index.
    pub fn get_mut(&mut self, idx: usize) -> Option<&mut T> {
        self.items.get_mut(idx)
    }

    /// Iterates over the items in order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.iter()
    }

    /// Mutably iterates over the items in order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> {
        self.items.iter_mut()
    }

    /// Iterates over the items in reverse order.
    pub fn iter_rev(&self) -> impl Iterator<Item = &T> {
        self.items.iter().rev()
    }

    #[inline]
    fn would_wrap(&self, direction: Direction) -> bool {
        use Direction::*;

        match (direction, self.focused) {
            (Forward, Some(i)) => i == self.len() - 1,
            (Backward, Some(i)) => i == 0,
            _ => false,
        }
    }

    /// The index of the focused item, if any.
    #[inline(always)]
    pub fn focused_idx(&self) -> Option<usize> {
        self.focused
    }

    /// Returns a reference to the focused item.
    pub fn focused(&self) -> Option<&T> {
        self.focused.and_then(|i| self.get(i))
    }

    /// Returns a mutable reference to the focused item.
    pub fn focused_mut(&mut self) -> Option<&mut T> {
        if let Some(i) = self.focused {
            return self.get_mut(i);
        }
        None
    }

    /// Sets the focused item by index.
    pub fn set_focused(&mut self, idx: usize) {
        self.focused = Some(idx);
    }

    /// Removes the focus entirely.
    #[inline(always)]
    pub fn unset_focused(&mut self) {
        self.focused = None
    }

    /// Cycles the focus by one in the given direction, wrapping around.
    ///
    /// Is a no-op if nothing is in focus.
    pub fn cycle_focus(&mut self, direction: Direction) {
        use Direction::*;

        match direction {
            Forward => {
                if let Some(i) = self.focused {
                    if self.would_wrap(Forward) {
                        self.focused = Some(0)
                    } else {
                        self.focused = Some(i + 1)
                    }
                }
            }
            Backward => {
                if let Some(i) = self.focused {
                    if self.would_wrap(Backward) {
                        self.focused = Some(self.len() - 1)
                    } else {
                        self.focused = Some(i - 1)
                    }
                }
            }
        }
    }

    /// Finds the first element satisfying the condition, with its index.
    pub fn element_by(&self, cond: impl Fn(&T) -> bool) -> Option<(usize, &T)> {
        self.iter().enumerate().find(|(_, e)| cond(*e))
    }

    /// `element_by`'s mutable version.
    pub fn element_by_mut(&mut self, cond: impl Fn(&T) -> bool) -> Option<(usize, &mut T)> {
        self.iter_mut().enumerate().find(|(_, e)| cond(*e))
    }

    /// Resolves a [`Selector`] to an index into the Ring.
    pub fn index(&self, s: Selector<'_, T>) -> Option<usize> {
        use Selector::*;

        match s {
            Any | Focused => self.focused,
            Index(i) => {
                if i < self.len() {
                    Some(i)
                } else {
                    None
                }
            }
            Condition(f) => self.element_by(f).map(|(i, _)| i),
        }
    }
}

impl<T> FromIterator<T> for Ring<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Ring<T> {
        Ring {
            items: iter.into_iter().collect(),
            focused: None,
        }
    }
}

impl<T> Index<usize> for Ring<T> {
    type Output = T;

    fn index(&self, idx: usize) -> &T {
        &self.items[idx]
    }
}

impl<T> IndexMut<usize> for Ring<T> {
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.items[idx]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Direction::*;

    fn ring() -> Ring<u32> {
        let mut ring = Ring::new();
        for i in [10, 20, 30] {
            ring.append(i);
        }
        ring
    }

    #[test]
    fn append_preserves_order() {
        let ring = ring();

        assert_eq!(ring.len(), 3);
        assert_eq!(ring.iter().copied().collect::<Vec<_>>(), vec![10, 20, 30]);
        assert_eq!(ring.iter_rev().copied().collect::<Vec<_>>(), vec![30, 20, 10]);
    }

    #[test]
    fn cycle_focus_wraps() {
        let mut ring = ring();
        ring.set_focused(2);

        ring.cycle_focus(Forward);
        assert_eq!(ring.focused_idx(), Some(0));

        ring.cycle_focus(Backward);
        assert_eq!(ring.focused_idx(), Some(2));
        assert_eq!(ring.focused(), Some(&30));
    }

    #[test]
    fn selector_resolution() {
        let mut ring = ring();
        ring.set_focused(1);

        assert_eq!(ring.index(Selector::Focused), Some(1));
        assert_eq!(ring.index(Selector::Index(5)), None);
        assert_eq!(ring.index(Selector::Condition(&|i| *i == 30)), Some(2));
        assert_eq!(ring.index(Selector::Condition(&|i| *i == 99)), None);
    }
}
