//! Positional access over an [`OrderedSet`].
//!
//! Positions are recomputed by walking the iteration order on every call.
//! Nothing is cached, so `add` and `remove` never have an index to repair.
//! The price is O(n) positional reads in exchange for the set's O(1)
//! membership test.

use std::hash::Hash;

use crate::error::CollectionError;
use crate::error::Result;
use crate::set::OrderedSet;

/// An [`OrderedSet`] that can also be read by position.
#[derive(Clone, PartialEq, Eq)]
pub struct IndexedSet<T: Clone + Eq + Hash> {
    set: OrderedSet<T>,
}

impl<T: Clone + Eq + Hash> Default for IndexedSet<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone + Eq + Hash> IndexedSet<T> {
    /// Create a new empty indexed set.
    pub fn new() -> IndexedSet<T> {
        return IndexedSet { set: OrderedSet::new() };
    }

    /// Create an empty indexed set with a capacity hint.
    pub fn with_capacity(capacity: usize) -> IndexedSet<T> {
        return IndexedSet { set: OrderedSet::with_capacity(capacity) };
    }

    /// Element at `index` in iteration order.
    ///
    /// Fails with [`CollectionError::IndexOutOfRange`] for any index past
    /// the end, which on an empty set means every index.
    pub fn get(&self, index: usize) -> Result<&T> {
        return self.set.iter().nth(index).ok_or(CollectionError::IndexOutOfRange {
            index,
            len: self.set.len(),
        });
    }

    /// Position of `element` in iteration order, if present.
    pub fn index_of(&self, element: &T) -> Option<usize> {
        return self.set.iter().position(|item| item == element);
    }

    /// See [`OrderedSet::add`].
    pub fn add(&mut self, element: T) -> bool {
        return self.set.add(element);
    }

    /// See [`OrderedSet::remove`].
    pub fn remove(&mut self, element: &T) -> bool {
        return self.set.remove(element);
    }

    /// Check whether an element is present.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        return self.set.contains(element);
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        return self.set.len();
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.set.is_empty();
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &T> {
        return self.set.iter();
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.set.clear();
    }

    /// Borrow the underlying set.
    pub fn as_set(&self) -> &OrderedSet<T> {
        return &self.set;
    }

    /// Unwrap into the underlying set.
    pub fn into_inner(self) -> OrderedSet<T> {
        return self.set;
    }
}

impl<T: Clone + Eq + Hash> From<OrderedSet<T>> for IndexedSet<T> {
    fn from(set: OrderedSet<T>) -> Self {
        return IndexedSet { set };
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for IndexedSet<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        return IndexedSet { set: iter.into_iter().collect() };
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for IndexedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.set.extend(iter);
    }
}

impl<T: Clone + Eq + Hash + std::fmt::Debug> std::fmt::Debug for IndexedSet<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        return std::fmt::Debug::fmt(&self.set, f);
    }
}
