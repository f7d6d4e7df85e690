//! A set that iterates in insertion order and moves re-added elements to
//! the end.
//!
//! The set is a composite of two structures kept in lockstep:
//!
//! - a hash index from element to its insertion ticket, for O(1) membership
//! - an ordering map from ticket to element, which defines iteration order
//!
//! Every `add` hands out a fresh ticket. Re-adding an element retires its
//! old ticket first, so the element reappears at the tail.
//!
//! Complexity:
//! - add, remove: O(log n)
//! - contains: O(1)
//! - iteration: O(n)

use std::collections::BTreeMap;
use std::collections::btree_map;
use std::fmt;
use std::hash::Hash;

use rustc_hash::FxHashMap;

/// A uniqueness-preserving set ordered by most recent insertion.
///
/// Not internally synchronized. Share it across threads behind a lock of
/// the caller's choosing.
#[derive(Clone)]
pub struct OrderedSet<T: Clone + Eq + Hash> {
    /// Element to the ticket it currently holds in `order`.
    index: FxHashMap<T, u64>,
    /// Ticket to element, ascending tickets give iteration order.
    order: BTreeMap<u64, T>,
    /// Next ticket to hand out. Only ever grows.
    next_ticket: u64,
}

impl<T: Clone + Eq + Hash> Default for OrderedSet<T> {
    fn default() -> Self {
        return Self::new();
    }
}

impl<T: Clone + Eq + Hash> OrderedSet<T> {
    /// Create a new empty set.
    pub fn new() -> OrderedSet<T> {
        return OrderedSet {
            index: FxHashMap::default(),
            order: BTreeMap::new(),
            next_ticket: 0,
        };
    }

    /// Create an empty set with room for `capacity` elements.
    ///
    /// The hint only sizes the hash index; it has no effect on behavior.
    pub fn with_capacity(capacity: usize) -> OrderedSet<T> {
        return OrderedSet {
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            order: BTreeMap::new(),
            next_ticket: 0,
        };
    }

    /// Add an element at the end of the iteration order.
    ///
    /// If the element is already present it is moved to the end. Always
    /// returns `true`, since either way the set changed.
    pub fn add(&mut self, element: T) -> bool {
        if let Some(old) = self.index.get(&element) {
            self.order.remove(old);
        }

        let ticket = self.next_ticket;
        self.next_ticket += 1;
        self.order.insert(ticket, element.clone());
        self.index.insert(element, ticket);

        debug_assert_eq!(self.index.len(), self.order.len());
        return true;
    }

    /// Remove an element. Returns `true` if it was present.
    pub fn remove(&mut self, element: &T) -> bool {
        let Some(ticket) = self.index.remove(element) else {
            return false;
        };
        self.order.remove(&ticket);
        return true;
    }

    /// Check whether an element is present.
    #[inline]
    pub fn contains(&self, element: &T) -> bool {
        return self.index.contains_key(element);
    }

    /// Number of elements.
    #[inline]
    pub fn len(&self) -> usize {
        return self.order.len();
    }

    /// Check if the set is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        return self.order.is_empty();
    }

    /// Iterate in insertion order.
    pub fn iter(&self) -> btree_map::Values<'_, u64, T> {
        return self.order.values();
    }

    /// The least recently added element.
    pub fn first(&self) -> Option<&T> {
        return self.order.values().next();
    }

    /// The most recently added element.
    pub fn last(&self) -> Option<&T> {
        return self.order.values().next_back();
    }

    /// Keep only the elements for which `keep` returns true.
    /// Surviving elements keep their relative order.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let index = &mut self.index;
        self.order.retain(|_, element| {
            if keep(element) {
                return true;
            }
            index.remove(element);
            return false;
        });
    }

    /// Remove every element.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    /// Copy the elements out in insertion order.
    pub fn to_vec(&self) -> Vec<T> {
        return self.order.values().cloned().collect();
    }
}

impl<T: Clone + Eq + Hash> Extend<T> for OrderedSet<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for element in iter {
            self.add(element);
        }
    }
}

impl<T: Clone + Eq + Hash> FromIterator<T> for OrderedSet<T> {
    /// Build a set whose insertion order is the source order. A value that
    /// appears more than once ends up at the position of its last occurrence.
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut set = OrderedSet::with_capacity(iter.size_hint().0);
        set.extend(iter);
        return set;
    }
}

impl<T: Clone + Eq + Hash> From<Vec<T>> for OrderedSet<T> {
    fn from(source: Vec<T>) -> Self {
        return source.into_iter().collect();
    }
}

impl<'a, T: Clone + Eq + Hash> IntoIterator for &'a OrderedSet<T> {
    type Item = &'a T;
    type IntoIter = btree_map::Values<'a, u64, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.iter();
    }
}

impl<T: Clone + Eq + Hash> IntoIterator for OrderedSet<T> {
    type Item = T;
    type IntoIter = btree_map::IntoValues<u64, T>;

    fn into_iter(self) -> Self::IntoIter {
        return self.order.into_values();
    }
}

/// Two sets are equal when they hold the same elements in the same order.
impl<T: Clone + Eq + Hash> PartialEq for OrderedSet<T> {
    fn eq(&self, other: &Self) -> bool {
        return self.len() == other.len() && self.iter().eq(other.iter());
    }
}

impl<T: Clone + Eq + Hash> Eq for OrderedSet<T> {}

impl<T: Clone + Eq + Hash + fmt::Debug> fmt::Debug for OrderedSet<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.debug_set().entries(self.iter()).finish();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(set: &OrderedSet<String>) -> Vec<&str> {
        return set.iter().map(|s| s.as_str()).collect();
    }

    #[test]
    fn empty_set() {
        let set: OrderedSet<u32> = OrderedSet::new();
        assert!(set.is_empty());
        assert_eq!(set.len(), 0);
        assert_eq!(set.first(), None);
        assert_eq!(set.last(), None);
    }

    #[test]
    fn keeps_insertion_order() {
        let mut set = OrderedSet::new();
        set.add("c".to_string());
        set.add("a".to_string());
        set.add("b".to_string());
        assert_eq!(strings(&set), ["c", "a", "b"]);
    }

    #[test]
    fn readd_moves_to_end() {
        let mut set = OrderedSet::new();
        for value in ["value1", "value2", "value3", "value4"] {
            set.add(value.to_string());
        }
        assert!(set.add("value2".to_string()));
        assert_eq!(strings(&set), ["value1", "value3", "value4", "value2"]);
        assert_eq!(set.len(), 4);
    }

    #[test]
    fn readd_last_is_stable() {
        let mut set: OrderedSet<u32> = [1, 2, 3].into_iter().collect();
        set.add(3);
        assert_eq!(set.to_vec(), vec![1, 2, 3]);
    }

    #[test]
    fn remove_present_and_absent() {
        let mut set: OrderedSet<u32> = [1, 2, 3].into_iter().collect();
        assert!(set.remove(&2));
        assert!(!set.remove(&2));
        assert!(!set.contains(&2));
        assert_eq!(set.to_vec(), vec![1, 3]);
    }

    #[test]
    fn removed_then_added_goes_to_end() {
        let mut set: OrderedSet<u32> = [1, 2, 3].into_iter().collect();
        set.remove(&1);
        set.add(1);
        assert_eq!(set.to_vec(), vec![2, 3, 1]);
    }

    #[test]
    fn from_vec_preserves_source_order() {
        let set = OrderedSet::from(vec![5, 1, 4]);
        assert_eq!(set.to_vec(), vec![5, 1, 4]);
    }

    #[test]
    fn from_iter_with_duplicates_uses_last_occurrence() {
        let set: OrderedSet<u32> = [1, 2, 1, 3].into_iter().collect();
        assert_eq!(set.to_vec(), vec![2, 1, 3]);
    }

    #[test]
    fn none_is_an_ordinary_element() {
        let mut set: OrderedSet<Option<&str>> = OrderedSet::new();
        set.add(None);
        set.add(Some("a"));
        set.add(None);
        assert_eq!(set.len(), 2);
        assert_eq!(set.to_vec(), vec![Some("a"), None]);
    }

    #[test]
    fn first_and_last_track_order() {
        let mut set: OrderedSet<u32> = [1, 2, 3].into_iter().collect();
        set.add(1);
        assert_eq!(set.first(), Some(&2));
        assert_eq!(set.last(), Some(&1));
    }

    #[test]
    fn retain_keeps_order_and_index() {
        let mut set: OrderedSet<u32> = (0..6).collect();
        set.retain(|x| x % 2 == 0);
        assert_eq!(set.to_vec(), vec![0, 2, 4]);
        assert!(!set.contains(&1));
        assert!(set.contains(&4));
    }

    #[test]
    fn clear_empties_both_structures() {
        let mut set: OrderedSet<u32> = (0..4).collect();
        set.clear();
        assert!(set.is_empty());
        assert!(!set.contains(&0));
        set.add(9);
        assert_eq!(set.to_vec(), vec![9]);
    }

    #[test]
    fn equality_is_order_sensitive() {
        let a: OrderedSet<u32> = [1, 2].into_iter().collect();
        let b: OrderedSet<u32> = [2, 1].into_iter().collect();
        let c: OrderedSet<u32> = [1, 2].into_iter().collect();
        assert_ne!(a, b);
        assert_eq!(a, c);
    }

    #[test]
    fn debug_lists_elements_in_order() {
        let set: OrderedSet<u32> = [3, 1].into_iter().collect();
        assert_eq!(format!("{:?}", set), "{3, 1}");
    }

    #[test]
    fn owned_iteration() {
        let set: OrderedSet<u32> = [3, 1, 2].into_iter().collect();
        let values: Vec<u32> = set.into_iter().collect();
        assert_eq!(values, vec![3, 1, 2]);
    }
}
