//! Key-value store with a sorted key index for positional access.
//!
//! The store keeps two structures:
//!
//! - a primary hash map from key to value
//! - an auxiliary list of the same keys, sorted by the store's comparator
//!
//! Both live behind a single mutex so that no caller ever sees a key in one
//! structure but not the other. Every public method locks once for its
//! whole duration.
//!
//! Sorting policy:
//! - `put` of a new key appends it and re-sorts the whole list
//! - `put` of an existing key only replaces the value
//! - `put_all` appends its new keys and sorts once for the whole batch
//! - removals never sort, removing from a sorted list keeps it sorted
//!
//! Positional reads (`get`, `get_value`, `remove_at`) return `None` past
//! the end instead of failing.
//!
//! A comparator that panics while sorting leaves the newly appended key in
//! the list, possibly out of order, and poisons the mutex. Later calls
//! recover the lock and carry on; the next sort restores the order.
//!
//! Complexity:
//! - put (new key): O(n log n)
//! - put (existing key), get_by_key: O(1)
//! - get, get_value: O(1)
//! - remove, index_of: O(n)
//! - put_all: O(n log n) once per batch

use std::borrow::Borrow;
use std::fmt;
use std::hash::Hash;
use std::sync::Mutex;
use std::sync::MutexGuard;
use std::sync::PoisonError;

use rustc_hash::FxHashMap;

use crate::comparator::Comparator;
use crate::error::CollectionError;
use crate::error::Result;
use crate::store::StoreConfig;

/// The two structures guarded together.
struct Inner<K, V> {
    primary: FxHashMap<K, V>,
    /// Keys of `primary`, sorted by the store's comparator.
    keys: Vec<K>,
}

impl<K: Clone + Eq + Hash, V> Inner<K, V> {
    fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let value = self.primary.remove(key)?;
        if let Some(pos) = self.keys.iter().position(|k| k.borrow() == key) {
            self.keys.remove(pos);
        }
        debug_assert_eq!(self.primary.len(), self.keys.len());
        return Some(value);
    }
}

/// A key-value store iterable in sorted key order and addressable by
/// position.
///
/// Keys and values default to `String`. The store is `Sync` and meant to
/// be shared behind an `Arc`; reads hand back owned clones.
pub struct SortedIndexStore<K = String, V = String> {
    inner: Mutex<Inner<K, V>>,
    comparator: Comparator<K>,
}

impl<K, V> Default for SortedIndexStore<K, V>
where
    K: Clone + Eq + Hash + Ord + 'static,
    V: Clone + PartialEq,
{
    fn default() -> Self {
        return Self::new();
    }
}

impl<K, V> SortedIndexStore<K, V>
where
    K: Clone + Eq + Hash + Ord + 'static,
    V: Clone + PartialEq,
{
    /// Create an empty store ordered by the keys' natural order.
    pub fn new() -> SortedIndexStore<K, V> {
        return Self::with_config(StoreConfig::natural());
    }
}

impl<K, V> SortedIndexStore<K, V>
where
    K: Clone + Eq + Hash,
    V: Clone + PartialEq,
{
    /// Create an empty store with the given ordering.
    pub fn with_config(config: StoreConfig<K>) -> SortedIndexStore<K, V> {
        return SortedIndexStore {
            inner: Mutex::new(Inner {
                primary: FxHashMap::default(),
                keys: Vec::new(),
            }),
            comparator: config.into_comparator(),
        };
    }

    /// Create a store holding the entries of `source`.
    ///
    /// The key index is built once and sorted once. If `source` repeats a
    /// key, the last value wins.
    pub fn from_map<I>(source: I, config: StoreConfig<K>) -> SortedIndexStore<K, V>
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut primary = FxHashMap::default();
        primary.extend(source);
        let mut keys: Vec<K> = primary.keys().cloned().collect();

        let comparator = config.into_comparator();
        comparator.sort(&mut keys);

        return SortedIndexStore {
            inner: Mutex::new(Inner { primary, keys }),
            comparator,
        };
    }

    /// Create a store by pairing `keys[i]` with `values[i]`.
    ///
    /// Fails with [`CollectionError::InvalidArgument`] if the slices differ
    /// in length.
    pub fn from_pairs(keys: &[K], values: &[V], config: StoreConfig<K>) -> Result<SortedIndexStore<K, V>> {
        if keys.len() != values.len() {
            return Err(CollectionError::InvalidArgument(
                "keys and values differ in length",
            ));
        }
        let source = keys.iter().cloned().zip(values.iter().cloned());
        return Ok(Self::from_map(source, config));
    }

    fn lock(&self) -> MutexGuard<'_, Inner<K, V>> {
        return self.inner.lock().unwrap_or_else(PoisonError::into_inner);
    }

    /// The comparator ordering the key index.
    pub fn comparator(&self) -> &Comparator<K> {
        return &self.comparator;
    }

    /// Insert or update an entry. Returns the previous value, if any.
    ///
    /// A new key is appended to the key index and the whole index is
    /// re-sorted. Updating an existing key leaves the index alone.
    pub fn put(&self, key: K, value: V) -> Option<V> {
        let mut guard = self.lock();
        let inner = &mut *guard;

        if let Some(previous) = inner.primary.insert(key.clone(), value) {
            return Some(previous);
        }
        inner.keys.push(key);
        self.comparator.sort(&mut inner.keys);

        debug_assert_eq!(inner.primary.len(), inner.keys.len());
        return None;
    }

    /// Insert or update every entry of `source`, then sort the key index
    /// once for the whole batch.
    pub fn put_all<I>(&self, source: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        let mut guard = self.lock();
        let inner = &mut *guard;

        for (key, value) in source {
            if inner.primary.insert(key.clone(), value).is_none() {
                inner.keys.push(key);
            }
        }
        self.comparator.sort(&mut inner.keys);
        debug_assert_eq!(inner.primary.len(), inner.keys.len());
    }

    /// Key at `index` in sorted order, or `None` past the end.
    pub fn get(&self, index: usize) -> Option<K> {
        let inner = self.lock();
        return inner.keys.get(index).cloned();
    }

    /// Value of the key at `index` in sorted order, or `None` past the end.
    pub fn get_value(&self, index: usize) -> Option<V> {
        let inner = self.lock();
        let key = inner.keys.get(index)?;
        return inner.primary.get(key).cloned();
    }

    /// Entry at `index` in sorted order, or `None` past the end.
    pub fn get_entry(&self, index: usize) -> Option<(K, V)> {
        let inner = self.lock();
        let key = inner.keys.get(index)?;
        let value = inner.primary.get(key)?;
        return Some((key.clone(), value.clone()));
    }

    /// Value stored under `key`.
    pub fn get_by_key<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.lock().primary.get(key).cloned();
    }

    /// Check whether `key` is present.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.lock().primary.contains_key(key);
    }

    /// Remove `key`, returning its value.
    pub fn remove<Q>(&self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        return self.lock().remove(key);
    }

    /// Remove `key` only if it currently maps to `expected`.
    /// Returns `true` if the entry was removed.
    pub fn remove_entry<Q>(&self, key: &Q, expected: &V) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut inner = self.lock();
        if inner.primary.get(key) != Some(expected) {
            return false;
        }
        return inner.remove(key).is_some();
    }

    /// Remove the entry at `index` in sorted order, returning its value.
    /// Returns `None` past the end.
    pub fn remove_at(&self, index: usize) -> Option<V> {
        let mut inner = self.lock();
        let key = inner.keys.get(index)?.clone();
        return inner.remove(&key);
    }

    /// Position of the first key, in sorted order, that maps to `value`.
    ///
    /// When several keys share the value, the lowest-sorted one wins.
    pub fn index_of(&self, value: &V) -> Option<usize> {
        let inner = self.lock();
        return inner
            .keys
            .iter()
            .position(|key| inner.primary.get(key) == Some(value));
    }

    /// Remove every entry.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.primary.clear();
        inner.keys.clear();
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        return self.lock().keys.len();
    }

    /// Check if the store is empty.
    pub fn is_empty(&self) -> bool {
        return self.lock().keys.is_empty();
    }

    /// Snapshot of the keys in sorted order.
    pub fn keys(&self) -> Vec<K> {
        return self.lock().keys.clone();
    }

    /// Snapshot of the values, ordered by their keys.
    pub fn values(&self) -> Vec<V> {
        let inner = self.lock();
        return inner
            .keys
            .iter()
            .filter_map(|key| inner.primary.get(key).cloned())
            .collect();
    }

    /// Snapshot of the entries in sorted key order.
    pub fn entries(&self) -> Vec<(K, V)> {
        let inner = self.lock();
        return inner
            .keys
            .iter()
            .filter_map(|key| inner.primary.get(key).map(|value| (key.clone(), value.clone())))
            .collect();
    }
}

impl<K, V> fmt::Debug for SortedIndexStore<K, V>
where
    K: fmt::Debug + Eq + Hash,
    V: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let entries = inner
            .keys
            .iter()
            .filter_map(|key| inner.primary.get(key).map(|value| (key, value)));
        return f.debug_map().entries(entries).finish();
    }
}
