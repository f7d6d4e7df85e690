//! Construction-time configuration for [`SortedIndexStore`].
//!
//! [`SortedIndexStore`]: crate::store::SortedIndexStore

use crate::comparator::Comparator;

/// Ordering used by a store's auxiliary key index.
///
/// Defaults to the key type's natural order. For `Option` keys the default
/// places `None` before every `Some`, matching `nullable(false)`.
#[derive(Clone, Debug)]
pub struct StoreConfig<K> {
    comparator: Comparator<K>,
}

impl<K: Ord + 'static> Default for StoreConfig<K> {
    fn default() -> Self {
        return Self::natural();
    }
}

impl<K: Ord + 'static> StoreConfig<K> {
    /// Order keys by their `Ord` implementation.
    pub fn natural() -> StoreConfig<K> {
        return StoreConfig {
            comparator: Comparator::natural(),
        };
    }
}

impl<T: Ord + 'static> StoreConfig<Option<T>> {
    /// Natural order over present keys, with `None` keys sorted last when
    /// `null_is_greater` is set and first otherwise.
    pub fn nullable(null_is_greater: bool) -> StoreConfig<Option<T>> {
        return StoreConfig {
            comparator: Comparator::<T>::natural().nulls(null_is_greater),
        };
    }
}

impl<K> StoreConfig<K> {
    /// Order keys with a caller-supplied comparator.
    pub fn with_comparator(comparator: Comparator<K>) -> StoreConfig<K> {
        return StoreConfig { comparator };
    }

    /// The configured comparator.
    pub fn comparator(&self) -> &Comparator<K> {
        return &self.comparator;
    }

    pub(crate) fn into_comparator(self) -> Comparator<K> {
        return self.comparator;
    }
}
