//! Comparison strategies passed around as values.
//!
//! A [`Comparator`] wraps a shared comparison closure so that ordering can
//! be injected into a collection at construction time and cloned freely.
//! The closure must be `Send + Sync` so that collections holding it stay
//! shareable across threads.
//!
//! `Option` is used to model absent ("null") values. [`Comparator::nulls`]
//! lifts a comparator over `T` to one over `Option<T>` that places `None`
//! consistently before or after every `Some`, without ever passing `None`
//! to the inner comparator.

use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

type CompareFn<T> = dyn Fn(&T, &T) -> Ordering + Send + Sync;

/// A cloneable, thread-safe comparison function.
pub struct Comparator<T> {
    compare: Arc<CompareFn<T>>,
}

impl<T> Clone for Comparator<T> {
    fn clone(&self) -> Self {
        return Comparator {
            compare: Arc::clone(&self.compare),
        };
    }
}

impl<T> fmt::Debug for Comparator<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f.write_str("Comparator");
    }
}

impl<T: Ord + 'static> Default for Comparator<T> {
    fn default() -> Self {
        return Self::natural();
    }
}

impl<T: Ord + 'static> Comparator<T> {
    /// Compare by `T`'s own `Ord` implementation.
    pub fn natural() -> Comparator<T> {
        return Comparator::new(|a: &T, b: &T| a.cmp(b));
    }
}

impl<T: 'static> Comparator<T> {
    /// Wrap a comparison closure.
    pub fn new<F>(compare: F) -> Comparator<T>
    where
        F: Fn(&T, &T) -> Ordering + Send + Sync + 'static,
    {
        return Comparator {
            compare: Arc::new(compare),
        };
    }

    /// The same ordering, reversed.
    pub fn reversed(&self) -> Comparator<T> {
        let inner = Arc::clone(&self.compare);
        return Comparator::new(move |a: &T, b: &T| inner(b, a));
    }

    /// Lift this comparator to `Option<T>`.
    ///
    /// `None` compares equal to `None`. Against any `Some`, `None` is
    /// greater when `null_is_greater` is set and smaller otherwise.
    pub fn nulls(&self, null_is_greater: bool) -> Comparator<Option<T>> {
        let inner = Arc::clone(&self.compare);
        let null_vs_value = if null_is_greater {
            Ordering::Greater
        } else {
            Ordering::Less
        };
        return Comparator::new(move |a: &Option<T>, b: &Option<T>| match (a, b) {
            (None, None) => Ordering::Equal,
            (None, Some(_)) => null_vs_value,
            (Some(_), None) => null_vs_value.reverse(),
            (Some(a), Some(b)) => inner(a, b),
        });
    }
}

impl<T> Comparator<T> {
    /// Compare two values.
    #[inline]
    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        return (self.compare)(a, b);
    }

    /// Stable sort of `items`.
    ///
    /// A panic from the comparison closure propagates to the caller. The
    /// slice then still holds every original element, in unspecified order.
    pub fn sort(&self, items: &mut [T]) {
        items.sort_by(|a, b| (self.compare)(a, b));
    }

    /// Check whether `items` is in non-decreasing order.
    pub fn is_sorted(&self, items: &[T]) -> bool {
        return items
            .windows(2)
            .all(|pair| self.compare(&pair[0], &pair[1]) != Ordering::Greater);
    }
}
