//! Circular navigation over slices.
//!
//! Treats a slice as a ring: stepping forward from the last element lands
//! on the first, and stepping back from the first lands on the last.
//! Elements are located by equality, so every step is a linear scan for
//! the first equal element.
//!
//! A missing reference element is reported as `None` and is never turned
//! into a position. Chained lookups (`next_k_indexes`,
//! `previous_k_indexes`) are all-or-nothing: if any step misses, the whole
//! result is `None` rather than a partial list.
//!
//! Complexity:
//! - index_of, next_index, previous_index: O(n)
//! - next_k_indexes, previous_k_indexes: O(k * n)

use smallvec::SmallVec;

/// Indexes produced by a chained walk. Most walks are short.
pub type Indexes = SmallVec<[usize; 8]>;

/// Index of the first element equal to `element`.
pub fn index_of<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    return seq.iter().position(|item| item == element);
}

/// Index of the last slot, or `None` for an empty slice.
pub fn last_index<T>(seq: &[T]) -> Option<usize> {
    return seq.len().checked_sub(1);
}

/// Index following `element`, wrapping from the end to 0.
pub fn next_index<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    let index = index_of(seq, element)?;
    return Some((index + 1) % seq.len());
}

/// Index preceding `element`, wrapping from 0 to the end.
pub fn previous_index<T: PartialEq>(seq: &[T], element: &T) -> Option<usize> {
    let index = index_of(seq, element)?;
    if index == 0 {
        return Some(seq.len() - 1);
    }
    return Some(index - 1);
}

/// Element following `element`, wrapping around.
pub fn next<'a, T: PartialEq>(seq: &'a [T], element: &T) -> Option<&'a T> {
    return next_index(seq, element).map(|index| &seq[index]);
}

/// Element preceding `element`, wrapping around.
pub fn previous<'a, T: PartialEq>(seq: &'a [T], element: &T) -> Option<&'a T> {
    return previous_index(seq, element).map(|index| &seq[index]);
}

/// The `k` indexes reached by stepping forward from `element`.
///
/// Each step starts from the element found by the previous step, so with
/// duplicate elements the walk follows the first occurrence of each value.
/// Returns `None` if `element` is absent, even when `k == 0`.
pub fn next_k_indexes<T: PartialEq>(seq: &[T], element: &T, k: usize) -> Option<Indexes> {
    return walk(seq, element, k, next_index);
}

/// The `k` indexes reached by stepping backward from `element`.
///
/// See [`next_k_indexes`] for the chaining rules.
pub fn previous_k_indexes<T: PartialEq>(seq: &[T], element: &T, k: usize) -> Option<Indexes> {
    return walk(seq, element, k, previous_index);
}

/// True if `element` is found at index 0.
pub fn is_first<T: PartialEq>(seq: &[T], element: &T) -> bool {
    return index_of(seq, element) == Some(0);
}

/// True if `element` is first found at the last index.
pub fn is_last<T: PartialEq>(seq: &[T], element: &T) -> bool {
    return match (index_of(seq, element), last_index(seq)) {
        (Some(index), Some(last)) => index == last,
        _ => false,
    };
}

fn walk<T, F>(seq: &[T], element: &T, k: usize, step: F) -> Option<Indexes>
where
    T: PartialEq,
    F: Fn(&[T], &T) -> Option<usize>,
{
    index_of(seq, element)?;

    let mut indexes = Indexes::new();
    let mut current = element;
    for _ in 0..k {
        let index = step(seq, current)?;
        indexes.push(index);
        current = &seq[index];
    }
    return Some(indexes);
}
