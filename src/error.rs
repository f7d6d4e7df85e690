//! Error type shared by the collections in this crate.
//!
//! Only two failures are reported through `Result`: bad constructor
//! arguments and positional reads past the end of an [`IndexedSet`].
//! Positional reads on a [`SortedIndexStore`] miss silently with `None`
//! instead, so they never produce a `CollectionError`.
//!
//! [`IndexedSet`]: crate::set::IndexedSet
//! [`SortedIndexStore`]: crate::store::SortedIndexStore

/// Error returned by fallible collection operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CollectionError {
    /// An argument did not satisfy the operation's contract.
    #[error("invalid argument: {0}")]
    InvalidArgument(&'static str),
    /// A positional read asked for an index outside `0..len`.
    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Result alias for operations that fail with a [`CollectionError`].
pub type Result<T> = std::result::Result<T, CollectionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_out_of_range() {
        let err = CollectionError::IndexOutOfRange { index: 3, len: 2 };
        assert_eq!(err.to_string(), "index 3 out of range for length 2");
    }

    #[test]
    fn display_invalid_argument() {
        let err = CollectionError::InvalidArgument("keys and values differ in length");
        assert_eq!(
            err.to_string(),
            "invalid argument: keys and values differ in length"
        );
    }
}
