//! Insertion-ordered sets.
//!
//! - `OrderedSet`: iterates in insertion order, re-adding moves to the end
//! - `IndexedSet`: an `OrderedSet` with positional reads

pub mod indexed;
pub mod ordered;

pub use indexed::IndexedSet;
pub use ordered::OrderedSet;
