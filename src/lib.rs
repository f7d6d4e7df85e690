//! Orderly - collections that keep an ordering in sync with their contents.
//!
//! - [`set::OrderedSet`]: insertion-ordered set, re-adding moves to the end
//! - [`set::IndexedSet`]: the same set with positional reads
//! - [`store::SortedIndexStore`]: key-value store with a sorted key index
//! - [`circular`]: wrap-around navigation over slices
//!
//! # Quick Start
//!
//! ```
//! use orderly::set::IndexedSet;
//! use orderly::store::SortedIndexStore;
//!
//! let mut set = IndexedSet::new();
//! set.add("a");
//! set.add("b");
//! set.add("a");
//! assert_eq!(set.get(0), Ok(&"b"));
//! assert!(set.get(2).is_err());
//!
//! let store: SortedIndexStore = SortedIndexStore::new();
//! store.put("B".to_string(), "2".to_string());
//! store.put("A".to_string(), "1".to_string());
//! assert_eq!(store.get(0), Some("A".to_string()));
//! assert_eq!(store.get(2), None);
//!
//! let ring = ['a', 'b', 'c'];
//! assert_eq!(orderly::circular::next_index(&ring, &'c'), Some(0));
//! ```

pub mod circular;
pub mod comparator;
pub mod error;
pub mod set;
pub mod store;

pub use comparator::Comparator;
pub use error::CollectionError;
