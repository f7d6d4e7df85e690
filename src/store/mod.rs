//! Key-value stores with positional access.

pub mod config;
pub mod sorted_index;

pub use config::StoreConfig;
pub use sorted_index::SortedIndexStore;
