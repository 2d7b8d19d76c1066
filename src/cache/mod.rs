//! Cache layer: fetched collections and the freshness policy.
//!
//! This module holds the state side of the cache-and-query engine. One
//! [`DirectoryCache`] per process owns a [`CacheEntry`] per entity kind; the
//! pure [`should_fetch`] policy decides when an entry must be refreshed.
//!
//! # Modules
//!
//! - `entry`: Per-collection fetch state and transitions
//! - `freshness`: The pure fetch policy and its default TTL
//! - `store`: The process-wide cache of all collections

pub mod entry;
pub mod freshness;
pub mod store;

pub use entry::CacheEntry;
pub use freshness::{should_fetch, DEFAULT_TTL_SECS};
pub use store::DirectoryCache;
