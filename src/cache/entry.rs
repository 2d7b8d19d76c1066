//! Cached collection state.
//!
//! A [`CacheEntry`] holds one fetched collection together with the bookkeeping
//! the fetch policy and the views need: when the collection was last fetched
//! successfully, whether a fetch is currently in flight, and the last fetch
//! error if any.
//!
//! # Invariants
//!
//! - `last_fetched_at` is set only by [`CacheEntry::complete`], immediately
//!   after a successful fetch. A failed fetch never touches it.
//! - A failed fetch leaves `items` untouched: last-known-good data stays
//!   visible alongside the error (show stale data over a blank screen).

use serde::{Deserialize, Serialize};

/// One cached collection plus its fetch status.
///
/// Entries start empty and unloaded; the store drives them through the
/// `begin` / `complete` / `fail` transitions as fetches run. Item order is
/// the backend's response order and is never reordered by the cache.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry<T> {
    /// The fetched collection, in backend response order.
    pub items: Vec<T>,

    /// Unix timestamp (seconds) of the last successful fetch, `None` until
    /// one completes.
    pub last_fetched_at: Option<i64>,

    /// True while a fetch for this collection is in flight. Acts as the
    /// single-in-flight mutual-exclusion flag, not a queue.
    pub is_loading: bool,

    /// Message of the most recent failed fetch, cleared on the next success.
    pub error: Option<String>,
}

impl<T> Default for CacheEntry<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            last_fetched_at: None,
            is_loading: false,
            error: None,
        }
    }
}

impl<T> CacheEntry<T> {
    /// Creates an empty, unloaded entry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a fetch as started.
    ///
    /// Returns `false` without changing anything when a fetch is already in
    /// flight, so a second trigger is a no-op.
    pub fn begin(&mut self) -> bool {
        if self.is_loading {
            tracing::trace!("fetch already in flight, ignoring trigger");
            return false;
        }
        self.is_loading = true;
        true
    }

    /// Records a successful fetch.
    ///
    /// Replaces the items, stamps `last_fetched_at` with `now`, clears the
    /// loading flag and any previous error.
    pub fn complete(&mut self, items: Vec<T>, now: i64) {
        tracing::debug!(item_count = items.len(), fetched_at = now, "fetch completed");
        self.items = items;
        self.last_fetched_at = Some(now);
        self.is_loading = false;
        self.error = None;
    }

    /// Records a failed fetch.
    ///
    /// Stores the error message and clears the loading flag; items and
    /// `last_fetched_at` are left untouched so stale data remains visible.
    pub fn fail(&mut self, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(error = %message, stale_items = self.items.len(), "fetch failed");
        self.is_loading = false;
        self.error = Some(message);
    }

    /// Forces the entry stale without discarding its items.
    ///
    /// The next freshness check will request a refresh, but the current
    /// collection stays available until the refresh completes.
    pub fn invalidate(&mut self) {
        self.last_fetched_at = None;
    }

    /// Resets the entry to its initial empty state.
    pub fn clear(&mut self) {
        self.items.clear();
        self.last_fetched_at = None;
        self.is_loading = false;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_exclusive_while_loading() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        assert!(entry.begin());
        assert!(!entry.begin());
        entry.complete(vec![1], 100);
        assert!(entry.begin());
    }

    #[test]
    fn complete_stamps_timestamp_and_clears_error() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.begin();
        entry.fail("network unreachable");
        assert!(entry.error.is_some());
        assert_eq!(entry.last_fetched_at, None);

        entry.begin();
        entry.complete(vec![1, 2, 3], 500);
        assert_eq!(entry.items, vec![1, 2, 3]);
        assert_eq!(entry.last_fetched_at, Some(500));
        assert!(!entry.is_loading);
        assert!(entry.error.is_none());
    }

    #[test]
    fn fail_preserves_stale_items_and_timestamp() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.begin();
        entry.complete(vec![7, 8], 100);

        entry.begin();
        entry.fail("HTTP 502");
        assert_eq!(entry.items, vec![7, 8]);
        assert_eq!(entry.last_fetched_at, Some(100));
        assert_eq!(entry.error.as_deref(), Some("HTTP 502"));
        assert!(!entry.is_loading);
    }

    #[test]
    fn invalidate_keeps_items_but_drops_timestamp() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.begin();
        entry.complete(vec![4], 100);
        entry.invalidate();
        assert_eq!(entry.items, vec![4]);
        assert_eq!(entry.last_fetched_at, None);
    }
}
