//! Fetch policy: deciding when a cached collection must be refreshed.
//!
//! A single pure function answers "should this collection be fetched now?"
//! from a cache entry, a freshness threshold and the current time. It has no
//! side effects and takes the clock as a parameter, so the policy is fully
//! deterministic under test.
//!
//! The caller is responsible for the single-in-flight discipline: this
//! function does not look at `is_loading`, the store's `begin_fetch` does.

use super::entry::CacheEntry;

/// Default freshness threshold in seconds (one hour).
///
/// Collections older than this are considered stale and refreshed on the next
/// trigger. Overridable per entity kind through [`crate::Config`].
pub const DEFAULT_TTL_SECS: i64 = 3600;

/// Returns true when the entry must be refreshed from the backend.
///
/// A refresh is required if the cached collection is empty, has never been
/// fetched successfully, or its age has reached `ttl_secs`. A fresh,
/// non-empty cache returns false.
///
/// `now` is a unix timestamp in seconds, the convention used throughout the
/// cache (`chrono::Utc::now().timestamp()` at the call sites).
///
/// # Examples
///
/// ```
/// use vitrina::cache::{should_fetch, CacheEntry, DEFAULT_TTL_SECS};
///
/// let mut entry: CacheEntry<u32> = CacheEntry::new();
/// assert!(should_fetch(&entry, DEFAULT_TTL_SECS, 10_000));
///
/// entry.complete(vec![1], 10_000);
/// assert!(!should_fetch(&entry, DEFAULT_TTL_SECS, 10_001));
/// assert!(should_fetch(&entry, DEFAULT_TTL_SECS, 10_000 + DEFAULT_TTL_SECS));
/// ```
#[must_use]
pub fn should_fetch<T>(entry: &CacheEntry<T>, ttl_secs: i64, now: i64) -> bool {
    if entry.items.is_empty() {
        return true;
    }

    entry
        .last_fetched_at
        .map_or(true, |fetched_at| now - fetched_at >= ttl_secs)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_entry_is_always_stale() {
        let entry: CacheEntry<u32> = CacheEntry::new();
        assert!(should_fetch(&entry, 3600, 0));
    }

    #[test]
    fn missing_timestamp_is_stale_even_with_items() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.complete(vec![1], 100);
        entry.invalidate();
        assert!(should_fetch(&entry, 3600, 101));
    }

    #[test]
    fn fresh_entry_is_not_refetched() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.complete(vec![1], 1000);
        assert!(!should_fetch(&entry, 3600, 1000 + 3599));
    }

    #[test]
    fn entry_at_ttl_boundary_is_stale() {
        let mut entry: CacheEntry<u32> = CacheEntry::new();
        entry.complete(vec![1], 1000);
        assert!(should_fetch(&entry, 3600, 1000 + 3600));
        assert!(should_fetch(&entry, 3600, 1000 + 3601));
    }
}
