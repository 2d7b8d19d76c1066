//! The process-wide directory cache.
//!
//! [`DirectoryCache`] owns one [`CacheEntry`] per cached collection: the three
//! listing kinds plus the two geographic reference collections. It is created
//! once by the embedding application, lives for the process lifetime, and is
//! shared read-only by every view; mutation happens only through the
//! fetch-lifecycle methods, driven by the event handler.
//!
//! There is no global singleton. Consumers receive the cache by reference,
//! which keeps tests hermetic and makes invalidation explicit.

use crate::domain::{District, EntityKind, Listing, ListingKind, Locality};

use super::entry::CacheEntry;

/// One cache entry per entity kind, owned by the process.
///
/// Listing collections are stored per [`ListingKind`]; districts and
/// localities have dedicated typed entries. All entries start empty and
/// unloaded.
#[derive(Debug, Clone, Default)]
pub struct DirectoryCache {
    photos: CacheEntry<Listing>,
    videos: CacheEntry<Listing>,
    news: CacheEntry<Listing>,
    districts: CacheEntry<District>,
    localities: CacheEntry<Locality>,
}

impl DirectoryCache {
    /// Creates an empty cache with all collections unloaded.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the cache entry for a listing collection.
    #[must_use]
    pub fn listings(&self, kind: ListingKind) -> &CacheEntry<Listing> {
        match kind {
            ListingKind::Photo => &self.photos,
            ListingKind::Video => &self.videos,
            ListingKind::News => &self.news,
        }
    }

    fn listings_mut(&mut self, kind: ListingKind) -> &mut CacheEntry<Listing> {
        match kind {
            ListingKind::Photo => &mut self.photos,
            ListingKind::Video => &mut self.videos,
            ListingKind::News => &mut self.news,
        }
    }

    /// Returns the cache entry for the district collection.
    #[must_use]
    pub fn districts(&self) -> &CacheEntry<District> {
        &self.districts
    }

    /// Returns the cache entry for the locality collection.
    #[must_use]
    pub fn localities(&self) -> &CacheEntry<Locality> {
        &self.localities
    }

    /// Unix timestamp of the last successful fetch for a collection.
    #[must_use]
    pub fn last_fetched_at(&self, kind: EntityKind) -> Option<i64> {
        match kind {
            EntityKind::Photos => self.photos.last_fetched_at,
            EntityKind::Videos => self.videos.last_fetched_at,
            EntityKind::News => self.news.last_fetched_at,
            EntityKind::Districts => self.districts.last_fetched_at,
            EntityKind::Localities => self.localities.last_fetched_at,
        }
    }

    /// True while a fetch for the collection is in flight.
    #[must_use]
    pub fn is_loading(&self, kind: EntityKind) -> bool {
        match kind {
            EntityKind::Photos => self.photos.is_loading,
            EntityKind::Videos => self.videos.is_loading,
            EntityKind::News => self.news.is_loading,
            EntityKind::Districts => self.districts.is_loading,
            EntityKind::Localities => self.localities.is_loading,
        }
    }

    /// Applies the freshness policy to one collection.
    ///
    /// Typed dispatch over [`should_fetch`](super::freshness::should_fetch);
    /// true when the collection must be refreshed.
    #[must_use]
    pub fn is_stale(&self, kind: EntityKind, ttl_secs: i64, now: i64) -> bool {
        use super::freshness::should_fetch;

        match kind {
            EntityKind::Photos => should_fetch(&self.photos, ttl_secs, now),
            EntityKind::Videos => should_fetch(&self.videos, ttl_secs, now),
            EntityKind::News => should_fetch(&self.news, ttl_secs, now),
            EntityKind::Districts => should_fetch(&self.districts, ttl_secs, now),
            EntityKind::Localities => should_fetch(&self.localities, ttl_secs, now),
        }
    }

    /// Marks a fetch for the collection as started.
    ///
    /// Returns `false` when a fetch is already in flight; the caller must not
    /// dispatch a second request in that case (single-in-flight discipline).
    pub fn begin_fetch(&mut self, kind: EntityKind) -> bool {
        let started = match kind {
            EntityKind::Photos => self.photos.begin(),
            EntityKind::Videos => self.videos.begin(),
            EntityKind::News => self.news.begin(),
            EntityKind::Districts => self.districts.begin(),
            EntityKind::Localities => self.localities.begin(),
        };
        tracing::debug!(kind = ?kind, started = started, "fetch begin requested");
        started
    }

    /// Stores a successfully fetched listing collection.
    pub fn complete_listings(&mut self, kind: ListingKind, items: Vec<Listing>, now: i64) {
        let _span = tracing::debug_span!("cache_complete_listings", kind = ?kind).entered();
        self.listings_mut(kind).complete(items, now);
    }

    /// Stores the successfully fetched district collection.
    pub fn complete_districts(&mut self, items: Vec<District>, now: i64) {
        let _span = tracing::debug_span!("cache_complete_districts").entered();
        self.districts.complete(items, now);
    }

    /// Stores the successfully fetched locality collection.
    pub fn complete_localities(&mut self, items: Vec<Locality>, now: i64) {
        let _span = tracing::debug_span!("cache_complete_localities").entered();
        self.localities.complete(items, now);
    }

    /// Records a failed fetch for the collection.
    ///
    /// The entry keeps its items and timestamp; only the error and loading
    /// flag change.
    pub fn fail_fetch(&mut self, kind: EntityKind, message: impl Into<String>) {
        let message = message.into();
        tracing::debug!(kind = ?kind, error = %message, "recording fetch failure");
        match kind {
            EntityKind::Photos => self.photos.fail(message),
            EntityKind::Videos => self.videos.fail(message),
            EntityKind::News => self.news.fail(message),
            EntityKind::Districts => self.districts.fail(message),
            EntityKind::Localities => self.localities.fail(message),
        }
    }

    /// Forces a collection stale without discarding its items.
    pub fn invalidate(&mut self, kind: EntityKind) {
        tracing::debug!(kind = ?kind, "invalidating cached collection");
        match kind {
            EntityKind::Photos => self.photos.invalidate(),
            EntityKind::Videos => self.videos.invalidate(),
            EntityKind::News => self.news.invalidate(),
            EntityKind::Districts => self.districts.invalidate(),
            EntityKind::Localities => self.localities.invalidate(),
        }
    }

    /// Resets every collection to its initial empty state.
    pub fn clear(&mut self) {
        tracing::debug!("clearing directory cache");
        self.photos.clear();
        self.videos.clear();
        self.news.clear();
        self.districts.clear();
        self.localities.clear();
    }
}
