//! Per-view state and view model computation.
//!
//! This module defines [`ListingView`], the state one listing page owns: the
//! collection it displays, its filter selections and its page position. A
//! view never owns fetched data; it reads the shared
//! [`DirectoryCache`](crate::cache::DirectoryCache) through the selector
//! methods, which recompute immutable view models on every call.
//!
//! # State Components
//!
//! - **Target kind**: which listing collection the view displays
//! - **Filters**: the per-view predicate selections (`FilterState`)
//! - **Page**: 1-based position and fixed page size (`PageState`)
//!
//! Views are independent: two views over the same collection share cached
//! items but never filter or page state.

use crate::cache::DirectoryCache;
use crate::domain::{EntityKind, ListingKind};
use crate::query::{self, FilterState};
use crate::view::model::{FilterPanel, PageView};
use crate::Config;

/// Page position of one listing view.
///
/// `current` is 1-based and clamped into `[1, total_pages]` by every
/// recomputation; `size` is fixed for the lifetime of the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageState {
    /// Requested 1-based page number.
    pub current: usize,

    /// Items per page; positive.
    pub size: usize,
}

/// State container of one listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingView {
    /// Which listing collection this view displays.
    pub kind: ListingKind,

    /// Current filter selections.
    pub filters: FilterState,

    /// Current page position.
    pub page: PageState,
}

impl ListingView {
    /// Creates a view over one listing collection.
    ///
    /// Filters start at their all-sentinel defaults and the page position at
    /// 1. A non-positive `page_size` is lifted to 1; `Config` validation
    /// normally rejects it before a view is built.
    #[must_use]
    pub fn new(kind: ListingKind, page_size: usize) -> Self {
        Self {
            kind,
            filters: FilterState::default(),
            page: PageState {
                current: 1,
                size: page_size.max(1),
            },
        }
    }

    /// Creates a view with the configured page size.
    #[must_use]
    pub fn with_config(kind: ListingKind, config: &Config) -> Self {
        Self::new(kind, config.page_size)
    }

    /// The cache collection this view fetches and displays.
    #[must_use]
    pub fn target(&self) -> EntityKind {
        EntityKind::from(self.kind)
    }

    /// Resets every filter and the page position to their defaults.
    pub fn clear_filters(&mut self) {
        self.filters = FilterState::default();
        self.page.current = 1;
    }

    /// Computes the renderable page of this view from the shared cache.
    ///
    /// Runs the pure pipeline on every call: filter the cached collection,
    /// paginate the result, attach the entry's load and error status. The
    /// returned page number is the clamped one; callers that persist it can
    /// write it back to keep state and display aligned.
    ///
    /// # Examples
    ///
    /// ```
    /// use vitrina::app::ListingView;
    /// use vitrina::cache::DirectoryCache;
    /// use vitrina::domain::ListingKind;
    ///
    /// let cache = DirectoryCache::new();
    /// let view = ListingView::new(ListingKind::Photo, 12);
    /// let page = view.page_view(&cache);
    /// assert!(page.items.is_empty());
    /// assert_eq!(page.total_pages, 1);
    /// ```
    #[must_use]
    pub fn page_view(&self, cache: &DirectoryCache) -> PageView {
        let _span = tracing::debug_span!(
            "compute_page_view",
            kind = ?self.kind,
            page = self.page.current
        )
        .entered();

        let entry = cache.listings(self.kind);
        let filtered = query::apply(&entry.items, &self.filters);
        let total_matching = filtered.len();
        let page = query::paginate(&filtered, self.page.size, self.page.current);

        tracing::debug!(
            total_matching = total_matching,
            page_number = page.number,
            total_pages = page.total_pages,
            "page view computed"
        );

        PageView {
            items: page.items,
            page_number: page.number,
            total_pages: page.total_pages,
            total_matching,
            is_loading: entry.is_loading,
            error: entry.error.clone(),
        }
    }

    /// Computes the filter panel option lists from the shared cache.
    ///
    /// The locality list cascades from the currently selected district; the
    /// category list is derived from the view's cached collection.
    #[must_use]
    pub fn filter_panel(&self, cache: &DirectoryCache) -> FilterPanel {
        FilterPanel {
            category_options: query::category_options(&cache.listings(self.kind).items),
            district_options: query::district_options(&cache.districts().items),
            locality_options: query::locality_options(
                &cache.localities().items,
                &self.filters.district,
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{District, Listing, Locality};
    use crate::query::FilterChoice;

    fn seeded_cache() -> DirectoryCache {
        let mut cache = DirectoryCache::new();
        let listings: Vec<Listing> = (1..=25)
            .map(|i| {
                Listing::new(format!("m-{i}"), format!("Site {i}"), "")
                    .with_category(if i <= 15 { "heritage" } else { "natural" })
                    .with_district("d-1")
            })
            .collect();
        cache.complete_listings(ListingKind::Photo, listings, 100);
        cache.complete_districts(vec![District::new("d-1", "North Coast")], 100);
        cache.complete_localities(vec![Locality::new("l-1", "Port Arens", "d-1")], 100);
        cache
    }

    #[test]
    fn page_view_filters_then_paginates() {
        let cache = seeded_cache();
        let mut view = ListingView::new(ListingKind::Photo, 12);
        view.filters.category = FilterChoice::id("heritage");
        view.page.current = 2;

        let page = view.page_view(&cache);
        assert_eq!(page.total_matching, 15);
        assert_eq!(page.total_pages, 2);
        assert_eq!(page.page_number, 2);
        assert_eq!(page.items.len(), 3);
        assert_eq!(page.items[0].id, "m-13");
    }

    #[test]
    fn page_view_clamps_a_stale_page_position() {
        let cache = seeded_cache();
        let mut view = ListingView::new(ListingKind::Photo, 12);
        view.page.current = 99;

        let page = view.page_view(&cache);
        assert_eq!(page.page_number, 3);
    }

    #[test]
    fn page_view_surfaces_entry_status() {
        let mut cache = seeded_cache();
        cache.begin_fetch(EntityKind::Photos);
        cache.fail_fetch(EntityKind::Photos, "HTTP 502");

        let view = ListingView::new(ListingKind::Photo, 12);
        let page = view.page_view(&cache);
        assert_eq!(page.error.as_deref(), Some("HTTP 502"));
        assert_eq!(page.total_matching, 25); // stale items still shown
    }

    #[test]
    fn filter_panel_cascades_localities_from_district() {
        let mut cache = seeded_cache();
        cache.complete_localities(
            vec![
                Locality::new("l-1", "Port Arens", "d-1"),
                Locality::new("l-9", "Veyra Falls", "d-2"),
            ],
            100,
        );

        let mut view = ListingView::new(ListingKind::Photo, 12);
        view.filters.district = FilterChoice::id("d-1");

        let panel = view.filter_panel(&cache);
        assert_eq!(panel.locality_options.len(), 2); // sentinel + Port Arens
        assert_eq!(panel.district_options.len(), 2);
        assert_eq!(panel.category_options.len(), 3);
    }

    #[test]
    fn clear_filters_resets_selections_and_page() {
        let mut view = ListingView::new(ListingKind::News, 12);
        view.filters.search = "ferry".to_string();
        view.filters.district = FilterChoice::id("d-1");
        view.page.current = 4;

        view.clear_filters();
        assert!(view.filters.is_default());
        assert_eq!(view.page.current, 1);
    }
}
