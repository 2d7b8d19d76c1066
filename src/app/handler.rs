//! Event handling and state transition logic.
//!
//! This module implements the event handler that processes view mutations and
//! fetch-boundary responses, translating them into state changes and action
//! sequences. It is the only place that mutates a [`ListingView`] or the
//! shared [`DirectoryCache`]; everything it derives goes through the pure
//! query layer.
//!
//! # Architecture
//!
//! Unidirectional data flow, the same shape for every event:
//! 1. An event arrives from the view layer or the fetch worker
//! 2. [`handle_event`] pattern-matches the event type
//! 3. State mutations occur on the view or the cache
//! 4. Actions are collected and returned for the runtime to execute
//!
//! Two transition rules are enforced here rather than left to callers,
//! because skipping either is a correctness bug, not a rendering glitch:
//!
//! - **Page reset**: every filter mutation resets the page position to 1.
//!   Page position survives only same-filter page navigation.
//! - **Locality reconciliation**: a locality selection is only ever valid
//!   within the current option set. The handler arbitrates it on every
//!   transition that can invalidate it: selecting a locality, changing the
//!   district, and receiving fresh geography. Without this, an invisible
//!   locality constraint keeps filtering the listings.

use crate::cache::DirectoryCache;
use crate::domain::error::Result;
use crate::domain::EntityKind;
use crate::query::{self, FilterChoice};
use crate::worker::{FetchRequest, FetchResponse};
use crate::Config;

use super::actions::Action;
use super::state::ListingView;

/// Events processed by the handler.
///
/// The `Set*`, `ClearFilters` and `SetPage` variants are the mutators the
/// view layer exposes to the user; `RefreshIfStale` is the fetch trigger a
/// view fires when it becomes visible; `BackendResponse` delivers the fetch
/// worker's result back into the cache.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Selects a category filter value.
    SetCategory(FilterChoice),
    /// Selects a district filter value; cascades into the locality filter.
    SetDistrict(FilterChoice),
    /// Selects a locality filter value.
    SetLocality(FilterChoice),
    /// Replaces the free-text search term.
    SetSearch(String),
    /// Resets every filter to its default.
    ClearFilters,
    /// Navigates to a page of the current filtered set.
    SetPage(usize),
    /// Requests a refresh of this view's collections if they are stale.
    RefreshIfStale,
    /// Delivers a fetch worker response.
    BackendResponse(FetchResponse),
}

/// Processes an event, mutates state, and returns actions to execute.
///
/// Returns `(recompute, actions)`: `recompute` is true when derived view
/// models (page view, filter panel) may have changed and should be rebuilt;
/// `actions` are fetch dispatches for the runtime, empty for purely local
/// transitions.
///
/// # Errors
///
/// The current event set is total; the `Result` return keeps the signature
/// stable for transitions that can fail (and mirrors how callers already
/// consume it).
#[allow(clippy::unnecessary_wraps)]
pub fn handle_event(
    view: &mut ListingView,
    cache: &mut DirectoryCache,
    config: &Config,
    event: &Event,
) -> Result<(bool, Vec<Action>)> {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::SetCategory(choice) => {
            tracing::debug!(category = ?choice, "category filter changed");
            view.filters.category = choice.clone();
            view.page.current = 1;
            Ok((true, vec![]))
        }

        Event::SetDistrict(choice) => {
            tracing::debug!(district = ?choice, "district filter changed");
            view.filters.district = choice.clone();

            // Required post-condition of a district change: a locality that
            // is no longer offered must not keep constraining the listings.
            let options = query::locality_options(&cache.localities().items, &view.filters.district);
            view.filters.locality = query::reconcile_selection(&view.filters.locality, &options);

            view.page.current = 1;
            Ok((true, vec![]))
        }

        Event::SetLocality(choice) => {
            tracing::debug!(locality = ?choice, "locality filter changed");

            // A locality outside the selected district's option set must not
            // become an invisible constraint; arbitrate it away immediately.
            let options = query::locality_options(&cache.localities().items, &view.filters.district);
            view.filters.locality = query::reconcile_selection(choice, &options);

            view.page.current = 1;
            Ok((true, vec![]))
        }

        Event::SetSearch(term) => {
            tracing::trace!(term = %term, "search term changed");
            view.filters.search.clone_from(term);
            view.page.current = 1;
            Ok((true, vec![]))
        }

        Event::ClearFilters => {
            tracing::debug!("filters cleared");
            view.clear_filters();
            Ok((true, vec![]))
        }

        Event::SetPage(requested) => {
            let entry = cache.listings(view.kind);
            let filtered = query::apply(&entry.items, &view.filters);
            let page = query::paginate(&filtered, view.page.size, *requested);

            tracing::debug!(requested = requested, clamped = page.number, "page navigation");
            let changed = view.page.current != page.number;
            view.page.current = page.number;
            Ok((changed, vec![]))
        }

        Event::RefreshIfStale => {
            let now = chrono::Utc::now().timestamp();
            let mut actions = vec![];

            // A listing view depends on three collections: its own listings
            // and both geographic reference sets for the filter panel.
            for kind in [view.target(), EntityKind::Districts, EntityKind::Localities] {
                let ttl = config.ttl_secs(kind);
                if cache.is_stale(kind, ttl, now) && cache.begin_fetch(kind) {
                    tracing::debug!(kind = ?kind, ttl_secs = ttl, "dispatching refresh");
                    actions.push(Action::PostToWorker(FetchRequest::for_kind(kind)));
                }
            }

            let dispatched = !actions.is_empty();
            Ok((dispatched, actions))
        }

        Event::BackendResponse(response) => {
            let now = chrono::Utc::now().timestamp();

            match response {
                FetchResponse::ListingsLoaded { kind, listings } => {
                    cache.complete_listings(*kind, listings.clone(), now);
                }
                FetchResponse::DistrictsLoaded { districts } => {
                    cache.complete_districts(districts.clone(), now);
                }
                FetchResponse::LocalitiesLoaded { localities } => {
                    cache.complete_localities(localities.clone(), now);

                    // Fresh geography can shrink the option set; apply the
                    // same reconciliation as a district change.
                    let options =
                        query::locality_options(&cache.localities().items, &view.filters.district);
                    view.filters.locality =
                        query::reconcile_selection(&view.filters.locality, &options);
                }
                FetchResponse::Failed { target, message } => {
                    cache.fail_fetch(*target, message.clone());
                }
            }

            Ok((true, vec![]))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{District, Listing, ListingKind, Locality};
    use crate::worker::FetchResponse;

    fn setup() -> (ListingView, DirectoryCache, Config) {
        // Freshly fetched collections; RefreshIfStale reads the real clock,
        // so the timestamps must be current for the entries to count as
        // fresh.
        let now = chrono::Utc::now().timestamp();
        let mut cache = DirectoryCache::new();
        cache.complete_listings(
            ListingKind::Photo,
            (1..=30)
                .map(|i| {
                    Listing::new(format!("m-{i}"), format!("Site {i}"), "").with_district("d-1")
                })
                .collect(),
            now,
        );
        cache.complete_districts(
            vec![District::new("d-1", "North Coast"), District::new("d-2", "Highlands")],
            now,
        );
        cache.complete_localities(
            vec![
                Locality::new("l-1", "Port Arens", "d-1"),
                Locality::new("l-9", "Veyra Falls", "d-2"),
            ],
            now,
        );
        (ListingView::new(ListingKind::Photo, 12), cache, Config::default())
    }

    #[test]
    fn filter_mutations_reset_the_page_position() {
        let (mut view, mut cache, config) = setup();
        view.page.current = 3;

        handle_event(&mut view, &mut cache, &config, &Event::SetCategory(FilterChoice::id("heritage")))
            .unwrap();
        assert_eq!(view.page.current, 1);

        view.page.current = 3;
        handle_event(&mut view, &mut cache, &config, &Event::SetSearch("fort".to_string())).unwrap();
        assert_eq!(view.page.current, 1);
    }

    #[test]
    fn page_navigation_preserves_filters_and_clamps() {
        let (mut view, mut cache, config) = setup();

        handle_event(&mut view, &mut cache, &config, &Event::SetPage(2)).unwrap();
        assert_eq!(view.page.current, 2);

        handle_event(&mut view, &mut cache, &config, &Event::SetPage(99)).unwrap();
        assert_eq!(view.page.current, 3); // 30 items, size 12
        assert!(view.filters.is_default());
    }

    #[test]
    fn district_change_resets_an_orphaned_locality() {
        let (mut view, mut cache, config) = setup();

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::id("d-1")))
            .unwrap();
        handle_event(&mut view, &mut cache, &config, &Event::SetLocality(FilterChoice::id("l-1")))
            .unwrap();
        assert_eq!(view.filters.locality, FilterChoice::id("l-1")); // offered under d-1

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::id("d-2")))
            .unwrap();
        assert_eq!(view.filters.locality, FilterChoice::All); // l-1 no longer offered
    }

    #[test]
    fn a_locality_never_outlives_the_district_it_was_picked_under() {
        // Select district d-1, attempt the d-2 locality l-9, then switch the
        // district to d-2: the locality must end at the sentinel, never as a
        // silently surviving constraint.
        let (mut view, mut cache, config) = setup();

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::id("d-1")))
            .unwrap();
        handle_event(&mut view, &mut cache, &config, &Event::SetLocality(FilterChoice::id("l-9")))
            .unwrap();
        assert_eq!(view.filters.locality, FilterChoice::All); // not offered under d-1

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::id("d-2")))
            .unwrap();
        assert_eq!(view.filters.locality, FilterChoice::All);
    }

    #[test]
    fn widening_to_all_districts_keeps_the_locality() {
        let (mut view, mut cache, config) = setup();

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::id("d-1")))
            .unwrap();
        handle_event(&mut view, &mut cache, &config, &Event::SetLocality(FilterChoice::id("l-1")))
            .unwrap();

        handle_event(&mut view, &mut cache, &config, &Event::SetDistrict(FilterChoice::All))
            .unwrap();
        assert_eq!(view.filters.locality, FilterChoice::id("l-1")); // still offered
    }

    #[test]
    fn refresh_dispatches_only_stale_collections_once() {
        let (mut view, mut cache, config) = setup();
        cache.invalidate(EntityKind::Photos);

        let (_, actions) =
            handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale).unwrap();
        assert_eq!(actions, vec![Action::PostToWorker(FetchRequest::for_kind(EntityKind::Photos))]);

        // Second trigger while the fetch is in flight is a no-op.
        let (recompute, actions) =
            handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale).unwrap();
        assert!(actions.is_empty());
        assert!(!recompute);
    }

    #[test]
    fn cold_start_refreshes_every_dependency() {
        let mut cache = DirectoryCache::new();
        let mut view = ListingView::new(ListingKind::News, 12);
        let config = Config::default();

        let (_, actions) =
            handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale).unwrap();
        assert_eq!(actions.len(), 3); // news + districts + localities
    }

    #[test]
    fn successful_response_lands_in_the_cache() {
        let (mut view, mut cache, config) = setup();
        cache.invalidate(EntityKind::Photos);
        handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale).unwrap();

        let response = FetchResponse::ListingsLoaded {
            kind: ListingKind::Photo,
            listings: vec![Listing::new("m-new", "New site", "")],
        };
        handle_event(&mut view, &mut cache, &config, &Event::BackendResponse(response)).unwrap();

        let entry = cache.listings(ListingKind::Photo);
        assert_eq!(entry.items.len(), 1);
        assert!(!entry.is_loading);
        assert!(entry.last_fetched_at.is_some());
    }

    #[test]
    fn failed_response_keeps_stale_data_and_records_the_error() {
        let (mut view, mut cache, config) = setup();
        cache.invalidate(EntityKind::Photos);
        handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale).unwrap();

        let response = FetchResponse::Failed {
            target: EntityKind::Photos,
            message: "backend timed out".to_string(),
        };
        handle_event(&mut view, &mut cache, &config, &Event::BackendResponse(response)).unwrap();

        let entry = cache.listings(ListingKind::Photo);
        assert_eq!(entry.items.len(), 30);
        assert_eq!(entry.error.as_deref(), Some("backend timed out"));
        assert!(!entry.is_loading);
    }

    #[test]
    fn fresh_geography_reconciles_the_locality_selection() {
        let (mut view, mut cache, config) = setup();
        view.filters.district = FilterChoice::id("d-1");
        view.filters.locality = FilterChoice::id("l-1");

        // A refreshed locality collection no longer contains l-1.
        let response = FetchResponse::LocalitiesLoaded {
            localities: vec![Locality::new("l-2", "Casterbay", "d-1")],
        };
        handle_event(&mut view, &mut cache, &config, &Event::BackendResponse(response)).unwrap();
        assert_eq!(view.filters.locality, FilterChoice::All);
    }

    #[test]
    fn late_response_for_an_unwatched_collection_is_tolerated() {
        // The view displays photos; a leftover video response still lands.
        let (mut view, mut cache, config) = setup();
        let response = FetchResponse::ListingsLoaded {
            kind: ListingKind::Video,
            listings: vec![Listing::new("v-1", "Festival aerial", "")],
        };
        handle_event(&mut view, &mut cache, &config, &Event::BackendResponse(response)).unwrap();
        assert_eq!(cache.listings(ListingKind::Video).items.len(), 1);
    }
}
