//! View model types consumed by the rendering layer.
//!
//! This module defines the immutable data structs the core hands to whatever
//! renders a listing page. They are computed on demand from view state and
//! the shared cache (see `app::state`), contain no business logic, and carry
//! everything a page needs: the current page of matching listings, paging
//! totals, load and error status, and the filter panel's option lists.

use crate::domain::Listing;
use crate::query::FilterOption;

/// One renderable page of a listing view.
///
/// Computed by `ListingView::page_view`. The error field carries the
/// persistent last-fetch failure, if any, so the UI can offer a manual retry
/// while the (possibly stale) items stay on screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageView {
    /// The listings of the current page, in filtered order.
    pub items: Vec<Listing>,

    /// Effective 1-based page number after clamping.
    pub page_number: usize,

    /// Total number of pages of the filtered set; at least 1.
    pub total_pages: usize,

    /// Size of the whole filtered set, across all pages.
    pub total_matching: usize,

    /// True while a fetch for this view's collection is in flight.
    pub is_loading: bool,

    /// Message of the most recent failed fetch, `None` after a success.
    pub error: Option<String>,
}

/// The filter panel of a listing view: one option list per filter control.
///
/// Computed by `ListingView::filter_panel`. Every list leads with its "all"
/// sentinel; the locality list cascades from the currently selected
/// district.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterPanel {
    /// Category options, derived from the cached listing collection.
    pub category_options: Vec<FilterOption>,

    /// District options, from the cached district collection.
    pub district_options: Vec<FilterOption>,

    /// Locality options for the selected district.
    pub locality_options: Vec<FilterOption>,
}
