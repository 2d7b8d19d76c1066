//! Filter state and the predicate conjunction over cached listings.
//!
//! Every listing view owns a [`FilterState`]; [`apply`] evaluates it against
//! a cached collection and returns the matching subset in original order.
//! All predicates must pass (conjunction), each is total, and missing fields
//! simply fail the relevant predicate. The function never errors and never
//! reorders.
//!
//! # Predicates
//!
//! 1. **Status** (implicit, not part of the state): the listing must be
//!    visible; listings without a status pass (legacy-data tolerance).
//! 2. **Search**: trimmed, case-insensitive substring of title, description
//!    or any tag. An empty or whitespace-only term is no constraint.
//! 3. **Category**: sentinel passes everything, otherwise exact equality.
//! 4. **District**: sentinel passes everything, otherwise id equality on
//!    `district_ref`; a listing without a district fails a specific selection.
//! 5. **Locality**: symmetric to district, against `locality_ref`.
//!
//! The predicates are order-independent for correctness; they are evaluated
//! cheapest-first (status, search, category, district, locality), which
//! affects performance only, never the result set.

use serde::{Deserialize, Serialize};

use crate::domain::Listing;

/// A single-select filter value: the "all" sentinel or a specific id.
///
/// Making the sentinel explicit keeps the predicate behavior total: there is
/// no magic string compared against ids, and an absent entity field has a
/// defined outcome against both variants.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FilterChoice {
    /// No constraint; every listing passes.
    All,
    /// Only listings referencing this id (or carrying this category) pass.
    Id(String),
}

impl FilterChoice {
    /// Creates a specific selection from an id.
    pub fn id(value: impl Into<String>) -> Self {
        Self::Id(value.into())
    }

    /// Returns true for the "all" sentinel.
    #[must_use]
    pub fn is_all(&self) -> bool {
        matches!(self, Self::All)
    }

    /// Evaluates this choice against an optional entity field.
    ///
    /// `All` passes any field, including an absent one. A specific id passes
    /// only an exactly equal field; an absent field fails.
    #[must_use]
    pub fn admits(&self, field: Option<&str>) -> bool {
        match self {
            Self::All => true,
            Self::Id(wanted) => field == Some(wanted.as_str()),
        }
    }
}

impl Default for FilterChoice {
    fn default() -> Self {
        Self::All
    }
}

/// The user-selected filter predicates of one listing view.
///
/// Created with all-sentinel defaults, mutated field by field through events,
/// and reset wholesale by the clear-filters event. Never shared between
/// views.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct FilterState {
    /// Category selection.
    #[serde(default)]
    pub category: FilterChoice,

    /// District selection; the locality option set cascades from it.
    #[serde(default)]
    pub district: FilterChoice,

    /// Locality selection, valid only within the selected district.
    #[serde(default)]
    pub locality: FilterChoice,

    /// Free-text search term; empty means no constraint.
    #[serde(default)]
    pub search: String,
}

impl FilterState {
    /// Returns true when every field is at its default (no constraints).
    #[must_use]
    pub fn is_default(&self) -> bool {
        self.category.is_all()
            && self.district.is_all()
            && self.locality.is_all()
            && self.search.trim().is_empty()
    }
}

/// Applies the filter conjunction to a cached collection.
///
/// Returns the matching listings as an order-preserving cloned subset, the
/// shape the view layer consumes. Filtering an already filtered result with
/// the same state is a no-op (idempotence), and the result is always a subset
/// of the input.
///
/// # Examples
///
/// ```
/// use vitrina::domain::Listing;
/// use vitrina::query::{apply, FilterChoice, FilterState};
///
/// let items = vec![
///     Listing::new("m-1", "Fort ruins", "").with_category("heritage"),
///     Listing::new("m-2", "River gorge", "").with_category("natural"),
/// ];
///
/// let filter = FilterState {
///     category: FilterChoice::id("heritage"),
///     ..FilterState::default()
/// };
///
/// let matched = apply(&items, &filter);
/// assert_eq!(matched.len(), 1);
/// assert_eq!(matched[0].id, "m-1");
/// ```
#[must_use]
pub fn apply(items: &[Listing], filter: &FilterState) -> Vec<Listing> {
    let _span = tracing::debug_span!(
        "apply_filter",
        total_items = items.len(),
        search_len = filter.search.len()
    )
    .entered();

    let term = filter.search.trim().to_lowercase();
    let term = if term.is_empty() { None } else { Some(term) };

    let matched: Vec<Listing> = items
        .iter()
        .filter(|listing| {
            if !listing.is_visible() {
                return false;
            }

            if let Some(term) = term.as_deref() {
                if !matches_search(listing, term) {
                    return false;
                }
            }

            filter.category.admits(listing.category.as_deref())
                && filter.district.admits(listing.district_ref.as_deref())
                && filter.locality.admits(listing.locality_ref.as_deref())
        })
        .cloned()
        .collect();

    tracing::debug!(matched_count = matched.len(), "filter applied");
    matched
}

/// Case-insensitive substring match over title, description and tags.
///
/// `term` must already be trimmed and lowercased.
fn matches_search(listing: &Listing, term: &str) -> bool {
    listing.title.to_lowercase().contains(term)
        || listing.description.to_lowercase().contains(term)
        || listing.tags.iter().any(|tag| tag.to_lowercase().contains(term))
}
