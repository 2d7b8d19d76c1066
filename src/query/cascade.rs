//! Cascading filter option resolution.
//!
//! The locality filter is dependent: its valid option set is derived from the
//! currently selected district. This module computes option lists for both
//! geographic filters and arbitrates the transition where a previously valid
//! dependent selection falls out of the new option set.
//!
//! Resolution is pure slice-in, list-out computation. The event handler is
//! responsible for applying [`reconcile_selection`] after every district
//! change; skipping it would leave a stale, invisible locality constraint
//! active (see `app::handler`).

use crate::domain::{District, Locality};

use super::filter::FilterChoice;

/// One selectable entry of a filter option list.
///
/// Option lists always lead with the `All` sentinel so the view layer can
/// render them verbatim as a select control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterOption {
    /// The value to write back into the filter state when selected.
    pub choice: FilterChoice,

    /// Display label.
    pub label: String,
}

impl FilterOption {
    /// Creates the leading sentinel option with the given label.
    fn all(label: &str) -> Self {
        Self {
            choice: FilterChoice::All,
            label: label.to_string(),
        }
    }

    fn id(id: &str, label: &str) -> Self {
        Self {
            choice: FilterChoice::id(id),
            label: label.to_string(),
        }
    }
}

/// Label of the sentinel entry in the district option list.
const ALL_DISTRICTS_LABEL: &str = "All districts";

/// Label of the sentinel entry in the locality option list.
const ALL_LOCALITIES_LABEL: &str = "All localities";

/// Builds the option list for the independent district filter.
///
/// Districts do not cascade from anything; the list is the sentinel followed
/// by every cached district in backend order.
#[must_use]
pub fn district_options(districts: &[District]) -> Vec<FilterOption> {
    let mut options = Vec::with_capacity(districts.len() + 1);
    options.push(FilterOption::all(ALL_DISTRICTS_LABEL));
    options.extend(districts.iter().map(|d| FilterOption::id(&d.id, &d.name)));
    options
}

/// Builds the option list for the dependent locality filter.
///
/// With the sentinel district selected, every locality is offered; with a
/// specific district, only its localities are. The specific list is always a
/// subset of the sentinel list (containment invariant).
///
/// # Examples
///
/// ```
/// use vitrina::domain::Locality;
/// use vitrina::query::{locality_options, FilterChoice};
///
/// let localities = vec![
///     Locality::new("l-1", "Port Arens", "d-1"),
///     Locality::new("l-2", "Veyra Falls", "d-2"),
/// ];
///
/// let for_d1 = locality_options(&localities, &FilterChoice::id("d-1"));
/// assert_eq!(for_d1.len(), 2); // sentinel + Port Arens
///
/// let for_all = locality_options(&localities, &FilterChoice::All);
/// assert_eq!(for_all.len(), 3);
/// ```
#[must_use]
pub fn locality_options(localities: &[Locality], selected_district: &FilterChoice) -> Vec<FilterOption> {
    let mut options = vec![FilterOption::all(ALL_LOCALITIES_LABEL)];
    options.extend(
        localities
            .iter()
            .filter(|locality| selected_district.admits(Some(locality.district_id.as_str())))
            .map(|locality| FilterOption::id(&locality.id, &locality.name)),
    );
    options
}

/// Builds the category option list from a cached listing collection.
///
/// Categories are not cascading and have no reference collection of their
/// own; the offered set is the distinct categories present in the cached
/// listings, in first-appearance order, behind the usual sentinel. Kept with
/// the other option builders so the view layer assembles its filter panel
/// from one module.
#[must_use]
pub fn category_options(items: &[crate::domain::Listing]) -> Vec<FilterOption> {
    let mut options = vec![FilterOption::all("All categories")];
    for listing in items {
        if let Some(category) = listing.category.as_deref() {
            if !options.iter().any(|o| o.choice == FilterChoice::id(category)) {
                options.push(FilterOption::id(category, category));
            }
        }
    }
    options
}

/// Arbitrates a dependent selection against a freshly computed option list.
///
/// Returns the current choice unchanged when it is still offered, and the
/// `All` sentinel when it is not. The event handler must apply this on every
/// district-change transition: a locality selection that survived a district
/// switch would keep constraining the listing set while no longer being
/// visible in the option list.
#[must_use]
pub fn reconcile_selection(current: &FilterChoice, options: &[FilterOption]) -> FilterChoice {
    if options.iter().any(|option| option.choice == *current) {
        current.clone()
    } else {
        tracing::debug!(stale_selection = ?current, "dependent selection no longer offered, resetting");
        FilterChoice::All
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_localities() -> Vec<Locality> {
        vec![
            Locality::new("l-1", "Port Arens", "d-1"),
            Locality::new("l-2", "Casterbay", "d-1"),
            Locality::new("l-9", "Veyra Falls", "d-2"),
        ]
    }

    #[test]
    fn sentinel_district_offers_every_locality() {
        let options = locality_options(&sample_localities(), &FilterChoice::All);
        assert_eq!(options.len(), 4);
        assert_eq!(options[0].choice, FilterChoice::All);
    }

    #[test]
    fn specific_district_offers_only_its_localities() {
        let options = locality_options(&sample_localities(), &FilterChoice::id("d-1"));
        let ids: Vec<&FilterChoice> = options.iter().map(|o| &o.choice).collect();
        assert_eq!(
            ids,
            vec![&FilterChoice::All, &FilterChoice::id("l-1"), &FilterChoice::id("l-2")]
        );
    }

    #[test]
    fn specific_options_are_contained_in_sentinel_options() {
        let localities = sample_localities();
        let all = locality_options(&localities, &FilterChoice::All);
        for district in ["d-1", "d-2", "d-404"] {
            let specific = locality_options(&localities, &FilterChoice::id(district));
            assert!(specific.iter().all(|option| all.contains(option)));
        }
    }

    #[test]
    fn surviving_selection_is_kept() {
        let options = locality_options(&sample_localities(), &FilterChoice::id("d-1"));
        let current = FilterChoice::id("l-2");
        assert_eq!(reconcile_selection(&current, &options), current);
    }

    #[test]
    fn orphaned_selection_resets_to_sentinel() {
        // l-9 belongs to d-2; after switching the district to d-1 it is no
        // longer offered and must reset.
        let options = locality_options(&sample_localities(), &FilterChoice::id("d-1"));
        assert_eq!(
            reconcile_selection(&FilterChoice::id("l-9"), &options),
            FilterChoice::All
        );
    }

    #[test]
    fn category_options_are_distinct_in_first_appearance_order() {
        use crate::domain::Listing;

        let items = vec![
            Listing::new("m-1", "Fort ruins", "").with_category("heritage"),
            Listing::new("m-2", "River gorge", "").with_category("natural"),
            Listing::new("m-3", "Old mint", "").with_category("heritage"),
            Listing::new("m-4", "Uncategorized", ""),
        ];
        let options = category_options(&items);
        let labels: Vec<&str> = options.iter().map(|o| o.label.as_str()).collect();
        assert_eq!(labels, vec!["All categories", "heritage", "natural"]);
    }

    #[test]
    fn district_options_lead_with_sentinel() {
        let districts = vec![District::new("d-1", "North Coast")];
        let options = district_options(&districts);
        assert_eq!(options[0].choice, FilterChoice::All);
        assert_eq!(options[1].label, "North Coast");
    }
}
