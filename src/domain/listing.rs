//! Listing domain model.
//!
//! This module defines the [`Listing`] type, the generic displayable entity of
//! the directory (media asset or news article), along with the enums that
//! classify it: [`ListingStatus`] for editorial visibility, [`ListingKind`]
//! for the listing collections the backend serves, and [`EntityKind`] naming
//! every cached collection including the geographic reference data.
//!
//! Listings carry optional references into the geographic collections
//! (district, locality). Absent references are meaningful: the filter engine
//! treats a missing reference as a non-match whenever a specific value is
//! selected, never as an error.

use serde::{Deserialize, Serialize};

/// Editorial status of a listing.
///
/// Only [`Approved`](ListingStatus::Approved) listings are eligible for
/// display. Listings without a status field are treated as visible, which
/// keeps legacy records imported without moderation metadata on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingStatus {
    /// Approved by a moderator and visible in every listing view.
    Approved,
    /// Awaiting moderation; hidden from listing views.
    Pending,
    /// Rejected by a moderator; hidden from listing views.
    Rejected,
}

/// The listing collections served by the backend's media endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListingKind {
    /// Photographic media assets.
    Photo,
    /// Video media assets.
    Video,
    /// News articles.
    News,
}

/// Every cached collection, listing and geographic alike.
///
/// Keys the cache store, the worker fetch protocol, and per-kind TTL
/// configuration. The three listing kinds map onto [`ListingKind`] via
/// [`EntityKind::listing_kind`]; the geographic kinds do not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    /// The photo listing collection.
    Photos,
    /// The video listing collection.
    Videos,
    /// The news listing collection.
    News,
    /// The district reference collection.
    Districts,
    /// The locality reference collection.
    Localities,
}

impl EntityKind {
    /// Returns the listing kind behind this entity kind, if any.
    ///
    /// Geographic collections (`Districts`, `Localities`) return `None`.
    #[must_use]
    pub const fn listing_kind(self) -> Option<ListingKind> {
        match self {
            Self::Photos => Some(ListingKind::Photo),
            Self::Videos => Some(ListingKind::Video),
            Self::News => Some(ListingKind::News),
            Self::Districts | Self::Localities => None,
        }
    }

    /// Returns true for the geographic reference collections.
    #[must_use]
    pub const fn is_geographic(self) -> bool {
        matches!(self, Self::Districts | Self::Localities)
    }
}

impl From<ListingKind> for EntityKind {
    fn from(kind: ListingKind) -> Self {
        match kind {
            ListingKind::Photo => Self::Photos,
            ListingKind::Video => Self::Videos,
            ListingKind::News => Self::News,
        }
    }
}

/// A displayable directory entry: media asset or news article.
///
/// This is the entity shape every listing view filters and paginates. Fields
/// used by filter predicates are optional where the backend data is known to
/// be incomplete; the filter engine defines the fallback behavior for each
/// (see `query::filter`).
///
/// # Examples
///
/// ```
/// use vitrina::domain::{Listing, ListingStatus};
///
/// let listing = Listing::new("m-101", "Old Lighthouse", "Restored 1890s lighthouse")
///     .with_category("heritage")
///     .with_district("d-1");
/// assert_eq!(listing.status, Some(ListingStatus::Approved));
/// assert!(listing.locality_ref.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Listing {
    /// Stable identifier assigned by the backend.
    pub id: String,

    /// Display title, searched by the free-text predicate.
    pub title: String,

    /// Longer description, searched by the free-text predicate.
    #[serde(default)]
    pub description: String,

    /// Enumerated category tag, `None` when the record was never categorized.
    #[serde(default)]
    pub category: Option<String>,

    /// Id of the district this listing belongs to, if any.
    #[serde(default)]
    pub district_ref: Option<String>,

    /// Id of the locality this listing belongs to, if any. A locality is
    /// owned by exactly one district.
    #[serde(default)]
    pub locality_ref: Option<String>,

    /// Editorial status, `None` on legacy records (treated as visible).
    #[serde(default)]
    pub status: Option<ListingStatus>,

    /// Free-form tags, searched by the free-text predicate.
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Listing {
    /// Creates an approved listing with the given id, title and description.
    ///
    /// Category and geographic references start empty; use the `with_*`
    /// builders to attach them. Primarily a test and fixture convenience, the
    /// backend normally deserializes listings directly.
    pub fn new(id: impl Into<String>, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            category: None,
            district_ref: None,
            locality_ref: None,
            status: Some(ListingStatus::Approved),
            tags: Vec::new(),
        }
    }

    /// Sets the category tag.
    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the district reference.
    #[must_use]
    pub fn with_district(mut self, district_id: impl Into<String>) -> Self {
        self.district_ref = Some(district_id.into());
        self
    }

    /// Sets the locality reference.
    #[must_use]
    pub fn with_locality(mut self, locality_id: impl Into<String>) -> Self {
        self.locality_ref = Some(locality_id.into());
        self
    }

    /// Sets the editorial status (`None` models a legacy record).
    #[must_use]
    pub fn with_status(mut self, status: Option<ListingStatus>) -> Self {
        self.status = status;
        self
    }

    /// Sets the tag list.
    #[must_use]
    pub fn with_tags(mut self, tags: Vec<String>) -> Self {
        self.tags = tags;
        self
    }

    /// Returns true if this listing may appear in listing views.
    ///
    /// Approved listings are visible; so are listings without a status field
    /// (legacy-data tolerance). Pending and rejected listings are not.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.status.map_or(true, |s| s == ListingStatus::Approved)
    }
}
