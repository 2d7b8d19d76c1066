//! Fetch boundary message types.
//!
//! This module defines the request and response protocol between the event
//! handler and the fetch worker. Requests name the collection to refresh;
//! responses carry the fetched collection or a per-collection failure. Both
//! sides are JSON-serializable so the embedding runtime can move them across
//! whatever thread or channel boundary it uses.

use serde::{Deserialize, Serialize};

use crate::domain::{District, EntityKind, Listing, ListingKind, Locality};

/// A request to fetch one cached collection from the backend.
///
/// Emitted by the event handler (wrapped in an `Action`) after the fetch
/// policy decides a collection is stale and the cache grants the in-flight
/// slot. Exactly one request per entity kind can be outstanding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchRequest {
    /// Fetch one listing collection (approved items only).
    Listings {
        /// Which listing collection to fetch.
        kind: ListingKind,

        /// Optional upper bound forwarded to the backend.
        #[serde(skip_serializing_if = "Option::is_none")]
        limit: Option<usize>,
    },

    /// Fetch the district reference collection.
    Districts,

    /// Fetch the locality reference collection.
    Localities,
}

impl FetchRequest {
    /// Builds the request that refreshes the given entity kind.
    #[must_use]
    pub fn for_kind(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Districts => Self::Districts,
            EntityKind::Localities => Self::Localities,
            EntityKind::Photos => Self::Listings { kind: ListingKind::Photo, limit: None },
            EntityKind::Videos => Self::Listings { kind: ListingKind::Video, limit: None },
            EntityKind::News => Self::Listings { kind: ListingKind::News, limit: None },
        }
    }

    /// The entity kind this request refreshes.
    ///
    /// Used for in-flight bookkeeping and for routing failures back to the
    /// right cache entry.
    #[must_use]
    pub fn target(&self) -> EntityKind {
        match self {
            Self::Districts => EntityKind::Districts,
            Self::Localities => EntityKind::Localities,
            Self::Listings { kind: ListingKind::Photo, .. } => EntityKind::Photos,
            Self::Listings { kind: ListingKind::Video, .. } => EntityKind::Videos,
            Self::Listings { kind: ListingKind::News, .. } => EntityKind::News,
        }
    }
}

/// The outcome of one fetch request.
///
/// Applied to the cache by the event handler. A response always arrives,
/// success or failure, even when the triggering view has been discarded in
/// the meantime; the cache tolerates the late write.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FetchResponse {
    /// A listing collection was fetched successfully.
    ListingsLoaded {
        /// Which listing collection was fetched.
        kind: ListingKind,

        /// The fetched items, in backend display order.
        listings: Vec<Listing>,
    },

    /// The district collection was fetched successfully.
    DistrictsLoaded {
        /// The fetched districts.
        districts: Vec<District>,
    },

    /// The locality collection was fetched successfully.
    LocalitiesLoaded {
        /// The fetched localities.
        localities: Vec<Locality>,
    },

    /// The fetch failed; the cached collection stays as it was.
    Failed {
        /// The collection the failed request targeted.
        target: EntityKind,

        /// Human-readable failure description.
        message: String,
    },
}

impl FetchResponse {
    /// The entity kind this response belongs to.
    #[must_use]
    pub fn target(&self) -> EntityKind {
        match self {
            Self::ListingsLoaded { kind: ListingKind::Photo, .. } => EntityKind::Photos,
            Self::ListingsLoaded { kind: ListingKind::Video, .. } => EntityKind::Videos,
            Self::ListingsLoaded { kind: ListingKind::News, .. } => EntityKind::News,
            Self::DistrictsLoaded { .. } => EntityKind::Districts,
            Self::LocalitiesLoaded { .. } => EntityKind::Localities,
            Self::Failed { target, .. } => *target,
        }
    }
}
