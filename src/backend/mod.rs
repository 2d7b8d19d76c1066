//! Backend collaborator abstraction.
//!
//! This module defines the [`Backend`] trait that abstracts over the
//! directory's read-only data source. The production implementation is an
//! HTTP client owned by the embedding application; this crate ships
//! [`JsonBackend`], a fixture implementation over bounded JSON documents,
//! so the fetch pipeline can be exercised without a server.
//!
//! # Design Philosophy
//!
//! The trait is minimal and use-case driven, not a generic data-access
//! layer: one method per collection the cache holds, mirroring the three
//! list operations the real backend exposes. Responses are bounded,
//! already-ordered collections; all filtering beyond the coarse query
//! parameters happens client-side in the query layer.

use serde::{Deserialize, Serialize};

use crate::domain::error::Result;
use crate::domain::{District, Listing, ListingKind, ListingStatus, Locality};

pub mod fixture;

pub use fixture::JsonBackend;

/// Coarse server-side query for the listing collections.
///
/// These are the only parameters the backend's media endpoint accepts; the
/// fine-grained predicates (category, geography, search) are applied
/// client-side over the cached response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListingQuery {
    /// Which listing collection to fetch.
    pub kind: ListingKind,

    /// Restrict to one editorial status, typically
    /// [`ListingStatus::Approved`]. `None` fetches every status.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ListingStatus>,

    /// Upper bound on the number of returned items. `None` means the
    /// backend's own bound applies.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<usize>,
}

impl ListingQuery {
    /// The query every listing view issues: approved items of one kind.
    #[must_use]
    pub fn approved(kind: ListingKind) -> Self {
        Self {
            kind,
            status: Some(ListingStatus::Approved),
            limit: None,
        }
    }
}

/// Abstraction over the directory's read-only data source.
///
/// Implementations must be `Send` so the fetch worker can run on whatever
/// thread the embedding runtime provides.
///
/// # Implementations
///
/// - [`JsonBackend`]: bounded JSON documents from a file or string (fixtures,
///   demos, tests)
///
/// # Examples
///
/// ```
/// use vitrina::backend::{Backend, JsonBackend, ListingQuery};
/// use vitrina::domain::ListingKind;
///
/// let backend = JsonBackend::from_json_str(r#"{
///     "version": 1,
///     "listings": [
///         {"id": "m-1", "title": "Fort ruins", "kind": "photo", "status": "approved"}
///     ]
/// }"#)?;
///
/// let photos = backend.list_listings(&ListingQuery::approved(ListingKind::Photo))?;
/// assert_eq!(photos.len(), 1);
/// # Ok::<(), vitrina::domain::VitrinaError>(())
/// ```
pub trait Backend: Send {
    /// Fetches one listing collection.
    ///
    /// Items are returned in the backend's display order; the cache preserves
    /// that order verbatim.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be retrieved or decoded.
    fn list_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>>;

    /// Fetches the district reference collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be retrieved or decoded.
    fn list_districts(&self) -> Result<Vec<District>>;

    /// Fetches the locality reference collection.
    ///
    /// # Errors
    ///
    /// Returns an error if the collection cannot be retrieved or decoded.
    fn list_localities(&self) -> Result<Vec<Locality>>;
}
