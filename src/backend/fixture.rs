//! JSON fixture backend.
//!
//! A [`Backend`] implementation over a bounded JSON document, loaded from a
//! file or a string. It applies the same coarse query semantics the real
//! media endpoint applies server-side (kind, status, limit), so tests and
//! demos exercise the genuine collaborator contract rather than a shortcut.
//!
//! The document is parsed once at construction; list operations are
//! in-memory scans over the parsed collections.
//!
//! # Document Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "listings": [
//!     {
//!       "id": "m-1",
//!       "title": "Fort ruins",
//!       "description": "Spanish-era fortifications",
//!       "kind": "photo",
//!       "category": "heritage",
//!       "district_ref": "d-1",
//!       "status": "approved",
//!       "tags": ["history"]
//!     }
//!   ],
//!   "districts": [{ "id": "d-1", "name": "North Coast" }],
//!   "localities": [{ "id": "l-1", "name": "Port Arens", "district_id": "d-1" }]
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::domain::error::{Result, VitrinaError};
use crate::domain::{District, Listing, ListingKind, Locality};

use super::{Backend, ListingQuery};

/// Top-level shape of a fixture document.
///
/// Wraps the collections in a single versioned object; absent collections
/// default to empty, so partial fixtures stay valid.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct DirectoryDocument {
    /// Version of the document format for future migrations.
    version: u32,

    /// All listings, annotated with their collection kind.
    #[serde(default)]
    listings: Vec<ListingRecord>,

    /// District reference collection.
    #[serde(default)]
    districts: Vec<District>,

    /// Locality reference collection.
    #[serde(default)]
    localities: Vec<Locality>,
}

/// Document-level listing record.
///
/// The document stores every listing in one array, tagged with the
/// collection kind the media endpoint would partition by. Separate from the
/// domain [`Listing`], which has no kind field (a view knows its kind).
#[derive(Debug, Clone, Serialize, Deserialize)]
struct ListingRecord {
    /// Which listing collection this record belongs to.
    kind: ListingKind,

    /// The listing fields proper.
    #[serde(flatten)]
    listing: Listing,
}

/// Fixture backend over a parsed JSON document.
#[derive(Debug)]
pub struct JsonBackend {
    data: DirectoryDocument,
}

impl JsonBackend {
    /// Parses a fixture document from a JSON string.
    ///
    /// # Errors
    ///
    /// Returns [`VitrinaError::Backend`] when the document is not valid JSON
    /// or does not match the expected shape.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let data: DirectoryDocument = serde_json::from_str(json)
            .map_err(|e| VitrinaError::Backend(format!("failed to parse fixture document: {e}")))?;

        tracing::debug!(
            version = data.version,
            listings = data.listings.len(),
            districts = data.districts.len(),
            localities = data.localities.len(),
            "fixture document loaded"
        );

        Ok(Self { data })
    }

    /// Loads and parses a fixture document from a file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains an invalid
    /// document.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!(path = ?path.as_ref(), "loading fixture document");
        let contents = std::fs::read_to_string(path)?;
        Self::from_json_str(&contents)
    }
}

impl Backend for JsonBackend {
    fn list_listings(&self, query: &ListingQuery) -> Result<Vec<Listing>> {
        let _span = tracing::debug_span!("fixture_list_listings", kind = ?query.kind).entered();

        let mut items: Vec<Listing> = self
            .data
            .listings
            .iter()
            .filter(|record| record.kind == query.kind)
            .filter(|record| match query.status {
                Some(wanted) => record.listing.status == Some(wanted),
                None => true,
            })
            .map(|record| record.listing.clone())
            .collect();

        if let Some(limit) = query.limit {
            items.truncate(limit);
        }

        tracing::debug!(item_count = items.len(), "listings served from fixture");
        Ok(items)
    }

    fn list_districts(&self) -> Result<Vec<District>> {
        Ok(self.data.districts.clone())
    }

    fn list_localities(&self) -> Result<Vec<Locality>> {
        Ok(self.data.localities.clone())
    }
}
