//! Vitrina: the cache-and-query core of a regional tourism directory.
//!
//! Vitrina powers the listing pages of a directory front end (photo and video
//! galleries, news) over a read-only backend:
//! - TTL-based refresh decisions over per-collection caches
//! - A conjunction of user-selected predicates (category, district, locality,
//!   free-text search) applied client-side over cached collections
//! - Cascading filter option sets (localities depend on the selected district)
//! - Deterministic fixed-size pagination with page clamping
//!
//! # Architecture
//!
//! The crate follows a layered architecture pattern:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  Embedding runtime (out of scope)                   │  ← rendering, scheduling
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← per-view state
//! │  - Event handling and transition rules              │
//! │  - Action dispatching                               │
//! │  - View model selectors                             │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ Query Layer   │   │ Cache Layer   │   │ Fetch Worker  │
//! │ (query/)      │   │ (cache/)      │   │ (worker/)     │
//! │ - Filtering   │   │ - Collections │   │ - Requests    │
//! │ - Cascading   │   │ - Freshness   │   │ - Responses   │
//! │ - Pagination  │   │ - In-flight   │   │ - Backend I/O │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!         │                    │                    │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain & Backend Layers                            │
//! │  - Listing/District/Locality models (domain/)       │
//! │  - Error types (domain/error)                       │
//! │  - Backend trait + JSON fixture (backend/)          │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Per-view state machine with event/action model and selectors
//! - [`backend`]: The backend collaborator trait and a JSON fixture backend
//! - [`cache`]: Cached collections, fetch status, and the freshness policy
//! - [`domain`]: Core domain types (listings, geography, errors)
//! - [`query`]: Pure filtering, cascading options, and pagination
//! - [`view`]: View model data structs for the rendering layer
//! - [`worker`]: The fetch boundary protocol and worker
//! - `observability`: Tracing subscriber setup (internal)
//!
//! # Control Flow
//!
//! 1. A view becomes visible and fires `Event::RefreshIfStale`
//! 2. The handler consults the freshness policy, reserves the in-flight slot
//!    and emits `Action::PostToWorker` for each stale collection
//! 3. The runtime hands requests to the [`worker::FetchWorker`], which calls
//!    the [`backend::Backend`] and produces responses
//! 4. Responses come back as `Event::BackendResponse` and land in the cache
//! 5. Selectors recompute the page view and filter panel from the new state
//!
//! Every recomputation is synchronous and pure; only the backend call in
//! step 3 crosses a scheduling boundary.
//!
//! # Example
//!
//! ```
//! use vitrina::app::{handle_event, Action, Event, ListingView};
//! use vitrina::backend::JsonBackend;
//! use vitrina::cache::DirectoryCache;
//! use vitrina::domain::ListingKind;
//! use vitrina::worker::FetchWorker;
//! use vitrina::Config;
//!
//! let config = Config::default();
//! let mut cache = DirectoryCache::new();
//! let mut view = ListingView::with_config(ListingKind::Photo, &config);
//!
//! let backend = JsonBackend::from_json_str(
//!     r#"{"version": 1, "listings": [
//!         {"id": "m-1", "kind": "photo", "title": "Fort ruins", "status": "approved"}
//!     ]}"#,
//! )?;
//! let worker = FetchWorker::new(Box::new(backend));
//!
//! // Trigger a refresh and run the resulting requests inline.
//! let (_, actions) = handle_event(&mut view, &mut cache, &config, &Event::RefreshIfStale)?;
//! for Action::PostToWorker(request) in actions {
//!     let response = worker.handle_request(&request);
//!     handle_event(&mut view, &mut cache, &config, &Event::BackendResponse(response))?;
//! }
//!
//! let page = view.page_view(&cache);
//! assert_eq!(page.total_matching, 1);
//! # Ok::<(), vitrina::domain::VitrinaError>(())
//! ```

pub mod app;
pub mod backend;
pub mod cache;
pub mod domain;
pub mod query;
pub mod view;
pub mod worker;

pub mod observability;

pub use app::{handle_event, Action, Event, ListingView, PageState};
pub use cache::{DirectoryCache, DEFAULT_TTL_SECS};
pub use domain::{District, Listing, ListingKind, ListingStatus, Locality, Result, VitrinaError};
pub use query::{FilterChoice, FilterState};

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

use domain::EntityKind;

/// Per-collection freshness thresholds, in seconds.
///
/// Listings churn with editorial activity; the geographic reference
/// collections change rarely. Both default to
/// [`DEFAULT_TTL_SECS`](cache::DEFAULT_TTL_SECS) and can be tuned
/// independently per deployment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TtlConfig {
    /// TTL for the photo, video and news collections.
    pub listings_secs: i64,

    /// TTL for the district and locality collections.
    pub geography_secs: i64,
}

impl Default for TtlConfig {
    fn default() -> Self {
        Self {
            listings_secs: DEFAULT_TTL_SECS,
            geography_secs: DEFAULT_TTL_SECS,
        }
    }
}

/// Core configuration.
///
/// Host applications provide configuration either as a key/value map
/// ([`Config::from_map`]) or as a TOML document ([`Config::from_toml_str`],
/// [`Config::from_toml_file`]).
///
/// # TOML Format
///
/// ```toml
/// page_size = 12
/// trace_level = "debug"
///
/// [ttl]
/// listings_secs = 1800
/// geography_secs = 86400
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Items per page in every listing view. Default: 12.
    pub page_size: usize,

    /// Per-collection freshness thresholds.
    pub ttl: TtlConfig,

    /// Tracing level for [`observability::init_tracing`].
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`. Default: `"info"`.
    pub trace_level: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            page_size: 12,
            ttl: TtlConfig::default(),
            trace_level: None,
        }
    }
}

impl Config {
    /// Resolves the effective TTL for a cached collection.
    #[must_use]
    pub fn ttl_secs(&self, kind: EntityKind) -> i64 {
        if kind.is_geographic() {
            self.ttl.geography_secs
        } else {
            self.ttl.listings_secs
        }
    }

    /// Parses configuration from a host-provided key/value map.
    ///
    /// Recognized keys: `page_size`, `listings_ttl_secs`,
    /// `geography_ttl_secs`, `trace_level`. Missing or malformed values fall
    /// back to their defaults rather than failing; host configuration
    /// surfaces are forgiving by convention.
    ///
    /// # Example
    ///
    /// ```
    /// use std::collections::BTreeMap;
    /// use vitrina::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_size".to_string(), "24".to_string());
    /// map.insert("listings_ttl_secs".to_string(), "900".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.page_size, 24);
    /// assert_eq!(config.ttl.listings_secs, 900);
    /// assert_eq!(config.ttl.geography_secs, 3600);
    /// ```
    #[must_use]
    pub fn from_map(map: &BTreeMap<String, String>) -> Self {
        let defaults = Self::default();

        let page_size = map
            .get("page_size")
            .and_then(|s| s.parse::<usize>().ok())
            .filter(|&n| n > 0)
            .unwrap_or(defaults.page_size);

        let listings_secs = map
            .get("listings_ttl_secs")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|&n| n >= 0)
            .unwrap_or(defaults.ttl.listings_secs);

        let geography_secs = map
            .get("geography_ttl_secs")
            .and_then(|s| s.parse::<i64>().ok())
            .filter(|&n| n >= 0)
            .unwrap_or(defaults.ttl.geography_secs);

        Self {
            page_size,
            ttl: TtlConfig {
                listings_secs,
                geography_secs,
            },
            trace_level: map.get("trace_level").cloned(),
        }
    }

    /// Parses configuration from a TOML document.
    ///
    /// Unlike [`Config::from_map`], the TOML path validates: a malformed
    /// document or a non-positive `page_size` is an error, since a config
    /// file is an explicit deployment artifact.
    ///
    /// # Errors
    ///
    /// Returns [`VitrinaError::Config`] for invalid TOML or invalid values.
    pub fn from_toml_str(toml_str: &str) -> Result<Self> {
        let config: Self = toml::from_str(toml_str)
            .map_err(|e| VitrinaError::Config(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and parses configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or contains an invalid
    /// document.
    pub fn from_toml_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!(path = ?path.as_ref(), "loading configuration");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    fn validate(&self) -> Result<()> {
        if self.page_size == 0 {
            return Err(VitrinaError::Config("page_size must be positive".to_string()));
        }
        if self.ttl.listings_secs < 0 || self.ttl.geography_secs < 0 {
            return Err(VitrinaError::Config("TTL values must not be negative".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn from_map_falls_back_on_malformed_values() {
        let mut map = BTreeMap::new();
        map.insert("page_size".to_string(), "a dozen".to_string());
        map.insert("listings_ttl_secs".to_string(), "-5".to_string());

        let config = Config::from_map(&map);
        assert_eq!(config.page_size, 12);
        assert_eq!(config.ttl.listings_secs, DEFAULT_TTL_SECS);
    }

    #[test]
    fn toml_overrides_merge_with_defaults() {
        let config = Config::from_toml_str(
            "page_size = 24\n\n[ttl]\ngeography_secs = 86400\n",
        )
        .unwrap();
        assert_eq!(config.page_size, 24);
        assert_eq!(config.ttl.listings_secs, DEFAULT_TTL_SECS);
        assert_eq!(config.ttl.geography_secs, 86400);
    }

    #[test]
    fn toml_rejects_a_zero_page_size() {
        let err = Config::from_toml_str("page_size = 0\n").unwrap_err();
        assert!(matches!(err, VitrinaError::Config(_)));
    }

    #[test]
    fn toml_rejects_malformed_documents() {
        let err = Config::from_toml_str("page_size = [").unwrap_err();
        assert!(matches!(err, VitrinaError::Config(_)));
    }

    #[test]
    fn config_loads_from_a_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"page_size = 6\n").unwrap();

        let config = Config::from_toml_file(file.path()).unwrap();
        assert_eq!(config.page_size, 6);
    }

    #[test]
    fn ttl_resolves_per_entity_kind() {
        let config = Config {
            ttl: TtlConfig { listings_secs: 600, geography_secs: 86400 },
            ..Config::default()
        };
        assert_eq!(config.ttl_secs(EntityKind::Photos), 600);
        assert_eq!(config.ttl_secs(EntityKind::News), 600);
        assert_eq!(config.ttl_secs(EntityKind::Districts), 86400);
        assert_eq!(config.ttl_secs(EntityKind::Localities), 86400);
    }
}
