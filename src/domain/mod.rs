//! Domain layer for the vitrina core.
//!
//! This module contains the core domain types, independent of backend or
//! host-runtime concerns: the listing entity and its classification enums,
//! the geographic reference records, and the crate error types.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`listing`]: The displayable entity and collection-kind enums
//! - [`geo`]: District and locality reference records
//!
//! # Examples
//!
//! ```
//! use vitrina::domain::{District, Listing, Locality};
//!
//! let district = District::new("d-1", "North Coast");
//! let locality = Locality::new("l-9", "Port Arens", "d-1");
//! let listing = Listing::new("m-1", "Harbor Market", "Weekly fish market")
//!     .with_district(&district.id)
//!     .with_locality(&locality.id);
//! assert!(listing.is_visible());
//! ```

pub mod error;
pub mod geo;
pub mod listing;

pub use error::{Result, VitrinaError};
pub use geo::{District, Locality};
pub use listing::{EntityKind, Listing, ListingKind, ListingStatus};
