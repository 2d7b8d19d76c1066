//! Geographic reference records.
//!
//! Districts and localities are the two geographic collections the directory
//! filters against. They are fetched and cached like listings but never
//! filtered themselves; listing views use them to build the cascading filter
//! option lists.

use serde::{Deserialize, Serialize};

/// A district of the region covered by the directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct District {
    /// Stable identifier referenced by `Listing::district_ref`.
    pub id: String,

    /// Display name.
    pub name: String,
}

impl District {
    /// Creates a district record.
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

/// A locality (local-government unit) within a district.
///
/// Each locality belongs to exactly one district; `district_id` is that
/// ownership edge, and it is what the cascading option resolver matches
/// against the selected district.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Locality {
    /// Stable identifier referenced by `Listing::locality_ref`.
    pub id: String,

    /// Display name.
    pub name: String,

    /// Id of the owning district.
    pub district_id: String,
}

impl Locality {
    /// Creates a locality record owned by the given district.
    pub fn new(id: impl Into<String>, name: impl Into<String>, district_id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            district_id: district_id.into(),
        }
    }
}
