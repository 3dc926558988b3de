#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building record types.
//!
//! A [`BuildingRecord`] is one building or monument footprint from the
//! preloaded map data. Only the construction year is interpreted; every
//! other attribute is carried along for the presentation layer.

use serde::{Deserialize, Serialize};

/// Property key holding the construction year in the source data.
pub const YEAR_PROPERTY: &str = "year_i";

/// A building as read from the map data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildingRecord {
    /// Feature identifier, if the source provides one.
    pub id: Option<String>,
    /// Construction year. Absent for many footprints.
    pub year_built: Option<i32>,
    /// Building or monument name.
    pub name: Option<String>,
    /// Height in meters.
    pub height: Option<f64>,
    /// Architectural style as recorded by the data source.
    pub style: Option<String>,
    /// All feature properties, verbatim.
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl BuildingRecord {
    /// Creates a record with only a construction year set.
    #[must_use]
    pub fn with_year(year_built: Option<i32>) -> Self {
        Self {
            year_built,
            ..Self::default()
        }
    }
}
