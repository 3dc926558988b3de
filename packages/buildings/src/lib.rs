#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Building data loading.
//!
//! The map ships its buildings and monuments as static `GeoJSON` feature
//! collections. This crate turns those features into [`BuildingRecord`]s,
//! pulling out the handful of properties the classifier and the info card
//! read and keeping everything else verbatim.

use std::path::Path;

use geojson::{Feature, GeoJson, feature::Id};
use serde_json::Value;
use vienna_heritage_buildings_models::{BuildingRecord, YEAR_PROPERTY};

/// Errors that can occur while loading building data.
#[derive(Debug, thiserror::Error)]
pub enum BuildingsError {
    /// I/O error (file read).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The document is not valid `GeoJSON`.
    #[error("GeoJSON parse error: {0}")]
    GeoJson(#[from] geojson::Error),

    /// The document is valid `GeoJSON` but holds a bare geometry.
    #[error("Expected a Feature or FeatureCollection, found a bare geometry")]
    NotFeatures,
}

/// Reads building records from a local `GeoJSON` file.
///
/// # Errors
///
/// Returns [`BuildingsError`] if the file cannot be read or parsed.
pub fn load_records(path: &Path) -> Result<Vec<BuildingRecord>, BuildingsError> {
    let contents = std::fs::read_to_string(path)?;
    let records = records_from_geojson(&contents)?;
    log::info!(
        "Loaded {} building records from {}",
        records.len(),
        path.display()
    );
    Ok(records)
}

/// Parses a `FeatureCollection` (or a single `Feature`) into building
/// records, preserving feature order.
///
/// # Errors
///
/// Returns [`BuildingsError::GeoJson`] for malformed input and
/// [`BuildingsError::NotFeatures`] for a bare geometry.
pub fn records_from_geojson(geojson_str: &str) -> Result<Vec<BuildingRecord>, BuildingsError> {
    match geojson_str.parse::<GeoJson>()? {
        GeoJson::FeatureCollection(collection) => Ok(collection
            .features
            .iter()
            .map(record_from_feature)
            .collect()),
        GeoJson::Feature(feature) => Ok(vec![record_from_feature(&feature)]),
        GeoJson::Geometry(_) => Err(BuildingsError::NotFeatures),
    }
}

/// Converts one feature into a building record. Never fails: unreadable
/// properties become `None`.
#[must_use]
pub fn record_from_feature(feature: &Feature) -> BuildingRecord {
    let properties = feature.properties.clone().unwrap_or_default();

    let id = feature.id.as_ref().map(|id| match id {
        Id::String(s) => s.clone(),
        Id::Number(n) => n.to_string(),
    });

    let year_built = properties.get(YEAR_PROPERTY).and_then(|value| {
        let year = parse_year(value);
        if year.is_none() && !value.is_null() {
            log::debug!("Ignoring unreadable {YEAR_PROPERTY} value {value} on feature {id:?}");
        }
        year
    });

    let name = string_property(&properties, "name");
    let style = string_property(&properties, "style");
    let height = properties.get("height").and_then(parse_number);

    BuildingRecord {
        id,
        year_built,
        name,
        height,
        style,
        properties,
    }
}

/// Reads a year from an integer, an integral float, or a numeric string.
#[allow(clippy::cast_possible_truncation)]
fn parse_year(value: &Value) -> Option<i32> {
    match value {
        Value::Number(n) => n.as_i64().map_or_else(
            || {
                n.as_f64()
                    .filter(|f| f.fract() == 0.0)
                    .filter(|f| *f >= f64::from(i32::MIN) && *f <= f64::from(i32::MAX))
                    .map(|f| f as i32)
            },
            |i| i32::try_from(i).ok(),
        ),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn parse_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn string_property(properties: &serde_json::Map<String, Value>, key: &str) -> Option<String> {
    properties
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(ToString::to_string)
}
