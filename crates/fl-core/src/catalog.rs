//! Mission catalog input records.
//!
//! The catalog is an ordered list of mission records supplied by external
//! configuration. JSON catalogs are a bare array; TOML catalogs wrap the
//! records in `[[missions]]` tables (see [`CatalogFile`]).

use std::collections::HashSet;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::entities::Mission;
use crate::errors::CoreError;
use crate::geo::GeoPoint;

/// One mission as it appears in the catalog file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct MissionRecord {
    pub id: String,
    pub title: String,
    pub instruction: String,
    pub target: GeoPoint,
    /// Geofence radius in meters. Falls back to the configured default.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub boundary_radius: Option<f64>,
    pub required_count: u32,
    /// Suggested subcategory for the entry form.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub suggested_category: Option<String>,
    /// Map zoom hint. Display-only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub zoom: Option<u8>,
}

/// TOML catalog document: `[[missions]]` tables.
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq)]
pub struct CatalogFile {
    #[serde(default)]
    pub missions: Vec<MissionRecord>,
}

/// Validate a whole catalog. Any bad record rejects the catalog.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first offending record.
pub fn validate_records(records: &[MissionRecord]) -> Result<(), CoreError> {
    check_catalog(records.iter().map(|record| CatalogShape {
        id: &record.id,
        required_count: record.required_count,
        target: record.target,
        radius_m: record.boundary_radius,
    }))
}

/// Validate already-built missions with the same rules as [`validate_records`].
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the first offending mission.
pub fn validate_missions(missions: &[Mission]) -> Result<(), CoreError> {
    check_catalog(missions.iter().map(|mission| CatalogShape {
        id: &mission.id,
        required_count: mission.required_count,
        target: mission.target,
        radius_m: Some(mission.boundary_radius_m),
    }))
}

struct CatalogShape<'a> {
    id: &'a str,
    required_count: u32,
    target: GeoPoint,
    radius_m: Option<f64>,
}

fn check_catalog<'a>(items: impl Iterator<Item = CatalogShape<'a>>) -> Result<(), CoreError> {
    let mut seen = HashSet::new();
    for (index, item) in items.enumerate() {
        let label = if item.id.trim().is_empty() {
            format!("mission #{index}")
        } else {
            format!("mission '{}'", item.id)
        };

        if item.id.trim().is_empty() {
            return Err(CoreError::Validation(format!("{label}: id is empty")));
        }
        if !seen.insert(item.id) {
            return Err(CoreError::Validation(format!("{label}: duplicate id")));
        }
        if item.required_count == 0 {
            return Err(CoreError::Validation(format!(
                "{label}: required_count must be positive"
            )));
        }
        if !item.target.is_valid() {
            return Err(CoreError::Validation(format!(
                "{label}: target {} is out of range",
                item.target
            )));
        }
        if let Some(radius) = item.radius_m
            && !(radius.is_finite() && radius > 0.0)
        {
            return Err(CoreError::Validation(format!(
                "{label}: boundary_radius must be a positive number of meters"
            )));
        }
    }
    Ok(())
}
