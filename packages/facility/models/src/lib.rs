#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Healthcare facility and regional statistics types.
//!
//! These are the typed boundary for the backend's camelCase JSON payloads:
//! the region-stats analysis endpoint and the map-data facility endpoint.
//! Validation and coercion happen here, at deserialization time, so the
//! overlay derivation code never sees an untyped value.

use serde::{Deserialize, Serialize};

/// Aggregate statistics for one region, keyed by region name in the
/// backend's region-stats response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionStat {
    /// Number of facilities recorded in this region.
    pub total_facilities: u32,
    /// Whether the region is flagged as a medical desert.
    pub is_medical_desert: bool,
    /// Capability categories missing or scarce in this region.
    /// Absent in the payload for non-desert regions.
    #[serde(default)]
    pub desert_gaps: Vec<String>,
}

impl RegionStat {
    /// A non-desert region with the given facility count.
    #[must_use]
    pub const fn covered(total_facilities: u32) -> Self {
        Self {
            total_facilities,
            is_medical_desert: false,
            desert_gaps: Vec::new(),
        }
    }

    /// A medical-desert region with the given facility count and gaps.
    #[must_use]
    pub fn desert(total_facilities: u32, desert_gaps: Vec<String>) -> Self {
        Self {
            total_facilities,
            is_medical_desert: true,
            desert_gaps,
        }
    }
}

/// A facility's position as used for per-region bounding boxes.
///
/// The backend leaves region and coordinates null for facilities that
/// could not be geocoded; those records are skipped by the accumulator,
/// never rejected.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityPoint {
    /// Normalized region name, if known.
    pub region: Option<String>,
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lng: Option<f64>,
}

impl FacilityPoint {
    /// Returns `(region, lat, lng)` when all three are present.
    #[must_use]
    pub fn located(&self) -> Option<(&str, f64, f64)> {
        Some((self.region.as_deref()?, self.lat?, self.lng?))
    }
}

/// A full map-endpoint facility record.
///
/// Superset of [`FacilityPoint`]; the extra fields drive marker
/// rendering (type color, anomaly highlight) and tooltips.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityMapData {
    /// Stable row identifier from the source dataset.
    pub unique_id: String,
    /// Facility display name.
    pub name: String,
    /// Facility type slug (e.g. "hospital", "clinic"), if classified.
    pub facility_type: Option<String>,
    /// Normalized region name, if known.
    pub region: Option<String>,
    /// Latitude in degrees.
    pub lat: Option<f64>,
    /// Longitude in degrees.
    pub lng: Option<f64>,
    /// Whether any field-level anomaly was detected for this record.
    #[serde(default)]
    pub has_anomalies: bool,
}

impl FacilityMapData {
    /// The positional view of this record used for bounding boxes.
    #[must_use]
    pub fn point(&self) -> FacilityPoint {
        FacilityPoint {
            region: self.region.clone(),
            lat: self.lat,
            lng: self.lng,
        }
    }
}
