#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Map overlay types produced by the geospatial derivation step.
//!
//! Desert zones draw as dashed circles, region polygons as filled
//! rectangles; both carry a [`CoverageSeverity`] that the map layer maps
//! to a color ramp. The types are pure values with no identity beyond
//! the region name and are recomputed whenever their inputs change.

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// How well a region's facility coverage holds up.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum CoverageSeverity {
    /// Medical desert with zero recorded facilities.
    Critical,
    /// Medical desert that still has some facilities.
    High,
    /// Not a medical desert.
    Normal,
}

/// A circular overlay flagging a region with inadequate coverage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DesertZone {
    /// Region name.
    pub region: String,
    /// Circle center latitude (the region centroid).
    pub lat: f64,
    /// Circle center longitude (the region centroid).
    pub lng: f64,
    /// Circle radius in kilometers.
    pub radius_km: f64,
    /// Always [`CoverageSeverity::Critical`] or [`CoverageSeverity::High`];
    /// non-desert regions never produce a zone.
    pub severity: CoverageSeverity,
    /// Capability categories missing or scarce in this region.
    pub gaps: Vec<String>,
}

/// A rectangular overlay outlining a region's approximate extent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionPolygon {
    /// Region name.
    pub region: String,
    /// Four `[lat, lng]` corners traversed SW, SE, NE, NW. The map layer
    /// closes the ring when drawing.
    pub coords: [[f64; 2]; 4],
    /// Coverage severity driving the fill/stroke color.
    pub severity: CoverageSeverity,
}
