//! Compiled-in centroid table for the sixteen regions of Ghana.
//!
//! Centroids anchor desert-zone circles and the fallback rectangle for
//! regions without enough plotted facilities. Region names use the
//! normalized form the backend emits; lookups are exact. A region absent
//! from this table simply cannot anchor a desert-zone circle.

use std::collections::BTreeMap;
use std::sync::LazyLock;

/// Approximate geographic center of Ghana, used when a region name is
/// not in the centroid table.
pub const DEFAULT_CENTROID: (f64, f64) = (7.9465, -1.0232);

/// Region name -> `(lat, lng)` centroid.
static REGION_CENTROIDS: LazyLock<BTreeMap<&'static str, (f64, f64)>> = LazyLock::new(|| {
    BTreeMap::from([
        ("Ahafo", (6.9206, -2.5561)),
        ("Ashanti", (6.7470, -1.5209)),
        ("Bono", (7.6500, -2.5000)),
        ("Bono East", (7.7500, -1.0500)),
        ("Central", (5.5608, -1.0586)),
        ("Eastern", (6.2374, -0.4502)),
        ("Greater Accra", (5.8143, 0.0747)),
        ("North East", (10.5138, -0.3658)),
        ("Northern", (9.5439, -0.3850)),
        ("Oti", (7.9000, 0.3000)),
        ("Savannah", (9.0830, -1.8200)),
        ("Upper East", (10.7082, -0.9821)),
        ("Upper West", (10.2530, -2.1450)),
        ("Volta", (6.5781, 0.4502)),
        ("Western", (5.3900, -2.1450)),
        ("Western North", (6.2000, -2.8000)),
    ])
});

/// Looks up the centroid for a normalized region name.
#[must_use]
pub fn region_centroid(region: &str) -> Option<(f64, f64)> {
    REGION_CENTROIDS.get(region).copied()
}

/// Centroid for a region, falling back to [`DEFAULT_CENTROID`] for
/// unknown names.
#[must_use]
pub fn region_centroid_or_default(region: &str) -> (f64, f64) {
    region_centroid(region).unwrap_or(DEFAULT_CENTROID)
}

/// All region names in the centroid table, sorted.
pub fn region_names() -> impl Iterator<Item = &'static str> {
    REGION_CENTROIDS.keys().copied()
}
