//! Derivation of desert-zone circles and region bounding polygons.
//!
//! Both functions are deterministic, side-effect free, and linear in the
//! input size: a single min/max accumulator pass over the facility
//! points plus one pass over the region stats. They are cheap enough to
//! rerun on every input change, so nothing here is cached.

use std::collections::BTreeMap;

use health_map_facility_models::{FacilityPoint, RegionStat};
use health_map_geospatial_models::{CoverageSeverity, DesertZone, RegionPolygon};

use crate::regions;

/// Circle radius for a desert region with zero recorded facilities.
const CRITICAL_RADIUS_KM: f64 = 80.0;
/// Circle radius for a desert region that still has facilities.
const HIGH_RADIUS_KM: f64 = 45.0;

/// Padding added to every side of a tight facility bounding box.
const PAD_LAT: f64 = 0.15;
const PAD_LNG: f64 = 0.15;

/// Half-extents of the fallback rectangle used when a region has fewer
/// than two plotted facilities. Applied around the centroid as-is, with
/// no additional padding.
const FALLBACK_HALF_LAT: f64 = 0.4;
const FALLBACK_HALF_LNG: f64 = 0.5;

/// Severity for a region already known to be a medical desert.
const fn desert_severity(stat: &RegionStat) -> CoverageSeverity {
    if stat.total_facilities == 0 {
        CoverageSeverity::Critical
    } else {
        CoverageSeverity::High
    }
}

/// Derives desert-zone circles from per-region statistics.
///
/// Only regions flagged as medical deserts that also have a centroid
/// entry produce a zone; a desert region missing from the centroid
/// table is skipped silently. Output order follows the input key order
/// but is not contractual.
#[must_use]
pub fn derive_desert_zones(region_stats: &BTreeMap<String, RegionStat>) -> Vec<DesertZone> {
    region_stats
        .iter()
        .filter(|(_, stat)| stat.is_medical_desert)
        .filter_map(|(region, stat)| {
            let Some((lat, lng)) = regions::region_centroid(region) else {
                log::debug!("desert region {region} has no centroid; skipping zone");
                return None;
            };
            let severity = desert_severity(stat);
            let radius_km = if severity == CoverageSeverity::Critical {
                CRITICAL_RADIUS_KM
            } else {
                HIGH_RADIUS_KM
            };
            Some(DesertZone {
                region: region.clone(),
                lat,
                lng,
                radius_km,
                severity,
                gaps: stat.desert_gaps.clone(),
            })
        })
        .collect()
}

/// Running min/max of facility coordinates for one region.
#[derive(Debug, Clone, Copy)]
struct Bounds {
    min_lat: f64,
    max_lat: f64,
    min_lng: f64,
    max_lng: f64,
    count: usize,
}

impl Bounds {
    const fn new(lat: f64, lng: f64) -> Self {
        Self {
            min_lat: lat,
            max_lat: lat,
            min_lng: lng,
            max_lng: lng,
            count: 1,
        }
    }

    fn extend(&mut self, lat: f64, lng: f64) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lng = self.min_lng.min(lng);
        self.max_lng = self.max_lng.max(lng);
        self.count += 1;
    }
}

/// Derives one bounding polygon per region in `region_stats`.
///
/// Regions with at least two located facilities get their tight
/// bounding box expanded by the fixed padding; all others get the
/// fallback rectangle centered on their centroid (or the Ghana-center
/// default for unknown names). Facility points naming a region absent
/// from `region_stats` contribute nothing. Every stats key yields
/// exactly one polygon.
#[must_use]
pub fn derive_region_polygons(
    region_stats: &BTreeMap<String, RegionStat>,
    facility_points: &[FacilityPoint],
) -> Vec<RegionPolygon> {
    let mut by_region: BTreeMap<&str, Bounds> = BTreeMap::new();
    for point in facility_points {
        let Some((region, lat, lng)) = point.located() else {
            continue;
        };
        by_region
            .entry(region)
            .and_modify(|bounds| bounds.extend(lat, lng))
            .or_insert_with(|| Bounds::new(lat, lng));
    }

    region_stats
        .iter()
        .map(|(region, stat)| {
            let (min_lat, max_lat, min_lng, max_lng) = match by_region.get(region.as_str()) {
                Some(bounds) if bounds.count >= 2 => (
                    bounds.min_lat - PAD_LAT,
                    bounds.max_lat + PAD_LAT,
                    bounds.min_lng - PAD_LNG,
                    bounds.max_lng + PAD_LNG,
                ),
                _ => {
                    let (lat, lng) = regions::region_centroid_or_default(region);
                    (
                        lat - FALLBACK_HALF_LAT,
                        lat + FALLBACK_HALF_LAT,
                        lng - FALLBACK_HALF_LNG,
                        lng + FALLBACK_HALF_LNG,
                    )
                }
            };
            let severity = if stat.is_medical_desert {
                desert_severity(stat)
            } else {
                CoverageSeverity::Normal
            };
            RegionPolygon {
                region: region.clone(),
                // SW, SE, NE, NW: a simple closed rectangle.
                coords: [
                    [min_lat, min_lng],
                    [min_lat, max_lng],
                    [max_lat, max_lng],
                    [max_lat, min_lng],
                ],
                severity,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn stats(entries: &[(&str, RegionStat)]) -> BTreeMap<String, RegionStat> {
        entries
            .iter()
            .map(|(region, stat)| ((*region).to_string(), stat.clone()))
            .collect()
    }

    fn point(region: &str, lat: f64, lng: f64) -> FacilityPoint {
        FacilityPoint {
            region: Some(region.to_string()),
            lat: Some(lat),
            lng: Some(lng),
        }
    }

    fn polygon_extremes(poly: &RegionPolygon) -> (f64, f64, f64, f64) {
        let lats: Vec<f64> = poly.coords.iter().map(|c| c[0]).collect();
        let lngs: Vec<f64> = poly.coords.iter().map(|c| c[1]).collect();
        (
            lats.iter().copied().fold(f64::INFINITY, f64::min),
            lats.iter().copied().fold(f64::NEG_INFINITY, f64::max),
            lngs.iter().copied().fold(f64::INFINITY, f64::min),
            lngs.iter().copied().fold(f64::NEG_INFINITY, f64::max),
        )
    }

    #[test]
    fn zero_facility_desert_is_critical_with_80km_radius() {
        let zones = derive_desert_zones(&stats(&[(
            "Savannah",
            RegionStat::desert(0, vec!["ICU".to_string()]),
        )]));
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].severity, CoverageSeverity::Critical);
        assert!((zones[0].radius_km - 80.0).abs() < f64::EPSILON);
        assert_eq!(zones[0].gaps, vec!["ICU".to_string()]);
    }

    #[test]
    fn populated_desert_is_high_with_45km_radius() {
        let zones = derive_desert_zones(&stats(&[("Oti", RegionStat::desert(7, Vec::new()))]));
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].severity, CoverageSeverity::High);
        assert!((zones[0].radius_km - 45.0).abs() < f64::EPSILON);
    }

    #[test]
    fn non_desert_region_produces_no_zone() {
        let zones = derive_desert_zones(&stats(&[("Ashanti", RegionStat::covered(120))]));
        assert!(zones.is_empty());
    }

    #[test]
    fn desert_without_centroid_is_skipped() {
        let zones = derive_desert_zones(&stats(&[
            ("Uncharted Province", RegionStat::desert(0, Vec::new())),
            ("Savannah", RegionStat::desert(0, Vec::new())),
        ]));
        assert_eq!(zones.len(), 1);
        assert_eq!(zones[0].region, "Savannah");
    }

    #[test]
    fn zone_centers_on_region_centroid() {
        let zones =
            derive_desert_zones(&stats(&[("Upper West", RegionStat::desert(2, Vec::new()))]));
        let (lat, lng) = crate::regions::region_centroid("Upper West").unwrap();
        assert!((zones[0].lat - lat).abs() < f64::EPSILON);
        assert!((zones[0].lng - lng).abs() < f64::EPSILON);
    }

    #[test]
    fn bounding_box_is_padded_on_every_side() {
        let region_stats = stats(&[("Ashanti", RegionStat::covered(3))]);
        let points = [
            point("Ashanti", 6.5, -1.8),
            point("Ashanti", 6.9, -1.4),
            point("Ashanti", 6.7, -1.6),
        ];
        let polygons = derive_region_polygons(&region_stats, &points);
        assert_eq!(polygons.len(), 1);
        let (min_lat, max_lat, min_lng, max_lng) = polygon_extremes(&polygons[0]);
        assert!((min_lat - (6.5 - 0.15)).abs() < 1e-9);
        assert!((max_lat - (6.9 + 0.15)).abs() < 1e-9);
        assert!((min_lng - (-1.8 - 0.15)).abs() < 1e-9);
        assert!((max_lng - (-1.4 + 0.15)).abs() < 1e-9);
    }

    #[test]
    fn every_stats_region_gets_exactly_one_polygon() {
        let region_stats = stats(&[
            ("Ashanti", RegionStat::covered(10)),
            ("Oti", RegionStat::desert(1, Vec::new())),
            ("Uncharted Province", RegionStat::desert(0, Vec::new())),
        ]);
        let polygons = derive_region_polygons(&region_stats, &[]);
        let mut regions: Vec<&str> = polygons.iter().map(|p| p.region.as_str()).collect();
        regions.sort_unstable();
        assert_eq!(regions, vec!["Ashanti", "Oti", "Uncharted Province"]);
    }

    #[test]
    fn single_point_region_uses_centroid_fallback() {
        let region_stats = stats(&[("Volta", RegionStat::covered(1))]);
        let points = [point("Volta", 6.6, 0.47)];
        let polygons = derive_region_polygons(&region_stats, &points);
        let (min_lat, max_lat, min_lng, max_lng) = polygon_extremes(&polygons[0]);
        let (lat, lng) = crate::regions::region_centroid("Volta").unwrap();
        assert!((min_lat - (lat - 0.4)).abs() < 1e-9);
        assert!((max_lat - (lat + 0.4)).abs() < 1e-9);
        assert!((min_lng - (lng - 0.5)).abs() < 1e-9);
        assert!((max_lng - (lng + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn identical_points_still_produce_a_padded_box() {
        let region_stats = stats(&[("Central", RegionStat::covered(2))]);
        let points = [point("Central", 5.56, -1.05), point("Central", 5.56, -1.05)];
        let polygons = derive_region_polygons(&region_stats, &points);
        let (min_lat, max_lat, min_lng, max_lng) = polygon_extremes(&polygons[0]);
        // Degenerate point box before padding; padding gives it area.
        assert!((max_lat - min_lat - 0.3).abs() < 1e-9);
        assert!((max_lng - min_lng - 0.3).abs() < 1e-9);
    }

    #[test]
    fn points_for_unknown_regions_are_ignored() {
        let region_stats = stats(&[("Eastern", RegionStat::covered(5))]);
        let points = [
            point("Eastern", 6.1, -0.5),
            point("Eastern", 6.4, -0.4),
            point("Nowhere", 12.0, 3.0),
        ];
        let polygons = derive_region_polygons(&region_stats, &points);
        assert_eq!(polygons.len(), 1);
        let (_, max_lat, _, _) = polygon_extremes(&polygons[0]);
        // The stray point must not stretch Eastern's box.
        assert!(max_lat < 7.0);
    }

    #[test]
    fn unknown_region_without_points_centers_on_default() {
        let region_stats = stats(&[("Uncharted Province", RegionStat::desert(0, Vec::new()))]);
        let polygons = derive_region_polygons(&region_stats, &[]);
        let (min_lat, max_lat, min_lng, max_lng) = polygon_extremes(&polygons[0]);
        let (lat, lng) = crate::regions::DEFAULT_CENTROID;
        assert!((min_lat - (lat - 0.4)).abs() < 1e-9);
        assert!((max_lat - (lat + 0.4)).abs() < 1e-9);
        assert!((min_lng - (lng - 0.5)).abs() < 1e-9);
        assert!((max_lng - (lng + 0.5)).abs() < 1e-9);
    }

    #[test]
    fn null_coordinates_are_excluded_from_bounds() {
        let region_stats = stats(&[("Northern", RegionStat::covered(2))]);
        let points = [
            point("Northern", 9.4, -0.8),
            FacilityPoint {
                region: Some("Northern".to_string()),
                lat: None,
                lng: Some(-0.2),
            },
        ];
        // Only one usable point, so the fallback rectangle applies.
        let polygons = derive_region_polygons(&region_stats, &points);
        let (lat, _) = crate::regions::region_centroid("Northern").unwrap();
        let (min_lat, _, _, _) = polygon_extremes(&polygons[0]);
        assert!((min_lat - (lat - 0.4)).abs() < 1e-9);
    }

    #[test]
    fn polygon_severity_mirrors_desert_rule() {
        let region_stats = stats(&[
            ("Ashanti", RegionStat::covered(10)),
            ("Oti", RegionStat::desert(3, Vec::new())),
            ("Savannah", RegionStat::desert(0, Vec::new())),
        ]);
        let polygons = derive_region_polygons(&region_stats, &[]);
        let severity_of = |region: &str| {
            polygons
                .iter()
                .find(|p| p.region == region)
                .map(|p| p.severity)
                .unwrap()
        };
        assert_eq!(severity_of("Ashanti"), CoverageSeverity::Normal);
        assert_eq!(severity_of("Oti"), CoverageSeverity::High);
        assert_eq!(severity_of("Savannah"), CoverageSeverity::Critical);
    }

    #[test]
    fn polygon_ring_is_a_simple_rectangle() {
        let region_stats = stats(&[("Western", RegionStat::covered(2))]);
        let points = [point("Western", 5.0, -2.5), point("Western", 5.8, -1.9)];
        let polygons = derive_region_polygons(&region_stats, &points);
        let coords = polygons[0].coords;
        // SW, SE share min lat; NE, NW share max lat; adjacent corners
        // differ in exactly one axis.
        assert!((coords[0][0] - coords[1][0]).abs() < f64::EPSILON);
        assert!((coords[2][0] - coords[3][0]).abs() < f64::EPSILON);
        assert!((coords[1][1] - coords[2][1]).abs() < f64::EPSILON);
        assert!((coords[3][1] - coords[0][1]).abs() < f64::EPSILON);
    }
}
