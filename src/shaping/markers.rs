//! Map marker sizing.

use crate::models::{MetricType, RegionSummary};

/// Length of one degree of latitude.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Upper bound so the largest countries do not swallow the map.
pub const MAX_MARKER_RADIUS_DEG: f64 = 12.0;

/// Circle radius per sqrt(count), in meters.
fn multiplier(metric: MetricType) -> f64 {
    match metric {
        MetricType::Cases => 800.0,
        MetricType::Recovered => 1200.0,
        MetricType::Deaths => 2000.0,
    }
}

/// Radius in degrees of the circle drawn for `value` of `metric`.
///
/// Proportional to the square root so the circle's area tracks the count.
pub fn marker_radius(value: u64, metric: MetricType) -> f64 {
    let meters = (value as f64).sqrt() * multiplier(metric);
    (meters / METERS_PER_DEGREE).min(MAX_MARKER_RADIUS_DEG)
}

/// A circle on the map.
#[derive(Debug, Clone, PartialEq)]
pub struct MapMarker {
    pub name: String,
    pub iso_code: String,
    pub lat: f64,
    pub long: f64,
    pub value: u64,
    pub radius: f64,
}

/// One marker per region, sized by `metric`. Regions with a zero or missing
/// count are left off.
pub fn build_markers(regions: &[RegionSummary], metric: MetricType) -> Vec<MapMarker> {
    regions
        .iter()
        .filter_map(|region| {
            let value = region.total(metric).filter(|v| *v > 0)?;
            Some(MapMarker {
                name: region.name.clone(),
                iso_code: region.iso_code.clone(),
                lat: region.lat,
                long: region.long,
                value,
                radius: marker_radius(value, metric),
            })
        })
        .collect()
}
