//! Map viewport: center plus zoom, and the canvas bounds it maps to.

use crate::models::{LatLong, WORLD_CENTER};

/// Zoom of the global view.
pub const DEFAULT_ZOOM: f64 = 3.0;

/// Zoom applied when a country is selected.
pub const REGION_ZOOM: f64 = 5.5;

const LONG_RANGE: [f64; 2] = [-180.0, 180.0];
const LAT_RANGE: [f64; 2] = [-90.0, 90.0];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapViewport {
    pub center: LatLong,
    pub zoom: f64,
}

impl Default for MapViewport {
    fn default() -> Self {
        Self {
            center: WORLD_CENTER,
            zoom: DEFAULT_ZOOM,
        }
    }
}

impl MapViewport {
    /// Regional view around `center`.
    pub fn focused_on(center: LatLong) -> Self {
        Self {
            center,
            zoom: REGION_ZOOM,
        }
    }

    pub fn is_default(&self) -> bool {
        *self == Self::default()
    }

    /// Visible longitude span. The default zoom shows the whole world and
    /// every zoom step halves the span.
    pub fn long_span(&self) -> f64 {
        let span = 360.0 / 2f64.powf(self.zoom - DEFAULT_ZOOM);
        span.min(LONG_RANGE[1] - LONG_RANGE[0])
    }

    pub fn lat_span(&self) -> f64 {
        (self.long_span() / 2.0).min(LAT_RANGE[1] - LAT_RANGE[0])
    }

    /// `[min, max]` longitude bounds, shifted to stay on the map.
    pub fn x_bounds(&self) -> [f64; 2] {
        window(self.center.long, self.long_span(), LONG_RANGE)
    }

    /// `[min, max]` latitude bounds, shifted to stay on the map.
    pub fn y_bounds(&self) -> [f64; 2] {
        window(self.center.lat, self.lat_span(), LAT_RANGE)
    }
}

fn window(center: f64, span: f64, range: [f64; 2]) -> [f64; 2] {
    let low = (center - span / 2.0).clamp(range[0], range[1] - span);
    [low, low + span]
}
