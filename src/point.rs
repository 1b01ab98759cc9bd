//! Geographic point and bounding box value types.

use serde::{Deserialize, Serialize};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub lat: f64,
    pub lon: f64,
}

impl Point {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Builds a point from a `[lon, lat]` pair as emitted by GeoJSON and OSRM.
    pub fn from_lon_lat(pair: [f64; 2]) -> Self {
        Self {
            lat: pair[1],
            lon: pair[0],
        }
    }

    pub fn is_finite(&self) -> bool {
        self.lat.is_finite() && self.lon.is_finite()
    }

    /// Squared planar distance in degrees², treating lat/lon as Cartesian.
    pub(crate) fn planar_distance_squared(&self, other: &Point) -> f64 {
        let dlat = self.lat - other.lat;
        let dlon = self.lon - other.lon;
        dlat * dlat + dlon * dlon
    }
}

/// Axis-aligned lat/lon envelope used for signal lookups.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Envelope of two points grown by `margin_deg` on every side.
    pub fn around(a: Point, b: Point, margin_deg: f64) -> Self {
        let margin = margin_deg.max(0.0);
        Self {
            min_lat: a.lat.min(b.lat) - margin,
            min_lon: a.lon.min(b.lon) - margin,
            max_lat: a.lat.max(b.lat) + margin,
            max_lon: a.lon.max(b.lon) + margin,
        }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.lat >= self.min_lat && p.lat <= self.max_lat && p.lon >= self.min_lon && p.lon <= self.max_lon
    }
}
