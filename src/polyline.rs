//! Polyline representation for route geometries.
//!
//! Routing services hand out coordinates in `[lon, lat]` order. The
//! transposition into [`Point`] happens once, in [`Polyline::from_lon_lat`],
//! so the rest of the crate only ever sees lat/lon.

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// A route geometry as an ordered sequence of points.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    points: Vec<Point>,
}

impl Polyline {
    /// Creates a new Polyline from lat/lon points.
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    /// Builds a polyline from GeoJSON-ordered `[lon, lat]` coordinates.
    pub fn from_lon_lat(coordinates: &[[f64; 2]]) -> Self {
        Self {
            points: coordinates.iter().copied().map(Point::from_lon_lat).collect(),
        }
    }

    /// Returns a reference to the coordinate points.
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    /// Consumes the polyline and returns the owned coordinate points.
    pub fn into_points(self) -> Vec<Point> {
        self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Consecutive point pairs. Empty for polylines with fewer than two points.
    pub fn segments(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.points.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl From<Vec<Point>> for Polyline {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}
