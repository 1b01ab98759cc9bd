//! Point-to-route proximity tests.
//!
//! Distances here are planar: latitude and longitude are treated as
//! Cartesian coordinates and results are in degrees (or degrees²). The
//! error from ignoring curvature and meridian convergence is negligible over
//! the sub-kilometer segments a routed geometry is made of. Anything wider
//! than city scale needs a geodesic point-to-segment formula instead.

use crate::point::Point;
use crate::polyline::Polyline;

/// Squared planar distance from `p` to the closest point of segment `v`-`w`.
///
/// A degenerate segment (`v == w`) yields the squared distance to `v`.
pub fn point_to_segment_distance_squared(p: Point, v: Point, w: Point) -> f64 {
    let l2 = v.planar_distance_squared(&w);
    if l2 == 0.0 {
        return p.planar_distance_squared(&v);
    }

    let t = ((p.lat - v.lat) * (w.lat - v.lat) + (p.lon - v.lon) * (w.lon - v.lon)) / l2;
    let t = t.clamp(0.0, 1.0);
    let projection = Point::new(v.lat + t * (w.lat - v.lat), v.lon + t * (w.lon - v.lon));

    p.planar_distance_squared(&projection)
}

/// Whether `p` lies strictly within `tolerance_deg` of any segment of `polyline`.
///
/// Returns false for polylines with fewer than two points, for a
/// non-positive tolerance and for non-finite input. Callers with a
/// meter-based radius convert it with [`crate::haversine::meters_to_degrees`].
pub fn is_point_near_polyline(p: Point, polyline: &Polyline, tolerance_deg: f64) -> bool {
    if tolerance_deg.is_nan() || tolerance_deg <= 0.0 || !p.is_finite() {
        return false;
    }
    let tol2 = tolerance_deg * tolerance_deg;

    polyline
        .segments()
        .any(|(v, w)| point_to_segment_distance_squared(p, v, w) < tol2)
}
