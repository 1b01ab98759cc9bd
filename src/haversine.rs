//! Great-circle distance between geographic points.
//!
//! Uses the haversine formula on a spherical Earth. Accurate to well under
//! a meter at the distances navigation cares about.

use crate::point::Point;

/// Earth radius in meters.
pub const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Approximate length of one degree of latitude in meters.
pub const METERS_PER_DEGREE: f64 = 111_320.0;

/// Great-circle distance between two points in meters.
///
/// Symmetric in its arguments and zero for identical points. Finite for any
/// finite input, antipodal pairs included. Inputs outside the valid lat/lon
/// range are not rejected; the result is whatever the formula yields.
pub fn haversine_distance(a: Point, b: Point) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lon = (b.lon - a.lon).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lon / 2.0).sin().powi(2);
    // rounding can leave h a few ulps above 1 near antipodes
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Converts a ground distance into degrees of arc, for degree-based tolerances.
pub fn meters_to_degrees(meters: f64) -> f64 {
    meters / METERS_PER_DEGREE
}
