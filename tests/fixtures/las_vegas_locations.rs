//! Real Las Vegas Strip locations for realistic test fixtures.
//!
//! Coordinates sourced from OpenStreetMap. They are routable with an OSRM
//! build of the Nevada extract.

use route_guidance::Point;

/// A named location with coordinates.
#[derive(Debug, Clone)]
pub struct Location {
    pub name: &'static str,
    pub lat: f64,
    pub lon: f64,
}

impl Location {
    pub const fn new(name: &'static str, lat: f64, lon: f64) -> Self {
        Self { name, lat, lon }
    }

    pub fn point(&self) -> Point {
        Point::new(self.lat, self.lon)
    }
}

pub const BELLAGIO: Location = Location::new("Bellagio", 36.1126, -115.1767);
pub const CAESARS_PALACE: Location = Location::new("Caesars Palace", 36.1162, -115.1745);
pub const MGM_GRAND: Location = Location::new("MGM Grand", 36.1023654, -115.1688720);
pub const WYNN: Location = Location::new("Wynn Las Vegas", 36.1263781, -115.1658180);

/// Signalized intersections along Las Vegas Boulevard.
pub const STRIP_SIGNALS: &[Location] = &[
    Location::new("Flamingo Rd & Las Vegas Blvd", 36.1162, -115.1722),
    Location::new("Tropicana Ave & Las Vegas Blvd", 36.1022, -115.1726),
    Location::new("Harmon Ave & Las Vegas Blvd", 36.1083, -115.1724),
];
