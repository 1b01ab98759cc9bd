//! route-guidance core
//!
//! Route geometry, signal-aware route ranking and turn-by-turn progress
//! tracking, plus adapters for the routing, signal and geocoding services
//! that feed them.

pub mod error;
pub mod format;
pub mod haversine;
pub mod location;
pub mod maneuver;
pub mod navigation;
pub mod nominatim;
pub mod osrm;
pub mod overpass;
pub mod point;
pub mod polyline;
pub mod proximity;
pub mod ranking;
pub mod session;
pub mod traits;
pub mod trip;

pub use haversine::haversine_distance;
pub use maneuver::{Instruction, Maneuver, ManeuverType};
pub use navigation::{NavigationConfig, NavigationSession, NavigationState};
pub use point::{BoundingBox, Point};
pub use polyline::Polyline;
pub use proximity::{is_point_near_polyline, point_to_segment_distance_squared};
pub use ranking::{RankedRoute, RankingOptions, RouteCandidate, SignalMarker, rank_routes};
