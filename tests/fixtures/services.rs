//! In-memory stand-ins for the external services.

use std::cell::RefCell;
use std::collections::HashMap;

use route_guidance::error::{ServiceError, ServiceResult};
use route_guidance::{BoundingBox, Point, Polyline, RouteCandidate, SignalMarker};
use route_guidance::traits::{Geocoder, RouteProvider, SignalProvider};

/// A two-point candidate from `from` to `to`.
pub fn straight_route(id: usize, duration_s: f64, from: Point, to: Point) -> RouteCandidate {
    RouteCandidate {
        id,
        geometry: Polyline::new(vec![from, to]),
        raw_distance_m: route_guidance::haversine_distance(from, to),
        raw_duration_s: duration_s,
        steps: Vec::new(),
    }
}

#[derive(Default)]
pub struct MockGeocoder {
    pub places: HashMap<String, Point>,
    pub queries: RefCell<Vec<String>>,
}

impl MockGeocoder {
    pub fn with_place(mut self, name: &str, point: Point) -> Self {
        self.places.insert(name.to_string(), point);
        self
    }
}

impl Geocoder for MockGeocoder {
    fn geocode(&self, query: &str) -> ServiceResult<Option<Point>> {
        self.queries.borrow_mut().push(query.to_string());
        Ok(self.places.get(query).copied())
    }

    fn reverse(&self, point: Point) -> ServiceResult<Option<String>> {
        Ok(self
            .places
            .iter()
            .find(|(_, p)| **p == point)
            .map(|(name, _)| name.clone()))
    }
}

pub struct MockRoutes {
    pub candidates: Vec<RouteCandidate>,
    pub requests: RefCell<Vec<(Point, Point)>>,
}

impl MockRoutes {
    pub fn new(candidates: Vec<RouteCandidate>) -> Self {
        Self {
            candidates,
            requests: RefCell::new(Vec::new()),
        }
    }
}

impl RouteProvider for MockRoutes {
    fn routes_between(&self, from: Point, to: Point) -> ServiceResult<Vec<RouteCandidate>> {
        self.requests.borrow_mut().push((from, to));
        Ok(self.candidates.clone())
    }
}

pub struct FailingRoutes;

impl RouteProvider for FailingRoutes {
    fn routes_between(&self, _from: Point, _to: Point) -> ServiceResult<Vec<RouteCandidate>> {
        Err(ServiceError::Upstream {
            service: "osrm",
            code: "NoRoute".to_string(),
            message: "Impossible route between points".to_string(),
        })
    }
}

pub struct MockSignals {
    pub signals: Vec<SignalMarker>,
    pub areas: RefCell<Vec<BoundingBox>>,
}

impl MockSignals {
    pub fn new(signals: Vec<SignalMarker>) -> Self {
        Self {
            signals,
            areas: RefCell::new(Vec::new()),
        }
    }
}

impl SignalProvider for MockSignals {
    fn signals_within(&self, bbox: &BoundingBox) -> ServiceResult<Vec<SignalMarker>> {
        self.areas.borrow_mut().push(*bbox);
        Ok(self
            .signals
            .iter()
            .filter(|signal| bbox.contains(signal.location))
            .copied()
            .collect())
    }
}

pub struct FailingSignals;

impl SignalProvider for FailingSignals {
    fn signals_within(&self, _bbox: &BoundingBox) -> ServiceResult<Vec<SignalMarker>> {
        Err(ServiceError::Upstream {
            service: "overpass",
            code: "429".to_string(),
            message: "Too Many Requests".to_string(),
        })
    }
}
