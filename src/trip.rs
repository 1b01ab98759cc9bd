//! Route search with signal-aware ranking.
//!
//! Resolves both endpoints, asks the routing service for alternatives,
//! looks up traffic signals around the trip and ranks the alternatives.
//! A failed signal lookup only costs the penalty: ranking goes ahead on raw
//! durations.

use serde::Serialize;
use tracing::{info, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::point::{BoundingBox, Point};
use crate::ranking::{RankedRoute, RankingOptions, SignalMarker, rank_routes};
use crate::traits::{Geocoder, RouteProvider, SignalProvider};

#[derive(Debug, Clone, PartialEq)]
pub enum Endpoint {
    /// Free-text place, resolved through the geocoder.
    Place(String),
    /// Already known coordinates, e.g. the device position.
    Position(Point),
}

#[derive(Debug, Clone)]
pub struct TripOptions {
    pub ranking: RankingOptions,
    /// Degrees added around the origin/destination envelope for signal lookup.
    pub signal_margin_deg: f64,
}

impl Default for TripOptions {
    fn default() -> Self {
        Self {
            ranking: RankingOptions::default(),
            signal_margin_deg: 0.05,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TripAnalysis {
    pub origin: Point,
    pub destination: Point,
    /// Ranked best first; the first entry is the recommended route.
    pub routes: Vec<RankedRoute>,
    /// Every signal found in the search area, matched or not.
    pub signals: Vec<SignalMarker>,
}

impl TripAnalysis {
    pub fn recommended(&self) -> Option<&RankedRoute> {
        self.routes.iter().find(|route| route.is_recommended)
    }
}

pub struct TripAnalyzer<'a, G, R, S>
where
    G: Geocoder + ?Sized,
    R: RouteProvider + ?Sized,
    S: SignalProvider + ?Sized,
{
    geocoder: &'a G,
    routes: &'a R,
    signals: &'a S,
    options: TripOptions,
}

impl<'a, G, R, S> TripAnalyzer<'a, G, R, S>
where
    G: Geocoder + ?Sized,
    R: RouteProvider + ?Sized,
    S: SignalProvider + ?Sized,
{
    pub fn new(geocoder: &'a G, routes: &'a R, signals: &'a S, options: TripOptions) -> Self {
        Self {
            geocoder,
            routes,
            signals,
            options,
        }
    }

    pub fn analyze(&self, origin: &Endpoint, destination: &Endpoint) -> ServiceResult<TripAnalysis> {
        let origin = self.resolve(origin)?;
        let destination = self.resolve(destination)?;

        let candidates = self.routes.routes_between(origin, destination)?;

        let bbox = BoundingBox::around(origin, destination, self.options.signal_margin_deg);
        let signals = match self.signals.signals_within(&bbox) {
            Ok(signals) => signals,
            Err(err) => {
                warn!(error = %err, "traffic signal lookup failed, ranking without penalties");
                Vec::new()
            }
        };

        let routes = rank_routes(candidates, &signals, &self.options.ranking);
        info!(routes = routes.len(), signals = signals.len(), "trip analyzed");

        Ok(TripAnalysis {
            origin,
            destination,
            routes,
            signals,
        })
    }

    fn resolve(&self, endpoint: &Endpoint) -> ServiceResult<Point> {
        match endpoint {
            Endpoint::Position(point) => Ok(*point),
            Endpoint::Place(query) => self
                .geocoder
                .geocode(query)?
                .ok_or_else(|| ServiceError::NotFound(query.clone())),
        }
    }
}
