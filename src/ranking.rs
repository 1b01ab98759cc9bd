//! Route ranking by signal-penalized travel time.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::format::{format_distance_km, format_duration};
use crate::haversine::meters_to_degrees;
use crate::maneuver::Maneuver;
use crate::point::Point;
use crate::polyline::Polyline;
use crate::proximity::is_point_near_polyline;

/// A traffic-control location reported by a POI service.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SignalMarker {
    /// Upstream node id, when the source has one.
    pub id: Option<i64>,
    pub location: Point,
}

impl SignalMarker {
    pub fn new(location: Point) -> Self {
        Self { id: None, location }
    }
}

/// One alternative returned by the routing service for a search.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCandidate {
    pub id: usize,
    pub geometry: Polyline,
    pub raw_distance_m: f64,
    pub raw_duration_s: f64,
    pub steps: Vec<Maneuver>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedRoute {
    pub candidate: RouteCandidate,
    /// Signals matched against this route's geometry.
    pub signals: Vec<SignalMarker>,
    pub signal_count: usize,
    pub penalized_duration_s: f64,
    pub is_recommended: bool,
}

impl RankedRoute {
    /// "1h 5m" style label for the penalized duration.
    pub fn duration_label(&self) -> String {
        format_duration(self.penalized_duration_s)
    }

    /// Route length in kilometers with one decimal.
    pub fn distance_label(&self) -> String {
        format_distance_km(self.candidate.raw_distance_m)
    }
}

#[derive(Debug, Clone)]
pub struct RankingOptions {
    /// Signal-to-route matching tolerance in degrees.
    pub tolerance_deg: f64,
    /// Seconds added per signal on the route. Negative values count as zero
    /// and an infinite penalty is capped at `f64::MAX`.
    pub signal_penalty_s: f64,
}

impl Default for RankingOptions {
    fn default() -> Self {
        Self {
            tolerance_deg: 0.0001,
            signal_penalty_s: 60.0,
        }
    }
}

impl RankingOptions {
    /// Options with the matching tolerance given as a ground distance.
    pub fn with_tolerance_meters(meters: f64, signal_penalty_s: f64) -> Self {
        Self {
            tolerance_deg: meters_to_degrees(meters),
            signal_penalty_s,
        }
    }
}

/// Scores every candidate and sorts ascending by penalized duration.
///
/// The sort is stable, so equally scored routes keep their input order.
/// Routes whose score is not finite sort after every finite one. The first
/// route of a non-empty result is the only one marked recommended.
pub fn rank_routes(
    candidates: Vec<RouteCandidate>,
    signals: &[SignalMarker],
    options: &RankingOptions,
) -> Vec<RankedRoute> {
    let penalty = options.signal_penalty_s.max(0.0).min(f64::MAX);

    let mut ranked: Vec<RankedRoute> = candidates
        .into_iter()
        .map(|candidate| {
            let on_route: Vec<SignalMarker> = signals
                .iter()
                .filter(|signal| is_point_near_polyline(signal.location, &candidate.geometry, options.tolerance_deg))
                .copied()
                .collect();
            let signal_count = on_route.len();
            let penalized_duration_s = candidate.raw_duration_s + signal_count as f64 * penalty;

            debug!(
                route = candidate.id,
                signal_count,
                raw_duration_s = candidate.raw_duration_s,
                penalized_duration_s,
                "scored route"
            );
            if !penalized_duration_s.is_finite() {
                warn!(route = candidate.id, penalized_duration_s, "route has no finite score, ranking it last");
            }

            RankedRoute {
                candidate,
                signals: on_route,
                signal_count,
                penalized_duration_s,
                is_recommended: false,
            }
        })
        .collect();

    ranked.sort_by(|a, b| by_score(a.penalized_duration_s, b.penalized_duration_s));

    if let Some(best) = ranked.first_mut() {
        best.is_recommended = true;
        info!(
            route = best.candidate.id,
            penalized_duration_s = best.penalized_duration_s,
            "recommended route"
        );
    }

    ranked
}

/// Ascending with every non-finite score after the finite ones.
fn by_score(a: f64, b: f64) -> Ordering {
    match (a.is_finite(), b.is_finite()) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => a.total_cmp(&b),
    }
}
