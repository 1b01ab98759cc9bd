//! OSRM HTTP adapter for alternative routes.
//!
//! OSRM speaks GeoJSON order (`[lon, lat]`) for both geometry and maneuver
//! locations; [`candidates_from_response`] is the single place where that is
//! turned into the crate's lat/lon [`Point`]s.

use serde::Deserialize;
use tracing::debug;

use crate::error::{ServiceError, ServiceResult};
use crate::maneuver::{Maneuver, ManeuverType};
use crate::point::Point;
use crate::polyline::Polyline;
use crate::ranking::RouteCandidate;
use crate::traits::RouteProvider;

const SERVICE: &str = "osrm";

#[derive(Debug, Clone)]
pub struct OsrmConfig {
    pub base_url: String,
    pub profile: String,
    pub timeout_secs: u64,
}

impl Default for OsrmConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:5000".to_string(),
            profile: "driving".to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OsrmClient {
    config: OsrmConfig,
    client: reqwest::blocking::Client,
}

impl OsrmClient {
    pub fn new(config: OsrmConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn route_url(&self, from: Point, to: Point) -> String {
        format!(
            "{}/route/v1/{}/{:.6},{:.6};{:.6},{:.6}?overview=full&steps=true&geometries=geojson&alternatives=true",
            self.config.base_url.trim_end_matches('/'),
            self.config.profile,
            from.lon,
            from.lat,
            to.lon,
            to.lat
        )
    }
}

impl RouteProvider for OsrmClient {
    fn routes_between(&self, from: Point, to: Point) -> ServiceResult<Vec<RouteCandidate>> {
        let url = self.route_url(from, to);
        debug!(%url, "requesting routes");

        let response = self.client.get(url).send()?;
        let status = response.status();
        let body = response.text()?;

        match parse_route_response(&body) {
            Err(ServiceError::Decode { .. }) if !status.is_success() => Err(ServiceError::Upstream {
                service: SERVICE,
                code: status.as_u16().to_string(),
                message: body,
            }),
            other => other,
        }
    }
}

/// Decodes an OSRM `route` response body into candidates.
pub fn parse_route_response(body: &str) -> ServiceResult<Vec<RouteCandidate>> {
    let response: OsrmRouteResponse =
        serde_json::from_str(body).map_err(|source| ServiceError::Decode { service: SERVICE, source })?;
    candidates_from_response(response)
}

/// Converts a decoded response into candidates, ids following response order.
pub fn candidates_from_response(response: OsrmRouteResponse) -> ServiceResult<Vec<RouteCandidate>> {
    if response.code != "Ok" {
        return Err(ServiceError::Upstream {
            service: SERVICE,
            code: response.code,
            message: response.message.unwrap_or_default(),
        });
    }

    let candidates = response
        .routes
        .into_iter()
        .enumerate()
        .map(|(id, route)| {
            let steps: Vec<Maneuver> = route
                .legs
                .into_iter()
                .next()
                .map(|leg| leg.steps.into_iter().map(OsrmStep::into_maneuver).collect())
                .unwrap_or_default();

            RouteCandidate {
                id,
                geometry: Polyline::from_lon_lat(&route.geometry.coordinates),
                raw_distance_m: route.distance,
                raw_duration_s: route.duration,
                steps,
            }
        })
        .collect::<Vec<_>>();

    debug!(routes = candidates.len(), "decoded OSRM routes");
    Ok(candidates)
}

#[derive(Debug, Deserialize)]
pub struct OsrmRouteResponse {
    pub code: String,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub routes: Vec<OsrmRoute>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmRoute {
    pub distance: f64,
    pub duration: f64,
    pub geometry: OsrmGeometry,
    #[serde(default)]
    pub legs: Vec<OsrmLeg>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmGeometry {
    pub coordinates: Vec<[f64; 2]>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmLeg {
    #[serde(default)]
    pub steps: Vec<OsrmStep>,
}

#[derive(Debug, Deserialize)]
pub struct OsrmStep {
    #[serde(default)]
    pub name: Option<String>,
    pub maneuver: OsrmManeuver,
}

#[derive(Debug, Deserialize)]
pub struct OsrmManeuver {
    pub location: [f64; 2],
    #[serde(rename = "type")]
    pub kind: ManeuverType,
    #[serde(default)]
    pub modifier: Option<String>,
}

impl OsrmStep {
    fn into_maneuver(self) -> Maneuver {
        Maneuver {
            location: Point::from_lon_lat(self.maneuver.location),
            kind: self.maneuver.kind,
            modifier: self.maneuver.modifier,
            road_name: self.name.filter(|name| !name.is_empty()),
        }
    }
}
