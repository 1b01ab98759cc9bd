//! Overpass HTTP adapter for traffic-signal locations.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::point::{BoundingBox, Point};
use crate::ranking::SignalMarker;
use crate::traits::SignalProvider;

const SERVICE: &str = "overpass";

#[derive(Debug, Clone)]
pub struct OverpassConfig {
    pub base_url: String,
    /// Server-side query timeout, also used for the HTTP request.
    pub timeout_secs: u64,
}

impl Default for OverpassConfig {
    fn default() -> Self {
        Self {
            base_url: "https://overpass-api.de".to_string(),
            timeout_secs: 25,
        }
    }
}

#[derive(Debug, Clone)]
pub struct OverpassClient {
    config: OverpassConfig,
    client: reqwest::blocking::Client,
}

impl OverpassClient {
    pub fn new(config: OverpassConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self { config, client })
    }

    pub fn interpreter_url(&self) -> String {
        format!("{}/api/interpreter", self.config.base_url.trim_end_matches('/'))
    }
}

/// Overpass QL for every `highway=traffic_signals` node inside `bbox`.
pub fn signal_query(bbox: &BoundingBox, timeout_secs: u64) -> String {
    format!(
        "[out:json][timeout:{}];node[\"highway\"=\"traffic_signals\"]({},{},{},{});out body;",
        timeout_secs, bbox.min_lat, bbox.min_lon, bbox.max_lat, bbox.max_lon
    )
}

impl SignalProvider for OverpassClient {
    fn signals_within(&self, bbox: &BoundingBox) -> ServiceResult<Vec<SignalMarker>> {
        let query = signal_query(bbox, self.config.timeout_secs);
        debug!(%query, "requesting traffic signals");

        let body = self
            .client
            .post(self.interpreter_url())
            .body(query)
            .send()?
            .error_for_status()?
            .text()?;

        parse_signal_response(&body)
    }
}

/// Decodes an Overpass JSON body. Elements without coordinates are skipped.
pub fn parse_signal_response(body: &str) -> ServiceResult<Vec<SignalMarker>> {
    let response: OverpassResponse =
        serde_json::from_str(body).map_err(|source| ServiceError::Decode { service: SERVICE, source })?;

    let total = response.elements.len();
    let signals: Vec<SignalMarker> = response
        .elements
        .into_iter()
        .filter_map(|element| match (element.lat, element.lon) {
            (Some(lat), Some(lon)) => Some(SignalMarker {
                id: element.id,
                location: Point::new(lat, lon),
            }),
            _ => None,
        })
        .collect();

    if signals.len() < total {
        warn!(skipped = total - signals.len(), "overpass elements without coordinates");
    }
    Ok(signals)
}

#[derive(Debug, Deserialize)]
struct OverpassResponse {
    #[serde(default)]
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(default)]
    id: Option<i64>,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}
