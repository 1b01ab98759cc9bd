//! Nominatim HTTP adapter for forward and reverse geocoding.

use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ServiceError, ServiceResult};
use crate::point::Point;
use crate::traits::Geocoder;

const SERVICE: &str = "nominatim";

#[derive(Debug, Clone)]
pub struct NominatimConfig {
    pub base_url: String,
    /// Nominatim's usage policy requires an identifying user agent.
    pub user_agent: String,
    pub timeout_secs: u64,
}

impl Default for NominatimConfig {
    fn default() -> Self {
        Self {
            base_url: "https://nominatim.openstreetmap.org".to_string(),
            user_agent: concat!("route-guidance/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_secs: 10,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NominatimClient {
    config: NominatimConfig,
    client: reqwest::blocking::Client,
}

impl NominatimClient {
    pub fn new(config: NominatimConfig) -> Result<Self, reqwest::Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(std::time::Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { config, client })
    }

    fn base(&self) -> &str {
        self.config.base_url.trim_end_matches('/')
    }
}

impl Geocoder for NominatimClient {
    fn geocode(&self, query: &str) -> ServiceResult<Option<Point>> {
        debug!(query, "geocoding");
        let body = self
            .client
            .get(format!("{}/search", self.base()))
            .query(&[("format", "json"), ("q", query), ("limit", "1")])
            .send()?
            .error_for_status()?
            .text()?;

        parse_search_response(&body)
    }

    fn reverse(&self, point: Point) -> ServiceResult<Option<String>> {
        let lat = point.lat.to_string();
        let lon = point.lon.to_string();
        let body = self
            .client
            .get(format!("{}/reverse", self.base()))
            .query(&[("format", "json"), ("lat", lat.as_str()), ("lon", lon.as_str())])
            .send()?
            .error_for_status()?
            .text()?;

        parse_reverse_response(&body)
    }
}

/// First hit of a `search` response. Nominatim encodes coordinates as strings.
pub fn parse_search_response(body: &str) -> ServiceResult<Option<Point>> {
    let hits: Vec<SearchHit> =
        serde_json::from_str(body).map_err(|source| ServiceError::Decode { service: SERVICE, source })?;

    let Some(hit) = hits.into_iter().next() else {
        return Ok(None);
    };

    match (hit.lat.trim().parse::<f64>(), hit.lon.trim().parse::<f64>()) {
        (Ok(lat), Ok(lon)) => Ok(Some(Point::new(lat, lon))),
        _ => {
            warn!(lat = %hit.lat, lon = %hit.lon, "unparseable coordinates in search hit");
            Ok(None)
        }
    }
}

/// `display_name` of a `reverse` response, if present.
pub fn parse_reverse_response(body: &str) -> ServiceResult<Option<String>> {
    let place: ReversePlace =
        serde_json::from_str(body).map_err(|source| ServiceError::Decode { service: SERVICE, source })?;
    Ok(place.display_name.filter(|name| !name.is_empty()))
}

#[derive(Debug, Deserialize)]
struct SearchHit {
    lat: String,
    lon: String,
}

#[derive(Debug, Deserialize)]
struct ReversePlace {
    #[serde(default)]
    display_name: Option<String>,
}
