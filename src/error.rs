//! Error types for the service adapters and the navigation session.

use thiserror::Error;

use crate::navigation::NavigationState;

/// Failures talking to routing, geocoding or signal services.
#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("could not decode {service} response: {source}")]
    Decode {
        service: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("{service} returned {code}: {message}")]
    Upstream {
        service: &'static str,
        code: String,
        message: String,
    },

    #[error("location not found: {0}")]
    NotFound(String),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Rejected navigation session transitions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    #[error("navigation session cannot start from the {0:?} state")]
    AlreadyStarted(NavigationState),
}
