//! Staged acquisition of a device position fix.
//!
//! Devices often fail a high-accuracy request indoors or on a cold GPS. The
//! default policy asks for a fresh high-accuracy fix first, then falls back
//! to whatever the platform can give.

use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use crate::point::Point;
use crate::traits::PositionSource;

/// Parameters of a single position request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixRequest {
    pub high_accuracy: bool,
    /// `None` leaves the timeout to the platform.
    pub timeout: Option<Duration>,
    /// Oldest cached fix the platform may return. `None` means any age.
    pub maximum_age: Option<Duration>,
}

impl FixRequest {
    pub fn high_accuracy(timeout: Duration) -> Self {
        Self {
            high_accuracy: true,
            timeout: Some(timeout),
            maximum_age: Some(Duration::ZERO),
        }
    }

    pub fn platform_default() -> Self {
        Self {
            high_accuracy: false,
            timeout: None,
            maximum_age: None,
        }
    }
}

/// Ordered fallback tiers tried by [`acquire_position`].
#[derive(Debug, Clone)]
pub struct FixPolicy {
    pub tiers: Vec<FixRequest>,
}

impl Default for FixPolicy {
    fn default() -> Self {
        Self {
            tiers: vec![
                FixRequest::high_accuracy(Duration::from_secs(5)),
                FixRequest::platform_default(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PositionError {
    #[error("location permission denied")]
    PermissionDenied,
    #[error("position unavailable")]
    Unavailable,
    #[error("position request timed out")]
    Timeout,
}

impl PositionError {
    /// Message suitable for showing to the driver.
    pub fn user_message(&self) -> &'static str {
        match self {
            PositionError::PermissionDenied => "Location permission denied.",
            PositionError::Timeout => "Location request timed out completely.",
            PositionError::Unavailable => "Could not get location.",
        }
    }
}

/// Tries each tier of `policy` in order and returns the first fix.
///
/// The error of the last tier is returned when all of them fail. An empty
/// policy yields [`PositionError::Unavailable`].
pub fn acquire_position<P>(source: &mut P, policy: &FixPolicy) -> Result<Point, PositionError>
where
    P: PositionSource + ?Sized,
{
    let mut last_error = PositionError::Unavailable;

    for (tier, request) in policy.tiers.iter().enumerate() {
        match source.current_position(request) {
            Ok(point) => return Ok(point),
            Err(err) => {
                warn!(tier, high_accuracy = request.high_accuracy, error = %err, "position fix failed");
                last_error = err;
            }
        }
    }

    Err(last_error)
}
