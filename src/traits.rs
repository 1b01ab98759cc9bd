//! Seams to the services around the engine.
//!
//! The engine itself never performs I/O. Routing, signal lookup, geocoding,
//! device location and instruction delivery are all supplied by the
//! embedding application through these traits.

use crate::error::ServiceResult;
use crate::location::{FixRequest, PositionError};
use crate::maneuver::Instruction;
use crate::point::{BoundingBox, Point};
use crate::ranking::{RouteCandidate, SignalMarker};

/// Supplies alternative routes between two points.
pub trait RouteProvider {
    fn routes_between(&self, from: Point, to: Point) -> ServiceResult<Vec<RouteCandidate>>;
}

/// Supplies traffic-signal locations inside an area.
pub trait SignalProvider {
    fn signals_within(&self, bbox: &BoundingBox) -> ServiceResult<Vec<SignalMarker>>;
}

/// Resolves free-text place names to coordinates and back.
pub trait Geocoder {
    /// Best match for `query`, or `None` when nothing matched.
    fn geocode(&self, query: &str) -> ServiceResult<Option<Point>>;

    /// Human-readable name for a position, if the service knows one.
    fn reverse(&self, point: Point) -> ServiceResult<Option<String>>;
}

/// A source of device position fixes.
pub trait PositionSource {
    fn current_position(&mut self, request: &FixRequest) -> Result<Point, PositionError>;
}

/// Receives instructions as navigation progresses (text-to-speech, UI, log).
pub trait InstructionSink {
    fn deliver(&mut self, instruction: &Instruction);
}

impl InstructionSink for Vec<Instruction> {
    fn deliver(&mut self, instruction: &Instruction) {
        self.push(instruction.clone());
    }
}

impl<F> InstructionSink for F
where
    F: FnMut(&Instruction),
{
    fn deliver(&mut self, instruction: &Instruction) {
        self(instruction)
    }
}
