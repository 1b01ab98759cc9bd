//! Maneuvers and the spoken instructions built from them.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::point::Point;

/// Spoken when the arrival maneuver is reached.
pub const ARRIVAL_MESSAGE: &str = "You have arrived.";

/// Road label used when the routing service gives a step no name.
const UNNAMED_ROAD: &str = "road";

/// Maneuver kinds, named after the OSRM step vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ManeuverType {
    Turn,
    NewName,
    Depart,
    Arrive,
    Merge,
    OnRamp,
    OffRamp,
    Fork,
    EndOfRoad,
    Continue,
    Roundabout,
    Rotary,
    RoundaboutTurn,
    Notification,
    ExitRoundabout,
    ExitRotary,
    Other(String),
}

impl ManeuverType {
    pub fn as_str(&self) -> &str {
        match self {
            ManeuverType::Turn => "turn",
            ManeuverType::NewName => "new name",
            ManeuverType::Depart => "depart",
            ManeuverType::Arrive => "arrive",
            ManeuverType::Merge => "merge",
            ManeuverType::OnRamp => "on ramp",
            ManeuverType::OffRamp => "off ramp",
            ManeuverType::Fork => "fork",
            ManeuverType::EndOfRoad => "end of road",
            ManeuverType::Continue => "continue",
            ManeuverType::Roundabout => "roundabout",
            ManeuverType::Rotary => "rotary",
            ManeuverType::RoundaboutTurn => "roundabout turn",
            ManeuverType::Notification => "notification",
            ManeuverType::ExitRoundabout => "exit roundabout",
            ManeuverType::ExitRotary => "exit rotary",
            ManeuverType::Other(raw) => raw,
        }
    }
}

impl From<&str> for ManeuverType {
    fn from(raw: &str) -> Self {
        match raw {
            "turn" => ManeuverType::Turn,
            "new name" => ManeuverType::NewName,
            "depart" => ManeuverType::Depart,
            "arrive" => ManeuverType::Arrive,
            "merge" => ManeuverType::Merge,
            "on ramp" => ManeuverType::OnRamp,
            "off ramp" => ManeuverType::OffRamp,
            "fork" => ManeuverType::Fork,
            "end of road" => ManeuverType::EndOfRoad,
            "continue" => ManeuverType::Continue,
            "roundabout" => ManeuverType::Roundabout,
            "rotary" => ManeuverType::Rotary,
            "roundabout turn" => ManeuverType::RoundaboutTurn,
            "notification" => ManeuverType::Notification,
            "exit roundabout" => ManeuverType::ExitRoundabout,
            "exit rotary" => ManeuverType::ExitRotary,
            other => ManeuverType::Other(other.to_string()),
        }
    }
}

impl From<String> for ManeuverType {
    fn from(raw: String) -> Self {
        ManeuverType::from(raw.as_str())
    }
}

impl From<ManeuverType> for String {
    fn from(kind: ManeuverType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for ManeuverType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single navigation step tied to a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Maneuver {
    pub location: Point,
    pub kind: ManeuverType,
    pub modifier: Option<String>,
    pub road_name: Option<String>,
}

impl Maneuver {
    pub fn new(location: Point, kind: ManeuverType) -> Self {
        Self {
            location,
            kind,
            modifier: None,
            road_name: None,
        }
    }

    pub fn with_modifier(mut self, modifier: impl Into<String>) -> Self {
        self.modifier = Some(modifier.into());
        self
    }

    pub fn with_road_name(mut self, road_name: impl Into<String>) -> Self {
        self.road_name = Some(road_name.into());
        self
    }

    pub fn is_arrival(&self) -> bool {
        self.kind == ManeuverType::Arrive
    }

    /// Text to announce when this maneuver is reached.
    ///
    /// "turn left onto Main Street"; the modifier is dropped when absent and
    /// unnamed roads read as "road".
    pub fn instruction_text(&self) -> String {
        if self.is_arrival() {
            return ARRIVAL_MESSAGE.to_string();
        }

        let road = self
            .road_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .unwrap_or(UNNAMED_ROAD);

        match self.modifier.as_deref().filter(|m| !m.trim().is_empty()) {
            Some(modifier) => format!("{} {} onto {}", self.kind, modifier, road),
            None => format!("{} onto {}", self.kind, road),
        }
    }
}

/// An instruction emitted when a maneuver's trigger radius is entered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Instruction {
    /// Index of the triggering maneuver in the session's step list.
    pub step_index: usize,
    pub kind: ManeuverType,
    pub location: Point,
    pub text: String,
}

impl Instruction {
    pub(crate) fn for_step(step_index: usize, maneuver: &Maneuver) -> Self {
        Self {
            step_index,
            kind: maneuver.kind.clone(),
            location: maneuver.location,
            text: maneuver.instruction_text(),
        }
    }
}
