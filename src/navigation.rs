//! Turn-by-turn progress tracking over a live position stream.
//!
//! A [`NavigationSession`] owns the maneuver list of the chosen route and a
//! cursor into it. Each position update is compared against the next
//! maneuver only; when it falls inside the trigger radius one instruction is
//! delivered and the cursor moves on. Every transition takes `&mut self`, so
//! a session shared between threads has to sit behind a `Mutex`.

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::NavigationError;
use crate::haversine::haversine_distance;
use crate::maneuver::{Instruction, Maneuver};
use crate::point::Point;
use crate::traits::InstructionSink;

/// Announced when a session starts.
pub const START_ANNOUNCEMENT: &str = "Starting navigation to destination.";

/// Announced when the driver cancels a session.
pub const STOP_ANNOUNCEMENT: &str = "Navigation stopped.";

const DEFAULT_TRIGGER_RADIUS_M: f64 = 40.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavigationState {
    Idle,
    Navigating,
    Completed,
    Cancelled,
}

impl NavigationState {
    pub fn is_terminal(&self) -> bool {
        matches!(self, NavigationState::Completed | NavigationState::Cancelled)
    }
}

#[derive(Debug, Clone)]
pub struct NavigationConfig {
    /// A maneuver triggers once the position is strictly closer than this.
    pub trigger_radius_m: f64,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            trigger_radius_m: DEFAULT_TRIGGER_RADIUS_M,
        }
    }
}

#[derive(Debug, Clone)]
pub struct NavigationSession {
    config: NavigationConfig,
    steps: Vec<Maneuver>,
    next_step_index: usize,
    state: NavigationState,
}

impl Default for NavigationSession {
    fn default() -> Self {
        Self::new(NavigationConfig::default())
    }
}

impl NavigationSession {
    pub fn new(config: NavigationConfig) -> Self {
        Self {
            config,
            steps: Vec::new(),
            next_step_index: 0,
            state: NavigationState::Idle,
        }
    }

    pub fn state(&self) -> NavigationState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        self.state == NavigationState::Navigating
    }

    pub fn next_step_index(&self) -> usize {
        self.next_step_index
    }

    pub fn steps(&self) -> &[Maneuver] {
        &self.steps
    }

    /// The maneuver the session is waiting for, while navigating.
    pub fn next_step(&self) -> Option<&Maneuver> {
        if self.is_active() {
            self.steps.get(self.next_step_index)
        } else {
            None
        }
    }

    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Begins navigating `steps` from the first maneuver.
    ///
    /// Returns the start announcement. An empty step list completes
    /// immediately. Only an idle session can be started.
    pub fn start(&mut self, steps: Vec<Maneuver>) -> Result<&'static str, NavigationError> {
        if self.state != NavigationState::Idle {
            warn!(state = ?self.state, "ignoring start on a session that already ran");
            return Err(NavigationError::AlreadyStarted(self.state));
        }

        self.next_step_index = 0;
        self.state = if steps.is_empty() {
            NavigationState::Completed
        } else {
            NavigationState::Navigating
        };
        self.steps = steps;

        info!(steps = self.steps.len(), state = ?self.state, "navigation started");
        Ok(START_ANNOUNCEMENT)
    }

    /// Feeds one position fix into the session.
    ///
    /// `None` stands for a fix that could not be obtained and leaves the
    /// session untouched, as does any update outside the navigating state.
    /// When the next maneuver is reached its instruction is delivered to
    /// `sink` and also returned.
    pub fn position_update<S>(&mut self, position: Option<Point>, sink: &mut S) -> Option<Instruction>
    where
        S: InstructionSink + ?Sized,
    {
        if self.state != NavigationState::Navigating {
            return None;
        }

        let position = match position {
            Some(p) if p.is_finite() => p,
            _ => {
                debug!("position unavailable, waiting for next fix");
                return None;
            }
        };

        let index = self.next_step_index;
        let step = self.steps.get(index)?;
        let distance_m = haversine_distance(position, step.location);
        debug!(step = index, distance_m, "distance to next maneuver");

        if distance_m >= self.config.trigger_radius_m || distance_m.is_nan() {
            return None;
        }

        let instruction = Instruction::for_step(index, step);
        let arrived = step.is_arrival();
        sink.deliver(&instruction);
        self.next_step_index += 1;

        if arrived || self.next_step_index >= self.steps.len() {
            self.state = NavigationState::Completed;
            info!(steps_taken = self.next_step_index, "navigation completed");
        }

        Some(instruction)
    }

    /// Stops an active session. Returns the stop announcement when a
    /// navigating session was actually cancelled.
    pub fn cancel(&mut self) -> Option<&'static str> {
        if self.state != NavigationState::Navigating {
            return None;
        }

        self.state = NavigationState::Cancelled;
        self.steps.clear();
        info!(at_step = self.next_step_index, "navigation cancelled");
        Some(STOP_ANNOUNCEMENT)
    }

    /// Meters from `position` to the next maneuver, while navigating.
    pub fn distance_to_next(&self, position: Point) -> Option<f64> {
        self.next_step().map(|step| haversine_distance(position, step.location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maneuver::ManeuverType;

    fn two_steps() -> Vec<Maneuver> {
        vec![
            Maneuver::new(Point::new(10.0, 10.0), ManeuverType::Turn)
                .with_modifier("left")
                .with_road_name("Main Street"),
            Maneuver::new(Point::new(10.0, 10.001), ManeuverType::Arrive),
        ]
    }

    #[test]
    fn test_starts_idle() {
        let session = NavigationSession::default();
        assert_eq!(session.state(), NavigationState::Idle);
        assert_eq!(session.next_step_index(), 0);
        assert!(session.next_step().is_none());
    }

    #[test]
    fn test_start_returns_announcement() {
        let mut session = NavigationSession::default();
        assert_eq!(session.start(two_steps()), Ok(START_ANNOUNCEMENT));
        assert!(session.is_active());
    }

    #[test]
    fn test_start_with_no_steps_completes() {
        let mut session = NavigationSession::default();
        session.start(Vec::new()).unwrap();
        assert_eq!(session.state(), NavigationState::Completed);
        assert!(session.state().is_terminal());
    }

    #[test]
    fn test_second_start_is_rejected() {
        let mut session = NavigationSession::default();
        session.start(two_steps()).unwrap();
        let err = session.start(Vec::new()).unwrap_err();
        assert_eq!(err, NavigationError::AlreadyStarted(NavigationState::Navigating));
        assert_eq!(session.steps().len(), 2);
    }

    #[test]
    fn test_far_position_does_not_trigger() {
        let mut session = NavigationSession::default();
        session.start(two_steps()).unwrap();
        let mut sink: Vec<Instruction> = Vec::new();

        // ~110 m south of the first maneuver
        assert!(session.position_update(Some(Point::new(9.999, 10.0)), &mut sink).is_none());
        assert!(sink.is_empty());
        assert_eq!(session.next_step_index(), 0);
    }

    #[test]
    fn test_missing_position_is_noop() {
        let mut session = NavigationSession::default();
        session.start(two_steps()).unwrap();
        let mut sink: Vec<Instruction> = Vec::new();

        assert!(session.position_update(None, &mut sink).is_none());
        assert!(session.position_update(Some(Point::new(f64::NAN, 10.0)), &mut sink).is_none());
        assert_eq!(session.state(), NavigationState::Navigating);
        assert!(sink.is_empty());
    }

    #[test]
    fn test_one_step_per_update() {
        // Both maneuvers at the same spot: still one emission per update
        let steps = vec![
            Maneuver::new(Point::new(1.0, 1.0), ManeuverType::Depart),
            Maneuver::new(Point::new(1.0, 1.0), ManeuverType::Arrive),
        ];
        let mut session = NavigationSession::default();
        session.start(steps).unwrap();
        let mut sink: Vec<Instruction> = Vec::new();

        session.position_update(Some(Point::new(1.0, 1.0)), &mut sink);
        assert_eq!(sink.len(), 1);
        assert_eq!(session.next_step_index(), 1);
        assert!(session.is_active());

        session.position_update(Some(Point::new(1.0, 1.0)), &mut sink);
        assert_eq!(sink.len(), 2);
        assert_eq!(session.state(), NavigationState::Completed);
    }

    #[test]
    fn test_arrive_before_end_completes() {
        let steps = vec![
            Maneuver::new(Point::new(1.0, 1.0), ManeuverType::Arrive),
            Maneuver::new(Point::new(2.0, 2.0), ManeuverType::Turn),
        ];
        let mut session = NavigationSession::default();
        session.start(steps).unwrap();
        let mut sink: Vec<Instruction> = Vec::new();

        session.position_update(Some(Point::new(1.0, 1.0)), &mut sink);
        assert_eq!(session.state(), NavigationState::Completed);
        assert_eq!(session.next_step_index(), 1);
        assert!(session.position_update(Some(Point::new(2.0, 2.0)), &mut sink).is_none());
        assert_eq!(sink.len(), 1);
    }

    #[test]
    fn test_last_non_arrival_step_completes() {
        let steps = vec![Maneuver::new(Point::new(1.0, 1.0), ManeuverType::Continue)];
        let mut session = NavigationSession::default();
        session.start(steps).unwrap();

        let emitted = session.position_update(Some(Point::new(1.0, 1.0)), &mut Vec::<Instruction>::new());
        assert_eq!(emitted.map(|i| i.text), Some("continue onto road".to_string()));
        assert_eq!(session.state(), NavigationState::Completed);
        assert_eq!(session.next_step_index(), 1);
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut session = NavigationSession::default();
        session.start(two_steps()).unwrap();
        assert_eq!(session.cancel(), Some(STOP_ANNOUNCEMENT));
        assert_eq!(session.state(), NavigationState::Cancelled);
        assert!(session.state().is_terminal());
        assert!(session.steps().is_empty());

        let mut sink: Vec<Instruction> = Vec::new();
        assert!(session.position_update(Some(Point::new(10.0, 10.0)), &mut sink).is_none());
        assert!(sink.is_empty());
        assert_eq!(session.cancel(), None);
    }

    #[test]
    fn test_cancel_when_idle_is_noop() {
        let mut session = NavigationSession::default();
        assert_eq!(session.cancel(), None);
        assert_eq!(session.state(), NavigationState::Idle);
    }

    #[test]
    fn test_custom_trigger_radius() {
        let mut session = NavigationSession::new(NavigationConfig { trigger_radius_m: 200.0 });
        session.start(two_steps()).unwrap();
        let emitted = session.position_update(Some(Point::new(9.999, 10.0)), &mut Vec::<Instruction>::new());
        assert_eq!(emitted.map(|i| i.step_index), Some(0));
    }

    #[test]
    fn test_closure_sink() {
        let mut spoken = Vec::new();
        let mut session = NavigationSession::default();
        session.start(two_steps()).unwrap();

        let mut speak = |instruction: &Instruction| spoken.push(instruction.text.clone());
        session.position_update(Some(Point::new(10.0, 10.0)), &mut speak);

        assert_eq!(spoken, vec!["turn left onto Main Street".to_string()]);
    }

    #[test]
    fn test_distance_to_next() {
        let mut session = NavigationSession::default();
        assert!(session.distance_to_next(Point::new(10.0, 10.0)).is_none());
        session.start(two_steps()).unwrap();
        let d = session.distance_to_next(Point::new(10.0, 10.0)).unwrap();
        assert!(d < 1e-6);
    }
}
