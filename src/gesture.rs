//! An ordered, non-empty sequence of actions.

use crate::action::{Action, ActionId, ActionKind, TouchMode};
use crate::error::GestureError;
use crate::geometry::{Direction, PinchDirection, RotateDirection};
use crate::target::TargetId;

/// Handle to a [`Gesture`] owned by an [`crate::engine::Engine`].
///
/// Opaque and copyable; indexes into the engine's gesture arena and into a
/// bound [`crate::tracker::Tracker`]'s progress records, which are
/// allocated in the same order as the engine's gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureId(pub(crate) usize);

/// A gesture definition: an ordered list of [`Action`]s.
///
/// Built through the `add_*` methods below, each of which appends a new
/// action and returns a handle to it for further configuration via
/// `set_*`. Gestures are append-only and their actions are immutable once
/// configured; see the crate docs for how this crate enforces "immutable
/// after the first event" through the borrow checker rather than a runtime
/// flag.
#[derive(Debug, Clone, Default)]
pub struct Gesture {
    actions: Vec<Action>,
}

impl Gesture {
    pub(crate) fn new() -> Self {
        Self { actions: Vec::new() }
    }

    /// Number of actions in this gesture.
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    /// Whether this gesture has no actions. An empty gesture is accepted by
    /// the builder but never advances past `Idle` in a tracker.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// The action at `id`.
    pub fn action(&self, id: ActionId) -> &Action {
        &self.actions[id.0]
    }

    pub(crate) fn action_slice(&self) -> &[Action] {
        &self.actions
    }

    fn push(&mut self, kind: ActionKind) -> ActionId {
        self.actions.push(Action::new(kind));
        ActionId(self.actions.len() - 1)
    }

    /// Append a Touch action: advances on a press/release matching `mode`.
    pub fn add_touch(&mut self, mode: TouchMode) -> ActionId {
        self.push(ActionKind::Touch { mode })
    }

    /// Append a Move action: advances on centroid translation along
    /// `direction`, or on entering a target (see [`Self::set_target`]).
    pub fn add_move(&mut self, direction: Direction) -> ActionId {
        self.push(ActionKind::Move { direction })
    }

    /// Append a Rotate action: advances on centroid rotation matching
    /// `direction`.
    pub fn add_rotate(&mut self, direction: RotateDirection) -> ActionId {
        self.push(ActionKind::Rotate { direction })
    }

    /// Append a Pinch action: advances on centroid scale change matching
    /// `direction`.
    pub fn add_pinch(&mut self, direction: PinchDirection) -> ActionId {
        self.push(ActionKind::Pinch { direction })
    }

    /// Append a Delay action: advances once `duration_ms` has elapsed
    /// without exceeding move tolerance.
    pub fn add_delay(&mut self, duration_ms: u32) -> ActionId {
        let id = self.push(ActionKind::Delay);
        self.actions[id.0].duration_ms = duration_ms;
        id
    }

    /// Set the completion threshold; see the threshold unit table in the
    /// crate docs for what this means per action kind.
    ///
    /// A threshold of `0` on a non-Delay action is accepted and means "any
    /// single occurrence completes the action" (see
    /// [`crate::tracker::Tracker::register_touch`]).
    pub fn set_threshold(&mut self, id: ActionId, threshold: u32) -> Result<(), GestureError> {
        let action = &mut self.actions[id.0];
        if matches!(action.kind, ActionKind::Move { .. }) && action.target.is_some() {
            return Err(GestureError::TargetAndThresholdConflict);
        }
        action.threshold = threshold;
        Ok(())
    }

    /// Set the target region gating completion. Valid only for
    /// [`ActionKind::Touch`] (gates where the press/release must land) and
    /// [`ActionKind::Move`] (gates where the centroid must end up, in which
    /// case the action's threshold is ignored).
    pub fn set_target(&mut self, id: ActionId, target: TargetId) -> Result<(), GestureError> {
        let action = &mut self.actions[id.0];
        match action.kind {
            ActionKind::Touch { .. } => {}
            ActionKind::Move { .. } if action.threshold == 0 => {}
            ActionKind::Move { .. } => return Err(GestureError::TargetAndThresholdConflict),
            _ => return Err(GestureError::TargetNotSupported(id.0)),
        }
        action.target = Some(target);
        Ok(())
    }

    /// Set the duration bound: minimum dwell for Delay, maximum gap since
    /// the previous completed action for every other kind.
    pub fn set_duration(&mut self, id: ActionId, duration_ms: u32) -> Result<(), GestureError> {
        let action = &mut self.actions[id.0];
        if matches!(action.kind, ActionKind::Delay) && duration_ms == 0 {
            return Err(GestureError::NonPositiveDelayDuration);
        }
        action.duration_ms = duration_ms;
        Ok(())
    }

    /// Set the move tolerance for a single action.
    pub fn set_move_tolerance(&mut self, id: ActionId, tolerance: f64) {
        self.actions[id.0].move_tolerance = tolerance;
    }

    /// Broadcast a move tolerance to every action in this gesture.
    pub fn set_move_tolerance_all(&mut self, tolerance: f64) {
        for action in &mut self.actions {
            action.move_tolerance = tolerance;
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn move_tolerance_broadcasts_to_every_action() {
        let mut g = Gesture::new();
        g.add_touch(TouchMode::DOWN);
        g.add_move(Direction::POSITIVE_X);
        g.set_move_tolerance_all(7.5);
        assert_eq!(g.action(ActionId(0)).move_tolerance(), 7.5);
        assert_eq!(g.action(ActionId(1)).move_tolerance(), 7.5);
    }

    #[test]
    fn target_on_rotate_is_rejected() {
        let mut g = Gesture::new();
        let id = g.add_rotate(RotateDirection::CLOCKWISE);
        let err = g.set_target(id, TargetId(0)).unwrap_err();
        assert_eq!(err, GestureError::TargetNotSupported(0));
    }

    #[test]
    fn move_target_and_threshold_conflict() {
        let mut g = Gesture::new();
        let id = g.add_move(Direction::POSITIVE_X);
        g.set_threshold(id, 50).unwrap();
        let err = g.set_target(id, TargetId(0)).unwrap_err();
        assert_eq!(err, GestureError::TargetAndThresholdConflict);
    }

    #[test]
    fn delay_requires_positive_duration() {
        let mut g = Gesture::new();
        let id = g.add_delay(500);
        let err = g.set_duration(id, 0).unwrap_err();
        assert_eq!(err, GestureError::NonPositiveDelayDuration);
    }
}
