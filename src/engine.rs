//! Owns every gesture definition and target; the allocation root.

use crate::error::GestureError;
use crate::gesture::{Gesture, GestureId};
use crate::target::{Target, TargetId};

/// The root object: owns the set of gesture definitions and the set of
/// targets they reference.
///
/// An `Engine` is logically immutable once a [`crate::tracker::Tracker`] has
/// been created from it: `Tracker::new` borrows the engine for its whole
/// lifetime, and every mutating method here takes `&mut self`, so the
/// borrow checker rejects any attempt to add a gesture or target, or to
/// reconfigure an existing one, while a tracker is alive. This is a
/// stricter (and compiler-enforced) version of the "no modification after
/// the first event" contract.
#[derive(Debug, Default)]
pub struct Engine {
    gestures: Vec<Gesture>,
    targets: Vec<Target>,
}

impl Engine {
    /// Create an engine with no gestures and no targets.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new rectangular target region.
    pub fn create_target(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<TargetId, GestureError> {
        let target = Target::new(x, y, w, h)?;
        self.targets.push(target);
        Ok(TargetId(self.targets.len() - 1))
    }

    /// Look up a previously created target.
    pub fn target(&self, id: TargetId) -> &Target {
        &self.targets[id.0]
    }

    /// Register a new, initially empty gesture.
    pub fn create_gesture(&mut self) -> GestureId {
        self.gestures.push(Gesture::new());
        GestureId(self.gestures.len() - 1)
    }

    /// Borrow a gesture by handle.
    pub fn gesture(&self, id: GestureId) -> &Gesture {
        &self.gestures[id.0]
    }

    /// Mutably borrow a gesture by handle, to append or configure actions.
    pub fn gesture_mut(&mut self, id: GestureId) -> &mut Gesture {
        &mut self.gestures[id.0]
    }

    /// All gesture definitions, in registration order. A bound tracker
    /// allocates one progress record per entry, in this order.
    pub fn gestures(&self) -> &[Gesture] {
        &self.gestures
    }

    /// Broadcast a move tolerance to every action of every gesture.
    pub fn set_move_tolerance(&mut self, tolerance: f64) {
        for gesture in &mut self.gestures {
            gesture.set_move_tolerance_all(tolerance);
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::action::TouchMode;

    #[test]
    fn engine_broadcast_reaches_every_gesture() {
        let mut engine = Engine::new();
        let g0 = engine.create_gesture();
        let g1 = engine.create_gesture();
        engine.gesture_mut(g0).add_touch(TouchMode::DOWN);
        engine.gesture_mut(g1).add_touch(TouchMode::UP);
        engine.set_move_tolerance(3.0);
        assert_eq!(engine.gesture(g0).action(crate::action::ActionId(0)).move_tolerance(), 3.0);
        assert_eq!(engine.gesture(g1).action(crate::action::ActionId(0)).move_tolerance(), 3.0);
    }

    #[test]
    fn rejects_negative_target_extent() {
        let mut engine = Engine::new();
        assert!(engine.create_target(0.0, 0.0, -1.0, 1.0).is_err());
    }
}
