//! A declarative multi-touch gesture recognition engine.
//!
//! Clients describe gestures as ordered sequences of [`action::Action`]s
//! (finger down/up, directional moves, rotations, pinches, dwell delays,
//! targeted hits) through an [`engine::Engine`], feed raw touch events
//! (press, release, motion) with timestamps and finger slots into a
//! [`tracker::Tracker`], and poll the tracker to find out which gestures
//! are making progress and which have completed.
//!
//! This crate does not read from any input device, does not dispatch
//! actions, and does not own a clock: the caller supplies timestamps and
//! owns whatever compositor, shell, or input daemon plumbing produces
//! touch events in the first place.
//!
//! ```
//! use touch_gesture_engine::prelude::*;
//!
//! let mut engine = Engine::new();
//! let gesture = engine.create_gesture();
//! let g = engine.gesture_mut(gesture);
//! let down = g.add_touch(TouchMode::DOWN);
//! g.set_threshold(down, 1).unwrap();
//! let swipe = g.add_move(Direction::POSITIVE_X);
//! g.set_threshold(swipe, 50).unwrap();
//! g.set_move_tolerance(swipe, 10.0);
//!
//! let mut tracker = Tracker::new(&engine);
//! tracker.register_touch(0, 0, TouchMode::DOWN, 1.0, 50.0);
//! tracker.register_move(10, 0, 55.0, 0.0);
//! assert_eq!(tracker.drain_completed(), Some(gesture));
//! ```
#![warn(missing_debug_implementations)]

pub mod action;
pub mod engine;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod target;
pub mod tracker;

/// Convenience re-exports of the crate's main types.
pub mod prelude {
    pub use crate::action::{Action, ActionId, ActionKind, TouchMode};
    pub use crate::engine::Engine;
    pub use crate::error::GestureError;
    pub use crate::geometry::{Direction, PinchDirection, RotateDirection};
    pub use crate::gesture::{Gesture, GestureId};
    pub use crate::target::{Target, TargetId};
    pub use crate::tracker::Tracker;
}
