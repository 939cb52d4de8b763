//! Error types surfaced at the builder boundary.
//!
//! Runtime recognition never returns an error: tolerance and timeout
//! failures are local to a progress record and are handled by resetting it
//! (see [`crate::tracker::Tracker`]). Only the declarative builder calls
//! that assemble gestures can violate a contract, and those return
//! `Result` rather than panicking so embedding callers can report a bad
//! gesture definition without crashing.

/// A gesture or action definition violated one of the builder's contracts.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum GestureError {
    /// A target was set on an action kind other than [`Touch`] or [`Move`].
    ///
    /// [`Touch`]: crate::action::ActionKind::Touch
    /// [`Move`]: crate::action::ActionKind::Move
    #[error("action at index {0} does not support a target")]
    TargetNotSupported(usize),

    /// A [`Move`] action had both a target and a nonzero threshold set.
    ///
    /// [`Move`]: crate::action::ActionKind::Move
    #[error("a move action cannot combine a target with a nonzero threshold")]
    TargetAndThresholdConflict,

    /// A [`Delay`] action was given a zero duration.
    ///
    /// [`Delay`]: crate::action::ActionKind::Delay
    #[error("delay actions require a duration greater than zero")]
    NonPositiveDelayDuration,

    /// A target's width or height was negative.
    #[error("a target's width and height must be non-negative")]
    NegativeTargetExtent,
}
