//! The declarative action model: one step of a gesture.

use bitflags::bitflags;

use crate::geometry::{Direction, PinchDirection, RotateDirection};
use crate::target::TargetId;

bitflags! {
    /// Which finger transitions advance a [`ActionKind::Touch`] action.
    ///
    /// A mask with both bits set means either a press or a release advances
    /// the action.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct TouchMode: u8 {
        /// A finger lifted off the surface.
        const UP = 1 << 0;
        /// A finger pressed onto the surface.
        const DOWN = 1 << 1;
    }
}

/// Handle to an [`Action`] within a single [`crate::gesture::Gesture`].
///
/// Opaque and copyable; indexes into the owning gesture's action list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActionId(pub(crate) usize);

/// The kind-specific payload of an [`Action`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ActionKind {
    /// A finger press or release, per the unit table: threshold counts
    /// contacts, duration bounds the gap since the previous action.
    Touch { mode: TouchMode },
    /// Directional translation of the contact group's centroid.
    Move { direction: Direction },
    /// Rotation of the contact group about its centroid.
    Rotate { direction: RotateDirection },
    /// Change in the mean radius of the contact group about its centroid.
    Pinch { direction: PinchDirection },
    /// A dwell with no positional requirement beyond staying within
    /// tolerance; `duration_ms` carries the minimum dwell time.
    Delay,
}

/// One step of a [`crate::gesture::Gesture`].
///
/// Built exclusively through [`crate::gesture::Gesture`]'s `add_*` and
/// `set_*` methods; there is no public constructor, matching the builder
/// contract in the spec (actions only exist as part of a gesture).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Action {
    pub(crate) kind: ActionKind,
    pub(crate) threshold: u32,
    pub(crate) duration_ms: u32,
    pub(crate) move_tolerance: f64,
    pub(crate) target: Option<TargetId>,
}

impl Action {
    pub(crate) fn new(kind: ActionKind) -> Self {
        Self { kind, threshold: 0, duration_ms: 0, move_tolerance: 0.0, target: None }
    }

    /// The action's kind and kind-specific parameters.
    pub fn kind(&self) -> ActionKind {
        self.kind
    }

    /// Kind-dependent numeric goal for completing the action; see the
    /// threshold unit table in the crate docs.
    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Upper bound, in milliseconds, on the time since the previous
    /// completed action (`0` means unbounded); for [`ActionKind::Delay`],
    /// the minimum dwell instead.
    pub fn duration_ms(&self) -> u32 {
        self.duration_ms
    }

    /// Maximum off-axis or spurious displacement tolerated before the
    /// owning progress record is reset.
    pub fn move_tolerance(&self) -> f64 {
        self.move_tolerance
    }

    /// The target region gating this action's completion, if any.
    pub fn target(&self) -> Option<TargetId> {
        self.target
    }
}
