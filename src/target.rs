//! Rectangular target regions used to gate touch or move completion.

use crate::error::GestureError;

/// Handle to a [`Target`] owned by an [`crate::engine::Engine`].
///
/// Opaque and copyable; indexes into the engine's target arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetId(pub(crate) usize);

/// An axis-aligned rectangular region in caller-defined coordinates.
///
/// Immutable after creation: there is no core-level API for moving or
/// resizing a target once registered.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Target {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

impl Target {
    pub(crate) fn new(x: f64, y: f64, w: f64, h: f64) -> Result<Self, GestureError> {
        if w < 0.0 || h < 0.0 {
            return Err(GestureError::NegativeTargetExtent);
        }
        Ok(Self { x, y, w, h })
    }

    /// Half-open containment test: `x <= px <= x+w` and `y <= py <= y+h`.
    pub fn contains(&self, point: (f64, f64)) -> bool {
        let (px, py) = point;
        px >= self.x && px <= self.x + self.w && py >= self.y && py <= self.y + self.h
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn contains_is_half_open_inclusive_both_corners() {
        let t = Target::new(0.0, 0.0, 5.0, 100.0).unwrap();
        assert!(t.contains((0.0, 0.0)));
        assert!(t.contains((5.0, 100.0)));
        assert!(!t.contains((5.1, 0.0)));
        assert!(!t.contains((-0.1, 0.0)));
    }

    #[test]
    fn rejects_negative_extent() {
        assert_eq!(Target::new(0.0, 0.0, -1.0, 1.0), Err(GestureError::NegativeTargetExtent));
    }
}
