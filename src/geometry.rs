//! Pure geometric primitives over a set of touch contacts.
//!
//! Everything here is a free function (or a cheap value type) with no
//! knowledge of gestures, engines, or trackers. The recognizer core builds
//! on top of this module; this module does not depend on anything above it.

use bitflags::bitflags;

/// A point in caller-defined coordinates (e.g. percent of screen span).
pub type Point = (f64, f64);

bitflags! {
    /// Axes a [`crate::action::ActionKind::Move`] is permitted to travel along.
    ///
    /// A mask with both bits of an axis set permits either sign on that axis.
    /// An axis with neither bit set must remain stationary: any displacement
    /// on that axis counts against [`incorrect_drag_distance`].
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Direction: u8 {
        /// Rightward (increasing X) motion.
        const POSITIVE_X = 1 << 0;
        /// Leftward (decreasing X) motion.
        const NEGATIVE_X = 1 << 1;
        /// Downward (increasing Y) motion.
        const POSITIVE_Y = 1 << 2;
        /// Upward (decreasing Y) motion.
        const NEGATIVE_Y = 1 << 3;
    }
}

bitflags! {
    /// Sense of rotation a [`crate::action::ActionKind::Rotate`] accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct RotateDirection: u8 {
        /// Positive angle as returned by [`rotate_angle`].
        const CLOCKWISE = 1 << 0;
        /// Negative angle as returned by [`rotate_angle`].
        const ANTICLOCKWISE = 1 << 1;
    }
}

bitflags! {
    /// Sense of scale change a [`crate::action::ActionKind::Pinch`] accepts.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct PinchDirection: u8 {
        /// Scale factor greater than one.
        const OUT = 1 << 0;
        /// Scale factor less than one.
        const IN = 1 << 1;
    }
}

/// A single contact's start and current position, detached from its slot.
///
/// [`centroid`] also returns a `Sample`: the mean of a contact set behaves,
/// for the purposes of the rest of the geometry kernel, like a single
/// virtual contact.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub start: Point,
    pub current: Point,
}

impl Sample {
    pub fn new(start: Point, current: Point) -> Self {
        Self { start, current }
    }
}

/// Arithmetic mean of start and current coordinates over a contact set.
///
/// # Panics
///
/// Panics if `samples` is empty; all callers are expected to guard on a
/// non-empty contact set first, as the spec requires (`|C| >= 1`).
pub fn centroid(samples: &[Sample]) -> Sample {
    assert!(!samples.is_empty(), "centroid of an empty contact set is undefined");

    let n = samples.len() as f64;
    let (mut sx, mut sy, mut cx, mut cy) = (0.0, 0.0, 0.0, 0.0);
    for s in samples {
        sx += s.start.0;
        sy += s.start.1;
        cx += s.current.0;
        cy += s.current.1;
    }
    Sample::new((sx / n, sy / n), (cx / n, cy / n))
}

/// Euclidean distance a single contact has moved from its start position.
pub fn drag_distance(sample: Sample) -> f64 {
    let (sx, sy) = sample.start;
    let (cx, cy) = sample.current;
    ((sx - cx).powi(2) + (sy - cy).powi(2)).sqrt()
}

/// Which cardinal directions a contact has actually moved in.
pub fn direction_dragged(sample: Sample) -> Direction {
    let (sx, sy) = sample.start;
    let (cx, cy) = sample.current;
    let mut dir = Direction::empty();
    if cx > sx {
        dir |= Direction::POSITIVE_X;
    } else if cx < sx {
        dir |= Direction::NEGATIVE_X;
    }
    if cy > sy {
        dir |= Direction::POSITIVE_Y;
    } else if cy < sy {
        dir |= Direction::NEGATIVE_Y;
    }
    dir
}

/// Displacement that violates the requested `mask`.
///
/// An axis with neither bit set in `mask` must remain stationary: all
/// displacement on that axis is "incorrect". An axis with one bit set
/// penalizes only motion in the opposite sign; a mask with both bits of an
/// axis set never penalizes that axis.
pub fn incorrect_drag_distance(sample: Sample, mask: Direction) -> f64 {
    let (sx, sy) = sample.start;
    let (cx, cy) = sample.current;

    let mut acc = 0.0;
    acc += axis_penalty(
        sx,
        cx,
        mask.contains(Direction::POSITIVE_X),
        mask.contains(Direction::NEGATIVE_X),
    );
    acc += axis_penalty(
        sy,
        cy,
        mask.contains(Direction::POSITIVE_Y),
        mask.contains(Direction::NEGATIVE_Y),
    );

    acc.sqrt()
}

/// Squared off-axis displacement for one axis given which signs are allowed.
///
/// Both signs allowed: the axis is unconstrained, no penalty. One sign
/// allowed: motion the other way is incorrect. Neither sign allowed: the
/// axis must stay put, so all displacement is incorrect.
fn axis_penalty(start: f64, current: f64, positive_allowed: bool, negative_allowed: bool) -> f64 {
    match (positive_allowed, negative_allowed) {
        (true, true) => 0.0,
        (true, false) if current < start => (start - current).powi(2),
        (false, true) if current > start => (start - current).powi(2),
        (false, false) => (start - current).powi(2),
        _ => 0.0,
    }
}

/// Ratio of the mean current radius to the mean start radius, in the
/// centroid's own frame.
///
/// Returns `None` when the mean start radius is zero (all contacts started
/// on top of the centroid): the ratio is undefined, and the caller must
/// treat this as "no scale progress" rather than resetting the record.
pub fn pinch_scale(centroid: Sample, samples: &[Sample]) -> Option<f64> {
    let n = samples.len() as f64;
    let start_radius: f64 =
        samples.iter().map(|s| dist(centroid.start, s.start)).sum::<f64>() / n;
    if start_radius == 0.0 {
        return None;
    }
    let current_radius: f64 =
        samples.iter().map(|s| dist(centroid.current, s.current)).sum::<f64>() / n;
    Some(current_radius / start_radius)
}

/// Rotation, in degrees, of the contact set about its centroid between
/// start and current positions.
///
/// Positive values correspond to [`RotateDirection::CLOCKWISE`] (screen
/// coordinates with Y increasing downward, so a positive `atan2` delta is a
/// clockwise turn); negative values correspond to
/// [`RotateDirection::ANTICLOCKWISE`].
pub fn rotate_angle(centroid: Sample, samples: &[Sample]) -> f64 {
    let n = samples.len() as f64;
    let start_mean_angle: f64 = samples
        .iter()
        .map(|s| angle(centroid.start, s.start))
        .sum::<f64>()
        / n;
    let current_mean_angle: f64 = samples
        .iter()
        .map(|s| angle(centroid.current, s.current))
        .sum::<f64>()
        / n;
    (current_mean_angle - start_mean_angle).to_degrees()
}

fn dist(a: Point, b: Point) -> f64 {
    ((a.0 - b.0).powi(2) + (a.1 - b.1).powi(2)).sqrt()
}

fn angle(origin: Point, p: Point) -> f64 {
    (p.1 - origin.1).atan2(p.0 - origin.0)
}

#[cfg(test)]
mod test {
    use super::*;

    fn sample(start: Point, current: Point) -> Sample {
        Sample::new(start, current)
    }

    #[test]
    fn drag_distance_is_translation_invariant() {
        let a = sample((0.0, 0.0), (3.0, 4.0));
        let b = sample((10.0, 10.0), (13.0, 14.0));
        assert!((drag_distance(a) - drag_distance(b)).abs() < 1e-9);
        assert!((drag_distance(a) - 5.0).abs() < 1e-9);
    }

    #[test]
    fn direction_dragged_detects_both_axes() {
        let s = sample((0.0, 0.0), (5.0, -5.0));
        let dir = direction_dragged(s);
        assert!(dir.contains(Direction::POSITIVE_X));
        assert!(dir.contains(Direction::NEGATIVE_Y));
        assert!(!dir.contains(Direction::NEGATIVE_X));
        assert!(!dir.contains(Direction::POSITIVE_Y));
    }

    #[test]
    fn incorrect_drag_distance_is_zero_when_mask_matches() {
        let s = sample((0.0, 0.0), (10.0, 0.0));
        let mask = Direction::POSITIVE_X;
        assert_eq!(incorrect_drag_distance(s, mask), 0.0);
    }

    #[test]
    fn incorrect_drag_distance_penalizes_off_axis_motion() {
        let s = sample((0.0, 50.0), (10.0, 70.0));
        // Only +X permitted: the 20-unit Y displacement is all "incorrect".
        let w = incorrect_drag_distance(s, Direction::POSITIVE_X);
        assert!((w - 20.0).abs() < 1e-9);
    }

    #[test]
    fn incorrect_drag_distance_penalizes_stationary_axis() {
        let s = sample((0.0, 0.0), (0.0, 5.0));
        // No bits on Y: any Y displacement is incorrect.
        let w = incorrect_drag_distance(s, Direction::empty());
        assert!((w - 5.0).abs() < 1e-9);
    }

    #[test]
    fn incorrect_drag_distance_permits_either_sign_when_both_bits_set() {
        let s = sample((0.0, 0.0), (-10.0, 0.0));
        let mask = Direction::POSITIVE_X | Direction::NEGATIVE_X;
        assert_eq!(incorrect_drag_distance(s, mask), 0.0);
    }

    #[test]
    fn pinch_scale_reports_uniform_expansion() {
        let samples = [
            sample((40.0, 50.0), (30.0, 50.0)),
            sample((60.0, 50.0), (70.0, 50.0)),
        ];
        let c = centroid(&samples);
        let scale = pinch_scale(c, &samples).unwrap();
        assert!((scale - 2.0).abs() < 1e-9);
    }

    #[test]
    fn pinch_scale_guards_zero_start_radius() {
        let samples = [sample((50.0, 50.0), (50.0, 50.0))];
        let c = centroid(&samples);
        assert_eq!(pinch_scale(c, &samples), None);
    }

    #[test]
    fn rotate_angle_reports_uniform_rotation() {
        // Two contacts 180 degrees apart around (50, 50), rotated by 90 degrees.
        let samples = [
            sample((100.0, 50.0), (50.0, 0.0)),
            sample((0.0, 50.0), (50.0, 100.0)),
        ];
        let c = centroid(&samples);
        let theta = rotate_angle(c, &samples);
        assert!((theta.abs() - 90.0).abs() < 1e-6);
    }
}
