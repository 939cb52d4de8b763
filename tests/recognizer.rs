//! End-to-end recognizer tests driven purely through the public API, as an
//! embedding compositor or shell would use it.

use touch_gesture_engine::prelude::*;

#[test]
fn one_gestures_reset_does_not_touch_another_gestures_completion() {
    // Both gestures start on the same physical touch, which is realistic:
    // the engine races every gesture definition against the same raw event
    // stream and does not know in advance which candidate a touch is "for".
    let mut engine = Engine::new();

    // Gesture A: single-finger tap (no tolerance set, so any drift aborts
    // it while it waits on the Up action).
    let tap = engine.create_gesture();
    let a = engine.gesture_mut(tap);
    let down = a.add_touch(TouchMode::DOWN);
    a.set_threshold(down, 1).unwrap();
    let up = a.add_touch(TouchMode::UP);
    a.set_threshold(up, 1).unwrap();
    a.set_duration(up, 500).unwrap();

    // Gesture B: press inside a left-edge target, then swipe right.
    let left_edge = engine.create_target(0.0, 0.0, 5.0, 100.0).unwrap();
    let swipe = engine.create_gesture();
    let b = engine.gesture_mut(swipe);
    let press = b.add_touch(TouchMode::DOWN);
    b.set_threshold(press, 1).unwrap();
    b.set_target(press, left_edge).unwrap();
    let glide = b.add_move(Direction::POSITIVE_X);
    b.set_threshold(glide, 50).unwrap();
    b.set_move_tolerance(glide, 10.0);

    let mut tracker = Tracker::new(&engine);

    tracker.register_touch(0, 0, TouchMode::DOWN, 1.0, 50.0);
    assert_eq!(tracker.current_action(tap), Some(up));
    assert_eq!(tracker.current_action(swipe), Some(glide));

    // The same finger sliding 55 units satisfies gesture B's swipe but
    // exceeds gesture A's (zero) tolerance for holding still before release.
    tracker.register_move(10, 0, 55.0, 0.0);

    assert_eq!(tracker.drain_completed(), Some(swipe));
    // Draining the swipe must not resurrect or disturb the tap, which was
    // independently reset back to waiting on a fresh Down.
    assert_eq!(tracker.drain_completed(), None);
    assert_eq!(tracker.current_action(tap), Some(down));
    assert_eq!(tracker.gesture_progress(tap), 0.0);
}

#[test]
fn rejects_a_target_with_negative_extent() {
    let mut engine = Engine::new();
    let err = engine.create_target(0.0, 0.0, -1.0, 10.0).unwrap_err();
    assert_eq!(err, GestureError::NegativeTargetExtent);
}

#[test]
fn builder_rejects_target_on_rotate_action() {
    let mut engine = Engine::new();
    let target = engine.create_target(0.0, 0.0, 10.0, 10.0).unwrap();
    let id = engine.create_gesture();
    let gesture = engine.gesture_mut(id);
    let rotate = gesture.add_rotate(RotateDirection::CLOCKWISE);
    assert!(gesture.set_target(rotate, target).is_err());
}
