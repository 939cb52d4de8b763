//! Feeds a single-finger left-edge swipe through the public API and reports
//! what the tracker saw, the way an embedding compositor or shell would.
//!
//! Run with `cargo run --example swipe_to_dismiss` from the crate root.

use touch_gesture_engine::prelude::*;

fn main() {
    env_logger::init();

    let mut engine = Engine::new();
    let left_edge = engine.create_target(0.0, 0.0, 5.0, 100.0).unwrap();

    let gesture = engine.create_gesture();
    let g = engine.gesture_mut(gesture);
    let press = g.add_touch(TouchMode::DOWN);
    g.set_threshold(press, 1).unwrap();
    g.set_target(press, left_edge).unwrap();
    let swipe = g.add_move(Direction::POSITIVE_X);
    g.set_threshold(swipe, 50).unwrap();
    g.set_move_tolerance(swipe, 10.0);

    let mut tracker = Tracker::new(&engine);

    let events: &[(u64, i32, f64, f64)] =
        &[(0, 0, 1.0, 50.0), (10, 0, 5.0, 0.0), (20, 0, 20.0, 0.0), (30, 0, 30.0, 0.0)];

    let (ts, slot, x, y) = events[0];
    tracker.register_touch(ts, slot, TouchMode::DOWN, x, y);
    println!("after press: progress = {:.2}", tracker.gesture_progress(gesture));

    for &(ts, slot, dx, dy) in &events[1..] {
        tracker.register_move(ts, slot, dx, dy);
        println!("after move:  progress = {:.2}", tracker.gesture_progress(gesture));
    }

    match tracker.drain_completed() {
        Some(completed) if completed == gesture => println!("left-edge swipe completed"),
        Some(_) => println!("an unrelated gesture completed"),
        None => println!("no gesture completed"),
    }
}
