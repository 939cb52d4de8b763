//! The recognizer core: per-gesture progress tracking driven by a stream
//! of touch and move events.

mod contact;

use crate::action::{Action, ActionId, ActionKind, TouchMode};
use crate::engine::Engine;
use crate::geometry::{self, PinchDirection, RotateDirection};
use crate::gesture::GestureId;

use contact::ContactSet;

/// Per-(tracker, gesture) recognition state.
///
/// `last_action_timestamp` is meaningful only once at least one action has
/// committed; it is left untouched by [`Tracker::reset`], matching the
/// spec's definition of reset.
#[derive(Debug, Clone, Default)]
struct ProgressRecord {
    completed_actions: usize,
    action_progress: f64,
    last_action_timestamp: u64,
    contacts: ContactSet,
}

/// Drives recognition of every gesture in an [`Engine`] against one stream
/// of touch events.
///
/// Borrows the engine for its entire lifetime. Because every
/// gesture/target-mutating method on [`Engine`] takes `&mut Engine`, this
/// borrow is what makes gesture definitions immutable for as long as a
/// tracker exists — see the note on [`Engine`].
#[derive(Debug)]
pub struct Tracker<'a> {
    engine: &'a Engine,
    records: Vec<ProgressRecord>,
}

impl<'a> Tracker<'a> {
    /// Snapshot `engine`'s gesture list and allocate one fresh progress
    /// record per gesture.
    pub fn new(engine: &'a Engine) -> Self {
        let records = engine.gestures().iter().map(|_| ProgressRecord::default()).collect();
        Self { engine, records }
    }

    /// The engine this tracker is bound to.
    pub fn engine(&self) -> &'a Engine {
        self.engine
    }

    /// Progress toward completing the gesture at `id`, in `[0, 1]`.
    ///
    /// A gesture with zero actions always reports `0.0`.
    pub fn gesture_progress(&self, id: GestureId) -> f64 {
        let n = self.engine.gesture(id).len();
        if n == 0 {
            return 0.0;
        }
        let record = &self.records[id.0];
        (record.completed_actions as f64 + record.action_progress) / n as f64
    }

    /// The action a gesture is currently waiting on, or `None` if the
    /// gesture has no actions or has already completed every action
    /// (eligible for draining).
    pub fn current_action(&self, id: GestureId) -> Option<ActionId> {
        let n = self.engine.gesture(id).len();
        let completed = self.records[id.0].completed_actions;
        (completed < n).then_some(ActionId(completed))
    }

    /// Return a progress record to its initial state: no contacts, no
    /// completed actions, no action progress. `last_action_timestamp` is
    /// left as-is.
    fn reset(&mut self, idx: usize) {
        let record = &mut self.records[idx];
        record.contacts.clear();
        record.completed_actions = 0;
        record.action_progress = 0.0;
        log::debug!("gesture {idx} reset");
    }

    fn commit(&mut self, idx: usize, timestamp: u64) {
        let n_actions = self.engine.gestures()[idx].len();
        let record = &mut self.records[idx];
        record.completed_actions += 1;
        record.action_progress = 0.0;
        record.last_action_timestamp = timestamp;
        log::debug!("gesture {idx} committed action, now {}/{n_actions}", record.completed_actions);
    }

    /// Advance or reset a Delay action's dwell, given that `timestamp` is a
    /// tick (any touch or move event) arriving while a Delay is current.
    fn tick_delay(&mut self, idx: usize, action: &Action, timestamp: u64) {
        let last_ts = self.records[idx].last_action_timestamp;
        let elapsed = timestamp.saturating_sub(last_ts);
        let duration = action.duration_ms.max(1) as u64;
        self.records[idx].action_progress = (elapsed as f64 / duration as f64).min(1.0);
        if elapsed >= duration {
            self.commit(idx, timestamp);
        }
    }

    /// Feed a press or release event to every progress record.
    pub fn register_touch(&mut self, timestamp: u64, slot: i32, mode: TouchMode, x: f64, y: f64) {
        for idx in 0..self.records.len() {
            let gesture = &self.engine.gestures()[idx];
            if gesture.is_empty() {
                continue;
            }
            let completed = self.records[idx].completed_actions;
            if completed >= gesture.len() {
                // Eligible and awaiting drain; don't disturb it.
                continue;
            }
            let action = *gesture.action(ActionId(completed));

            if matches!(action.kind, ActionKind::Delay) {
                // Per the spec's delay semantics, a delay can complete on a
                // subsequent touch event even though it isn't itself a
                // Touch action; tolerance is already enforced continuously
                // by register_move, so only the dwell clock is checked here.
                self.tick_delay(idx, &action, timestamp);
                continue;
            }

            let last_ts = self.records[idx].last_action_timestamp;
            let within_time = completed == 0
                || action.duration_ms == 0
                || timestamp.saturating_sub(last_ts) < action.duration_ms as u64;
            let mode_matches = match action.kind {
                ActionKind::Touch { mode: wanted } => wanted.intersects(mode),
                _ => false,
            };
            let target_ok = action
                .target
                .map(|t| self.engine.target(t).contains((x, y)))
                .unwrap_or(true);

            if !(within_time && mode_matches && target_ok) {
                self.reset(idx);
                continue;
            }

            let threshold = action.threshold.max(1) as f64;
            self.records[idx].action_progress += 1.0 / threshold;

            if mode.contains(TouchMode::DOWN) {
                self.records[idx].contacts.insert(slot, (x, y));
            } else if mode.contains(TouchMode::UP) {
                self.records[idx].contacts.remove(slot);
            }

            if self.records[idx].action_progress > 0.9 {
                self.commit(idx, timestamp);
            }
        }
    }

    /// Feed a relative motion event, for the finger at `slot`, to every
    /// progress record that has a live contact in that slot.
    pub fn register_move(&mut self, timestamp: u64, slot: i32, dx: f64, dy: f64) {
        for idx in 0..self.records.len() {
            let gesture = &self.engine.gestures()[idx];
            if gesture.is_empty() {
                continue;
            }
            let completed = self.records[idx].completed_actions;
            if completed >= gesture.len() {
                continue;
            }

            let moved_sample = {
                let record = &mut self.records[idx];
                match record.contacts.get_mut(slot) {
                    Some(contact) => {
                        contact.current.0 += dx;
                        contact.current.1 += dy;
                        contact.sample()
                    }
                    None => continue,
                }
            };

            let action = *gesture.action(ActionId(completed));
            let last_ts = self.records[idx].last_action_timestamp;
            // A Delay's duration is a minimum dwell, not a max gap: its own
            // dwell clock (tick_delay, below) owns timing, and completed == 0
            // means last_action_timestamp hasn't been set by a prior commit
            // yet, so there is nothing to bound against.
            let past_max_gap = !matches!(action.kind, ActionKind::Delay)
                && completed > 0
                && action.duration_ms > 0
                && timestamp.saturating_sub(last_ts) > action.duration_ms as u64;
            if past_max_gap {
                self.reset(idx);
                continue;
            }

            match action.kind {
                ActionKind::Touch { .. } | ActionKind::Delay => {
                    if geometry::drag_distance(moved_sample) > action.move_tolerance {
                        self.reset(idx);
                        continue;
                    }
                    if matches!(action.kind, ActionKind::Delay) {
                        self.tick_delay(idx, &action, timestamp);
                    }
                }
                ActionKind::Move { direction } => {
                    let samples = self.records[idx].contacts.samples();
                    let centroid = geometry::centroid(&samples);
                    if let Some(target) = action.target {
                        if self.engine.target(target).contains(centroid.current) {
                            self.commit(idx, timestamp);
                        }
                    } else {
                        let d = geometry::drag_distance(centroid);
                        let w = geometry::incorrect_drag_distance(centroid, direction);
                        if w > action.move_tolerance {
                            self.reset(idx);
                            continue;
                        }
                        let threshold = action.threshold.max(1) as f64;
                        let progress = (d - w) / threshold;
                        self.records[idx].action_progress = progress;
                        if progress > 1.0 {
                            self.commit(idx, timestamp);
                        }
                    }
                }
                ActionKind::Pinch { direction } => {
                    let samples = self.records[idx].contacts.samples();
                    let centroid = geometry::centroid(&samples);
                    if geometry::drag_distance(centroid) > action.move_tolerance {
                        self.reset(idx);
                        continue;
                    }
                    if let Some(scale) = geometry::pinch_scale(centroid, &samples) {
                        let goal = action.threshold as f64 / 100.0;
                        if pinch_crosses_threshold(scale, goal, direction) {
                            self.commit(idx, timestamp);
                        }
                    }
                    // `None` means a zero start radius: per the spec's
                    // numerical edge case, treat as "no scale progress"
                    // rather than resetting the record.
                }
                ActionKind::Rotate { direction } => {
                    let samples = self.records[idx].contacts.samples();
                    let centroid = geometry::centroid(&samples);
                    if geometry::drag_distance(centroid) > action.move_tolerance {
                        self.reset(idx);
                        continue;
                    }
                    let theta = geometry::rotate_angle(centroid, &samples);
                    if theta.abs() > action.threshold as f64 && rotate_matches_direction(theta, direction)
                    {
                        self.commit(idx, timestamp);
                    }
                }
            }
        }
    }

    /// Scan records in engine order; reset and return the gesture handle
    /// of the first one whose progress exceeds `0.9`. Call repeatedly
    /// after one event to drain every gesture it completed.
    pub fn drain_completed(&mut self) -> Option<GestureId> {
        for idx in 0..self.records.len() {
            if self.gesture_progress(GestureId(idx)) > 0.9 {
                self.reset(idx);
                return Some(GestureId(idx));
            }
        }
        None
    }
}

/// Pinch commit test: growing past `goal` satisfies [`PinchDirection::OUT`],
/// shrinking below it satisfies [`PinchDirection::IN`]. A mask with both
/// bits accepts either.
fn pinch_crosses_threshold(scale: f64, goal: f64, mask: PinchDirection) -> bool {
    (mask.contains(PinchDirection::OUT) && scale > goal)
        || (mask.contains(PinchDirection::IN) && scale < goal)
}

/// Rotate commit test: a positive angle satisfies
/// [`RotateDirection::CLOCKWISE`], negative satisfies
/// [`RotateDirection::ANTICLOCKWISE`]. A mask with both bits accepts either.
fn rotate_matches_direction(theta_degrees: f64, mask: RotateDirection) -> bool {
    (mask.contains(RotateDirection::CLOCKWISE) && theta_degrees > 0.0)
        || (mask.contains(RotateDirection::ANTICLOCKWISE) && theta_degrees < 0.0)
}
