//! Held-key tracking for terminal environments.
//!
//! Terminals that support the keyboard enhancement protocol report key releases
//! and a key is held from press to release. Everywhere else a key counts as held
//! for a short timeout after its last press or auto-repeat event.

use std::time::{Duration, Instant};

use crate::types::{Direction, HeldKeys, KEY_RELEASE_TIMEOUT_MS};

fn slot(dir: Direction) -> usize {
    match dir {
        Direction::North => 0,
        Direction::South => 1,
        Direction::East => 2,
        Direction::West => 3,
    }
}

const SLOTS: [Direction; 4] = [
    Direction::North,
    Direction::South,
    Direction::East,
    Direction::West,
];

#[derive(Debug, Clone)]
pub struct HeldKeyTracker {
    last_seen: [Option<Instant>; 4],
    release_events: bool,
    timeout: Duration,
}

impl Default for HeldKeyTracker {
    fn default() -> Self {
        Self::new(KEY_RELEASE_TIMEOUT_MS)
    }
}

impl HeldKeyTracker {
    pub fn new(key_release_timeout_ms: u32) -> Self {
        Self {
            last_seen: [None; 4],
            release_events: false,
            timeout: Duration::from_millis(key_release_timeout_ms as u64),
        }
    }

    /// Trust release events instead of timing keys out.
    pub fn set_release_events(&mut self, enabled: bool) {
        self.release_events = enabled;
    }

    /// Press or auto-repeat.
    pub fn press(&mut self, dir: Direction, now: Instant) {
        self.last_seen[slot(dir)] = Some(now);
    }

    pub fn release(&mut self, dir: Direction) {
        self.last_seen[slot(dir)] = None;
    }

    /// Whether `dir` is still held at `now`.
    pub fn is_held(&self, dir: Direction, now: Instant) -> bool {
        match self.last_seen[slot(dir)] {
            Some(seen) => self.release_events || now.saturating_duration_since(seen) <= self.timeout,
            None => false,
        }
    }

    /// Directions held at `now`; timed-out keys are dropped.
    pub fn held(&mut self, now: Instant) -> HeldKeys {
        let mut held = HeldKeys::empty();
        for dir in SLOTS {
            let i = slot(dir);
            let Some(seen) = self.last_seen[i] else {
                continue;
            };
            if !self.release_events && now.saturating_duration_since(seen) > self.timeout {
                self.last_seen[i] = None;
                continue;
            }
            held.press(dir);
        }
        held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tap_times_out_without_release_events() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new(150);
        tracker.press(Direction::West, t0);
        assert!(tracker.held(t0 + Duration::from_millis(100)).is_held(Direction::West));
        assert!(tracker.held(t0 + Duration::from_millis(151)).is_empty());
    }

    #[test]
    fn test_repeat_extends_hold() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new(150);
        tracker.press(Direction::East, t0);
        tracker.press(Direction::East, t0 + Duration::from_millis(120));
        assert!(tracker.held(t0 + Duration::from_millis(200)).is_held(Direction::East));
    }

    #[test]
    fn test_release_events_hold_until_released() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new(150);
        tracker.set_release_events(true);
        tracker.press(Direction::North, t0);
        tracker.press(Direction::West, t0);
        let held = tracker.held(t0 + Duration::from_secs(5));
        assert!(held.is_held(Direction::North));
        assert!(held.is_held(Direction::West));

        tracker.release(Direction::North);
        let held = tracker.held(t0 + Duration::from_secs(5));
        assert!(!held.is_held(Direction::North));
        assert_eq!(held.first_by_priority(), Some(Direction::West));
    }

    #[test]
    fn test_is_held_follows_timeout() {
        let t0 = Instant::now();
        let mut tracker = HeldKeyTracker::new(150);
        assert!(!tracker.is_held(Direction::South, t0));
        tracker.press(Direction::South, t0);
        assert!(tracker.is_held(Direction::South, t0 + Duration::from_millis(150)));
        assert!(!tracker.is_held(Direction::South, t0 + Duration::from_millis(151)));
    }
}
