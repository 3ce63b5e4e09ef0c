//! Frame pacing and the two logical tick clocks layered over it.
//!
//! The game loop measures how much time each frame took and feeds that into an
//! enemy clock and a player clock. Each clock fires at most once per frame.

use std::time::{Duration, Instant};

/// Periodic logical clock driven by frame time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TickClock {
    period_ms: u32,
    accumulated_ms: u32,
}

impl TickClock {
    pub fn new(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
        }
    }

    /// Add a frame's elapsed time; `true` when a tick boundary was reached.
    ///
    /// A long stall fires one tick, not a burst: leftover time is capped below
    /// one period.
    pub fn advance(&mut self, elapsed_ms: u32) -> bool {
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        if self.accumulated_ms < self.period_ms {
            return false;
        }
        self.accumulated_ms = (self.accumulated_ms - self.period_ms).min(self.period_ms - 1);
        true
    }
}

/// Blocks until the next frame is due and reports the frame's elapsed time.
pub trait FramePacer {
    fn wait_next_frame(&mut self) -> u32;
}

/// Real-time pacer: sleeps out the remainder of each frame.
#[derive(Debug)]
pub struct SleepPacer {
    frame: Duration,
    last: Instant,
}

impl SleepPacer {
    pub fn new(frame_hz: u32) -> Self {
        let hz = frame_hz.max(1);
        Self {
            frame: Duration::from_micros(1_000_000 / hz as u64),
            last: Instant::now(),
        }
    }
}

impl FramePacer for SleepPacer {
    fn wait_next_frame(&mut self) -> u32 {
        let since = self.last.elapsed();
        if since < self.frame {
            std::thread::sleep(self.frame - since);
        }
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);
        self.last = now;
        elapsed.as_millis().min(u32::MAX as u128) as u32
    }
}

/// Deterministic pacer for tests and benchmarks: every frame takes `frame_ms`.
#[derive(Debug, Clone, Copy)]
pub struct FixedPacer {
    pub frame_ms: u32,
}

impl FixedPacer {
    pub fn new(frame_ms: u32) -> Self {
        Self { frame_ms }
    }
}

impl FramePacer for FixedPacer {
    fn wait_next_frame(&mut self) -> u32 {
        self.frame_ms
    }
}
