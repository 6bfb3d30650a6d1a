//! Monotonic timestamps for mixing into the session hasher.

use std::time::Instant;

/// Monotonic nanosecond counter.
///
/// The timestamps are hashed alongside each keystroke byte;
/// nanosecond resolution is fine enough that inter-key timing
/// contributes, without depending on wall-clock time.
pub trait Clock {
    /// Returns nanoseconds elapsed since an arbitrary fixed origin.
    fn now_nanos(&mut self) -> u64;
}

/// Real monotonic clock anchored at construction time.
#[derive(Debug)]
pub struct MonotonicClock {
    origin: Instant,
}

impl MonotonicClock {
    /// Creates a clock anchored at the current instant.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for MonotonicClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for MonotonicClock {
    fn now_nanos(&mut self) -> u64 {
        self.origin.elapsed().as_nanos() as u64
    }
}

/// Deterministic clock for testing that advances by a fixed step.
#[derive(Debug)]
pub struct FakeClock {
    now: u64,
    step: u64,
}

impl FakeClock {
    /// Creates a fake clock starting at `start`, advancing by `step`
    /// nanoseconds per reading.
    pub fn new(start: u64, step: u64) -> Self {
        Self { now: start, step }
    }
}

impl Clock for FakeClock {
    fn now_nanos(&mut self) -> u64 {
        let now = self.now;
        self.now = self.now.wrapping_add(self.step);
        now
    }
}
