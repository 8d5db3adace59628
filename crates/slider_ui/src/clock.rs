//! Monotonic, unscaled real-time clocks.

use std::cell::Cell;
use std::rc::Rc;
use web_time::Instant;

/// Source of monotonically increasing real time, in seconds.
pub trait Clock {
    /// Seconds since the clock started. Never affected by time scaling.
    fn unscaled_time(&self) -> f64;
}

/// Wall clock backed by [`web_time::Instant`] (works on wasm too).
#[derive(Debug, Clone)]
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            start: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn unscaled_time(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Manually advanced clock. Clones share the same time.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Rc<Cell<f64>>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward by `seconds`.
    pub fn advance(&self, seconds: f64) {
        self.now.set(self.now.get() + seconds.max(0.0));
    }

    /// Jump to an absolute time. Going backwards is ignored.
    pub fn set(&self, seconds: f64) {
        if seconds > self.now.get() {
            self.now.set(seconds);
        }
    }
}

impl Clock for ManualClock {
    fn unscaled_time(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let handle = clock.clone();
        handle.advance(1.5);
        assert_eq!(clock.unscaled_time(), 1.5);
    }

    #[test]
    fn test_manual_clock_is_monotonic() {
        let clock = ManualClock::new();
        clock.set(3.0);
        clock.set(1.0);
        clock.advance(-2.0);
        assert_eq!(clock.unscaled_time(), 3.0);
    }

    #[test]
    fn test_system_clock_moves_forward() {
        let clock = SystemClock::new();
        let a = clock.unscaled_time();
        let b = clock.unscaled_time();
        assert!(b >= a);
    }
}
