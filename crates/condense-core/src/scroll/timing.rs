//! L4 Atomic Layer: Time sources for scroll animations
//!
//! Animations sample time through [`Clock`] so hosts can drive them from the
//! wall clock and tests can step them deterministically.

use std::cell::Cell;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::now()
    }
}

/// A clock that only moves when told to. Clones share the same time.
#[derive(Debug, Clone)]
pub struct ManualClock {
    origin: Instant,
    offset: Rc<Cell<Duration>>,
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl ManualClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
            offset: Rc::new(Cell::new(Duration::ZERO)),
        }
    }

    pub fn advance(&self, by: Duration) {
        self.offset.set(self.offset.get() + by);
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.origin + self.offset.get()
    }
}

/// Milliseconds elapsed between `start` and `now`, zero if `now` is earlier.
#[inline]
pub fn elapsed_ms(start: Instant, now: Instant) -> f64 {
    now.saturating_duration_since(start).as_secs_f64() * 1000.0
}

/// Check if an animation started at `start` has run its course by `now`
#[inline]
pub fn is_complete(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new();
        let other = clock.clone();
        let start = clock.now();

        other.advance_ms(120);
        assert!((elapsed_ms(start, clock.now()) - 120.0).abs() < 1e-6);
    }

    #[test]
    fn test_is_complete() {
        let clock = ManualClock::new();
        let start = clock.now();
        let duration = Duration::from_millis(200);

        clock.advance_ms(199);
        assert!(!is_complete(start, clock.now(), duration));
        clock.advance_ms(1);
        assert!(is_complete(start, clock.now(), duration));
    }

    #[test]
    fn test_elapsed_never_negative() {
        let clock = ManualClock::new();
        let earlier = clock.now();
        clock.advance_ms(50);
        assert_eq!(elapsed_ms(clock.now(), earlier), 0.0);
    }
}
