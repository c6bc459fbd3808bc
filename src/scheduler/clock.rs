//! Clocks driving the poll loop.
//!
//! [`SystemClock`] sleeps on the real monotonic clock. [`ManualClock`] keeps
//! virtual time that only moves when told to, so scheduler tests run
//! instantly and deterministically.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Source of time for the scheduler.
///
/// Times are offsets from the clock's own epoch.
pub trait Clock {
    /// Current time.
    fn now(&self) -> Duration;

    /// Block until `deadline` has passed. Returns immediately if it already has.
    fn sleep_until(&self, deadline: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }

    fn sleep_until(&self, deadline: Duration) {
        (**self).sleep_until(deadline)
    }
}

/// Wall-clock time measured from creation.
#[derive(Debug, Clone)]
pub struct SystemClock {
    epoch: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            epoch: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.epoch.elapsed()
    }

    fn sleep_until(&self, deadline: Duration) {
        if let Some(remaining) = deadline.checked_sub(self.now()) {
            std::thread::sleep(remaining);
        }
    }
}

/// Virtual time, advanced explicitly.
///
/// Sleeping jumps straight to the deadline.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Duration>,
}

impl ManualClock {
    /// Create a clock at time zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move time forward.
    pub fn advance(&self, by: Duration) {
        self.now.set(self.now.get() + by);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        self.now.get()
    }

    fn sleep_until(&self, deadline: Duration) {
        if deadline > self.now.get() {
            self.now.set(deadline);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_starts_at_zero() {
        assert_eq!(ManualClock::new().now(), Duration::ZERO);
    }

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_millis(250));
        clock.advance(Duration::from_millis(750));
        assert_eq!(clock.now(), Duration::from_secs(1));
    }

    #[test]
    fn manual_clock_sleep_jumps_to_deadline() {
        let clock = ManualClock::new();
        clock.sleep_until(Duration::from_millis(1500));
        assert_eq!(clock.now(), Duration::from_millis(1500));
    }

    #[test]
    fn manual_clock_never_moves_backwards() {
        let clock = ManualClock::new();
        clock.advance(Duration::from_secs(5));
        clock.sleep_until(Duration::from_secs(1));
        assert_eq!(clock.now(), Duration::from_secs(5));
    }

    #[test]
    fn clock_reference_delegates() {
        let clock = ManualClock::new();
        let by_ref: &ManualClock = &clock;
        by_ref.sleep_until(Duration::from_millis(10));
        assert_eq!(Clock::now(&by_ref), Duration::from_millis(10));
    }

    #[test]
    fn system_clock_sleeps_until_deadline() {
        let clock = SystemClock::new();
        let deadline = clock.now() + Duration::from_millis(5);
        clock.sleep_until(deadline);
        assert!(clock.now() >= deadline);
    }

    #[test]
    fn system_clock_past_deadline_returns_immediately() {
        let clock = SystemClock::new();
        clock.sleep_until(Duration::ZERO);
        assert!(clock.now() < Duration::from_secs(1));
    }
}
