//! Time sources for the tracing session.
//!
//! The tracer only needs "now" in nanoseconds, read once per start. The
//! reading is compared against record start times, so a clock must share the
//! feed's timebase. Real sessions use `MonotonicClock`, which counts in Unix
//! nanoseconds like the vendor runtime; replays and tests pin the value with
//! a `ManualClock`.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock};
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Source of session timestamps in nanoseconds
pub trait Clock {
    fn now_ns(&self) -> u64;
}

/// Process-wide monotonic clock in Unix nanoseconds.
///
/// The wall clock is read once, at the first reading in this process; later
/// readings add the monotonic time elapsed since then. Readings therefore
/// line up with wall-clock record timestamps and never go backwards across
/// tracer instances, even if the system clock is stepped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MonotonicClock;

struct Anchor {
    instant: Instant,
    unix_ns: u64,
}

fn anchor() -> &'static Anchor {
    static ANCHOR: OnceLock<Anchor> = OnceLock::new();
    ANCHOR.get_or_init(|| Anchor {
        instant: Instant::now(),
        unix_ns: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| saturating_ns(d.as_nanos()))
            .unwrap_or(0),
    })
}

fn saturating_ns(ns: u128) -> u64 {
    u64::try_from(ns).unwrap_or(u64::MAX)
}

impl Clock for MonotonicClock {
    fn now_ns(&self) -> u64 {
        let anchor = anchor();
        anchor
            .unix_ns
            .saturating_add(saturating_ns(anchor.instant.elapsed().as_nanos()))
    }
}

/// Clock whose reading is set explicitly.
///
/// Clones share the same reading, so a caller can keep a handle and move
/// time while the tracer owns another.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: Arc<AtomicU64>,
}

impl ManualClock {
    pub fn new(now_ns: u64) -> Self {
        Self {
            now: Arc::new(AtomicU64::new(now_ns)),
        }
    }

    pub fn set(&self, now_ns: u64) {
        self.now.store(now_ns, Ordering::Relaxed);
    }

    pub fn advance(&self, delta_ns: u64) {
        self.now.fetch_add(delta_ns, Ordering::Relaxed);
    }
}

impl Clock for ManualClock {
    fn now_ns(&self) -> u64 {
        self.now.load(Ordering::Relaxed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_monotonic_clock_never_goes_back() {
        let clock = MonotonicClock;
        let first = clock.now_ns();
        let second = MonotonicClock.now_ns();
        assert!(second >= first);
    }

    #[test]
    fn test_monotonic_clock_uses_unix_timebase() {
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap()
            .as_nanos() as u64;
        let now = MonotonicClock.now_ns();

        // same timebase as the wall clock, not counted from process start
        assert!(now.abs_diff(wall) < 60_000_000_000);
    }

    #[test]
    fn test_manual_clock_shared_between_clones() {
        let clock = ManualClock::new(50);
        let handle = clock.clone();
        handle.advance(25);
        assert_eq!(clock.now_ns(), 75);
        handle.set(10);
        assert_eq!(clock.now_ns(), 10);
    }
}
