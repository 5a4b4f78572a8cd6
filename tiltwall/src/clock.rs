// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Millisecond time base.
//!
//! All timing in the controller (debounce, homing dwell, status throttle) is measured on a single
//! 32-bit millisecond counter. The counter wraps after ~49.7 days, so elapsed time is always computed
//! with wrapping subtraction via [`elapsed`].

use core::sync::atomic::{AtomicU32, Ordering};

/// Point in time on the 1 kHz millisecond clock.
pub type Instant = fugit::TimerInstantU32<1000>;

/// Span of time on the 1 kHz millisecond clock.
pub type Duration = fugit::MillisDurationU32;

/// Monotonic millisecond source.
///
/// Implementations must be side-effect free to sample, so they can be read from interrupt handlers
/// and the main loop alike.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Time elapsed from `since` to `now`, tolerating one counter wrap.
#[inline]
pub fn elapsed(since: Instant, now: Instant) -> Duration {
    Duration::from_ticks(now.ticks().wrapping_sub(since.ticks()))
}

/// Clock advanced by a periodic 1 ms interrupt (SysTick on the board).
///
/// Place it in a `static` and call [`tick`](Self::tick) from the exception handler.
pub struct TickClock {
    millis: AtomicU32,
}

impl TickClock {
    pub const fn new() -> Self {
        Self {
            millis: AtomicU32::new(0),
        }
    }

    /// Advance by one millisecond.
    #[inline]
    pub fn tick(&self) {
        self.millis.fetch_add(1, Ordering::Relaxed);
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for TickClock {
    #[inline]
    fn now(&self) -> Instant {
        Instant::from_ticks(self.millis.load(Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_clock_counts_milliseconds() {
        let clock = TickClock::new();
        assert_eq!(clock.now().ticks(), 0);
        for _ in 0..25 {
            clock.tick();
        }
        assert_eq!(clock.now().ticks(), 25);
    }

    #[test]
    fn elapsed_survives_counter_wrap() {
        let before = Instant::from_ticks(u32::MAX - 3);
        let after = Instant::from_ticks(6);
        assert_eq!(elapsed(before, after).ticks(), 10);
    }
}
