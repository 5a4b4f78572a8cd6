// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Debounced hall-sensor pulse counting.
//!
//! One [`PulseCounter`] per actuator, driven from that sensor's rising-edge interrupt. An edge that
//! arrives within the debounce window of the last accepted edge is bounce and is dropped. Dropped or
//! missed edges only cost position accuracy; nothing is reported.

use core::sync::atomic::{AtomicU32, Ordering};

use crate::clock::{elapsed, Duration, Instant};
use crate::direction::Direction;
use crate::position::PositionStore;

pub struct PulseCounter {
    /// Millisecond timestamp of the last accepted edge. Touched only by this sensor's handler.
    last_accepted: AtomicU32,
}

impl PulseCounter {
    pub const fn new() -> Self {
        Self {
            last_accepted: AtomicU32::new(0),
        }
    }

    /// Handle one rising edge seen at `now`.
    ///
    /// The edge counts only if strictly more than `debounce` has passed since the previous accepted
    /// edge; it then moves actuator `index` one step in `direction`. Returns whether it counted.
    pub fn on_edge<const N: usize>(
        &self,
        index: usize,
        now: Instant,
        debounce: Duration,
        direction: Direction,
        store: &PositionStore<N>,
    ) -> bool {
        let last = Instant::from_ticks(self.last_accepted.load(Ordering::Relaxed));
        if elapsed(last, now).ticks() <= debounce.ticks() {
            return false;
        }

        self.last_accepted.store(now.ticks(), Ordering::Relaxed);
        store.advance(index, direction.sign());
        true
    }

    /// Timestamp of the last accepted edge.
    #[inline]
    pub fn last_accepted(&self) -> Instant {
        Instant::from_ticks(self.last_accepted.load(Ordering::Relaxed))
    }
}

impl Default for PulseCounter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEBOUNCE;
    use proptest::prelude::*;

    fn at(ms: u32) -> Instant {
        Instant::from_ticks(ms)
    }

    #[test]
    fn bounce_inside_window_is_dropped() {
        let store = PositionStore::<2>::new();
        let counter = PulseCounter::new();

        assert!(counter.on_edge(0, at(100), DEBOUNCE, Direction::Forward, &store));
        assert!(!counter.on_edge(0, at(105), DEBOUNCE, Direction::Forward, &store));
        assert!(counter.on_edge(0, at(110), DEBOUNCE, Direction::Forward, &store));

        assert_eq!(store.snapshot(), [2, 0]);
        assert_eq!(counter.last_accepted(), at(110));
    }

    #[test]
    fn edge_exactly_at_threshold_is_dropped() {
        let store = PositionStore::<1>::new();
        let counter = PulseCounter::new();

        assert!(counter.on_edge(0, at(50), DEBOUNCE, Direction::Forward, &store));
        assert!(!counter.on_edge(0, at(58), DEBOUNCE, Direction::Forward, &store));
        assert!(counter.on_edge(0, at(59), DEBOUNCE, Direction::Forward, &store));
        assert_eq!(store.steps(0), 2);
    }

    #[test]
    fn sign_follows_commanded_direction() {
        let store = PositionStore::<1>::new();
        let counter = PulseCounter::new();

        counter.on_edge(0, at(20), DEBOUNCE, Direction::Reverse, &store);
        counter.on_edge(0, at(40), DEBOUNCE, Direction::Reverse, &store);
        assert_eq!(store.steps(0), -2);

        // Accepted while stopped: the debounce timer moves, the count does not.
        assert!(counter.on_edge(0, at(60), DEBOUNCE, Direction::Stop, &store));
        assert_eq!(store.steps(0), -2);
    }

    #[test]
    fn edges_right_after_boot_are_filtered() {
        let store = PositionStore::<1>::new();
        let counter = PulseCounter::new();

        assert!(!counter.on_edge(0, at(8), DEBOUNCE, Direction::Forward, &store));
        assert!(counter.on_edge(0, at(9), DEBOUNCE, Direction::Forward, &store));
    }

    proptest! {
        #[test]
        fn accepted_edges_are_spaced_beyond_debounce(
            gaps in prop::collection::vec(0u32..30, 1..200),
        ) {
            let store = PositionStore::<1>::new();
            let counter = PulseCounter::new();

            let mut t = 1_000u32;
            let mut accepted = std::vec::Vec::new();
            for gap in gaps {
                t += gap;
                if counter.on_edge(0, at(t), DEBOUNCE, Direction::Forward, &store) {
                    accepted.push(t);
                }
            }

            for pair in accepted.windows(2) {
                prop_assert!(pair[1] - pair[0] > DEBOUNCE.ticks());
            }
            prop_assert_eq!(store.steps(0), accepted.len() as i32);
        }
    }
}
