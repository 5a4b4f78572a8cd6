// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! State shared between the hall-sensor interrupts and the main loop.
//!
//! Intended to live in a single `static`:
//!
//! ```ignore
//! static WALL: SharedState<2> = SharedState::new();
//!
//! // EXTI handler for sensor 0
//! WALL.on_hall_edge(0, CLOCK.now());
//! ```

use crate::clock::{Duration, Instant};
use crate::config::DEBOUNCE;
use crate::direction::DirectionCell;
use crate::position::PositionStore;
use crate::pulse::PulseCounter;

pub struct SharedState<const N: usize> {
    /// Step counters, one per actuator.
    pub positions: PositionStore<N>,
    /// Direction written by the command dispatcher.
    pub direction: DirectionCell,
    counters: [PulseCounter; N],
    debounce: Duration,
}

impl<const N: usize> SharedState<N> {
    pub const fn new() -> Self {
        Self::with_debounce(DEBOUNCE)
    }

    pub const fn with_debounce(debounce: Duration) -> Self {
        const IDLE: PulseCounter = PulseCounter::new();
        Self {
            positions: PositionStore::new(),
            direction: DirectionCell::new(),
            counters: [IDLE; N],
            debounce,
        }
    }

    /// Entry point for the rising-edge interrupt of sensor `index`.
    ///
    /// Returns whether the edge was counted. Unknown indices are ignored.
    #[inline]
    pub fn on_hall_edge(&self, index: usize, now: Instant) -> bool {
        match self.counters.get(index) {
            Some(counter) => counter.on_edge(
                index,
                now,
                self.debounce,
                self.direction.get(),
                &self.positions,
            ),
            None => false,
        }
    }
}

impl<const N: usize> Default for SharedState<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Direction;

    #[test]
    fn edges_land_on_their_own_actuator() {
        let wall = SharedState::<2>::new();
        wall.direction.set(Direction::Forward);

        assert!(wall.on_hall_edge(0, Instant::from_ticks(100)));
        assert!(wall.on_hall_edge(1, Instant::from_ticks(102)));
        assert!(wall.on_hall_edge(1, Instant::from_ticks(120)));

        assert_eq!(wall.positions.snapshot(), [1, 2]);
    }

    #[test]
    fn debounce_is_per_actuator() {
        let wall = SharedState::<2>::new();
        wall.direction.set(Direction::Forward);

        assert!(wall.on_hall_edge(0, Instant::from_ticks(100)));
        // Sensor 1 is not held back by sensor 0's recent edge.
        assert!(wall.on_hall_edge(1, Instant::from_ticks(101)));
        assert!(!wall.on_hall_edge(0, Instant::from_ticks(101)));
    }

    #[test]
    fn unknown_sensor_is_ignored() {
        let wall = SharedState::<2>::new();
        wall.direction.set(Direction::Forward);
        assert!(!wall.on_hall_edge(2, Instant::from_ticks(100)));
        assert_eq!(wall.positions.snapshot(), [0, 0]);
    }
}
