// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Per-actuator step counters.
//!
//! Each counter is a single atomic word. Its pulse handler is the only context that adds to it; the
//! main loop loads it every control tick and stores zero at the start of homing. No operation spans
//! more than one word, so a tick may read a value one pulse stale but never a torn one.

use core::sync::atomic::{AtomicI32, Ordering};

pub struct PositionStore<const N: usize> {
    steps: [AtomicI32; N],
}

impl<const N: usize> PositionStore<N> {
    pub const fn new() -> Self {
        const ZERO: AtomicI32 = AtomicI32::new(0);
        Self { steps: [ZERO; N] }
    }

    /// Number of actuators tracked.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Current step count of one actuator. Out-of-range indices read as 0.
    #[inline]
    pub fn steps(&self, index: usize) -> i32 {
        self.steps
            .get(index)
            .map_or(0, |s| s.load(Ordering::Relaxed))
    }

    /// Load every counter once.
    pub fn snapshot(&self) -> [i32; N] {
        core::array::from_fn(|i| self.steps[i].load(Ordering::Relaxed))
    }

    /// Add `delta` to one counter. Only the actuator's own pulse handler calls this.
    #[inline]
    pub fn advance(&self, index: usize, delta: i32) {
        if let Some(s) = self.steps.get(index) {
            s.fetch_add(delta, Ordering::Relaxed);
        }
    }

    /// Zero every counter.
    pub fn reset(&self) {
        for s in &self.steps {
            s.store(0, Ordering::Relaxed);
        }
    }
}

impl<const N: usize> Default for PositionStore<N> {
    fn default() -> Self {
        Self::new()
    }
}
