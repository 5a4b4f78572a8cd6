// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Limit seeking (homing).
//!
//! Drives every actuator at one fixed speed in the commanded direction until a full dwell window
//! passes with no hall pulse from any of them. That silence is taken to mean the wall has reached a
//! mechanical end-stop.
//!
//! ```text
//!   reset counters
//!        |
//!        v
//!   snapshot -> hold drive for DWELL -> any counter moved? --yes--> snapshot ...
//!                                              |
//!                                              no
//!                                              v
//!                                            done
//! ```
//!
//! Only pulse absence is measured. A jammed actuator or a dead sensor ends the search early exactly
//! like a real end-stop, and a limit that is never reached keeps the caller here forever.

use core::fmt::Write;

use crate::clock::{elapsed, Clock, Duration};
use crate::config::DWELL;
use crate::drive::{ActuatorDrives, DriveCommand};
use crate::shared::SharedState;

/// Outcome of one [`LimitSeeker::seek`] call.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct HomingReport {
    /// Dwell windows driven, including the final silent one.
    pub windows: u32,
}

pub struct LimitSeeker<const N: usize> {
    prev_steps: [i32; N],
    dwell: Duration,
}

impl<const N: usize> LimitSeeker<N> {
    pub const fn new() -> Self {
        Self::with_dwell(DWELL)
    }

    pub const fn with_dwell(dwell: Duration) -> Self {
        Self {
            prev_steps: [0; N],
            dwell,
        }
    }

    /// Counts sampled at the start of the most recent window.
    #[inline]
    pub fn prev_steps(&self) -> [i32; N] {
        self.prev_steps
    }

    /// True if any actuator moved since the last snapshot.
    pub fn steps_changed(&self, shared: &SharedState<N>) -> bool {
        shared.positions.snapshot() != self.prev_steps
    }

    /// Seek the end-stop in the currently commanded direction, blocking until it is reached.
    ///
    /// Zeroes every counter first. The drive command is re-applied continuously through each window
    /// while the hall interrupts keep counting. The drives are left running when this returns; the
    /// caller decides what comes next.
    pub fn seek<C, D, W>(
        &mut self,
        shared: &SharedState<N>,
        speed: u8,
        clock: &C,
        drives: &mut D,
        log: &mut W,
    ) -> HomingReport
    where
        C: Clock,
        D: ActuatorDrives,
        W: Write,
    {
        let _ = write!(log, "Moving to limit...\r\n");

        shared.positions.reset();
        self.prev_steps = [0; N];

        let mut windows = 0;
        loop {
            self.prev_steps = shared.positions.snapshot();
            self.hold(shared, speed, clock, drives);
            windows += 1;

            if !self.steps_changed(shared) {
                break;
            }
        }

        HomingReport { windows }
    }

    /// Busy-wait one dwell window, re-applying the drive on every pass.
    fn hold<C, D>(&self, shared: &SharedState<N>, speed: u8, clock: &C, drives: &mut D)
    where
        C: Clock,
        D: ActuatorDrives,
    {
        let start = clock.now();
        while elapsed(start, clock.now()).ticks() < self.dwell.ticks() {
            let command = DriveCommand::route(speed, shared.direction.get());
            for i in 0..N {
                drives.apply(i, command);
            }
        }
    }
}

impl<const N: usize> Default for LimitSeeker<N> {
    fn default() -> Self {
        Self::new()
    }
}
