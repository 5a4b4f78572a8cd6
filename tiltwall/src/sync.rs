// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Synchronized drive for actuators sharing one rigid load.
//!
//! Every control tick pulls each actuator toward the group's average step count: an actuator behind
//! the average is driven faster than [`BASE_SPEED`](crate::config::BASE_SPEED), one ahead of it
//! slower. There is no ramping and no absolute position target; the correction is purely
//! proportional to the relative error.
//!
//! Typical usage pattern:
//!
//! ```ignore
//! let mut controller = MotionController::<2>::new(SyncConfig::default());
//!
//! loop {
//!     WALL.direction.set(buttons.direction());
//!     controller.tick(&WALL, CLOCK.now(), &mut drives, &mut serial);
//! }
//! ```
//!
//! The synchronization offset is `(avg - steps) * multiplier * direction`, and the commanded speed is
//! `|base + offset|` clamped to the maximum. Once the error is large enough for `base + offset` to
//! go negative, the absolute value turns that into forward speed on the channel picked by the
//! direction, so a far-ahead actuator speeds up again instead of backing off. No re-routing happens
//! in that case.

use core::fmt::Write;

use crate::clock::Instant;
use crate::config::SyncConfig;
use crate::direction::Direction;
use crate::drive::{ActuatorDrives, DriveCommand};
use crate::shared::SharedState;
use crate::status::StatusReporter;

/// Group average of `steps`, rounded toward negative infinity.
///
/// Floor rounding keeps `avg * n <= sum < (avg + 1) * n` for negative totals too. An empty slice
/// averages to 0.
pub fn average_steps(steps: &[i32]) -> i32 {
    if steps.is_empty() {
        return 0;
    }
    let total: i64 = steps.iter().map(|&s| s as i64).sum();
    total.div_euclid(steps.len() as i64) as i32
}

/// Speed correction for one actuator at `steps`, given the group average.
#[inline]
pub fn sync_offset(avg: i32, steps: i32, multiplier: i32, direction: Direction) -> i64 {
    (avg as i64 - steps as i64)
        .saturating_mul(multiplier as i64)
        .saturating_mul(direction.sign() as i64)
}

/// `min(|base + offset|, max)`.
#[inline]
pub fn drive_speed(base: u8, offset: i64, max: u8) -> u8 {
    (base as i64).saturating_add(offset).unsigned_abs().min(max as u64) as u8
}

/// Per-actuator speeds for one tick.
pub fn synchronized_speeds<const N: usize>(
    config: &SyncConfig,
    steps: &[i32; N],
    direction: Direction,
) -> [u8; N] {
    let avg = average_steps(steps);
    core::array::from_fn(|i| {
        let offset = sync_offset(avg, steps[i], config.offset_multiplier, direction);
        drive_speed(config.base_speed, offset, config.max_speed)
    })
}

/// Control-tick state: configuration, the last computed speeds, and the status throttle.
pub struct MotionController<const N: usize> {
    config: SyncConfig,
    speeds: [u8; N],
    reporter: StatusReporter,
}

impl<const N: usize> MotionController<N> {
    pub fn new(config: SyncConfig) -> Self {
        Self {
            config,
            speeds: [0; N],
            reporter: StatusReporter::new(config.report_interval),
        }
    }

    #[inline]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Speeds computed by the most recent tick.
    #[inline]
    pub fn speeds(&self) -> [u8; N] {
        self.speeds
    }

    /// Run one control tick.
    ///
    /// Reads every counter and the commanded direction once, computes the synchronized speeds, and
    /// applies them to `drives` (both channels zero while stopped). Also gives the status reporter its
    /// chance to write to `log`. Returns the commands that were applied.
    pub fn tick<D, W>(
        &mut self,
        shared: &SharedState<N>,
        now: Instant,
        drives: &mut D,
        log: &mut W,
    ) -> [DriveCommand; N]
    where
        D: ActuatorDrives,
        W: Write,
    {
        let steps = shared.positions.snapshot();
        let direction = shared.direction.get();

        self.speeds = synchronized_speeds(&self.config, &steps, direction);

        let commands = self.speeds.map(|speed| DriveCommand::route(speed, direction));
        for (i, command) in commands.iter().enumerate() {
            drives.apply(i, *command);
        }

        self.reporter.poll(now, &self.speeds, &steps, log);
        commands
    }
}
