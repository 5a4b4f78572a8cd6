// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tunable constants for the wall.

use crate::clock::Duration;

/// Minimum spacing between two accepted hall edges on one actuator.
pub const DEBOUNCE: Duration = Duration::from_ticks(8);

/// How long the limit seeker holds a drive command before checking for motion.
pub const DWELL: Duration = Duration::from_ticks(200);

/// Minimum spacing between two status lines.
pub const REPORT_INTERVAL: Duration = Duration::from_ticks(1000);

/// Drive magnitude before the synchronization offset is applied.
pub const BASE_SPEED: u8 = 100;

/// Speed correction per step of deviation from the group average.
pub const OFFSET_MULTIPLIER: i32 = 5;

/// Full-scale drive magnitude.
pub const MAX_SPEED: u8 = 255;

/// Gains and limits used by [`MotionController`](crate::sync::MotionController).
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct SyncConfig {
    pub base_speed: u8,
    pub offset_multiplier: i32,
    pub max_speed: u8,
    pub report_interval: Duration,
}

impl SyncConfig {
    pub const fn new() -> Self {
        Self {
            base_speed: BASE_SPEED,
            offset_multiplier: OFFSET_MULTIPLIER,
            max_speed: MAX_SPEED,
            report_interval: REPORT_INTERVAL,
        }
    }

    /// Set the drive magnitude used when all actuators agree.
    pub fn with_base_speed(mut self, base_speed: u8) -> Self {
        self.base_speed = base_speed;
        self
    }

    /// Set the speed correction applied per step of positional error.
    pub fn with_offset_multiplier(mut self, offset_multiplier: i32) -> Self {
        self.offset_multiplier = offset_multiplier;
        self
    }

    /// Set the clamp applied to every computed speed.
    pub fn with_max_speed(mut self, max_speed: u8) -> Self {
        self.max_speed = max_speed;
        self
    }

    /// Set the minimum spacing between status lines.
    pub fn with_report_interval(mut self, report_interval: Duration) -> Self {
        self.report_interval = report_interval;
        self
    }
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self::new()
    }
}
