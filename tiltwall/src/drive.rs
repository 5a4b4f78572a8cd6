// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Actuator drive commands.
//!
//! Each actuator sits behind an H-bridge with one PWM input per direction. A [`DriveCommand`]
//! carries both magnitudes; at most one of them is non-zero.

use crate::direction::Direction;

/// Forward/reverse magnitudes (0..=255) for one actuator.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct DriveCommand {
    pub forward: u8,
    pub reverse: u8,
}

impl DriveCommand {
    /// Both channels off (coast).
    pub const STOP: Self = Self {
        forward: 0,
        reverse: 0,
    };

    /// Route `speed` onto the channel selected by `direction`.
    pub const fn route(speed: u8, direction: Direction) -> Self {
        match direction {
            Direction::Forward => Self {
                forward: speed,
                reverse: 0,
            },
            Direction::Reverse => Self {
                forward: 0,
                reverse: speed,
            },
            Direction::Stop => Self::STOP,
        }
    }

    #[inline]
    pub const fn is_stopped(&self) -> bool {
        self.forward == 0 && self.reverse == 0
    }
}

/// Output stage for every actuator on the wall.
///
/// The board maps `index` onto its PWM channels; tests record the commands instead.
pub trait ActuatorDrives {
    fn apply(&mut self, index: usize, command: DriveCommand);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn routing_is_mutually_exclusive() {
        assert_eq!(
            DriveCommand::route(120, Direction::Forward),
            DriveCommand {
                forward: 120,
                reverse: 0
            }
        );
        assert_eq!(
            DriveCommand::route(120, Direction::Reverse),
            DriveCommand {
                forward: 0,
                reverse: 120
            }
        );
        assert!(DriveCommand::route(255, Direction::Stop).is_stopped());
    }
}
