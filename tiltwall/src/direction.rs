// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Commanded travel direction.
//!
//! The hall sensors cannot tell which way the shaft turns, so every counted pulse takes its sign
//! from the direction that was commanded when it arrived. The command dispatcher writes the
//! [`DirectionCell`] before each motion; the pulse handlers and the drive routing read it for as
//! long as that motion lasts.

use core::sync::atomic::{AtomicI8, Ordering};

/// Logical drive direction shared by the whole wall.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[repr(i8)]
pub enum Direction {
    Reverse = -1,
    #[default]
    Stop = 0,
    Forward = 1,
}

impl Direction {
    /// Signed step increment for one accepted pulse.
    #[inline]
    pub const fn sign(self) -> i32 {
        self as i8 as i32
    }

    /// Inverse of [`sign`](Self::sign); anything other than ±1 reads as `Stop`.
    #[inline]
    pub const fn from_sign(sign: i8) -> Self {
        match sign {
            1 => Direction::Forward,
            -1 => Direction::Reverse,
            _ => Direction::Stop,
        }
    }

    /// Map the tilt buttons to a direction. Conflicting input stops the wall.
    pub const fn from_buttons(up_pressed: bool, down_pressed: bool) -> Self {
        match (up_pressed, down_pressed) {
            (true, false) => Direction::Forward,
            (false, true) => Direction::Reverse,
            _ => Direction::Stop,
        }
    }
}

/// Interrupt-safe holder for the current [`Direction`].
pub struct DirectionCell {
    sign: AtomicI8,
}

impl DirectionCell {
    pub const fn new() -> Self {
        Self {
            sign: AtomicI8::new(0),
        }
    }

    #[inline]
    pub fn set(&self, direction: Direction) {
        self.sign.store(direction as i8, Ordering::Relaxed);
    }

    #[inline]
    pub fn get(&self) -> Direction {
        Direction::from_sign(self.sign.load(Ordering::Relaxed))
    }
}

impl Default for DirectionCell {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signs_match_travel() {
        assert_eq!(Direction::Forward.sign(), 1);
        assert_eq!(Direction::Reverse.sign(), -1);
        assert_eq!(Direction::Stop.sign(), 0);
    }

    #[test]
    fn cell_starts_stopped_and_holds_last_write() {
        let cell = DirectionCell::new();
        assert_eq!(cell.get(), Direction::Stop);

        cell.set(Direction::Reverse);
        assert_eq!(cell.get(), Direction::Reverse);

        cell.set(Direction::Forward);
        assert_eq!(cell.get(), Direction::Forward);
    }

    #[test]
    fn buttons_map_to_direction() {
        assert_eq!(Direction::from_buttons(true, false), Direction::Forward);
        assert_eq!(Direction::from_buttons(false, true), Direction::Reverse);
        assert_eq!(Direction::from_buttons(false, false), Direction::Stop);
        assert_eq!(Direction::from_buttons(true, true), Direction::Stop);
    }
}
