// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! PWM H-bridge outputs for the two wall actuators.
//!
//! Each actuator's bridge has two inputs: PWM on IN1 drives it forward (extend), PWM on IN2 drives
//! it in reverse (retract), both low lets it coast. The 0..=255 magnitudes in a [`DriveCommand`]
//! are scaled onto the timer's duty range.

use stm32f7xx_hal::prelude::*;
use tiltwall::{ActuatorDrives, DriveCommand};

/// One H-bridge driven by two PWM channels.
pub struct HBridge<Fwd, Rev> {
    fwd: Fwd,
    rev: Rev,
}

impl<Fwd, Rev> HBridge<Fwd, Rev>
where
    Fwd: _embedded_hal_PwmPin<Duty = u16>,
    Rev: _embedded_hal_PwmPin<Duty = u16>,
{
    /// Take both channels and start coasting.
    pub fn new(mut fwd: Fwd, mut rev: Rev) -> Self {
        fwd.set_duty(0);
        rev.set_duty(0);
        fwd.enable();
        rev.enable();
        Self { fwd, rev }
    }

    pub fn apply(&mut self, command: DriveCommand) {
        let fwd = Self::duty(command.forward, self.fwd.get_max_duty());
        let rev = Self::duty(command.reverse, self.rev.get_max_duty());

        // Drop the outgoing channel first so both are never high together.
        if fwd == 0 {
            self.fwd.set_duty(0);
            self.rev.set_duty(rev);
        } else {
            self.rev.set_duty(0);
            self.fwd.set_duty(fwd);
        }
    }

    #[inline]
    pub fn coast(&mut self) {
        self.apply(DriveCommand::STOP);
    }

    #[inline]
    fn duty(magnitude: u8, max_duty: u16) -> u16 {
        ((magnitude as u32 * max_duty as u32) / 255) as u16
    }
}

/// Both bridges of the wall, indexed the same way as the hall sensors.
pub struct WallDrives<F0, R0, F1, R1> {
    pub a0: HBridge<F0, R0>,
    pub a1: HBridge<F1, R1>,
}

impl<F0, R0, F1, R1> ActuatorDrives for WallDrives<F0, R0, F1, R1>
where
    F0: _embedded_hal_PwmPin<Duty = u16>,
    R0: _embedded_hal_PwmPin<Duty = u16>,
    F1: _embedded_hal_PwmPin<Duty = u16>,
    R1: _embedded_hal_PwmPin<Duty = u16>,
{
    fn apply(&mut self, index: usize, command: DriveCommand) {
        match index {
            0 => self.a0.apply(command),
            1 => self.a1.apply(command),
            _ => {}
        }
    }
}
