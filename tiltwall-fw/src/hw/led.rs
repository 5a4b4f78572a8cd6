// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Indicator LEDs (active-low on this board).

use stm32f7xx_hal::gpio::{self, Output, PinState, PushPull};

pub struct Led<const P: char, const N: u8> {
    pin: gpio::Pin<P, N, Output<PushPull>>,
}

impl<const P: char, const N: u8> Led<P, N> {
    /// Wrap an active-low LED pin, starting OFF.
    pub fn active_low<MODE>(pin: gpio::Pin<P, N, MODE>) -> Self {
        let mut pin = pin.into_push_pull_output();
        pin.set_state(PinState::High);
        Self { pin }
    }

    pub fn set(&mut self, on: bool) {
        self.pin
            .set_state(if on { PinState::Low } else { PinState::High });
    }

    #[inline]
    pub fn on(&mut self) {
        self.set(true);
    }

    #[inline]
    pub fn off(&mut self) {
        self.set(false);
    }
}
