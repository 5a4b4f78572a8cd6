// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! 1 kHz SysTick driving the millisecond clock.

use cortex_m::peripheral::{syst::SystClkSource, SYST};
use cortex_m_rt::exception;
use stm32f7xx_hal::rcc::Clocks;

use crate::CLOCK;

/// Start SysTick at 1 kHz from the core clock.
pub fn start(mut syst: SYST, clocks: &Clocks) {
    syst.set_clock_source(SystClkSource::Core);
    syst.set_reload(clocks.sysclk().raw() / 1_000 - 1);
    syst.clear_current();
    syst.enable_counter();
    syst.enable_interrupt();
}

#[exception]
fn SysTick() {
    CLOCK.tick();
}
