// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Pin definitions for the tilt wall controller board (STM32F777).

use stm32f7xx_hal::{
    gpio::{gpioa, gpiod, gpioe, Alternate, Input, Output, PullUp, PushPull},
    pac,
    prelude::*,
};

/// All board pins. Construct this once at startup using:
///
/// ```ignore
/// let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);
/// ```
pub struct BoardPins {
    pub leds: LedPins,
    pub usart1: Usart1Pins,
    pub drive: DrivePins,
    pub hall: HallPins,
    pub buttons: ButtonPins,
}

pub struct LedPins {
    pub red: gpiod::PD8<Output<PushPull>>,
    pub yellow: gpiod::PD9<Output<PushPull>>,
    pub green: gpiod::PD10<Output<PushPull>>,
}

pub struct Usart1Pins {
    pub tx: gpioa::PA9<Alternate<7>>,
    pub rx: gpioa::PA10<Alternate<7>>,
}

/// H-bridge inputs, all on TIM4.
pub struct DrivePins {
    pub fwd0: gpiod::PD12<Alternate<2>>, // TIM4_CH1
    pub rev0: gpiod::PD13<Alternate<2>>, // TIM4_CH2
    pub fwd1: gpiod::PD14<Alternate<2>>, // TIM4_CH3
    pub rev1: gpiod::PD15<Alternate<2>>, // TIM4_CH4
}

/// Hall sensor outputs. Each sits on its own EXTI line.
pub struct HallPins {
    pub sensor0: gpioa::PA0<Input<PullUp>>, // EXTI0
    pub sensor1: gpioa::PA1<Input<PullUp>>, // EXTI1
}

/// Tilt buttons, active-low.
pub struct ButtonPins {
    pub up: gpioe::PE4<Input<PullUp>>,
    pub down: gpioe::PE11<Input<PullUp>>,
}

impl BoardPins {
    /// Create all named pins from raw GPIO peripherals.
    pub fn new(gpioa: pac::GPIOA, gpiod: pac::GPIOD, gpioe: pac::GPIOE) -> Self {
        let gpioa = gpioa.split();
        let gpiod = gpiod.split();
        let gpioe = gpioe.split();

        Self {
            leds: LedPins {
                red: gpiod.pd8.into_push_pull_output(),
                yellow: gpiod.pd9.into_push_pull_output(),
                green: gpiod.pd10.into_push_pull_output(),
            },

            usart1: Usart1Pins {
                tx: gpioa.pa9.into_alternate::<7>(),
                rx: gpioa.pa10.into_alternate::<7>(),
            },

            drive: DrivePins {
                fwd0: gpiod.pd12.into_alternate::<2>(),
                rev0: gpiod.pd13.into_alternate::<2>(),
                fwd1: gpiod.pd14.into_alternate::<2>(),
                rev1: gpiod.pd15.into_alternate::<2>(),
            },

            hall: HallPins {
                sensor0: gpioa.pa0.into_pull_up_input(),
                sensor1: gpioa.pa1.into_pull_up_input(),
            },

            buttons: ButtonPins {
                up: gpioe.pe4.into_pull_up_input(),
                down: gpioe.pe11.into_pull_up_input(),
            },
        }
    }
}
