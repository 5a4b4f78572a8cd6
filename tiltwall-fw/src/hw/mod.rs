// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Board Layer
//!
//! MCU-level wrappers binding the `tiltwall` core to STM32F777 peripherals.
//!
//! ## Modules
//!
//! - [`pins`] - Named board pins.
//! - [`usart`] - Serial log on USART1.
//! - [`led`] - Indicator LEDs.
//! - [`hbridge`] - TIM4 PWM outputs to the actuator H-bridges.
//! - [`hall`] - Hall sensor EXTI interrupts.
//! - [`systick`] - 1 kHz millisecond clock.

pub mod hall;
pub mod hbridge;
pub mod led;
pub mod pins;
pub mod systick;
pub mod usart;

pub use hbridge::{HBridge, WallDrives};
pub use led::Led;
pub use pins::BoardPins;
pub use usart::SerialLog;
