// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! # Tilt Wall Core
//!
//! Hardware-independent core of the tilt wall controller: two linear actuators lift one rigid wall,
//! each reporting travel through a hall-effect pulse sensor. The core counts those pulses, keeps the
//! actuators synchronized against the group average, and seeks the mechanical end-stops.
//!
//! The board layer (`tiltwall-fw`) wires this crate to the STM32F777 peripherals. Everything here
//! is `no_std`, allocation-free, and safe to place in `static` items shared with interrupt handlers.
//!
//! ## Crate Structure
//!
//! | Module | Purpose |
//! | ------ | -------- |
//! | [`clock`] | Millisecond time base and the SysTick-driven clock |
//! | [`direction`] | Commanded travel direction and its interrupt-safe cell |
//! | [`position`] | Atomic per-actuator step counters |
//! | [`pulse`] | Debounced hall-sensor edge counting |
//! | [`shared`] | State shared between interrupt handlers and the main loop |
//! | [`drive`] | Forward/reverse drive commands and the output trait |
//! | [`sync`] | Synchronized speed computation (the control tick) |
//! | [`homing`] | Limit seeking by absence of pulses |
//! | [`status`] | Throttled status line rendering |
//! | [`config`] | Tunable constants and [`SyncConfig`] |
//!
//! ## Testing
//!
//! The crate builds for the host under `cargo test`:
//!
//! ```bash
//! cargo test -p tiltwall
//! ```
//!
//! ## License
//!
//! Licensed under the **MIT License**.
//!
//! © 2025–2026 Christopher Liu

#![cfg_attr(not(test), no_std)]

pub mod clock;
pub mod config;
pub mod direction;
pub mod drive;
pub mod homing;
pub mod position;
pub mod pulse;
pub mod shared;
pub mod status;
pub mod sync;

pub use clock::{Clock, Duration, Instant, TickClock};
pub use config::SyncConfig;
pub use direction::{Direction, DirectionCell};
pub use drive::{ActuatorDrives, DriveCommand};
pub use homing::{HomingReport, LimitSeeker};
pub use position::PositionStore;
pub use pulse::PulseCounter;
pub use shared::SharedState;
pub use status::StatusReporter;
pub use sync::MotionController;
