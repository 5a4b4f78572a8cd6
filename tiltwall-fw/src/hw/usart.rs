// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Serial log over USART1.
//!
//! Everything the controller prints (homing notices, the periodic status line) goes through
//! `core::fmt::Write` on a [`SerialLog`]. Output is blocking; a line costs its transmit time and
//! nothing more. Include `\r\n` at line ends so terminals render correctly.
//!
//! To watch the log on the host machine, connect to the debug USB port and use
//! ```text
//! $ screen /dev/tty.usbmodem* 115200
//! ```

use core::fmt;
use nb::block;

use stm32f7xx_hal::{
    prelude::*,
    serial::{Instance, Pins, Serial, Tx},
};

/// Transmit half of a HAL serial port. The receive half is unused.
pub struct SerialLog<U: Instance> {
    tx: Tx<U>,
}

impl<U: Instance> SerialLog<U> {
    pub fn new<PINS: Pins<U>>(serial: Serial<U, PINS>) -> Self {
        let (tx, _rx) = serial.split();
        Self { tx }
    }

    /// Send raw bytes. Transmit errors drop the byte.
    pub fn send(&mut self, bytes: &[u8]) {
        for &b in bytes {
            let _ = block!(self.tx.write(b));
        }
    }
}

impl<U: Instance> fmt::Write for SerialLog<U> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.send(s.as_bytes());
        Ok(())
    }
}
