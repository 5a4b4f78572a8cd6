// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Throttled status line.
//!
//! The control tick calls [`StatusReporter::poll`] every time it runs; a line is emitted at most once
//! per report interval. The line is rendered into a fixed buffer first so a slow serial port only
//! costs the transmit time, never a partial line interleaved with other output.
//!
//! ```text
//! Actuator 1 speed: 50 | Pos: 100 | Actuator 2 speed: 150 | Pos: 80
//! ```

use core::fmt::{self, Write};

use heapless::String;

use crate::clock::{elapsed, Duration, Instant};

/// Capacity of a rendered status line, in bytes.
pub const LINE_CAPACITY: usize = 256;

pub type StatusLine = String<LINE_CAPACITY>;

/// Render speed and position of every actuator, numbered from 1.
///
/// Actuators beyond the shorter of the two slices are skipped. A line that does not fit is truncated.
pub fn render(speeds: &[u8], steps: &[i32]) -> StatusLine {
    let mut line = StatusLine::new();
    for (i, (speed, pos)) in speeds.iter().zip(steps).enumerate() {
        let sep = if i == 0 { "" } else { " | " };
        if write!(line, "{sep}Actuator {} speed: {speed} | Pos: {pos}", i + 1).is_err() {
            break;
        }
    }
    line
}

pub struct StatusReporter {
    interval: Duration,
    last_report: Instant,
}

impl StatusReporter {
    /// First report goes out once `interval` has passed since boot.
    pub const fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_report: Instant::from_ticks(0),
        }
    }

    /// Emit a line to `out` if at least one interval has passed since the last one.
    ///
    /// Returns whether a line was emitted. Write errors are dropped; reporting never affects control.
    pub fn poll<W: Write>(&mut self, now: Instant, speeds: &[u8], steps: &[i32], out: &mut W) -> bool {
        if elapsed(self.last_report, now).ticks() < self.interval.ticks() {
            return false;
        }
        self.last_report = now;

        let line = render(speeds, steps);
        let _ = emit(out, &line);
        true
    }

    #[inline]
    pub fn last_report(&self) -> Instant {
        self.last_report
    }
}

fn emit<W: Write>(out: &mut W, line: &str) -> fmt::Result {
    out.write_str(line)?;
    out.write_str("\r\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::string::String as StdString;

    #[test]
    fn renders_pair() {
        let line = render(&[50, 150], &[100, 80]);
        assert_eq!(
            line.as_str(),
            "Actuator 1 speed: 50 | Pos: 100 | Actuator 2 speed: 150 | Pos: 80"
        );
    }

    #[test]
    fn renders_negative_positions() {
        let line = render(&[100], &[-42]);
        assert_eq!(line.as_str(), "Actuator 1 speed: 100 | Pos: -42");
    }

    #[test]
    fn throttles_to_interval() {
        let mut reporter = StatusReporter::new(Duration::from_ticks(1000));
        let mut out = StdString::new();

        assert!(!reporter.poll(Instant::from_ticks(10), &[1, 2], &[3, 4], &mut out));
        assert!(!reporter.poll(Instant::from_ticks(999), &[1, 2], &[3, 4], &mut out));
        assert!(out.is_empty());

        assert!(reporter.poll(Instant::from_ticks(1000), &[1, 2], &[3, 4], &mut out));
        assert!(!reporter.poll(Instant::from_ticks(1500), &[1, 2], &[3, 4], &mut out));
        assert!(reporter.poll(Instant::from_ticks(2100), &[1, 2], &[3, 4], &mut out));

        assert_eq!(out.matches("\r\n").count(), 2);
        assert!(out.starts_with("Actuator 1 speed: 1 | Pos: 3 | Actuator 2 speed: 2 | Pos: 4\r\n"));
    }

    struct Broken;

    impl Write for Broken {
        fn write_str(&mut self, _: &str) -> fmt::Result {
            Err(fmt::Error)
        }
    }

    #[test]
    fn sink_errors_are_swallowed() {
        let mut reporter = StatusReporter::new(Duration::from_ticks(1000));
        assert!(reporter.poll(Instant::from_ticks(1000), &[1], &[1], &mut Broken));
        assert_eq!(reporter.last_report().ticks(), 1000);
    }
}
