// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Host-side stand-ins for the board: a simulated millisecond clock that fires hall edges, and a
//! drive stage that records what it was told.

#![allow(dead_code)]

use std::cell::{Cell, RefCell};

use tiltwall::{ActuatorDrives, Clock, DriveCommand, Instant, SharedState};

type Sensors<'a, const N: usize> = Box<dyn FnMut(u32) -> [bool; N] + 'a>;

/// Clock that advances 1 ms per sample and delivers the hall edges scheduled for that millisecond.
///
/// Sampling the clock stands in for time passing on the board, so edges land while the code under
/// test is busy-waiting, just as the EXTI interrupts would.
pub struct SimClock<'a, const N: usize> {
    wall: &'a SharedState<N>,
    millis: Cell<u32>,
    sensors: RefCell<Sensors<'a, N>>,
}

impl<'a, const N: usize> SimClock<'a, N> {
    pub fn new(wall: &'a SharedState<N>, sensors: impl FnMut(u32) -> [bool; N] + 'a) -> Self {
        Self {
            wall,
            millis: Cell::new(0),
            sensors: RefCell::new(Box::new(sensors)),
        }
    }

    /// Silent sensors.
    pub fn quiet(wall: &'a SharedState<N>) -> Self {
        Self::new(wall, |_| [false; N])
    }

    pub fn millis(&self) -> u32 {
        self.millis.get()
    }
}

impl<const N: usize> Clock for SimClock<'_, N> {
    fn now(&self) -> Instant {
        let t = self.millis.get() + 1;
        self.millis.set(t);

        let fired = (self.sensors.borrow_mut())(t);
        for (i, edge) in fired.into_iter().enumerate() {
            if edge {
                self.wall.on_hall_edge(i, Instant::from_ticks(t));
            }
        }
        Instant::from_ticks(t)
    }
}

/// Drive stage that keeps the last command per actuator.
pub struct RecordingDrives<const N: usize> {
    pub last: [DriveCommand; N],
    pub applied: usize,
}

impl<const N: usize> RecordingDrives<N> {
    pub fn new() -> Self {
        Self {
            last: [DriveCommand::STOP; N],
            applied: 0,
        }
    }
}

impl<const N: usize> ActuatorDrives for RecordingDrives<N> {
    fn apply(&mut self, index: usize, command: DriveCommand) {
        if let Some(slot) = self.last.get_mut(index) {
            *slot = command;
            self.applied += 1;
        }
    }
}
