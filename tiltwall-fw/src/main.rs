// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Tilt wall firmware entry point.
//!
//! Brings up the board, homes the wall against its lower end-stop, then runs the synchronized
//! control tick forever with the direction taken from the tilt buttons.

#![no_main]
#![no_std]
#![allow(dead_code)]

use core::fmt::Write;

use cortex_m_rt::entry;
use panic_halt as _;

use hal::{
    pac,
    prelude::*,
    serial::{Config, Serial},
    timer::{Channel1, Channel2, Channel3, Channel4},
};
use stm32f7xx_hal as hal;

use tiltwall::{
    clock::elapsed, Clock, Direction, Duration, LimitSeeker, MotionController, SharedState,
    SyncConfig, TickClock,
};

mod hw;
use hw::{pins::ButtonPins, BoardPins, HBridge, Led, SerialLog, WallDrives};

pub const ACTUATORS: usize = 2;

/// Counters and direction shared with the hall interrupts.
pub static WALL: SharedState<ACTUATORS> = SharedState::new();

/// Millisecond clock advanced by SysTick.
pub static CLOCK: TickClock = TickClock::new();

/// Spacing between control ticks.
const CONTROL_PERIOD: Duration = Duration::from_ticks(10);

/// Drive magnitude used while seeking the end-stop at boot.
const HOMING_SPEED: u8 = 200;

#[entry]
fn main() -> ! {
    // Peripherals
    let mut dp = pac::Peripherals::take().unwrap();
    let cp = cortex_m::Peripherals::take().unwrap();

    // Clocks
    let mut rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.freeze();

    let pins = BoardPins::new(dp.GPIOA, dp.GPIOD, dp.GPIOE);

    // Millisecond time base
    hw::systick::start(cp.SYST, &clocks);

    // LED
    let mut led_busy = Led::active_low(pins.leds.yellow);

    // USART1 (DBG)
    let usart_cfg = Config {
        baud_rate: 115_200.bps(),
        ..Default::default()
    };
    let serial = Serial::new(
        dp.USART1,
        (pins.usart1.tx, pins.usart1.rx),
        &clocks,
        usart_cfg,
    );
    let mut log = SerialLog::new(serial);

    // TIM4 PWM -> H-bridges
    let channels = (
        Channel1::new(pins.drive.fwd0),
        Channel2::new(pins.drive.rev0),
        Channel3::new(pins.drive.fwd1),
        Channel4::new(pins.drive.rev1),
    );
    let (fwd0, rev0, fwd1, rev1) = dp.TIM4.pwm_hz(channels, 20.kHz(), &clocks).split();
    let mut drives = WallDrives {
        a0: HBridge::new(fwd0, rev0),
        a1: HBridge::new(fwd1, rev1),
    };

    // Hall sensors
    hw::hall::listen(pins.hall, &mut dp.SYSCFG, &mut dp.EXTI, &mut rcc.apb2);

    let _ = write!(log, "Tilt wall up\r\n");

    // Home against the lower end-stop so the counts start from a known place.
    led_busy.on();
    WALL.direction.set(Direction::Reverse);
    let report = LimitSeeker::<ACTUATORS>::new().seek(
        &WALL,
        HOMING_SPEED,
        &CLOCK,
        &mut drives,
        &mut log,
    );
    WALL.direction.set(Direction::Stop);
    drives.a0.coast();
    drives.a1.coast();
    led_busy.off();
    let _ = write!(log, "Homed after {} windows\r\n", report.windows);

    let mut controller = MotionController::<ACTUATORS>::new(SyncConfig::default());
    let mut last_tick = CLOCK.now();

    loop {
        let now = CLOCK.now();
        if elapsed(last_tick, now).ticks() < CONTROL_PERIOD.ticks() {
            continue;
        }
        last_tick = now;

        WALL.direction.set(commanded_direction(&pins.buttons));
        controller.tick(&WALL, now, &mut drives, &mut log);
    }
}

/// Tilt up drives forward, tilt down drives in reverse; nothing or both pressed stops the wall.
fn commanded_direction(buttons: &ButtonPins) -> Direction {
    Direction::from_buttons(buttons.up.is_low(), buttons.down.is_low())
}
