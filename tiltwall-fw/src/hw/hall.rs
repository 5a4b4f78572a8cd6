// SPDX-License-Identifier: MIT
// © 2025–2026 Christopher Liu

//! Hall sensor inputs on EXTI0/EXTI1.
//!
//! Every rising edge from a sensor raises its EXTI interrupt. The handler clears the pending bit and
//! hands the edge to [`SharedState::on_hall_edge`](tiltwall::SharedState::on_hall_edge) with the
//! current millisecond timestamp; debounce and counting happen there.

use core::cell::RefCell;

use cortex_m::interrupt::Mutex;
use stm32f7xx_hal::{
    gpio::{gpioa, Edge, ExtiPin, Input, PullUp},
    pac::{self, interrupt},
    rcc::APB2,
};
use tiltwall::Clock;

use crate::hw::pins::HallPins;
use crate::{CLOCK, WALL};

type Sensor0 = gpioa::PA0<Input<PullUp>>;
type Sensor1 = gpioa::PA1<Input<PullUp>>;

// Pins are parked here so the handlers can clear their own pending bits.
static SENSOR0: Mutex<RefCell<Option<Sensor0>>> = Mutex::new(RefCell::new(None));
static SENSOR1: Mutex<RefCell<Option<Sensor1>>> = Mutex::new(RefCell::new(None));

/// Route both sensors to their EXTI lines, trigger on rising edges, and unmask the interrupts.
pub fn listen(pins: HallPins, syscfg: &mut pac::SYSCFG, exti: &mut pac::EXTI, apb2: &mut APB2) {
    let HallPins {
        mut sensor0,
        mut sensor1,
    } = pins;

    sensor0.make_interrupt_source(syscfg, apb2);
    sensor0.trigger_on_edge(exti, Edge::Rising);
    sensor0.enable_interrupt(exti);

    sensor1.make_interrupt_source(syscfg, apb2);
    sensor1.trigger_on_edge(exti, Edge::Rising);
    sensor1.enable_interrupt(exti);

    cortex_m::interrupt::free(|cs| {
        SENSOR0.borrow(cs).replace(Some(sensor0));
        SENSOR1.borrow(cs).replace(Some(sensor1));
    });

    unsafe {
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::EXTI0);
        cortex_m::peripheral::NVIC::unmask(pac::Interrupt::EXTI1);
    }
}

#[interrupt]
fn EXTI0() {
    cortex_m::interrupt::free(|cs| {
        if let Some(pin) = SENSOR0.borrow(cs).borrow_mut().as_mut() {
            pin.clear_interrupt_pending_bit();
        }
    });
    WALL.on_hall_edge(0, CLOCK.now());
}

#[interrupt]
fn EXTI1() {
    cortex_m::interrupt::free(|cs| {
        if let Some(pin) = SENSOR1.borrow(cs).borrow_mut().as_mut() {
            pin.clear_interrupt_pending_bit();
        }
    });
    WALL.on_hall_edge(1, CLOCK.now());
}
