//! Pin change example application
//!
//! Builds two port groups: PA0 to PA7 routed to OC10 and PB16 to PB23 routed to OC11. PA0 reports
//! falling edges, PA1 rising edges and PB16 every change. The pins are used in their reset
//! configuration (floating input), so they need an external pull resistor.
#![no_main]
#![no_std]

use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use va108xx_pcint::{
    pac::{self, interrupt},
    prelude::*,
};

static PCINT: PcInt<Va108xxPorts> = PcInt::new(Va108xxPorts::new([
    Some(GroupCfg::new(PortSel::PortA, 0, pac::Interrupt::OC10)),
    Some(GroupCfg::new(PortSel::PortB, 2, pac::Interrupt::OC11)),
    None,
    None,
]));

const PA0: u8 = 0;
const PA1: u8 = 1;
const PB16: u8 = 32 + 16;

fn pa0_fell() {
    rprintln!("PA0 falling edge");
}

fn pa1_rose() {
    rprintln!("PA1 rising edge");
}

fn pb16_changed() {
    rprintln!("PB16 changed");
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- VA108xx pin change example application--");

    let mut dp = pac::Peripherals::take().unwrap();
    PCINT.hardware().init(&mut dp.SYSCONFIG);

    PCINT.attach(PA0, pa0_fell, Edge::Falling).unwrap();
    PCINT.attach(PA1, pa1_rose, Edge::Rising).unwrap();
    PCINT.attach(PB16, pb16_changed, Edge::Change).unwrap();
    // PA8 is not part of any group
    if let Err(e) = PCINT.attach(8, pa0_fell, Edge::Change) {
        rprintln!("PA8: {}", e);
    }

    let mut counter: u32 = 0;
    loop {
        cortex_m::asm::delay(25_000_000);
        counter += 1;
        if counter % 10 == 0 {
            // Mute PA1 every other 10 cycles
            if (counter / 10) % 2 == 1 {
                rprintln!("Muting PA1");
                PCINT.disable(PA1).unwrap();
            } else {
                rprintln!("Unmuting PA1");
                PCINT.enable(PA1).unwrap();
            }
        }
    }
}

#[interrupt]
fn OC10() {
    PCINT.dispatch(Group::G0);
}

#[interrupt]
fn OC11() {
    PCINT.dispatch(Group::G1);
}
