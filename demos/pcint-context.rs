//! Pin change example with context handlers
//!
//! All eight pins of PA24 to PA31 share one handler. Each pin gets its own counter as context,
//! the handler counts edges per pin and prints the new level.
#![no_main]
#![no_std]

use core::sync::atomic::{AtomicU32, Ordering};
use cortex_m_rt::entry;
use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use va108xx_pcint::{
    pac::{self, interrupt},
    prelude::*,
};

static PCINT: PcInt<Va108xxPorts> = PcInt::new(Va108xxPorts::new([
    None,
    None,
    None,
    Some(GroupCfg::new(PortSel::PortA, 3, pac::Interrupt::OC3)),
]));

struct PinCounter {
    pin: u8,
    edges: AtomicU32,
}

static COUNTERS: [PinCounter; 8] = [
    PinCounter::new(24),
    PinCounter::new(25),
    PinCounter::new(26),
    PinCounter::new(27),
    PinCounter::new(28),
    PinCounter::new(29),
    PinCounter::new(30),
    PinCounter::new(31),
];

impl PinCounter {
    const fn new(pin: u8) -> Self {
        PinCounter {
            pin,
            edges: AtomicU32::new(0),
        }
    }
}

fn count_edge(ctx: Context, level: bool) {
    if let Some(counter) = ctx.downcast_ref::<PinCounter>() {
        let n = counter.edges.fetch_add(1, Ordering::Relaxed) + 1;
        rprintln!("PA{}: level {} after {} edges", counter.pin, level as u8, n);
    }
}

#[entry]
fn main() -> ! {
    rtt_init_print!();
    rprintln!("-- VA108xx pin change context example --");

    let mut dp = pac::Peripherals::take().unwrap();
    PCINT.hardware().init(&mut dp.SYSCONFIG);

    for counter in COUNTERS.iter() {
        PCINT
            .attach_with_context(counter.pin, count_edge, counter, Edge::Change)
            .unwrap();
    }

    let mut cycles = 0;
    loop {
        cortex_m::asm::delay(50_000_000);
        cycles += 1;
        if cycles == 30 {
            rprintln!("Detaching PA24 to PA27");
            for counter in COUNTERS.iter().take(4) {
                PCINT.detach(counter.pin).unwrap();
            }
        }
    }
}

#[interrupt]
fn OC3() {
    PCINT.dispatch(Group::G3);
}
