//! Simulated pin change hardware for integration tests.
//!
//! Pins map like on the classic AVR parts: pin `n` is bit `n % 8` of group `n / 8`. The
//! registers are atomics so a simulated port can live in a `static` next to a `PcInt`.

#![allow(dead_code)]

use std::sync::atomic::{AtomicU32, AtomicU8, Ordering};
use std::sync::Mutex;

use va108xx_pcint::pcint::{Context, Group, PinLocation, PinMap, PortRegisters, MAX_GROUPS};

// ── SimPorts ──────────────────────────────────────────────────

pub struct SimPorts<const N: u8> {
    port: [AtomicU8; MAX_GROUPS],
    mask: [AtomicU8; MAX_GROUPS],
    master: AtomicU8,
    acks: [AtomicU32; MAX_GROUPS],
    reads: AtomicU32,
}

#[allow(clippy::declare_interior_mutable_const)]
const ZERO_U8: AtomicU8 = AtomicU8::new(0);
#[allow(clippy::declare_interior_mutable_const)]
const ZERO_U32: AtomicU32 = AtomicU32::new(0);

impl<const N: u8> SimPorts<N> {
    pub const fn new() -> Self {
        Self {
            port: [ZERO_U8; MAX_GROUPS],
            mask: [ZERO_U8; MAX_GROUPS],
            master: AtomicU8::new(0),
            acks: [ZERO_U32; MAX_GROUPS],
            reads: AtomicU32::new(0),
        }
    }

    /// Drive the input pins of a group
    pub fn set_port(&self, group: Group, value: u8) {
        self.port[group.id() as usize].store(value, Ordering::SeqCst);
    }

    pub fn mask(&self, group: Group) -> u8 {
        self.mask[group.id() as usize].load(Ordering::SeqCst)
    }

    pub fn master_enabled(&self, group: Group) -> bool {
        self.master.load(Ordering::SeqCst) & (1 << group.id()) != 0
    }

    pub fn acks(&self, group: Group) -> u32 {
        self.acks[group.id() as usize].load(Ordering::SeqCst)
    }

    pub fn reads(&self) -> u32 {
        self.reads.load(Ordering::SeqCst)
    }
}

impl<const N: u8> PinMap for SimPorts<N> {
    fn locate(&self, pin: u8) -> Option<PinLocation> {
        if pin >= 8 * N {
            return None;
        }
        PinLocation::new(Group::new(pin / 8)?, pin % 8)
    }
}

impl<const N: u8> PortRegisters for SimPorts<N> {
    const GROUPS: u8 = N;

    fn read_port(&self, group: Group) -> u8 {
        self.reads.fetch_add(1, Ordering::SeqCst);
        self.port[group.id() as usize].load(Ordering::SeqCst)
    }

    fn set_mask_bit(&self, loc: PinLocation, enable: bool) {
        let reg = &self.mask[loc.group.id() as usize];
        if enable {
            reg.fetch_or(1 << loc.mask_bit, Ordering::SeqCst);
        } else {
            reg.fetch_and(!(1 << loc.mask_bit), Ordering::SeqCst);
        }
    }

    fn set_group_enabled(&self, group: Group, enable: bool) {
        if enable {
            self.master.fetch_or(1 << group.id(), Ordering::SeqCst);
        } else {
            self.master.fetch_and(!(1 << group.id()), Ordering::SeqCst);
        }
    }

    fn acknowledge(&self, group: Group) {
        self.acks[group.id() as usize].fetch_add(1, Ordering::SeqCst);
    }
}

// ── Call recording ────────────────────────────────────────────

/// Ordered record of handler calls as `(tag id, new level)`
#[derive(Default)]
pub struct CallLog(Mutex<Vec<(u8, bool)>>);

impl CallLog {
    pub fn leak() -> &'static CallLog {
        Box::leak(Box::default())
    }

    pub fn take(&self) -> Vec<(u8, bool)> {
        std::mem::take(&mut *self.0.lock().unwrap())
    }
}

pub struct Tag {
    pub id: u8,
    pub log: &'static CallLog,
}

/// Context for [`record`]
pub fn tagged(id: u8, log: &'static CallLog) -> Context {
    let tag: &'static Tag = Box::leak(Box::new(Tag { id, log }));
    tag
}

/// Handler which appends its tag ID and the pin level to the tag log
pub fn record(ctx: Context, level: bool) {
    let tag = ctx.downcast_ref::<Tag>().expect("context is not a tag");
    tag.log.0.lock().unwrap().push((tag.id, level));
}
