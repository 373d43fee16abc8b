//! Per group bookkeeping shared between the registrar and the dispatcher
use core::any::Any;
use core::fmt;

use super::edge::{triggered, Edge};
use super::reg::GROUP_WIDTH;

/// Opaque context handed back to a [`Handler::WithContext`] callback. Use
/// [`downcast_ref`](https://doc.rust-lang.org/core/any/trait.Any.html#method.downcast_ref-2)
/// to get the concrete type back
pub type Context = &'static (dyn Any + Send + Sync);

/// Callback installed for a single pin
#[derive(Copy, Clone)]
pub enum Handler {
    /// Called without arguments, like a plain interrupt handler
    Plain(fn()),
    /// Called with the registered context and the new level of the pin
    WithContext(fn(Context, bool), Context),
}

impl Handler {
    #[inline]
    pub fn invoke(&self, level: bool) {
        match *self {
            Handler::Plain(func) => func(),
            Handler::WithContext(func, ctx) => func(ctx, level),
        }
    }

    /// Address of the installed function. Intended for diagnostics
    pub fn addr(&self) -> usize {
        match *self {
            Handler::Plain(func) => func as usize,
            Handler::WithContext(func, _) => func as usize,
        }
    }
}

impl fmt::Debug for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Plain(_) => write!(f, "Plain({:#x})", self.addr()),
            Handler::WithContext(_, _) => write!(f, "WithContext({:#x})", self.addr()),
        }
    }
}

/// Copy of the bookkeeping of one group, see [`PcInt::snapshot`](super::PcInt::snapshot)
#[derive(Debug, Default, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortSnapshot {
    pub last_sample: u8,
    pub rising: u8,
    pub falling: u8,
    pub attached: u8,
}

#[derive(Copy, Clone)]
pub(crate) struct PortState {
    last_sample: u8,
    rising: u8,
    falling: u8,
    /// One bit for every occupied slot
    attached: u8,
    slots: [Option<Handler>; GROUP_WIDTH as usize],
    /// Bumped whenever a slot is attached or detached
    generations: [u16; GROUP_WIDTH as usize],
}

/// Slot generations of a group taken together with a trigger set
pub(crate) type Generations = [u16; GROUP_WIDTH as usize];

impl PortState {
    pub(crate) const EMPTY: PortState = PortState {
        last_sample: 0,
        rising: 0,
        falling: 0,
        attached: 0,
        slots: [None; GROUP_WIDTH as usize],
        generations: [0; GROUP_WIDTH as usize],
    };

    /// Occupy a slot and add the edge interest. `sample` becomes the new baseline so the pin
    /// can not fire because of a change which happened before it was attached
    pub(crate) fn attach(&mut self, bit: u8, handler: Handler, edge: Edge, sample: u8) {
        let mask = 1 << bit;
        self.slots[bit as usize] = Some(handler);
        self.bump(bit);
        if edge.rising() {
            self.rising |= mask;
        }
        if edge.falling() {
            self.falling |= mask;
        }
        self.attached |= mask;
        self.last_sample = sample;
    }

    /// Clear a slot and its edge interest. Returns true if no slot of the group is occupied
    /// anymore
    pub(crate) fn detach(&mut self, bit: u8) -> bool {
        let mask = 1 << bit;
        self.slots[bit as usize] = None;
        self.bump(bit);
        self.rising &= !mask;
        self.falling &= !mask;
        self.attached &= !mask;
        self.attached == 0
    }

    #[inline]
    fn bump(&mut self, bit: u8) {
        let count = &mut self.generations[bit as usize];
        *count = count.wrapping_add(1);
    }

    /// Classify a new port sample against the stored one and commit it as the new baseline.
    /// Returns the set of bits which should fire and the slot generations the set belongs to
    #[inline]
    pub(crate) fn sample(&mut self, sample: u8) -> (u8, Generations) {
        let trigger = triggered(self.last_sample, sample, self.rising, self.falling);
        self.last_sample = sample;
        (trigger, self.generations)
    }

    #[inline]
    pub(crate) fn slot(&self, bit: u8) -> Option<Handler> {
        self.slots.get(bit as usize).copied().flatten()
    }

    /// Handler of a slot, but only if the slot was neither attached nor detached since
    /// `generations` was taken
    #[inline]
    pub(crate) fn slot_since(&self, bit: u8, generations: &Generations) -> Option<Handler> {
        let idx = bit as usize;
        if self.generations.get(idx)? != generations.get(idx)? {
            return None;
        }
        self.slot(bit)
    }

    pub(crate) fn edge(&self, bit: u8) -> Option<Edge> {
        let mask = 1 << bit;
        Edge::from_interest(self.rising & mask != 0, self.falling & mask != 0)
    }

    pub(crate) fn snapshot(&self) -> PortSnapshot {
        PortSnapshot {
            last_sample: self.last_sample,
            rising: self.rising,
            falling: self.falling,
            attached: self.attached,
        }
    }
}
