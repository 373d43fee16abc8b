//! # Pin change interrupt demultiplexer
//!
//! Many microcontrollers route all pins of a port group to a single interrupt vector. This module
//! turns such a shared vector into per-pin callbacks with edge selection.
//!
//! [`PcInt`] owns the bookkeeping of up to [`MAX_GROUPS`] groups of [`GROUP_WIDTH`] pins and a
//! hardware interface implementing [`PinMap`] and [`PortRegisters`]. It is meant to be placed in a
//! `static`, because the same instance is used by the application to register handlers and by the
//! interrupt handlers of the groups, which only need to call [`PcInt::dispatch`].
//!
//! ```ignore
//! static PCINT: PcInt<Va108xxPorts> = PcInt::new(Va108xxPorts::new([
//!     Some(GroupCfg::new(PortSel::PortA, 0, pac::Interrupt::OC10)),
//!     None,
//!     None,
//!     None,
//! ]));
//!
//! fn button_pressed() {
//!     // ...
//! }
//!
//! PCINT.attach(5, button_pressed, Edge::Falling).unwrap();
//!
//! #[interrupt]
//! fn OC10() {
//!     PCINT.dispatch(Group::G0);
//! }
//! ```
//!
//! ## Handlers
//!
//! Handlers run in interrupt context, but outside of any critical section. They should be short
//! and must not block. Calling back into the [`PcInt`] from a handler is allowed. A handler can
//! either be a plain `fn()` or a `fn(Context, bool)` which receives a `'static` context reference
//! and the new level of the pin.
//!
//! ## Requirements
//!
//! Dispatches for the same group must not nest. This is guaranteed on all platforms where the
//! hardware latches at most one pending request per vector.
use core::cell::RefCell;
use core::fmt;

use critical_section::Mutex;

mod dispatch;
pub mod edge;
pub mod port;
pub mod reg;
mod registrar;
pub mod vorago;

pub use edge::Edge;
pub use port::{Context, Handler, PortSnapshot};
pub use reg::{Group, PinLocation, PinMap, PortRegisters, GROUP_WIDTH, MAX_GROUPS};
pub use vorago::{GroupCfg, Va108xxPorts};

use port::PortState;

/// Pin change error type
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PcIntError {
    /// The pin can not generate pin change interrupts or its group is not provided by the
    /// hardware. Nothing was modified
    InvalidPin,
}

impl fmt::Display for PcIntError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPin => write!(f, "pin has no pin change interrupt"),
        }
    }
}

/// Per-pin dispatch for port grouped change interrupts
pub struct PcInt<H> {
    hw: H,
    ports: Mutex<RefCell<[PortState; MAX_GROUPS]>>,
}

impl<H> PcInt<H> {
    pub const fn new(hw: H) -> Self {
        PcInt {
            hw,
            ports: Mutex::new(RefCell::new([PortState::EMPTY; MAX_GROUPS])),
        }
    }

    /// Access the underlying hardware interface
    #[inline]
    pub fn hardware(&self) -> &H {
        &self.hw
    }
}

impl<H: PinMap + PortRegisters> PcInt<H> {
    /// Returns the handler installed for a group and bit, or [`None`] if the slot is empty or
    /// either index is out of range. For diagnostic purposes, this never affects dispatch
    pub fn handler(&self, group: u8, bit: u8) -> Option<Handler> {
        let group = self.provided(group)?;
        if bit >= GROUP_WIDTH {
            return None;
        }
        critical_section::with(|cs| self.ports.borrow_ref(cs)[group.index()].slot(bit))
    }

    /// Copy of the current bookkeeping of a group
    pub fn snapshot(&self, group: u8) -> Option<PortSnapshot> {
        let group = self.provided(group)?;
        Some(critical_section::with(|cs| {
            self.ports.borrow_ref(cs)[group.index()].snapshot()
        }))
    }

    /// Edge interest currently registered for a pin
    pub fn edge(&self, pin: u8) -> Option<Edge> {
        let loc = self.locate(pin).ok()?;
        critical_section::with(|cs| self.ports.borrow_ref(cs)[loc.group.index()].edge(loc.bit))
    }

    #[inline]
    fn provided(&self, group: u8) -> Option<Group> {
        Group::new(group).filter(|g| self.hw.provides(*g))
    }

    /// Resolve a pin and reject locations the hardware can not serve
    fn locate(&self, pin: u8) -> Result<PinLocation, PcIntError> {
        match self.hw.locate(pin) {
            Some(loc) if self.hw.provides(loc.group) && loc.bit < GROUP_WIDTH => Ok(loc),
            _ => Err(PcIntError::InvalidPin),
        }
    }
}
