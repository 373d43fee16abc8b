//! # VA108xx backend
//!
//! The VA108xx does not have port grouped pin change vectors. Every GPIO pin can be routed to
//! any of the 32 OC interrupt vectors with the IRQSEL peripheral instead. This backend builds
//! port groups on top of that: a [`GroupCfg`] selects one byte lane (8 pins) of PORTA or PORTB
//! and routes all of its pins to one vector.
//!
//! - Per-bit mask: `IRQ_ENB` of the port. Enabling a pin also configures it as both edge
//!   sensitive and routes it to the group vector.
//! - Master enable: NVIC mask of the group vector
//! - Live port: byte lane of `DATAIN`
//! - Acknowledge: read of `IRQ_END`
//!
//! Pin numbers are PA0 to PA31 for 0 to 31 and PB0 to PB23 for 32 to 55. Each group needs its
//! own vector, because the vector is masked once the last pin of a group is detached.
use cortex_m::peripheral::NVIC;
use va108xx::{porta, IRQSEL, PORTA, PORTB, SYSCONFIG};

use super::reg::{Group, PinLocation, PinMap, PortRegisters, GROUP_WIDTH, MAX_GROUPS};
use crate::clock::{enable_peripheral_clock, PeripheralClocks};
use crate::pac;
use crate::utility::{unmask_irq, PortSel};

/// Type definition to avoid confusion: These register blocks are identical
type PortRegisterBlock = porta::RegisterBlock;

const PORTA_PINS: u8 = 32;
const PORTB_PINS: u8 = 24;

/// Configuration of a single port group
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct GroupCfg {
    pub port: PortSel,
    /// Byte lane of the port, lane 0 is pins 0 to 7
    pub lane: u8,
    /// Interrupt vector the pins of the group are routed to
    pub irq: pac::Interrupt,
}

impl GroupCfg {
    pub const fn new(port: PortSel, lane: u8, irq: pac::Interrupt) -> Self {
        GroupCfg { port, lane, irq }
    }

    /// Pin number inside the port for a bit of this group
    #[inline]
    const fn port_pin(&self, bit: u8) -> u8 {
        self.lane.saturating_mul(GROUP_WIDTH).saturating_add(bit)
    }
}

/// Port groups built from VA108xx GPIO byte lanes
#[derive(Debug, Clone, Copy)]
pub struct Va108xxPorts {
    groups: [Option<GroupCfg>; MAX_GROUPS],
}

impl Va108xxPorts {
    /// Create the backend. Group `n` of the demultiplexer is `groups[n]`. This is a `const fn`
    /// so the whole demultiplexer can live in a `static`. Call [`Self::init`] before attaching
    /// any pin
    pub const fn new(groups: [Option<GroupCfg>; MAX_GROUPS]) -> Self {
        Va108xxPorts { groups }
    }

    /// Enable the peripheral clocks for IRQSEL and the GPIO ports used by the groups
    pub fn init(&self, syscfg: &mut SYSCONFIG) {
        enable_peripheral_clock(syscfg, PeripheralClocks::Irqsel);
        enable_peripheral_clock(syscfg, PeripheralClocks::Gpio);
        for cfg in self.groups.iter().flatten() {
            let clk = match cfg.port {
                PortSel::PortA => PeripheralClocks::PortA,
                PortSel::PortB => PeripheralClocks::PortB,
            };
            enable_peripheral_clock(syscfg, clk);
        }
    }

    #[inline]
    pub fn group_cfg(&self, group: Group) -> Option<&GroupCfg> {
        self.groups.get(group.id() as usize).and_then(Option::as_ref)
    }

    #[inline]
    fn port_reg(port: PortSel) -> &'static PortRegisterBlock {
        // Safety: The register blocks of both ports live for the whole program. Every write
        // below only modifies the bits of pins owned by a group
        match port {
            PortSel::PortA => unsafe { &(*PORTA::ptr()) },
            PortSel::PortB => unsafe { &(*PORTB::ptr()) },
        }
    }
}

impl PinMap for Va108xxPorts {
    fn locate(&self, pin: u8) -> Option<PinLocation> {
        let (port, num) = if pin < PORTA_PINS {
            (PortSel::PortA, pin)
        } else if pin < PORTA_PINS + PORTB_PINS {
            (PortSel::PortB, pin - PORTA_PINS)
        } else {
            return None;
        };
        let lane = num / GROUP_WIDTH;
        let idx = self
            .groups
            .iter()
            .position(|g| matches!(g, Some(cfg) if cfg.port == port && cfg.lane == lane))?;
        PinLocation::new(Group::new(idx as u8)?, num % GROUP_WIDTH)
    }
}

impl PortRegisters for Va108xxPorts {
    const GROUPS: u8 = MAX_GROUPS as u8;

    fn read_port(&self, group: Group) -> u8 {
        match self.group_cfg(group) {
            Some(cfg) => {
                let port = Self::port_reg(cfg.port);
                let shift = u32::from(cfg.lane) * u32::from(GROUP_WIDTH);
                port.datain().read().bits().checked_shr(shift).unwrap_or(0) as u8
            }
            None => 0,
        }
    }

    fn set_mask_bit(&self, loc: PinLocation, enable: bool) {
        let Some(cfg) = self.group_cfg(loc.group) else {
            return;
        };
        let port = Self::port_reg(cfg.port);
        let num = cfg.port_pin(loc.mask_bit);
        if num >= PORTA_PINS {
            return;
        }
        let mask = 1 << num;
        unsafe {
            if enable {
                // Edge sensitive, both edges
                port.irq_sen.modify(|r, w| w.bits(r.bits() & !mask));
                port.irq_edge.modify(|r, w| w.bits(r.bits() | mask));
                let irqsel = &(*IRQSEL::ptr());
                match cfg.port {
                    PortSel::PortA => {
                        irqsel.porta[num as usize].write(|w| w.bits(cfg.irq as u32));
                    }
                    PortSel::PortB => {
                        irqsel.portb[num as usize].write(|w| w.bits(cfg.irq as u32));
                    }
                }
                port.irq_enb.modify(|r, w| w.bits(r.bits() | mask));
            } else {
                port.irq_enb.modify(|r, w| w.bits(r.bits() & !mask));
            }
        }
    }

    fn set_group_enabled(&self, group: Group, enable: bool) {
        if let Some(cfg) = self.group_cfg(group) {
            if enable {
                unmask_irq(cfg.irq);
            } else {
                NVIC::mask(cfg.irq);
            }
        }
    }

    /// Only groups with a [`GroupCfg`] are served
    #[inline]
    fn provides(&self, group: Group) -> bool {
        self.group_cfg(group).is_some()
    }

    /// Reads the masked status of the port to end the event. `EDGE_STATUS` is clear on read for
    /// all 32 pins of a port and would drop the edges latched for other lanes, so it is left alone
    #[inline]
    fn acknowledge(&self, group: Group) {
        if let Some(cfg) = self.group_cfg(group) {
            let _irq_end = Self::port_reg(cfg.port).irq_end.read();
        }
    }
}
