//! # Utility types shared by the interrupt routing code
use crate::pac;

#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PortSel {
    PortA,
    PortB,
}

/// Unmask and enable an IRQ with the given interrupt number
///
/// ## Safety
///
/// The unmask function can break mask-based critical sections
#[inline]
pub(crate) fn unmask_irq(irq: pac::Interrupt) {
    unsafe { cortex_m::peripheral::NVIC::unmask(irq) };
}
