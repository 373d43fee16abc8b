//! Peripheral clock gating needed by the pin change backend
use va108xx::SYSCONFIG;

/// Bit positions in `PERIPHERAL_CLK_ENABLE`
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum PeripheralClocks {
    PortA = 0,
    PortB = 1,
    Irqsel = 21,
    Gpio = 24,
}

impl PeripheralClocks {
    #[inline]
    pub const fn mask(self) -> u32 {
        1 << self as u8
    }
}

/// Set a clock enable bit. Other enable bits are left untouched
pub fn enable_peripheral_clock(syscfg: &mut SYSCONFIG, clock: PeripheralClocks) {
    syscfg
        .peripheral_clk_enable
        .modify(|r, w| unsafe { w.bits(r.bits() | clock.mask()) });
}

#[cfg(test)]
mod tests {
    use super::PeripheralClocks;

    #[test]
    fn clock_masks() {
        assert_eq!(PeripheralClocks::PortA.mask(), 0x01);
        assert_eq!(PeripheralClocks::PortB.mask(), 0x02);
        assert_eq!(PeripheralClocks::Irqsel.mask(), 1 << 21);
        assert_eq!(PeripheralClocks::Gpio.mask(), 1 << 24);
    }
}
