use super::{Context, Edge, Handler, PcInt, PcIntError, PinMap, PortRegisters};

impl<H: PinMap + PortRegisters> PcInt<H> {
    /// Install a plain handler for a pin and enable its change interrupt
    ///
    /// Returns [`PcIntError::InvalidPin`] if the pin can not generate pin change interrupts. In
    /// that case nothing is modified.
    pub fn attach(&self, pin: u8, handler: fn(), edge: Edge) -> Result<(), PcIntError> {
        self.install(pin, Handler::Plain(handler), edge)
    }

    /// Install a handler which receives `context` and the new pin level
    pub fn attach_with_context(
        &self,
        pin: u8,
        handler: fn(Context, bool),
        context: Context,
        edge: Edge,
    ) -> Result<(), PcIntError> {
        self.install(pin, Handler::WithContext(handler, context), edge)
    }

    fn install(&self, pin: u8, handler: Handler, edge: Edge) -> Result<(), PcIntError> {
        let loc = self.locate(pin)?;
        critical_section::with(|cs| {
            let sample = self.hw.read_port(loc.group);
            self.ports.borrow_ref_mut(cs)[loc.group.index()].attach(loc.bit, handler, edge, sample);
            self.hw.set_mask_bit(loc, true);
            self.hw.set_group_enabled(loc.group, true);
        });
        #[cfg(feature = "defmt")]
        defmt::trace!("pcint: attached pin {} at {} ({})", pin, loc, edge);
        Ok(())
    }

    /// Remove the handler of a pin and disable its change interrupt. The group's interrupt vector
    /// is disabled as well once no pin of the group has a handler anymore.
    ///
    /// A dispatch of the group which is already running may still call the old handler if it
    /// read the slot before the detach.
    pub fn detach(&self, pin: u8) -> Result<(), PcIntError> {
        let loc = self.locate(pin)?;
        critical_section::with(|cs| {
            let empty = self.ports.borrow_ref_mut(cs)[loc.group.index()].detach(loc.bit);
            self.hw.set_mask_bit(loc, false);
            if empty {
                self.hw.set_group_enabled(loc.group, false);
            }
        });
        #[cfg(feature = "defmt")]
        defmt::trace!("pcint: detached pin {} at {}", pin, loc);
        Ok(())
    }

    /// Unmute a pin. Only the hardware mask bit is touched, the handler and edge selection are
    /// kept
    pub fn enable(&self, pin: u8) -> Result<(), PcIntError> {
        let loc = self.locate(pin)?;
        critical_section::with(|_| self.hw.set_mask_bit(loc, true));
        Ok(())
    }

    /// Mute a pin. Only the hardware mask bit is touched, the handler and edge selection are
    /// kept
    pub fn disable(&self, pin: u8) -> Result<(), PcIntError> {
        let loc = self.locate(pin)?;
        critical_section::with(|_| self.hw.set_mask_bit(loc, false));
        Ok(())
    }
}
