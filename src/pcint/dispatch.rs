use super::edge::Bits;
use super::{Group, PcInt, PinMap, PortRegisters};

impl<H: PinMap + PortRegisters> PcInt<H> {
    /// Interrupt handler body for a port group
    ///
    /// Samples the live port, commits the sample as the new baseline and then calls the handler
    /// of every pin whose transition matches its edge selection, lowest bit first. Call this from
    /// the interrupt vector of each group. Groups not provided by the hardware are ignored.
    ///
    /// A pin which a handler of the same dispatch detaches or attaches again is skipped. Its
    /// new handler only sees transitions after the attach.
    pub fn dispatch(&self, group: Group) {
        if !self.hw.provides(group) {
            return;
        }
        let idx = group.index();
        self.hw.acknowledge(group);
        let (sample, (trigger, generations)) = critical_section::with(|cs| {
            let sample = self.hw.read_port(group);
            (sample, self.ports.borrow_ref_mut(cs)[idx].sample(sample))
        });
        for bit in Bits::new(trigger) {
            let handler = critical_section::with(|cs| {
                self.ports.borrow_ref(cs)[idx].slot_since(bit, &generations)
            });
            if let Some(handler) = handler {
                handler.invoke(sample & (1 << bit) != 0);
            }
        }
    }
}
