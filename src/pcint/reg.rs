//! Hardware interface consumed by [`PcInt`](super::PcInt)
//!
//! The demultiplexer itself never touches a register. It asks a [`PinMap`] where a pin lives and
//! drives the per-bit mask, the group master enable and the live input port through
//! [`PortRegisters`]. Both traits take `&self` because the underlying registers are memory mapped
//! and are also accessed from interrupt context.

/// Maximum number of port groups
pub const MAX_GROUPS: usize = 4;
/// Number of pins in one port group
pub const GROUP_WIDTH: u8 = 8;

/// Identity of a port group. Always smaller than [`MAX_GROUPS`]
#[derive(Debug, Eq, Copy, Clone, PartialEq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Group(u8);

impl Group {
    pub const G0: Group = Group(0);
    pub const G1: Group = Group(1);
    pub const G2: Group = Group(2);
    pub const G3: Group = Group(3);

    /// Returns [`None`] for a group ID of [`MAX_GROUPS`] or larger
    #[inline]
    pub const fn new(id: u8) -> Option<Group> {
        if (id as usize) < MAX_GROUPS {
            Some(Group(id))
        } else {
            None
        }
    }

    #[inline]
    pub const fn id(self) -> u8 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Where a pin lives inside the pin change hardware
#[derive(Debug, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinLocation {
    pub group: Group,
    /// Bit of the pin inside the group's input port byte. Selects the callback slot
    pub bit: u8,
    /// Bit of the pin inside the group's per-bit mask register. Identical to `bit` on most parts
    pub mask_bit: u8,
}

impl PinLocation {
    /// Location where the mask register bit matches the input port bit. Returns [`None`] if
    /// `bit` does not fit into a group
    pub const fn new(group: Group, bit: u8) -> Option<PinLocation> {
        if bit < GROUP_WIDTH {
            Some(PinLocation {
                group,
                bit,
                mask_bit: bit,
            })
        } else {
            None
        }
    }
}

/// Pin to hardware mapping
pub trait PinMap {
    /// Resolve a pin number. [`None`] means the pin can not generate pin change interrupts
    fn locate(&self, pin: u8) -> Option<PinLocation>;
}

/// Register access for the pin change hardware
pub trait PortRegisters {
    /// Number of groups this hardware can provide, starting at group 0. At most [`MAX_GROUPS`]
    const GROUPS: u8;

    /// Read the live input port value of a group
    fn read_port(&self, group: Group) -> u8;

    /// Set or clear the per-bit interrupt mask of a pin
    fn set_mask_bit(&self, loc: PinLocation, enable: bool);

    /// Set or clear the master enable of a group's interrupt vector
    fn set_group_enabled(&self, group: Group, enable: bool);

    /// Clear a pending change event. Called at the start of every dispatch
    #[inline]
    fn acknowledge(&self, _group: Group) {}

    /// Whether this instance serves a group. Pins, dispatches and diagnostics of other groups
    /// are rejected. Backends configured at runtime override this
    #[inline]
    fn provides(&self, group: Group) -> bool {
        group.id() < Self::GROUPS && group.index() < MAX_GROUPS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn group_bounds() {
        assert_eq!(Group::new(0), Some(Group::G0));
        assert_eq!(Group::new(3), Some(Group::G3));
        assert_eq!(Group::new(4), None);
        assert_eq!(Group::new(u8::MAX), None);
    }

    #[test]
    fn location_bounds() {
        let loc = PinLocation::new(Group::G1, 7).unwrap();
        assert_eq!(loc.mask_bit, 7);
        assert!(PinLocation::new(Group::G1, 8).is_none());
    }
}
