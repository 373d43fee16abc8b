//! # Edge classification
//!
//! A port group only tells us that *some* pin of the group changed. The dispatcher compares the
//! new port value with the value it saw last time and keeps only those changed bits whose new
//! level matches the registered edge interest: a new level of 1 matches rising interest, a new
//! level of 0 matches falling interest.

/// Transition direction(s) that should invoke a handler
#[derive(Debug, Default, Eq, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Edge {
    /// Low to high transition
    Rising = 0b01,
    /// High to low transition
    Falling = 0b10,
    /// Any transition
    #[default]
    Change = 0b11,
}

impl Edge {
    #[inline]
    pub const fn rising(self) -> bool {
        self as u8 & Edge::Rising as u8 != 0
    }

    #[inline]
    pub const fn falling(self) -> bool {
        self as u8 & Edge::Falling as u8 != 0
    }

    /// Rebuild an edge mode from the interest bits stored for a pin. Returns [`None`] if
    /// neither direction is set
    pub const fn from_interest(rising: bool, falling: bool) -> Option<Edge> {
        match (rising, falling) {
            (true, true) => Some(Edge::Change),
            (true, false) => Some(Edge::Rising),
            (false, true) => Some(Edge::Falling),
            (false, false) => None,
        }
    }
}

/// Compute the set of bits which should fire for a port transition from `last` to `sample`
#[inline]
pub const fn triggered(last: u8, sample: u8, rising: u8, falling: u8) -> u8 {
    (last ^ sample) & ((rising & sample) | (falling & !sample))
}

/// Iterator over the set bit positions of a byte, lowest bit first
#[derive(Debug, Clone)]
pub struct Bits(u8);

impl Bits {
    pub const fn new(mask: u8) -> Self {
        Bits(mask)
    }
}

impl Iterator for Bits {
    type Item = u8;

    #[inline]
    fn next(&mut self) -> Option<u8> {
        if self.0 == 0 {
            return None;
        }
        let bit = self.0.trailing_zeros() as u8;
        // Clear lowest set bit
        self.0 &= self.0 - 1;
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.0.count_ones() as usize;
        (n, Some(n))
    }
}

impl ExactSizeIterator for Bits {}
