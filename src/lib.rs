//! Per-pin change interrupts for port grouped interrupt vectors
//!
//! See the [`pcint`] module for the dispatch engine and [`pcint::vorago`] for the VA108xx
//! backend.
#![no_std]

#[cfg(test)]
#[macro_use]
extern crate std;

pub use va108xx;
pub use va108xx as pac;

pub mod clock;
pub mod pcint;
pub mod prelude;
pub mod utility;

pub use pcint::{PcInt, PcIntError};
