//! Prelude
pub use crate::pcint::{
    Context, Edge, Group, GroupCfg, Handler, PcInt, PcIntError, PinMap, PortRegisters,
    Va108xxPorts,
};
pub use crate::utility::PortSel;
