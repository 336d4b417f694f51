//! The device module contains the register maps for each of the supported expanders.
//!
//! In most cases you will not need anything from here explicitly, the exposed types at the root of
//! the crate should be enough.

pub mod mcp23008;
pub mod mcp23017;

/// Register addresses belonging to one 8-bit port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortRegs {
    /// IODIR: 1 = input, 0 = output.
    pub direction: u8,
    /// Register read by `digital_read()`.
    pub input: u8,
    /// Register written by `digital_write()`.
    pub output: u8,
}

/// Register layout of a chip variant.
///
/// The driver is generic over this trait; only the register table and the number of ports
/// differ between variants.
pub trait Layout {
    /// Chip name used in diagnostics.
    const NAME: &'static str;
    /// One entry per port, in pin order (port A first).
    const PORTS: &'static [PortRegs];

    fn pin_count() -> u8 {
        (Self::PORTS.len() * 8) as u8
    }
}
