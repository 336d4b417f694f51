//! Support for the `MCP23008` "8-Bit I/O Expander with Serial Interface"
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/DeviceDoc/MCP23008-MCP23S08-Data-Sheet-20001919F.pdf
//!
//! The MCP23008 offers a single eight-bit GPIO port.  It has three address pins, so eight devices
//! can coexist on an I2C bus.
//!
//! Reads and writes both go through the GPIO register.  Writing GPIO modifies the output latch,
//! reading it returns the levels on the pins.
use super::{Layout, PortRegs};

/// Register layout marker for the `MCP23008`.
pub struct Mcp23008Layout;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// For all registers, the reset value is 0x00, except for IODIR which is 0xFF (making all pins
/// inputs) at reset.
pub(crate) enum Regs {
    /// IODIR: input/output direction: 0=output; 1=input
    IODIR = 0x00,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    IPOL = 0x01,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    GPINTEN = 0x02,
    /// DEFVAL: default values for interrupt-on-change
    DEFVAL = 0x03,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    INTCON = 0x04,
    /// IOCON: configuration register (SEQOP, DISSLW, HAEN, ODR, INTPOL)
    IOCON = 0x05,
    /// GPPU: weak pull-ups on pins configured as inputs
    GPPU = 0x06,
    /// INTF: interrupt flags
    INTF = 0x07,
    /// INTCAP: pin levels captured when an interrupt occurred
    INTCAP = 0x08,
    /// GPIO: reflects logic level on pins, writes land in OLAT
    GPIO = 0x09,
    /// OLAT: output latches
    OLAT = 0x0a,
}

impl From<Regs> for u8 {
    fn from(r: Regs) -> u8 {
        r as u8
    }
}

impl Layout for Mcp23008Layout {
    const NAME: &'static str = "MCP23008";
    const PORTS: &'static [PortRegs] = &[PortRegs {
        direction: Regs::IODIR as u8,
        input: Regs::GPIO as u8,
        output: Regs::GPIO as u8,
    }];
}
