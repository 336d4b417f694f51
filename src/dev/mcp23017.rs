//! Support for the `MCP23017` "16-Bit I/O Expander with Serial Interface"
//!
//! Datasheet: https://ww1.microchip.com/downloads/en/devicedoc/20001952c.pdf
//!
//! The MCP23017 offers two eight-bit GPIO ports.  It has three
//! address pins, so eight devices can coexist on an I2C bus.
//!
//! Pins 0..=7 are port A, pins 8..=15 are port B.  Levels are read from the GPIO registers and
//! written to the OLAT registers.
use super::{Layout, PortRegs};

/// Register layout marker for the `MCP23017`.
pub struct Mcp23017Layout;

#[allow(dead_code)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// N.B.: These values are for BANK=0, which is the reset state of
/// the chip (and this driver does not change).
///
/// For all registers, the reset value is 0x00, except for
/// IODIR{A,B} which are 0xFF (making all pins inputs) at reset.
pub(crate) enum Regs {
    /// IODIR: input/output direction: 0=output; 1=input
    IODIRA = 0x00,
    /// IPOL: input polarity: 0=register values match input pins; 1=opposite
    IPOLA = 0x02,
    /// GPINTEN: interrupt-on-change: 0=disable; 1=enable
    GPINTENA = 0x04,
    /// DEFVAL: default values for interrupt-on-change
    DEFVALA = 0x06,
    /// INTCON: interrupt-on-change config: 0=compare to previous pin value;
    ///   1=compare to corresponding bit in DEFVAL
    INTCONA = 0x08,
    /// IOCON: configuration register, BANK (bit 7) is assumed to stay 0
    IOCONA = 0x0a,
    /// GPPU: GPIO pull-ups on pins configured as inputs
    GPPUA = 0x0c,
    /// INTF: interrupt flags
    INTFA = 0x0e,
    /// INTCAP: pin levels captured when an interrupt occurred
    INTCAPA = 0x10,
    /// GPIO: reflects logic level on pins
    GPIOA = 0x12,
    /// OLAT: output latches: sets state for pins configured as outputs
    OLATA = 0x14,
    IODIRB = 0x01,
    IPOLB = 0x03,
    GPINTENB = 0x05,
    DEFVALB = 0x07,
    INTCONB = 0x09,
    IOCONB = 0x0b,
    GPPUB = 0x0d,
    INTFB = 0x0f,
    INTCAPB = 0x11,
    GPIOB = 0x13,
    OLATB = 0x15,
}

impl From<Regs> for u8 {
    fn from(r: Regs) -> u8 {
        r as u8
    }
}

impl Layout for Mcp23017Layout {
    const NAME: &'static str = "MCP23017";
    const PORTS: &'static [PortRegs] = &[
        PortRegs {
            direction: Regs::IODIRA as u8,
            input: Regs::GPIOA as u8,
            output: Regs::OLATA as u8,
        },
        PortRegs {
            direction: Regs::IODIRB as u8,
            input: Regs::GPIOB as u8,
            output: Regs::OLATB as u8,
        },
    ];
}
