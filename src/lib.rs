//! Async driver for the Microchip `MCP23008` and `MCP23017` I2C GPIO expanders.
//!
//! The driver keeps a copy of each port's direction and output registers and turns per-pin
//! operations into the smallest number of single-byte register writes.  The I2C bus is any
//! [`embedded_hal_async::i2c::I2c`] implementation.
//!
//! ```no_run
//! # async fn demo<I2C: embedded_hal_async::i2c::I2c>(i2c: I2C) {
//! use mcp23xxx::{Config, Direction, Mcp23017};
//!
//! let mut mcp = Mcp23017::new(i2c, Config::new(0x20)).await.unwrap();
//! mcp.pin_mode(8, Direction::Output).await.unwrap();
//! mcp.digital_write(8, true).await.unwrap();
//! let level = mcp.digital_read(0).await.unwrap();
//! # }
//! ```
#![cfg_attr(not(test), no_std)]

mod bus;
mod cache;
mod common;
mod config;
pub mod dev;
mod driver;
mod error;
mod pin;
mod shared;

pub use cache::PortRegisters;
pub use common::{Direction, PinAddr, PinValue, Polarity};
pub use config::Config;
pub use dev::mcp23008::Mcp23008Layout;
pub use dev::mcp23017::Mcp23017Layout;
pub use dev::Layout;
pub use driver::Expander;
pub use error::{Error, InvalidArgument};
pub use pin::Pin;
pub use shared::SharedExpander;

/// `MCP23008` "8-Bit I/O Expander with Serial Interface", one port of 8 pins.
pub type Mcp23008<I2C> = Expander<I2C, Mcp23008Layout>;
/// `MCP23017` "16-Bit I/O Expander with Serial Interface", two ports of 8 pins.
pub type Mcp23017<I2C> = Expander<I2C, Mcp23017Layout>;
