use crate::common::Polarity;
use crate::error::InvalidArgument;

/// Construction options for an expander.
///
/// The I2C bus itself is opened by the caller and moved into the driver; `bus` only records
/// which bus that was, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Config {
    /// 7-bit I2C address of the chip.
    pub address: u8,
    #[cfg_attr(feature = "serde", serde(default = "default_bus"))]
    pub bus: u8,
    /// Swap logical HIGH and LOW relative to the electrical level.
    #[cfg_attr(feature = "serde", serde(default))]
    pub reverse: bool,
    /// Emit diagnostic tracing through `log::debug!`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub debug: bool,
    /// Reject writes to pins which are not configured as outputs.
    #[cfg_attr(feature = "serde", serde(default))]
    pub strict: bool,
}

#[cfg(feature = "serde")]
fn default_bus() -> u8 {
    1
}

impl Config {
    pub const fn new(address: u8) -> Self {
        Self {
            address,
            bus: 1,
            reverse: false,
            debug: false,
            strict: false,
        }
    }

    pub const fn bus(mut self, bus: u8) -> Self {
        self.bus = bus;
        self
    }

    pub const fn reverse(mut self, reverse: bool) -> Self {
        self.reverse = reverse;
        self
    }

    pub const fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    pub const fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn polarity(&self) -> Polarity {
        Polarity::from_reverse(self.reverse)
    }

    pub(crate) fn validate(&self) -> Result<(), InvalidArgument> {
        if self.address > 0x7f {
            return Err(InvalidArgument::Address(self.address));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder() {
        let c = Config::new(0x21).bus(3).reverse(true).debug(true);
        assert_eq!(c.address, 0x21);
        assert_eq!(c.bus, 3);
        assert_eq!(c.polarity(), Polarity::Inverted);
        assert!(c.debug);
        assert!(!c.strict);
        assert!(c.validate().is_ok());
        assert_eq!(
            Config::new(0x80).validate(),
            Err(InvalidArgument::Address(0x80))
        );
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialize_defaults() {
        let c: Config = serde_json::from_str(r#"{ "address": 32 }"#).unwrap();
        assert_eq!(c, Config::new(0x20));

        let c: Config =
            serde_json::from_str(r#"{ "address": 39, "bus": 0, "reverse": true }"#).unwrap();
        assert_eq!(c, Config::new(0x27).bus(0).reverse(true));

        assert!(serde_json::from_str::<Config>(r#"{ "bus": 1 }"#).is_err());
    }
}
