use crate::error::InvalidArgument;

/// Direction of a single pin, as stored in the IODIR register.
///
/// A set bit in IODIR makes the pin an input, a cleared bit makes it an output.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Direction {
    Input,
    Output,
}

impl Direction {
    /// Raw constant used for INPUT.
    pub const INPUT: u8 = 1;
    /// Raw constant used for OUTPUT.
    pub const OUTPUT: u8 = 0;

    /// Whether a direction register byte has `mask` configured for this direction.
    pub(crate) fn matches(self, register: u8, mask: u8) -> bool {
        let is_input = register & mask != 0;
        match self {
            Direction::Input => is_input,
            Direction::Output => !is_input,
        }
    }
}

impl core::fmt::Display for Direction {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Direction::Input => f.write_str("INPUT"),
            Direction::Output => f.write_str("OUTPUT"),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = InvalidArgument;

    fn try_from(raw: u8) -> Result<Self, Self::Error> {
        match raw {
            Direction::INPUT => Ok(Direction::Input),
            Direction::OUTPUT => Ok(Direction::Output),
            other => Err(InvalidArgument::Direction(other)),
        }
    }
}

impl From<Direction> for u8 {
    fn from(d: Direction) -> u8 {
        match d {
            Direction::Input => Direction::INPUT,
            Direction::Output => Direction::OUTPUT,
        }
    }
}

/// Value accepted by `digital_write()`.
///
/// Booleans are logical levels and go through the chip's polarity mapping.  Numbers are taken as
/// the electrical level as-is; only `0` and `1` are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinValue {
    Logic(bool),
    Level(u8),
}

impl From<bool> for PinValue {
    fn from(b: bool) -> Self {
        PinValue::Logic(b)
    }
}

impl From<u8> for PinValue {
    fn from(v: u8) -> Self {
        PinValue::Level(v)
    }
}

impl PinValue {
    /// Resolve to the electrical bit level (`0` or `1`) to latch.
    pub(crate) fn level(self, polarity: Polarity) -> Result<u8, InvalidArgument> {
        match self {
            PinValue::Logic(true) => Ok(polarity.high()),
            PinValue::Logic(false) => Ok(polarity.low()),
            PinValue::Level(v @ (0 | 1)) => Ok(v),
            PinValue::Level(v) => Err(InvalidArgument::Value(v)),
        }
    }
}

/// Electrical convention for logical HIGH and LOW, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Polarity {
    #[default]
    Normal,
    Inverted,
}

impl Polarity {
    pub fn from_reverse(reverse: bool) -> Self {
        if reverse {
            Polarity::Inverted
        } else {
            Polarity::Normal
        }
    }

    pub fn high(self) -> u8 {
        match self {
            Polarity::Normal => 1,
            Polarity::Inverted => 0,
        }
    }

    pub fn low(self) -> u8 {
        1 - self.high()
    }
}

/// Location of a pin: which 8-bit port and which bit inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PinAddr {
    pub port: usize,
    pub bit: u8,
}

impl PinAddr {
    /// Resolve `pin` on a chip with `ports` 8-bit ports.
    pub fn resolve(pin: u8, ports: usize) -> Result<Self, InvalidArgument> {
        if usize::from(pin) >= ports * 8 {
            return Err(InvalidArgument::Pin(pin));
        }
        Ok(Self {
            port: usize::from(pin / 8),
            bit: pin % 8,
        })
    }

    /// Convert an untrusted pin number, e.g. from a host message payload.
    pub fn from_raw(pin: i32, ports: usize) -> Result<Self, InvalidArgument> {
        let pin = u8::try_from(pin).map_err(|_| InvalidArgument::Pin(u8::MAX))?;
        Self::resolve(pin, ports)
    }

    pub fn mask(self) -> u8 {
        1 << self.bit
    }

    /// Pin number this address corresponds to.
    pub fn pin(self) -> u8 {
        (self.port as u8) * 8 + self.bit
    }
}
