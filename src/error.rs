use core::fmt;

/// A rejected argument.  The operation is a no-op and nothing was sent on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InvalidArgument {
    /// Pin number outside of the chip's range.
    Pin(u8),
    /// Raw direction which is neither INPUT (1) nor OUTPUT (0).
    Direction(u8),
    /// Raw write value which is neither 0 nor 1.
    Value(u8),
    /// I2C address which does not fit into 7 bits.
    Address(u8),
    /// Write to a pin configured as input, only reported in strict mode.
    NotOutput(u8),
}

impl fmt::Display for InvalidArgument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvalidArgument::Pin(p) => write!(f, "invalid pin: {}", p),
            InvalidArgument::Direction(d) => write!(f, "invalid direction: {}", d),
            InvalidArgument::Value(v) => write!(f, "invalid value: {}", v),
            InvalidArgument::Address(a) => write!(f, "invalid i2c address: {:#04x}", a),
            InvalidArgument::NotOutput(p) => write!(f, "pin {} is not an output", p),
        }
    }
}

/// Errors reported by the expander driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    InvalidArgument(InvalidArgument),
    /// The I2C transaction failed.  Only reads report this.
    Transport(E),
}

impl<E> From<InvalidArgument> for Error<E> {
    fn from(e: InvalidArgument) -> Self {
        Error::InvalidArgument(e)
    }
}

impl<E: embedded_hal::i2c::Error> Error<E> {
    /// Bus error kind, if this is a transport failure.
    pub fn kind(&self) -> Option<embedded_hal::i2c::ErrorKind> {
        match self {
            Error::InvalidArgument(_) => None,
            Error::Transport(e) => Some(e.kind()),
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidArgument(e) => e.fmt(f),
            Error::Transport(e) => write!(f, "i2c transport failure: {:?}", e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal::i2c::ErrorKind;

    #[test]
    fn display() {
        assert_eq!(InvalidArgument::Pin(16).to_string(), "invalid pin: 16");
        assert_eq!(
            InvalidArgument::Address(0x80).to_string(),
            "invalid i2c address: 0x80"
        );
        let e: Error<ErrorKind> = Error::Transport(ErrorKind::Other);
        assert_eq!(e.to_string(), "i2c transport failure: Other");
    }

    #[test]
    fn kind() {
        let e: Error<ErrorKind> = InvalidArgument::Value(3).into();
        assert_eq!(e.kind(), None);
        let e: Error<ErrorKind> = Error::Transport(ErrorKind::Bus);
        assert_eq!(e.kind(), Some(ErrorKind::Bus));
    }
}
