use heapless::Vec;

/// Largest number of 8-bit ports a supported chip has.
pub const MAX_PORTS: usize = 2;

/// Direction register value after reset: every pin an input.
pub const DIRECTION_RESET: u8 = 0xff;
/// Output register value after reset: every latch low.
pub const OUTPUT_RESET: u8 = 0x00;

/// Last value issued to the registers of one port.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PortRegisters {
    pub direction: u8,
    pub output: u8,
}

impl Default for PortRegisters {
    fn default() -> Self {
        Self {
            direction: DIRECTION_RESET,
            output: OUTPUT_RESET,
        }
    }
}

/// Mirror of the direction and output registers of every port.
///
/// Values are committed when a write is issued, not when the chip acknowledges it.  After a
/// failed write the cache can therefore differ from what the hardware latched.
#[derive(Debug, Clone)]
pub(crate) struct RegisterCache {
    ports: Vec<PortRegisters, MAX_PORTS>,
}

impl RegisterCache {
    pub fn new(ports: usize) -> Self {
        assert!(ports <= MAX_PORTS);
        let mut cache = Self { ports: Vec::new() };
        for _ in 0..ports {
            // capacity checked above
            let _ = cache.ports.push(PortRegisters::default());
        }
        cache
    }

    pub fn reset(&mut self) {
        for port in self.ports.iter_mut() {
            *port = PortRegisters::default();
        }
    }

    pub fn port(&self, port: usize) -> Option<PortRegisters> {
        self.ports.get(port).copied()
    }

    pub fn direction(&self, port: usize) -> u8 {
        self.ports[port].direction
    }

    pub fn output(&self, port: usize) -> u8 {
        self.ports[port].output
    }

    pub fn set_direction(&mut self, port: usize, value: u8) {
        self.ports[port].direction = value;
    }

    pub fn set_output(&mut self, port: usize, value: u8) {
        self.ports[port].output = value;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_and_reset() {
        let mut cache = RegisterCache::new(2);
        assert_eq!(cache.direction(1), 0xff);
        assert_eq!(cache.output(1), 0x00);
        assert_eq!(cache.port(2), None);

        cache.set_direction(0, 0xf7);
        cache.set_output(1, 0x80);
        cache.reset();
        assert_eq!(cache.port(0), Some(PortRegisters::default()));
        assert_eq!(cache.port(1), Some(PortRegisters::default()));
    }
}
