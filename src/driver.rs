use crate::bus::I2cExt;
use crate::cache::RegisterCache;
use crate::common::{Direction, PinAddr, PinValue, Polarity};
use crate::config::Config;
use crate::dev::Layout;
use crate::error::{Error, InvalidArgument};
use core::marker::PhantomData;
use embedded_hal_async::i2c::I2c;

/// Diagnostic tracing, only emitted when `debug` is set in the config.
macro_rules! diag {
    ($drv:expr, $($arg:tt)+) => {
        if $drv.config.debug {
            log::debug!($($arg)+);
        }
    };
}

/// Driver for one expander chip, generic over its register [`Layout`].
///
/// The driver keeps a mirror of the direction and output registers of every port and only talks
/// to the chip when a pin operation actually changes a bit.
///
/// Register writes are fire-and-forget: the cache is updated when a write is issued and a failed
/// write is logged but not reported to the caller.  Reads report transport failures.
///
/// `digital_write()` does not check that the pin is configured as an output unless
/// [`Config::strict`] is enabled.  Making sure of this is the caller's job.
pub struct Expander<I2C, L> {
    i2c: I2C,
    config: Config,
    polarity: Polarity,
    cache: RegisterCache,
    _l: PhantomData<L>,
}

impl<I2C, L> Expander<I2C, L>
where
    I2C: I2c,
    L: Layout,
{
    /// Take ownership of the bus and put the chip into its reset state (all pins inputs, all
    /// latches low).
    pub async fn new(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        config.validate().map_err(Self::rejected)?;
        let mut expander = Self {
            i2c,
            config,
            polarity: config.polarity(),
            cache: RegisterCache::new(L::PORTS.len()),
            _l: PhantomData,
        };
        diag!(
            expander,
            "{}: bus {}, address {:#04x}",
            L::NAME,
            config.bus,
            config.address
        );
        expander.init().await;
        Ok(expander)
    }

    /// Reset every port to all-input with cleared output latches, regardless of prior state.
    pub async fn reset(&mut self) {
        self.cache.reset();
        self.init().await;
    }

    async fn init(&mut self) {
        for (port, regs) in L::PORTS.iter().enumerate() {
            self.post(regs.direction, self.cache.direction(port)).await;
            self.post(regs.output, self.cache.output(port)).await;
        }
    }

    /// Configure `pin` as input or output.
    ///
    /// Nothing is sent if the pin already has the requested direction.
    pub async fn pin_mode(&mut self, pin: u8, dir: Direction) -> Result<(), InvalidArgument> {
        let addr = self.resolve(pin).map_err(Self::rejected)?;
        let current = self.cache.direction(addr.port);

        if dir.matches(current, addr.mask()) {
            diag!(self, "pin '{}' already an {}", pin, dir);
            return Ok(());
        }

        diag!(self, "setting pin '{}' as an {}", pin, dir);
        let value = current ^ addr.mask();
        self.cache.set_direction(addr.port, value);
        self.post(L::PORTS[addr.port].direction, value).await;
        Ok(())
    }

    /// Set the output latch of `pin`.
    ///
    /// `true`/`false` are mapped through the configured polarity, `0`/`1` are written as-is.
    /// Nothing is sent if the latch already holds the requested level.
    pub async fn digital_write(
        &mut self,
        pin: u8,
        value: impl Into<PinValue>,
    ) -> Result<(), InvalidArgument> {
        let value: PinValue = value.into();
        let level = value.level(self.polarity).map_err(Self::rejected)?;
        let addr = self.resolve(pin).map_err(Self::rejected)?;

        if self.config.strict
            && !Direction::Output.matches(self.cache.direction(addr.port), addr.mask())
        {
            return Err(Self::rejected(InvalidArgument::NotOutput(pin)));
        }

        let current = self.cache.output(addr.port);
        if (current & addr.mask() != 0) == (level == 1) {
            diag!(self, "pin '{}' already at level {}", pin, level);
            return Ok(());
        }

        let value = current ^ addr.mask();
        self.cache.set_output(addr.port, value);
        self.post(L::PORTS[addr.port].output, value).await;
        Ok(())
    }

    /// Read the electrical level of `pin` from the chip.
    ///
    /// The configured polarity is not applied to the result.
    pub async fn digital_read(&mut self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        let addr = self.resolve(pin).map_err(Self::rejected)?;
        let reg = L::PORTS[addr.port].input;

        match self.i2c.read_reg(self.config.address, reg).await {
            Ok(value) => {
                diag!(self, "register: {:#04x}, read: {:#04x}", reg, value);
                Ok(value & addr.mask() != 0)
            }
            Err(e) => {
                log::error!(
                    "{}@{:#04x}: reading register {:#04x} failed: {:?}",
                    L::NAME,
                    self.config.address,
                    reg,
                    e
                );
                Err(Error::Transport(e))
            }
        }
    }

    /// Issue a register write without reporting its outcome.
    ///
    /// Failures are logged and otherwise dropped.
    async fn post(&mut self, reg: u8, value: u8) {
        diag!(self, "register: {:#04x}, value: {:#04x}", reg, value);
        if let Err(e) = self.i2c.write_reg(self.config.address, reg, value).await {
            log::error!(
                "{}@{:#04x}: writing {:#04x} to register {:#04x} failed: {:?}",
                L::NAME,
                self.config.address,
                value,
                reg,
                e
            );
        }
    }
}

impl<I2C, L: Layout> Expander<I2C, L> {
    fn rejected(e: InvalidArgument) -> InvalidArgument {
        log::warn!("{}: {}", L::NAME, e);
        e
    }

    /// Map a pin number to its port and bit.
    pub fn resolve(&self, pin: u8) -> Result<PinAddr, InvalidArgument> {
        PinAddr::resolve(pin, L::PORTS.len())
    }

    pub fn pin_count(&self) -> u8 {
        L::pin_count()
    }

    /// Electrical level that logical HIGH maps to.
    pub fn high(&self) -> u8 {
        self.polarity.high()
    }

    /// Electrical level that logical LOW maps to.
    pub fn low(&self) -> u8 {
        self.polarity.low()
    }

    /// Cached direction register of `port`.
    pub fn direction(&self, port: usize) -> Option<u8> {
        self.cache.port(port).map(|p| p.direction)
    }

    /// Cached output register of `port`.
    pub fn output(&self, port: usize) -> Option<u8> {
        self.cache.port(port).map(|p| p.output)
    }

    pub fn address(&self) -> u8 {
        self.config.address
    }

    pub fn bus_id(&self) -> u8 {
        self.config.bus
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Destroy the driver and give back the bus.
    pub fn release(self) -> I2C {
        self.i2c
    }
}
