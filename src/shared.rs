use crate::common::{Direction, PinValue};
use crate::config::Config;
use crate::dev::Layout;
use crate::driver::Expander;
use crate::error::{Error, InvalidArgument};
use crate::pin::Pin;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::mutex::{Mutex, MutexGuard};
use embedded_hal_async::i2c::I2c;

/// An expander that can be used from several tasks at once.
///
/// Every operation locks an async mutex around the driver for its whole duration, so two pin
/// operations on the same chip can never interleave their read-modify-write of a cached register.
/// Pick the raw mutex to fit the execution context:
///
/// | Raw mutex | Notes |
/// | --- | --- |
/// | [`NoopRawMutex`][noop] | For sharing between tasks of a single executor. |
/// | [`CriticalSectionRawMutex`][cs] | For sharing across executors or with interrupts. |
///
/// [noop]: embassy_sync::blocking_mutex::raw::NoopRawMutex
/// [cs]: embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex
pub struct SharedExpander<M: RawMutex, I2C, L> {
    inner: Mutex<M, Expander<I2C, L>>,
}

impl<M: RawMutex, I2C, L> SharedExpander<M, I2C, L> {
    pub fn from_expander(expander: Expander<I2C, L>) -> Self {
        Self {
            inner: Mutex::new(expander),
        }
    }

    /// Get exclusive access to the driver, e.g. to run several operations back to back.
    pub async fn lock(&self) -> MutexGuard<'_, M, Expander<I2C, L>> {
        self.inner.lock().await
    }

    pub fn into_inner(self) -> Expander<I2C, L> {
        self.inner.into_inner()
    }
}

impl<M, I2C, L> SharedExpander<M, I2C, L>
where
    M: RawMutex,
    I2C: I2c,
    L: Layout,
{
    pub async fn new(i2c: I2C, config: Config) -> Result<Self, Error<I2C::Error>> {
        Ok(Self::from_expander(Expander::new(i2c, config).await?))
    }

    pub async fn pin_mode(&self, pin: u8, dir: Direction) -> Result<(), InvalidArgument> {
        self.inner.lock().await.pin_mode(pin, dir).await
    }

    pub async fn digital_write(
        &self,
        pin: u8,
        value: impl Into<PinValue>,
    ) -> Result<(), InvalidArgument> {
        self.inner.lock().await.digital_write(pin, value).await
    }

    pub async fn digital_read(&self, pin: u8) -> Result<bool, Error<I2C::Error>> {
        self.inner.lock().await.digital_read(pin).await
    }

    pub async fn reset(&self) {
        self.inner.lock().await.reset().await
    }

    /// Get a handle for a single pin.
    pub fn pin(&self, pin: u8) -> Result<Pin<'_, M, I2C, L>, InvalidArgument> {
        if pin >= L::pin_count() {
            return Err(InvalidArgument::Pin(pin));
        }
        Ok(Pin::new(pin, self))
    }

    /// Handles for all pins of the chip, in order.
    pub fn pins(&self) -> impl Iterator<Item = Pin<'_, M, I2C, L>> + '_ {
        (0..L::pin_count()).map(move |n| Pin::new(n, self))
    }
}
