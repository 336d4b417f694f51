use crate::common::{Direction, PinValue};
use crate::dev::Layout;
use crate::error::{Error, InvalidArgument};
use crate::shared::SharedExpander;
use embassy_sync::blocking_mutex::raw::RawMutex;
use embedded_hal_async::i2c::I2c;

/// Representation of a single expander pin.
///
/// `Pin` is not constructed directly, this type is created by instanciating a [`SharedExpander`]
/// and then getting access to its pins using `.pin()` or `.pins()`.  Each operation locks the
/// shared expander, so pins of the same chip can be handed out to different tasks.
pub struct Pin<'a, M: RawMutex, I2C, L> {
    pin: u8,
    expander: &'a SharedExpander<M, I2C, L>,
}

impl<'a, M, I2C, L> Pin<'a, M, I2C, L>
where
    M: RawMutex,
    I2C: I2c,
    L: Layout,
{
    pub(crate) fn new(pin: u8, expander: &'a SharedExpander<M, I2C, L>) -> Self {
        assert!(pin < L::pin_count());
        Self { pin, expander }
    }

    pub fn number(&self) -> u8 {
        self.pin
    }

    pub async fn set_mode(&mut self, dir: Direction) -> Result<(), InvalidArgument> {
        self.expander.pin_mode(self.pin, dir).await
    }

    pub async fn write(&mut self, value: impl Into<PinValue>) -> Result<(), InvalidArgument> {
        self.expander.digital_write(self.pin, value).await
    }

    pub async fn set_high(&mut self) -> Result<(), InvalidArgument> {
        self.write(true).await
    }

    pub async fn set_low(&mut self) -> Result<(), InvalidArgument> {
        self.write(false).await
    }

    pub async fn read(&self) -> Result<bool, Error<I2C::Error>> {
        self.expander.digital_read(self.pin).await
    }
}

#[cfg(test)]
mod tests {
    use crate::{Config, Direction, Mcp23017Layout, SharedExpander};
    use embassy_sync::blocking_mutex::raw::NoopRawMutex;
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[tokio::test]
    async fn pins_of_both_ports() {
        let expectations = [
            mock_i2c::Transaction::write(0x24, vec![0x00, 0xff]),
            mock_i2c::Transaction::write(0x24, vec![0x14, 0x00]),
            mock_i2c::Transaction::write(0x24, vec![0x01, 0xff]),
            mock_i2c::Transaction::write(0x24, vec![0x15, 0x00]),
            // gpa2 output high
            mock_i2c::Transaction::write(0x24, vec![0x00, 0xfb]),
            mock_i2c::Transaction::write(0x24, vec![0x14, 0x04]),
            // gpb1 output, low is a no-op, then high
            mock_i2c::Transaction::write(0x24, vec![0x01, 0xfd]),
            mock_i2c::Transaction::write(0x24, vec![0x15, 0x02]),
            mock_i2c::Transaction::write(0x24, vec![0x14, 0x00]),
            // input gpb7
            mock_i2c::Transaction::write_read(0x24, vec![0x13], vec![0x80]),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);
        let mcp: SharedExpander<NoopRawMutex, _, Mcp23017Layout> =
            SharedExpander::new(bus.clone(), Config::new(0x24))
                .await
                .unwrap();

        let mut gpa2 = mcp.pin(2).unwrap();
        let mut gpb1 = mcp.pin(9).unwrap();
        let gpb7 = mcp.pins().last().unwrap();
        assert_eq!(gpb7.number(), 15);

        gpa2.set_mode(Direction::Output).await.unwrap();
        gpa2.set_high().await.unwrap();

        gpb1.set_mode(Direction::Output).await.unwrap();
        gpb1.set_low().await.unwrap();
        gpb1.write(1u8).await.unwrap();
        gpa2.set_low().await.unwrap();

        assert!(gpb7.read().await.unwrap());

        bus.done();
    }
}
