use embedded_hal_async::i2c::I2c;

/// Single-byte register access on top of an async I2C bus.
pub(crate) trait I2cExt {
    type Error;

    async fn write_reg<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        value: u8,
    ) -> Result<(), Self::Error>;
    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error>;
}

impl<I2C: I2c> I2cExt for I2C {
    type Error = I2C::Error;

    async fn write_reg<R: Into<u8>>(
        &mut self,
        addr: u8,
        reg: R,
        value: u8,
    ) -> Result<(), Self::Error> {
        self.write(addr, &[reg.into(), value]).await?;
        Ok(())
    }

    async fn read_reg<R: Into<u8>>(&mut self, addr: u8, reg: R) -> Result<u8, Self::Error> {
        let mut buf = [0x00];
        self.write_read(addr, &[reg.into()], &mut buf).await?;
        Ok(buf[0])
    }
}

#[cfg(test)]
mod tests {
    use super::I2cExt;
    use embedded_hal::i2c::ErrorKind;
    use embedded_hal_mock::eh1::i2c as mock_i2c;

    #[tokio::test]
    async fn register_access() {
        let expectations = [
            mock_i2c::Transaction::write(0x20, vec![0x09, 0x5a]),
            mock_i2c::Transaction::write_read(0x20, vec![0x09], vec![0xa5]),
            mock_i2c::Transaction::write_read(0x20, vec![0x12], vec![0x00])
                .with_error(ErrorKind::Other),
        ];
        let mut bus = mock_i2c::Mock::new(&expectations);

        bus.write_reg(0x20, 0x09, 0x5a).await.unwrap();
        assert_eq!(bus.read_reg(0x20, 0x09).await.unwrap(), 0xa5);
        assert_eq!(bus.read_reg(0x20, 0x12).await, Err(ErrorKind::Other));

        bus.done();
    }
}
