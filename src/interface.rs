use embedded_hal::i2c::{I2c, Operation};

use crate::command::CONTROL_COMMAND;

/// 7-bit I2C address of an SSD1306 with SA0 low.
pub const DEFAULT_ADDRESS: u8 = 0x3C;

/// Byte transport to the display controller.
pub trait DisplayInterface {
    type Error;

    /// Send a single command byte.
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send `data` addressed to `register` in one transfer.
    fn write_block(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error>;
}

/// [`DisplayInterface`] over an `embedded-hal` I2C bus.
pub struct I2cInterface<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> I2cInterface<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, DEFAULT_ADDRESS)
    }

    pub fn with_address(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> DisplayInterface for I2cInterface<I2C> {
    type Error = I2C::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.write_block(CONTROL_COMMAND, &[command])
    }

    fn write_block(&mut self, register: u8, data: &[u8]) -> Result<(), Self::Error> {
        // adjacent writes go out back to back, without a repeated start
        self.i2c.transaction(
            self.address,
            &mut [Operation::Write(&[register]), Operation::Write(data)],
        )
    }
}
