use embedded_hal::i2c::I2c;

use crate::MPU6050_DEFAULT_I2C_ADDR;

/// Byte wide register access to a single device. Every call is one blocking bus transaction,
/// nothing is retried.
///
pub trait RegisterBus
{
    type Error;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error>;

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error>;
}

/// A device at a fixed address on an `embedded-hal` I2C bus.
///
pub struct I2cDevice<I2C>
{
    /// i2c channel that we actually use to communicate with the chip.
    i2c: I2C,

    /// i2c address that chip is located at.
    address: u8,
}

impl<I2C: I2c> I2cDevice<I2C>
{
    pub fn new(i2c: I2C, address: u8) -> Self {
        I2cDevice { i2c, address }
    }

    /// Device at the MPU-6050's default address (`AD0` pulled low).
    ///
    pub fn with_default_address(i2c: I2C) -> Self {
        Self::new(i2c, MPU6050_DEFAULT_I2C_ADDR)
    }

    pub fn address(&self) -> u8 {
        self.address
    }

    /// Gives the underlying bus back.
    ///
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterBus for I2cDevice<I2C>
{
    type Error = I2C::Error;

    fn read_register(&mut self, register: u8) -> Result<u8, Self::Error> {
        let mut state = [ 0u8 ];
        self.i2c.write_read(self.address, &[ register ], &mut state)?;
        Ok(state[0])
    }

    fn write_register(&mut self, register: u8, value: u8) -> Result<(), Self::Error> {
        self.i2c.write(self.address, &[ register, value ])
    }
}
