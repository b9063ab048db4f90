//! I2C Bus Abstractions
//!
//! Provides blocking 16-bit register access for word-oriented chips
//! such as the KT0913. Register values travel big-endian, one register
//! per transaction.

use embedded_hal::i2c::I2c;

use crate::config::KT0913_I2C_ADDR;

/// I2C device address wrapper
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct I2cAddress(u8);

impl I2cAddress {
    /// KT0913 AM/FM receiver address
    pub const KT0913: Self = Self(KT0913_I2C_ADDR);

    /// Create from 7-bit address
    #[must_use]
    pub const fn new(addr: u8) -> Self {
        Self(addr & 0x7F)
    }

    /// Get the 7-bit address
    #[must_use]
    pub const fn addr(self) -> u8 {
        self.0
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for I2cAddress {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "0x{:02X}", self.0);
    }
}

/// Synchronous word-oriented register access.
///
/// Each call addresses exactly one 16-bit register and may block.
/// Retries and timeouts, if any, belong to the implementation.
pub trait RegisterTransport {
    /// Transport failure type
    type Error: core::fmt::Debug;

    /// Read one 16-bit register
    fn read_word(&mut self, reg: u8) -> Result<u16, Self::Error>;

    /// Write one 16-bit register
    fn write_word(&mut self, reg: u8, value: u16) -> Result<(), Self::Error>;
}

impl<T: RegisterTransport + ?Sized> RegisterTransport for &mut T {
    type Error = T::Error;

    fn read_word(&mut self, reg: u8) -> Result<u16, Self::Error> {
        (**self).read_word(reg)
    }

    fn write_word(&mut self, reg: u8, value: u16) -> Result<(), Self::Error> {
        (**self).write_word(reg, value)
    }
}

/// Register transport over an `embedded-hal` I2C bus
pub struct I2cBus<I2C> {
    i2c: I2C,
    addr: I2cAddress,
}

impl<I2C: I2c> I2cBus<I2C> {
    /// Create a bus wrapper talking to the KT0913 default address
    #[must_use]
    pub fn new(i2c: I2C) -> Self {
        Self::with_address(i2c, I2cAddress::KT0913)
    }

    /// Create a bus wrapper for a device at a custom address
    #[must_use]
    pub fn with_address(i2c: I2C, addr: I2cAddress) -> Self {
        Self { i2c, addr }
    }

    /// Device address in use
    #[must_use]
    pub const fn address(&self) -> I2cAddress {
        self.addr
    }

    /// Give back the underlying bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> RegisterTransport for I2cBus<I2C> {
    type Error = I2C::Error;

    fn read_word(&mut self, reg: u8) -> Result<u16, Self::Error> {
        let mut buf = [0u8; 2];
        self.i2c.write_read(self.addr.addr(), &[reg], &mut buf)?;
        Ok(u16::from_be_bytes(buf))
    }

    fn write_word(&mut self, reg: u8, value: u16) -> Result<(), Self::Error> {
        let [hi, lo] = value.to_be_bytes();
        self.i2c.write(self.addr.addr(), &[reg, hi, lo])
    }
}
