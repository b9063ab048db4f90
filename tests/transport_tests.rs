//! I2C Transport Tests
//!
//! Tests for the embedded-hal backed register transport: framing,
//! byte order, addressing and error pass-through.
//! Run with: cargo test --test transport_tests

use embedded_hal::i2c::{ErrorKind, ErrorType, I2c, Operation, SevenBitAddress};
use kt0913_radio::config::TunerConfig;
use kt0913_radio::drivers::kt0913::Kt0913;
use kt0913_radio::error::Error;
use kt0913_radio::hal::i2c::{I2cAddress, I2cBus, RegisterTransport};

/// Bus transaction as seen on the wire
#[derive(Clone, Debug, PartialEq, Eq)]
enum Wire {
    Write(u8, Vec<u8>),
    Read(u8, usize),
}

/// Fake I2C controller serving a 16-bit register file
#[derive(Default)]
struct FakeI2c {
    regs: Vec<(u8, u16)>,
    wire: Vec<Wire>,
    pointer: u8,
    nack: bool,
}

impl FakeI2c {
    fn with(regs: &[(u8, u16)]) -> Self {
        Self {
            regs: regs.to_vec(),
            ..Self::default()
        }
    }

    fn value(&self, reg: u8) -> u16 {
        self.regs
            .iter()
            .find(|(r, _)| *r == reg)
            .map_or(0, |(_, v)| *v)
    }

    fn store(&mut self, reg: u8, value: u16) {
        self.regs.retain(|(r, _)| *r != reg);
        self.regs.push((reg, value));
    }
}

impl ErrorType for FakeI2c {
    type Error = ErrorKind;
}

impl I2c<SevenBitAddress> for FakeI2c {
    fn transaction(&mut self, address: u8, operations: &mut [Operation<'_>]) -> Result<(), ErrorKind> {
        if self.nack {
            return Err(ErrorKind::NoAcknowledge(embedded_hal::i2c::NoAcknowledgeSource::Address));
        }
        for op in operations {
            match op {
                Operation::Write(bytes) => {
                    self.wire.push(Wire::Write(address, bytes.to_vec()));
                    if let [reg, hi, lo] = **bytes {
                        self.store(reg, u16::from_be_bytes([hi, lo]));
                    } else if let [reg] = **bytes {
                        self.pointer = reg;
                    }
                }
                Operation::Read(buf) => {
                    self.wire.push(Wire::Read(address, buf.len()));
                    let bytes = self.value(self.pointer).to_be_bytes();
                    buf.copy_from_slice(&bytes[..buf.len()]);
                }
            }
        }
        Ok(())
    }
}

// =============================================================================
// Address Tests
// =============================================================================

#[test]
fn default_address_is_kt0913() {
    let bus = I2cBus::new(FakeI2c::default());
    assert_eq!(bus.address(), I2cAddress::KT0913);
    assert_eq!(bus.address().addr(), 0x35);
}

#[test]
fn address_is_seven_bit() {
    assert_eq!(I2cAddress::new(0xB5).addr(), 0x35);
}

#[test]
fn custom_address_is_used() {
    let mut bus = I2cBus::with_address(FakeI2c::default(), I2cAddress::new(0x36));
    bus.write_word(0x04, 0x0001).unwrap();
    assert_eq!(bus.release().wire, vec![Wire::Write(0x36, vec![0x04, 0x00, 0x01])]);
}

// =============================================================================
// Framing Tests
// =============================================================================

#[test]
fn read_word_is_big_endian() {
    let mut bus = I2cBus::new(FakeI2c::with(&[(0x01, 0x544B)]));
    assert_eq!(bus.read_word(0x01), Ok(0x544B));

    let i2c = bus.release();
    assert_eq!(i2c.wire, vec![Wire::Write(0x35, vec![0x01]), Wire::Read(0x35, 2)]);
}

#[test]
fn write_word_is_one_three_byte_write() {
    let mut bus = I2cBus::new(FakeI2c::default());
    bus.write_word(0x03, 0x86B8).unwrap();

    let i2c = bus.release();
    assert_eq!(i2c.wire, vec![Wire::Write(0x35, vec![0x03, 0x86, 0xB8])]);
    assert_eq!(i2c.value(0x03), 0x86B8);
}

fn read_through<T: RegisterTransport>(mut transport: T, reg: u8) -> Result<u16, T::Error> {
    transport.read_word(reg)
}

#[test]
fn borrowed_transport_works() {
    let mut bus = I2cBus::new(FakeI2c::with(&[(0x12, 0x0800)]));
    assert_eq!(read_through(&mut bus, 0x12), Ok(0x0800));
    assert_eq!(bus.release().wire.len(), 2);
}

// =============================================================================
// Error Tests
// =============================================================================

#[test]
fn bus_errors_pass_through() {
    let mut i2c = FakeI2c::default();
    i2c.nack = true;
    let mut bus = I2cBus::new(i2c);
    assert!(matches!(bus.read_word(0x01), Err(ErrorKind::NoAcknowledge(_))));
}

#[test]
fn driver_wraps_bus_errors_as_io() {
    let mut i2c = FakeI2c::default();
    i2c.nack = true;
    let err = Kt0913::init(I2cBus::new(i2c), TunerConfig::new()).err();
    assert!(matches!(err, Some(Error::Io(ErrorKind::NoAcknowledge(_)))));
}

#[test]
fn driver_attaches_over_i2c() {
    let i2c = FakeI2c::with(&[(0x01, 0x544B)]);
    let radio = Kt0913::init(I2cBus::new(i2c), TunerConfig::new()).expect("init");
    let i2c = radio.release().release();

    // Muted, standby after release
    assert_eq!(i2c.value(0x04), 0xC080);
    assert_eq!(i2c.value(0x0F), 0x981F);
}
