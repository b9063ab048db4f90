//! Shadow register cache
//!
//! Mirrors device registers in RAM so read-modify-write cycles and
//! repeated reads do not cost bus traffic. The set of valid addresses
//! and the hardware-owned (volatile) subset are plain data tables.
//!
//! # Coherence
//!
//! - After a successful `write`, the cached value equals the value written.
//! - After a successful `update_bits`, the cached value equals
//!   `(old & !mask) | (value & mask)`.
//! - A failed transport write leaves the cache untouched.
//! - Volatile registers are never served from the cache.

use core::ops::RangeInclusive;

use heapless::Vec;

use crate::error::{Error, SequenceError};
use crate::hal::i2c::RegisterTransport;

/// Address map of a register-oriented device
#[derive(Debug)]
pub struct RegisterLayout {
    /// Every address the device answers to
    pub addressable: &'static [RangeInclusive<u8>],
    /// Addresses whose contents change behind the driver's back
    pub volatile: &'static [RangeInclusive<u8>],
}

impl RegisterLayout {
    /// Check whether an address may be accessed at all
    #[must_use]
    pub fn is_addressable(&self, reg: u8) -> bool {
        self.addressable.iter().any(|range| range.contains(&reg))
    }

    /// Check whether an address must always be read from hardware
    #[must_use]
    pub fn is_volatile(&self, reg: u8) -> bool {
        self.volatile.iter().any(|range| range.contains(&reg))
    }

    /// Iterate over every addressable register
    pub fn registers(&self) -> impl Iterator<Item = u8> + '_ {
        self.addressable.iter().flat_map(|range| range.clone())
    }
}

/// Register cache over a transport
///
/// `N` is the size of the address window, i.e. highest address + 1.
pub struct RegisterCache<T, const N: usize> {
    transport: T,
    layout: &'static RegisterLayout,
    values: [u16; N],
    valid: [bool; N],
}

impl<T: RegisterTransport, const N: usize> RegisterCache<T, N> {
    /// Create an empty cache; entries fill lazily
    #[must_use]
    pub fn new(transport: T, layout: &'static RegisterLayout) -> Self {
        Self {
            transport,
            layout,
            values: [0; N],
            valid: [false; N],
        }
    }

    /// Address map this cache enforces
    #[must_use]
    pub fn layout(&self) -> &'static RegisterLayout {
        self.layout
    }

    /// Map an address to its slot, rejecting anything outside the map
    fn slot(&self, reg: u8) -> Result<usize, Error<T::Error>> {
        let idx = usize::from(reg);
        if idx < N && self.layout.is_addressable(reg) {
            Ok(idx)
        } else {
            #[cfg(feature = "defmt")]
            defmt::error!("access to non-addressable register 0x{:02X}", reg);
            Err(Error::Protocol { register: reg })
        }
    }

    /// Read a register, from the cache when possible
    pub fn read(&mut self, reg: u8) -> Result<u16, Error<T::Error>> {
        let idx = self.slot(reg)?;
        let volatile = self.layout.is_volatile(reg);

        if !volatile && self.valid[idx] {
            return Ok(self.values[idx]);
        }

        let value = self.transport.read_word(reg).map_err(Error::Io)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("read 0x{:02X} -> 0x{:04X}", reg, value);

        if !volatile {
            self.values[idx] = value;
            self.valid[idx] = true;
        }
        Ok(value)
    }

    /// Write a register through to the device
    pub fn write(&mut self, reg: u8, value: u16) -> Result<(), Error<T::Error>> {
        let idx = self.slot(reg)?;

        self.transport.write_word(reg, value).map_err(Error::Io)?;
        #[cfg(feature = "defmt")]
        defmt::trace!("write 0x{:02X} <- 0x{:04X}", reg, value);

        if !self.layout.is_volatile(reg) {
            self.values[idx] = value;
            self.valid[idx] = true;
        }
        Ok(())
    }

    /// Read-modify-write the bits selected by `mask`.
    ///
    /// The bus write is skipped when the register already holds the result.
    pub fn update_bits(&mut self, reg: u8, mask: u16, value: u16) -> Result<(), Error<T::Error>> {
        let current = self.read(reg)?;
        let updated = (current & !mask) | (value & mask);

        if updated == current {
            return Ok(());
        }
        self.write(reg, updated)
    }

    /// Apply an ordered list of writes, stopping at the first failure.
    ///
    /// Entries written before the failure stay written.
    pub fn write_sequence(&mut self, entries: &[(u8, u16)]) -> Result<(), SequenceError<T::Error>> {
        for (index, &(register, value)) in entries.iter().enumerate() {
            self.write(register, value).map_err(|error| SequenceError {
                index,
                register,
                error,
            })?;
        }
        Ok(())
    }

    /// Peek at a cached value without touching the bus
    #[must_use]
    pub fn cached(&self, reg: u8) -> Option<u16> {
        let idx = usize::from(reg);
        if idx < N && self.valid[idx] {
            Some(self.values[idx])
        } else {
            None
        }
    }

    /// Forget every cached value (after a device reset or power loss)
    pub fn invalidate(&mut self) {
        self.valid.fill(false);
    }

    /// Cached entries in address order
    #[must_use]
    pub fn snapshot(&self) -> Vec<(u8, u16), N> {
        let mut entries = Vec::new();
        for (idx, (&valid, &value)) in self.valid.iter().zip(self.values.iter()).enumerate() {
            if valid {
                // idx < N and at most N entries are valid, so neither can fail
                if let Ok(reg) = u8::try_from(idx) {
                    let _ = entries.push((reg, value));
                }
            }
        }
        entries
    }

    /// Give back the transport, dropping the cache
    pub fn release(self) -> T {
        self.transport
    }
}
