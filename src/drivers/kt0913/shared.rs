//! Shared KT0913 access
//!
//! One coarse lock around the whole device. Every operation, including
//! the two-step band switch in `set_frequency`, runs inside a single
//! lock acquisition, so callers in different contexts never observe or
//! produce interleaved register traffic.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::RawMutex;
use embassy_sync::blocking_mutex::Mutex;

use super::Kt0913;
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;

/// KT0913 behind a blocking mutex
///
/// Pick `M` for the contexts sharing the device, e.g.
/// `CriticalSectionRawMutex` across interrupts or threads,
/// `NoopRawMutex` inside a single executor.
pub struct SharedKt0913<M: RawMutex, T> {
    inner: Mutex<M, RefCell<Kt0913<T>>>,
}

impl<M: RawMutex, T: RegisterTransport> SharedKt0913<M, T> {
    /// Wrap an initialized device
    #[must_use]
    pub const fn new(device: Kt0913<T>) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(device)),
        }
    }

    /// Run `f` with exclusive access to the device.
    ///
    /// # Panics
    ///
    /// Panics when called again from inside `f`.
    pub fn lock<R>(&self, f: impl FnOnce(&mut Kt0913<T>) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Put the chip into standby
    pub fn suspend(&self) -> Result<(), Error<T::Error>> {
        self.lock(|dev| dev.set_standby(true))
    }

    /// Bring the chip out of standby
    pub fn resume(&self) -> Result<(), Error<T::Error>> {
        self.lock(|dev| dev.set_standby(false))
    }

    /// Take the device back out of the lock
    pub fn into_inner(self) -> Kt0913<T> {
        self.inner.into_inner().into_inner()
    }
}
