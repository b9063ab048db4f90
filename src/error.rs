//! Driver error type
//!
//! Every fallible operation returns [`Error`], generic over the error
//! type of the underlying register transport.

use core::fmt;

use crate::types::Frequency;

/// Result alias used across the driver
pub type Result<T, E> = core::result::Result<T, Error<E>>;

/// KT0913 driver errors
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Error<E> {
    /// Bus transport failure, passed through untouched
    Io(E),
    /// Access to a register outside the addressable map
    Protocol {
        /// Offending register address
        register: u8,
    },
    /// Argument outside its discrete or continuous domain
    InvalidArgument,
    /// Frequency outside every enabled band
    OutOfRange {
        /// Rejected frequency
        frequency: Frequency,
    },
    /// CHIP_ID register did not contain the expected magic
    IdentificationFailure {
        /// Value read from CHIP_ID
        found: u16,
    },
}

impl<E> Error<E> {
    /// Whether the error came from the bus transport
    #[must_use]
    pub const fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "bus transport error: {e:?}"),
            Self::Protocol { register } => {
                write!(f, "register 0x{register:02X} is not addressable")
            }
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OutOfRange { frequency } => {
                write!(f, "frequency {frequency} is outside every enabled band")
            }
            Self::IdentificationFailure { found } => write!(
                f,
                "unexpected chip id 0x{found:04X} (expected 0x{:04X})",
                crate::config::KT0913_CHIP_ID
            ),
        }
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for Error<E> {}

#[cfg(feature = "defmt")]
impl<E: defmt::Format> defmt::Format for Error<E> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Io(e) => defmt::write!(f, "Io({})", e),
            Self::Protocol { register } => defmt::write!(f, "Protocol(0x{:02X})", register),
            Self::InvalidArgument => defmt::write!(f, "InvalidArgument"),
            Self::OutOfRange { frequency } => defmt::write!(f, "OutOfRange({})", frequency),
            Self::IdentificationFailure { found } => {
                defmt::write!(f, "IdentificationFailure(0x{:04X})", found);
            }
        }
    }
}

/// Failure inside an ordered register sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SequenceError<E> {
    /// Position of the failing entry in the sequence
    pub index: usize,
    /// Register the failing entry addressed
    pub register: u8,
    /// Underlying error
    pub error: Error<E>,
}

impl<E> From<SequenceError<E>> for Error<E> {
    fn from(err: SequenceError<E>) -> Self {
        err.error
    }
}

impl<E: fmt::Debug> fmt::Display for SequenceError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "sequence entry {} (register 0x{:02X}) failed: {}",
            self.index, self.register, self.error
        )
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for SequenceError<E> {}
