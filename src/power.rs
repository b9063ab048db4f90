//! Power Management
//!
//! Standby control through RXCFG and the power/ready/SNR indicators
//! reported in STATUSC.

use crate::drivers::kt0913::regs::{reg, rxcfg, statusc, Registers};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;

/// Receiver power state
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PowerState {
    /// Receiving
    #[default]
    Active,
    /// Low power standby, registers retained
    Standby,
}

#[cfg(feature = "defmt")]
impl defmt::Format for PowerState {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Active => defmt::write!(f, "ACTIVE"),
            Self::Standby => defmt::write!(f, "STANDBY"),
        }
    }
}

/// Decoded STATUSC word
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PowerStatus(u16);

impl PowerStatus {
    /// Wrap a raw register value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// Raw register value
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Power supply indicator
    #[must_use]
    pub const fn powered(self) -> bool {
        self.0 & statusc::PWSTATUS != 0
    }

    /// Chip finished its internal power-up
    #[must_use]
    pub const fn chip_ready(self) -> bool {
        self.0 & statusc::CHIPRDY != 0
    }

    /// FM SNR, 7 bits, unitless
    #[must_use]
    pub const fn fm_snr(self) -> u8 {
        ((self.0 & statusc::FMSNR_MASK) >> statusc::FMSNR_SHIFT) as u8
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for PowerStatus {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "pw={} rdy={} snr={}",
            self.powered(),
            self.chip_ready(),
            self.fm_snr()
        );
    }
}

/// Enter (`true`) or leave standby
pub fn set_standby<T: RegisterTransport>(
    regs: &mut Registers<T>,
    standby: bool,
) -> Result<(), Error<T::Error>> {
    let bits = if standby { rxcfg::STDBY } else { 0 };
    regs.update_bits(reg::RXCFG, rxcfg::STDBY, bits)?;
    #[cfg(feature = "defmt")]
    defmt::debug!("standby -> {}", standby);
    Ok(())
}

/// Power state as last programmed
pub fn power_state<T: RegisterTransport>(
    regs: &mut Registers<T>,
) -> Result<PowerState, Error<T::Error>> {
    let value = regs.read(reg::RXCFG)?;
    Ok(if value & rxcfg::STDBY == 0 {
        PowerState::Active
    } else {
        PowerState::Standby
    })
}

/// Read STATUSC
pub fn read_power_status<T: RegisterTransport>(
    regs: &mut Registers<T>,
) -> Result<PowerStatus, Error<T::Error>> {
    regs.read(reg::STATUSC).map(PowerStatus::from_raw)
}
