//! Status Decoding
//!
//! Turns the raw STATUSA and AMSTATUSA words into lock state, stereo
//! detection and signal strength. Status registers are volatile, so
//! every query here costs a fresh bus read.
//!
//! # Signal strength
//!
//! Both demodulators report a 5-bit RSSI. It is scaled linearly onto
//! `0..=65535`. In dBm the FM value is `-100 + 3 * raw` and the AM
//! value is `-90 + 3 * raw`.

use crate::drivers::kt0913::regs::{amstatusa, dspcfga, reg, statusa, Registers};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;
use crate::types::{AudioMode, Band, Frequency};

/// Largest raw RSSI value either demodulator reports
pub const RSSI_RAW_MAX: u16 = 31;

/// Full scale of a normalized signal strength
pub const SIGNAL_FULL_SCALE: u32 = 65_535;

/// Decoded FM status word (STATUSA)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StatusA(u16);

impl StatusA {
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

    /// Crystal oscillator running
    #[must_use]
    pub const fn xtal_ok(self) -> bool {
        self.0 & statusa::XTAL_OK != 0
    }

    /// Seek/tune complete
    #[must_use]
    pub const fn tune_complete(self) -> bool {
        self.0 & statusa::STC != 0
    }

    /// Synthesizer locked
    #[must_use]
    pub const fn pll_locked(self) -> bool {
        self.0 & statusa::PLL_LOCK == statusa::PLL_LOCK
    }

    /// Local oscillator locked
    #[must_use]
    pub const fn lo_locked(self) -> bool {
        self.0 & statusa::LO_LOCK != 0
    }

    /// Stereo pilot detected
    #[must_use]
    pub const fn stereo(self) -> bool {
        self.0 & statusa::ST_MASK == statusa::ST_STEREO
    }

    /// 5-bit FM RSSI
    #[must_use]
    pub const fn rssi(self) -> u16 {
        (self.0 & statusa::FMRSSI_MASK) >> statusa::FMRSSI_SHIFT
    }

    /// FM RSSI in dBm
    #[must_use]
    pub const fn rssi_dbm(self) -> i16 {
        -100 + 3 * self.rssi() as i16
    }
}

/// Decoded AM status word (AMSTATUSA)
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AmStatusA(u16);

impl AmStatusA {
    /// Wrap a raw register value
    #[must_use]
    pub const fn from_raw(raw: u16) -> Self {
        Self(raw)
    }

    /// 5-bit AM RSSI
    #[must_use]
    pub const fn rssi(self) -> u16 {
        (self.0 & amstatusa::AMRSSI_MASK) >> amstatusa::AMRSSI_SHIFT
    }

    /// AM RSSI in dBm
    #[must_use]
    pub const fn rssi_dbm(self) -> i16 {
        -90 + 3 * self.rssi() as i16
    }
}

/// Scale a 5-bit RSSI onto `0..=65535`
#[must_use]
pub const fn normalize_rssi(raw: u16) -> u16 {
    let raw = if raw > RSSI_RAW_MAX { RSSI_RAW_MAX } else { raw };
    (raw as u32 * SIGNAL_FULL_SCALE / RSSI_RAW_MAX as u32) as u16
}

/// Read STATUSA
pub fn read_status_a<T: RegisterTransport>(
    regs: &mut Registers<T>,
) -> Result<StatusA, Error<T::Error>> {
    regs.read(reg::STATUSA).map(StatusA::from_raw)
}

/// Whether the synthesizer is locked
pub fn pll_locked<T: RegisterTransport>(regs: &mut Registers<T>) -> Result<bool, Error<T::Error>> {
    Ok(read_status_a(regs)?.pll_locked())
}

/// Whether a stereo pilot is received.
///
/// Always `false` on AM, without touching the bus.
pub fn stereo_active<T: RegisterTransport>(
    regs: &mut Registers<T>,
    band: Band,
) -> Result<bool, Error<T::Error>> {
    if band.is_am() {
        return Ok(false);
    }
    Ok(read_status_a(regs)?.stereo())
}

/// Raw 5-bit RSSI of the demodulator serving `band`
pub fn raw_rssi<T: RegisterTransport>(
    regs: &mut Registers<T>,
    band: Band,
) -> Result<u16, Error<T::Error>> {
    if band.is_am() {
        regs.read(reg::AMSTATUSA).map(|raw| AmStatusA::from_raw(raw).rssi())
    } else {
        Ok(read_status_a(regs)?.rssi())
    }
}

/// Normalized signal strength for `band`
pub fn signal_strength<T: RegisterTransport>(
    regs: &mut Registers<T>,
    band: Band,
) -> Result<u16, Error<T::Error>> {
    raw_rssi(regs, band).map(normalize_rssi)
}

/// Snapshot of the receiver as reported to the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TunerStatus {
    /// Band currently selected
    pub band: Band,
    /// Sub-channels the tuner is configured to receive
    pub rx_subchannels: AudioMode,
    /// Sub-channels actually detected
    pub audio_mode: AudioMode,
    /// Normalized signal strength
    pub signal: u16,
    /// Automatic frequency control engaged (always on for this chip)
    pub afc: bool,
    /// Lowest frequency the tuner covers in any band
    pub range_low: Frequency,
    /// Highest frequency the tuner covers in any band
    pub range_high: Frequency,
}

/// Collect a [`TunerStatus`] for `band`
pub fn tuner_status<T: RegisterTransport>(
    regs: &mut Registers<T>,
    band: Band,
) -> Result<TunerStatus, Error<T::Error>> {
    let (rx_subchannels, audio_mode) = if band.is_am() {
        (AudioMode::Mono, AudioMode::Mono)
    } else {
        let configured = if regs.read(reg::DSPCFGA)? & dspcfga::MONO_MASK == dspcfga::MONO {
            AudioMode::Mono
        } else {
            AudioMode::Stereo
        };
        let detected = if read_status_a(regs)?.stereo() {
            AudioMode::Stereo
        } else {
            AudioMode::Mono
        };
        (configured, detected)
    };

    Ok(TunerStatus {
        band,
        rx_subchannels,
        audio_mode,
        signal: signal_strength(regs, band)?,
        afc: true,
        range_low: Band::Am.range_low(),
        range_high: Band::Fm.range_high(),
    })
}
