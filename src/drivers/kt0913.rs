//! KT0913 AM/FM Receiver Driver
//!
//! Owns the register cache and the band state of one attached chip and
//! exposes the complete host-facing operation surface.
//!
//! ```ignore
//! let bus = I2cBus::new(i2c);
//! let mut radio = Kt0913::init(bus, TunerConfig::new().with_anti_pop(1))?;
//! radio.set_frequency(Frequency::from_khz(98_500))?;
//! radio.set_mute(false)?;
//! ```

pub mod regs;
pub mod shared;

use heapless::Vec;

use crate::config::{TunerConfig, KT0913_CHIP_ID};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;
use crate::power::{self, PowerState, PowerStatus};
use crate::radio::control::{self, ControlOp};
use crate::radio::init;
use crate::radio::status::{self, TunerStatus};
use crate::radio::tuner::{TunerController, BAND_SLOTS};
use crate::types::{AudioGain, AudioMode, Band, BandDescriptor, Deemphasis, Frequency};

use self::regs::{reg, Registers, LAYOUT, REGISTER_WINDOW};

pub use self::shared::SharedKt0913;

/// One attached KT0913
pub struct Kt0913<T> {
    regs: Registers<T>,
    tuner: TunerController,
    config: TunerConfig,
}

impl<T: RegisterTransport> Kt0913<T> {
    /// Identify the chip on `transport` and run the bring-up sequence.
    ///
    /// Nothing is written when CHIP_ID does not match. If bring-up fails
    /// after identification, the chip is put into standby (best effort)
    /// and the bring-up error is returned.
    pub fn init(transport: T, config: TunerConfig) -> Result<Self, Error<T::Error>> {
        let mut regs = Registers::new(transport, &LAYOUT);

        let id = regs.read(reg::CHIP_ID)?;
        if id != KT0913_CHIP_ID {
            #[cfg(feature = "defmt")]
            defmt::error!("unexpected chip id 0x{:04X}", id);
            return Err(Error::IdentificationFailure { found: id });
        }
        #[cfg(feature = "defmt")]
        defmt::info!("KT0913 found, config {}", config);

        if let Err(err) = init::run(&mut regs, &config) {
            #[cfg(feature = "defmt")]
            defmt::error!("init failed at {}", err.step);
            let _ = power::set_standby(&mut regs, true);
            return Err(err.into());
        }

        Ok(Self {
            regs,
            tuner: TunerController::new(config.extended_band()),
            config,
        })
    }

    /// Site configuration applied at bring-up
    #[must_use]
    pub const fn config(&self) -> &TunerConfig {
        &self.config
    }

    /// Tune to `freq`, switching demodulator when the band changes.
    ///
    /// See [`TunerController::set_frequency`] for the partial failure
    /// case.
    pub fn set_frequency(&mut self, freq: Frequency) -> Result<(), Error<T::Error>> {
        self.tuner.set_frequency(&mut self.regs, freq)
    }

    /// Frequency programmed for the active band
    pub fn frequency(&mut self) -> Result<Frequency, Error<T::Error>> {
        self.tuner.frequency(&mut self.regs)
    }

    /// Band currently selected
    #[must_use]
    pub const fn band(&self) -> Band {
        self.tuner.band()
    }

    /// Both externally visible bands
    #[must_use]
    pub const fn enumerate_bands(&self) -> [BandDescriptor; BAND_SLOTS] {
        self.tuner.bands()
    }

    /// Descriptor of enumeration slot `index` (0 or 1)
    pub fn band_by_index(&self, index: u32) -> Result<BandDescriptor, Error<T::Error>> {
        self.tuner.band_by_index(index)
    }

    /// Mute (`true`) or unmute the audio output
    pub fn set_mute(&mut self, mute: bool) -> Result<(), Error<T::Error>> {
        control::set_mute(&mut self.regs, mute)
    }

    /// Set the volume in dB (-60 to 0)
    pub fn set_volume(&mut self, db: i8) -> Result<(), Error<T::Error>> {
        control::set_volume(&mut self.regs, db)
    }

    /// Set the audio gain in dB (-3, 0, 3 or 6)
    pub fn set_audio_gain(&mut self, db: i8) -> Result<(), Error<T::Error>> {
        let gain = AudioGain::from_db(db).ok_or(Error::InvalidArgument)?;
        control::set_audio_gain(&mut self.regs, gain)
    }

    /// Set the FM de-emphasis time constant
    pub fn set_deemphasis(&mut self, deemphasis: Deemphasis) -> Result<(), Error<T::Error>> {
        control::set_deemphasis(&mut self.regs, deemphasis)
    }

    /// Set the de-emphasis from a time constant in microseconds (50 or 75)
    pub fn set_deemphasis_us(&mut self, us: u32) -> Result<(), Error<T::Error>> {
        let deemphasis = Deemphasis::from_micros(us).ok_or(Error::InvalidArgument)?;
        self.set_deemphasis(deemphasis)
    }

    /// Select stereo (`true`) or forced mono; stereo is rejected on AM
    pub fn set_stereo_mode(&mut self, stereo: bool) -> Result<(), Error<T::Error>> {
        control::set_stereo_mode(&mut self.regs, self.tuner.band(), stereo)
    }

    /// Configured reception mode
    pub fn stereo_mode(&mut self) -> Result<AudioMode, Error<T::Error>> {
        control::stereo_mode(&mut self.regs)
    }

    /// Apply one control change
    pub fn apply_control(&mut self, op: ControlOp) -> Result<(), Error<T::Error>> {
        control::apply(&mut self.regs, op)
    }

    /// Normalized signal strength of the active demodulator (0 - 65535)
    pub fn signal_strength(&mut self) -> Result<u16, Error<T::Error>> {
        status::signal_strength(&mut self.regs, self.tuner.band())
    }

    /// Whether the synthesizer is locked
    pub fn pll_locked(&mut self) -> Result<bool, Error<T::Error>> {
        status::pll_locked(&mut self.regs)
    }

    /// Whether a stereo pilot is received (always `false` on AM)
    pub fn stereo_active(&mut self) -> Result<bool, Error<T::Error>> {
        status::stereo_active(&mut self.regs, self.tuner.band())
    }

    /// Full receiver status
    pub fn tuner_status(&mut self) -> Result<TunerStatus, Error<T::Error>> {
        status::tuner_status(&mut self.regs, self.tuner.band())
    }

    /// Enter (`true`) or leave standby
    pub fn set_standby(&mut self, standby: bool) -> Result<(), Error<T::Error>> {
        power::set_standby(&mut self.regs, standby)
    }

    /// Power state as last programmed
    pub fn power_state(&mut self) -> Result<PowerState, Error<T::Error>> {
        power::power_state(&mut self.regs)
    }

    /// Power, ready and SNR indicators
    pub fn power_status(&mut self) -> Result<PowerStatus, Error<T::Error>> {
        power::read_power_status(&mut self.regs)
    }

    /// Cached register contents in address order
    #[must_use]
    pub fn register_snapshot(&self) -> Vec<(u8, u16), REGISTER_WINDOW> {
        self.regs.snapshot()
    }

    /// Put the chip into standby (best effort) and give back the transport
    pub fn release(mut self) -> T {
        if power::set_standby(&mut self.regs, true).is_err() {
            #[cfg(feature = "defmt")]
            defmt::warn!("standby on release failed");
        }
        #[cfg(feature = "defmt")]
        defmt::info!("KT0913 released");
        self.regs.release()
    }
}
