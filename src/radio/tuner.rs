//! Band Selection and Tuning
//!
//! Tracks which band the receiver operates in and turns tuning
//! requests into the AM/FM mode switch plus a single channel write.
//!
//! ```text
//!          AM range            FM range              extended range
//!   ┌──────────────────┐  ┌──────────────────┐  ┌────────────────────────┐
//!   │ 500 - 1710 kHz   │  │ 64 - 110 MHz     │  │ 32 - 110 MHz (opt-in)  │
//!   └────────┬─────────┘  └────────┬─────────┘  └───────────┬────────────┘
//!            ▼                     ▼                        ▼
//!           Am  ◄──────────────►  Fm  ◄────────────────►  FmExtended
//! ```
//!
//! Classification tries AM first, then the standard FM band, then the
//! extended FM band, so a frequency valid in both FM ranges always
//! lands in `Fm`.

use crate::drivers::kt0913::regs::{amchan, amsyscfg, reg, tune, Registers};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;
use crate::radio::codec;
use crate::types::{Band, BandDescriptor, Frequency};

/// Number of externally enumerated bands
pub const BAND_SLOTS: usize = 2;

/// Band state machine
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TunerController {
    band: Band,
    extended_band: bool,
}

impl TunerController {
    /// Start in the standard FM band
    #[must_use]
    pub const fn new(extended_band: bool) -> Self {
        Self {
            band: Band::Fm,
            extended_band,
        }
    }

    /// Band currently selected
    #[must_use]
    pub const fn band(&self) -> Band {
        self.band
    }

    /// Whether the extended FM band may be selected
    #[must_use]
    pub const fn extended_band(&self) -> bool {
        self.extended_band
    }

    /// Find the band serving `freq`, if any
    #[must_use]
    pub const fn classify(&self, freq: Frequency) -> Option<Band> {
        if Band::Am.contains(freq) {
            Some(Band::Am)
        } else if Band::Fm.contains(freq) {
            Some(Band::Fm)
        } else if self.extended_band && Band::FmExtended.contains(freq) {
            Some(Band::FmExtended)
        } else {
            None
        }
    }

    /// Tune to `freq` (external unit).
    ///
    /// When the band changes, the AM/FM mode bit is switched before the
    /// channel is written. If the mode switch succeeds and the channel
    /// write fails, the new band stays recorded while the hardware still
    /// holds the previous channel; the caller sees the `Io` error and
    /// should retune.
    ///
    /// Returns as soon as the channel is written; tune completion is
    /// not awaited.
    pub fn set_frequency<T: RegisterTransport>(
        &mut self,
        regs: &mut Registers<T>,
        freq: Frequency,
    ) -> Result<(), Error<T::Error>> {
        if freq.is_zero() {
            return Err(Error::InvalidArgument);
        }

        let Some(band) = self.classify(freq) else {
            #[cfg(feature = "defmt")]
            defmt::warn!("frequency {} outside every enabled band", freq);
            return Err(Error::OutOfRange { frequency: freq });
        };

        if band != self.band {
            let mode = if band.is_am() { amsyscfg::AM } else { amsyscfg::FM };
            regs.update_bits(reg::AMSYSCFG, amsyscfg::AM_FM_MASK, mode)?;
            #[cfg(feature = "defmt")]
            defmt::info!("band {} -> {}", self.band, band);
            self.band = band;
        }

        let code = codec::encode(band, freq);
        if band.is_am() {
            regs.write(reg::AMCHAN, amchan::AMTUNE | code)
        } else {
            regs.write(reg::TUNE, tune::FMTUNE | code)
        }
    }

    /// Frequency currently programmed for the active band
    pub fn frequency<T: RegisterTransport>(
        &self,
        regs: &mut Registers<T>,
    ) -> Result<Frequency, Error<T::Error>> {
        let register = if self.band.is_am() { reg::AMCHAN } else { reg::TUNE };
        let code = regs.read(register)?;
        Ok(codec::decode(self.band, code))
    }

    /// Externally visible bands: the FM variant in slot 0, AM in slot 1
    #[must_use]
    pub const fn bands(&self) -> [BandDescriptor; BAND_SLOTS] {
        let fm = if self.extended_band {
            Band::FmExtended
        } else {
            Band::Fm
        };
        [fm.descriptor(), Band::Am.descriptor()]
    }

    /// Descriptor of one enumeration slot
    pub fn band_by_index<E>(&self, index: u32) -> Result<BandDescriptor, Error<E>> {
        self.bands()
            .into_iter()
            .find(|descriptor| descriptor.index == index)
            .ok_or(Error::InvalidArgument)
    }
}

impl Default for TunerController {
    fn default() -> Self {
        Self::new(false)
    }
}
