//! Initialization Sequence
//!
//! Brings a freshly identified chip into a known state:
//!
//! 1. Default register table, written in order
//! 2. Anti-pop capacitor level
//! 3. Reference clock selector
//! 4. Extended FM band enable (only when configured)
//! 5. Audio muted
//!
//! The first failing step aborts the sequence. Registers already
//! written stay written.

use core::fmt;

use crate::config::TunerConfig;
use crate::drivers::kt0913::regs::{amsyscfg, locfgc, reg, volume, Registers};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;
use crate::radio::control;

/// Register defaults written at bring-up, in order
pub const DEFAULTS: [(u8, u16); 14] = [
    // standby off, volume 0 dB
    (reg::RXCFG, 0x881F),
    // 50 kHz FM spacing
    (reg::SEEK, 0x000B),
    // stereo, blend off
    (reg::DSPCFGA, 0x1000),
    // FM AFC on
    (reg::LOCFGA, 0x0100),
    // extended band off
    (reg::LOCFGC, 0x0024),
    // FM mode, 32.768 kHz crystal, +3 dB gain, AM AFC on
    (reg::AMSYSCFG, 0x0002),
    // 504 kHz
    (reg::AMCHAN, 0x01F8),
    (reg::GPIOCFG, 0x0000),
    // 6 kHz AM bandwidth
    (reg::AMDSP, 0xAFC4),
    (reg::SOFTMUTE, 0x0010),
    // 1 kHz AM spacing
    (reg::AMCFG, 0x1401),
    // second AM timing word lives in AMCFG2, a repeat write to AMCFG
    // would overwrite the spacing above
    (reg::AMCFG2, 0x4050),
    // tune to 86 MHz
    (reg::TUNE, 0x86B8),
    // softmute off, unmuted, 75 us, 100 uF anti-pop
    (reg::VOLUME, 0xE080),
];

/// Step of the bring-up sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum InitStep {
    /// Entry of the default table
    Defaults {
        /// Position in [`DEFAULTS`]
        index: usize,
    },
    /// Anti-pop level
    AntiPop,
    /// Reference clock selector
    RefClock,
    /// Extended FM band enable
    ExtendedBand,
    /// Final mute
    Mute,
}

impl fmt::Display for InitStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Defaults { index } => write!(f, "default entry {index}"),
            Self::AntiPop => write!(f, "anti-pop"),
            Self::RefClock => write!(f, "reference clock"),
            Self::ExtendedBand => write!(f, "extended band"),
            Self::Mute => write!(f, "mute"),
        }
    }
}

/// Bring-up failure with the step that caused it
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InitError<E> {
    /// Failing step
    pub step: InitStep,
    /// Underlying error
    pub error: Error<E>,
}

impl<E> From<InitError<E>> for Error<E> {
    fn from(err: InitError<E>) -> Self {
        err.error
    }
}

impl<E: fmt::Debug> fmt::Display for InitError<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "init step {} failed: {}", self.step, self.error)
    }
}

#[cfg(feature = "std")]
impl<E: fmt::Debug> std::error::Error for InitError<E> {}

fn at<E>(step: InitStep) -> impl FnOnce(Error<E>) -> InitError<E> {
    move |error| InitError { step, error }
}

/// Run the full bring-up sequence for `config`
pub fn run<T: RegisterTransport>(
    regs: &mut Registers<T>,
    config: &TunerConfig,
) -> Result<(), InitError<T::Error>> {
    regs.write_sequence(&DEFAULTS).map_err(|err| InitError {
        step: InitStep::Defaults { index: err.index },
        error: err.error,
    })?;

    regs.update_bits(
        reg::VOLUME,
        volume::POP_MASK,
        config.anti_pop().index() << volume::POP_SHIFT,
    )
    .map_err(at(InitStep::AntiPop))?;

    regs.update_bits(
        reg::AMSYSCFG,
        amsyscfg::REFCLK_MASK,
        config.ref_clock().index() << amsyscfg::REFCLK_SHIFT,
    )
    .map_err(at(InitStep::RefClock))?;

    if config.extended_band() {
        #[cfg(feature = "defmt")]
        defmt::info!("extended FM band enabled");
        regs.update_bits(reg::LOCFGC, locfgc::CAMPUSBAND_EN, locfgc::CAMPUSBAND_EN)
            .map_err(at(InitStep::ExtendedBand))?;
    }

    control::set_mute(regs, true).map_err(at(InitStep::Mute))
}
