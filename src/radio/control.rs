//! Audio Controls
//!
//! Mute, volume, audio gain, de-emphasis and mono/stereo selection.
//! Every control is a masked read-modify-write of one register, so
//! unrelated bits keep whatever the init sequence or a previous
//! control put there. Arguments are validated before any bus access.

use crate::config::{VOLUME_MAX_DB, VOLUME_MIN_DB};
use crate::drivers::kt0913::regs::{amsyscfg, dspcfga, reg, rxcfg, volume, Registers};
use crate::error::Error;
use crate::hal::i2c::RegisterTransport;
use crate::types::{AudioGain, AudioMode, Band, Deemphasis};

/// A single control change requested by the host
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ControlOp {
    /// Mute (`true`) or unmute the audio output
    Mute(bool),
    /// Volume in dB, -60 to 0
    Volume(i8),
    /// Audio gain in dB, one of -3, 0, 3, 6
    Gain(i8),
    /// FM de-emphasis time constant
    Deemphasis(Deemphasis),
}

/// RXCFG volume field for a level in dB.
///
/// The chip has 2 dB steps; odd values share the field of the even
/// level just above them.
#[must_use]
pub const fn volume_field(db: i8) -> Option<u16> {
    if db < VOLUME_MIN_DB || db > VOLUME_MAX_DB {
        return None;
    }
    Some((db / 2 + 31) as u16)
}

/// AMSYSCFG gain bits for a setting
#[must_use]
pub const fn gain_bits(gain: AudioGain) -> u16 {
    match gain {
        AudioGain::Plus6dB => amsyscfg::AU_GAIN_6DB,
        AudioGain::Plus3dB => amsyscfg::AU_GAIN_3DB,
        AudioGain::Zero => amsyscfg::AU_GAIN_0DB,
        AudioGain::Minus3dB => amsyscfg::AU_GAIN_MINUS_3DB,
    }
}

/// VOLUME de-emphasis bit for a time constant
#[must_use]
pub const fn deemphasis_bits(deemphasis: Deemphasis) -> u16 {
    match deemphasis {
        Deemphasis::Us75 => volume::DE_75US,
        Deemphasis::Us50 => volume::DE_50US,
    }
}

/// Mute or unmute the audio output (DMUTE is active low)
pub fn set_mute<T: RegisterTransport>(
    regs: &mut Registers<T>,
    mute: bool,
) -> Result<(), Error<T::Error>> {
    let bits = if mute { volume::DMUTE_ON } else { volume::DMUTE_OFF };
    regs.update_bits(reg::VOLUME, volume::DMUTE_MASK, bits)
}

/// Set the output volume in dB
pub fn set_volume<T: RegisterTransport>(
    regs: &mut Registers<T>,
    db: i8,
) -> Result<(), Error<T::Error>> {
    let field = volume_field(db).ok_or(Error::InvalidArgument)?;
    regs.update_bits(reg::RXCFG, rxcfg::VOLUME_MASK, field)
}

/// Set the audio gain
pub fn set_audio_gain<T: RegisterTransport>(
    regs: &mut Registers<T>,
    gain: AudioGain,
) -> Result<(), Error<T::Error>> {
    regs.update_bits(reg::AMSYSCFG, amsyscfg::AU_GAIN_MASK, gain_bits(gain))
}

/// Set the FM de-emphasis time constant
pub fn set_deemphasis<T: RegisterTransport>(
    regs: &mut Registers<T>,
    deemphasis: Deemphasis,
) -> Result<(), Error<T::Error>> {
    regs.update_bits(reg::VOLUME, volume::DE_MASK, deemphasis_bits(deemphasis))
}

/// Select stereo (`true`) or forced mono reception.
///
/// Stereo cannot be requested while the AM demodulator is active.
pub fn set_stereo_mode<T: RegisterTransport>(
    regs: &mut Registers<T>,
    band: Band,
    stereo: bool,
) -> Result<(), Error<T::Error>> {
    if stereo && band.is_am() {
        return Err(Error::InvalidArgument);
    }
    let bits = if stereo { dspcfga::STEREO } else { dspcfga::MONO };
    regs.update_bits(reg::DSPCFGA, dspcfga::MONO_MASK, bits)
}

/// Configured reception mode
pub fn stereo_mode<T: RegisterTransport>(
    regs: &mut Registers<T>,
) -> Result<AudioMode, Error<T::Error>> {
    let value = regs.read(reg::DSPCFGA)?;
    Ok(if value & dspcfga::MONO_MASK == dspcfga::MONO {
        AudioMode::Mono
    } else {
        AudioMode::Stereo
    })
}

/// Dispatch one control change
pub fn apply<T: RegisterTransport>(
    regs: &mut Registers<T>,
    op: ControlOp,
) -> Result<(), Error<T::Error>> {
    match op {
        ControlOp::Mute(mute) => set_mute(regs, mute),
        ControlOp::Volume(db) => set_volume(regs, db),
        ControlOp::Gain(db) => {
            let gain = AudioGain::from_db(db).ok_or(Error::InvalidArgument)?;
            set_audio_gain(regs, gain)
        }
        ControlOp::Deemphasis(deemphasis) => set_deemphasis(regs, deemphasis),
    }
}
