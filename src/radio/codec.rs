//! Frequency Codec
//!
//! Conversions between the external frequency unit (kHz × 16), plain
//! kHz and the per-band channel codes the chip stores in TUNE/AMCHAN.
//! Everything here is pure and testable on the host.
//!
//! # Resolution
//!
//! The chip tunes FM in 50 kHz steps (12-bit code) and AM in 1 kHz
//! steps (11-bit code). Conversions truncate toward zero, the same
//! way the hardware interprets a written channel code, so a round
//! trip through the codec snaps a frequency down to the band's grid.

use crate::config::{AM_CHANNEL_STEP_KHZ, FM_CHANNEL_STEP_KHZ, FREQ_UNITS_PER_KHZ};
use crate::drivers::kt0913::regs::{amchan, tune};
use crate::types::{Band, Frequency, Modulation};

/// External unit to kHz (truncating)
#[must_use]
pub const fn external_to_khz(external: u32) -> u32 {
    external / FREQ_UNITS_PER_KHZ
}

/// kHz to external unit
#[must_use]
pub const fn khz_to_external(khz: u32) -> u32 {
    khz * FREQ_UNITS_PER_KHZ
}

/// Channel step of a demodulator in kHz
#[must_use]
pub const fn step_khz(modulation: Modulation) -> u32 {
    match modulation {
        Modulation::Fm => FM_CHANNEL_STEP_KHZ,
        Modulation::Am => AM_CHANNEL_STEP_KHZ,
    }
}

/// Mask of the channel field for a demodulator
#[must_use]
pub const fn channel_mask(modulation: Modulation) -> u16 {
    match modulation {
        Modulation::Fm => tune::FMCHAN_MASK,
        Modulation::Am => amchan::AMCHAN_MASK,
    }
}

/// kHz to channel code
#[must_use]
pub const fn khz_to_channel(modulation: Modulation, khz: u32) -> u16 {
    let code = khz / step_khz(modulation);
    (code & channel_mask(modulation) as u32) as u16
}

/// Channel code to kHz, ignoring bits outside the channel field
#[must_use]
pub const fn channel_to_khz(modulation: Modulation, code: u16) -> u32 {
    (code & channel_mask(modulation)) as u32 * step_khz(modulation)
}

/// Encode an external frequency as the channel code for `band`
#[must_use]
pub const fn encode(band: Band, freq: Frequency) -> u16 {
    khz_to_channel(band.modulation(), external_to_khz(freq.raw()))
}

/// Decode a channel code read from the register for `band`
#[must_use]
pub const fn decode(band: Band, code: u16) -> Frequency {
    Frequency::from_raw(khz_to_external(channel_to_khz(band.modulation(), code)))
}

#[cfg(all(test, feature = "std"))]
mod tests {
    use super::*;

    #[test]
    fn external_unit_is_sixteenth_khz() {
        assert_eq!(external_to_khz(1000 * 16), 1000);
        assert_eq!(external_to_khz(1000 * 16 + 15), 1000);
        assert_eq!(khz_to_external(98_500), 1_576_000);
    }

    #[test]
    fn fm_channel_uses_50khz_steps() {
        // 98.5 MHz / 50 kHz = 1970
        assert_eq!(khz_to_channel(Modulation::Fm, 98_500), 1970);
        assert_eq!(channel_to_khz(Modulation::Fm, 1970), 98_500);
    }

    #[test]
    fn fm_channel_truncates() {
        assert_eq!(khz_to_channel(Modulation::Fm, 98_549), 1970);
        assert_eq!(channel_to_khz(Modulation::Fm, khz_to_channel(Modulation::Fm, 98_530)), 98_500);
    }

    #[test]
    fn am_channel_is_khz() {
        assert_eq!(khz_to_channel(Modulation::Am, 1000), 1000);
        assert_eq!(channel_to_khz(Modulation::Am, 1000), 1000);
    }

    #[test]
    fn decode_ignores_tune_bit() {
        // 0x86B8: tune bit + 0x6B8 (1720 * 50 kHz = 86 MHz)
        assert_eq!(decode(Band::Fm, 0x86B8), Frequency::from_khz(86_000));
        assert_eq!(decode(Band::Am, 0x8000 | 1000), Frequency::from_khz(1000));
    }
}
