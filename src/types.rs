//! Shared types used across the KT0913 driver
//!
//! This module defines domain-specific types that enforce invariants
//! at compile time and provide type safety throughout the codebase.

use core::fmt;

use crate::config::{
    AM_RANGE_HIGH_KHZ, AM_RANGE_LOW_KHZ, FM_EXTENDED_RANGE_LOW_KHZ, FM_RANGE_HIGH_KHZ,
    FM_RANGE_LOW_KHZ, FREQ_UNITS_PER_KHZ,
};

/// Tuning frequency in the external fixed-point unit (kHz × 16)
///
/// This is the unit the host side speaks. The chip itself only
/// understands channel codes, see [`crate::radio::codec`].
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Frequency(u32);

impl Frequency {
    /// The zero frequency (never a valid tuning request)
    pub const ZERO: Self = Self(0);

    /// Create from a raw external value (kHz × 16)
    #[must_use]
    pub const fn from_raw(raw: u32) -> Self {
        Self(raw)
    }

    /// Create from whole kHz
    #[must_use]
    pub const fn from_khz(khz: u32) -> Self {
        Self(khz.saturating_mul(FREQ_UNITS_PER_KHZ))
    }

    /// Create from whole MHz
    #[must_use]
    pub const fn from_mhz(mhz: u32) -> Self {
        Self::from_khz(mhz.saturating_mul(1000))
    }

    /// Get the raw external value (kHz × 16)
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Get the frequency in kHz (truncated)
    #[must_use]
    pub const fn as_khz(self) -> u32 {
        self.0 / FREQ_UNITS_PER_KHZ
    }

    /// Check for the zero frequency
    #[must_use]
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }
}

impl fmt::Debug for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Frequency({} kHz)", self.as_khz())
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} kHz", self.as_khz())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Frequency {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} kHz", self.as_khz());
    }
}

/// Demodulator kind selected by the AM/FM mode bit
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Modulation {
    /// Frequency modulation (stereo capable)
    Fm,
    /// Amplitude modulation (mono only)
    Am,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Modulation {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Fm => defmt::write!(f, "FM"),
            Self::Am => defmt::write!(f, "AM"),
        }
    }
}

/// Frequency band the receiver is operating in
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Band {
    /// Broadcast FM (64 - 110 MHz)
    #[default]
    Fm,
    /// Extended ("campus") FM (32 - 110 MHz)
    FmExtended,
    /// Medium wave AM (500 - 1710 kHz)
    Am,
}

impl Band {
    /// Lower band edge in kHz
    #[must_use]
    pub const fn low_khz(self) -> u32 {
        match self {
            Self::Fm => FM_RANGE_LOW_KHZ,
            Self::FmExtended => FM_EXTENDED_RANGE_LOW_KHZ,
            Self::Am => AM_RANGE_LOW_KHZ,
        }
    }

    /// Upper band edge in kHz
    #[must_use]
    pub const fn high_khz(self) -> u32 {
        match self {
            Self::Fm | Self::FmExtended => FM_RANGE_HIGH_KHZ,
            Self::Am => AM_RANGE_HIGH_KHZ,
        }
    }

    /// Lower band edge in the external unit
    #[must_use]
    pub const fn range_low(self) -> Frequency {
        Frequency::from_khz(self.low_khz())
    }

    /// Upper band edge in the external unit
    #[must_use]
    pub const fn range_high(self) -> Frequency {
        Frequency::from_khz(self.high_khz())
    }

    /// Check whether a frequency lies inside this band (edges included)
    #[must_use]
    pub const fn contains(self, freq: Frequency) -> bool {
        freq.raw() >= self.range_low().raw() && freq.raw() <= self.range_high().raw()
    }

    /// Demodulator used on this band
    #[must_use]
    pub const fn modulation(self) -> Modulation {
        match self {
            Self::Fm | Self::FmExtended => Modulation::Fm,
            Self::Am => Modulation::Am,
        }
    }

    /// Whether this band runs the AM demodulator
    #[must_use]
    pub const fn is_am(self) -> bool {
        matches!(self, Self::Am)
    }

    /// Index under which the band is enumerated externally.
    ///
    /// Both FM variants share slot 0.
    #[must_use]
    pub const fn external_index(self) -> u32 {
        match self {
            Self::Fm | Self::FmExtended => 0,
            Self::Am => 1,
        }
    }

    /// Build the externally visible descriptor
    #[must_use]
    pub const fn descriptor(self) -> BandDescriptor {
        BandDescriptor {
            index: self.external_index(),
            band: self,
            range_low: self.range_low(),
            range_high: self.range_high(),
            modulation: self.modulation(),
            stereo: matches!(self.modulation(), Modulation::Fm),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Band {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Fm => defmt::write!(f, "FM"),
            Self::FmExtended => defmt::write!(f, "FM-EXT"),
            Self::Am => defmt::write!(f, "AM"),
        }
    }
}

/// Externally visible band description
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BandDescriptor {
    /// Enumeration slot (0 = FM variant, 1 = AM)
    pub index: u32,
    /// Internal band this slot currently maps to
    pub band: Band,
    /// Lowest tunable frequency
    pub range_low: Frequency,
    /// Highest tunable frequency
    pub range_high: Frequency,
    /// Demodulator kind
    pub modulation: Modulation,
    /// Stereo reception capability
    pub stereo: bool,
}

/// Audio output gain
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AudioGain {
    /// -3 dB
    Minus3dB,
    /// 0 dB
    Zero,
    /// +3 dB (chip default)
    #[default]
    Plus3dB,
    /// +6 dB
    Plus6dB,
}

impl AudioGain {
    /// Map a gain in dB to one of the four supported settings
    #[must_use]
    pub const fn from_db(db: i8) -> Option<Self> {
        match db {
            -3 => Some(Self::Minus3dB),
            0 => Some(Self::Zero),
            3 => Some(Self::Plus3dB),
            6 => Some(Self::Plus6dB),
            _ => None,
        }
    }

    /// Gain in dB
    #[must_use]
    pub const fn db(self) -> i8 {
        match self {
            Self::Minus3dB => -3,
            Self::Zero => 0,
            Self::Plus3dB => 3,
            Self::Plus6dB => 6,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AudioGain {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}dB", self.db());
    }
}

/// FM de-emphasis time constant
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Deemphasis {
    /// 75 µs (Americas, Korea)
    #[default]
    Us75,
    /// 50 µs (Europe, Asia, Australia)
    Us50,
}

impl Deemphasis {
    /// Map a time constant in microseconds
    #[must_use]
    pub const fn from_micros(us: u32) -> Option<Self> {
        match us {
            75 => Some(Self::Us75),
            50 => Some(Self::Us50),
            _ => None,
        }
    }

    /// Time constant in microseconds
    #[must_use]
    pub const fn micros(self) -> u32 {
        match self {
            Self::Us75 => 75,
            Self::Us50 => 50,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Deemphasis {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{}us", self.micros());
    }
}

/// Mono/stereo audio mode
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AudioMode {
    /// Single channel
    Mono,
    /// Left/right channels
    Stereo,
}

/// Audio DAC anti-pop capacitor setting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AntiPop {
    /// 100 µF (default)
    #[default]
    Cap100uF,
    /// 60 µF
    Cap60uF,
    /// 20 µF
    Cap20uF,
    /// 10 µF
    Cap10uF,
}

impl AntiPop {
    /// Highest valid level index
    pub const MAX_INDEX: u32 = 3;

    /// Build from a raw level, clamping values above 3
    #[must_use]
    pub const fn from_index_clamped(index: u32) -> Self {
        match index {
            0 => Self::Cap100uF,
            1 => Self::Cap60uF,
            2 => Self::Cap20uF,
            _ => Self::Cap10uF,
        }
    }

    /// Level index as written to the chip
    #[must_use]
    pub const fn index(self) -> u16 {
        match self {
            Self::Cap100uF => 0,
            Self::Cap60uF => 1,
            Self::Cap20uF => 2,
            Self::Cap10uF => 3,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AntiPop {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Self::Cap100uF => defmt::write!(f, "100uF"),
            Self::Cap60uF => defmt::write!(f, "60uF"),
            Self::Cap20uF => defmt::write!(f, "20uF"),
            Self::Cap10uF => defmt::write!(f, "10uF"),
        }
    }
}

/// Reference clock source
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum RefClock {
    /// 32.768 kHz crystal (default)
    #[default]
    Khz32_768,
    /// 6.5 MHz
    Mhz6_5,
    /// 7.6 MHz
    Mhz7_6,
    /// 12 MHz
    Mhz12,
    /// 13 MHz
    Mhz13,
    /// 15.2 MHz
    Mhz15_2,
    /// 19.2 MHz
    Mhz19_2,
    /// 24 MHz
    Mhz24,
    /// 26 MHz
    Mhz26,
    /// 38 kHz
    Khz38,
}

impl RefClock {
    /// Highest valid selector index
    pub const MAX_INDEX: u32 = 9;

    /// Build from a raw selector, clamping values above 9
    #[must_use]
    pub const fn from_index_clamped(index: u32) -> Self {
        match index {
            0 => Self::Khz32_768,
            1 => Self::Mhz6_5,
            2 => Self::Mhz7_6,
            3 => Self::Mhz12,
            4 => Self::Mhz13,
            5 => Self::Mhz15_2,
            6 => Self::Mhz19_2,
            7 => Self::Mhz24,
            8 => Self::Mhz26,
            _ => Self::Khz38,
        }
    }

    /// Selector index as written to the chip
    #[must_use]
    pub const fn index(self) -> u16 {
        match self {
            Self::Khz32_768 => 0,
            Self::Mhz6_5 => 1,
            Self::Mhz7_6 => 2,
            Self::Mhz12 => 3,
            Self::Mhz13 => 4,
            Self::Mhz15_2 => 5,
            Self::Mhz19_2 => 6,
            Self::Mhz24 => 7,
            Self::Mhz26 => 8,
            Self::Khz38 => 9,
        }
    }

    /// Clock frequency in Hz
    #[must_use]
    pub const fn hz(self) -> u32 {
        match self {
            Self::Khz32_768 => 32_768,
            Self::Mhz6_5 => 6_500_000,
            Self::Mhz7_6 => 7_600_000,
            Self::Mhz12 => 12_000_000,
            Self::Mhz13 => 13_000_000,
            Self::Mhz15_2 => 15_200_000,
            Self::Mhz19_2 => 19_200_000,
            Self::Mhz24 => 24_000_000,
            Self::Mhz26 => 26_000_000,
            Self::Khz38 => 38_000,
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for RefClock {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "{} Hz", self.hz());
    }
}
