//! System configuration and hardware constants
//!
//! Compile-time constants for the KT0913 receiver and the site
//! configuration that is handed to [`crate::drivers::kt0913::Kt0913::init`].

use crate::types::{AntiPop, RefClock};

/// KT0913 7-bit I2C address
pub const KT0913_I2C_ADDR: u8 = 0x35;

/// I2C bus frequency used by the firmware binary
pub const I2C_FREQUENCY_HZ: u32 = 400_000;

/// Expected CHIP_ID register contents (ASCII "KT")
pub const KT0913_CHIP_ID: u16 = 0x544B;

/// External frequency unit multiplier (external = kHz × 16)
pub const FREQ_UNITS_PER_KHZ: u32 = 16;

/// FM channel resolution in kHz
pub const FM_CHANNEL_STEP_KHZ: u32 = 50;

/// AM channel resolution in kHz
pub const AM_CHANNEL_STEP_KHZ: u32 = 1;

/// Lower edge of the standard FM band (64 MHz)
pub const FM_RANGE_LOW_KHZ: u32 = 64_000;

/// Lower edge of the extended ("campus") FM band (32 MHz)
pub const FM_EXTENDED_RANGE_LOW_KHZ: u32 = 32_000;

/// Upper edge of both FM bands (110 MHz)
pub const FM_RANGE_HIGH_KHZ: u32 = 110_000;

/// Lower edge of the AM band
pub const AM_RANGE_LOW_KHZ: u32 = 500;

/// Upper edge of the AM band
pub const AM_RANGE_HIGH_KHZ: u32 = 1_710;

/// Lowest accepted volume in dB
pub const VOLUME_MIN_DB: i8 = -60;

/// Highest accepted volume in dB
pub const VOLUME_MAX_DB: i8 = 0;

/// Volume control step in dB
pub const VOLUME_STEP_DB: i8 = 2;

/// Control defaults exposed to the host side
pub mod defaults {
    //! Initial control values published by the driver

    use crate::types::{AudioGain, Deemphasis};

    /// Bring-up always ends muted
    pub const MUTE: bool = true;

    /// Volume in dB
    pub const VOLUME_DB: i8 = 0;

    /// Audio gain
    pub const AUDIO_GAIN: AudioGain = AudioGain::Plus3dB;

    /// De-emphasis time constant
    pub const DEEMPHASIS: Deemphasis = Deemphasis::Us75;
}

/// Status polling period of the firmware binary in milliseconds
pub const STATUS_POLL_MS: u64 = 1_000;

/// Site configuration applied once at bring-up
///
/// Raw values coming from board description data are clamped
/// into range by the builder methods, never rejected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TunerConfig {
    extended_band: bool,
    anti_pop: AntiPop,
    ref_clock: RefClock,
}

impl TunerConfig {
    /// Configuration with every option at its default
    #[must_use]
    pub const fn new() -> Self {
        Self {
            extended_band: false,
            anti_pop: AntiPop::Cap100uF,
            ref_clock: RefClock::Khz32_768,
        }
    }

    /// Enable or disable the extended FM band (32 - 110 MHz)
    #[must_use]
    pub const fn with_extended_band(self, enabled: bool) -> Self {
        Self {
            extended_band: enabled,
            ..self
        }
    }

    /// Set the anti-pop level (0 - 3, larger values clamp to 3)
    #[must_use]
    pub const fn with_anti_pop(self, level: u32) -> Self {
        Self {
            anti_pop: AntiPop::from_index_clamped(level),
            ..self
        }
    }

    /// Set the reference clock selector (0 - 9, larger values clamp to 9)
    #[must_use]
    pub const fn with_ref_clock(self, selector: u32) -> Self {
        Self {
            ref_clock: RefClock::from_index_clamped(selector),
            ..self
        }
    }

    /// Whether the extended FM band is enabled
    #[must_use]
    pub const fn extended_band(&self) -> bool {
        self.extended_band
    }

    /// Anti-pop capacitor setting
    #[must_use]
    pub const fn anti_pop(&self) -> AntiPop {
        self.anti_pop
    }

    /// Reference clock source
    #[must_use]
    pub const fn ref_clock(&self) -> RefClock {
        self.ref_clock
    }
}
