//! KT0913 register map
//!
//! Addresses, field masks and the address tables consumed by the
//! register cache. All registers are 16 bits wide, big-endian on the bus.

#![allow(missing_docs)]

use crate::hal::regmap::{RegisterCache, RegisterLayout};

/// KT0913 register addresses
pub mod reg {
    pub const CHIP_ID: u8 = 0x01;
    pub const SEEK: u8 = 0x02;
    pub const TUNE: u8 = 0x03;
    pub const VOLUME: u8 = 0x04;
    pub const DSPCFGA: u8 = 0x05;
    pub const LOCFGA: u8 = 0x0A;
    pub const LOCFGC: u8 = 0x0C;
    pub const RXCFG: u8 = 0x0F;
    pub const STATUSA: u8 = 0x12;
    pub const STATUSB: u8 = 0x13;
    pub const STATUSC: u8 = 0x14;
    pub const AMSYSCFG: u8 = 0x16;
    pub const AMCHAN: u8 = 0x17;
    pub const AMCALI: u8 = 0x18;
    pub const GPIOCFG: u8 = 0x1D;
    pub const AMDSP: u8 = 0x22;
    pub const AMSTATUSA: u8 = 0x24;
    pub const AMSTATUSB: u8 = 0x25;
    pub const SOFTMUTE: u8 = 0x2E;
    pub const AMCFG: u8 = 0x33;
    pub const AMCFG2: u8 = 0x34;
    pub const AFC: u8 = 0x3C;
}

/// TUNE: FM tune enable and channel
pub mod tune {
    /// Start tuning to the written channel
    pub const FMTUNE: u16 = 0x8000;
    /// Channel in 50 kHz steps
    pub const FMCHAN_MASK: u16 = 0x0FFF;
}

/// VOLUME: mute, de-emphasis, anti-pop
pub mod volume {
    /// Mute control, active low
    pub const DMUTE_MASK: u16 = 0x2000;
    /// Audio muted
    pub const DMUTE_ON: u16 = 0x0000;
    /// Audio playing
    pub const DMUTE_OFF: u16 = 0x2000;
    /// De-emphasis time constant
    pub const DE_MASK: u16 = 0x0800;
    pub const DE_75US: u16 = 0x0000;
    pub const DE_50US: u16 = 0x0800;
    /// Audio DAC anti-pop capacitor
    pub const POP_MASK: u16 = 0x0030;
    pub const POP_SHIFT: u16 = 4;
}

/// DSPCFGA: mono select
pub mod dspcfga {
    pub const MONO_MASK: u16 = 0x8000;
    pub const MONO: u16 = 0x8000;
    pub const STEREO: u16 = 0x0000;
}

/// LOCFGC: extended ("campus") FM band enable
pub mod locfgc {
    pub const CAMPUSBAND_EN: u16 = 0x0008;
}

/// RXCFG: standby and volume
pub mod rxcfg {
    pub const STDBY: u16 = 0x1000;
    /// Volume field, 1 (-60 dB) to 31 (0 dB)
    pub const VOLUME_MASK: u16 = 0x001F;
}

/// STATUSA: FM status
pub mod statusa {
    pub const XTAL_OK: u16 = 0x8000;
    /// Seek/tune complete
    pub const STC: u16 = 0x4000;
    pub const PLL_LOCK: u16 = 0x0800;
    pub const LO_LOCK: u16 = 0x0400;
    /// Stereo indicator, both bits set means stereo
    pub const ST_MASK: u16 = 0x0300;
    pub const ST_STEREO: u16 = 0x0300;
    /// FM RSSI, -100 dBm + 3 dBm per step
    pub const FMRSSI_MASK: u16 = 0x00F8;
    pub const FMRSSI_SHIFT: u16 = 3;
}

/// STATUSC: power and FM SNR
pub mod statusc {
    pub const PWSTATUS: u16 = 0x8000;
    pub const CHIPRDY: u16 = 0x2000;
    pub const FMSNR_MASK: u16 = 0x1FC0;
    pub const FMSNR_SHIFT: u16 = 6;
}

/// AMSYSCFG: demodulator, reference clock, audio gain
pub mod amsyscfg {
    pub const AM_FM_MASK: u16 = 0x8000;
    pub const AM: u16 = 0x8000;
    pub const FM: u16 = 0x0000;
    pub const REFCLK_MASK: u16 = 0x0F00;
    pub const REFCLK_SHIFT: u16 = 8;
    pub const AU_GAIN_MASK: u16 = 0x00C0;
    pub const AU_GAIN_6DB: u16 = 0x0040;
    pub const AU_GAIN_3DB: u16 = 0x0000;
    pub const AU_GAIN_0DB: u16 = 0x00C0;
    pub const AU_GAIN_MINUS_3DB: u16 = 0x0080;
}

/// AMCHAN: AM tune enable and channel
pub mod amchan {
    pub const AMTUNE: u16 = 0x8000;
    /// Channel in 1 kHz steps
    pub const AMCHAN_MASK: u16 = 0x07FF;
}

/// AMSTATUSA: AM status
pub mod amstatusa {
    /// AM RSSI, -90 dBm + 3 dBm per step
    pub const AMRSSI_MASK: u16 = 0x1F00;
    pub const AMRSSI_SHIFT: u16 = 8;
}

/// Size of the register window (highest address + 1)
pub const REGISTER_WINDOW: usize = 0x3D;

/// Addresses the chip answers to
static ADDRESSABLE: [core::ops::RangeInclusive<u8>; 13] = [
    0x01..=0x05,
    0x0A..=0x0A,
    0x0C..=0x0C,
    0x0F..=0x0F,
    0x12..=0x14,
    0x16..=0x18,
    0x1D..=0x1D,
    0x22..=0x22,
    0x24..=0x25,
    0x2E..=0x2F,
    0x30..=0x34,
    0x3A..=0x3A,
    0x3C..=0x3C,
];

/// Identification and status registers owned by the chip
static VOLATILE: [core::ops::RangeInclusive<u8>; 3] = [
    0x01..=0x01,
    0x12..=0x14,
    0x24..=0x25,
];

/// KT0913 address map
pub static LAYOUT: RegisterLayout = RegisterLayout {
    addressable: &ADDRESSABLE,
    volatile: &VOLATILE,
};

/// Register cache sized for the KT0913
pub type Registers<T> = RegisterCache<T, REGISTER_WINDOW>;
