//! Frequency Codec Tests
//!
//! Tests for conversions between the external unit, kHz and channel codes.
//! Run with: cargo test --test codec_tests

use kt0913_radio::radio::codec::*;
use kt0913_radio::types::{Band, Frequency, Modulation};

// =============================================================================
// External Unit Tests
// =============================================================================

#[test]
fn external_round_trip_on_whole_khz() {
    for khz in [500, 1_000, 1_710, 32_000, 64_000, 98_500, 110_000] {
        assert_eq!(external_to_khz(khz_to_external(khz)), khz);
    }
}

#[test]
fn external_to_khz_truncates() {
    // 1000.9375 kHz
    assert_eq!(external_to_khz(16_015), 1000);
}

// =============================================================================
// FM Channel Tests
// =============================================================================

#[test]
fn fm_round_trip_on_grid() {
    // Every 50 kHz channel of the extended FM band
    for code in 640u16..=2_200 {
        let khz = channel_to_khz(Modulation::Fm, code);
        assert_eq!(khz_to_channel(Modulation::Fm, khz), code);
    }
}

#[test]
fn fm_off_grid_snaps_down() {
    for khz in [98_501, 98_525, 98_549] {
        assert_eq!(channel_to_khz(Modulation::Fm, khz_to_channel(Modulation::Fm, khz)), 98_500);
    }
}

#[test]
fn fm_channel_is_masked_to_twelve_bits() {
    // 250 MHz / 50 kHz = 5000 = 0x1388, only 0x388 fits
    assert_eq!(khz_to_channel(Modulation::Fm, 250_000), 0x0388);
}

#[test]
fn fm_channel_ignores_upper_bits() {
    assert_eq!(channel_to_khz(Modulation::Fm, 0xF000 | 1970), 98_500);
}

// =============================================================================
// AM Channel Tests
// =============================================================================

#[test]
fn am_round_trip_across_band() {
    for khz in 500..=1_710 {
        assert_eq!(channel_to_khz(Modulation::Am, khz_to_channel(Modulation::Am, khz)), khz);
    }
}

#[test]
fn am_channel_is_masked_to_eleven_bits() {
    assert_eq!(khz_to_channel(Modulation::Am, 0x0800 | 1000), 1000);
    assert_eq!(channel_to_khz(Modulation::Am, 0x8000 | 0x0800 | 1000), 1000);
}

// =============================================================================
// Band Encoding Tests
// =============================================================================

#[test]
fn encode_follows_band_modulation() {
    let freq = Frequency::from_khz(1_000);
    assert_eq!(encode(Band::Am, freq), 1_000);
    assert_eq!(encode(Band::Fm, freq), 20);
}

#[test]
fn extended_band_shares_fm_resolution() {
    let freq = Frequency::from_khz(40_000);
    assert_eq!(encode(Band::FmExtended, freq), encode(Band::Fm, freq));
    assert_eq!(encode(Band::FmExtended, freq), 800);
}

#[test]
fn decode_returns_external_unit() {
    assert_eq!(decode(Band::Fm, 1970).raw(), 98_500 * 16);
    assert_eq!(decode(Band::Am, 1000).raw(), 1000 * 16);
}

#[test]
fn sub_khz_fraction_is_dropped() {
    let freq = Frequency::from_raw(98_500 * 16 + 15);
    assert_eq!(decode(Band::Fm, encode(Band::Fm, freq)), Frequency::from_khz(98_500));
}
