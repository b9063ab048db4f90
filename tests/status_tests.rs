//! Status Decoding Tests
//!
//! Tests for lock, stereo and signal strength reporting.
//! Run with: cargo test --test status_tests

mod common;

use common::{attach, registers, Op};
use kt0913_radio::config::TunerConfig;
use kt0913_radio::drivers::kt0913::regs::reg;
use kt0913_radio::radio::status::{self, normalize_rssi, TunerStatus};
use kt0913_radio::types::{AudioMode, Band, Frequency};

// =============================================================================
// Lock Tests
// =============================================================================

#[test]
fn pll_lock_bit() {
    let (mut regs, bus) = registers();
    bus.set(reg::STATUSA, 0x0800);
    assert_eq!(status::pll_locked(&mut regs), Ok(true));

    bus.set(reg::STATUSA, 0xF7FF);
    assert_eq!(status::pll_locked(&mut regs), Ok(false));
}

#[test]
fn every_query_reads_fresh_status() {
    let (mut regs, bus) = registers();
    status::pll_locked(&mut regs).unwrap();
    status::pll_locked(&mut regs).unwrap();
    assert_eq!(bus.ops(), vec![Op::Read(reg::STATUSA), Op::Read(reg::STATUSA)]);
}

#[test]
fn status_read_failure_is_io() {
    let (mut regs, bus) = registers();
    bus.fail_reads_of(reg::STATUSA);
    assert!(status::pll_locked(&mut regs).unwrap_err().is_io());
}

// =============================================================================
// Stereo Tests
// =============================================================================

#[test]
fn stereo_needs_both_bits() {
    let (mut regs, bus) = registers();
    for (raw, expected) in [(0x0300, true), (0x0100, false), (0x0200, false), (0x0000, false)] {
        bus.set(reg::STATUSA, raw);
        assert_eq!(status::stereo_active(&mut regs, Band::Fm), Ok(expected), "STATUSA 0x{raw:04X}");
    }
}

#[test]
fn stereo_on_am_is_false_without_bus_access() {
    let (mut regs, bus) = registers();
    bus.set(reg::STATUSA, 0x0300);
    assert_eq!(status::stereo_active(&mut regs, Band::Am), Ok(false));
    assert!(bus.ops().is_empty());
}

// =============================================================================
// Signal Strength Tests
// =============================================================================

#[test]
fn rssi_normalization_endpoints() {
    assert_eq!(normalize_rssi(0), 0);
    assert_eq!(normalize_rssi(31), 65_535);
}

#[test]
fn rssi_normalization_is_monotonic() {
    for raw in 1..=31 {
        assert!(normalize_rssi(raw) > normalize_rssi(raw - 1));
    }
}

#[test]
fn fm_signal_uses_statusa() {
    let (mut regs, bus) = registers();
    bus.set(reg::STATUSA, 31 << 3);
    bus.set(reg::AMSTATUSA, 0);
    assert_eq!(status::signal_strength(&mut regs, Band::Fm), Ok(65_535));
    assert_eq!(status::signal_strength(&mut regs, Band::FmExtended), Ok(65_535));
    assert_eq!(bus.reads(), vec![reg::STATUSA, reg::STATUSA]);
}

#[test]
fn am_signal_uses_amstatusa() {
    let (mut regs, bus) = registers();
    bus.set(reg::STATUSA, 31 << 3);
    bus.set(reg::AMSTATUSA, 0);
    assert_eq!(status::signal_strength(&mut regs, Band::Am), Ok(0));
    assert_eq!(bus.reads(), vec![reg::AMSTATUSA]);
}

#[test]
fn raw_rssi_ignores_neighbouring_bits() {
    let (mut regs, bus) = registers();
    bus.set(reg::STATUSA, 0xFF07 | (12 << 3));
    bus.set(reg::AMSTATUSA, 0xE0FF | (7 << 8));
    assert_eq!(status::raw_rssi(&mut regs, Band::Fm), Ok(12));
    assert_eq!(status::raw_rssi(&mut regs, Band::Am), Ok(7));
}

// =============================================================================
// Tuner Status Tests
// =============================================================================

#[test]
fn tuner_status_on_fm() {
    let (mut radio, bus) = attach(TunerConfig::new());
    bus.set(reg::STATUSA, 0x0300 | (31 << 3));

    let st = radio.tuner_status().unwrap();
    assert_eq!(
        st,
        TunerStatus {
            band: Band::Fm,
            rx_subchannels: AudioMode::Stereo,
            audio_mode: AudioMode::Stereo,
            signal: 65_535,
            afc: true,
            range_low: Frequency::from_khz(500),
            range_high: Frequency::from_khz(110_000),
        }
    );
}

#[test]
fn tuner_status_reports_forced_mono() {
    let (mut radio, bus) = attach(TunerConfig::new());
    radio.set_stereo_mode(false).unwrap();
    bus.set(reg::STATUSA, 0x0000);

    let st = radio.tuner_status().unwrap();
    assert_eq!(st.rx_subchannels, AudioMode::Mono);
    assert_eq!(st.audio_mode, AudioMode::Mono);
}

#[test]
fn tuner_status_on_am_is_mono() {
    let (mut radio, bus) = attach(TunerConfig::new());
    radio.set_frequency(Frequency::from_khz(1_000)).unwrap();
    bus.set(reg::STATUSA, 0x0300);
    bus.set(reg::AMSTATUSA, 31 << 8);

    let st = radio.tuner_status().unwrap();
    assert_eq!(st.band, Band::Am);
    assert_eq!(st.rx_subchannels, AudioMode::Mono);
    assert_eq!(st.audio_mode, AudioMode::Mono);
    assert_eq!(st.signal, 65_535);
}
