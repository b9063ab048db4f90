//! KT0913 Radio Main Application
//!
//! Entry point for an STM32G474 board with a KT0913 on I2C1.
//! Attaches the receiver, tunes a station and logs its status.

#![no_std]
#![no_main]

use defmt::{error, info, warn, Debug2Format};
use embassy_executor::Spawner;
use embassy_stm32::gpio::{Level, Output, Speed};
use embassy_stm32::i2c::I2c;
use embassy_stm32::mode::Blocking;
use embassy_stm32::time::Hertz;
use embassy_time::{Duration, Timer};
use {defmt_rtt as _, panic_probe as _};

use kt0913_radio::prelude::*;

type Radio = Kt0913<I2cBus<I2c<'static, Blocking>>>;

/// Station tuned after bring-up (98.5 MHz)
const STATION_KHZ: u32 = 98_500;

/// Main entry point
#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("KT0913 Radio Firmware v{}", env!("CARGO_PKG_VERSION"));

    // Initialize STM32G474 peripherals with default clock configuration
    let config = embassy_stm32::Config::default();
    let p = embassy_stm32::init(config);

    // Status LED (PA5 on Nucleo boards)
    let led = Output::new(p.PA5, Level::Low, Speed::Low);
    spawner.spawn(heartbeat_task(led)).unwrap();

    // PB8 = SCL, PB9 = SDA for I2C1 on STM32G474
    let i2c = I2c::new_blocking(
        p.I2C1,
        p.PB8,
        p.PB9,
        Hertz(I2C_FREQUENCY_HZ),
        Default::default(),
    );
    info!("I2C1 initialized at {} Hz", I2C_FREQUENCY_HZ);

    let tuner_config = TunerConfig::new().with_anti_pop(0).with_ref_clock(0);
    let mut radio = match Kt0913::init(I2cBus::new(i2c), tuner_config) {
        Ok(radio) => radio,
        Err(e) => {
            error!("KT0913 init failed: {}", Debug2Format(&e));
            loop {
                Timer::after(Duration::from_secs(10)).await;
            }
        }
    };

    if let Err(e) = start_station(&mut radio) {
        warn!("tuning failed: {}", Debug2Format(&e));
    }

    loop {
        Timer::after(Duration::from_millis(STATUS_POLL_MS)).await;
        log_status(&mut radio);
    }
}

/// Tune the default station and unmute
fn start_station(radio: &mut Radio) -> Result<(), Error<embassy_stm32::i2c::Error>> {
    radio.set_frequency(Frequency::from_khz(STATION_KHZ))?;
    radio.set_volume(defaults::VOLUME_DB)?;
    radio.set_mute(false)?;
    info!("tuned to {}", radio.frequency()?);
    Ok(())
}

/// Log one status snapshot
fn log_status(radio: &mut Radio) {
    match (radio.tuner_status(), radio.pll_locked(), radio.power_status()) {
        (Ok(status), Ok(locked), Ok(power)) => {
            info!("{} lock={} power {}", status, locked, power);
        }
        (Err(e), ..) | (_, Err(e), _) | (.., Err(e)) => {
            warn!("status read failed: {}", Debug2Format(&e));
        }
    }
}

/// Heartbeat task - blinks LED to show system is running
#[embassy_executor::task]
async fn heartbeat_task(mut led: Output<'static>) {
    loop {
        led.set_high();
        Timer::after(Duration::from_millis(100)).await;
        led.set_low();
        Timer::after(Duration::from_millis(900)).await;
    }
}
