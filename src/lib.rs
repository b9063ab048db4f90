//! KT0913 AM/FM Receiver Control Library
//!
//! Register protocol and tuning state machine for the KTMicro KT0913
//! single-chip AM/FM receiver. High-level requests ("tune to 98.5 MHz",
//! "set volume to -20 dB") become ordered 16-bit register accesses over
//! I2C; raw status words are decoded back into lock state, stereo
//! detection and signal strength.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                       DEVICE LAYER                          │
//! │   Kt0913 (facade)  │  SharedKt0913 (coarse lock)            │
//! ├─────────────────────────────────────────────────────────────┤
//! │                       RADIO LAYER                           │
//! │  Tuner  │  Controls  │  Status  │  Init  │  Codec  │  Power │
//! ├─────────────────────────────────────────────────────────────┤
//! │                        HAL LAYER                            │
//! │     RegisterCache (shadow registers)  │  RegisterTransport  │
//! ├─────────────────────────────────────────────────────────────┤
//! │                   embedded-hal I2C bus                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Design Principles
//!
//! - **Type-driven design**: bands, gains and time constants are enums
//! - **Data, not branches**: register ranges and defaults are tables
//! - **No global state**: site configuration is an explicit value
//! - **Explicit error handling**: all fallible operations return `Result`
//!
//! # Features
//!
//! - `std` (default): `std::error::Error` impls, host tests
//! - `defmt`: driver logging and `defmt::Format` for public types
//! - `embedded`: STM32G474 firmware binary (build with `--no-default-features`)

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Hardware Abstraction Layer
///
/// Register transport and shadow register cache.
pub mod hal;

/// Peripheral Drivers
///
/// The KT0913 register map and device facade.
pub mod drivers;

/// Radio Control Logic
///
/// Tuning, audio controls, status decoding and bring-up.
pub mod radio;

/// Power Management
///
/// Standby control and power status.
pub mod power;

/// Driver error type
pub mod error;

/// Shared types used across modules
pub mod types;

/// System configuration and constants
pub mod config;

/// Prelude module for common imports
pub mod prelude {
    //! Convenient re-exports for common types and traits.

    pub use crate::config::*;
    pub use crate::types::*;

    // Driver
    pub use crate::drivers::kt0913::{Kt0913, SharedKt0913};
    pub use crate::hal::i2c::{I2cAddress, I2cBus, RegisterTransport};
    pub use crate::power::{PowerState, PowerStatus};
    pub use crate::radio::control::ControlOp;
    pub use crate::radio::status::TunerStatus;

    // Error handling
    pub use crate::error::Error;
}
