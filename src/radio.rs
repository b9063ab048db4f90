//! Radio Control Logic
//!
//! Frequency codec, band state machine, audio controls, status
//! decoding and the bring-up sequence. Everything operates on a
//! [`Registers`](crate::drivers::kt0913::regs::Registers) cache and
//! never talks to the bus directly.

pub mod codec;
pub mod control;
pub mod init;
pub mod status;
pub mod tuner;
