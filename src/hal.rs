//! Hardware Abstraction Layer
//!
//! Word-oriented register access over the bus and the shadow
//! register cache that sits on top of it. Everything here is chip
//! independent; the KT0913 register map lives in [`crate::drivers`].

pub mod i2c;
pub mod regmap;
