//! Utilities for libmsr: small helpers shared by the codec, the device
//! controller and the transports.

pub mod hex;
pub mod timeout;

pub use hex::*;
pub use timeout::*;
