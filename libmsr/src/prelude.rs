// libmsr/src/prelude.rs

pub use crate::device::{Device, DeviceBuilder, DriverOptions, SharedDevice};
pub use crate::protocol::{CardRead, CardStatus, Command, FramingPolicy, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    Bpi, BpcSettings, Coercivity, DataFormat, DeviceInfo, EraseMask, Error, LeadingZero, Led,
    ReadTimeout, Result, SelfTest, TestOutcome, Track, TrackData,
};

#[cfg(feature = "serial")]
pub use crate::transport::{SerialConfig, SerialTransport};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_display, bytes_to_hex_spaced, default_read_timeout, ms};
