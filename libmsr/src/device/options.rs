// libmsr/src/device/options.rs
//! Driver configuration passed to a `Device` at construction.

use crate::protocol::FramingPolicy;

/// Per-device driver settings. There is no process-wide state: every
/// `Device` carries its own copy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DriverOptions {
    /// Echo every command and reply through `log::debug!`.
    pub verbose: bool,
    pub framing: FramingPolicy,
}

impl DriverOptions {
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn framing(mut self, framing: FramingPolicy) -> Self {
        self.framing = framing;
        self
    }
}
