// libmsr/src/device/builder.rs

use crate::device::handle::Device;
use crate::device::options::DriverOptions;
use crate::protocol::FramingPolicy;
use crate::transport::Transport;
use crate::types::ReadTimeout;
use crate::{Error, Result};

#[cfg(feature = "serial")]
use crate::transport::{SerialConfig, SerialTransport};

/// Helper to construct a Device with optional configuration.
#[derive(Default)]
pub struct DeviceBuilder {
    transport: Option<Box<dyn Transport + Send>>,
    options: DriverOptions,
    read_timeout: Option<ReadTimeout>,
}

impl DeviceBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Provide an already-created transport instance (e.g. MockTransport)
    pub fn with_transport(mut self, transport: Box<dyn Transport + Send>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Open a serial port and use it as the transport.
    #[cfg(feature = "serial")]
    pub fn with_serial(self, config: &SerialConfig) -> Result<Self> {
        let port = SerialTransport::open(config)?;
        Ok(self.with_transport(Box::new(port)))
    }

    pub fn verbose(mut self, verbose: bool) -> Self {
        self.options = self.options.verbose(verbose);
        self
    }

    pub fn framing(mut self, framing: FramingPolicy) -> Self {
        self.options = self.options.framing(framing);
        self
    }

    pub fn options(mut self, options: DriverOptions) -> Self {
        self.options = options;
        self
    }

    /// Standard bounded timeout applied to the transport on build.
    pub fn read_timeout(mut self, timeout: ReadTimeout) -> Self {
        self.read_timeout = Some(timeout);
        self
    }

    /// Consume the builder. Requires a transport; otherwise returns
    /// `Error::NoTransport`.
    pub fn build(self) -> Result<Device> {
        let mut transport = self.transport.ok_or(Error::NoTransport)?;
        if let Some(timeout) = self.read_timeout {
            transport.set_read_timeout(timeout)?;
        }
        Ok(Device::with_options(transport, self.options))
    }
}
