// libmsr/src/device/handle.rs

use crate::device::options::DriverOptions;
use crate::protocol::codec;
use crate::protocol::{Command, Response};
use crate::transport::Transport;
use crate::utils::bytes_to_display;
use crate::Result;

/// MSR605 controller. Owns its transport exclusively; every operation is
/// one request followed by at most one reply, and nothing is remembered
/// between operations.
pub struct Device<T: Transport = Box<dyn Transport + Send>> {
    transport: T,
    options: DriverOptions,
}

impl<T: Transport> Device<T> {
    pub fn new(transport: T) -> Self {
        Self::with_options(transport, DriverOptions::default())
    }

    pub fn with_options(transport: T, options: DriverOptions) -> Self {
        Self { transport, options }
    }

    pub fn options(&self) -> &DriverOptions {
        &self.options
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn transport_mut(&mut self) -> &mut T {
        &mut self.transport
    }

    pub fn into_transport(self) -> T {
        self.transport
    }

    /// Close the underlying transport.
    pub fn close(&mut self) -> Result<()> {
        self.transport.close()
    }

    /// Write a command without waiting for any reply.
    pub fn send_command(&mut self, cmd: &Command) -> Result<()> {
        let bytes = codec::encode_command(cmd);
        if self.options.verbose {
            log::debug!("-> {}: {}", cmd.name(), bytes_to_display(&bytes));
        }
        self.transport.send(&bytes)
    }

    /// Send a command and read its reply frame.
    ///
    /// Only meaningful for commands that answer; a fire-and-forget command
    /// run through here ends in `FramingError::NoResponse`.
    pub fn execute(&mut self, cmd: &Command) -> Result<Response> {
        self.send_command(cmd)?;
        let response = codec::decode_response(&mut self.transport, cmd, self.options.framing)?;
        if self.options.verbose {
            log::debug!("<- {}: {}", cmd.name(), bytes_to_display(response.as_bytes()));
        }
        Ok(response)
    }
}
