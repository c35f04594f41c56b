// libmsr/src/transport/serial.rs

#![cfg(feature = "serial")]

use std::io::{ErrorKind, Read, Write};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};

use crate::constants::DEFAULT_BAUD_RATE;
use crate::transport::cancel::{CancelHandle, wait_for_data};
use crate::transport::traits::Transport;
use crate::types::ReadTimeout;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

/// Port settings. Line format is fixed to 8N1 without flow control.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SerialConfig {
    pub path: String,
    pub baud_rate: u32,
    pub read_timeout: Duration,
}

impl SerialConfig {
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: default_read_timeout(),
        }
    }

    pub fn with_baud_rate(mut self, baud_rate: u32) -> Self {
        self.baud_rate = baud_rate;
        self
    }

    pub fn with_read_timeout(mut self, timeout: Duration) -> Self {
        self.read_timeout = timeout;
        self
    }
}

/// Serial transport backed by the `serialport` crate. Feature-gated behind
/// `--features serial`.
///
/// `close` releases the port; any later call fails with `NotConnected`.
/// An unbounded swipe wait can be aborted through [`SerialTransport::cancel_handle`].
pub struct SerialTransport {
    port: Option<Box<dyn SerialPort>>,
    timeout: ReadTimeout,
    bounded: Duration,
    cancel: CancelHandle,
}

impl SerialTransport {
    pub fn open(config: &SerialConfig) -> Result<Self> {
        let port = serialport::new(&config.path, config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()?;
        log::debug!(
            "opened {} at {} baud, read timeout {:?}",
            config.path,
            config.baud_rate,
            config.read_timeout
        );
        Ok(Self {
            port: Some(port),
            timeout: ReadTimeout::Bounded(config.read_timeout),
            bounded: config.read_timeout,
            cancel: CancelHandle::new(),
        })
    }

    /// Port name as reported by the OS, if any.
    pub fn name(&self) -> Option<String> {
        self.port.as_ref().and_then(|p| p.name())
    }

    /// Handle that aborts a pending unbounded read from another thread.
    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn is_open(&self) -> bool {
        self.port.is_some()
    }

    fn port(&mut self) -> Result<&mut Box<dyn SerialPort>> {
        self.port
            .as_mut()
            .ok_or_else(|| Error::Io(ErrorKind::NotConnected.into()))
    }

    fn read_once(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.port()?.read(buf) {
            Ok(n) => Ok(n),
            Err(e) if e.kind() == ErrorKind::TimedOut => Ok(0),
            Err(e) => Err(e.into()),
        }
    }
}

impl Transport for SerialTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        let port = self.port()?;
        port.write_all(data)?;
        port.flush()?;
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        match self.timeout {
            ReadTimeout::Bounded(_) => self.read_once(buf),
            // The OS port always has a finite timeout; keep polling until a
            // byte shows up, the port errors out or the wait is cancelled.
            ReadTimeout::Unbounded => {
                let cancel = self.cancel.clone();
                wait_for_data(&cancel, || self.read_once(buf))
            }
        }
    }

    fn read_timeout(&self) -> ReadTimeout {
        self.timeout
    }

    fn set_read_timeout(&mut self, timeout: ReadTimeout) -> Result<()> {
        let os_timeout = match timeout {
            ReadTimeout::Bounded(d) => {
                self.bounded = d;
                d
            }
            ReadTimeout::Unbounded => self.bounded,
        };
        self.port()?.set_timeout(os_timeout)?;
        self.timeout = timeout;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        if let Some(mut port) = self.port.take() {
            port.flush()?;
            log::debug!("closed {}", port.name().unwrap_or_default());
        }
        Ok(())
    }
}
