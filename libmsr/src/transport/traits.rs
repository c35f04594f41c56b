// libmsr/src/transport/traits.rs

use crate::Result;
use crate::types::ReadTimeout;

/// Transport trait abstracts the byte stream away from protocol/device logic.
///
/// Implementations must not apply flow control or buffering semantics of
/// their own: a `receive` that sees no data within the current read timeout
/// returns `Ok(0)`, never an error.
pub trait Transport {
    /// Write all bytes to the device. No write timeout applies.
    fn send(&mut self, data: &[u8]) -> Result<()>;

    /// Read up to `buf.len()` bytes. Returns fewer (possibly zero) when the
    /// read timeout elapses.
    fn receive(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Current per-call read timeout.
    fn read_timeout(&self) -> ReadTimeout;

    /// Change the per-call read timeout for subsequent reads.
    fn set_read_timeout(&mut self, timeout: ReadTimeout) -> Result<()>;

    /// Read a single byte, `None` on timeout.
    fn receive_byte(&mut self) -> Result<Option<u8>> {
        let mut byte = [0u8; 1];
        match self.receive(&mut byte)? {
            0 => Ok(None),
            _ => Ok(Some(byte[0])),
        }
    }

    /// Release the underlying stream. Default is a no-op for transports
    /// that close on drop.
    fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        (**self).send(data)
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        (**self).receive(buf)
    }

    fn read_timeout(&self) -> ReadTimeout {
        (**self).read_timeout()
    }

    fn set_read_timeout(&mut self, timeout: ReadTimeout) -> Result<()> {
        (**self).set_read_timeout(timeout)
    }

    fn receive_byte(&mut self) -> Result<Option<u8>> {
        (**self).receive_byte()
    }

    fn close(&mut self) -> Result<()> {
        (**self).close()
    }
}
