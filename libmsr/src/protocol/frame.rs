// libmsr/src/protocol/frame.rs

use crate::constants::{BEGIN_BYTE, MAX_RESPONSE_LEN};
use crate::error::FramingError;
use crate::protocol::responses::Response;
use crate::transport::Transport;
use crate::types::ReadTimeout;
use crate::utils::ScopedTimeout;
#[cfg(feature = "diagnostics")]
use crate::utils::bytes_to_hex_spaced;
use crate::Result;

/// How the end of a reply is detected.
///
/// The MSR605 has no terminator or length field: a reply ends when the line
/// goes quiet for one read timeout. `Exact` additionally pins the payload
/// length so a reply cut short by a slow line is reported instead of being
/// accepted as complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Framing {
    IdleGap,
    Exact(usize),
}

/// Reply frame reader.
pub struct Frame;

impl Frame {
    /// Read one reply frame.
    ///
    /// With `swipe_wait` the first byte is read with an unbounded timeout;
    /// the previous timeout is back in place before any further byte is
    /// read, whatever the outcome of that first read.
    pub fn read<T: Transport + ?Sized>(
        transport: &mut T,
        swipe_wait: bool,
        framing: Framing,
    ) -> Result<Response> {
        let first = if swipe_wait {
            log::debug!("waiting for card swipe");
            let mut guard = ScopedTimeout::new(transport, ReadTimeout::Unbounded)?;
            let first = guard.receive_byte();
            guard.restore()?;
            first?
        } else {
            transport.receive_byte()?
        };

        match first {
            None => return Err(FramingError::NoResponse.into()),
            Some(BEGIN_BYTE) => {}
            Some(other) => return Err(FramingError::UnexpectedSentinel(other).into()),
        }

        let payload = match framing {
            Framing::IdleGap => read_until_idle(transport)?,
            Framing::Exact(len) => read_exact(transport, len)?,
        };
        Ok(Response::new(payload))
    }
}

/// Accumulate bytes until a read comes back empty.
fn read_until_idle<T: Transport + ?Sized>(transport: &mut T) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    while let Some(byte) = transport.receive_byte()? {
        #[cfg(feature = "diagnostics")]
        log::trace!("rx {:02x}", byte);
        if payload.len() == MAX_RESPONSE_LEN {
            dump_partial("overrun", &payload);
            return Err(FramingError::Overrun {
                limit: MAX_RESPONSE_LEN,
            }
            .into());
        }
        payload.push(byte);
    }
    Ok(payload)
}

/// Hex dump of what arrived before a framing failure.
#[cfg(feature = "diagnostics")]
fn dump_partial(what: &str, received: &[u8]) {
    log::debug!("{} frame, received: {}", what, bytes_to_hex_spaced(received));
}

#[cfg(not(feature = "diagnostics"))]
fn dump_partial(_what: &str, _received: &[u8]) {}

/// Read exactly `len` bytes, then require the line to go idle.
fn read_exact<T: Transport + ?Sized>(transport: &mut T, len: usize) -> Result<Vec<u8>> {
    let mut payload = Vec::with_capacity(len);
    while payload.len() < len {
        match transport.receive_byte()? {
            Some(byte) => payload.push(byte),
            None => {
                dump_partial("truncated", &payload);
                return Err(FramingError::Truncated {
                    expected: len,
                    actual: payload.len(),
                }
                .into());
            }
        }
    }

    // Drain whatever follows so the next transaction starts on a quiet line.
    let extra = read_until_idle(transport)?;
    if !extra.is_empty() {
        dump_partial("trailing", &[payload.as_slice(), extra.as_slice()].concat());
        let extra = extra.len();
        return Err(FramingError::TrailingBytes {
            expected: len,
            extra,
        }
        .into());
    }
    Ok(payload)
}
