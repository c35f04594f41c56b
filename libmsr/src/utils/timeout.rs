//! Timeout helpers used across the crate.
//!
//! Besides the default bounded timeout this module holds [`ScopedTimeout`],
//! the guard used by the frame reader to lift the read timeout for exactly
//! one read while waiting for a card swipe.

use std::ops::{Deref, DerefMut};
use std::time::Duration;

use crate::Result;
use crate::transport::Transport;
use crate::types::ReadTimeout;

/// Default per-byte read timeout. The device finishes a reply well within
/// this gap, so an idle period of this length ends a frame.
pub const DEFAULT_READ_TIMEOUT_MS: u64 = 1000;

/// Convert milliseconds to Duration.
pub fn ms(ms: u64) -> Duration {
    Duration::from_millis(ms)
}

/// Convenience: default read timeout as Duration.
pub fn default_read_timeout() -> Duration {
    ms(DEFAULT_READ_TIMEOUT_MS)
}

/// Overrides a transport's read timeout until [`ScopedTimeout::restore`] is
/// called or the guard is dropped.
///
/// `restore` reports a failure to put the old timeout back; dropping the
/// guard restores on a best-effort basis so early returns never leave the
/// transport in unbounded mode.
pub struct ScopedTimeout<'a, T: Transport + ?Sized> {
    transport: &'a mut T,
    previous: ReadTimeout,
    restored: bool,
}

impl<'a, T: Transport + ?Sized> ScopedTimeout<'a, T> {
    pub fn new(transport: &'a mut T, timeout: ReadTimeout) -> Result<Self> {
        let previous = transport.read_timeout();
        transport.set_read_timeout(timeout)?;
        Ok(Self {
            transport,
            previous,
            restored: false,
        })
    }

    /// Timeout that will be put back.
    pub fn previous(&self) -> ReadTimeout {
        self.previous
    }

    pub fn restore(mut self) -> Result<()> {
        self.restored = true;
        self.transport.set_read_timeout(self.previous)
    }
}

impl<T: Transport + ?Sized> Deref for ScopedTimeout<'_, T> {
    type Target = T;

    fn deref(&self) -> &T {
        &*self.transport
    }
}

impl<T: Transport + ?Sized> DerefMut for ScopedTimeout<'_, T> {
    fn deref_mut(&mut self) -> &mut T {
        &mut *self.transport
    }
}

impl<T: Transport + ?Sized> Drop for ScopedTimeout<'_, T> {
    fn drop(&mut self) {
        if !self.restored {
            if let Err(e) = self.transport.set_read_timeout(self.previous) {
                log::warn!("failed to restore read timeout: {}", e);
            }
        }
    }
}
