// libmsr/src/transport/cancel.rs
//! Cancellation of reads that wait without a deadline.

use std::io::ErrorKind;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use crate::{Error, Result};

/// Cloneable flag used to abort a swipe wait from another thread.
///
/// Obtain it from the transport before handing the transport to a
/// `Device` or `SharedDevice`; the device lock is held for the whole wait.
/// A cancel requested while nothing is waiting aborts the next wait.
#[derive(Debug, Clone, Default)]
pub struct CancelHandle(Arc<AtomicBool>);

impl CancelHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::SeqCst)
    }

    /// Consume a pending cancel request.
    fn take(&self) -> bool {
        self.0.swap(false, Ordering::SeqCst)
    }
}

/// Repeat a bounded read until it delivers data or the handle is cancelled.
/// Transports whose OS reads always carry a deadline use this to provide
/// `ReadTimeout::Unbounded`.
/// A cancelled wait fails with `ErrorKind::Interrupted`.
pub fn wait_for_data<F>(cancel: &CancelHandle, mut read: F) -> Result<usize>
where
    F: FnMut() -> Result<usize>,
{
    loop {
        if cancel.take() {
            log::debug!("swipe wait cancelled");
            return Err(Error::Io(ErrorKind::Interrupted.into()));
        }
        let n = read()?;
        if n > 0 {
            return Ok(n);
        }
    }
}
