// libmsr/src/device/shared.rs
//! Thread-safe wrapper that serialises whole transactions on one device.

use std::sync::{Arc, Mutex};

use crate::device::handle::Device;
use crate::transport::Transport;
use crate::{Error, Result};

/// Cloneable handle to a device guarded by a mutex. The lock is held for
/// the entire closure passed to [`SharedDevice::with`], so a request and
/// its reply are never interleaved with another caller's.
pub struct SharedDevice<T: Transport = Box<dyn Transport + Send>> {
    inner: Arc<Mutex<Device<T>>>,
}

impl<T: Transport> SharedDevice<T> {
    pub fn new(device: Device<T>) -> Self {
        Self {
            inner: Arc::new(Mutex::new(device)),
        }
    }

    /// Run `f` with exclusive access to the device.
    pub fn with<R, F>(&self, f: F) -> Result<R>
    where
        F: FnOnce(&mut Device<T>) -> Result<R>,
    {
        let mut device = self.inner.lock().map_err(|_| Error::LockPoisoned)?;
        f(&mut device)
    }
}

impl<T: Transport> Clone for SharedDevice<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<T: Transport> From<Device<T>> for SharedDevice<T> {
    fn from(device: Device<T>) -> Self {
        Self::new(device)
    }
}
