use std::io::ErrorKind;

use libmsr::transport::cancel::wait_for_data;
use libmsr::transport::{CancelHandle, Transport};
use libmsr::types::ReadTimeout;
use libmsr::{Device, Error, Result};

/// A line that never answers. Unbounded reads poll the way the serial
/// transport does, and a remote party cancels after a few polls.
struct SilentLine {
    timeout: ReadTimeout,
    cancel: CancelHandle,
    cancel_after: usize,
    polls: usize,
}

impl SilentLine {
    fn new(cancel_after: usize) -> Self {
        Self {
            timeout: ReadTimeout::default(),
            cancel: CancelHandle::new(),
            cancel_after,
            polls: 0,
        }
    }
}

impl Transport for SilentLine {
    fn send(&mut self, _data: &[u8]) -> Result<()> {
        Ok(())
    }

    fn receive(&mut self, _buf: &mut [u8]) -> Result<usize> {
        match self.timeout {
            ReadTimeout::Bounded(_) => Ok(0),
            ReadTimeout::Unbounded => {
                let remote = self.cancel.clone();
                let cancel_after = self.cancel_after;
                let polls = &mut self.polls;
                wait_for_data(&self.cancel, || {
                    *polls += 1;
                    if *polls == cancel_after {
                        remote.cancel();
                    }
                    Ok(0)
                })
            }
        }
    }

    fn read_timeout(&self) -> ReadTimeout {
        self.timeout
    }

    fn set_read_timeout(&mut self, timeout: ReadTimeout) -> Result<()> {
        self.timeout = timeout;
        Ok(())
    }
}

#[test]
fn cancelled_swipe_wait_interrupts_sensor_test() {
    let mut dev = Device::new(SilentLine::new(4));
    match dev.test_sensor() {
        Err(Error::Io(e)) => assert_eq!(e.kind(), ErrorKind::Interrupted),
        other => panic!("expected Interrupted, got {:?}", other),
    }
    assert_eq!(dev.transport().polls, 4);
    assert_eq!(dev.transport().read_timeout(), ReadTimeout::default());
}

#[test]
fn cancel_before_wait_aborts_next_read() {
    let line = SilentLine::new(usize::MAX);
    line.cancel.cancel();
    let mut dev = Device::new(line);
    assert!(matches!(dev.read_iso(), Err(Error::Io(_))));
    assert_eq!(dev.transport().polls, 0);
    assert!(!dev.transport().cancel.is_cancelled());
}
