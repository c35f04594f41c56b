// libmsr/src/transport/mock.rs

use std::collections::VecDeque;

use crate::constants::BEGIN_BYTE;
use crate::transport::traits::Transport;
use crate::types::ReadTimeout;
use crate::utils::default_read_timeout;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Event {
    Byte(u8),
    /// One read that times out with nothing delivered.
    Gap,
}

/// Mock transport for unit tests. It records sent payloads and plays back a
/// scripted byte stream, with explicit idle gaps between replies.
///
/// Reads past the end of the script behave like a silent line (`Ok(0)`).
#[derive(Debug)]
pub struct MockTransport {
    pub sent: Vec<Vec<u8>>,
    script: VecDeque<Event>,
    timeout: ReadTimeout,
    /// Timeout in effect for every `receive` call, in call order.
    pub reads: Vec<ReadTimeout>,
    /// Every timeout passed to `set_read_timeout`, in call order.
    pub timeout_changes: Vec<ReadTimeout>,
    pub closed: bool,
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl MockTransport {
    pub fn new() -> Self {
        Self {
            sent: Vec::new(),
            script: VecDeque::new(),
            timeout: ReadTimeout::Bounded(default_read_timeout()),
            reads: Vec::new(),
            timeout_changes: Vec::new(),
            closed: false,
        }
    }

    /// Mock whose script is `bytes` followed by an idle gap.
    pub fn with_script(bytes: &[u8]) -> Self {
        let mut m = Self::new();
        m.push_bytes(bytes);
        m.push_gap();
        m
    }

    /// Queue bytes without a trailing gap.
    pub fn push_bytes(&mut self, bytes: &[u8]) {
        self.script.extend(bytes.iter().copied().map(Event::Byte));
    }

    /// Queue one timed-out read.
    pub fn push_gap(&mut self) {
        self.script.push_back(Event::Gap);
    }

    /// Queue a well-formed reply: sentinel, payload, idle gap.
    pub fn push_reply(&mut self, payload: &[u8]) {
        self.script.push_back(Event::Byte(BEGIN_BYTE));
        self.push_bytes(payload);
        self.push_gap();
    }

    /// Queue raw bytes followed by a gap, sentinel not added.
    pub fn push_raw_reply(&mut self, bytes: &[u8]) {
        self.push_bytes(bytes);
        self.push_gap();
    }

    pub fn pop_sent(&mut self) -> Option<Vec<u8>> {
        self.sent.pop()
    }

    /// Scripted events not consumed yet.
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl Transport for MockTransport {
    fn send(&mut self, data: &[u8]) -> Result<()> {
        if self.closed {
            return Err(Error::Io(std::io::ErrorKind::NotConnected.into()));
        }
        self.sent.push(data.to_vec());
        Ok(())
    }

    fn receive(&mut self, buf: &mut [u8]) -> Result<usize> {
        if self.closed {
            return Err(Error::Io(std::io::ErrorKind::NotConnected.into()));
        }
        self.reads.push(self.timeout);

        if let Some(Event::Gap) = self.script.front() {
            self.script.pop_front();
            return Ok(0);
        }

        let mut n = 0;
        while n < buf.len() {
            match self.script.front() {
                Some(Event::Byte(b)) => {
                    buf[n] = *b;
                    n += 1;
                    self.script.pop_front();
                }
                _ => break,
            }
        }
        Ok(n)
    }

    fn read_timeout(&self) -> ReadTimeout {
        self.timeout
    }

    fn set_read_timeout(&mut self, timeout: ReadTimeout) -> Result<()> {
        self.timeout_changes.push(timeout);
        self.timeout = timeout;
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.closed = true;
        Ok(())
    }
}
