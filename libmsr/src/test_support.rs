//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::Device;
use crate::transport::{MockTransport, Transport};

/// Build a MockTransport that answers with each payload in turn. Every
/// payload is sent as a well-formed reply: ESC, the payload, an idle gap.
#[doc(hidden)]
pub fn mock_with_replies(replies: Vec<Vec<u8>>) -> MockTransport {
    let mut mock = MockTransport::new();
    for reply in replies {
        mock.push_reply(&reply);
    }
    mock
}

/// Same as [`mock_with_replies`], boxed as a Transport trait object.
#[doc(hidden)]
pub fn boxed_mock_with_replies(replies: Vec<Vec<u8>>) -> Box<dyn Transport + Send> {
    Box::new(mock_with_replies(replies))
}

/// Convenience: a Device backed by a MockTransport pre-seeded with the
/// provided reply payloads, with default options.
#[doc(hidden)]
pub fn mock_device(replies: Vec<Vec<u8>>) -> Device<MockTransport> {
    Device::new(mock_with_replies(replies))
}
