// Shared helpers for the integration test crates.
#![allow(dead_code)]

pub mod fixtures;

pub use libmsr::test_support::{mock_device, mock_with_replies};
