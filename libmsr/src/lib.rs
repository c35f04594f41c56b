// libmsr/src/lib.rs

//! libmsr
//!
//! Pure Rust driver for MSR605-compatible magnetic stripe readers/writers.

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the value types in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
