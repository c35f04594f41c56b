// libmsr/src/transport/mod.rs

pub mod cancel;
pub mod mock;
#[cfg(feature = "serial")]
pub mod serial;
pub mod traits;

pub use cancel::CancelHandle;
pub use mock::MockTransport;
#[cfg(feature = "serial")]
pub use serial::{SerialConfig, SerialTransport};
pub use traits::Transport;
