// libmsr/src/protocol/mod.rs

pub mod catalog;
pub mod codec;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod responses;

pub use catalog::{Ack, CardStatus};
pub use codec::FramingPolicy;
pub use commands::*;
pub use frame::{Frame, Framing};
pub use responses::*;
