// libmsr/src/protocol/codec.rs

use crate::Result;
use crate::transport::Transport;

use super::commands::Command;
use super::frame::{Frame, Framing};
use super::responses::Response;

/// Which framing discipline the controller applies to replies.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FramingPolicy {
    /// End every reply at the first idle gap.
    #[default]
    IdleGap,
    /// Pin the reply length for commands whose reply size is fixed;
    /// variable-length replies still end at the idle gap.
    Strict,
}

impl FramingPolicy {
    pub fn framing_for(self, cmd: &Command) -> Framing {
        match (self, cmd.reply_len()) {
            (FramingPolicy::Strict, Some(len)) => Framing::Exact(len),
            _ => Framing::IdleGap,
        }
    }
}

/// Encode a Command into its wire bytes.
pub fn encode_command(cmd: &Command) -> Vec<u8> {
    cmd.encode()
}

/// Read the reply to `cmd` from the transport.
pub fn decode_response<T: Transport + ?Sized>(
    transport: &mut T,
    cmd: &Command,
    policy: FramingPolicy,
) -> Result<Response> {
    Frame::read(transport, cmd.waits_for_swipe(), policy.framing_for(cmd))
}
