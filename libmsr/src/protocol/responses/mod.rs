// libmsr/src/protocol/responses/mod.rs

pub mod tracks;

pub use tracks::{CardRead, decode_read};

/// Reply payload: every byte the device sent after the leading ESC, up to
/// the end of the frame.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Response(Vec<u8>);

impl Response {
    pub fn new(payload: Vec<u8>) -> Self {
        Self(payload)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<[u8]> for Response {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl From<Response> for Vec<u8> {
    fn from(r: Response) -> Self {
        r.0
    }
}
