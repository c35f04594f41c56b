// libmsr/src/error.rs

use thiserror::Error;

/// Parameter outside its closed domain. Always raised before any I/O.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("invalid track number {0}: expected 1, 2 or 3")]
    InvalidTrack(u8),

    #[error("invalid bpi {0}: expected 75 or 210")]
    InvalidBpi(u16),

    #[error("invalid bpc {value} for track {track}: expected 5 to 8")]
    InvalidBpc { track: u8, value: u8 },

    #[error("erase requested without selecting any track")]
    NoTracksSelected,

    #[error("track {track} data too long: {len} bytes, max {max}")]
    TrackTooLong { track: u8, len: usize, max: usize },
}

/// The reply stream could not be framed.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FramingError {
    #[error("no response from device")]
    NoResponse,

    #[error("unexpected first byte {0:#04x}: expected ESC")]
    UnexpectedSentinel(u8),

    #[error("truncated response: expected {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },

    #[error("response longer than expected: {expected} bytes plus {extra} trailing")]
    TrailingBytes { expected: usize, extra: usize },

    #[error("response exceeded {limit} bytes without an idle gap")]
    Overrun { limit: usize },
}

/// A well-framed reply did not match what the issued command allows.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProtocolError {
    #[error("unknown status reply: {0:02x?}")]
    UnknownStatus(Vec<u8>),

    #[error("device rejected setting: {0:02x?}")]
    SetFailed(Vec<u8>),

    #[error("unknown response: {0:02x?}")]
    UnknownResponse(Vec<u8>),

    #[error("invalid response length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("malformed track block: {0}")]
    MalformedBlock(String),
}

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Framing(#[from] FramingError),

    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    #[error("i/o error: {0}")]
    Io(#[from] std::io::Error),

    // シリアル実装を後から有効化できるように optional dependency にしている
    #[cfg(feature = "serial")]
    #[error("serial port error: {0}")]
    Serial(#[from] serialport::Error),

    #[error("no transport configured")]
    NoTransport,

    #[error("device lock poisoned")]
    LockPoisoned,
}

pub type Result<T> = std::result::Result<T, Error>;
