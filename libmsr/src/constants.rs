// libmsr/src/constants.rs
//! Common protocol constants used across the crate

/// Escape byte prefixing every MSR605 command and reply.
pub const ESC: u8 = 0x1B;

/// Leading sentinel of every reply frame.
pub const BEGIN_BYTE: u8 = ESC;

/// File separator, second byte of the end-of-block marker.
pub const FS: u8 = 0x1C;

/// Track data block start: ESC 's'
pub const DATA_BLOCK_BEGIN: [u8; 2] = [ESC, b's'];

/// Track data block end: '?' FS
pub const END_OF_BLOCK: [u8; 2] = [b'?', FS];

/// Largest reply accepted by the idle-gap framer. A raw read of three
/// full tracks is well below this.
pub const MAX_RESPONSE_LEN: usize = 2048;

/// Raw track payloads carry a one-byte length prefix.
pub const MAX_RAW_TRACK_LEN: usize = u8::MAX as usize;

/// Bits-per-character bounds (inclusive).
pub const BPC_MIN_VALUE: u8 = 5;
pub const BPC_MAX_VALUE: u8 = 8;

/// Serial line settings used by the MSR605.
pub const DEFAULT_BAUD_RATE: u32 = 9600;
