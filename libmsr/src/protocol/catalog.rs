// libmsr/src/protocol/catalog.rs
//! Opcode table and reply patterns of the MSR605 command set.
//!
//! Every request is `ESC <op> [params]` and every reply is `ESC <payload>`.
//! The payload patterns below are what remains after the frame reader has
//! stripped the leading ESC. All reply interpretation happens through the
//! classification functions in this module so the controller never compares
//! raw bytes itself.

use std::fmt;

use crate::constants::ESC;
use crate::types::{Bpi, Coercivity, DataFormat, Led, Track};

/// Request opcodes (including the ESC prefix).
pub mod opcode {
    use crate::constants::ESC;

    pub const RESET: &[u8] = &[ESC, b'a'];
    pub const READ_ISO: &[u8] = &[ESC, b'r'];
    pub const WRITE_ISO: &[u8] = &[ESC, b'w'];
    pub const READ_RAW: &[u8] = &[ESC, b'm'];
    pub const WRITE_RAW: &[u8] = &[ESC, b'n'];
    pub const ERASE: &[u8] = &[ESC, b'c'];
    pub const COMMUNICATION_TEST: &[u8] = &[ESC, b'e'];
    pub const ALL_LED_OFF: &[u8] = &[ESC, 0x81];
    pub const ALL_LED_ON: &[u8] = &[ESC, 0x82];
    pub const GREEN_LED_ON: &[u8] = &[ESC, 0x83];
    pub const YELLOW_LED_ON: &[u8] = &[ESC, 0x84];
    pub const RED_LED_ON: &[u8] = &[ESC, 0x85];
    pub const SENSOR_TEST: &[u8] = &[ESC, 0x86];
    pub const RAM_TEST: &[u8] = &[ESC, 0x87];
    pub const SET_LEADING_ZERO: &[u8] = &[ESC, b'z'];
    pub const CHECK_LEADING_ZERO: &[u8] = &[ESC, b'l'];
    pub const SET_BPI: &[u8] = &[ESC, b'b'];
    pub const SET_BPC: &[u8] = &[ESC, b'o'];
    pub const DEVICE_MODEL: &[u8] = &[ESC, b't'];
    pub const FIRMWARE_VERSION: &[u8] = &[ESC, b'v'];
    pub const SET_HIGH_COERCIVITY: &[u8] = &[ESC, b'x'];
    pub const SET_LOW_COERCIVITY: &[u8] = &[ESC, b'y'];
    pub const COERCIVITY_STATUS: &[u8] = &[ESC, b'd'];
}

/// Generic "command accepted" reply.
pub const STATUS_OK: u8 = b'0';
/// Generic "command failed" reply.
pub const STATUS_FAIL: u8 = b'A';
/// `STATUS_OK` as a complete reply payload.
pub const STATUS_OK_REPLY: &[u8] = &[STATUS_OK];

pub const COMMUNICATION_TEST_OK: &[u8] = b"y";
pub const COERCIVITY_HIGH: &[u8] = b"H";
pub const COERCIVITY_LOW: &[u8] = b"L";

pub fn read_opcode(format: DataFormat) -> &'static [u8] {
    match format {
        DataFormat::Iso => opcode::READ_ISO,
        DataFormat::Raw => opcode::READ_RAW,
    }
}

pub fn write_opcode(format: DataFormat) -> &'static [u8] {
    match format {
        DataFormat::Iso => opcode::WRITE_ISO,
        DataFormat::Raw => opcode::WRITE_RAW,
    }
}

pub fn led_opcode(led: Led) -> &'static [u8] {
    match led {
        Led::AllOff => opcode::ALL_LED_OFF,
        Led::AllOn => opcode::ALL_LED_ON,
        Led::Green => opcode::GREEN_LED_ON,
        Led::Yellow => opcode::YELLOW_LED_ON,
        Led::Red => opcode::RED_LED_ON,
    }
}

pub fn set_coercivity_opcode(coercivity: Coercivity) -> &'static [u8] {
    match coercivity {
        Coercivity::High => opcode::SET_HIGH_COERCIVITY,
        Coercivity::Low => opcode::SET_LOW_COERCIVITY,
    }
}

/// Parameter byte of the set-BPI command.
pub const fn bpi_code(track: Track, bpi: Bpi) -> u8 {
    match (track, bpi) {
        (Track::One, Bpi::Bpi75) => 0x4B,
        (Track::One, Bpi::Bpi210) => 0xD2,
        (Track::Two, Bpi::Bpi75) => 0xA0,
        (Track::Two, Bpi::Bpi210) => 0xA1,
        (Track::Three, Bpi::Bpi75) => 0xC0,
        (Track::Three, Bpi::Bpi210) => 0xC1,
    }
}

/// Outcome of commands answering `0` / `A`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ack {
    Ok,
    Fail,
}

/// Classify a one-byte status reply. `None` for anything else.
pub fn ack(reply: &[u8]) -> Option<Ack> {
    match reply {
        [STATUS_OK] => Some(Ack::Ok),
        [STATUS_FAIL] => Some(Ack::Fail),
        _ => None,
    }
}

pub fn coercivity(reply: &[u8]) -> Option<Coercivity> {
    match reply {
        COERCIVITY_HIGH => Some(Coercivity::High),
        COERCIVITY_LOW => Some(Coercivity::Low),
        _ => None,
    }
}

pub fn communication_ok(reply: &[u8]) -> bool {
    reply == COMMUNICATION_TEST_OK
}

/// Status reported after read and write operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardStatus {
    Ok,
    ReadWriteError,
    CommandFormatError,
    InvalidCommand,
    InvalidSwipe,
    /// Anything else; usually ASCII text from the device.
    Unrecognized(Vec<u8>),
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CardStatus::Ok => f.write_str("ok"),
            CardStatus::ReadWriteError => f.write_str("read/write error"),
            CardStatus::CommandFormatError => f.write_str("command format error"),
            CardStatus::InvalidCommand => f.write_str("invalid command"),
            CardStatus::InvalidSwipe => f.write_str("invalid card swipe in write mode"),
            CardStatus::Unrecognized(text) => f.write_str(&String::from_utf8_lossy(text)),
        }
    }
}

impl CardStatus {
    pub fn is_ok(&self) -> bool {
        matches!(self, CardStatus::Ok)
    }
}

/// Classify a read/write status reply.
pub fn card_status(reply: &[u8]) -> CardStatus {
    match reply {
        b"0" => CardStatus::Ok,
        b"1" => CardStatus::ReadWriteError,
        b"2" => CardStatus::CommandFormatError,
        b"4" => CardStatus::InvalidCommand,
        b"9" => CardStatus::InvalidSwipe,
        other => CardStatus::Unrecognized(other.to_vec()),
    }
}

/// Trailing `ESC <status>` of a read reply.
pub fn split_read_status(reply: &[u8]) -> Option<(&[u8], &[u8])> {
    match reply {
        [body @ .., e, status] if *e == ESC => Some((body, std::slice::from_ref(status))),
        _ => None,
    }
}
