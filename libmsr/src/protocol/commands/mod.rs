// libmsr/src/protocol/commands/mod.rs

pub mod settings;
pub mod write;

pub use settings::{encode_erase, encode_set_bpc, encode_set_bpi, encode_set_leading_zero};
pub use write::{encode_data_block, validate_tracks};

use crate::protocol::catalog::{self, opcode};
use crate::types::{
    Bpi, BpcSettings, Coercivity, DataFormat, EraseMask, LeadingZero, Led, SelfTest, Track,
    TrackData,
};

/// High-level Command enum. Every device capability has one variant; its
/// wire form is `opcode() ++ payload()` with no length prefix or checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Reset,
    Read(DataFormat),
    Write {
        format: DataFormat,
        tracks: TrackData,
    },
    Erase(EraseMask),
    CommunicationTest,
    SensorTest,
    RamTest,
    Led(Led),
    FirmwareVersion,
    DeviceModel,
    SetBpi {
        track: Track,
        bpi: Bpi,
    },
    SetBpc(BpcSettings),
    SetCoercivity(Coercivity),
    CoercivityStatus,
    SetLeadingZero(LeadingZero),
    CheckLeadingZero,
}

impl Command {
    pub fn self_test(test: SelfTest) -> Self {
        match test {
            SelfTest::Communication => Command::CommunicationTest,
            SelfTest::Ram => Command::RamTest,
            SelfTest::Sensor => Command::SensorTest,
        }
    }

    /// Short name used in log records.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Reset => "reset",
            Self::Read(DataFormat::Iso) => "read iso",
            Self::Read(DataFormat::Raw) => "read raw",
            Self::Write {
                format: DataFormat::Iso,
                ..
            } => "write iso",
            Self::Write {
                format: DataFormat::Raw,
                ..
            } => "write raw",
            Self::Erase(_) => "erase",
            Self::CommunicationTest => "communication test",
            Self::SensorTest => "sensor test",
            Self::RamTest => "ram test",
            Self::Led(_) => "led",
            Self::FirmwareVersion => "firmware version",
            Self::DeviceModel => "device model",
            Self::SetBpi { .. } => "set bpi",
            Self::SetBpc(_) => "set bpc",
            Self::SetCoercivity(_) => "set coercivity",
            Self::CoercivityStatus => "coercivity status",
            Self::SetLeadingZero(_) => "set leading zero",
            Self::CheckLeadingZero => "check leading zero",
        }
    }

    /// Opcode bytes, ESC prefix included.
    pub fn opcode(&self) -> &'static [u8] {
        match self {
            Self::Reset => opcode::RESET,
            Self::Read(format) => catalog::read_opcode(*format),
            Self::Write { format, .. } => catalog::write_opcode(*format),
            Self::Erase(_) => opcode::ERASE,
            Self::CommunicationTest => opcode::COMMUNICATION_TEST,
            Self::SensorTest => opcode::SENSOR_TEST,
            Self::RamTest => opcode::RAM_TEST,
            Self::Led(led) => catalog::led_opcode(*led),
            Self::FirmwareVersion => opcode::FIRMWARE_VERSION,
            Self::DeviceModel => opcode::DEVICE_MODEL,
            Self::SetBpi { .. } => opcode::SET_BPI,
            Self::SetBpc(_) => opcode::SET_BPC,
            Self::SetCoercivity(c) => catalog::set_coercivity_opcode(*c),
            Self::CoercivityStatus => opcode::COERCIVITY_STATUS,
            Self::SetLeadingZero(_) => opcode::SET_LEADING_ZERO,
            Self::CheckLeadingZero => opcode::CHECK_LEADING_ZERO,
        }
    }

    /// Parameter bytes following the opcode, if the command takes any.
    pub fn payload(&self) -> Option<Vec<u8>> {
        match self {
            Self::Write { format, tracks } => Some(encode_data_block(*format, tracks)),
            Self::Erase(mask) => Some(encode_erase(*mask)),
            Self::SetBpi { track, bpi } => Some(encode_set_bpi(*track, *bpi)),
            Self::SetBpc(settings) => Some(encode_set_bpc(settings)),
            Self::SetLeadingZero(lz) => Some(encode_set_leading_zero(*lz)),
            _ => None,
        }
    }

    /// Encode the command into its wire bytes.
    pub fn encode(&self) -> Vec<u8> {
        let mut buf = self.opcode().to_vec();
        if let Some(payload) = self.payload() {
            buf.extend_from_slice(&payload);
        }
        buf
    }

    /// Whether the reply is gated on a physical card swipe.
    pub fn waits_for_swipe(&self) -> bool {
        matches!(
            self,
            Self::Read(_) | Self::Write { .. } | Self::Erase(_) | Self::SensorTest
        )
    }

    /// Reset and LED commands are fire-and-forget.
    pub fn expects_reply(&self) -> bool {
        !matches!(self, Self::Reset | Self::Led(_))
    }

    /// Reply payload length when the command set fixes it. Variable-length
    /// replies (identification strings, card data, write failures that
    /// carry device text) return `None`, and so does set-BPC: it echoes four
    /// bytes on success but answers a rejection with a lone `A`.
    pub fn reply_len(&self) -> Option<usize> {
        match self {
            Self::Erase(_)
            | Self::CommunicationTest
            | Self::SensorTest
            | Self::RamTest
            | Self::SetBpi { .. }
            | Self::SetCoercivity(_)
            | Self::CoercivityStatus
            | Self::SetLeadingZero(_) => Some(1),
            Self::CheckLeadingZero => Some(2),
            Self::Reset
            | Self::SetBpc(_)
            | Self::Led(_)
            | Self::Read(_)
            | Self::Write { .. }
            | Self::FirmwareVersion
            | Self::DeviceModel => None,
        }
    }

    /// Documented success reply for commands whose success reply is a
    /// fixed pattern.
    pub fn success_reply(&self) -> Option<&'static [u8]> {
        match self {
            Self::CommunicationTest => Some(catalog::COMMUNICATION_TEST_OK),
            Self::Write { .. }
            | Self::Erase(_)
            | Self::SensorTest
            | Self::RamTest
            | Self::SetBpi { .. }
            | Self::SetCoercivity(_)
            | Self::SetLeadingZero(_) => Some(catalog::STATUS_OK_REPLY),
            _ => None,
        }
    }
}
