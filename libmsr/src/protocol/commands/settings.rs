// libmsr/src/protocol/commands/settings.rs

use crate::protocol::catalog;
use crate::types::{Bpi, BpcSettings, EraseMask, LeadingZero, Track};

/// Parameter of the erase command: the selection bitmask.
pub fn encode_erase(mask: EraseMask) -> Vec<u8> {
    vec![mask.bits()]
}

/// Parameter of the set-BPI command: one code byte per (track, density).
pub fn encode_set_bpi(track: Track, bpi: Bpi) -> Vec<u8> {
    vec![catalog::bpi_code(track, bpi)]
}

/// Parameters of the set-BPC command: track 1, 2, 3 values in order.
pub fn encode_set_bpc(settings: &BpcSettings) -> Vec<u8> {
    settings.to_bytes().to_vec()
}

/// Parameters of the set-leading-zero command.
pub fn encode_set_leading_zero(lz: LeadingZero) -> Vec<u8> {
    vec![lz.track13, lz.track2]
}
