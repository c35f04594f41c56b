// libmsr/src/protocol/commands/write.rs

use crate::constants::{DATA_BLOCK_BEGIN, END_OF_BLOCK, ESC, MAX_RAW_TRACK_LEN};
use crate::error::ValidationError;
use crate::types::{DataFormat, TrackData};

/// Encode the data block carried by a write command.
/// Layout (ISO):
/// ESC 's' + (ESC track_number track_data)* + '?' FS
/// Raw blocks insert a one-byte length after the track number.
/// Absent tracks contribute no bytes at all.
pub fn encode_data_block(format: DataFormat, tracks: &TrackData) -> Vec<u8> {
    let mut buf = Vec::new();
    buf.extend_from_slice(&DATA_BLOCK_BEGIN);

    for (track, data) in tracks.iter() {
        buf.push(ESC);
        buf.push(track.number());
        if format == DataFormat::Raw {
            buf.push(data.len() as u8);
        }
        buf.extend_from_slice(data);
    }

    buf.extend_from_slice(&END_OF_BLOCK);
    buf
}

/// Check the length rules of a write before anything is sent. Only raw
/// tracks are bounded here (one length byte); ISO content is the caller's
/// encoding contract.
pub fn validate_tracks(format: DataFormat, tracks: &TrackData) -> Result<(), ValidationError> {
    if format == DataFormat::Raw {
        for (track, data) in tracks.iter() {
            if data.len() > MAX_RAW_TRACK_LEN {
                return Err(ValidationError::TrackTooLong {
                    track: track.number(),
                    len: data.len(),
                    max: MAX_RAW_TRACK_LEN,
                });
            }
        }
    }
    Ok(())
}
