// libmsr/src/protocol/responses/tracks.rs

use crate::constants::{END_OF_BLOCK, ESC};
use crate::error::ProtocolError;
use crate::protocol::catalog::{self, CardStatus};
use crate::protocol::parser;
use crate::types::{DataFormat, Track, TrackData};

type Result<T> = std::result::Result<T, ProtocolError>;

/// Card data returned by a read, with the status the device appended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardRead {
    pub tracks: TrackData,
    pub status: CardStatus,
}

/// Decode a read reply (leading ESC already stripped).
/// Layout:
/// 's' + (ESC track_number track_data)* + '?' FS + ESC status
/// Raw replies carry a one-byte length before each track's data, so raw
/// data may itself contain ESC. Tracks reported empty are left absent.
pub fn decode_read(format: DataFormat, reply: &[u8]) -> Result<CardRead> {
    let (body, status) = catalog::split_read_status(reply).ok_or_else(|| {
        ProtocolError::MalformedBlock("missing trailing status".to_string())
    })?;
    let status = catalog::card_status(status);

    let body = parser::strip_prefix(body, &[b's'], "block start")?;
    let body = parser::strip_suffix(body, &END_OF_BLOCK, "end of block")?;

    let tracks = match format {
        DataFormat::Iso => decode_iso_tracks(body)?,
        DataFormat::Raw => decode_raw_tracks(body)?,
    };
    Ok(CardRead { tracks, status })
}

fn track_header(data: &[u8]) -> Result<(Track, &[u8])> {
    match data {
        [ESC, n, rest @ ..] => {
            let track = Track::try_from(*n)
                .map_err(|e| ProtocolError::MalformedBlock(e.to_string()))?;
            Ok((track, rest))
        }
        _ => Err(ProtocolError::MalformedBlock(format!(
            "expected track header, found {:02x?}",
            &data[..data.len().min(2)]
        ))),
    }
}

fn decode_iso_tracks(mut rest: &[u8]) -> Result<TrackData> {
    let mut tracks = TrackData::new();
    while !rest.is_empty() {
        let (track, after) = track_header(rest)?;
        let end = after.iter().position(|&b| b == ESC).unwrap_or(after.len());
        if end > 0 {
            tracks.set(track, &after[..end]);
        }
        rest = &after[end..];
    }
    Ok(tracks)
}

fn decode_raw_tracks(mut rest: &[u8]) -> Result<TrackData> {
    let mut tracks = TrackData::new();
    while !rest.is_empty() {
        let (track, after) = track_header(rest)?;
        let len = parser::byte_at(after, 0)? as usize;
        let data = parser::slice_at(after, 1, len)?;
        if len > 0 {
            tracks.set(track, data);
        }
        rest = &after[1 + len..];
    }
    Ok(tracks)
}
