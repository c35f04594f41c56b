// Card data and device replies shared by the integration tests.

use libmsr::constants::{ESC, FS};
use libmsr::types::{Track, TrackData};

pub const TRACK1: &[u8] = b"%B4111111111111111^DOE/JOHN^2512101?";
pub const TRACK2: &[u8] = b";4111111111111111=2512101?";
pub const TRACK3: &[u8] = b";0111111111111111?";

pub fn sample_tracks() -> TrackData {
    TrackData::new()
        .with_track(Track::One, TRACK1)
        .with_track(Track::Two, TRACK2)
        .with_track(Track::Three, TRACK3)
}

/// Read reply payload (sentinel excluded) in ISO layout.
pub fn iso_read_payload(tracks: &TrackData, status: u8) -> Vec<u8> {
    let mut v = vec![b's'];
    for track in Track::ALL {
        v.extend_from_slice(&[ESC, track.number()]);
        if let Some(data) = tracks.get(track) {
            v.extend_from_slice(data);
        }
    }
    v.extend_from_slice(&[b'?', FS, ESC, status]);
    v
}

/// Read reply payload (sentinel excluded) in raw layout.
pub fn raw_read_payload(tracks: &TrackData, status: u8) -> Vec<u8> {
    let mut v = vec![b's'];
    for track in Track::ALL {
        let data = tracks.get(track).unwrap_or(&[]);
        v.extend_from_slice(&[ESC, track.number(), data.len() as u8]);
        v.extend_from_slice(data);
    }
    v.extend_from_slice(&[b'?', FS, ESC, status]);
    v
}

pub fn ok_reply() -> Vec<u8> {
    b"0".to_vec()
}

pub fn fail_reply() -> Vec<u8> {
    b"A".to_vec()
}
