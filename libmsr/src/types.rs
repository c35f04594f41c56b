// libmsr/src/types.rs

use std::convert::TryFrom;
use std::time::Duration;

use derive_more::Display;

use crate::constants::{BPC_MAX_VALUE, BPC_MIN_VALUE};
use crate::error::ValidationError;

/// Magnetic track selector (1, 2 or 3).
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Track {
    #[display(fmt = "track 1")]
    One = 1,
    #[display(fmt = "track 2")]
    Two = 2,
    #[display(fmt = "track 3")]
    Three = 3,
}

impl Track {
    pub const ALL: [Track; 3] = [Track::One, Track::Two, Track::Three];

    /// Track number as sent on the wire after the ESC header.
    pub const fn number(self) -> u8 {
        self as u8
    }

    const fn index(self) -> usize {
        self as usize - 1
    }
}

impl TryFrom<u8> for Track {
    type Error = ValidationError;

    fn try_from(n: u8) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Track::One),
            2 => Ok(Track::Two),
            3 => Ok(Track::Three),
            other => Err(ValidationError::InvalidTrack(other)),
        }
    }
}

/// Recording density in bits per inch.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Bpi {
    #[display(fmt = "75 bpi")]
    Bpi75,
    #[display(fmt = "210 bpi")]
    Bpi210,
}

impl Bpi {
    pub const fn value(self) -> u16 {
        match self {
            Bpi::Bpi75 => 75,
            Bpi::Bpi210 => 210,
        }
    }
}

impl TryFrom<u16> for Bpi {
    type Error = ValidationError;

    fn try_from(v: u16) -> Result<Self, Self::Error> {
        match v {
            75 => Ok(Bpi::Bpi75),
            210 => Ok(Bpi::Bpi210),
            other => Err(ValidationError::InvalidBpi(other)),
        }
    }
}

/// Bits per character (5..=8) - Newtype Pattern
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bpc(u8);

impl Bpc {
    /// Validate a bits-per-character value for the given track.
    pub fn new(track: Track, value: u8) -> Result<Self, ValidationError> {
        if (BPC_MIN_VALUE..=BPC_MAX_VALUE).contains(&value) {
            Ok(Self(value))
        } else {
            Err(ValidationError::InvalidBpc {
                track: track.number(),
                value,
            })
        }
    }

    pub const fn value(self) -> u8 {
        self.0
    }
}

/// One bits-per-character value per track, in track order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BpcSettings {
    pub track1: Bpc,
    pub track2: Bpc,
    pub track3: Bpc,
}

impl BpcSettings {
    /// Validate each value independently; the first out-of-range track wins.
    pub fn new(track1: u8, track2: u8, track3: u8) -> Result<Self, ValidationError> {
        Ok(Self {
            track1: Bpc::new(Track::One, track1)?,
            track2: Bpc::new(Track::Two, track2)?,
            track3: Bpc::new(Track::Three, track3)?,
        })
    }

    pub fn to_bytes(&self) -> [u8; 3] {
        [self.track1.value(), self.track2.value(), self.track3.value()]
    }
}

/// Card coercivity mode.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Coercivity {
    #[display(fmt = "Hi-Co")]
    High,
    #[display(fmt = "Low-Co")]
    Low,
}

/// Erase selection bitmask: bit 0 = track 1, bit 1 = track 2, bit 2 = track 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct EraseMask(u8);

impl EraseMask {
    pub const ALL: Self = Self(0b111);

    pub fn from_flags(track1: bool, track2: bool, track3: bool) -> Self {
        Self(u8::from(track1) | u8::from(track2) << 1 | u8::from(track3) << 2)
    }

    pub fn from_tracks(tracks: &[Track]) -> Self {
        tracks
            .iter()
            .fold(Self(0), |m, t| Self(m.0 | 1 << t.index()))
    }

    pub const fn bits(self) -> u8 {
        self.0
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    pub fn contains(self, track: Track) -> bool {
        self.0 & (1 << track.index()) != 0
    }
}

/// Per-track card data. Each track is independently optional.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackData {
    tracks: [Option<Vec<u8>>; 3],
}

impl TrackData {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter.
    pub fn with_track(mut self, track: Track, data: impl Into<Vec<u8>>) -> Self {
        self.set(track, data);
        self
    }

    pub fn set(&mut self, track: Track, data: impl Into<Vec<u8>>) {
        self.tracks[track.index()] = Some(data.into());
    }

    pub fn get(&self, track: Track) -> Option<&[u8]> {
        self.tracks[track.index()].as_deref()
    }

    /// Present tracks in track order.
    pub fn iter(&self) -> impl Iterator<Item = (Track, &[u8])> + '_ {
        Track::ALL
            .into_iter()
            .filter_map(move |t| self.get(t).map(|d| (t, d)))
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.iter().all(Option::is_none)
    }
}

/// Track encoding used by read and write operations.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DataFormat {
    #[default]
    #[display(fmt = "iso")]
    Iso,
    #[display(fmt = "raw")]
    Raw,
}

/// LED commands. Each one lights the named LED and turns the others off,
/// except `AllOn`/`AllOff`.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Led {
    #[display(fmt = "all off")]
    AllOff,
    #[display(fmt = "all on")]
    AllOn,
    #[display(fmt = "green")]
    Green,
    #[display(fmt = "yellow")]
    Yellow,
    #[display(fmt = "red")]
    Red,
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SelfTest {
    #[display(fmt = "communication")]
    Communication,
    #[display(fmt = "ram")]
    Ram,
    #[display(fmt = "sensor")]
    Sensor,
}

impl SelfTest {
    pub const ALL: [SelfTest; 3] = [SelfTest::Communication, SelfTest::Ram, SelfTest::Sensor];
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestOutcome {
    pub test: SelfTest,
    pub passed: bool,
}

/// Raw identification strings returned by the device.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeviceInfo {
    pub firmware: Vec<u8>,
    pub model: Vec<u8>,
}

impl DeviceInfo {
    pub fn firmware_lossy(&self) -> String {
        String::from_utf8_lossy(&self.firmware).into_owned()
    }

    pub fn model_lossy(&self) -> String {
        String::from_utf8_lossy(&self.model).into_owned()
    }
}

/// Leading zero counts written before track data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LeadingZero {
    /// Tracks 1 and 3 share a setting.
    pub track13: u8,
    pub track2: u8,
}

/// Per-read timeout of a transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadTimeout {
    Bounded(Duration),
    Unbounded,
}

impl ReadTimeout {
    pub fn is_unbounded(self) -> bool {
        matches!(self, ReadTimeout::Unbounded)
    }
}

impl Default for ReadTimeout {
    fn default() -> Self {
        ReadTimeout::Bounded(crate::utils::default_read_timeout())
    }
}
