// libmsr/src/device/operations/card.rs
//! Swipe-triggered card operations: erase, write and read.

use crate::device::Device;
use crate::error::ValidationError;
use crate::protocol::catalog::{self, Ack, CardStatus};
use crate::protocol::responses::{CardRead, decode_read};
use crate::protocol::{Command, validate_tracks};
use crate::transport::Transport;
use crate::types::{DataFormat, EraseMask, TrackData};
use crate::Result;

impl<T: Transport> Device<T> {
    /// Erase the selected tracks of the next swiped card.
    ///
    /// Returns `false` for any reply other than the success status; the
    /// device reports a failed erase rather than erroring.
    ///
    /// An empty mask is rejected with `NoTracksSelected` before any I/O;
    /// the device would otherwise be sent mask 0 and erase nothing.
    pub fn erase(&mut self, mask: EraseMask) -> Result<bool> {
        if mask.is_empty() {
            return Err(ValidationError::NoTracksSelected.into());
        }
        let resp = self.execute(&Command::Erase(mask))?;
        Ok(catalog::ack(resp.as_bytes()) == Some(Ack::Ok))
    }

    pub fn erase_tracks(&mut self, track1: bool, track2: bool, track3: bool) -> Result<bool> {
        self.erase(EraseMask::from_flags(track1, track2, track3))
    }

    /// Write the present tracks to the next swiped card.
    ///
    /// A failed write is reported through the returned status, which keeps
    /// any text the device sent back.
    pub fn write(&mut self, format: DataFormat, tracks: &TrackData) -> Result<CardStatus> {
        validate_tracks(format, tracks)?;
        let cmd = Command::Write {
            format,
            tracks: tracks.clone(),
        };
        let resp = self.execute(&cmd)?;
        let status = catalog::card_status(resp.as_bytes());
        if !status.is_ok() && self.options().verbose {
            log::debug!("write {} failed: {}", format, status);
        }
        Ok(status)
    }

    pub fn write_iso(&mut self, tracks: &TrackData) -> Result<CardStatus> {
        self.write(DataFormat::Iso, tracks)
    }

    pub fn write_raw(&mut self, tracks: &TrackData) -> Result<CardStatus> {
        self.write(DataFormat::Raw, tracks)
    }

    /// Read the next swiped card.
    pub fn read(&mut self, format: DataFormat) -> Result<CardRead> {
        let resp = self.execute(&Command::Read(format))?;
        Ok(decode_read(format, resp.as_bytes())?)
    }

    pub fn read_iso(&mut self) -> Result<CardRead> {
        self.read(DataFormat::Iso)
    }

    pub fn read_raw(&mut self) -> Result<CardRead> {
        self.read(DataFormat::Raw)
    }
}
