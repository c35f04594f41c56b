// libmsr/src/device/operations/settings.rs
//! Device-resident settings: coercivity, bits per inch, bits per character
//! and leading zeros. Nothing is cached; every getter asks the device.

use crate::device::Device;
use crate::error::ProtocolError;
use crate::protocol::catalog::{self, Ack};
use crate::protocol::{Command, parser};
use crate::transport::Transport;
use crate::types::{Bpi, BpcSettings, Coercivity, LeadingZero, Track};
use crate::Result;

impl<T: Transport> Device<T> {
    pub fn coercivity_status(&mut self) -> Result<Coercivity> {
        let resp = self.execute(&Command::CoercivityStatus)?;
        catalog::coercivity(resp.as_bytes())
            .ok_or_else(|| ProtocolError::UnknownStatus(resp.into_bytes()).into())
    }

    /// Switch coercivity mode. Any reply other than success is an error.
    pub fn set_coercivity(&mut self, coercivity: Coercivity) -> Result<bool> {
        let resp = self.execute(&Command::SetCoercivity(coercivity))?;
        match catalog::ack(resp.as_bytes()) {
            Some(Ack::Ok) => Ok(true),
            _ => Err(ProtocolError::SetFailed(resp.into_bytes()).into()),
        }
    }

    pub fn set_high_coercivity(&mut self) -> Result<bool> {
        self.set_coercivity(Coercivity::High)
    }

    pub fn set_low_coercivity(&mut self) -> Result<bool> {
        self.set_coercivity(Coercivity::Low)
    }

    /// Set the recording density of one track.
    ///
    /// `track` must be 1, 2 or 3 and `value` 75 or 210; both are checked
    /// before anything is sent. Returns `false` when the device explicitly
    /// refuses.
    pub fn set_bpi(&mut self, track: u8, value: u16) -> Result<bool> {
        let track = Track::try_from(track)?;
        let bpi = Bpi::try_from(value)?;
        let resp = self.execute(&Command::SetBpi { track, bpi })?;
        match catalog::ack(resp.as_bytes()) {
            Some(Ack::Ok) => Ok(true),
            Some(Ack::Fail) => Ok(false),
            None => Err(ProtocolError::UnknownResponse(resp.into_bytes()).into()),
        }
    }

    /// Set bits per character for the three tracks and return the values
    /// the device echoes back, in track order.
    pub fn set_bpc(&mut self, track1: u8, track2: u8, track3: u8) -> Result<[u8; 3]> {
        let settings = BpcSettings::new(track1, track2, track3)?;
        let resp = self.execute(&Command::SetBpc(settings))?;
        let data = resp.as_bytes();

        if parser::byte_at(data, 0)? != catalog::STATUS_OK {
            return Err(ProtocolError::SetFailed(resp.into_bytes()).into());
        }
        Ok(parser::array_at::<3>(data, 1)?)
    }

    /// Set the leading zero counts; tracks 1 and 3 share `track13`.
    pub fn set_leading_zero(&mut self, track13: u8, track2: u8) -> Result<bool> {
        let cmd = Command::SetLeadingZero(LeadingZero { track13, track2 });
        let resp = self.execute(&cmd)?;
        match catalog::ack(resp.as_bytes()) {
            Some(Ack::Ok) => Ok(true),
            Some(Ack::Fail) => Ok(false),
            None => Err(ProtocolError::UnknownResponse(resp.into_bytes()).into()),
        }
    }

    pub fn leading_zero(&mut self) -> Result<LeadingZero> {
        let resp = self.execute(&Command::CheckLeadingZero)?;
        let [track13, track2] = parser::array_at::<2>(resp.as_bytes(), 0)?;
        Ok(LeadingZero { track13, track2 })
    }
}
