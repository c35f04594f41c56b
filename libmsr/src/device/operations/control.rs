// libmsr/src/device/operations/control.rs
//! Reset, LED control and identification queries.

use crate::device::Device;
use crate::protocol::Command;
use crate::transport::Transport;
use crate::types::{DeviceInfo, Led};
use crate::Result;

impl<T: Transport> Device<T> {
    /// Reset the device. The device does not answer, so nothing is read.
    pub fn reset(&mut self) -> Result<()> {
        self.send_command(&Command::Reset)
    }

    pub fn set_leds(&mut self, led: Led) -> Result<()> {
        self.send_command(&Command::Led(led))
    }

    pub fn turn_on_leds(&mut self) -> Result<()> {
        self.set_leds(Led::AllOn)
    }

    pub fn turn_off_leds(&mut self) -> Result<()> {
        self.set_leds(Led::AllOff)
    }

    pub fn turn_on_green_led(&mut self) -> Result<()> {
        self.set_leds(Led::Green)
    }

    pub fn turn_on_yellow_led(&mut self) -> Result<()> {
        self.set_leds(Led::Yellow)
    }

    pub fn turn_on_red_led(&mut self) -> Result<()> {
        self.set_leds(Led::Red)
    }

    /// Firmware version string exactly as the device sent it.
    pub fn firmware_version(&mut self) -> Result<Vec<u8>> {
        Ok(self.execute(&Command::FirmwareVersion)?.into_bytes())
    }

    pub fn device_model(&mut self) -> Result<Vec<u8>> {
        Ok(self.execute(&Command::DeviceModel)?.into_bytes())
    }

    /// Firmware and model in two round trips; the first failure aborts.
    pub fn info(&mut self) -> Result<DeviceInfo> {
        let firmware = self.firmware_version()?;
        let model = self.device_model()?;
        Ok(DeviceInfo { firmware, model })
    }
}
