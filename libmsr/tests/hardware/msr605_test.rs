#![cfg(feature = "serial")]

//! Hardware checks against a real MSR605. They are `#[ignore]`d and also
//! skip when `MSR_PORT` is unset, so CI never touches a serial port.
//!
//! MSR_PORT=/dev/ttyUSB0 cargo test -p libmsr --test hardware --features serial -- --ignored

use serial_test::serial;

use libmsr::device::{Device, DeviceBuilder};
use libmsr::transport::SerialConfig;
use libmsr::Result;

fn open_device() -> Result<Option<Device>> {
    let Ok(path) = std::env::var("MSR_PORT") else {
        return Ok(None);
    };
    let device = DeviceBuilder::new()
        .with_serial(&SerialConfig::new(path))?
        .verbose(true)
        .build()?;
    Ok(Some(device))
}

#[test]
#[ignore]
#[serial]
fn communication_and_ram_tests_pass() -> Result<()> {
    let Some(mut dev) = open_device()? else {
        return Ok(());
    };
    assert!(dev.test_communication()?);
    assert!(dev.test_ram()?);
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn identification_is_not_empty() -> Result<()> {
    let Some(mut dev) = open_device()? else {
        return Ok(());
    };
    let info = dev.info()?;
    assert!(!info.firmware.is_empty());
    assert!(!info.model.is_empty());
    Ok(())
}

#[test]
#[ignore]
#[serial]
fn coercivity_roundtrip() -> Result<()> {
    let Some(mut dev) = open_device()? else {
        return Ok(());
    };
    let before = dev.coercivity_status()?;
    dev.set_coercivity(before)?;
    assert_eq!(dev.coercivity_status()?, before);
    Ok(())
}
