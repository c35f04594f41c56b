use libmsr::constants::ESC;
use libmsr::device::{DeviceBuilder, DriverOptions};
use libmsr::protocol::{Command, FramingPolicy};
use libmsr::transport::{MockTransport, Transport};
use libmsr::types::{Coercivity, ReadTimeout};
use libmsr::{Device, Error, FramingError, ProtocolError, ValidationError};

use crate::common::{fixtures, mock_device};

#[test]
fn coercivity_low_status() {
    let mut dev = mock_device(vec![b"L".to_vec()]);
    assert_eq!(dev.coercivity_status().unwrap(), Coercivity::Low);
}

#[test]
fn set_coercivity_then_check() {
    let mut dev = mock_device(vec![fixtures::ok_reply(), b"H".to_vec()]);
    assert!(dev.set_high_coercivity().unwrap());
    assert_eq!(dev.coercivity_status().unwrap(), Coercivity::High);
}

#[test]
fn bpc_out_of_range_rejected_before_io() {
    let mut dev = mock_device(vec![]);
    for (values, track, value) in [((4, 5, 5), 1, 4), ((5, 9, 5), 2, 9), ((5, 5, 0), 3, 0)] {
        let res = dev.set_bpc(values.0, values.1, values.2);
        match res {
            Err(Error::Validation(ValidationError::InvalidBpc { track: t, value: v })) => {
                assert_eq!((t, v), (track, value));
            }
            other => panic!("expected InvalidBpc, got {:?}", other),
        }
    }
    assert!(dev.transport().sent.is_empty());
}

#[test]
fn bpc_short_echo_is_invalid_length() {
    let mut dev = mock_device(vec![vec![b'0', 7]]);
    assert!(matches!(
        dev.set_bpc(7, 7, 7),
        Err(Error::Protocol(ProtocolError::InvalidLength { .. }))
    ));
}

#[test]
fn bpi_invalid_track_rejected_before_io() {
    let mut dev = mock_device(vec![]);
    assert!(matches!(
        dev.set_bpi(0, 210),
        Err(Error::Validation(ValidationError::InvalidTrack(0)))
    ));
    assert!(dev.transport().sent.is_empty());
}

#[test]
fn no_payload_commands_roundtrip_success_reply() {
    let commands = [
        Command::CommunicationTest,
        Command::RamTest,
        Command::SensorTest,
        Command::SetCoercivity(Coercivity::Low),
    ];
    for cmd in commands {
        let reply = cmd.success_reply().unwrap();
        let mut dev = mock_device(vec![reply.to_vec()]);
        let resp = dev.execute(&cmd).unwrap();
        assert_eq!(resp.as_bytes(), reply, "{}", cmd.name());
        assert_eq!(dev.transport().sent, vec![cmd.encode()]);
    }
}

#[test]
fn strict_options_pin_reply_length() {
    let mut mock = MockTransport::new();
    mock.push_reply(b"0y");
    let mut dev = Device::with_options(mock, DriverOptions::default().framing(FramingPolicy::Strict));
    assert!(matches!(
        dev.test_ram(),
        Err(Error::Framing(FramingError::TrailingBytes { .. }))
    ));
}

#[test]
fn strict_bpc_rejection_is_set_failed() {
    let mut mock = MockTransport::new();
    mock.push_reply(b"A");
    mock.push_reply(&[b'0', 6, 7, 8]);
    let mut dev = Device::with_options(mock, DriverOptions::default().framing(FramingPolicy::Strict));
    assert!(matches!(
        dev.set_bpc(5, 5, 5),
        Err(Error::Protocol(ProtocolError::SetFailed(raw))) if raw == b"A"
    ));
    assert_eq!(dev.set_bpc(6, 7, 8).unwrap(), [6, 7, 8]);
}

#[test]
fn builder_device_runs_operations() {
    let mut dev = DeviceBuilder::new()
        .with_transport(Box::new(identification_mock()))
        .verbose(true)
        .read_timeout(ReadTimeout::Bounded(libmsr::ms(500)))
        .build()
        .unwrap();
    let info = dev.info().unwrap();
    assert_eq!(info.firmware_lossy(), "REV0.07");
    assert_eq!(info.model_lossy(), "3S");
    assert_eq!(dev.transport().read_timeout(), ReadTimeout::Bounded(libmsr::ms(500)));
}

fn identification_mock() -> MockTransport {
    crate::common::mock_with_replies(vec![b"REV0.07".to_vec(), b"3S".to_vec()])
}

#[test]
fn leading_zero_query() {
    let mut dev = mock_device(vec![vec![61, 22]]);
    let lz = dev.leading_zero().unwrap();
    assert_eq!((lz.track13, lz.track2), (61, 22));
    assert_eq!(dev.transport().sent[0], vec![ESC, b'l']);
}
