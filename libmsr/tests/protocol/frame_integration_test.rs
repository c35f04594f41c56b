use libmsr::constants::{ESC, MAX_RESPONSE_LEN};
use libmsr::protocol::codec::decode_response;
use libmsr::protocol::{Command, FramingPolicy};
use libmsr::transport::{MockTransport, Transport};
use libmsr::types::{BpcSettings, EraseMask, ReadTimeout};
use libmsr::{Error, FramingError};

#[test]
fn reply_ends_at_idle_gap() {
    let mut m = MockTransport::new();
    m.push_reply(b"REV1.12");
    m.push_reply(b"3");

    let first = decode_response(&mut m, &Command::FirmwareVersion, FramingPolicy::IdleGap).unwrap();
    assert_eq!(first.as_bytes(), b"REV1.12");
    let second = decode_response(&mut m, &Command::DeviceModel, FramingPolicy::IdleGap).unwrap();
    assert_eq!(second.as_bytes(), b"3");
    assert_eq!(m.remaining(), 0);
}

#[test]
fn silent_device_is_no_response() {
    let mut m = MockTransport::new();
    assert!(matches!(
        decode_response(&mut m, &Command::RamTest, FramingPolicy::IdleGap),
        Err(Error::Framing(FramingError::NoResponse))
    ));
}

#[test]
fn erase_waits_then_restores_timeout() {
    let mut m = MockTransport::new();
    let before = m.read_timeout();
    m.push_reply(b"0");

    let resp = decode_response(&mut m, &Command::Erase(EraseMask::ALL), FramingPolicy::IdleGap).unwrap();
    assert_eq!(resp.as_bytes(), b"0");
    assert_eq!(m.reads[0], ReadTimeout::Unbounded);
    assert!(m.reads[1..].iter().all(|t| *t == before));
    assert_eq!(m.timeout_changes, vec![ReadTimeout::Unbounded, before]);
}

#[test]
fn timeout_restored_when_swipe_read_fails() {
    let mut m = MockTransport::new();
    let before = m.read_timeout();
    m.push_raw_reply(b"0");

    let res = decode_response(&mut m, &Command::SensorTest, FramingPolicy::IdleGap);
    assert!(matches!(
        res,
        Err(Error::Framing(FramingError::UnexpectedSentinel(b'0')))
    ));
    assert_eq!(m.timeout_changes.last(), Some(&before));
}

#[test]
fn strict_framing_rejects_short_and_long_replies() {
    let mut m = MockTransport::new();
    m.push_reply(&[61]);
    assert!(matches!(
        decode_response(&mut m, &Command::CheckLeadingZero, FramingPolicy::Strict),
        Err(Error::Framing(FramingError::Truncated {
            expected: 2,
            actual: 1
        }))
    ));

    let mut m = MockTransport::new();
    m.push_reply(b"00");
    assert!(matches!(
        decode_response(&mut m, &Command::RamTest, FramingPolicy::Strict),
        Err(Error::Framing(FramingError::TrailingBytes {
            expected: 1,
            ..
        }))
    ));
}

#[test]
fn strict_framing_keeps_bpc_rejection_intact() {
    let bpc = Command::SetBpc(BpcSettings::new(5, 5, 5).unwrap());
    let mut m = MockTransport::new();
    m.push_reply(b"A");
    let resp = decode_response(&mut m, &bpc, FramingPolicy::Strict).unwrap();
    assert_eq!(resp.as_bytes(), b"A");
}

#[test]
fn strict_framing_accepts_exact_reply() {
    let mut m = MockTransport::new();
    m.push_reply(&[61, 22]);
    let resp = decode_response(&mut m, &Command::CheckLeadingZero, FramingPolicy::Strict).unwrap();
    assert_eq!(resp.as_bytes(), &[61, 22]);
}

#[test]
fn endless_stream_overruns() {
    let mut m = MockTransport::new();
    m.push_bytes(&[ESC]);
    m.push_raw_reply(&vec![b'x'; MAX_RESPONSE_LEN + 1]);
    assert!(matches!(
        decode_response(&mut m, &Command::FirmwareVersion, FramingPolicy::IdleGap),
        Err(Error::Framing(FramingError::Overrun { .. }))
    ));
}
