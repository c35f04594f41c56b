use libmsr::constants::{ESC, FS};
use libmsr::protocol::Command;
use libmsr::types::{
    Bpi, BpcSettings, Coercivity, DataFormat, EraseMask, LeadingZero, Led, Track, TrackData,
};

use crate::common::fixtures;

#[test]
fn erase_mask_bits_per_track() {
    let cases = [
        ((true, false, false), 0b001),
        ((false, true, false), 0b010),
        ((false, false, true), 0b100),
        ((true, false, true), 0b101),
        ((true, true, true), 0b111),
    ];
    for ((t1, t2, t3), bits) in cases {
        let cmd = Command::Erase(EraseMask::from_flags(t1, t2, t3));
        assert_eq!(cmd.encode(), vec![ESC, b'c', bits]);
    }
}

#[test]
fn write_single_track_has_single_header() {
    let tracks = TrackData::new().with_track(Track::Two, fixtures::TRACK2);
    let bytes = Command::Write {
        format: DataFormat::Iso,
        tracks,
    }
    .encode();

    let mut expected = vec![ESC, b'w', ESC, b's', ESC, 2];
    expected.extend_from_slice(fixtures::TRACK2);
    expected.extend_from_slice(&[b'?', FS]);
    assert_eq!(bytes, expected);
}

#[test]
fn write_raw_carries_lengths() {
    let tracks = TrackData::new()
        .with_track(Track::One, vec![0xAA, ESC])
        .with_track(Track::Three, vec![0x01]);
    let bytes = Command::Write {
        format: DataFormat::Raw,
        tracks,
    }
    .encode();
    assert_eq!(
        bytes,
        vec![ESC, b'n', ESC, b's', ESC, 1, 2, 0xAA, ESC, ESC, 3, 1, 0x01, b'?', FS]
    );
}

#[test]
fn bpi_codes() {
    let cases = [
        (Track::One, Bpi::Bpi75, 0x4B),
        (Track::One, Bpi::Bpi210, 0xD2),
        (Track::Two, Bpi::Bpi75, 0xA0),
        (Track::Two, Bpi::Bpi210, 0xA1),
        (Track::Three, Bpi::Bpi75, 0xC0),
        (Track::Three, Bpi::Bpi210, 0xC1),
    ];
    for (track, bpi, code) in cases {
        assert_eq!(
            Command::SetBpi { track, bpi }.encode(),
            vec![ESC, b'b', code]
        );
    }
}

#[test]
fn parameterised_settings() {
    let bpc = BpcSettings::new(7, 5, 8).unwrap();
    assert_eq!(Command::SetBpc(bpc).encode(), vec![ESC, b'o', 7, 5, 8]);

    let lz = LeadingZero {
        track13: 61,
        track2: 22,
    };
    assert_eq!(
        Command::SetLeadingZero(lz).encode(),
        vec![ESC, b'z', 61, 22]
    );
}

#[test]
fn opcode_only_commands() {
    let cases: Vec<(Command, Vec<u8>)> = vec![
        (Command::Reset, vec![ESC, b'a']),
        (Command::Read(DataFormat::Iso), vec![ESC, b'r']),
        (Command::Read(DataFormat::Raw), vec![ESC, b'm']),
        (Command::CommunicationTest, vec![ESC, b'e']),
        (Command::SensorTest, vec![ESC, 0x86]),
        (Command::RamTest, vec![ESC, 0x87]),
        (Command::Led(Led::AllOff), vec![ESC, 0x81]),
        (Command::Led(Led::Yellow), vec![ESC, 0x84]),
        (Command::FirmwareVersion, vec![ESC, b'v']),
        (Command::DeviceModel, vec![ESC, b't']),
        (Command::SetCoercivity(Coercivity::High), vec![ESC, b'x']),
        (Command::SetCoercivity(Coercivity::Low), vec![ESC, b'y']),
        (Command::CoercivityStatus, vec![ESC, b'd']),
        (Command::CheckLeadingZero, vec![ESC, b'l']),
    ];
    for (cmd, bytes) in cases {
        assert_eq!(cmd.encode(), bytes, "{}", cmd.name());
        assert_eq!(cmd.opcode(), &bytes[..]);
        assert!(cmd.payload().is_none());
    }
}

#[test]
fn swipe_wait_commands() {
    assert!(Command::Read(DataFormat::Iso).waits_for_swipe());
    assert!(Command::Erase(EraseMask::ALL).waits_for_swipe());
    assert!(Command::SensorTest.waits_for_swipe());
    assert!(!Command::RamTest.waits_for_swipe());
    assert!(!Command::FirmwareVersion.waits_for_swipe());
}
