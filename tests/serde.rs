#![cfg(feature = "serde")]

use midix_event::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn control_change_rejects_status_range_bytes() {
    let json = r#"{"Voice":{"ControlChange":{"controller":200,"value":255}}}"#;
    let err = serde_json::from_str::<EventKind>(json).unwrap_err();
    assert!(err.to_string().contains("0xC8 is not a data byte"), "{err}");

    let json = r#"{"Voice":{"ControlChange":{"controller":7,"value":100}}}"#;
    let kind: EventKind = serde_json::from_str(json).unwrap();
    let event = TrackEvent::new(0, Channel::One, kind);
    assert_eq!(event.encode().unwrap(), vec![0x00, 0xB0, 0x07, 0x64]);
}

#[test]
fn seven_bit_fields_are_checked() {
    assert!(serde_json::from_str::<DataByte>("128").is_err());
    assert!(serde_json::from_str::<Note>("128").is_err());
    assert!(serde_json::from_str::<Velocity>("200").is_err());
    assert!(serde_json::from_str::<Program>("255").is_err());
    assert_eq!(serde_json::from_str::<Note>("60").unwrap(), Note::MIDDLE_C);
}

#[test]
fn pitch_bend_is_fourteen_bits() {
    assert!(serde_json::from_str::<PitchBend>("16384").is_err());
    assert_eq!(
        serde_json::from_str::<PitchBend>("16383").unwrap(),
        PitchBend::MAX
    );
}

#[test]
fn nibble_types_keep_their_ranges() {
    assert!(serde_json::from_str::<StrayType>("7").is_err());
    assert!(serde_json::from_str::<UnknownType>("2").is_err());
    assert_eq!(
        serde_json::from_str::<StrayType>("2").unwrap(),
        StrayType::new(0x2).unwrap()
    );
}

#[test]
fn key_signature_out_of_range_is_rejected() {
    let err = serde_json::from_str::<KeySignature>(r#"{"key":100,"scale":"Major"}"#).unwrap_err();
    assert!(err.to_string().contains("outside -7..=7"), "{err}");

    let key: KeySignature = serde_json::from_str(r#"{"key":2,"scale":"Major"}"#).unwrap();
    let event = TrackEvent::meta(0, MetaEvent::KeySignature(key));
    assert_eq!(event.to_string(), "Ch 0 @ 0 \tKey Signature -> D major");
}

#[test]
fn meta_structs_are_validated() {
    let json = r#"{"numerator":4,"denominator_power":8,"clocks_per_click":24,"notated_32nds_per_quarter":8}"#;
    assert!(serde_json::from_str::<TimeSignature>(json).is_err());

    let json =
        r#"{"fps":"TwentyFour","hour":24,"minute":0,"second":0,"frame":0,"subframe":0}"#;
    assert!(serde_json::from_str::<SmpteOffset>(json).is_err());

    let json =
        r#"{"fps":"TwentyFour","hour":1,"minute":2,"second":3,"frame":24,"subframe":0}"#;
    assert!(serde_json::from_str::<SmpteOffset>(json).is_err());

    let tempo: Tempo = serde_json::from_str("16777216").unwrap();
    assert_eq!(tempo.micros_per_quarter_note(), Tempo::MAX_MICROS);
}

#[test]
fn events_survive_serialization() {
    let events = [
        TrackEvent::new(
            480,
            Channel::Ten,
            VoiceEvent::NoteOn {
                note: Note::MIDDLE_C,
                velocity: Velocity::MAX,
            },
        ),
        TrackEvent::new(0, Channel::Two, VoiceEvent::PitchBend(PitchBend::CENTER)),
        TrackEvent::meta(
            0,
            MetaEvent::SmpteOffset(
                SmpteOffset::new(SmpteFps::TwentyNine, 1, 23, 45, 12, 34).unwrap(),
            ),
        ),
        TrackEvent::meta(
            0,
            MetaEvent::KeySignature(KeySignature::new(-3, Scale::Minor).unwrap()),
        ),
    ];
    for event in events {
        let json = serde_json::to_string(&event).unwrap();
        let back: TrackEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(back, event);
    }
}
