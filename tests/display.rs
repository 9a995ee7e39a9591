use midix_event::prelude::*;
use pretty_assertions::assert_eq;

#[test]
fn note_on_lists_velocity_and_note() {
    let event = TrackEvent::new(
        96,
        Channel::Three,
        VoiceEvent::NoteOn {
            note: Note::new(Key::G, Octave::new(4)),
            velocity: Velocity::new(80).unwrap(),
        },
    );
    assert_eq!(event.to_string(), "Ch 2 @ 96 \tNoteOn Vel: 80 Note: G4");
}

#[test]
fn silent_velocity_is_omitted() {
    let event = TrackEvent::new(
        0,
        Channel::One,
        VoiceEvent::NoteOff {
            note: Note::MIDDLE_C,
            velocity: Velocity::ZERO,
        },
    );
    assert_eq!(event.to_string(), "Ch 0 @ 0 \tNoteOff");
}

#[test]
fn channel_mode_controllers_are_named() {
    let event = TrackEvent::new(
        10,
        Channel::One,
        VoiceEvent::ControlChange {
            controller: DataByte::new(121).unwrap(),
            value: DataByte::new(0).unwrap(),
        },
    );
    assert_eq!(
        event.to_string(),
        "Ch 0 @ 10 \tControlChange 121 -> 0 (Reset All Controllers)"
    );
}

#[test]
fn pitch_bend_prints_relative_position() {
    let event = TrackEvent::new(0, Channel::One, VoiceEvent::PitchBend(PitchBend::MIN));
    assert_eq!(event.to_string(), "Ch 0 @ 0 \tPitchWheelChange -8192");
}

#[test]
fn unknown_types_print_their_nibble() {
    let event = TrackEvent::new(4, Channel::Two, UnknownType::new(0x7).unwrap());
    assert_eq!(event.to_string(), "Ch 1 @ 4 \t0X7");

    let event = TrackEvent::new(4, Channel::Two, StrayType::new(0x2).unwrap());
    assert_eq!(event.to_string(), "Ch 1 @ 4 \t0X2");
}

#[test]
fn meta_events_print_their_command() {
    let name = TrackEvent::meta(0, MetaEvent::TrackName("Piano".into()));
    assert_eq!(name.to_string(), "Ch 0 @ 0 \tSequence/Track name -> Piano");

    let signature = TrackEvent::meta(
        0,
        MetaEvent::TimeSignature(TimeSignature::new(6, 3, 36, 8).unwrap()),
    );
    assert_eq!(signature.to_string(), "Ch 0 @ 0 \tTime Signature -> 6/8");

    let tempo = TrackEvent::meta(0, MetaEvent::Tempo(Tempo::from_bpm(90)));
    assert_eq!(tempo.to_string(), "Ch 0 @ 0 \tTempo -> 90 bpm");

    let key = TrackEvent::meta(
        0,
        MetaEvent::KeySignature(KeySignature::new(2, Scale::Major).unwrap()),
    );
    assert_eq!(key.to_string(), "Ch 0 @ 0 \tKey Signature -> D major");

    let end = TrackEvent::meta(384, MetaEvent::EndOfTrack);
    assert_eq!(end.to_string(), "Ch 0 @ 384 \tEnd of Track");
}

#[test]
fn smpte_offset_prints_time_code() {
    let offset = SmpteOffset::new(SmpteFps::TwentyNine, 1, 23, 45, 12, 34).unwrap();
    let event = TrackEvent::meta(0, MetaEvent::SmpteOffset(offset));
    assert_eq!(
        event.to_string(),
        "Ch 0 @ 0 \tSMPTE Offset -> 01:23:45:12.34 @ 29.97 fps"
    );
}
