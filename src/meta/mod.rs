#![doc = r#"
Meta events

Meta events only exist in MIDI files. In a track they start with `FF`,
followed by the command byte, the payload length and the payload:

```text
FF <command> <length: VLQ> <data ...>
```

This module models the commands and their data. Meta events carry no
performance data: track names, lyrics, tempo, time and key signatures,
SMPTE offsets and the end of track marker.
"#]

mod key_signature;
pub use key_signature::*;

mod smpte;
pub use smpte::*;

mod smpte_offset;
pub use smpte_offset::*;

mod tempo;
pub use tempo::*;

mod time_signature;
pub use time_signature::*;

use alloc::{string::String, vec::Vec};
use core::fmt;
use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::Channel;

/// The command byte of a meta event.
#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaCommand {
    SequenceNumber = 0x00,
    Text = 0x01,
    Copyright = 0x02,
    TrackName = 0x03,
    InstrumentName = 0x04,
    Lyric = 0x05,
    Marker = 0x06,
    CuePoint = 0x07,
    ChannelPrefix = 0x20,
    EndOfTrack = 0x2F,
    Tempo = 0x51,
    SmpteOffset = 0x54,
    TimeSignature = 0x58,
    KeySignature = 0x59,
    SequencerSpecific = 0x7F,
    TimingClock = 0x8F,
    StartSequence = 0xFA,
    ContinueSequence = 0xFB,
    StopSequence = 0xFC,
}

impl MetaCommand {
    /// Returns the command byte
    #[inline]
    pub const fn byte(&self) -> u8 {
        *self as u8
    }

    /// The command name, as printed in event listings
    pub const fn name(&self) -> &'static str {
        use MetaCommand::*;
        match self {
            SequenceNumber => "Sequence number",
            Text => "Text event",
            Copyright => "Copyright",
            TrackName => "Sequence/Track name",
            InstrumentName => "Instrument name",
            Lyric => "Lyric",
            Marker => "Marker",
            CuePoint => "Cue Point",
            ChannelPrefix => "MIDI Channel Prefix",
            EndOfTrack => "End of Track",
            Tempo => "Tempo",
            SmpteOffset => "SMPTE Offset",
            TimeSignature => "Time Signature",
            KeySignature => "Key Signature",
            SequencerSpecific => "Sequencer specific",
            TimingClock => "Timing Clock",
            StartSequence => "Start current sequence",
            ContinueSequence => "Continue stopped sequence where left off",
            StopSequence => "Stop sequence",
        }
    }

    /// Look up a command from its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        use MetaCommand::*;
        Some(match name {
            "Sequence number" => SequenceNumber,
            "Text event" => Text,
            "Copyright" => Copyright,
            "Sequence/Track name" => TrackName,
            "Instrument name" => InstrumentName,
            "Lyric" => Lyric,
            "Marker" => Marker,
            "Cue Point" => CuePoint,
            "MIDI Channel Prefix" => ChannelPrefix,
            "End of Track" => EndOfTrack,
            "Tempo" => Tempo,
            "SMPTE Offset" => SmpteOffset,
            "Time Signature" => TimeSignature,
            "Key Signature" => KeySignature,
            "Sequencer specific" => SequencerSpecific,
            "Timing Clock" => TimingClock,
            "Start current sequence" => StartSequence,
            "Continue stopped sequence where left off" => ContinueSequence,
            "Stop sequence" => StopSequence,
            _ => return None,
        })
    }
}

impl fmt::Display for MetaCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A meta event and its data
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MetaEvent {
    /// Identifies a pattern in a format 2 file
    SequenceNumber(u16),
    /// Any text
    Text(String),
    /// Copyright notice
    Copyright(String),
    /// Sequence or track name
    TrackName(String),
    /// Instrument name
    InstrumentName(String),
    /// A lyric, usually one syllable
    Lyric(String),
    /// Rehearsal letter or section name
    Marker(String),
    /// Description of something happening on screen or stage
    CuePoint(String),
    /// Associates following meta events with a channel
    ChannelPrefix(Channel),
    /// The mandatory last event of a track
    EndOfTrack,
    /// Tempo change
    Tempo(Tempo),
    /// Where the track starts in SMPTE time
    SmpteOffset(SmpteOffset),
    /// Time signature change
    TimeSignature(TimeSignature),
    /// Key signature change
    KeySignature(KeySignature),
    /// Sequencer-specific data, starting with a manufacturer id
    SequencerSpecific(Vec<u8>),
    /// Timing clock
    TimingClock,
    /// Start the current sequence
    StartSequence,
    /// Continue a stopped sequence where it left off
    ContinueSequence,
    /// Stop the sequence
    StopSequence,
}

impl MetaEvent {
    /// The command byte for this event
    pub const fn command(&self) -> MetaCommand {
        match self {
            Self::SequenceNumber(_) => MetaCommand::SequenceNumber,
            Self::Text(_) => MetaCommand::Text,
            Self::Copyright(_) => MetaCommand::Copyright,
            Self::TrackName(_) => MetaCommand::TrackName,
            Self::InstrumentName(_) => MetaCommand::InstrumentName,
            Self::Lyric(_) => MetaCommand::Lyric,
            Self::Marker(_) => MetaCommand::Marker,
            Self::CuePoint(_) => MetaCommand::CuePoint,
            Self::ChannelPrefix(_) => MetaCommand::ChannelPrefix,
            Self::EndOfTrack => MetaCommand::EndOfTrack,
            Self::Tempo(_) => MetaCommand::Tempo,
            Self::SmpteOffset(_) => MetaCommand::SmpteOffset,
            Self::TimeSignature(_) => MetaCommand::TimeSignature,
            Self::KeySignature(_) => MetaCommand::KeySignature,
            Self::SequencerSpecific(_) => MetaCommand::SequencerSpecific,
            Self::TimingClock => MetaCommand::TimingClock,
            Self::StartSequence => MetaCommand::StartSequence,
            Self::ContinueSequence => MetaCommand::ContinueSequence,
            Self::StopSequence => MetaCommand::StopSequence,
        }
    }

    /// The text of the text-like events
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Text(s)
            | Self::Copyright(s)
            | Self::TrackName(s)
            | Self::InstrumentName(s)
            | Self::Lyric(s)
            | Self::Marker(s)
            | Self::CuePoint(s) => Some(s),
            _ => None,
        }
    }
}

#[test]
fn meta_command_names_round_trip() {
    use pretty_assertions::assert_eq;
    for byte in 0..=u8::MAX {
        let Ok(command) = MetaCommand::try_from(byte) else {
            continue;
        };
        assert_eq!(command.byte(), byte);
        assert_eq!(MetaCommand::from_name(command.name()), Some(command));
    }
    assert_eq!(MetaCommand::try_from(0x2Fu8), Ok(MetaCommand::EndOfTrack));
    assert!(MetaCommand::try_from(0x30u8).is_err());
}
