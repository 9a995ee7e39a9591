use core::fmt;

use super::ChannelModeMessage;
use crate::{DataByte, Note, ValueError, Velocity, message::MessageType};

#[doc = r#"
The payload of a channel voice message.

Each variant holds exactly the data bytes its message type writes.

| variant               | type  | payload                 |
|-----------------------|-------|-------------------------|
| `NoteOff`             | `0x8` | note, velocity          |
| `NoteOn`              | `0x9` | note, velocity          |
| `Aftertouch`          | `0xA` | note, velocity          |
| `ControlChange`       | `0xB` | controller, value       |
| `ProgramChange`       | `0xC` | program                 |
| `ChannelAftertouch`   | `0xD` | pressure                |
| `PitchBend`           | `0xE` | lsb, msb                |
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VoiceEvent {
    /// Release a note
    NoteOff {
        /// the note released
        note: Note,
        /// release velocity
        velocity: Velocity,
    },
    /// Press a note
    NoteOn {
        /// the note pressed
        note: Note,
        /// how hard. Zero is conventionally a note off.
        velocity: Velocity,
    },
    /// Polyphonic key pressure
    Aftertouch {
        /// the key under pressure
        note: Note,
        /// the pressure
        velocity: Velocity,
    },
    /// A controller value changed.
    ///
    /// Controllers `120-127` are channel mode messages, see [`ChannelModeMessage`].
    ControlChange {
        /// the controller number
        controller: DataByte,
        /// its new value
        value: DataByte,
    },
    /// The patch changed
    ///
    /// One data byte, as MIDI defines it. There is no second value byte, so
    /// [`TrackEvent::encode`](crate::event::TrackEvent::encode) and
    /// [`TrackEvent::payload_size`](crate::event::TrackEvent::payload_size) agree on one.
    ProgramChange {
        /// the new program
        program: Program,
    },
    /// Channel pressure: the single greatest pressure of all held keys
    ChannelAftertouch {
        /// the pressure
        pressure: DataByte,
    },
    /// The pitch wheel moved
    PitchBend(PitchBend),
}

impl VoiceEvent {
    /// The message type written in the status byte
    pub const fn msg_type(&self) -> MessageType {
        match self {
            Self::NoteOff { .. } => MessageType::NoteOff,
            Self::NoteOn { .. } => MessageType::NoteOn,
            Self::Aftertouch { .. } => MessageType::Aftertouch,
            Self::ControlChange { .. } => MessageType::ControlChange,
            Self::ProgramChange { .. } => MessageType::ProgramChange,
            Self::ChannelAftertouch { .. } => MessageType::ChannelAftertouch,
            Self::PitchBend(_) => MessageType::PitchWheelChange,
        }
    }

    /// The data bytes following the status byte, and how many of them are used.
    pub const fn data_bytes(&self) -> ([u8; 2], usize) {
        match self {
            Self::NoteOff { note, velocity }
            | Self::NoteOn { note, velocity }
            | Self::Aftertouch { note, velocity } => ([note.byte(), velocity.byte()], 2),
            Self::ControlChange { controller, value } => ([controller.value(), value.value()], 2),
            Self::ProgramChange { program } => ([program.byte(), 0], 1),
            Self::ChannelAftertouch { pressure } => ([pressure.value(), 0], 1),
            Self::PitchBend(bend) => ([bend.lsb(), bend.msb()], 2),
        }
    }

    /// The note, for note and aftertouch events
    pub const fn note(&self) -> Option<Note> {
        match self {
            Self::NoteOff { note, .. } | Self::NoteOn { note, .. } | Self::Aftertouch { note, .. } => {
                Some(*note)
            }
            _ => None,
        }
    }

    /// The velocity, for note and aftertouch events
    pub const fn velocity(&self) -> Option<Velocity> {
        match self {
            Self::NoteOff { velocity, .. }
            | Self::NoteOn { velocity, .. }
            | Self::Aftertouch { velocity, .. } => Some(*velocity),
            _ => None,
        }
    }

    /// Returns the channel mode message if this is a control change on controllers `120-127`.
    pub const fn channel_mode(&self) -> Option<ChannelModeMessage> {
        match self {
            Self::ControlChange { controller, value } => {
                ChannelModeMessage::from_control(*controller, *value)
            }
            _ => None,
        }
    }
}

/// A patch number, `0-127`
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Program(DataByte);

impl Program {
    /// Create a program, checking for the leading 0 bit.
    pub const fn new(byte: u8) -> Result<Self, ValueError> {
        match DataByte::new(byte) {
            Ok(b) => Ok(Self(b)),
            Err(e) => Err(e),
        }
    }

    /// Returns the underlying byte
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

impl TryFrom<u8> for Program {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Program> for u8 {
    fn from(value: Program) -> Self {
        value.byte()
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[doc = r#"
A 14-bit pitch wheel position.

`0x2000` is the centre (no bend). On the wire the value is split into two
7-bit bytes, least significant first.

# Example
```rust
# use midix_event::prelude::*;
let bend = PitchBend::new(0x2000).unwrap();
assert_eq!(bend, PitchBend::CENTER);
assert_eq!((bend.lsb(), bend.msb()), (0x00, 0x40));
assert_eq!(bend.relative(), 0);
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u16", into = "u16")
)]
pub struct PitchBend(u16);

impl Default for PitchBend {
    fn default() -> Self {
        Self::CENTER
    }
}

impl TryFrom<u16> for PitchBend {
    type Error = ValueError;
    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<PitchBend> for u16 {
    fn from(value: PitchBend) -> Self {
        value.0
    }
}

impl PitchBend {
    /// Fully down
    pub const MIN: Self = Self(0);
    /// No bend
    pub const CENTER: Self = Self(0x2000);
    /// Fully up
    pub const MAX: Self = Self(0x3FFF);

    /// Create a pitch bend from an absolute 14-bit value.
    pub const fn new(value: u16) -> Result<Self, ValueError> {
        if value > Self::MAX.0 {
            return Err(ValueError::PitchBend(value));
        }
        Ok(Self(value))
    }

    /// Create a pitch bend, discarding bits 14 and 15.
    pub const fn new_unchecked(value: u16) -> Self {
        Self(value & 0x3FFF)
    }

    /// Join two data bytes, least significant first
    pub const fn from_bytes(lsb: DataByte, msb: DataByte) -> Self {
        Self(((msb.value() as u16) << 7) | lsb.value() as u16)
    }

    /// Create a pitch bend relative to the centre, `-8192..=8191`.
    pub const fn from_relative(value: i16) -> Result<Self, ValueError> {
        if value < Self::MIN.relative() || value > Self::MAX.relative() {
            return Err(ValueError::RelativePitchBend(value));
        }
        Ok(Self((value + Self::CENTER.0 as i16) as u16))
    }

    /// The absolute 14-bit value
    #[inline]
    pub const fn value(&self) -> u16 {
        self.0
    }

    /// Distance from the centre, `-8192..=8191`
    #[inline]
    pub const fn relative(&self) -> i16 {
        self.0 as i16 - Self::CENTER.0 as i16
    }

    /// The least significant 7 bits
    #[inline]
    pub const fn lsb(&self) -> u8 {
        (self.0 & 0x7F) as u8
    }

    /// The most significant 7 bits
    #[inline]
    pub const fn msb(&self) -> u8 {
        ((self.0 >> 7) & 0x7F) as u8
    }
}

#[test]
fn pitch_bend_splits_into_seven_bit_bytes() {
    use pretty_assertions::assert_eq;
    let bend = PitchBend::new(0x3FFF).unwrap();
    assert_eq!((bend.lsb(), bend.msb()), (0x7F, 0x7F));

    let bend = PitchBend::new(0x0081).unwrap();
    assert_eq!((bend.lsb(), bend.msb()), (0x01, 0x01));

    let joined = PitchBend::from_bytes(DataByte::new_unchecked(0x01), DataByte::new_unchecked(0x01));
    assert_eq!(joined, bend);

    assert_eq!(PitchBend::new(0x4000), Err(ValueError::PitchBend(0x4000)));
    assert_eq!(PitchBend::new_unchecked(0xFFFF), PitchBend::MAX);
}

#[test]
fn relative_pitch_bend() {
    use pretty_assertions::assert_eq;
    assert_eq!(PitchBend::MIN.relative(), -8192);
    assert_eq!(PitchBend::MAX.relative(), 8191);
    assert_eq!(PitchBend::from_relative(-8192), Ok(PitchBend::MIN));
    assert_eq!(PitchBend::from_relative(100).unwrap().value(), 0x2064);
    assert_eq!(
        PitchBend::from_relative(8192),
        Err(ValueError::RelativePitchBend(8192))
    );
    assert_eq!(
        PitchBend::from_relative(-808 - 8192),
        Err(ValueError::RelativePitchBend(-9000))
    );
    assert_eq!(
        PitchBend::from_relative(i16::MIN),
        Err(ValueError::RelativePitchBend(i16::MIN))
    );
}

#[test]
fn program_change_has_one_data_byte() {
    use pretty_assertions::assert_eq;
    let event = VoiceEvent::ProgramChange {
        program: Program::new(42).unwrap(),
    };
    assert_eq!(event.data_bytes(), ([42, 0], 1));
    assert_eq!(event.msg_type(), MessageType::ProgramChange);
}
