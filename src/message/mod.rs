#![doc = r#"
Message types and channel message payloads

The high nibble of a track event's status byte is its message type.
[`MessageType`] names the types this crate knows a layout for; the rest
are carried by [`EventKind::Stray`](crate::event::EventKind::Stray) and
[`EventKind::Unknown`](crate::event::EventKind::Unknown).
"#]

mod channel;
pub use channel::*;

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// A status nibble with a known meaning.
///
/// See <http://www.midi.org/techspecs/midimessages.php>
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MessageType {
    /// `0x8`
    NoteOff = 0x8,
    /// `0x9`
    NoteOn = 0x9,
    /// `0xA`, polyphonic key pressure
    Aftertouch = 0xA,
    /// `0xB`, includes the channel mode messages
    ControlChange = 0xB,
    /// `0xC`
    ProgramChange = 0xC,
    /// `0xD`, channel pressure
    ChannelAftertouch = 0xD,
    /// `0xE`
    PitchWheelChange = 0xE,
    /// `0xF`, meta events in a file
    Meta = 0xF,
}

impl MessageType {
    /// Returns the status nibble
    #[inline]
    pub const fn nibble(&self) -> u8 {
        *self as u8
    }

    /// Returns true for the channel voice types (`0x8-0xE`)
    pub const fn is_channel(&self) -> bool {
        !matches!(self, Self::Meta)
    }

    /// The event name, as printed in event listings
    pub const fn name(&self) -> &'static str {
        use MessageType::*;
        match self {
            NoteOff => "NoteOff",
            NoteOn => "NoteOn",
            Aftertouch => "AfterTouch",
            ControlChange => "ControlChange",
            ProgramChange => "ProgramChange",
            ChannelAftertouch => "ChannelAfterTouch",
            PitchWheelChange => "PitchWheelChange",
            Meta => "Meta",
        }
    }

    /// Look up a message type from its [`name`](Self::name)
    pub fn from_name(name: &str) -> Option<Self> {
        use MessageType::*;
        Some(match name {
            "NoteOff" => NoteOff,
            "NoteOn" => NoteOn,
            "AfterTouch" => Aftertouch,
            "ControlChange" => ControlChange,
            "ProgramChange" => ProgramChange,
            "ChannelAfterTouch" => ChannelAftertouch,
            "PitchWheelChange" => PitchWheelChange,
            "Meta" => Meta,
            _ => return None,
        })
    }
}

impl core::fmt::Display for MessageType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

#[test]
fn names_round_trip() {
    use pretty_assertions::assert_eq;
    for nibble in 0x8u8..=0xF {
        let ty = MessageType::try_from(nibble).unwrap();
        assert_eq!(ty.nibble(), nibble);
        assert_eq!(MessageType::from_name(ty.name()), Some(ty));
    }
    assert!(MessageType::try_from(0x7u8).is_err());
    assert_eq!(MessageType::from_name("SysEx"), None);
}
