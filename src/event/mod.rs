#![doc = r#"
Track events

A [`TrackEvent`] is one entry of an `MTrk` chunk: a delta time, a channel, and an
[`EventKind`]. The kind decides the message type nibble of the status byte and
the shape of the payload.

```text
             EventKind
            /    |    \     \
      Voice   Meta   Stray   Unknown
   (0x8-0xE) (0xF) (0x2-0x6) (0x0, 0x1, 0x7)
```

See [`TrackEvent::encode`] for the byte layout.
"#]

mod encode;

mod display;

use crate::{
    Channel, ValueError,
    message::{MessageType, VoiceEvent},
    meta::MetaEvent,
};

/// A message type found in the wild with a single data byte (`0x2-0x6`).
///
/// Its meaning is unknown. It is written as the status byte and one zero byte.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct StrayType(u8);

impl StrayType {
    /// Create a stray type from a status nibble in `0x2-0x6`
    pub const fn new(nibble: u8) -> Result<Self, ValueError> {
        match nibble {
            0x2..=0x6 => Ok(Self(nibble)),
            _ => Err(ValueError::StrayType(nibble)),
        }
    }
    /// The status nibble
    #[inline]
    pub const fn nibble(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for StrayType {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<StrayType> for u8 {
    fn from(value: StrayType) -> Self {
        value.0
    }
}

/// A message type nibble with no known layout (`0x0`, `0x1` or `0x7`).
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct UnknownType(u8);

impl UnknownType {
    /// Create an unknown type from a status nibble
    pub const fn new(nibble: u8) -> Result<Self, ValueError> {
        match nibble {
            0x0 | 0x1 | 0x7 => Ok(Self(nibble)),
            _ => Err(ValueError::UnknownType(nibble)),
        }
    }
    /// The status nibble
    #[inline]
    pub const fn nibble(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for UnknownType {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<UnknownType> for u8 {
    fn from(value: UnknownType) -> Self {
        value.0
    }
}

/// What a track event carries
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A channel voice message
    Voice(VoiceEvent),
    /// A meta event
    Meta(MetaEvent),
    /// A message type seen in files with one data byte and no known meaning
    Stray(StrayType),
    /// A message type this crate cannot encode a payload for
    Unknown(UnknownType),
}

impl EventKind {
    /// The message type nibble, the high half of the status byte
    pub const fn msg_type(&self) -> u8 {
        match self {
            Self::Voice(v) => v.msg_type().nibble(),
            Self::Meta(_) => MessageType::Meta.nibble(),
            Self::Stray(s) => s.nibble(),
            Self::Unknown(u) => u.nibble(),
        }
    }

    /// The named message type, if there is one
    pub const fn message_type(&self) -> Option<MessageType> {
        match self {
            Self::Voice(v) => Some(v.msg_type()),
            Self::Meta(_) => Some(MessageType::Meta),
            Self::Stray(_) | Self::Unknown(_) => None,
        }
    }
}

impl From<VoiceEvent> for EventKind {
    fn from(value: VoiceEvent) -> Self {
        Self::Voice(value)
    }
}

impl From<MetaEvent> for EventKind {
    fn from(value: MetaEvent) -> Self {
        Self::Meta(value)
    }
}

impl From<StrayType> for EventKind {
    fn from(value: StrayType) -> Self {
        Self::Stray(value)
    }
}

impl From<UnknownType> for EventKind {
    fn from(value: UnknownType) -> Self {
        Self::Unknown(value)
    }
}

#[doc = r#"
One delta-timed event of a MIDI track.

Running status (omitting a repeated status byte) is a concern of whoever assembles
the track; every encoded event carries its own status byte.

# Example
```rust
# use midix_event::prelude::*;
let bend = TrackEvent::new(120, Channel::Two, VoiceEvent::PitchBend(PitchBend::MIN));
assert_eq!(bend.status_byte(), 0xE1);
assert_eq!(bend.encode().unwrap(), vec![0x78, 0xE1, 0x00, 0x00]);
```
"#]
#[derive(Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TrackEvent {
    time_delta: u32,
    channel: Channel,
    kind: EventKind,
}

impl TrackEvent {
    /// Create a new track event
    pub fn new(time_delta: u32, channel: Channel, kind: impl Into<EventKind>) -> Self {
        Self {
            time_delta,
            channel,
            kind: kind.into(),
        }
    }

    /// Create a meta event on channel one.
    pub fn meta(time_delta: u32, event: MetaEvent) -> Self {
        Self::new(time_delta, Channel::One, event)
    }

    /// Ticks since the previous event
    #[inline]
    pub const fn time_delta(&self) -> u32 {
        self.time_delta
    }

    /// The channel packed into the status byte
    #[inline]
    pub const fn channel(&self) -> Channel {
        self.channel
    }

    /// What this event carries
    #[inline]
    pub const fn kind(&self) -> &EventKind {
        &self.kind
    }

    /// The message type nibble
    #[inline]
    pub const fn msg_type(&self) -> u8 {
        self.kind.msg_type()
    }

    /// Returns the voice event, if this is a channel voice message
    pub const fn voice(&self) -> Option<&VoiceEvent> {
        match &self.kind {
            EventKind::Voice(v) => Some(v),
            _ => None,
        }
    }

    /// Returns the meta event, if this is one
    pub const fn meta_event(&self) -> Option<&MetaEvent> {
        match &self.kind {
            EventKind::Meta(m) => Some(m),
            _ => None,
        }
    }

    /// Take the event kind
    pub fn into_kind(self) -> EventKind {
        self.kind
    }
}

#[test]
fn stray_and_unknown_ranges_are_disjoint() {
    use pretty_assertions::assert_eq;
    for nibble in 0..=0xFF {
        let stray = StrayType::new(nibble).is_ok();
        let unknown = UnknownType::new(nibble).is_ok();
        let named = MessageType::try_from(nibble).is_ok();
        assert!(
            [stray, unknown, named].iter().filter(|b| **b).count() <= 1,
            "{nibble:#X} claimed twice"
        );
        assert_eq!(stray || unknown || named, nibble <= 0xF, "{nibble:#X}");
    }
}
