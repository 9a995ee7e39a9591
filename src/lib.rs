#![doc = r#"
Typed MIDI track events, and the bytes they become.

A [`TrackEvent`](crate::event::TrackEvent) is one delta-timed entry of an `MTrk` chunk:
a channel voice message, a meta event, or one of the odd status nibbles found in
real-world files. This crate models those events so that invalid field
combinations cannot be built, and encodes them into the exact byte layout of
the Standard MIDI File event stream.

# Overview

```text
 TrackEvent { time_delta, channel, kind }
        |
        v
 [ VLQ(time_delta) ][ (msg_type << 4) | channel ][ payload ... ]
```

The payload shape is selected by the event's message type. Delta times are
written as variable-length quantities (see [`vlq`]).

# Example
```rust
# use midix_event::prelude::*;
let event = TrackEvent::new(
    0,
    Channel::One,
    VoiceEvent::NoteOn {
        note: Note::from_databyte(60).unwrap(),
        velocity: Velocity::new(100).unwrap(),
    },
);

assert_eq!(event.encode().unwrap(), vec![0x00, 0x90, 0x3C, 0x64]);
assert_eq!(event.payload_size(), Ok(2));
```

# Features
- `std` (default): use the standard library. Without it the crate is `no_std` + `alloc`.
- `tracing` (default): emit diagnostics when best-effort encoding drops data.
- `serde`: derive `Serialize`/`Deserialize` for the event model.
"#]
#![warn(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod byte;
pub use byte::*;

mod error;
pub use error::*;

mod note;
pub use note::*;

pub mod event;
pub mod message;
pub mod meta;
pub mod vlq;

/// Commonly used types for building and encoding events.
pub mod prelude {
    pub use crate::{
        Channel, DataByte, EncodeError, EncodeErrorKind, Key, Note, Octave, SmpteError,
        ValueError, Velocity,
        event::{EventKind, StrayType, TrackEvent, UnknownType},
        message::{ChannelModeMessage, MessageType, PitchBend, Program, VoiceEvent},
        meta::{
            KeySignature, MetaCommand, MetaEvent, Scale, SmpteFps, SmpteOffset, Tempo,
            TimeSignature,
        },
        vlq::{Vlq, encode_vlq, vlq_len},
    };
}
