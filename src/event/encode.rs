use alloc::vec::Vec;

use super::{EventKind, TrackEvent};
use crate::{
    EncodeError, EncodeErrorKind,
    vlq::{MAX_VLQ_LEN, encode_vlq, vlq_len},
};

impl EventKind {
    /// The number of payload bytes written after the status byte.
    ///
    /// | kind                                                        | size |
    /// |-------------------------------------------------------------|------|
    /// | stray, program change, channel aftertouch                   | 1    |
    /// | note off, note on, aftertouch, control change, pitch bend   | 2    |
    /// | unknown                                                     | 0    |
    ///
    /// # Errors
    /// Meta events are not supported yet, see [`EncodeErrorKind::MetaUnsupported`].
    pub const fn payload_size(&self) -> Result<u32, EncodeErrorKind> {
        match self {
            Self::Voice(v) => Ok(v.data_bytes().1 as u32),
            Self::Stray(_) => Ok(1),
            Self::Unknown(_) => Ok(0),
            Self::Meta(m) => Err(EncodeErrorKind::MetaUnsupported(m.command())),
        }
    }
}

impl TrackEvent {
    /// `(msg_type << 4) | channel`
    ///
    /// The channel nibble is packed for every kind, meta events included.
    #[inline]
    pub const fn status_byte(&self) -> u8 {
        (self.kind.msg_type() << 4) | self.channel.to_byte()
    }

    /// Append this event to `out`, returning the number of bytes appended.
    ///
    /// ```text
    /// [ VLQ(time_delta) ][ status ][ payload ]
    /// ```
    ///
    /// # Errors
    /// For unknown message types and meta events only the delta time and status
    /// byte are appended before the error is returned. They stay in `out`.
    pub fn encode_into(&self, out: &mut Vec<u8>) -> Result<usize, EncodeErrorKind> {
        let start = out.len();
        out.extend_from_slice(&encode_vlq(self.time_delta));
        out.push(self.status_byte());

        match &self.kind {
            EventKind::Voice(voice) => {
                let (data, len) = voice.data_bytes();
                out.extend_from_slice(&data[..len]);
            }
            EventKind::Stray(_) => out.push(0),
            EventKind::Meta(meta) => {
                return Err(EncodeErrorKind::MetaUnsupported(meta.command()));
            }
            EventKind::Unknown(unknown) => {
                return Err(EncodeErrorKind::UnknownMessageType(unknown.nibble()));
            }
        }

        Ok(out.len() - start)
    }

    /// Encode this event into the bytes of an `MTrk` event stream.
    ///
    /// # Errors
    /// If the payload cannot be encoded, the error holds the delta time and status
    /// byte that were written. See [`EncodeError::partial`].
    pub fn encode(&self) -> Result<Vec<u8>, EncodeError> {
        let mut out = Vec::with_capacity(MAX_VLQ_LEN + 3);
        match self.encode_into(&mut out) {
            Ok(_) => Ok(out),
            Err(kind) => Err(EncodeError::new(out, kind)),
        }
    }

    /// Encode this event, keeping whatever could be written.
    ///
    /// An event that cannot be fully encoded yields its delta time and status
    /// byte only, and a warning is logged with the `tracing` feature.
    pub fn encode_lossy(&self) -> Vec<u8> {
        self.encode().unwrap_or_else(|err| {
            #[cfg(feature = "tracing")]
            tracing::warn!(
                event = ?self,
                "didn't encode {} because didn't know how to: {}",
                self,
                err.kind()
            );
            err.into_partial()
        })
    }

    /// The number of payload bytes [`encode`](Self::encode) writes after the status byte.
    ///
    /// See [`EventKind::payload_size`].
    #[inline]
    pub const fn payload_size(&self) -> Result<u32, EncodeErrorKind> {
        self.kind.payload_size()
    }

    /// The full encoded length: delta time, status byte and payload.
    pub const fn encoded_len(&self) -> Result<usize, EncodeErrorKind> {
        match self.kind.payload_size() {
            Ok(payload) => Ok(vlq_len(self.time_delta) + 1 + payload as usize),
            Err(e) => Err(e),
        }
    }
}

#[test]
fn encode_into_appends() {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    let mut out = alloc::vec![0xAA];
    let event = TrackEvent::new(
        0x80,
        Channel::Sixteen,
        VoiceEvent::ChannelAftertouch {
            pressure: DataByte::new(0x33).unwrap(),
        },
    );
    let written = event.encode_into(&mut out).unwrap();
    assert_eq!(written, 4);
    assert_eq!(out, [0xAA, 0x81, 0x00, 0xDF, 0x33]);
    assert_eq!(event.encoded_len(), Ok(written));
}

#[test]
fn failed_encode_leaves_status_in_buffer() {
    use crate::prelude::*;
    use pretty_assertions::assert_eq;

    let mut out = alloc::vec::Vec::new();
    let event = TrackEvent::new(0, Channel::Three, UnknownType::new(0x7).unwrap());
    assert_eq!(
        event.encode_into(&mut out),
        Err(EncodeErrorKind::UnknownMessageType(0x7))
    );
    assert_eq!(out, [0x00, 0x72]);
}
