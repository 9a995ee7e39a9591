use alloc::vec::Vec;
use thiserror::Error;

use crate::meta::MetaCommand;

#[doc = r#"
A raw value that does not fit the MIDI field it was given to
"#]
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ValueError {
    /// Data bytes must have a leading 0 bit
    #[error("{0:#04X} is not a data byte (leading bit is set)")]
    DataByte(u8),
    /// Channels are 0-15
    #[error("{0} is not a channel (0-15)")]
    Channel(u8),
    /// Pitch bends are 14 bits
    #[error("{0:#06X} does not fit in a 14-bit pitch bend")]
    PitchBend(u16),
    /// Relative pitch bends are -8192..=8191
    #[error("{0} is outside the relative pitch bend range (-8192..=8191)")]
    RelativePitchBend(i16),
    /// Key signatures range from 7 flats to 7 sharps
    #[error("Key signature {0} is outside -7..=7")]
    KeySignature(i8),
    /// Scales are 0 (major) or 1 (minor)
    #[error("Scale {0} is neither major (0) nor minor (1)")]
    Scale(u8),
    /// Time signature denominators are powers of two
    #[error("Time signature denominator 2^{0} is too large")]
    TimeSignature(u8),
    /// Stray message types are 0x2-0x6
    #[error("{0:#X} is not a stray message type (0x2-0x6)")]
    StrayType(u8),
    /// Unknown message types are the nibbles without a modeled layout
    #[error("{0:#X} is not an unknown message type")]
    UnknownType(u8),
    /// Invalid SMPTE offset
    #[error("Smpte: {0}")]
    Smpte(#[from] SmpteError),
}

/// Errors when building an [`SmpteOffset`](crate::meta::SmpteOffset)
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum SmpteError {
    /// Hours must be 0-23
    #[error("Invalid hour offset: {0}")]
    HourOffset(u8),
    /// Minutes must be 0-59
    #[error("Invalid minute offset: {0}")]
    MinuteOffset(u8),
    /// Seconds must be 0-59
    #[error("Invalid second offset: {0}")]
    SecondOffset(u8),
    /// Frames must be below the frame rate
    #[error("Frame {frame} does not exist at {fps} fps")]
    Frame {
        /// the offending frame
        frame: u8,
        /// the nominal frame rate
        fps: u8,
    },
    /// Subframes must be 0-99
    #[error("Invalid subframe: {0}")]
    Subframe(u8),
}

/// The reason an event could not be fully encoded.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum EncodeErrorKind {
    /// The message type has no known payload layout
    #[error("Don't know how to encode message type {0:#X}")]
    UnknownMessageType(u8),
    /// Meta event payloads cannot be encoded yet
    #[error("Can't encode meta events ({}), not supported yet", .0.name())]
    MetaUnsupported(MetaCommand),
}

impl EncodeErrorKind {
    /// The message type nibble that could not be encoded
    pub const fn msg_type(&self) -> u8 {
        match self {
            Self::UnknownMessageType(t) => *t,
            Self::MetaUnsupported(_) => 0xF,
        }
    }
}

#[doc = r#"
An event that could only be partially encoded.

The delta time and status byte are always written. This error carries
those bytes so the caller can decide whether to keep them, log, or give up.
"#]
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("Encoded {} bytes before failing: {kind}", .bytes.len())]
pub struct EncodeError {
    bytes: Vec<u8>,
    kind: EncodeErrorKind,
}

impl EncodeError {
    /// Create an encode error from the partial output and a kind
    pub const fn new(bytes: Vec<u8>, kind: EncodeErrorKind) -> Self {
        Self { bytes, kind }
    }
    /// Returns the error kind.
    pub fn kind(&self) -> &EncodeErrorKind {
        &self.kind
    }
    /// The bytes written before the encoder stopped.
    pub fn partial(&self) -> &[u8] {
        &self.bytes
    }
    /// Take the partial output.
    pub fn into_partial(self) -> Vec<u8> {
        self.bytes
    }
    /// True if the event was a meta event
    pub const fn is_meta(&self) -> bool {
        matches!(self.kind, EncodeErrorKind::MetaUnsupported(_))
    }
}
