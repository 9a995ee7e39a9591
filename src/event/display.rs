use core::fmt;

use super::{EventKind, TrackEvent};
use crate::{message::VoiceEvent, meta::MetaEvent};

impl fmt::Display for TrackEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Ch {} @ {} \t", self.channel, self.time_delta)?;

        match &self.kind {
            EventKind::Voice(voice) => {
                f.write_str(voice.msg_type().name())?;
                if let Some(velocity) = voice.velocity().filter(|v| v.byte() > 0) {
                    write!(f, " Vel: {velocity}")?;
                }
                match voice {
                    VoiceEvent::NoteOn { note, .. } => write!(f, " Note: {note}"),
                    VoiceEvent::ControlChange { controller, value } => {
                        write!(f, " {controller} -> {value}")?;
                        match voice.channel_mode() {
                            Some(mode) => write!(f, " ({})", mode.name()),
                            None => Ok(()),
                        }
                    }
                    VoiceEvent::ProgramChange { program } => write!(f, " {program}"),
                    VoiceEvent::ChannelAftertouch { pressure } => write!(f, " {pressure}"),
                    VoiceEvent::PitchBend(bend) => write!(f, " {}", bend.relative()),
                    VoiceEvent::NoteOff { .. } | VoiceEvent::Aftertouch { .. } => Ok(()),
                }
            }
            EventKind::Meta(meta) => {
                f.write_str(meta.command().name())?;
                if let Some(text) = meta.text() {
                    return write!(f, " -> {text}");
                }
                match meta {
                    MetaEvent::SequenceNumber(n) => write!(f, " -> {n}"),
                    MetaEvent::ChannelPrefix(c) => write!(f, " -> {c}"),
                    MetaEvent::Tempo(t) => write!(f, " -> {t}"),
                    MetaEvent::SmpteOffset(o) => write!(f, " -> {o}"),
                    MetaEvent::TimeSignature(t) => write!(f, " -> {t}"),
                    MetaEvent::KeySignature(k) => write!(f, " -> {k}"),
                    MetaEvent::SequencerSpecific(data) => write!(f, " -> {} bytes", data.len()),
                    _ => Ok(()),
                }
            }
            EventKind::Stray(stray) => write!(f, "0X{:X}", stray.nibble()),
            EventKind::Unknown(unknown) => write!(f, "0X{:X}", unknown.nibble()),
        }
    }
}
