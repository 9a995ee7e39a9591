#![cfg(feature = "tracing")]

use std::{
    fmt,
    sync::{Arc, Mutex},
};

use midix_event::prelude::*;
use pretty_assertions::assert_eq;
use tracing::{
    Event, Level, Subscriber,
    field::{Field, Visit},
};
use tracing_subscriber::{
    layer::{Context, Layer, SubscriberExt},
    registry,
};

/// Collects the message of every warning.
#[derive(Clone, Default)]
struct Warnings(Arc<Mutex<Vec<String>>>);

struct Message<'a>(&'a mut String);

impl Visit for Message<'_> {
    fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
        if field.name() == "message" {
            *self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Warnings {
    fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
        if *event.metadata().level() != Level::WARN {
            return;
        }
        let mut message = String::new();
        event.record(&mut Message(&mut message));
        self.0.lock().unwrap().push(message);
    }
}

fn capture(f: impl FnOnce()) -> Vec<String> {
    let warnings = Warnings::default();
    let subscriber = registry().with(warnings.clone());
    tracing::subscriber::with_default(subscriber, f);
    let messages = warnings.0.lock().unwrap().clone();
    messages
}

#[test]
fn lossy_encoding_warns_about_unknown_types() {
    let event = TrackEvent::new(4, Channel::Two, UnknownType::new(0x7).unwrap());
    let warnings = capture(|| {
        assert_eq!(event.encode_lossy(), vec![0x04, 0x71]);
    });
    assert_eq!(warnings.len(), 1);
    assert!(warnings[0].starts_with("didn't encode Ch 1 @ 4"), "{}", warnings[0]);
    assert!(
        warnings[0].contains("Don't know how to encode message type 0x7"),
        "{}",
        warnings[0]
    );
}

#[test]
fn lossy_encoding_warns_about_meta_events() {
    let event = TrackEvent::meta(0, MetaEvent::EndOfTrack);
    let warnings = capture(|| {
        assert_eq!(event.encode_lossy(), vec![0x00, 0xF0]);
    });
    assert_eq!(warnings.len(), 1);
    assert!(
        warnings[0].contains("Can't encode meta events (End of Track)"),
        "{}",
        warnings[0]
    );
}

#[test]
fn complete_encodings_stay_quiet() {
    let event = TrackEvent::new(0, Channel::One, VoiceEvent::PitchBend(PitchBend::CENTER));
    let warnings = capture(|| {
        assert_eq!(event.encode_lossy(), vec![0x00, 0xE0, 0x00, 0x40]);
    });
    assert!(warnings.is_empty());
}
