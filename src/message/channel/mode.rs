use crate::DataByte;

#[doc = r#"
A Control Change on one of the reserved controllers `120-127`.

```text
All Sound Off          c = 120, v = 0
Reset All Controllers  c = 121, v = x
Local Control          c = 122, v = 0 (off) | 127 (on)
All Notes Off          c = 123, v = 0
Omni Mode Off          c = 124, v = 0
Omni Mode On           c = 125, v = 0
Mono Mode On           c = 126, v = M (channels, or 0 for omni)
Poly Mode On           c = 127, v = 0
```

Omni Off, Omni On, Mono On and Poly On also turn all notes off.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ChannelModeMessage {
    /// Oscillators off, volume envelopes to zero
    AllSoundOff,
    /// Controllers back to their defaults
    ResetAllControllers,
    /// When off, devices only respond to MIDI input
    LocalControl(bool),
    /// Release every held note
    AllNotesOff,
    /// Omni off
    OmniModeOff,
    /// Omni on
    OmniModeOn,
    /// Mono on (poly off), with the number of channels to use
    MonoModeOn(DataByte),
    /// Poly on (mono off)
    PolyModeOn,
}

impl ChannelModeMessage {
    /// The first controller number reserved for mode messages
    pub const FIRST_CONTROLLER: u8 = 120;

    /// Classify a control change. Returns `None` for ordinary controllers (`0-119`).
    pub const fn from_control(controller: DataByte, value: DataByte) -> Option<Self> {
        Some(match controller.value() {
            120 => Self::AllSoundOff,
            121 => Self::ResetAllControllers,
            122 => Self::LocalControl(value.value() != 0),
            123 => Self::AllNotesOff,
            124 => Self::OmniModeOff,
            125 => Self::OmniModeOn,
            126 => Self::MonoModeOn(value),
            127 => Self::PolyModeOn,
            _ => return None,
        })
    }

    /// The reserved controller number this message is sent on
    pub const fn controller(&self) -> u8 {
        match self {
            Self::AllSoundOff => 120,
            Self::ResetAllControllers => 121,
            Self::LocalControl(_) => 122,
            Self::AllNotesOff => 123,
            Self::OmniModeOff => 124,
            Self::OmniModeOn => 125,
            Self::MonoModeOn(_) => 126,
            Self::PolyModeOn => 127,
        }
    }

    /// Human-readable name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::AllSoundOff => "All Sound Off",
            Self::ResetAllControllers => "Reset All Controllers",
            Self::LocalControl(false) => "Local Control Off",
            Self::LocalControl(true) => "Local Control On",
            Self::AllNotesOff => "All Notes Off",
            Self::OmniModeOff => "Omni Mode Off",
            Self::OmniModeOn => "Omni Mode On",
            Self::MonoModeOn(_) => "Mono Mode On",
            Self::PolyModeOn => "Poly Mode On",
        }
    }
}

#[test]
fn classify_reserved_controllers() {
    use pretty_assertions::assert_eq;
    let zero = DataByte::new_unchecked(0);
    assert_eq!(
        ChannelModeMessage::from_control(DataByte::new_unchecked(119), zero),
        None
    );
    for c in 120..=127 {
        let msg = ChannelModeMessage::from_control(DataByte::new_unchecked(c), zero).unwrap();
        assert_eq!(msg.controller(), c);
    }
    assert_eq!(
        ChannelModeMessage::from_control(DataByte::new_unchecked(122), DataByte::MAX),
        Some(ChannelModeMessage::LocalControl(true))
    );
}
