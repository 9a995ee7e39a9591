use core::fmt;

const MICROS_PER_MINUTE: u32 = 60_000_000;

#[doc = r#"
A tempo change, stored the way files store it: microseconds per quarter note.

# Example
```rust
# use midix_event::prelude::*;
let tempo = Tempo::from_bpm(120);
assert_eq!(tempo.micros_per_quarter_note(), 500_000);
assert_eq!(tempo.bpm(), 120);
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub struct Tempo(u32);

impl Default for Tempo {
    /// 120 bpm, the tempo of a file with no tempo events.
    fn default() -> Self {
        Self(500_000)
    }
}

impl Tempo {
    /// The largest tempo value a file can hold (24 bits)
    pub const MAX_MICROS: u32 = 0x00FF_FFFF;

    /// Create a tempo from microseconds per quarter note.
    ///
    /// Values above [`Tempo::MAX_MICROS`] are clamped.
    pub const fn new(micros_per_quarter_note: u32) -> Self {
        if micros_per_quarter_note > Self::MAX_MICROS {
            Self(Self::MAX_MICROS)
        } else {
            Self(micros_per_quarter_note)
        }
    }

    /// Create a tempo from beats (quarter notes) per minute.
    ///
    /// A bpm of zero is treated as one.
    pub const fn from_bpm(bpm: u32) -> Self {
        let bpm = if bpm == 0 { 1 } else { bpm };
        Self::new(MICROS_PER_MINUTE / bpm)
    }

    /// Microseconds per quarter note
    #[inline]
    pub const fn micros_per_quarter_note(&self) -> u32 {
        self.0
    }

    /// Quarter notes per minute, rounded down.
    pub const fn bpm(&self) -> u32 {
        if self.0 == 0 {
            return 0;
        }
        MICROS_PER_MINUTE / self.0
    }
}

impl From<u32> for Tempo {
    fn from(value: u32) -> Self {
        Self::new(value)
    }
}

impl From<Tempo> for u32 {
    fn from(value: Tempo) -> Self {
        value.0
    }
}

impl fmt::Display for Tempo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} bpm", self.bpm())
    }
}

#[test]
fn tempo_clamps_to_24_bits() {
    assert_eq!(Tempo::new(0x0100_0000).micros_per_quarter_note(), Tempo::MAX_MICROS);
    assert_eq!(Tempo::from_bpm(0).micros_per_quarter_note(), Tempo::MAX_MICROS);
    assert_eq!(Tempo::from_bpm(90).bpm(), 90);
}
