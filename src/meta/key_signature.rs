use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ValueError;

/// Major or minor
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, TryFromPrimitive, IntoPrimitive)]
#[num_enum(error_type(name = ValueError, constructor = ValueError::Scale))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Scale {
    /// `0`
    Major = 0,
    /// `1`
    Minor = 1,
}

impl Default for Scale {
    fn default() -> Self {
        Self::Major
    }
}

#[doc = r#"
A key signature meta event (`FF 59 02 sf mi`).

A positive key counts sharps, a negative key counts flats.

# Example
```rust
# use midix_event::prelude::*;
let key = KeySignature::new(-3, Scale::Minor).unwrap();
assert_eq!(key.flats(), 3);
assert_eq!(key.to_string(), "C minor");
```
"#]
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "KeySignatureRaw")
)]
pub struct KeySignature {
    key: i8,
    scale: Scale,
}

const MAJOR_TONICS: [&str; 15] = [
    "Cb", "Gb", "Db", "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#",
];
const MINOR_TONICS: [&str; 15] = [
    "Ab", "Eb", "Bb", "F", "C", "G", "D", "A", "E", "B", "F#", "C#", "G#", "D#", "A#",
];

impl KeySignature {
    /// Create a key signature from -7 (7 flats) to 7 (7 sharps)
    pub const fn new(key: i8, scale: Scale) -> Result<Self, ValueError> {
        if key < -7 || key > 7 {
            return Err(ValueError::KeySignature(key));
        }
        Ok(Self { key, scale })
    }

    /// Sharps if positive, flats if negative
    pub const fn key(&self) -> i8 {
        self.key
    }

    /// Major or minor
    pub const fn scale(&self) -> Scale {
        self.scale
    }

    /// Number of sharps
    pub const fn sharps(&self) -> u8 {
        if self.key > 0 { self.key as u8 } else { 0 }
    }

    /// Number of flats
    pub const fn flats(&self) -> u8 {
        if self.key < 0 { self.key.unsigned_abs() } else { 0 }
    }

    /// Name of the tonic, e.g. `"F#"`
    pub const fn tonic(&self) -> &'static str {
        let idx = (self.key + 7) as usize;
        match self.scale {
            Scale::Major => MAJOR_TONICS[idx],
            Scale::Minor => MINOR_TONICS[idx],
        }
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct KeySignatureRaw {
    key: i8,
    scale: Scale,
}

#[cfg(feature = "serde")]
impl TryFrom<KeySignatureRaw> for KeySignature {
    type Error = ValueError;
    fn try_from(raw: KeySignatureRaw) -> Result<Self, Self::Error> {
        Self::new(raw.key, raw.scale)
    }
}

impl fmt::Display for KeySignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let scale = match self.scale {
            Scale::Major => "major",
            Scale::Minor => "minor",
        };
        write!(f, "{} {}", self.tonic(), scale)
    }
}

#[test]
fn key_signature_bounds() {
    use pretty_assertions::assert_eq;
    assert_eq!(KeySignature::new(8, Scale::Major), Err(ValueError::KeySignature(8)));
    assert_eq!(KeySignature::new(7, Scale::Major).unwrap().tonic(), "C#");
    assert_eq!(KeySignature::new(-7, Scale::Minor).unwrap().tonic(), "Ab");
    assert_eq!(KeySignature::default().tonic(), "C");
    assert_eq!(Scale::try_from(2u8), Err(ValueError::Scale(2)));
}
