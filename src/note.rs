use core::fmt;

use crate::{DataByte, ValueError};

#[doc = r#"
Identifies the note of a Note On, Note Off or Aftertouch event.

Notes are interpeted as a 7-bit number.

Each value corresponds to some [`Key`] and [`Octave`].

[`Note`] `0` is `C(-1)`, and [`Note`] `127` is `G9`.

# Example
```rust
# use midix_event::prelude::*;

let note_byte = 63;

let note = Note::from_databyte(note_byte).unwrap(); // 63 is between 0-127

assert_eq!(note.key(), Key::DSharp);
assert_eq!(note.octave(), Octave::new(4))
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Note(DataByte);

impl Note {
    /// Middle C, `C4`.
    pub const MIDDLE_C: Self = Self(DataByte(60));

    /// Create a new note.
    ///
    /// Checks for correctness (leading 0 bit).
    pub const fn from_databyte(byte: u8) -> Result<Self, ValueError> {
        match DataByte::new(byte) {
            Ok(b) => Ok(Self(b)),
            Err(e) => Err(e),
        }
    }

    /// Create a note from a given key and octave
    ///
    /// # Panics
    /// if you pass in, on `Octave::new(9)` a Key greater than `Key::G`.
    ///
    /// this is because `Key::GSharp-Key::B` for octave 9 is not representable
    /// in midi.
    pub const fn new(key: Key, octave: Octave) -> Self {
        let octave_byte = (octave.value() + 1) as u8;

        let note_byte = key.get_mod_12();

        let octave_mult = (octave_byte) * 12;

        if octave_mult + note_byte > 127 {
            panic!("Can't make Note. See documentation for details.");
        }

        Self(DataByte(octave_mult + note_byte))
    }

    /// Identifies the key of the note pressed
    #[inline]
    pub const fn key(&self) -> Key {
        Key::from_data_byte(&self.0)
    }

    /// Identifies the octave of the note pressed
    #[inline]
    pub const fn octave(&self) -> Octave {
        Octave::from_data_byte(&self.0)
    }

    /// Returns the underlying byte of the note
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

/// Efficiently make a note.
///
///
/// ## Example
/// ```rust
/// # use midix_event::prelude::*;
/// let my_note = midix_event::note!(C, 2);
/// assert_eq!(my_note, Note::new(Key::C, Octave::new(2)));
/// ```
#[macro_export]
macro_rules! note {
    ($key:ident, $oct:literal) => {
        $crate::Note::new($crate::Key::$key, $crate::Octave::new($oct))
    };
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.key(), self.octave())
    }
}

impl TryFrom<u8> for Note {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::from_databyte(value)
    }
}

impl From<Note> for u8 {
    fn from(value: Note) -> Self {
        value.byte()
    }
}

#[doc = r#"
The velocity of a note, or the pressure of a key.

A Note On with a velocity of zero is conventionally a Note Off.
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct Velocity(DataByte);

impl Velocity {
    /// Silent
    pub const ZERO: Self = Self(DataByte(0));
    /// Loudest possible
    pub const MAX: Self = Self(DataByte::MAX);

    /// Create a velocity, checking for the leading 0 bit.
    pub const fn new(byte: u8) -> Result<Self, ValueError> {
        match DataByte::new(byte) {
            Ok(b) => Ok(Self(b)),
            Err(e) => Err(e),
        }
    }

    /// Returns the underlying byte
    #[inline]
    pub const fn byte(&self) -> u8 {
        self.0.0
    }
}

impl From<DataByte> for Velocity {
    fn from(value: DataByte) -> Self {
        Self(value)
    }
}

impl TryFrom<u8> for Velocity {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Velocity> for u8 {
    fn from(value: Velocity) -> Self {
        value.byte()
    }
}

impl fmt::Display for Velocity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn test_note() {
    let c = Note::from_databyte(12).unwrap();
    assert_eq!(Key::C, c.key());
    assert_eq!(0, c.octave().value());

    let a_sharp = Note::from_databyte(94).unwrap();
    assert_eq!(Key::ASharp, a_sharp.key());
    assert_eq!(6, a_sharp.octave().value());

    assert_eq!(Note::from_databyte(128), Err(ValueError::DataByte(128)));
}

#[allow(missing_docs)]
#[derive(Copy, Clone, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[doc = r#"
Identifies the pitch class of a [`Note`]

# Example
```rust
# use midix_event::prelude::*;

let note = Note::from_databyte(66).unwrap();

assert_eq!(note.key(), Key::FSharp);
assert_eq!(note.to_string(), "F#4");
```
"#]
pub enum Key {
    C,
    CSharp,
    D,
    DSharp,
    E,
    F,
    FSharp,
    G,
    GSharp,
    A,
    ASharp,
    B,
}
impl Key {
    /// Returns true if the key is sharp (or flat).
    ///
    /// # Example
    /// ```rust
    /// # use midix_event::prelude::*;
    /// assert!(!Key::C.is_sharp());
    /// assert!(Key::FSharp.is_sharp());
    /// ```
    #[inline]
    pub const fn is_sharp(&self) -> bool {
        use Key::*;
        matches!(self, CSharp | DSharp | FSharp | GSharp | ASharp)
    }

    /// Identify the key from a note byte.
    #[inline]
    pub const fn from_data_byte(note: &DataByte) -> Self {
        use Key::*;
        match note.value() % 12 {
            0 => C,
            1 => CSharp,
            2 => D,
            3 => DSharp,
            4 => E,
            5 => F,
            6 => FSharp,
            7 => G,
            8 => GSharp,
            9 => A,
            10 => ASharp,
            _ => B,
        }
    }
    const fn get_mod_12(&self) -> u8 {
        *self as u8
    }
}
impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use Key::*;
        let name = match self {
            C => "C",
            CSharp => "C#",
            D => "D",
            DSharp => "D#",
            E => "E",
            F => "F",
            FSharp => "F#",
            G => "G",
            GSharp => "G#",
            A => "A",
            ASharp => "A#",
            B => "B",
        };
        f.write_str(name)
    }
}

#[doc = r#"
Identifies the octave for a [`Note`]. Values range from -1 to 9.

# Example

```rust
# use midix_event::prelude::*;

let octave = Octave::new(12); // clamps to 9

assert_eq!(octave.value(), 9);
assert_eq!(Note::new(Key::C, octave).byte(), 120);
```
"#]
#[derive(PartialEq, Eq, Debug, Clone, Copy, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "i8", into = "i8")
)]
pub struct Octave(i8);

impl Octave {
    /// Identify an octave from a note byte.
    pub const fn from_data_byte(note: &DataByte) -> Self {
        let octave = note.value() / 12;

        Self(octave as i8 - 1)
    }
    /// Should be a value between [-1, 9]. Clamps between these two values.
    pub const fn new(mut octave: i8) -> Self {
        if octave < -1 {
            octave = -1
        } else if octave > 9 {
            octave = 9;
        }
        Self(octave)
    }

    /// The octave, from `[-1,9]`
    pub const fn value(&self) -> i8 {
        self.0
    }
}

impl From<i8> for Octave {
    fn from(value: i8) -> Self {
        Self::new(value)
    }
}

impl From<Octave> for i8 {
    fn from(value: Octave) -> Self {
        value.0
    }
}

impl fmt::Display for Octave {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[test]
fn note_from_key_octave_pairs() {
    for byte in 0..128 {
        let note = Note::from_databyte(byte).unwrap();

        let made = Note::new(note.key(), note.octave());

        assert_eq!(note.octave(), made.octave());
        assert_eq!(note.key(), made.key());
        assert_eq!(note, made);
    }
}

#[test]
fn note_names() {
    use alloc::string::ToString;
    assert_eq!(Note::MIDDLE_C.to_string(), "C4");
    assert_eq!(Note::from_databyte(0).unwrap().to_string(), "C-1");
    assert_eq!(Note::from_databyte(127).unwrap().to_string(), "G9");
    assert_eq!(Note::from_databyte(70).unwrap().to_string(), "A#4");
}
