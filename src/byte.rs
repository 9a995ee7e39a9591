use core::fmt;

use num_enum::{IntoPrimitive, TryFromPrimitive};

use crate::ValueError;

#[doc = r#"
A MIDI data byte.

Every byte following a status byte must have its leading bit cleared,
so the value is always in `0..=127`.

# Example
```rust
# use midix_event::prelude::*;
let byte = DataByte::new(100).unwrap();
assert_eq!(byte.value(), 100);

assert!(DataByte::new(128).is_err());
```
"#]
#[derive(Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Default, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "u8", into = "u8")
)]
pub struct DataByte(pub(crate) u8);

impl DataByte {
    /// The largest value a data byte can hold.
    pub const MAX: Self = Self(0x7F);

    /// Create a data byte, checking for the leading 0 bit.
    pub const fn new(byte: u8) -> Result<Self, ValueError> {
        if byte > 0x7F {
            return Err(ValueError::DataByte(byte));
        }
        Ok(Self(byte))
    }

    /// Create a data byte without checking the leading bit.
    ///
    /// The leading bit is masked off, so the result is always valid.
    pub const fn new_unchecked(byte: u8) -> Self {
        Self(byte & 0x7F)
    }

    /// The 7-bit value
    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for DataByte {
    type Error = ValueError;
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<DataByte> for u8 {
    fn from(value: DataByte) -> Self {
        value.0
    }
}

impl fmt::Display for DataByte {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[doc = r#"
One of the sixteen MIDI channels.

The channel occupies the low nibble of a status byte, so
[`Channel::One`] is `0x0` and [`Channel::Sixteen`] is `0xF`.

# Example
```rust
# use midix_event::prelude::*;
let channel = Channel::try_from(9u8).unwrap();
assert_eq!(channel, Channel::Ten);
assert_eq!(u8::from(channel), 9);

assert!(Channel::try_from(16u8).is_err());
```
"#]
#[allow(missing_docs)]
#[derive(
    Copy, Clone, PartialEq, Eq, Ord, PartialOrd, Debug, Hash, TryFromPrimitive, IntoPrimitive,
)]
#[num_enum(error_type(name = ValueError, constructor = ValueError::Channel))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Channel {
    One = 0,
    Two,
    Three,
    Four,
    Five,
    Six,
    Seven,
    Eight,
    Nine,
    Ten,
    Eleven,
    Twelve,
    Thirteen,
    Fourteen,
    Fifteen,
    Sixteen,
}

impl Channel {
    /// Returns the channel's nibble, `0..=15`
    #[inline]
    pub const fn to_byte(&self) -> u8 {
        *self as u8
    }

    /// All sixteen channels, in order.
    pub const fn all() -> [Channel; 16] {
        use Channel::*;
        [
            One, Two, Three, Four, Five, Six, Seven, Eight, Nine, Ten, Eleven, Twelve, Thirteen,
            Fourteen, Fifteen, Sixteen,
        ]
    }
}

impl fmt::Display for Channel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.to_byte().fmt(f)
    }
}

#[test]
fn data_byte_rejects_leading_bit() {
    use pretty_assertions::assert_eq;
    assert_eq!(DataByte::new(0x80), Err(ValueError::DataByte(0x80)));
    assert_eq!(DataByte::new(0x7F), Ok(DataByte::MAX));
    assert_eq!(DataByte::new_unchecked(0xFF), DataByte::MAX);
}

#[test]
fn channels_map_to_nibbles() {
    use pretty_assertions::assert_eq;
    for (i, channel) in Channel::all().into_iter().enumerate() {
        assert_eq!(channel.to_byte(), i as u8);
        assert_eq!(Channel::try_from(i as u8), Ok(channel));
    }
    assert_eq!(Channel::try_from(0x10u8), Err(ValueError::Channel(0x10)));
}
