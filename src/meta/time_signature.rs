use core::fmt;

use crate::ValueError;

/// A time signature meta event (`FF 58 04 nn dd cc bb`).
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "TimeSignatureRaw")
)]
pub struct TimeSignature {
    numerator: u8,
    denominator_power: u8,
    clocks_per_click: u8,
    notated_32nds_per_quarter: u8,
}

impl Default for TimeSignature {
    /// 4/4, one click per quarter note
    fn default() -> Self {
        Self {
            numerator: 4,
            denominator_power: 2,
            clocks_per_click: 24,
            notated_32nds_per_quarter: 8,
        }
    }
}

impl TimeSignature {
    /// Create a time signature.
    ///
    /// The denominator is given as a power of two: `2` is a quarter note, `3` an eighth.
    pub const fn new(
        numerator: u8,
        denominator_power: u8,
        clocks_per_click: u8,
        notated_32nds_per_quarter: u8,
    ) -> Result<Self, ValueError> {
        if denominator_power > 7 {
            return Err(ValueError::TimeSignature(denominator_power));
        }
        Ok(Self {
            numerator,
            denominator_power,
            clocks_per_click,
            notated_32nds_per_quarter,
        })
    }

    /// Beats per bar
    pub const fn numerator(&self) -> u8 {
        self.numerator
    }

    /// The beat unit, e.g. `4` for quarter notes
    pub const fn denominator(&self) -> u8 {
        1 << self.denominator_power
    }

    /// The beat unit as a power of two
    pub const fn denominator_power(&self) -> u8 {
        self.denominator_power
    }

    /// MIDI clocks in a metronome click
    pub const fn clocks_per_click(&self) -> u8 {
        self.clocks_per_click
    }

    /// Notated 32nd notes in a MIDI quarter note (24 clocks)
    pub const fn notated_32nds_per_quarter(&self) -> u8 {
        self.notated_32nds_per_quarter
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct TimeSignatureRaw {
    numerator: u8,
    denominator_power: u8,
    clocks_per_click: u8,
    notated_32nds_per_quarter: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<TimeSignatureRaw> for TimeSignature {
    type Error = ValueError;
    fn try_from(raw: TimeSignatureRaw) -> Result<Self, Self::Error> {
        Self::new(
            raw.numerator,
            raw.denominator_power,
            raw.clocks_per_click,
            raw.notated_32nds_per_quarter,
        )
    }
}

impl fmt::Display for TimeSignature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.numerator, self.denominator())
    }
}

#[test]
fn denominator_is_a_power_of_two() {
    let six_eight = TimeSignature::new(6, 3, 36, 8).unwrap();
    assert_eq!(six_eight.denominator(), 8);
    assert_eq!(
        TimeSignature::new(4, 8, 24, 8),
        Err(ValueError::TimeSignature(8))
    );
}
