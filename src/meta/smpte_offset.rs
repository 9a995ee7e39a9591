use core::fmt;

use super::SmpteFps;
use crate::SmpteError;

/// A track's starting position in SMPTE time code.
///
/// When present, the track should begin playback at this position rather than at
/// the beginning of the sequence.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "SmpteOffsetRaw")
)]
pub struct SmpteOffset {
    fps: SmpteFps,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
}

impl SmpteOffset {
    /// Build an offset, validating every component.
    ///
    /// # Errors
    /// - `SmpteError::HourOffset` if hours > 23
    /// - `SmpteError::MinuteOffset` if minutes > 59
    /// - `SmpteError::SecondOffset` if seconds > 59
    /// - `SmpteError::Frame` if the frame does not exist at `fps`
    /// - `SmpteError::Subframe` if fractional frames > 99
    pub const fn new(
        fps: SmpteFps,
        hour: u8,
        minute: u8,
        second: u8,
        frame: u8,
        subframe: u8,
    ) -> Result<Self, SmpteError> {
        if hour > 23 {
            return Err(SmpteError::HourOffset(hour));
        }
        if minute > 59 {
            return Err(SmpteError::MinuteOffset(minute));
        }
        if second > 59 {
            return Err(SmpteError::SecondOffset(second));
        }
        if frame >= fps.as_division() {
            return Err(SmpteError::Frame {
                frame,
                fps: fps.as_division(),
            });
        }
        // always 1/100 of frame
        if subframe > 99 {
            return Err(SmpteError::Subframe(subframe));
        }
        Ok(Self {
            fps,
            hour,
            minute,
            second,
            frame,
            subframe,
        })
    }

    /// The frame rate for this offset.
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }
    /// Hour component (0-23).
    pub const fn hour(&self) -> u8 {
        self.hour
    }
    /// Minute component (0-59).
    pub const fn minute(&self) -> u8 {
        self.minute
    }
    /// Second component (0-59).
    pub const fn second(&self) -> u8 {
        self.second
    }
    /// Frame within the current second.
    pub const fn frame(&self) -> u8 {
        self.frame
    }
    /// Hundredths of a frame (0-99).
    pub const fn subframe(&self) -> u8 {
        self.subframe
    }

    /// Convert this SMPTE offset to microseconds.
    pub const fn as_micros(&self) -> f64 {
        ((((self.hour as u64 * 3600) + (self.minute as u64) * 60 + self.second as u64) * 1_000_000)
            as f64)
            + ((self.frame as u64) * 1_000_000) as f64 / self.fps.as_f64()
            + ((self.subframe as u32) * 10_000) as f64 / self.fps.as_f64()
    }
}

#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct SmpteOffsetRaw {
    fps: SmpteFps,
    hour: u8,
    minute: u8,
    second: u8,
    frame: u8,
    subframe: u8,
}

#[cfg(feature = "serde")]
impl TryFrom<SmpteOffsetRaw> for SmpteOffset {
    type Error = SmpteError;
    fn try_from(raw: SmpteOffsetRaw) -> Result<Self, Self::Error> {
        Self::new(
            raw.fps,
            raw.hour,
            raw.minute,
            raw.second,
            raw.frame,
            raw.subframe,
        )
    }
}

impl fmt::Display for SmpteOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}:{:02}.{:02} @ {} fps",
            self.hour, self.minute, self.second, self.frame, self.subframe, self.fps
        )
    }
}

#[test]
fn smpte_offset_micros() {
    let offset = SmpteOffset::new(SmpteFps::TwentyFive, 0, 0, 1, 5, 50).unwrap();
    // 1s + 5 frames + half a frame at 25fps
    assert_eq!(offset.as_micros(), 1_220_000.);
}

#[test]
fn invalid_smpte_offset() {
    use pretty_assertions::assert_eq;
    let err = SmpteOffset::new(SmpteFps::TwentyNine, 31, 23, 45, 12, 34).unwrap_err();
    assert_eq!(err, SmpteError::HourOffset(31));

    let err = SmpteOffset::new(SmpteFps::TwentyNine, 1, 80, 45, 12, 34).unwrap_err();
    assert_eq!(err, SmpteError::MinuteOffset(80));

    let err = SmpteOffset::new(SmpteFps::TwentyFour, 1, 23, 45, 24, 34).unwrap_err();
    assert_eq!(err, SmpteError::Frame { frame: 24, fps: 24 });
}
