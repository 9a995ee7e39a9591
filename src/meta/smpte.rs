#![doc = r#"
SMPTE frame rates

SMPTE time code labels individual frames of film or video. MIDI files use it to
pin a track to an absolute position in external media, through the
[`SmpteOffset`](super::SmpteOffset) meta event.

The MIDI specification supports four standard SMPTE frame rates:
- 24 fps: Film standard
- 25 fps: PAL/SECAM video standard
- 29.97 fps: NTSC color video, "drop frame"
- 30 fps: NTSC black & white video, some digital formats
"#]

/// The possible FPS (Frames Per Second) for an SMPTE offset
///
/// # Drop-Frame Timecode
///
/// The "TwentyNine" variant represents 29.97 fps, also known as "drop-frame" timecode.
/// Despite the name, no actual frames are dropped - the time code numbering skips
/// certain values to keep the timecode aligned with real time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second - Standard film rate
    TwentyFour,
    /// 25 frames per second - PAL/SECAM television standard
    TwentyFive,
    /// 29.97 frames per second (30000/1001) - NTSC color television drop-frame rate
    TwentyNine,
    /// 30 frames per second - NTSC black & white, some digital formats
    Thirty,
}

impl SmpteFps {
    /// Get the nominal frame rate as an integer.
    ///
    /// Drop-frame 29.97 fps returns 30 here: frames are still numbered `0-29`.
    pub const fn as_division(&self) -> u8 {
        match self {
            Self::TwentyFour => 24,
            Self::TwentyFive => 25,
            Self::TwentyNine => 30,
            Self::Thirty => 30,
        }
    }
    /// Get the actual frame rate as a floating-point value.
    ///
    /// This returns the precise frame rate, including the fractional rate for
    /// drop-frame timecode (29.97 fps = 30000/1001).
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::TwentyFour => 24.,
            Self::TwentyFive => 25.,
            Self::TwentyNine => DROP_FRAME,
            Self::Thirty => 30.,
        }
    }
}

impl core::fmt::Display for SmpteFps {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::TwentyNine => f.write_str("29.97"),
            other => write!(f, "{}", other.as_division()),
        }
    }
}

/// 29.97002997... fps
const DROP_FRAME: f64 = 30_000. / 1001.;
