/// The possible FPS (Frames Per Second) of an SMPTE division
///
/// The MIDI specification defines only four possible frame types:
/// - 24 fps: Standard film rate
/// - 25 fps: PAL/SECAM television standard
/// - 29.97 fps: NTSC color television (drop-frame timecode)
/// - 30 fps: NTSC black & white, some digital video formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SmpteFps {
    /// 24 frames per second
    TwentyFour,
    /// 25 frames per second
    TwentyFive,
    /// 29.97 frames per second, written as -29 in the header
    TwentyNine,
    /// 30 frames per second
    Thirty,
}

impl SmpteFps {
    /// The value as it's stored in the high byte of the division word
    pub const fn as_division_byte(&self) -> i8 {
        match self {
            Self::TwentyFour => -24,
            Self::TwentyFive => -25,
            Self::TwentyNine => -29,
            Self::Thirty => -30,
        }
    }
}
