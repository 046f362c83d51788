mod smpte;
pub use smpte::*;

use crate::HeaderError;

/// The header timing type.
///
/// This is either the number of ticks per quarter note or
/// the alternative SMPTE format. Delta-times inside track chunks are counted
/// in these ticks; converting them to wall-clock time is left to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Timing {
    /// The midi file's delta times are defined using a tick rate per quarter note
    TicksPerQuarterNote(u16),

    /// The midi file's delta times are defined using an SMPTE and MIDI Time Code
    Smpte(SmpteHeader),
}

impl Timing {
    /// Decode the division word of an `MThd` chunk
    pub fn from_division(bytes: [u8; 2]) -> Result<Self, HeaderError> {
        match bytes[0] >> 7 {
            0 => Ok(Self::TicksPerQuarterNote(u16::from_be_bytes(bytes))),
            _ => SmpteHeader::new(bytes).map(Self::Smpte),
        }
    }

    /// Returns Some if the midi timing is defined
    /// as ticks per quarter note
    pub const fn ticks_per_quarter_note(&self) -> Option<u16> {
        match self {
            Self::TicksPerQuarterNote(t) => Some(*t),
            _ => None,
        }
    }
}

/// A representation of the `smpte` timing for a MIDI file
#[derive(Debug, Clone, PartialEq, Eq, Copy)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SmpteHeader {
    fps: SmpteFps,
    ticks_per_frame: u8,
}

impl SmpteHeader {
    fn new(bytes: [u8; 2]) -> Result<Self, HeaderError> {
        //Bits 14 thru 8 contain one of the four values -24, -25, -29, or -30
        let byte = bytes[0] as i8;

        let fps = match byte {
            -24 => SmpteFps::TwentyFour,
            -25 => SmpteFps::TwentyFive,
            -29 => SmpteFps::TwentyNine,
            -30 => SmpteFps::Thirty,
            _ => return Err(HeaderError::InvalidSmpteFps(byte)),
        };
        Ok(Self {
            fps,
            ticks_per_frame: bytes[1],
        })
    }

    /// Returns the frames per second
    pub const fn fps(&self) -> SmpteFps {
        self.fps
    }

    /// Returns the ticks per frame
    pub const fn ticks_per_frame(&self) -> u8 {
        self.ticks_per_frame
    }
}

#[test]
fn division_words() {
    use pretty_assertions::assert_eq;
    assert_eq!(
        Timing::from_division([0x01, 0xE0]),
        Ok(Timing::TicksPerQuarterNote(480))
    );

    // -25 fps, 40 ticks per frame
    let Timing::Smpte(smpte) = Timing::from_division([0xE7, 0x28]).unwrap() else {
        panic!("expected smpte timing");
    };
    assert_eq!(smpte.fps(), SmpteFps::TwentyFive);
    assert_eq!(smpte.ticks_per_frame(), 40);

    assert_eq!(
        Timing::from_division([0xE0, 0x28]),
        Err(HeaderError::InvalidSmpteFps(-32))
    );
}
