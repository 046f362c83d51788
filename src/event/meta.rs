use num_enum::{FromPrimitive, IntoPrimitive};

#[doc = r#"
The type byte that follows `0xFF` in a meta event.

Meta events are always laid out as `FF <type> <length> <data>`. For
measuring a record the type doesn't matter; it's decoded so callers can
recognise the end of a track, and so they can tell what they're skipping.
The payloads are not interpreted here.

# Example
```rust
# use miditape::prelude::*;
assert_eq!(MetaType::from(0x2F), MetaType::EndOfTrack);
assert_eq!(MetaType::from(0x60), MetaType::Other(0x60));
assert_eq!(u8::from(MetaType::Tempo), 0x51);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, FromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum MetaType {
    /// `FF 00 02`
    SequenceNumber = 0x00,
    /// `FF 01 len text`
    Text = 0x01,
    /// `FF 02 len text`
    Copyright = 0x02,
    /// `FF 03 len text`
    TrackName = 0x03,
    /// `FF 04 len text`
    InstrumentName = 0x04,
    /// `FF 05 len text`
    Lyric = 0x05,
    /// `FF 06 len text`
    Marker = 0x06,
    /// `FF 07 len text`
    CuePoint = 0x07,
    /// `FF 20 01 cc`
    ChannelPrefix = 0x20,
    /// `FF 2F 00`, the last event of every track
    EndOfTrack = 0x2F,
    /// `FF 51 03 tttttt`
    Tempo = 0x51,
    /// `FF 54 05 hr mn se fr ff`
    SmpteOffset = 0x54,
    /// `FF 58 04 nn dd cc bb`
    TimeSignature = 0x58,
    /// `FF 59 02 sf mi`
    KeySignature = 0x59,
    /// `FF 7F len data`
    SequencerSpecific = 0x7F,
    /// Anything this crate has no name for
    #[num_enum(catch_all)]
    Other(u8),
}

impl MetaType {
    /// True for the types whose payload is free text
    pub const fn is_text(&self) -> bool {
        matches!(
            self,
            Self::Text
                | Self::Copyright
                | Self::TrackName
                | Self::InstrumentName
                | Self::Lyric
                | Self::Marker
                | Self::CuePoint
        )
    }
}

#[test]
fn catch_all_keeps_byte() {
    use pretty_assertions::assert_eq;
    let other = MetaType::from(0x09);
    assert_eq!(other, MetaType::Other(0x09));
    assert_eq!(u8::from(other), 0x09);
    assert!(!other.is_text());
    assert!(MetaType::from(0x03).is_text());
}
