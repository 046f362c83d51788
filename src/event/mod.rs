#![doc = r#"
Measure the records packed into a track chunk.

A track chunk is a flat run of `<delta-time> <event>` pairs with no
per-record header. The only way to find where one event ends is to look
at its status byte and apply that category's length rule:

| status | category | length |
|---|---|---|
| `8n 9n An Bn En` | note off/on, poly pressure, control change, pitch bend | 3 |
| `Cn Dn` | program change, channel pressure | 2 |
| `F0 F7` | system exclusive | 1 + length field + payload |
| `FF` | meta | 2 + length field + payload |

Anything else is reported as [`EventError::UnknownEventType`].

# Running status
A status byte is expected at every event position. Files that omit a
repeated status byte (running status) stop at the first such event with
[`EventError::UnknownEventType`] carrying the data byte.
"#]

mod meta;
pub use meta::*;

use crate::{
    EventError, VarLen, decode_vlq,
    reader::{ReadResult, ReaderError},
};
use num_enum::{IntoPrimitive, TryFromPrimitive};

/// The channel message categories, keyed by the high nibble of the status byte
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum VoiceKind {
    /// `8n key velocity`
    NoteOff = 0x8,
    /// `9n key velocity`
    NoteOn = 0x9,
    /// `An key pressure`
    PolyPressure = 0xA,
    /// `Bn controller value`
    ControlChange = 0xB,
    /// `Cn program`
    ProgramChange = 0xC,
    /// `Dn pressure`
    ChannelPressure = 0xD,
    /// `En lsb msb`
    PitchBend = 0xE,
}

#[allow(clippy::len_without_is_empty)]
impl VoiceKind {
    /// Total bytes of the message, status included
    pub const fn len(&self) -> usize {
        match self {
            Self::ProgramChange | Self::ChannelPressure => 2,
            Self::NoteOff
            | Self::NoteOn
            | Self::PolyPressure
            | Self::ControlChange
            | Self::PitchBend => 3,
        }
    }
}

/// The category a status byte falls into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EventKind {
    /// A fixed-length channel message
    ChannelVoice {
        /// Which message
        kind: VoiceKind,
        /// Channel 0-15, the low nibble of the status byte
        channel: u8,
    },
    /// `F0 <len> <data>`
    SysEx,
    /// `F7 <len> <data>`
    SysExEscape,
    /// `FF <type> <len> <data>`
    Meta,
    /// A status byte that matches no category, or a data byte
    Unknown(u8),
}

impl EventKind {
    /// Classify a status byte.
    ///
    /// Channel messages dispatch on the high nibble. The `0xF_` row dispatches
    /// on the whole byte.
    pub fn classify(status: u8) -> Self {
        match status {
            0xF0 => Self::SysEx,
            0xF7 => Self::SysExEscape,
            0xFF => Self::Meta,
            _ => match VoiceKind::try_from(status >> 4) {
                Ok(kind) => Self::ChannelVoice {
                    kind,
                    channel: status & 0x0F,
                },
                Err(_) => Self::Unknown(status),
            },
        }
    }

    /// True for `F0` and `F7` records
    pub const fn is_sysex(&self) -> bool {
        matches!(self, Self::SysEx | Self::SysExEscape)
    }
}

#[doc = r#"
The measured extent of one event record.

# Example
```rust
# use miditape::prelude::*;
// set tempo, 500 000 microseconds per quarter note
let data = [0xFF, 0x51, 0x03, 0x07, 0xA1, 0x20];
let length = event_length(&data, 0).unwrap();

assert_eq!(length.len(), 6);
assert_eq!(length.meta(), Some(MetaType::Tempo));
assert!(!length.is_end_of_track());
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EventLength {
    kind: EventKind,
    meta: Option<MetaType>,
    len: usize,
}

#[allow(clippy::len_without_is_empty)]
impl EventLength {
    /// The category of the record
    pub const fn kind(&self) -> EventKind {
        self.kind
    }
    /// The meta type byte, for meta events only
    pub const fn meta(&self) -> Option<MetaType> {
        self.meta
    }
    /// Total bytes of the record, status byte included. Never 0.
    pub const fn len(&self) -> usize {
        self.len
    }
    /// True for the `FF 2F` meta event. Nothing after it should be read.
    pub const fn is_end_of_track(&self) -> bool {
        matches!(self.meta, Some(MetaType::EndOfTrack))
    }
}

/// Measure the event whose status byte sits at `data[offset]`.
///
/// For channel messages the length is fixed by the status. For sysex and
/// meta events the whole record is counted: status, meta type byte, the
/// variable-length size field and the payload it announces.
///
/// This does not check that the payload actually fits in `data`; a
/// [`TrackCursor`](crate::file::TrackCursor) does that before handing the
/// record out.
///
/// # Errors
/// - out of bounds if `offset` is past the end of `data`
/// - [`EventError::UnknownEventType`] for an unrecognised status
/// - [`EventError::MalformedEventLength`] if the size field can't be decoded
pub fn event_length(data: &[u8], offset: usize) -> ReadResult<EventLength> {
    let status = *data.get(offset).ok_or(ReaderError::oob(offset))?;
    let kind = EventKind::classify(status);

    let (meta, header_len) = match kind {
        EventKind::ChannelVoice { kind: voice, .. } => {
            return Ok(EventLength {
                kind,
                meta: None,
                len: voice.len(),
            });
        }
        EventKind::Unknown(byte) => {
            return Err(ReaderError::event(
                offset,
                EventError::UnknownEventType(byte),
            ));
        }
        EventKind::SysEx | EventKind::SysExEscape => (None, 1),
        EventKind::Meta => {
            let ty = data.get(offset + 1).copied().ok_or(ReaderError::event(
                offset,
                EventError::MalformedEventLength,
            ))?;
            (Some(MetaType::from(ty)), 2)
        }
    };

    let VarLen { value, len } = decode_vlq(data, offset + header_len)
        .map_err(|_| ReaderError::event(offset, EventError::MalformedEventLength))?;

    Ok(EventLength {
        kind,
        meta,
        len: header_len + len + value as usize,
    })
}

#[test]
fn classify_every_status() {
    use pretty_assertions::assert_eq;
    for status in 0x00..=0xFFu8 {
        let kind = EventKind::classify(status);
        match status {
            0x00..=0x7F | 0xF1..=0xF6 | 0xF8..=0xFE => {
                assert_eq!(kind, EventKind::Unknown(status))
            }
            0x80..=0xEF => {
                let EventKind::ChannelVoice { kind, channel } = kind else {
                    panic!("{status:#04X} should be a channel message");
                };
                assert_eq!(u8::from(kind), status >> 4);
                assert_eq!(channel, status & 0x0F);
            }
            0xF0 => assert_eq!(kind, EventKind::SysEx),
            0xF7 => assert_eq!(kind, EventKind::SysExEscape),
            0xFF => assert_eq!(kind, EventKind::Meta),
        }
    }
}

#[test]
fn channel_message_lengths() {
    use pretty_assertions::assert_eq;
    let cases = [
        (0x80, 3),
        (0x9F, 3),
        (0xA3, 3),
        (0xB0, 3),
        (0xC5, 2),
        (0xD9, 2),
        (0xE1, 3),
    ];
    for (status, len) in cases {
        // payload bytes are never looked at for fixed-size messages
        assert_eq!(event_length(&[status], 0).unwrap().len(), len);
    }
}

#[test]
fn meta_without_type_byte() {
    use pretty_assertions::assert_eq;
    let err = event_length(&[0x00, 0xFF], 1).unwrap_err();
    assert_eq!(err.position(), 1);
    assert_eq!(
        err.parse_error(),
        Some(crate::ParseError::Event(EventError::MalformedEventLength))
    );
}

#[test]
fn offset_past_end() {
    let err = event_length(&[0x90, 0x3C, 0x40], 3).unwrap_err();
    assert!(err.is_out_of_bounds());
}
