use crate::{
    ChunkError,
    event::{EventKind, EventLength, MetaType, event_length},
    reader::{ReadResult, Reader, ReaderError},
};

#[doc = r#"
One record read out of a track chunk, borrowed from the chunk's data.

`bytes` is the whole event: status byte, any meta type and length field,
and the payload. The delta-time that preceded it is not included.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrackEvent<'a> {
    delta_ticks: u32,
    accumulated_ticks: u64,
    offset: usize,
    length: EventLength,
    bytes: &'a [u8],
}

#[allow(clippy::len_without_is_empty)]
impl<'a> TrackEvent<'a> {
    /// Ticks since the previous event in this track
    pub const fn delta_ticks(&self) -> u32 {
        self.delta_ticks
    }
    /// Ticks since the start of the track
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }
    /// Offset of the status byte within the chunk's data
    pub const fn offset(&self) -> usize {
        self.offset
    }
    /// The event's category
    pub const fn kind(&self) -> EventKind {
        self.length.kind()
    }
    /// The meta type, for meta events
    pub const fn meta(&self) -> Option<MetaType> {
        self.length.meta()
    }
    /// Length of the event in bytes, status included
    pub const fn len(&self) -> usize {
        self.length.len()
    }
    /// The raw event bytes
    pub const fn bytes(&self) -> &'a [u8] {
        self.bytes
    }
    /// True for the `FF 2F` meta event
    pub const fn is_end_of_track(&self) -> bool {
        self.length.is_end_of_track()
    }
    /// The `(delta_time, event_byte_length)` pair a player paces with
    pub const fn step(&self) -> (u32, usize) {
        (self.delta_ticks, self.length.len())
    }
}

#[doc = r#"
Walks one track chunk's data, event by event.

The cursor only moves forward. Each step reads a delta-time, measures the
event after it and hands out both. Stepping ends with `Ok(None)` after the
end-of-track meta event, or when the data runs out.

A failed step leaves the position on the delta-time of the event that
couldn't be read and finishes the cursor. Nothing is skipped or retried.

# Example
```rust
# use miditape::prelude::*;
let data = [
    0x00, 0xC0, 0x05,               // program change
    0x10, 0x90, 0x3C, 0x40,         // note on
    0x00, 0xFF, 0x2F, 0x00,         // end of track
];
let mut cursor = TrackCursor::new(&data);

let program = cursor.next_event().unwrap().unwrap();
assert_eq!(program.bytes(), [0xC0, 0x05]);

let note = cursor.next_event().unwrap().unwrap();
assert_eq!(note.step(), (0x10, 3));

let end = cursor.next_event().unwrap().unwrap();
assert!(end.is_end_of_track());
assert!(cursor.next_event().unwrap().is_none());
```
"#]
#[derive(Debug, Clone)]
pub struct TrackCursor<'a> {
    reader: Reader<'a>,
    accumulated_ticks: u64,
    finished: bool,
}

impl<'a> TrackCursor<'a> {
    /// A cursor at the start of `data`
    pub const fn new(data: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_byte_slice(data),
            accumulated_ticks: 0,
            finished: false,
        }
    }

    /// Offset of the next delta-time
    pub const fn position(&self) -> usize {
        self.reader.buffer_position()
    }

    /// Sum of all delta-times read so far
    pub const fn accumulated_ticks(&self) -> u64 {
        self.accumulated_ticks
    }

    /// True after end-of-track, after the data ran out, or after an error
    pub const fn is_finished(&self) -> bool {
        self.finished || self.reader.is_at_end()
    }

    /// Read the next delta-time and event.
    ///
    /// # Errors
    /// - [`ParseError::MalformedVarint`](crate::ParseError::MalformedVarint)
    ///   for a bad delta-time
    /// - any error from [`event_length`]
    /// - [`ChunkError::TruncatedPayload`] if the event runs past the end of
    ///   the data
    pub fn next_event(&mut self) -> ReadResult<Option<TrackEvent<'a>>> {
        if self.is_finished() {
            return Ok(None);
        }
        let start = self.reader.buffer_position();
        match self.read_event() {
            Ok(event) => {
                #[cfg(feature = "tracing")]
                tracing::trace!(
                    offset = event.offset,
                    delta = event.delta_ticks,
                    len = event.len(),
                    "track event"
                );
                self.accumulated_ticks = event.accumulated_ticks;
                self.finished = event.is_end_of_track();
                Ok(Some(event))
            }
            Err(e) => {
                #[cfg(feature = "tracing")]
                tracing::warn!("Stopped reading track: {e}");
                self.reader.set_buffer_position(start);
                self.finished = true;
                Err(e)
            }
        }
    }

    fn read_event(&mut self) -> ReadResult<TrackEvent<'a>> {
        let delta = self.reader.read_varlen()?;
        let offset = self.reader.buffer_position();
        let length = event_length(self.reader.buffer(), offset)?;

        let bytes = self.reader.read_slice(length.len()).map_err(|_| {
            ReaderError::chunk(
                offset,
                ChunkError::TruncatedPayload {
                    declared: length.len() as u32,
                    available: self.reader.remaining(),
                },
            )
        })?;

        Ok(TrackEvent {
            delta_ticks: delta.value,
            accumulated_ticks: self.accumulated_ticks + delta.value as u64,
            offset,
            length,
            bytes,
        })
    }
}

impl<'a> Iterator for TrackCursor<'a> {
    type Item = ReadResult<TrackEvent<'a>>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_event().transpose()
    }
}

impl core::iter::FusedIterator for TrackCursor<'_> {}

/// Per-chunk traversal state: whether the chunk is a track, and where
/// reading has got to.
#[derive(Debug, Clone)]
pub struct TrackState<'a> {
    playable: bool,
    cursor: TrackCursor<'a>,
}

impl<'a> TrackState<'a> {
    /// Fresh state over `data`
    pub const fn new(data: &'a [u8], playable: bool) -> Self {
        Self {
            playable,
            cursor: TrackCursor::new(data),
        }
    }
    /// True for `MTrk` chunks
    pub const fn is_playable(&self) -> bool {
        self.playable
    }
    /// True while this is a track with events left to read
    pub const fn is_active(&self) -> bool {
        self.playable && !self.cursor.is_finished()
    }
    /// The traversal cursor
    pub const fn cursor(&self) -> &TrackCursor<'a> {
        &self.cursor
    }
    /// How many of `states` still have events left to read
    pub fn count_active(states: &[TrackState<'_>]) -> usize {
        states.iter().filter(|state| state.is_active()).count()
    }
    /// The traversal cursor, for stepping
    pub const fn cursor_mut(&mut self) -> &mut TrackCursor<'a> {
        &mut self.cursor
    }
}
