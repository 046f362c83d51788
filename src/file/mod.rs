#![doc = r#"
Rusty representation of a [`MidiFile`]
"#]

mod chunk;
pub use chunk::*;

mod header;
pub use header::*;

mod timing;
pub use timing::*;

mod track;
pub use track::*;

use crate::reader::ReadResult;
use alloc::vec::Vec;

#[doc = r#"
Every chunk of a MIDI file, in file order, each owning its data.

Loading only frames the file. The header isn't required to come first, or
at all; see [`MidiFile::header`] and [`is_standard_midi_file`].

# Example
```rust
# use miditape::prelude::*;
let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0x01, 0xE0,
    b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00,
];
assert!(is_standard_midi_file(&bytes));

let file = MidiFile::load(&bytes).unwrap();
let header = file.header().unwrap().unwrap();
assert_eq!(header.timing().ticks_per_quarter_note(), Some(480));

let states = file.track_states();
assert!(!states[0].is_playable());
assert!(states[1].is_active());
```
"#]
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MidiFile {
    chunks: Vec<Chunk>,
}

impl MidiFile {
    /// Frame a complete file buffer into chunks.
    ///
    /// Fails on the first short read; see [`frame_chunks`].
    pub fn load(bytes: &[u8]) -> ReadResult<Self> {
        let chunks = frame_chunks(bytes)?;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            chunks = chunks.len(),
            tracks = chunks.iter().filter(|c| c.is_track()).count(),
            "loaded midi file"
        );

        Ok(Self { chunks })
    }

    /// All chunks in file order
    pub fn chunks(&self) -> &[Chunk] {
        &self.chunks
    }

    /// The chunk at `index`
    pub fn get(&self, index: usize) -> Option<&Chunk> {
        self.chunks.get(index)
    }

    /// Number of chunks, header included
    pub fn len(&self) -> usize {
        self.chunks.len()
    }

    /// True when the buffer held no chunks
    pub fn is_empty(&self) -> bool {
        self.chunks.is_empty()
    }

    /// Give up the chunks
    pub fn into_chunks(self) -> Vec<Chunk> {
        self.chunks
    }

    /// The `MTrk` chunks, in file order
    pub fn tracks(&self) -> impl Iterator<Item = &Chunk> {
        self.chunks.iter().filter(|chunk| chunk.is_track())
    }

    /// Decode the first `MThd` chunk, if there is one
    pub fn header(&self) -> Option<Result<HeaderChunk, crate::HeaderError>> {
        self.chunks
            .iter()
            .find(|chunk| chunk.is_header())
            .map(HeaderChunk::parse)
    }

    /// One traversal state per chunk, in file order.
    ///
    /// `MTrk` chunks are playable; everything else is carried along but
    /// never active. Every cursor starts at 0.
    pub fn track_states(&self) -> Vec<TrackState<'_>> {
        self.chunks
            .iter()
            .map(|chunk| TrackState::new(chunk.data(), chunk.is_track()))
            .collect()
    }
}

impl From<Vec<Chunk>> for MidiFile {
    fn from(chunks: Vec<Chunk>) -> Self {
        Self { chunks }
    }
}

impl IntoIterator for MidiFile {
    type Item = Chunk;
    type IntoIter = alloc::vec::IntoIter<Chunk>;
    fn into_iter(self) -> Self::IntoIter {
        self.chunks.into_iter()
    }
}
