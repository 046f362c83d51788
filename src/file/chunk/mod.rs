#![doc = r#"
Contains types for MIDI file chunks

# Overview

MIDI files are organized into chunks, each identified by a 4-character type identifier
followed by a 32-bit big-endian length field and then the chunk data. The Standard MIDI
File specification defines two chunk types, though files may contain additional
proprietary chunks.

```text
[Header Chunk: "MThd"]
[Track Chunk 1: "MTrk"]
[Track Chunk 2: "MTrk"]
...
[Track Chunk N: "MTrk"]
[Optional Unknown Chunks]
```

Framing doesn't care which is which. [`ChunkIter`] hands back whatever it
finds, in file order, until the bytes run out. The tag isn't validated as
ASCII; it's compared byte for byte.

# Short reads

Chunk boundaries can't be recovered once the stream is out of step, so a
chunk header cut short, or a payload shorter than its declared length, ends
framing. The error is reported once and the iterator is done.
"#]

mod iter;
pub use iter::*;

use crate::ChunkError;
use alloc::vec::Vec;
use core::fmt;

/// The 4-byte tag at the start of every chunk
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChunkType([u8; 4]);

impl ChunkType {
    /// `MThd`
    pub const HEADER: Self = Self(*b"MThd");
    /// `MTrk`
    pub const TRACK: Self = Self(*b"MTrk");

    /// Wrap four raw bytes
    pub const fn new(bytes: [u8; 4]) -> Self {
        Self(bytes)
    }
    /// The raw tag
    pub const fn bytes(&self) -> [u8; 4] {
        self.0
    }
    /// True for `MThd`
    pub fn is_header(&self) -> bool {
        *self == Self::HEADER
    }
    /// True for `MTrk`
    pub fn is_track(&self) -> bool {
        *self == Self::TRACK
    }
}

impl fmt::Display for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0 {
            if byte.is_ascii_graphic() {
                write!(f, "{}", byte as char)?;
            } else {
                write!(f, "\\x{byte:02X}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Debug for ChunkType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ChunkType({self})")
    }
}

impl From<[u8; 4]> for ChunkType {
    fn from(value: [u8; 4]) -> Self {
        Self(value)
    }
}

#[doc = r#"
A tagged, length-delimited region of a MIDI file.

The chunk owns a copy of its payload, so it outlives the buffer it was
framed from. The length is always the length of the data.

# Example
```rust
# use miditape::prelude::*;
let chunk = Chunk::new(ChunkType::TRACK, vec![0x00, 0xFF, 0x2F, 0x00]);

assert_eq!(chunk.length(), 4);
assert_eq!(
    chunk.to_bytes(),
    [b'M', b'T', b'r', b'k', 0, 0, 0, 4, 0x00, 0xFF, 0x2F, 0x00]
);
```
"#]
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chunk {
    tag: ChunkType,
    data: Vec<u8>,
}

impl Chunk {
    /// Bytes taken up by the tag and length field
    pub const HEADER_LEN: usize = 8;

    /// Create a chunk from a tag and payload
    ///
    /// # Panics
    /// if `data` is longer than `u32::MAX` bytes, since the length field
    /// couldn't hold it. See [`Chunk::try_new`].
    pub fn new(tag: ChunkType, data: Vec<u8>) -> Self {
        match Self::try_new(tag, data) {
            Ok(chunk) => chunk,
            Err(e) => panic!("{e}"),
        }
    }
    /// Create a chunk, failing with [`ChunkError::Oversized`] if the payload
    /// is longer than `u32::MAX` bytes
    pub fn try_new(tag: ChunkType, data: Vec<u8>) -> Result<Self, ChunkError> {
        if length_field(data.len()).is_none() {
            return Err(ChunkError::Oversized { len: data.len() });
        }
        Ok(Self { tag, data })
    }
    /// The chunk's tag
    pub const fn tag(&self) -> ChunkType {
        self.tag
    }
    /// Payload length in bytes, as written in the length field
    pub fn length(&self) -> u32 {
        // checked on construction
        self.data.len() as u32
    }
    /// The payload
    pub fn data(&self) -> &[u8] {
        &self.data
    }
    /// Give up the payload
    pub fn into_data(self) -> Vec<u8> {
        self.data
    }
    /// True when tagged `MTrk`
    pub fn is_track(&self) -> bool {
        self.tag.is_track()
    }
    /// True when tagged `MThd`
    pub fn is_header(&self) -> bool {
        self.tag.is_header()
    }
    /// A fresh cursor at the start of this chunk's data
    pub fn cursor(&self) -> super::TrackCursor<'_> {
        super::TrackCursor::new(&self.data)
    }
    /// Encode the chunk as it would appear in a file
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(Self::HEADER_LEN + self.data.len());
        out.extend_from_slice(&self.tag.0);
        out.extend_from_slice(&self.length().to_be_bytes());
        out.extend_from_slice(&self.data);
        out
    }
}

const fn length_field(len: usize) -> Option<u32> {
    if len as u64 > u32::MAX as u64 {
        None
    } else {
        Some(len as u32)
    }
}

#[test]
fn length_field_limits() {
    use pretty_assertions::assert_eq;
    assert_eq!(length_field(0), Some(0));
    assert_eq!(length_field(u32::MAX as usize), Some(u32::MAX));
    #[cfg(target_pointer_width = "64")]
    assert_eq!(length_field(u32::MAX as usize + 1), None);
}

#[test]
fn try_new_accepts_ordinary_payloads() {
    use pretty_assertions::assert_eq;
    let chunk = Chunk::try_new(ChunkType::TRACK, alloc::vec![0x00, 0xFF, 0x2F, 0x00]).unwrap();
    assert_eq!(chunk.length(), 4);
}

#[cfg(feature = "serde")]
#[test]
fn chunk_serde_round_trip() {
    use pretty_assertions::assert_eq;
    let chunk = Chunk::new(ChunkType::TRACK, alloc::vec![0x00, 0xC0, 0x05]);
    let json = serde_json::to_string(&chunk).unwrap();
    let back: Chunk = serde_json::from_str(&json).unwrap();
    assert_eq!(back, chunk);

    let file = super::MidiFile::from(alloc::vec![chunk]);
    let json = serde_json::to_string(&file).unwrap();
    let back: super::MidiFile = serde_json::from_str(&json).unwrap();
    assert_eq!(back, file);
}
