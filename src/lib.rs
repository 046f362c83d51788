#![doc = r#"
Frame a Standard MIDI File into owned chunks and walk each track chunk as a
byte tape.

The crate answers two questions about a buffered SMF:

- where does the current record end? ([`event_length`])
- what does the next fixed framing field say? ([`frame_chunks`], [`decode_vlq`])

Events are never copied into a list. A [`TrackCursor`](crate::file::TrackCursor)
borrows a chunk's data and hands out each record as a slice along with the
delta-time that preceded it.

# Example
```rust
use miditape::prelude::*;

let bytes = [
    b'M', b'T', b'h', b'd', 0, 0, 0, 6, 0, 0, 0, 1, 0, 96,
    b'M', b'T', b'r', b'k', 0, 0, 0, 8,
    0x00, 0x90, 0x3C, 0x40,
    0x60, 0xFF, 0x2F, 0x00,
];

let file = MidiFile::load(&bytes).unwrap();
assert_eq!(file.len(), 2);

let track = file.tracks().next().unwrap();
let steps: Vec<_> = track
    .cursor()
    .map(|event| event.unwrap().step())
    .collect();

assert_eq!(steps, [(0, 3), (96, 3)]);
```
"#]
#![no_std]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
pub use error::*;

pub mod event;
pub mod file;
pub mod reader;

mod vlq;
pub use vlq::*;

pub use event::{EventKind, EventLength, event_length};
pub use file::{Chunk, ChunkType, frame_chunks, is_standard_midi_file};

/// Re-exports of the types most callers need
pub mod prelude {
    pub use crate::{
        ChunkError, EventError, HeaderError, ParseError, VarLen, decode_vlq, encode_vlq,
        event::*,
        file::*,
        reader::{ReadResult, Reader, ReaderError, ReaderErrorKind},
    };
}
