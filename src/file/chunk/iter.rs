use super::{Chunk, ChunkType};
use crate::{
    ChunkError,
    reader::{ReadResult, Reader, ReaderError},
};
use alloc::vec::Vec;

/// Lazily frames chunks out of a byte buffer.
///
/// Yields `Err` at most once; after that, and at the end of the buffer, it
/// yields `None`.
pub struct ChunkIter<'a> {
    reader: Reader<'a>,
    failed: bool,
}

impl<'a> ChunkIter<'a> {
    /// Start framing at the beginning of `bytes`
    pub const fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_byte_slice(bytes),
            failed: false,
        }
    }

    /// Offset of the next chunk header. After a failure this is the start of
    /// the chunk that could not be framed.
    pub const fn buffer_position(&self) -> usize {
        self.reader.buffer_position()
    }

    fn read_chunk(&mut self) -> ReadResult<Chunk> {
        let start = self.reader.buffer_position();

        let available = self.reader.remaining();
        if available < Chunk::HEADER_LEN {
            return Err(ReaderError::chunk(
                start,
                ChunkError::TruncatedHeader { available },
            ));
        }
        let tag = ChunkType::new(self.reader.read_exact_size()?);
        let declared = u32::from_be_bytes(self.reader.read_exact_size()?);

        let data = match self.reader.read_slice(declared as usize) {
            Ok(data) => data,
            Err(_) => {
                let available = self.reader.remaining();
                self.reader.set_buffer_position(start);
                return Err(ReaderError::chunk(
                    start,
                    ChunkError::TruncatedPayload {
                        declared,
                        available,
                    },
                ));
            }
        };

        #[cfg(feature = "tracing")]
        tracing::debug!(offset = start, tag = %tag, length = declared, "framed chunk");

        Ok(Chunk::new(tag, data.to_vec()))
    }
}

impl Iterator for ChunkIter<'_> {
    type Item = ReadResult<Chunk>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.reader.is_at_end() {
            return None;
        }
        let chunk = self.read_chunk();
        if let Err(_e) = &chunk {
            #[cfg(feature = "tracing")]
            tracing::warn!("Stopped framing chunks: {_e}");
            self.failed = true;
        }
        Some(chunk)
    }
}

impl core::iter::FusedIterator for ChunkIter<'_> {}

/// Split a complete file buffer into its chunks, in file order.
///
/// # Errors
/// - [`ChunkError::TruncatedHeader`] when fewer than 8 bytes are left for a
///   chunk's tag and length
/// - [`ChunkError::TruncatedPayload`] when a chunk declares more bytes than
///   remain
pub fn frame_chunks(bytes: &[u8]) -> ReadResult<Vec<Chunk>> {
    ChunkIter::new(bytes).collect()
}

/// True when `bytes` starts with the `MThd` tag
pub fn is_standard_midi_file(bytes: &[u8]) -> bool {
    bytes.starts_with(&ChunkType::HEADER.bytes())
}

#[test]
fn iterator_fuses_after_error() {
    use pretty_assertions::assert_eq;
    let bytes = [b'M', b'T', b'r', b'k', 0, 0, 0, 9, 0x00];
    let mut iter = ChunkIter::new(&bytes);

    let err = iter.next().unwrap().unwrap_err();
    assert_eq!(
        err.parse_error(),
        Some(crate::ParseError::Chunk(ChunkError::TruncatedPayload {
            declared: 9,
            available: 1
        }))
    );
    assert_eq!(iter.buffer_position(), 0);
    assert!(iter.next().is_none());
    assert!(iter.next().is_none());
}

#[test]
fn empty_payload_chunk() {
    use pretty_assertions::assert_eq;
    let bytes = [b'X', b'F', b'I', b'H', 0, 0, 0, 0];
    let chunks = frame_chunks(&bytes).unwrap();
    assert_eq!(chunks.len(), 1);
    assert_eq!(chunks[0].tag(), ChunkType::new(*b"XFIH"));
    assert!(chunks[0].data().is_empty());
}
