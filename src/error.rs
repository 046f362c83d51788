use thiserror::Error;

#[doc = r#"
The set of ways a byte stream can fail to decode as a Standard MIDI File.

None of these are recovered internally. They're surfaced, wrapped in a
[`ReaderError`](crate::reader::ReaderError) carrying the offset, and the
caller decides whether to drop the file, the track, or just stop walking.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Top-level chunk framing failed
    #[error("Chunk: {0}")]
    Chunk(#[from] ChunkError),
    /// A record inside a track chunk could not be measured
    #[error("Event: {0}")]
    Event(#[from] EventError),
    /// The `MThd` chunk is malformed
    #[error("Header: {0}")]
    Header(#[from] HeaderError),
    /// A variable-length quantity did not terminate within four bytes
    #[error("Variable-length quantity has no terminating byte within 4 bytes")]
    MalformedVarint,
}

/// Errors produced while splitting a file into chunks
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChunkError {
    /// Fewer than 8 bytes remained for a chunk's tag and length
    #[error("Chunk header needs 8 bytes, only {available} remain")]
    TruncatedHeader {
        /// Bytes left in the stream
        available: usize,
    },
    /// The declared length runs past the end of the stream
    #[error("Chunk declares {declared} bytes, only {available} remain")]
    TruncatedPayload {
        /// The length the record claims
        declared: u32,
        /// Bytes left in the stream
        available: usize,
    },
    /// A payload too large for the 32-bit length field
    #[error("Chunk payload of {len} bytes does not fit a 32-bit length")]
    Oversized {
        /// The payload's length
        len: usize,
    },
}

/// Errors produced while measuring a single track event
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum EventError {
    /// The length field of a sysex or meta event could not be decoded
    #[error("Sysex or meta event has a malformed length field")]
    MalformedEventLength,
    /// The status byte belongs to no known event category
    #[error("Unknown event status byte {0:#04X}")]
    UnknownEventType(u8),
}

/// Errors produced while decoding the `MThd` chunk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum HeaderError {
    /// The chunk handed over isn't tagged `MThd`
    #[error("Expected an MThd chunk")]
    NotHeader,
    /// The header carries fewer than 6 bytes
    #[error("Header data is {0} bytes, expected at least 6")]
    Length(usize),
    /// The format word is not 0, 1 or 2
    #[error("Invalid format {0}")]
    InvalidFormat(u16),
    /// The SMPTE frame rate is not -24, -25, -29 or -30
    #[error("Invalid SMPTE frame rate {0}")]
    InvalidSmpteFps(i8),
}
