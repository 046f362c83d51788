use crate::{
    HeaderError,
    file::{Chunk, Timing},
};

/// How the tracks of a file relate to each other, from the `MThd` format word
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FormatType {
    /// Format 0
    SingleMultiChannel,
    /// Format 1
    Simultaneous,
    /// Format 2
    SequentiallyIndependent,
}

#[doc = r#"
The fixed fields of an `MThd` chunk.

```text
MThd <length=6> <format: u16> <ntrks: u16> <division: u16>
```

Only the first 6 bytes are read. A longer header is allowed; the extra
bytes are ignored.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HeaderChunk {
    format: FormatType,
    num_tracks: u16,
    timing: Timing,
}

impl HeaderChunk {
    /// Decode a header chunk.
    ///
    /// # Errors
    /// - [`HeaderError::NotHeader`] if the chunk isn't tagged `MThd`
    /// - [`HeaderError::Length`] if it has fewer than 6 bytes
    /// - [`HeaderError::InvalidFormat`] for a format other than 0, 1 or 2
    /// - [`HeaderError::InvalidSmpteFps`] for an unknown SMPTE frame rate
    pub fn parse(chunk: &Chunk) -> Result<Self, HeaderError> {
        if !chunk.is_header() {
            return Err(HeaderError::NotHeader);
        }
        let data = chunk.data();
        let &[f0, f1, n0, n1, d0, d1, ..] = data else {
            return Err(HeaderError::Length(data.len()));
        };

        let format = match u16::from_be_bytes([f0, f1]) {
            0 => FormatType::SingleMultiChannel,
            1 => FormatType::Simultaneous,
            2 => FormatType::SequentiallyIndependent,
            other => return Err(HeaderError::InvalidFormat(other)),
        };

        Ok(Self {
            format,
            num_tracks: u16::from_be_bytes([n0, n1]),
            timing: Timing::from_division([d0, d1])?,
        })
    }

    /// Returns the format type
    pub const fn format_type(&self) -> FormatType {
        self.format
    }
    /// The track count the header announces. Not checked against the file.
    pub const fn num_tracks(&self) -> u16 {
        self.num_tracks
    }
    /// Get the timing props
    pub const fn timing(&self) -> Timing {
        self.timing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::file::ChunkType;
    use alloc::vec;
    use pretty_assertions::assert_eq;

    #[test]
    fn parse_format_one() {
        let chunk = Chunk::new(ChunkType::HEADER, vec![0, 1, 0, 3, 0x01, 0xE0]);
        let header = HeaderChunk::parse(&chunk).unwrap();
        assert_eq!(header.format_type(), FormatType::Simultaneous);
        assert_eq!(header.num_tracks(), 3);
        assert_eq!(header.timing().ticks_per_quarter_note(), Some(480));
    }

    #[test]
    fn reject_bad_headers() {
        let short = Chunk::new(ChunkType::HEADER, vec![0, 1, 0, 3]);
        assert_eq!(HeaderChunk::parse(&short), Err(HeaderError::Length(4)));

        let format = Chunk::new(ChunkType::HEADER, vec![0, 3, 0, 1, 0, 96]);
        assert_eq!(
            HeaderChunk::parse(&format),
            Err(HeaderError::InvalidFormat(3))
        );

        let track = Chunk::new(ChunkType::TRACK, vec![0, 0, 0, 1, 0, 96]);
        assert_eq!(HeaderChunk::parse(&track), Err(HeaderError::NotHeader));
    }
}
