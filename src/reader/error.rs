use crate::{ChunkError, EventError, ParseError};
use thiserror::Error;

#[doc = r#"
An error raised while reading an SMF byte stream, paired with the offset it
was discovered at.
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("Reading at Position {position}, {kind}")]
pub struct ReaderError {
    position: usize,
    pub(crate) kind: ReaderErrorKind,
}

/// A kind of error that a reader can produce
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ReaderErrorKind {
    /// Parsing errors
    #[error("Parsing {0}")]
    ParseError(#[from] ParseError),
    /// Reading out of bounds.
    #[error("Read out of bounds!")]
    OutOfBounds,
}

impl ReaderErrorKind {
    pub(crate) const fn chunk(chunk_err: ChunkError) -> Self {
        Self::ParseError(ParseError::Chunk(chunk_err))
    }
    pub(crate) const fn event(event_err: EventError) -> Self {
        Self::ParseError(ParseError::Event(event_err))
    }
}

impl ReaderError {
    /// Create a reader error from a position and kind
    pub const fn new(position: usize, kind: ReaderErrorKind) -> Self {
        Self { position, kind }
    }
    /// True if out of bounds or unexpected end of file
    pub const fn is_out_of_bounds(&self) -> bool {
        matches!(self.kind, ReaderErrorKind::OutOfBounds)
    }
    /// Returns the error kind of the reader.
    pub fn error_kind(&self) -> &ReaderErrorKind {
        &self.kind
    }
    /// Returns the position where the read error occurred.
    pub fn position(&self) -> usize {
        self.position
    }
    /// Returns the underlying parse error, if this isn't a bounds failure.
    pub const fn parse_error(&self) -> Option<ParseError> {
        match self.kind {
            ReaderErrorKind::ParseError(e) => Some(e),
            ReaderErrorKind::OutOfBounds => None,
        }
    }

    /// Create a new chunk framing error
    pub const fn chunk(position: usize, error: ChunkError) -> Self {
        Self::new(position, ReaderErrorKind::chunk(error))
    }

    /// Create a new event measuring error
    pub const fn event(position: usize, error: EventError) -> Self {
        Self::new(position, ReaderErrorKind::event(error))
    }

    /// Create a new out of bounds error
    pub const fn oob(position: usize) -> Self {
        Self {
            position,
            kind: ReaderErrorKind::OutOfBounds,
        }
    }
}

/// The Read Result type (see [`ReaderError`])
pub type ReadResult<T> = Result<T, ReaderError>;

pub(crate) fn inv_data(position: usize, v: impl Into<ParseError>) -> ReaderError {
    ReaderError::new(position, ReaderErrorKind::ParseError(v.into()))
}
