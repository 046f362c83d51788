#![doc = r#"
A bounds-checked cursor over a borrowed byte buffer.

Every read either returns exactly what was asked for or fails with the
position it failed at. A failed read never moves the cursor.
"#]

mod error;
pub use error::*;

use crate::{ParseError, VarLen, decode_vlq};

/// A cursor over a byte slice
#[derive(Debug, Clone)]
pub struct Reader<'a> {
    data: &'a [u8],
    position: usize,
}

impl<'a> Reader<'a> {
    /// Create a reader positioned at the start of `data`
    pub const fn from_byte_slice(data: &'a [u8]) -> Self {
        Self { data, position: 0 }
    }

    /// The offset of the next byte to be read
    pub const fn buffer_position(&self) -> usize {
        self.position
    }

    /// Moves the cursor. Positions past the end are clamped to the end.
    pub fn set_buffer_position(&mut self, position: usize) {
        self.position = position.min(self.data.len());
    }

    /// The number of bytes not yet read
    pub const fn remaining(&self) -> usize {
        self.data.len() - self.position
    }

    /// True once every byte has been consumed
    pub const fn is_at_end(&self) -> bool {
        self.position >= self.data.len()
    }

    /// The whole underlying buffer
    pub const fn buffer(&self) -> &'a [u8] {
        self.data
    }

    /// The next byte, without consuming it
    pub fn peek_u8(&self) -> ReadResult<u8> {
        self.data
            .get(self.position)
            .copied()
            .ok_or(ReaderError::oob(self.position))
    }

    /// Consume one byte
    pub fn read_u8(&mut self) -> ReadResult<u8> {
        let byte = self.peek_u8()?;
        self.position += 1;
        Ok(byte)
    }

    /// Consume `len` bytes, borrowing them from the buffer
    pub fn read_slice(&mut self, len: usize) -> ReadResult<&'a [u8]> {
        let end = self
            .position
            .checked_add(len)
            .filter(|end| *end <= self.data.len())
            .ok_or(ReaderError::oob(self.position))?;
        let slice = &self.data[self.position..end];
        self.position = end;
        Ok(slice)
    }

    /// Consume exactly `N` bytes into an array
    pub fn read_exact_size<const N: usize>(&mut self) -> ReadResult<[u8; N]> {
        let slice = self.read_slice(N)?;
        let mut out = [0; N];
        out.copy_from_slice(slice);
        Ok(out)
    }

    /// Consume a variable-length quantity
    pub fn read_varlen(&mut self) -> ReadResult<VarLen> {
        let varlen = decode_vlq(self.data, self.position)
            .map_err(|e: ParseError| inv_data(self.position, e))?;
        self.position += varlen.len;
        Ok(varlen)
    }
}

#[test]
fn failed_reads_do_not_move() {
    use pretty_assertions::assert_eq;
    let bytes = [0x01, 0x02, 0x03];
    let mut reader = Reader::from_byte_slice(&bytes);

    assert_eq!(reader.read_u8().unwrap(), 0x01);
    let err = reader.read_slice(3).unwrap_err();
    assert!(err.is_out_of_bounds());
    assert_eq!(err.position(), 1);
    assert_eq!(reader.buffer_position(), 1);

    assert_eq!(reader.read_exact_size::<2>().unwrap(), [0x02, 0x03]);
    assert!(reader.is_at_end());
    assert!(reader.read_u8().is_err());
}

#[test]
fn read_varlen_reports_start_of_quantity() {
    use pretty_assertions::assert_eq;
    let bytes = [0x00, 0x87, 0x68, 0xFF, 0xFF];
    let mut reader = Reader::from_byte_slice(&bytes);
    reader.set_buffer_position(1);

    let varlen = reader.read_varlen().unwrap();
    assert_eq!(varlen.value, 1000);
    assert_eq!(reader.buffer_position(), 3);

    let err = reader.read_varlen().unwrap_err();
    assert_eq!(err.position(), 3);
    assert_eq!(err.parse_error(), Some(ParseError::MalformedVarint));
    assert_eq!(reader.buffer_position(), 3);
}
