use crate::ParseError;
use alloc::vec::Vec;

#[doc = r#"
A decoded MIDI variable-length quantity.

MIDI packs these big-endian, seven bits per byte, with the high bit of
every byte but the last set. The file format caps them at four bytes, so
the largest representable value is `0x0FFF_FFFF`.

# Example
```rust
# use miditape::prelude::*;
let bytes = [0xBD, 0x84, 0x40];
let varlen = decode_vlq(&bytes, 0).unwrap();

assert_eq!(varlen.value, 1_000_000);
assert_eq!(varlen.len, 3);
```
"#]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VarLen {
    /// The decoded value
    pub value: u32,
    /// How many bytes the quantity occupied, always 1 to 4
    pub len: usize,
}

impl VarLen {
    /// The largest value a four byte quantity can hold
    pub const MAX: u32 = 0x0FFF_FFFF;
    /// The most bytes a quantity may span
    pub const MAX_LEN: usize = 4;
}

/// Decode a variable-length quantity starting at `bytes[start]`.
///
/// Fails with [`ParseError::MalformedVarint`] when no byte with a clear high
/// bit turns up within four bytes, or before the buffer runs out.
pub fn decode_vlq(bytes: &[u8], start: usize) -> Result<VarLen, ParseError> {
    let tail = bytes.get(start..).ok_or(ParseError::MalformedVarint)?;

    let mut value: u32 = 0;
    for (i, byte) in tail.iter().take(VarLen::MAX_LEN).enumerate() {
        value = (value << 7) | (byte & 0x7F) as u32;
        if byte & 0x80 == 0 {
            return Ok(VarLen { value, len: i + 1 });
        }
    }
    Err(ParseError::MalformedVarint)
}

/// Encode `value` as a variable-length quantity.
///
/// Bits above the 28th are dropped.
pub fn encode_vlq(value: u32) -> Vec<u8> {
    let value = value & VarLen::MAX;
    let mut out = Vec::with_capacity(VarLen::MAX_LEN);
    let mut shift = 21;
    while shift > 0 && value >> shift == 0 {
        shift -= 7;
    }
    while shift > 0 {
        out.push(((value >> shift) & 0x7F) as u8 | 0x80);
        shift -= 7;
    }
    out.push((value & 0x7F) as u8);
    out
}

#[test]
fn reference_vectors() {
    use pretty_assertions::assert_eq;
    let cases: [(&[u8], u32, usize); 5] = [
        (&[0x7F], 127, 1),
        (&[0x81, 0x00], 128, 2),
        (&[0xFF, 0x7F], 16383, 2),
        (&[0x87, 0x68], 1000, 2),
        (&[0xBD, 0x84, 0x40], 1_000_000, 3),
    ];
    for (bytes, value, len) in cases {
        assert_eq!(decode_vlq(bytes, 0), Ok(VarLen { value, len }));
        assert_eq!(encode_vlq(value), bytes);
    }
}

#[test]
fn decode_stops_at_first_clear_high_bit() {
    use pretty_assertions::assert_eq;
    // trailing bytes belong to whatever follows
    let bytes = [0x90, 0x81, 0x00, 0x40, 0x7F];
    assert_eq!(decode_vlq(&bytes, 1), Ok(VarLen { value: 128, len: 2 }));
}

#[test]
fn decode_rejects_five_byte_quantity() {
    use pretty_assertions::assert_eq;
    let bytes = [0x81, 0x80, 0x80, 0x80, 0x00];
    assert_eq!(decode_vlq(&bytes, 0), Err(ParseError::MalformedVarint));
    // the largest legal quantity still decodes
    let bytes = [0xFF, 0xFF, 0xFF, 0x7F];
    assert_eq!(
        decode_vlq(&bytes, 0),
        Ok(VarLen {
            value: VarLen::MAX,
            len: 4
        })
    );
}

#[test]
fn decode_rejects_unterminated_tail() {
    use pretty_assertions::assert_eq;
    assert_eq!(decode_vlq(&[0x81, 0x81], 0), Err(ParseError::MalformedVarint));
    assert_eq!(decode_vlq(&[], 0), Err(ParseError::MalformedVarint));
    assert_eq!(decode_vlq(&[0x00], 4), Err(ParseError::MalformedVarint));
}

#[test]
fn encode_masks_to_28_bits() {
    use pretty_assertions::assert_eq;
    assert_eq!(encode_vlq(0), [0x00]);
    assert_eq!(encode_vlq(0xF000_0000), [0x00]);
    assert_eq!(encode_vlq(u32::MAX), [0xFF, 0xFF, 0xFF, 0x7F]);
}
