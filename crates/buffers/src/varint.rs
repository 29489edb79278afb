//! Unsigned base-128 varints.
//!
//! Each byte carries 7 data bits, least-significant group first. A set high
//! bit means another byte follows; the first byte with the high bit clear
//! ends the value.

use crate::BufferError;

/// Longest encoding of a `u64`.
pub const MAX_VARINT_LEN: usize = 10;

/// Encodes `value` as a varint.
///
/// # Example
///
/// ```
/// use sentence_links_buffers::encode_varint;
///
/// assert_eq!(encode_varint(1), [0x01]);
/// assert_eq!(encode_varint(300), [0xac, 0x02]);
/// ```
pub fn encode_varint(value: u64) -> Vec<u8> {
    let mut out = Vec::with_capacity(varint_len(value));
    write_varint_to(&mut out, value);
    out
}

/// Encodes a signed integer, rejecting negatives.
pub fn encode_varint_i64(value: i64) -> Result<Vec<u8>, BufferError> {
    if value < 0 {
        return Err(BufferError::NegativeVarint(value));
    }
    Ok(encode_varint(value as u64))
}

/// Appends the varint encoding of `value` to `out`.
pub(crate) fn write_varint_to(out: &mut Vec<u8>, mut value: u64) {
    while value > 0x7f {
        out.push((value & 0x7f) as u8 | 0x80);
        value >>= 7;
    }
    out.push((value & 0x7f) as u8);
}

/// Number of bytes [`encode_varint`] produces for `value`.
pub fn varint_len(value: u64) -> usize {
    let bits = 64 - (value | 1).leading_zeros() as usize;
    bits.div_ceil(7)
}

/// Decodes a varint starting at `pos`, returning the value and the position
/// just past its last byte.
///
/// Fails with [`BufferError::EndOfBuffer`] when the input ends before a
/// terminating byte, and with [`BufferError::VarintOverflow`] when the value
/// does not fit 64 bits.
///
/// # Example
///
/// ```
/// use sentence_links_buffers::{decode_varint, BufferError};
///
/// assert_eq!(decode_varint(&[0xac, 0x02, 0xff], 0), Ok((300, 2)));
/// assert_eq!(decode_varint(&[0x80], 0), Err(BufferError::EndOfBuffer));
/// ```
pub fn decode_varint(bytes: &[u8], pos: usize) -> Result<(u64, usize), BufferError> {
    let mut result: u64 = 0;
    let mut cursor = pos;
    for index in 0..MAX_VARINT_LEN {
        let b = *bytes.get(cursor).ok_or(BufferError::EndOfBuffer)?;
        cursor += 1;
        let low = (b & 0x7f) as u64;
        // The tenth byte may only contribute the single top bit.
        if index == MAX_VARINT_LEN - 1 && low > 1 {
            return Err(BufferError::VarintOverflow);
        }
        result |= low << (7 * index);
        if b & 0x80 == 0 {
            return Ok((result, cursor));
        }
    }
    Err(BufferError::VarintOverflow)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_single_byte() {
        assert_eq!(encode_varint(0), [0x00]);
        assert_eq!(encode_varint(0x7f), [0x7f]);
    }

    #[test]
    fn test_encode_multi_byte() {
        assert_eq!(encode_varint(0x80), [0x80, 0x01]);
        assert_eq!(encode_varint(16_384), [0x80, 0x80, 0x01]);
    }

    #[test]
    fn test_encode_max() {
        let bytes = encode_varint(u64::MAX);
        assert_eq!(bytes.len(), MAX_VARINT_LEN);
        assert_eq!(bytes[9], 0x01);
    }

    #[test]
    fn test_encode_negative_rejected() {
        assert_eq!(encode_varint_i64(-1), Err(BufferError::NegativeVarint(-1)));
        assert_eq!(encode_varint_i64(5), Ok(vec![0x05]));
    }

    #[test]
    fn test_varint_len() {
        assert_eq!(varint_len(0), 1);
        assert_eq!(varint_len(127), 1);
        assert_eq!(varint_len(128), 2);
        assert_eq!(varint_len(u64::MAX), 10);
    }

    #[test]
    fn test_decode_offset() {
        assert_eq!(decode_varint(&[0xff, 0x96, 0x01], 1), Ok((150, 3)));
    }

    #[test]
    fn test_decode_truncated() {
        assert_eq!(decode_varint(&[], 0), Err(BufferError::EndOfBuffer));
        assert_eq!(decode_varint(&[0xff, 0xff], 0), Err(BufferError::EndOfBuffer));
        assert_eq!(decode_varint(&[0x01], 1), Err(BufferError::EndOfBuffer));
    }

    #[test]
    fn test_decode_overflow() {
        let mut bytes = vec![0xff; 9];
        bytes.push(0x02);
        assert_eq!(decode_varint(&bytes, 0), Err(BufferError::VarintOverflow));
        let eleven = vec![0x80; 11];
        assert_eq!(decode_varint(&eleven, 0), Err(BufferError::VarintOverflow));
    }

    #[test]
    fn test_decode_non_minimal() {
        // Redundant continuation groups are accepted.
        assert_eq!(decode_varint(&[0x81, 0x80, 0x00], 0), Ok((1, 3)));
    }
}
