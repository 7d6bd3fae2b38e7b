//! Length-header framing for the packed bit pattern.
//!
//! The frame is an 8-byte little-endian u64 holding the logical bit count,
//! followed by the pattern packed MSB-first. The count excludes the zero
//! padding in the final byte, so a decoder can drop padding even mid-byte.

use crate::error::{MorseError, Result};

/// Size of the bit-count header in bytes.
pub const HEADER_LEN: usize = 8;

/// Append the bit-count header to an output buffer.
pub(crate) fn write_header(out: &mut Vec<u8>, bit_count: u64) {
    out.extend_from_slice(&bit_count.to_le_bytes());
}

/// Split a framed buffer into its bit count and packed payload.
pub(crate) fn split_frame(data: &[u8]) -> Result<(u64, &[u8])> {
    if data.len() < HEADER_LEN {
        return Err(MorseError::TruncatedHeader { actual: data.len() });
    }
    let mut header = [0u8; HEADER_LEN];
    header.copy_from_slice(&data[..HEADER_LEN]);
    Ok((u64::from_le_bytes(header), &data[HEADER_LEN..]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_header_roundtrip() {
        let mut buf = Vec::new();
        write_header(&mut buf, 0x0102_0304_0506_0708);
        buf.push(0xAA);

        let (count, payload) = split_frame(&buf).unwrap();
        assert_eq!(count, 0x0102_0304_0506_0708);
        assert_eq!(payload, &[0xAA]);
    }

    #[test]
    fn test_split_rejects_short_input() {
        for len in 0..HEADER_LEN {
            let buf = vec![0u8; len];
            assert_eq!(
                split_frame(&buf),
                Err(MorseError::TruncatedHeader { actual: len })
            );
        }
    }

    #[test]
    fn test_header_is_little_endian() {
        let mut buf = Vec::new();
        write_header(&mut buf, 5);
        assert_eq!(buf, vec![5, 0, 0, 0, 0, 0, 0, 0]);
    }
}
