//! Hex string conversion.
//!
//! Keys, IVs, and text-mode codec output travel through the CLI as hex
//! strings, so the conversion lives here rather than in any one codec crate.

use thiserror::Error;

/// Errors from parsing a hex string.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum HexError {
    /// Hex strings encode whole bytes, so the length must be even.
    #[error("Hex string must have an even number of characters (got {len})")]
    OddLength {
        /// Length of the offending string.
        len: usize,
    },

    /// A character outside `[0-9a-fA-F]`.
    #[error("Invalid hex digit {digit:?} at position {position}")]
    InvalidDigit {
        /// The offending character.
        digit: char,
        /// Character offset within the input.
        position: usize,
    },
}

const HEX_DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as a lowercase hex string.
pub fn encode_hex(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &byte in bytes {
        out.push(HEX_DIGITS[(byte >> 4) as usize] as char);
        out.push(HEX_DIGITS[(byte & 0x0F) as usize] as char);
    }
    out
}

/// Decode a hex string into bytes.
pub fn decode_hex(hex: &str) -> Result<Vec<u8>, HexError> {
    if hex.len() % 2 != 0 {
        return Err(HexError::OddLength { len: hex.len() });
    }

    let mut out = Vec::with_capacity(hex.len() / 2);
    let mut chars = hex.char_indices();
    while let (Some((position, hi)), Some((_, lo))) = (chars.next(), chars.next()) {
        let hi = hi.to_digit(16).ok_or(HexError::InvalidDigit {
            digit: hi,
            position,
        })? as u8;
        let lo = lo.to_digit(16).ok_or(HexError::InvalidDigit {
            digit: lo,
            position: position + 1,
        })? as u8;
        out.push((hi << 4) | lo);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_hex() {
        assert_eq!(encode_hex(&[0x00, 0xAB, 0xFF]), "00abff");
        assert_eq!(encode_hex(&[]), "");
    }

    #[test]
    fn test_decode_hex() {
        assert_eq!(decode_hex("00abff").unwrap(), vec![0x00, 0xAB, 0xFF]);
        assert_eq!(decode_hex("00ABFF").unwrap(), vec![0x00, 0xAB, 0xFF]);
        assert_eq!(decode_hex("").unwrap(), Vec::<u8>::new());
    }

    #[test]
    fn test_decode_hex_odd_length() {
        assert_eq!(decode_hex("abc"), Err(HexError::OddLength { len: 3 }));
    }

    #[test]
    fn test_decode_hex_invalid_digit() {
        assert_eq!(
            decode_hex("0g"),
            Err(HexError::InvalidDigit {
                digit: 'g',
                position: 1
            })
        );
    }

    #[test]
    fn test_hex_roundtrip() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(decode_hex(&encode_hex(&data)).unwrap(), data);
    }
}
