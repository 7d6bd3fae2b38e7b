//! # ciphertool-rot13: ROT13 + XOR stream transform
//!
//! Rotates ASCII letters by 13 places, then XORs every byte with a fixed
//! key. Both steps are involutions applied in opposite order on decode, so
//! the pair round-trips any byte sequence. Non-letter bytes pass through
//! the ROT13 step untouched.
//!
//! Like the rest of this toolkit's "ciphers", this is an obfuscation
//! exercise, not security.
//!
//! ## Example
//!
//! ```rust
//! let encoded = ciphertool_rot13::encode(b"Hello, World!");
//! assert_eq!(ciphertool_rot13::decode(&encoded), b"Hello, World!");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

/// Fixed XOR key applied after the ROT13 substitution.
pub const XOR_KEY: u8 = 170;

fn rot13_byte(byte: u8) -> u8 {
    match byte {
        b'a'..=b'z' => (byte - b'a' + 13) % 26 + b'a',
        b'A'..=b'Z' => (byte - b'A' + 13) % 26 + b'A',
        _ => byte,
    }
}

/// Encode: ROT13 each ASCII letter, then XOR every byte with [`XOR_KEY`].
pub fn encode(input: &[u8]) -> Vec<u8> {
    input.iter().map(|&b| rot13_byte(b) ^ XOR_KEY).collect()
}

/// Decode: XOR every byte with [`XOR_KEY`], then ROT13 each ASCII letter.
pub fn decode(input: &[u8]) -> Vec<u8> {
    input.iter().map(|&b| rot13_byte(b ^ XOR_KEY)).collect()
}
