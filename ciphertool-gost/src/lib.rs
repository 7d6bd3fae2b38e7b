//! # ciphertool-gost: keyed XOR transform in GOST CBC clothing
//!
//! A block-cipher-shaped byte transform: 256-bit key, 64-bit IV, PKCS#7
//! padding to an 8-byte block, then a repeating-key XOR of the padded data
//! with the key and IV.
//!
//! **This is a placeholder, not a cipher.** The transform is a plain XOR
//! keystream and provides no confidentiality. It exists so the surrounding
//! toolkit has a keyed, IV-based transform with the same shape and error
//! surface a real CBC cipher would have.
//!
//! ## Example
//!
//! ```rust
//! use ciphertool_gost::{decrypt, encrypt, random_iv, KEY_LEN};
//!
//! let key = [0x42u8; KEY_LEN];
//! let iv = random_iv();
//!
//! let ciphertext = encrypt(b"attack at dawn", &key, &iv).unwrap();
//! let plaintext = decrypt(&ciphertext, &key, &iv).unwrap();
//! assert_eq!(plaintext, b"attack at dawn");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod cipher;
mod error;
mod padding;

pub use cipher::{decrypt, encrypt, random_iv};
pub use error::{GostError, Result};

/// Key length in bytes (256 bits).
pub const KEY_LEN: usize = 32;
/// Block length in bytes (64 bits).
pub const BLOCK_LEN: usize = 8;
/// IV length in bytes (one block).
pub const IV_LEN: usize = BLOCK_LEN;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roundtrip() {
        let key = [0xA5u8; KEY_LEN];
        let iv = [0x5Au8; IV_LEN];

        for input in [&b""[..], b"x", b"eight by", b"longer than one block of data"] {
            let ciphertext = encrypt(input, &key, &iv).unwrap();
            assert_eq!(ciphertext.len() % BLOCK_LEN, 0);
            assert_eq!(decrypt(&ciphertext, &key, &iv).unwrap(), input);
        }
    }

    #[test]
    fn test_wrong_iv_fails_or_garbles() {
        let key = [0x01u8; KEY_LEN];
        let iv = [0x02u8; IV_LEN];
        let other_iv = [0x03u8; IV_LEN];

        let ciphertext = encrypt(b"some plaintext here", &key, &iv).unwrap();
        // Wrong IV either trips padding validation or yields different bytes.
        match decrypt(&ciphertext, &key, &other_iv) {
            Err(GostError::InvalidPadding) => {}
            Ok(garbled) => assert_ne!(garbled, b"some plaintext here"),
            Err(other) => panic!("unexpected error: {other}"),
        }
    }
}
