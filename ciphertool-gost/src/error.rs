//! Error types for the placeholder cipher.

use thiserror::Error;

/// Errors from the keyed XOR transform.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GostError {
    /// Key is not exactly 32 bytes.
    #[error("Invalid key length: {actual} bytes (expected {expected})")]
    InvalidKeyLength {
        /// Length of the key that was provided.
        actual: usize,
        /// Required key length.
        expected: usize,
    },

    /// IV is not exactly 8 bytes.
    #[error("Invalid IV length: {actual} bytes (expected {expected})")]
    InvalidIvLength {
        /// Length of the IV that was provided.
        actual: usize,
        /// Required IV length.
        expected: usize,
    },

    /// Decrypted data does not end in a valid PKCS#7 padding block.
    #[error("Invalid PKCS#7 padding (wrong key/IV or corrupted ciphertext)")]
    InvalidPadding,
}

/// Result type for cipher operations.
pub type Result<T> = std::result::Result<T, GostError>;
