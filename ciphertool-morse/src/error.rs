//! Morse codec error types.

use thiserror::Error;

/// Errors from decoding a framed Morse stream.
///
/// Only framing problems are fatal. Malformed bit content (unknown codes,
/// odd run lengths, a trailing half byte) is absorbed by the lenient decoder
/// and never surfaces here.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum MorseError {
    /// Input shorter than the 8-byte bit-count header.
    #[error("Framed input too short: {actual} bytes (8-byte bit-count header required)")]
    TruncatedHeader {
        /// Length of the input that was provided.
        actual: usize,
    },
}

/// Result type for Morse codec operations.
pub type Result<T> = std::result::Result<T, MorseError>;
