//! # ciphertool-morse: Binary Morse Framing Codec
//!
//! Encodes arbitrary bytes into a self-describing bit-pattern stream and
//! decodes it back exactly. Each byte is split into two nibbles, each nibble
//! maps to a fixed dot/dash code, and the codes are rendered as runs of `1`
//! bits separated by runs of `0` bits whose width carries the structure:
//!
//! - dot → `1`, dash → `111`
//! - 1 zero bit between symbols within one code
//! - 3 zero bits between the high-nibble and low-nibble groups
//! - 7 zero bits between consecutive encoded bytes
//!
//! The packed output is framed by an 8-byte little-endian count of logical
//! bits, so the zero padding in the final byte is unambiguous on decode.
//!
//! ## Wire format
//!
//! ```text
//! ┌──────────────────────────┬─────────────────────────────────────┐
//! │ 8 bytes: bit count (LE)  │ ceil(count/8) bytes: packed pattern │
//! └──────────────────────────┴─────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use ciphertool_morse::{decode, encode};
//!
//! let original = b"hello, morse";
//! let framed = encode(original);
//! let recovered = decode(&framed).unwrap();
//! assert_eq!(recovered, original);
//! ```
//!
//! ## Leniency
//!
//! Decoding fails only when the 8-byte header is missing. Malformed *content*
//! degrades gracefully: unrecognized run lengths and unknown dot/dash codes
//! are dropped, and a trailing half-decoded byte is discarded. Decode success
//! therefore does not imply byte-perfect recovery of corrupted input; there is
//! no checksum in the frame.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod decoder;
mod encoder;
mod error;
mod frame;
mod symbols;

pub use decoder::decode;
pub use encoder::{encode, encoded_bit_len};
pub use error::{MorseError, Result};
pub use frame::HEADER_LEN;
