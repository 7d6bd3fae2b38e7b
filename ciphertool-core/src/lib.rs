//! # ciphertool-core
//!
//! Core components shared by the ciphertool codec crates.
//!
//! - [`bitstream`]: MSB-first bit-level I/O over in-memory buffers
//! - [`hex`]: hex string conversion for keys, IVs, and text-mode output
//!
//! ## Example
//!
//! ```rust
//! use ciphertool_core::bitstream::{BitReader, BitWriter};
//!
//! let mut writer = BitWriter::new();
//! writer.push_bit(true);
//! writer.push_run(false, 3);
//! writer.push_bit(true);
//! assert_eq!(writer.bits_written(), 5);
//!
//! let bytes = writer.into_bytes();
//! assert_eq!(bytes, vec![0b1000_1000]);
//!
//! let mut reader = BitReader::new(&bytes, 5);
//! assert_eq!(reader.next_bit(), Some(true));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

pub mod bitstream;
pub mod hex;

pub use bitstream::{BitReader, BitWriter};
pub use hex::{HexError, decode_hex, encode_hex};
