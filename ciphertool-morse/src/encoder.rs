//! Morse frame encoder.

use crate::frame::{self, HEADER_LEN};
use crate::symbols::{self, BYTE_GAP, DASH_RUN, DOT_RUN, NIBBLE_GAP, SYMBOL_GAP};
use ciphertool_core::BitWriter;

/// Encode a byte sequence into a framed Morse bit stream.
///
/// Every byte sequence is encodable: the nibble table is total, so there is
/// no failure path. Output length is exactly
/// `HEADER_LEN + ceil(encoded_bit_len(input) / 8)`.
///
/// # Algorithm
///
/// 1. Split each byte into high and low nibbles.
/// 2. Render each nibble's dot/dash code as runs of `1` bits with single
///    zero bits between symbols.
/// 3. Join the nibble groups with a 3-bit gap, and consecutive bytes with a
///    7-bit gap (no gap after the last byte).
/// 4. Prepend the 8-byte logical bit count and pack MSB-first, zero-padding
///    the final partial byte.
pub fn encode(input: &[u8]) -> Vec<u8> {
    // Worst-case expansion is 28 bits per input byte (two "...-" groups
    // plus the inter-byte gap), so pre-size for 4 bytes per input byte.
    let mut writer = BitWriter::with_capacity(input.len() * 4);

    for (index, &byte) in input.iter().enumerate() {
        if index > 0 {
            writer.push_run(false, BYTE_GAP);
        }
        write_nibble(&mut writer, byte >> 4);
        writer.push_run(false, NIBBLE_GAP);
        write_nibble(&mut writer, byte & 0x0F);
    }

    let bit_count = writer.bits_written();
    let packed = writer.into_bytes();

    let mut out = Vec::with_capacity(HEADER_LEN + packed.len());
    frame::write_header(&mut out, bit_count);
    out.extend_from_slice(&packed);
    out
}

/// Logical bit length of the pattern `encode` produces for `input`.
///
/// Computable from the symbol table alone, without encoding.
pub fn encoded_bit_len(input: &[u8]) -> u64 {
    let mut bits = 0;
    for (index, &byte) in input.iter().enumerate() {
        if index > 0 {
            bits += BYTE_GAP;
        }
        bits += symbols::code_bit_len(byte >> 4);
        bits += NIBBLE_GAP;
        bits += symbols::code_bit_len(byte & 0x0F);
    }
    bits
}

fn write_nibble(writer: &mut BitWriter, nibble: u8) {
    let code = symbols::code_for_nibble(nibble);
    for (index, symbol) in code.bytes().enumerate() {
        if index > 0 {
            writer.push_run(false, SYMBOL_GAP);
        }
        let run = if symbol == b'.' { DOT_RUN } else { DASH_RUN };
        writer.push_run(true, run);
    }
}
