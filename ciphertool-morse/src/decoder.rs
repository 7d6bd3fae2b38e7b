//! Morse frame decoder.

use crate::error::Result;
use crate::frame;
use crate::symbols::{self, DASH_RUN, DOT_RUN, NIBBLE_GAP};
use ciphertool_core::BitReader;

/// Decode a framed Morse bit stream back into the original bytes.
///
/// Fails only when the 8-byte header is missing. The bit content itself is
/// parsed leniently, matching the original tool's behavior:
///
/// - a run of `1`s of length 1 is a dot, length 3 a dash; any other run
///   length contributes nothing to the current code
/// - a run of `0`s of width 1-2 separates symbols within a code; any run
///   of 3 or more (well-formed streams only produce 3 and 7), or the end
///   of the stream, closes the current code
/// - a closed code with no table entry is discarded silently
/// - a stream ending with a resolved high nibble but no low nibble drops
///   that partial byte
///
/// A header count larger than the payload provides is clamped to the bits
/// actually present; padding bits beyond the count are never parsed. Because
/// the frame carries no checksum, a successful decode of corrupted input may
/// still differ from what was originally encoded.
pub fn decode(data: &[u8]) -> Result<Vec<u8>> {
    let (bit_count, payload) = frame::split_frame(data)?;
    let mut reader = BitReader::new(payload, bit_count);

    // Size from the clamped bit count, never the raw header value: a forged
    // header must not drive the allocation. Minimum expansion is 12 bits
    // per encoded byte.
    let mut out = Vec::with_capacity((reader.remaining() / 12 + 1) as usize);
    let mut current_code = String::new();
    let mut high_nibble: Option<u8> = None;

    while !reader.is_empty() {
        match reader.take_run(true) {
            DOT_RUN => current_code.push('.'),
            DASH_RUN => current_code.push('-'),
            _ => {}
        }

        let gap = reader.take_run(false);
        if gap >= NIBBLE_GAP || reader.is_empty() {
            if let Some(nibble) = symbols::nibble_for_code(&current_code) {
                match high_nibble.take() {
                    None => high_nibble = Some(nibble << 4),
                    Some(high) => out.push(high | nibble),
                }
            }
            current_code.clear();
        }
    }

    Ok(out)
}
