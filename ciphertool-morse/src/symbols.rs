//! Fixed nibble ↔ dot/dash code table and bit-rendering constants.
//!
//! The table is a total bijection between the 16 nibble values and short
//! strings over {`.`, `-`}. Codes are not prefix-free; decoding relies on
//! gap widths to segment them, never on prefix structure.

/// Dot/dash code for each nibble value, indexed by nibble.
pub(crate) const NIBBLE_CODES: [&str; 16] = [
    ".", "-", "..", ".-", "-.", "--", "...", "..-", ".-.", ".--", "-..", "-.-", "--.", "---",
    "....", "...-",
];

/// Run length of `1` bits rendering a dot.
pub(crate) const DOT_RUN: u64 = 1;
/// Run length of `1` bits rendering a dash.
pub(crate) const DASH_RUN: u64 = 3;
/// Zero bits between symbols within one code.
pub(crate) const SYMBOL_GAP: u64 = 1;
/// Zero bits between the high-nibble and low-nibble groups of one byte.
pub(crate) const NIBBLE_GAP: u64 = 3;
/// Zero bits between consecutive encoded bytes.
pub(crate) const BYTE_GAP: u64 = 7;

/// Look up the dot/dash code for a nibble value (0x0-0xF).
#[inline]
pub(crate) fn code_for_nibble(nibble: u8) -> &'static str {
    NIBBLE_CODES[(nibble & 0x0F) as usize]
}

/// Inverse lookup: dot/dash code back to its nibble value.
///
/// Returns `None` for anything outside the table, including the empty
/// string; the decoder drops such codes rather than failing.
#[inline]
pub(crate) fn nibble_for_code(code: &str) -> Option<u8> {
    NIBBLE_CODES
        .iter()
        .position(|&c| c == code)
        .map(|index| index as u8)
}

/// Logical bit length of one nibble's rendered code.
pub(crate) fn code_bit_len(nibble: u8) -> u64 {
    let code = code_for_nibble(nibble);
    let symbols = code.len() as u64;
    let dashes = code.bytes().filter(|&b| b == b'-').count() as u64;
    let dots = symbols - dashes;
    dots * DOT_RUN + dashes * DASH_RUN + (symbols - 1) * SYMBOL_GAP
}
