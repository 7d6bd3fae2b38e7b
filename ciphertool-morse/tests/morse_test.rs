//! Morse framing codec integration tests.

use ciphertool_morse::{HEADER_LEN, MorseError, decode, encode, encoded_bit_len};

/// Reproducible pseudo-random buffer (no RNG dependency needed here).
fn random_buffer(size: usize) -> Vec<u8> {
    let mut data = Vec::with_capacity(size);
    let mut seed: u64 = 0x9E37_79B9_7F4A_7C15;
    for _ in 0..size {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        data.push((seed >> 33) as u8);
    }
    data
}

#[test]
fn test_roundtrip_empty() {
    let framed = encode(b"");
    assert_eq!(framed.len(), HEADER_LEN);
    assert_eq!(&framed[..8], &[0u8; 8]);
    assert_eq!(decode(&framed).expect("decode failed"), b"");
}

#[test]
fn test_roundtrip_single_bytes() {
    for byte in 0..=255u8 {
        let framed = encode(&[byte]);
        let recovered = decode(&framed).expect("decode failed");
        assert_eq!(recovered, vec![byte], "byte {byte:#04x}");
    }
}

#[test]
fn test_roundtrip_all_byte_values() {
    let original: Vec<u8> = (0..=255).collect();
    let framed = encode(&original);
    assert_eq!(decode(&framed).expect("decode failed"), original);
}

#[test]
fn test_roundtrip_text() {
    let original = b"Hello, World! This text goes through the binary Morse frame.";
    assert_eq!(decode(&encode(original)).expect("decode failed"), original);
}

#[test]
fn test_roundtrip_large_random() {
    let original = random_buffer(64 * 1024);
    let framed = encode(&original);
    assert_eq!(decode(&framed).expect("decode failed"), original);
}

#[test]
fn test_header_exactness() {
    for input in [&b""[..], b"\x00", b"\xFF\xFF", b"header exactness"] {
        let framed = encode(input);
        let header = u64::from_le_bytes(framed[..8].try_into().unwrap());
        assert_eq!(header, encoded_bit_len(input));
    }
}

#[test]
fn test_output_length_formula() {
    for size in [0, 1, 2, 7, 8, 255, 1000] {
        let input = random_buffer(size);
        let framed = encode(&input);
        let bits = encoded_bit_len(&input);
        assert_eq!(
            framed.len() as u64,
            HEADER_LEN as u64 + bits.div_ceil(8),
            "size {size}"
        );
    }
}

#[test]
fn test_truncated_header_fails() {
    for len in 0..HEADER_LEN {
        let buffer = vec![0xFFu8; len];
        assert_eq!(
            decode(&buffer),
            Err(MorseError::TruncatedHeader { actual: len })
        );
    }
}

#[test]
fn test_known_vector_zero_byte() {
    // 0x00 splits into two "." codes: 1 + 000 + 1 = 5 bits, packed as
    // 1000_1000 after the header.
    let framed = encode(&[0x00]);
    assert_eq!(framed.len(), HEADER_LEN + 1);
    assert_eq!(u64::from_le_bytes(framed[..8].try_into().unwrap()), 5);
    assert_eq!(framed[8], 0b1000_1000);
    assert_eq!(decode(&framed).expect("decode failed"), vec![0x00]);
}

#[test]
fn test_known_vector_ff_ff() {
    // 0xF is "...-": (1+1+1+3) one-bits + 3 symbol gaps = 9 bits per
    // nibble, 21 per byte, joined by a 7-bit gap.
    let original = [0xFF, 0xFF];
    assert_eq!(encoded_bit_len(&original), 49);

    let framed = encode(&original);
    assert_eq!(u64::from_le_bytes(framed[..8].try_into().unwrap()), 49);
    assert_eq!(decode(&framed).expect("decode failed"), original);
}

#[test]
fn test_forged_header_does_not_drive_allocation() {
    // A header claiming u64::MAX bits over a 1-byte payload must decode
    // from the bits actually present, not reserve for the claimed count.
    let mut framed = u64::MAX.to_le_bytes().to_vec();
    framed.push(0b1000_1000);
    assert_eq!(decode(&framed).expect("decode failed"), vec![0x00]);
}

#[test]
fn test_expansion_ratio_is_bounded() {
    // Per encoded byte: minimum 5 bits (0x00) plus 7-bit gap, maximum 21
    // bits plus gap, so the frame stays within 12-28 bits per input byte.
    let input = random_buffer(4096);
    let bits = encoded_bit_len(&input);
    assert!(bits >= input.len() as u64 * 5);
    assert!(bits <= input.len() as u64 * 28);
}
