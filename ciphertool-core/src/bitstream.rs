//! MSB-first bit stream operations.
//!
//! The framed Morse format packs a logical bit pattern into bytes from the
//! most significant bit down, with the final byte zero-padded. These types
//! work one bit at a time because the pattern has no fixed code width: run
//! lengths of ones and zeroes carry the structure.

/// MSB-first bit writer accumulating into an owned byte buffer.
///
/// Tracks the exact number of logical bits pushed, independent of the
/// zero padding added to the final partial byte on flush.
#[derive(Debug, Default)]
pub struct BitWriter {
    /// Completed output bytes.
    output: Vec<u8>,
    /// Partial byte being filled (from MSB).
    buffer: u8,
    /// Number of valid bits in `buffer`.
    bits_in_buffer: u8,
    /// Total logical bits pushed.
    total_bits: u64,
}

impl BitWriter {
    /// Create a new empty bit writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a bit writer with a pre-sized output buffer.
    pub fn with_capacity(bytes: usize) -> Self {
        Self {
            output: Vec::with_capacity(bytes),
            ..Self::default()
        }
    }

    /// Push a single bit.
    pub fn push_bit(&mut self, bit: bool) {
        self.buffer = (self.buffer << 1) | u8::from(bit);
        self.bits_in_buffer += 1;
        self.total_bits += 1;

        if self.bits_in_buffer == 8 {
            self.output.push(self.buffer);
            self.buffer = 0;
            self.bits_in_buffer = 0;
        }
    }

    /// Push `count` copies of the same bit.
    pub fn push_run(&mut self, bit: bool, count: u64) {
        for _ in 0..count {
            self.push_bit(bit);
        }
    }

    /// Number of logical bits pushed so far (padding excluded).
    pub fn bits_written(&self) -> u64 {
        self.total_bits
    }

    /// Consume the writer, left-aligning and zero-filling any partial
    /// final byte.
    pub fn into_bytes(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.buffer <<= 8 - self.bits_in_buffer;
            self.output.push(self.buffer);
        }
        self.output
    }
}

/// MSB-first bit reader over a byte slice, bounded by a logical bit length.
///
/// The logical length may cut mid-byte; bits past it are padding and are
/// never yielded. A length larger than the slice provides is clamped to
/// what is actually available.
#[derive(Debug)]
pub struct BitReader<'a> {
    /// Input data.
    data: &'a [u8],
    /// Index of the next bit to yield.
    pos: u64,
    /// Logical bit length (clamped to `data.len() * 8`).
    bit_len: u64,
}

impl<'a> BitReader<'a> {
    /// Create a reader over `data` yielding at most `bit_len` bits.
    pub fn new(data: &'a [u8], bit_len: u64) -> Self {
        let available = data.len() as u64 * 8;
        Self {
            data,
            pos: 0,
            bit_len: bit_len.min(available),
        }
    }

    /// Look at the next bit without consuming it.
    pub fn peek_bit(&self) -> Option<bool> {
        if self.pos >= self.bit_len {
            return None;
        }
        let byte = self.data[(self.pos / 8) as usize];
        let shift = 7 - (self.pos % 8) as u8;
        Some((byte >> shift) & 1 == 1)
    }

    /// Consume and return the next bit.
    pub fn next_bit(&mut self) -> Option<bool> {
        let bit = self.peek_bit()?;
        self.pos += 1;
        Some(bit)
    }

    /// Consume a maximal run of bits equal to `bit`, returning its length.
    pub fn take_run(&mut self, bit: bool) -> u64 {
        let mut count = 0;
        while self.peek_bit() == Some(bit) {
            self.pos += 1;
            count += 1;
        }
        count
    }

    /// Number of bits left to read.
    pub fn remaining(&self) -> u64 {
        self.bit_len - self.pos
    }

    /// True once every logical bit has been consumed.
    pub fn is_empty(&self) -> bool {
        self.pos >= self.bit_len
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writer_pads_final_byte() {
        let mut writer = BitWriter::new();
        writer.push_bit(true);
        writer.push_run(false, 3);
        writer.push_bit(true);

        assert_eq!(writer.bits_written(), 5);
        assert_eq!(writer.into_bytes(), vec![0b1000_1000]);
    }

    #[test]
    fn test_writer_exact_byte_boundary() {
        let mut writer = BitWriter::new();
        for bit in [true, false, true, false, true, false, true, true] {
            writer.push_bit(bit);
        }
        assert_eq!(writer.bits_written(), 8);
        assert_eq!(writer.into_bytes(), vec![0xAB]);
    }

    #[test]
    fn test_reader_respects_bit_len() {
        // 0x88 = 1000_1000, logical length 5 drops the padding bits
        let data = [0x88];
        let mut reader = BitReader::new(&data, 5);

        assert_eq!(reader.next_bit(), Some(true));
        assert_eq!(reader.take_run(false), 3);
        assert_eq!(reader.next_bit(), Some(true));
        assert_eq!(reader.next_bit(), None);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_reader_clamps_oversized_len() {
        let data = [0xFF];
        let mut reader = BitReader::new(&data, 1000);
        assert_eq!(reader.remaining(), 8);
        assert_eq!(reader.take_run(true), 8);
        assert!(reader.is_empty());
    }

    #[test]
    fn test_roundtrip_through_writer_and_reader() {
        let pattern = [true, true, true, false, true, false, false, false, true];

        let mut writer = BitWriter::new();
        for &bit in &pattern {
            writer.push_bit(bit);
        }
        let bits = writer.bits_written();
        let bytes = writer.into_bytes();

        let mut reader = BitReader::new(&bytes, bits);
        for &bit in &pattern {
            assert_eq!(reader.next_bit(), Some(bit));
        }
        assert_eq!(reader.next_bit(), None);
    }
}
