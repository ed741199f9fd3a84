//! Forward-only bit cursors over error-corrected payload data

/// Capability the segment decoder needs from its bit source.
///
/// Reads are MSB first and strictly forward; there is no seeking back.
pub trait BitCursor {
    /// Whether at least `n` bits remain from the current offset
    fn has_bits(&self, n: usize) -> bool;

    /// Consume the next `n` bits (at most 32) as an unsigned integer
    fn read_bits(&mut self, n: usize) -> u32;
}

/// Cursor over one bool per bit, as produced by matrix extraction.
///
/// Reading past the end yields the remaining bits followed by zero
/// padding and leaves the cursor exhausted.
pub struct BitReader<'a> {
    bits: &'a [bool],
    idx: usize,
}

impl<'a> BitReader<'a> {
    /// Create a reader positioned at the first bit
    pub fn new(bits: &'a [bool]) -> Self {
        Self { bits, idx: 0 }
    }

    /// Bits left to read
    pub fn remaining(&self) -> usize {
        self.bits.len().saturating_sub(self.idx)
    }

    /// Bits consumed so far
    pub fn position(&self) -> usize {
        self.idx
    }
}

impl BitCursor for BitReader<'_> {
    fn has_bits(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    fn read_bits(&mut self, n: usize) -> u32 {
        debug_assert!(n <= 32, "cannot read {n} bits into a u32");
        let mut val = 0u32;
        for _ in 0..n {
            let bit = self.bits.get(self.idx).copied().unwrap_or(false);
            val = (val << 1) | (bit as u32);
            self.idx = (self.idx + 1).min(self.bits.len());
        }
        val
    }
}

/// Cursor over packed codeword bytes (MSB first within each byte).
///
/// Same starvation policy as [`BitReader`]: missing bits read as zero.
pub struct CodewordReader<'a> {
    data: &'a [u8],
    bit_pos: usize,
}

impl<'a> CodewordReader<'a> {
    /// Create a reader at the MSB of the first codeword
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, bit_pos: 0 }
    }

    fn len_bits(&self) -> usize {
        self.data.len() * 8
    }

    pub fn remaining(&self) -> usize {
        self.len_bits().saturating_sub(self.bit_pos)
    }

    pub fn position(&self) -> usize {
        self.bit_pos
    }
}

impl BitCursor for CodewordReader<'_> {
    fn has_bits(&self, n: usize) -> bool {
        self.remaining() >= n
    }

    fn read_bits(&mut self, n: usize) -> u32 {
        debug_assert!(n <= 32, "cannot read {n} bits into a u32");
        let mut val = 0u32;
        for _ in 0..n {
            let bit = match self.data.get(self.bit_pos / 8) {
                Some(byte) => (byte >> (7 - (self.bit_pos % 8))) & 1,
                None => 0,
            };
            val = (val << 1) | bit as u32;
            self.bit_pos = (self.bit_pos + 1).min(self.len_bits());
        }
        val
    }
}

/// Pack bits into codewords, MSB first. A trailing partial byte is dropped.
pub fn bits_to_codewords(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|chunk| chunk.iter().fold(0u8, |byte, &b| (byte << 1) | b as u8))
        .collect()
}

/// Unpack codewords into one bool per bit, MSB first
pub fn codewords_to_bits(codewords: &[u8]) -> Vec<bool> {
    let mut bits = Vec::with_capacity(codewords.len() * 8);
    for &byte in codewords {
        for i in (0..8).rev() {
            bits.push(((byte >> i) & 1) != 0);
        }
    }
    bits
}
