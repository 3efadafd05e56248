/// Bit-level writer for packed entropy output
///
/// Writes bits MSB-first: the first bit written lands in the highest bit of
/// the first byte, so the packed stream reads left to right like the code
/// strings it was built from.
pub struct BitWriter {
    /// Accumulated output bytes
    output: Vec<u8>,
    /// Current byte being built
    current_byte: u8,
    /// Bits written to current byte (0-7)
    bits_in_byte: u8,
}

impl BitWriter {
    pub fn new() -> Self {
        Self { output: Vec::with_capacity(4096), current_byte: 0, bits_in_byte: 0 }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { output: Vec::with_capacity(capacity), current_byte: 0, bits_in_byte: 0 }
    }

    /// Write the low `n` bits (0-64) of `value`, most significant first
    pub fn write_bits(&mut self, value: u64, n: u8) {
        debug_assert!(n <= 64);

        for shift in (0..n).rev() {
            self.write_bit((value >> shift) & 1 == 1);
        }
    }

    /// Write a single bit
    #[inline]
    pub fn write_bit(&mut self, bit: bool) {
        self.current_byte = (self.current_byte << 1) | bit as u8;
        self.bits_in_byte += 1;

        if self.bits_in_byte == 8 {
            self.output.push(self.current_byte);
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Write a raw byte
    pub fn write_byte(&mut self, byte: u8) {
        if self.bits_in_byte == 0 {
            self.output.push(byte);
        } else {
            // Not aligned, write through bits
            self.write_bits(byte as u64, 8);
        }
    }

    /// Number of zero bits `finish` will append to reach a byte boundary (0-7)
    pub fn padding_bits(&self) -> u8 {
        (8 - self.bits_in_byte) % 8
    }

    /// Pad to byte boundary with zero bits
    pub fn align_to_byte(&mut self) {
        if self.bits_in_byte > 0 {
            self.output.push(self.current_byte << (8 - self.bits_in_byte));
            self.current_byte = 0;
            self.bits_in_byte = 0;
        }
    }

    /// Finish and return the output bytes
    pub fn finish(mut self) -> Vec<u8> {
        self.align_to_byte();
        self.output
    }

    /// Total bits written so far
    pub fn bit_len(&self) -> usize {
        self.output.len() * 8 + self.bits_in_byte as usize
    }

    /// Check if empty
    pub fn is_empty(&self) -> bool {
        self.output.is_empty() && self.bits_in_byte == 0
    }
}

impl Default for BitWriter {
    fn default() -> Self {
        Self::new()
    }
}
