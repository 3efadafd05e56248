use crate::error::{Error, Result};

/// Bit-level reader over an in-memory packed stream
///
/// Mirrors [`BitWriter`](super::BitWriter): bits are read MSB-first within
/// each byte. A bit limit lets callers stop before trailing padding.
pub struct BitReader<'a> {
    data: &'a [u8],
    /// Next bit to read, counted from the start of `data`
    position: usize,
    /// One past the last readable bit
    limit: usize,
}

impl<'a> BitReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, position: 0, limit: data.len() * 8 }
    }

    /// Stop reading `bits` before the physical end of the data
    pub fn truncate_tail(&mut self, bits: usize) -> Result<()> {
        if bits > self.limit - self.position {
            return Err(Error::UnexpectedEof);
        }
        self.limit -= bits;
        Ok(())
    }

    /// Read a single bit
    #[inline]
    pub fn read_bit(&mut self) -> Result<bool> {
        if self.position >= self.limit {
            return Err(Error::UnexpectedEof);
        }
        let byte = self.data[self.position / 8];
        let bit = (byte >> (7 - self.position % 8)) & 1 == 1;
        self.position += 1;
        Ok(bit)
    }

    /// Read `n` bits (0-64), most significant first
    pub fn read_bits(&mut self, n: u8) -> Result<u64> {
        debug_assert!(n <= 64, "Cannot read more than 64 bits at once");

        if n as usize > self.bits_remaining() {
            return Err(Error::UnexpectedEof);
        }

        let mut value = 0u64;
        for _ in 0..n {
            value = (value << 1) | self.read_bit()? as u64;
        }
        Ok(value)
    }

    /// Read a complete byte
    pub fn read_byte(&mut self) -> Result<u8> {
        self.read_bits(8).map(|v| v as u8)
    }

    /// Bits left before the limit
    pub fn bits_remaining(&self) -> usize {
        self.limit - self.position
    }

    pub fn is_exhausted(&self) -> bool {
        self.position >= self.limit
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_bits() {
        let data = vec![0b1101_0011, 0xAA];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.read_bits(3).unwrap(), 0b110);
        assert_eq!(reader.read_bits(5).unwrap(), 0b10011);
        assert_eq!(reader.read_bits(8).unwrap(), 0xAA);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_read_bit() {
        let data = vec![0b1011_0001];
        let mut reader = BitReader::new(&data);

        // MSB first
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(!reader.read_bit().unwrap());
        assert!(reader.read_bit().unwrap());
        assert!(matches!(reader.read_bit(), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_truncate_tail() {
        let data = vec![0x03, 0b1010_0000];
        let mut reader = BitReader::new(&data);

        assert_eq!(reader.read_byte().unwrap(), 3);
        reader.truncate_tail(5).unwrap();
        assert_eq!(reader.bits_remaining(), 3);
        assert_eq!(reader.read_bits(3).unwrap(), 0b101);
        assert!(reader.is_exhausted());
    }

    #[test]
    fn test_truncate_past_position() {
        let data = vec![0xFF];
        let mut reader = BitReader::new(&data);
        reader.read_bits(4).unwrap();
        assert!(matches!(reader.truncate_tail(5), Err(Error::UnexpectedEof)));
    }

    #[test]
    fn test_cross_byte_boundary() {
        let data = vec![0xFF, 0x00];
        let mut reader = BitReader::new(&data);
        assert_eq!(reader.read_bits(12).unwrap(), 0xFF0);
    }
}
