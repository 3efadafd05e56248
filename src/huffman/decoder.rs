use std::collections::HashMap;

use super::code::{Code, CodeTable};
use crate::bits::BitReader;
use crate::error::{Error, Result};

/// Greedy prefix-code decoder built from a validated [`CodeTable`]
pub struct HuffmanDecoder {
    /// Code -> symbol
    symbols: HashMap<Code, u8>,
    /// Longest code in the table; longer accumulators can never match
    max_bits: u8,
}

impl HuffmanDecoder {
    /// Build from a code table, rejecting tables that are not prefix-free
    pub fn from_table(table: &CodeTable) -> Result<Self> {
        Ok(Self { symbols: table.to_reverse_map()?, max_bits: table.max_code_length() })
    }

    /// Decode next symbol from bitstream
    pub fn decode(&self, bits: &mut BitReader<'_>) -> Result<u8> {
        let mut code = Code::EMPTY;
        while code.len() < self.max_bits {
            if bits.is_exhausted() {
                break;
            }
            // push_bit cannot overflow below max_bits
            code = code.push_bit(bits.read_bit()?).unwrap_or(code);
            if let Some(&symbol) = self.symbols.get(&code) {
                return Ok(symbol);
            }
        }

        // Either the stream ran out mid-code or no code of any length matched
        Err(Error::UnterminatedCode { bits: code.len() as usize })
    }

    /// Unpack a padded stream produced by [`pack_symbols`](super::encoder::pack_symbols)
    pub fn unpack(&self, bytes: &[u8]) -> Result<Vec<u8>> {
        if bytes.is_empty() {
            return Ok(Vec::new());
        }

        let mut bits = BitReader::new(bytes);
        let padding = bits.read_byte()?;
        if padding > 7 {
            return Err(Error::CorruptHeader(padding));
        }
        bits.truncate_tail(padding as usize).map_err(|_| Error::CorruptHeader(padding))?;

        let mut output = Vec::with_capacity(bits.bits_remaining());
        while !bits.is_exhausted() {
            output.push(self.decode(&mut bits)?);
        }
        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn decoder(entries: &[(u8, &str)]) -> HuffmanDecoder {
        let table: CodeTable =
            entries.iter().map(|&(s, c)| (s, c.parse::<Code>().unwrap())).collect();
        HuffmanDecoder::from_table(&table).unwrap()
    }

    #[test]
    fn test_simple_decode() {
        let d = decoder(&[(1, "0"), (2, "10"), (3, "11")]);
        assert_eq!(d.unpack(&[2, 0b0101_1000]).unwrap(), vec![1, 2, 3, 1]);
    }

    #[test]
    fn test_header_only() {
        let d = decoder(&[(1, "0")]);
        assert!(d.unpack(&[0]).unwrap().is_empty());
    }

    #[test]
    fn test_unterminated_tail() {
        // "1" is only the start of "10" / "11"
        let d = decoder(&[(1, "0"), (2, "10"), (3, "11")]);
        let err = d.unpack(&[7, 0b1000_0000]).unwrap_err();
        assert!(matches!(err, Error::UnterminatedCode { bits: 1 }));
    }

    #[test]
    fn test_incomplete_code_never_matches() {
        // "11" is not assigned, so reading it can never terminate
        let d = decoder(&[(1, "0"), (2, "10")]);
        let err = d.unpack(&[0, 0b1100_0000]).unwrap_err();
        assert!(matches!(err, Error::UnterminatedCode { bits: 2 }));
    }

    #[test]
    fn test_empty_table_with_data() {
        let d = HuffmanDecoder::from_table(&CodeTable::new()).unwrap();
        assert!(matches!(d.unpack(&[0, 0xFF]), Err(Error::UnterminatedCode { .. })));
        assert!(d.unpack(&[]).unwrap().is_empty());
    }

    #[test]
    fn test_corrupt_header() {
        let d = decoder(&[(1, "0")]);
        assert!(matches!(d.unpack(&[8, 0]), Err(Error::CorruptHeader(8))));
        // Padding longer than the data bits
        assert!(matches!(d.unpack(&[3]), Err(Error::CorruptHeader(3))));
    }

    #[test]
    fn test_rejects_non_prefix_free() {
        let table: CodeTable =
            [(1u8, "0"), (2, "01")].iter().map(|&(s, c)| (s, c.parse::<Code>().unwrap())).collect();
        assert!(matches!(HuffmanDecoder::from_table(&table), Err(Error::InvalidCodeTable(_))));
    }
}
