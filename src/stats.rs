use crate::lz77::LZ77Token;
use crate::registry::EncodedBlock;
use crate::rle::RunToken;

/// Rough size of one token when stored: symbol or count/distance fields
const TOKEN_FIELD_BYTES: usize = 1;
const TOKEN_REFERENCE_BYTES: usize = 4;

/// Statistics from one compression call
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CompressionStats {
    pub input_symbols: u64,
    /// Tokens for rle/lz77, packed bytes for huffman
    pub encoded_units: u64,
    /// Approximate serialized size of the block, including the code table
    pub encoded_bytes_estimate: u64,
}

impl CompressionStats {
    pub fn from_block(input_symbols: usize, block: &EncodedBlock) -> Self {
        let (units, bytes) = match block {
            EncodedBlock::Rle(tokens) => {
                let bytes: usize = tokens
                    .iter()
                    .map(|t| match t {
                        RunToken::Literal(_) => TOKEN_FIELD_BYTES,
                        RunToken::Run { .. } => TOKEN_FIELD_BYTES + TOKEN_REFERENCE_BYTES,
                    })
                    .sum();
                (tokens.len(), bytes)
            }
            EncodedBlock::Lz77(tokens) => {
                let bytes: usize = tokens
                    .iter()
                    .map(|t| match t {
                        LZ77Token::Literal(_) => TOKEN_FIELD_BYTES,
                        LZ77Token::Copy { .. } => 2 * TOKEN_REFERENCE_BYTES,
                    })
                    .sum();
                (tokens.len(), bytes)
            }
            EncodedBlock::Huffman(block) => {
                // One symbol byte, one length byte and the code bits per entry
                let table: usize =
                    block.table.iter().map(|(_, code)| 2 + (code.len() as usize + 7) / 8).sum();
                (block.bytes.len(), block.bytes.len() + table)
            }
        };

        Self {
            input_symbols: input_symbols as u64,
            encoded_units: units as u64,
            encoded_bytes_estimate: bytes as u64,
        }
    }

    /// Estimated encoded size divided by input size (0 for empty input)
    pub fn ratio(&self) -> f64 {
        if self.input_symbols == 0 {
            return 0.0;
        }
        self.encoded_bytes_estimate as f64 / self.input_symbols as f64
    }
}
