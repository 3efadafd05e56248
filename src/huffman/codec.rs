use serde::{Deserialize, Serialize};

use super::code::CodeTable;
use super::decoder::HuffmanDecoder;
use super::encoder::pack_symbols;
use super::tree::{build_tree, derive_codes, FrequencyTable};
use crate::error::Result;
use crate::SymbolCodec;

/// Packed entropy-coded data together with the table needed to read it
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HuffmanBlock {
    /// Padding header byte followed by the packed codes
    pub bytes: Vec<u8>,
    pub table: CodeTable,
}

impl HuffmanBlock {
    /// Number of zero bits appended after the data (None for an empty block)
    pub fn padding_bits(&self) -> Option<u8> {
        self.bytes.first().copied()
    }
}

/// Static Huffman codec; builds a fresh code for every buffer
#[derive(Clone, Copy, Debug, Default)]
pub struct HuffmanCodec;

impl HuffmanCodec {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolCodec for HuffmanCodec {
    type Encoded = HuffmanBlock;

    fn compress(&self, symbols: &[u8]) -> Result<HuffmanBlock> {
        let freqs = FrequencyTable::from_symbols(symbols);
        let Some(root) = build_tree(&freqs) else {
            return Ok(HuffmanBlock::default());
        };

        let table = derive_codes(&root)?;
        let bytes = pack_symbols(symbols, &table)?;

        tracing::debug!(
            symbols = symbols.len(),
            distinct = freqs.distinct(),
            max_code_length = table.max_code_length(),
            bytes = bytes.len(),
            "huffman compressed"
        );
        Ok(HuffmanBlock { bytes, table })
    }

    fn decompress(&self, block: &HuffmanBlock) -> Result<Vec<u8>> {
        let decoder = HuffmanDecoder::from_table(&block.table)?;
        let output = decoder.unpack(&block.bytes)?;

        tracing::debug!(bytes = block.bytes.len(), symbols = output.len(), "huffman decompressed");
        Ok(output)
    }
}
