use super::code::CodeTable;
use crate::bits::BitWriter;
use crate::error::{Error, Result};

/// Pack `symbols` with `table` into a padded byte stream
///
/// Layout: one header byte holding the number of zero bits appended at the
/// end (0-7), then the concatenated codes, then the padding. Empty input
/// produces an empty stream with no header.
pub fn pack_symbols(symbols: &[u8], table: &CodeTable) -> Result<Vec<u8>> {
    if symbols.is_empty() {
        return Ok(Vec::new());
    }

    let lookup = table.to_lookup();
    let mut writer = BitWriter::with_capacity(symbols.len() / 2 + 2);

    // Placeholder for the padding count, patched once the length is known
    writer.write_byte(0);

    for &symbol in symbols {
        let code = lookup[symbol as usize].ok_or_else(|| {
            Error::InvalidCodeTable(format!("no code for symbol {symbol}"))
        })?;
        writer.write_bits(code.bits(), code.len());
    }

    let padding = writer.padding_bits();
    let mut bytes = writer.finish();
    bytes[0] = padding;
    Ok(bytes)
}
