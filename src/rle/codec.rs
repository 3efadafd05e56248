use super::tokens::{checked_output_len, RunToken};
use crate::error::Result;
use crate::{SymbolCodec, MAX_PREALLOC};

/// Run-length codec: collapses maximal runs of equal symbols
#[derive(Clone, Copy, Debug, Default)]
pub struct RleCodec;

impl RleCodec {
    pub fn new() -> Self {
        Self
    }
}

impl SymbolCodec for RleCodec {
    type Encoded = Vec<RunToken>;

    fn compress(&self, symbols: &[u8]) -> Result<Vec<RunToken>> {
        let mut tokens = Vec::new();
        let mut i = 0;

        while i < symbols.len() {
            let symbol = symbols[i];
            let run = symbols[i..].iter().take_while(|&&s| s == symbol).count();
            tokens.push(RunToken::for_run(symbol, run));
            i += run;
        }

        tracing::debug!(symbols = symbols.len(), tokens = tokens.len(), "rle compressed");
        Ok(tokens)
    }

    fn decompress(&self, tokens: &Vec<RunToken>) -> Result<Vec<u8>> {
        let total = checked_output_len(tokens)?;
        let mut output = Vec::with_capacity(total.min(MAX_PREALLOC));

        for token in tokens {
            match *token {
                RunToken::Literal(symbol) => output.push(symbol),
                RunToken::Run { symbol, count } => {
                    output.resize(output.len() + count, symbol);
                }
            }
        }

        tracing::debug!(tokens = tokens.len(), symbols = output.len(), "rle decompressed");
        Ok(output)
    }
}
