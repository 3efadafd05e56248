use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A single token in a run-length stream
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunToken {
    /// A symbol that is not repeated
    Literal(u8),
    /// `count` consecutive copies of `symbol` (always at least 2)
    Run { symbol: u8, count: usize },
}

impl RunToken {
    /// Build the token for a maximal run; single symbols become literals
    pub fn for_run(symbol: u8, count: usize) -> Self {
        debug_assert!(count >= 1);
        if count == 1 {
            RunToken::Literal(symbol)
        } else {
            RunToken::Run { symbol, count }
        }
    }

    /// Returns the uncompressed size this token represents
    pub fn uncompressed_size(&self) -> usize {
        match self {
            RunToken::Literal(_) => 1,
            RunToken::Run { count, .. } => *count,
        }
    }

    /// Reject runs that a well-formed stream can never contain
    pub fn validate(&self) -> Result<()> {
        match *self {
            RunToken::Run { symbol, count } if count < 2 => Err(Error::MalformedToken(format!(
                "run of symbol {symbol} has count {count} (minimum 2)"
            ))),
            _ => Ok(()),
        }
    }
}

/// Validate every token and return the decoded length of the stream
///
/// Fails on the first malformed run, or when the total does not fit in `usize`.
pub fn checked_output_len(tokens: &[RunToken]) -> Result<usize> {
    tokens.iter().try_fold(0usize, |len, token| {
        token.validate()?;
        len.checked_add(token.uncompressed_size())
            .ok_or_else(|| Error::MalformedToken("decoded length overflows usize".to_string()))
    })
}
