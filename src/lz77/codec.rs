use super::matcher::{Match, MatchFinder};
use super::tokens::{checked_output_len, LZ77Token};
use super::window::OutputWindow;
use crate::error::{Error, Result};
use crate::{SymbolCodec, MAX_PREALLOC};

/// Window size used when the caller does not pick one
pub const DEFAULT_WINDOW_SIZE: usize = 64;

/// Shortest back-reference worth emitting instead of a literal
pub const MIN_MATCH_LENGTH: usize = 2;

/// Rule deciding whether the longest match found is emitted
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MatchPolicy {
    /// Accept any match of at least [`MIN_MATCH_LENGTH`] symbols
    #[default]
    Greedy,
    /// Accept a match only when its length exceeds its distance
    ///
    /// Only runs and short repeating patterns become back-references;
    /// non-overlapping repeats (`length <= distance`) fall back to literals.
    RequireOverlap,
}

impl MatchPolicy {
    pub fn accepts(&self, m: &Match) -> bool {
        match self {
            MatchPolicy::Greedy => m.length >= MIN_MATCH_LENGTH,
            MatchPolicy::RequireOverlap => m.length > m.distance,
        }
    }
}

/// Sliding-window dictionary codec
#[derive(Clone, Copy, Debug)]
pub struct WindowCodec {
    window_size: usize,
    finder: MatchFinder,
    policy: MatchPolicy,
}

impl WindowCodec {
    /// Create a codec with the given window size (must be positive)
    pub fn new(window_size: usize) -> Result<Self> {
        if window_size == 0 {
            return Err(Error::InvalidConfig("window size must be greater than 0".to_string()));
        }
        Ok(Self { window_size, finder: MatchFinder::new(window_size), policy: MatchPolicy::Greedy })
    }

    pub fn with_policy(mut self, policy: MatchPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn window_size(&self) -> usize {
        self.window_size
    }

    pub fn policy(&self) -> MatchPolicy {
        self.policy
    }
}

impl Default for WindowCodec {
    fn default() -> Self {
        Self {
            window_size: DEFAULT_WINDOW_SIZE,
            finder: MatchFinder::new(DEFAULT_WINDOW_SIZE),
            policy: MatchPolicy::Greedy,
        }
    }
}

impl SymbolCodec for WindowCodec {
    type Encoded = Vec<LZ77Token>;

    fn compress(&self, symbols: &[u8]) -> Result<Vec<LZ77Token>> {
        let mut tokens = Vec::new();
        let mut pos = 0;

        while pos < symbols.len() {
            match self.finder.find_longest(symbols, pos).filter(|m| self.policy.accepts(m)) {
                Some(Match { distance, length }) => {
                    tokens.push(LZ77Token::Copy { distance, length });
                    pos += length;
                }
                None => {
                    tokens.push(LZ77Token::Literal(symbols[pos]));
                    pos += 1;
                }
            }
        }

        tracing::debug!(
            window_size = self.window_size,
            policy = ?self.policy,
            symbols = symbols.len(),
            tokens = tokens.len(),
            "lz77 compressed"
        );
        Ok(tokens)
    }

    fn decompress(&self, tokens: &Vec<LZ77Token>) -> Result<Vec<u8>> {
        let total = checked_output_len(tokens)?;
        let mut window = OutputWindow::with_capacity(total.min(MAX_PREALLOC));

        for token in tokens {
            match *token {
                LZ77Token::Literal(symbol) => window.push_symbol(symbol),
                LZ77Token::Copy { distance, length } => window.copy_back(distance, length)?,
            }
        }

        tracing::debug!(tokens = tokens.len(), symbols = window.len(), "lz77 decompressed");
        Ok(window.into_inner())
    }
}
