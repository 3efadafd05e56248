//! Name-based codec lookup and the codec-agnostic encoded block.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::huffman::{HuffmanBlock, HuffmanCodec};
use crate::lz77::{LZ77Token, MatchPolicy, WindowCodec, DEFAULT_WINDOW_SIZE};
use crate::rle::{RleCodec, RunToken};
use crate::SymbolCodec;

/// The available codecs
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CodecKind {
    Rle,
    Lz77,
    Huffman,
}

impl CodecKind {
    /// Registry name of this codec
    pub fn name(&self) -> &'static str {
        match self {
            CodecKind::Rle => "rle",
            CodecKind::Lz77 => "lz77",
            CodecKind::Huffman => "huffman",
        }
    }

    pub fn all() -> &'static [CodecKind] {
        &[CodecKind::Rle, CodecKind::Lz77, CodecKind::Huffman]
    }
}

impl fmt::Display for CodecKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CodecKind {
    type Err = Error;

    /// Case-insensitive lookup by name
    fn from_str(name: &str) -> Result<Self> {
        CodecKind::all()
            .iter()
            .copied()
            .find(|kind| kind.name().eq_ignore_ascii_case(name.trim()))
            .ok_or_else(|| Error::UnknownCodec(name.to_string()))
    }
}

/// Codec-specific settings supplied alongside a codec name
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CodecConfig {
    /// Window size for `lz77`; must be unset for every other codec
    pub window_size: Option<usize>,
    /// Match acceptance rule for `lz77` (greedy when unset); same restriction
    pub match_policy: Option<MatchPolicy>,
}

impl CodecConfig {
    pub fn with_window_size(window_size: usize) -> Self {
        Self { window_size: Some(window_size), ..Default::default() }
    }

    pub fn with_match_policy(mut self, policy: MatchPolicy) -> Self {
        self.match_policy = Some(policy);
        self
    }

    /// Convert a window size read from a signed source such as a CLI flag
    pub fn window_size_from_signed(window_size: i64) -> Result<usize> {
        usize::try_from(window_size).map_err(|_| {
            Error::InvalidConfig(format!("window size must be positive, got {window_size}"))
        })
    }
}

/// A configured codec instance
#[derive(Clone, Copy, Debug)]
pub enum Codec {
    Rle(RleCodec),
    Lz77(WindowCodec),
    Huffman(HuffmanCodec),
}

impl Codec {
    /// Resolve `name` and validate `config` against it
    pub fn from_name(name: &str, config: &CodecConfig) -> Result<Self> {
        Self::new(name.parse()?, config)
    }

    pub fn new(kind: CodecKind, config: &CodecConfig) -> Result<Self> {
        match (kind, config.window_size, config.match_policy) {
            (CodecKind::Lz77, window_size, policy) => Ok(Codec::Lz77(
                WindowCodec::new(window_size.unwrap_or(DEFAULT_WINDOW_SIZE))?
                    .with_policy(policy.unwrap_or_default()),
            )),
            (_, Some(window_size), _) => Err(Error::InvalidConfig(format!(
                "window size {window_size} given, but {kind} does not take a window size"
            ))),
            (_, _, Some(policy)) => Err(Error::InvalidConfig(format!(
                "match policy {policy:?} given, but {kind} does not take a match policy"
            ))),
            (CodecKind::Rle, None, None) => Ok(Codec::Rle(RleCodec::new())),
            (CodecKind::Huffman, None, None) => Ok(Codec::Huffman(HuffmanCodec::new())),
        }
    }

    pub fn kind(&self) -> CodecKind {
        match self {
            Codec::Rle(_) => CodecKind::Rle,
            Codec::Lz77(_) => CodecKind::Lz77,
            Codec::Huffman(_) => CodecKind::Huffman,
        }
    }

    pub fn compress(&self, symbols: &[u8]) -> Result<EncodedBlock> {
        Ok(match self {
            Codec::Rle(codec) => EncodedBlock::Rle(codec.compress(symbols)?),
            Codec::Lz77(codec) => EncodedBlock::Lz77(codec.compress(symbols)?),
            Codec::Huffman(codec) => EncodedBlock::Huffman(codec.compress(symbols)?),
        })
    }

    pub fn decompress(&self, block: &EncodedBlock) -> Result<Vec<u8>> {
        match (self, block) {
            (Codec::Rle(codec), EncodedBlock::Rle(tokens)) => codec.decompress(tokens),
            (Codec::Lz77(codec), EncodedBlock::Lz77(tokens)) => codec.decompress(tokens),
            (Codec::Huffman(codec), EncodedBlock::Huffman(block)) => codec.decompress(block),
            (codec, block) => {
                let (expected, found) = (codec.kind().name(), block.kind().name());
                Err(Error::CodecMismatch { expected, found })
            }
        }
    }
}

/// Output of any codec
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "codec", content = "data", rename_all = "lowercase")]
pub enum EncodedBlock {
    Rle(Vec<RunToken>),
    Lz77(Vec<LZ77Token>),
    Huffman(HuffmanBlock),
}

impl EncodedBlock {
    /// Which codec produced this block
    pub fn kind(&self) -> CodecKind {
        match self {
            EncodedBlock::Rle(_) => CodecKind::Rle,
            EncodedBlock::Lz77(_) => CodecKind::Lz77,
            EncodedBlock::Huffman(_) => CodecKind::Huffman,
        }
    }
}

/// Compress `symbols` with the codec registered under `name`
pub fn compress(name: &str, symbols: &[u8], config: &CodecConfig) -> Result<EncodedBlock> {
    Codec::from_name(name, config)?.compress(symbols)
}

/// Reconstruct the symbols in `block` with the codec registered under `name`
pub fn decompress(name: &str, block: &EncodedBlock, config: &CodecConfig) -> Result<Vec<u8>> {
    Codec::from_name(name, config)?.decompress(block)
}
