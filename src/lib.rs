//! Reversible codecs for flat sequences of 8-bit symbols.
//!
//! Three interchangeable codecs operate on one in-memory buffer per call:
//! - [`RleCodec`]: maximal runs of equal symbols become run tokens
//! - [`WindowCodec`]: LZ77-style back-references into a bounded window
//! - [`HuffmanCodec`]: a static prefix code packed into bytes
//!
//! Callers usually go through the name-based [`compress`] / [`decompress`]
//! pair, which returns a serializable [`EncodedBlock`].

pub mod batch;
pub mod bits;
pub mod error;
pub mod huffman;
pub mod lz77;
pub mod registry;
pub mod rle;
pub mod stats;

pub use batch::{compress_channels, decompress_channels, BatchConfig};
pub use error::{Error, Result};
pub use huffman::{Code, CodeTable, HuffmanBlock, HuffmanCodec};
pub use lz77::{LZ77Token, MatchPolicy, WindowCodec, DEFAULT_WINDOW_SIZE};
pub use registry::{compress, decompress, Codec, CodecConfig, CodecKind, EncodedBlock};
pub use rle::{RleCodec, RunToken};
pub use stats::CompressionStats;

/// Most symbols a decoder reserves up front; longer outputs grow as they decode
pub(crate) const MAX_PREALLOC: usize = 1 << 20;

/// A reversible transformation of a complete symbol buffer
///
/// Implementations hold only configuration: every call builds its own
/// intermediate state, so one codec can be shared across threads.
pub trait SymbolCodec {
    /// Codec-specific encoded form
    type Encoded;

    /// Encode the whole buffer
    fn compress(&self, symbols: &[u8]) -> Result<Self::Encoded>;

    /// Reconstruct exactly the buffer that produced `encoded`
    fn decompress(&self, encoded: &Self::Encoded) -> Result<Vec<u8>>;
}
