pub mod code;
pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod tree;

pub use code::{Code, CodeTable};
pub use codec::{HuffmanBlock, HuffmanCodec};
pub use decoder::HuffmanDecoder;
pub use encoder::pack_symbols;
pub use tree::{build_tree, derive_codes, FrequencyTable, HuffmanNode};
