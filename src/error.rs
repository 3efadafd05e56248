use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    // I/O errors (CLI boundary only)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    // Configuration errors
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown codec: {0:?} (expected rle, lz77 or huffman)")]
    UnknownCodec(String),

    #[error("Encoded block is {found} data, but codec is {expected}")]
    CodecMismatch { expected: &'static str, found: &'static str },

    // Token stream errors
    #[error("Malformed token: {0}")]
    MalformedToken(String),

    #[error("Back-reference distance {distance} exceeds available output {available}")]
    DanglingReference { distance: usize, available: usize },

    // Entropy stream errors
    #[error("Bitstream ends inside a code ({bits} unmatched bits)")]
    UnterminatedCode { bits: usize },

    #[error("Invalid code table: {0}")]
    InvalidCodeTable(String),

    #[error("Corrupt padding header: {0} (expected 0-7 within stream length)")]
    CorruptHeader(u8),

    // Internal errors
    #[error("Unexpected end of input")]
    UnexpectedEof,

    #[error("Internal error: {0}")]
    Internal(String),
}

pub type Result<T> = std::result::Result<T, Error>;
