pub mod codec;
pub mod tokens;

pub use codec::RleCodec;
pub use tokens::RunToken;
