pub mod codec;
pub mod matcher;
pub mod tokens;
pub mod window;

pub use codec::{MatchPolicy, WindowCodec, DEFAULT_WINDOW_SIZE};
pub use matcher::{Match, MatchFinder};
pub use tokens::LZ77Token;
pub use window::OutputWindow;
