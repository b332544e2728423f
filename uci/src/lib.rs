mod connection;
mod decoder;
mod encoder;
mod options;

pub mod commands;

pub use commands::{UciInput, UciOutput};
pub use connection::UciConnection;
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use options::{UciOption, UciOptionType};

/// Null move in UCI format, sent as the bestmove when the position has no legal moves.
pub const NULL_MOVE: &str = "0000";
