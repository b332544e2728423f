mod board;
mod eval;
mod fen;
mod moves;
mod position;

pub use board::has_insufficient_material;
pub use eval::flip_eval_perspective;
pub use fen::{flip_colors, parse_fen, START_FEN};
pub use moves::{parse_uci_move, Move};
pub use position::Position;

pub use chess::{Board, Color, Piece, Square};
