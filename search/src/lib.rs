//! Depth-limited minimax search with alpha-beta pruning over a [`Position`].
//!
//! [`find_top_moves`] ranks every root move; [`find_best_move`] picks one. Both search each
//! root child with a full window and score leaves with [`evaluate`].

mod best_move;
mod config;
mod engine;
mod minimax;
mod ordering;
mod root;
mod searcher;
mod top_moves;

#[cfg(test)]
pub(crate) mod test_utils;

use evaluation::Eval;
use utils::{Move, Position};

/// Maximum search depth supported by the engine.
pub const MAX_DEPTH: u8 = 100;

pub use config::{ConfigParam, SearchConfig};
pub use engine::Engine;
pub use evaluation::evaluate;
pub use minimax::{minimax, SearchStats};
pub use ordering::{order_captures_first, order_root_captures_first};
pub use searcher::Searcher;

/// Every legal root move with its minimax value, best first for the side to move, at most
/// `count` of them. Equal values keep the rules engine's enumeration order.
///
/// Returns an empty list when the side to move has no legal moves.
///
/// # Panics
///
/// If `depth` is not in `1..=MAX_DEPTH`.
pub fn find_top_moves<P: Position>(position: &P, depth: u8, count: usize) -> Vec<(Move, Eval)> {
    Searcher::serial().top_moves(position, depth, count).0
}

/// The best root move and its value. Without legal moves (checkmate or stalemate) there is
/// no move and the value is the static evaluation.
///
/// # Panics
///
/// If `depth` is not in `1..=MAX_DEPTH`.
pub fn find_best_move<P: Position>(position: &P, depth: u8) -> (Option<Move>, Eval) {
    let (best, eval, _) = Searcher::serial().best_move(position, depth);
    (best, eval)
}

#[inline]
pub(crate) fn assert_root_depth(depth: u8) {
    assert!(
        (1..=MAX_DEPTH).contains(&depth),
        "search depth must be in 1..={}, got {}",
        MAX_DEPTH,
        depth
    );
}
