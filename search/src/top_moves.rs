use std::cmp::Reverse;

use evaluation::Eval;
use rayon::ThreadPool;
use utils::{Color, Move, Position};

use crate::minimax::SearchStats;
use crate::root::score_root_moves;

/// Every root move with its minimax value, best first for the side to move, cut to `count`.
///
/// Ties keep the rules engine's enumeration order.
pub(crate) fn rank_moves<P: Position>(
    position: &P,
    depth: u8,
    count: usize,
    pool: Option<&ThreadPool>,
) -> (Vec<(Move, Eval)>, SearchStats) {
    let moves = position.legal_moves();
    if moves.is_empty() {
        return (Vec::new(), SearchStats { nodes: 1 });
    }

    let (mut ranked, stats) = score_root_moves(position, &moves, depth, pool);

    match position.side_to_move() {
        Color::White => ranked.sort_by_key(|&(_, eval)| Reverse(eval)),
        Color::Black => ranked.sort_by_key(|&(_, eval)| eval),
    }
    ranked.truncate(count);

    (ranked, stats)
}
