use evaluation::{evaluate, Eval, NEG_INFINITY, POS_INFINITY};
use rayon::ThreadPool;
use utils::{Color, Move, Position};

use crate::minimax::SearchStats;
use crate::ordering::order_root_captures_first;
use crate::root::score_root_moves;

/// The single best root move and its value. Without legal moves, no move and the static
/// evaluation of the position.
pub(crate) fn select_best_move<P: Position>(
    position: &P,
    depth: u8,
    pool: Option<&ThreadPool>,
) -> (Option<Move>, Eval, SearchStats) {
    let mut moves = position.legal_moves();
    if moves.is_empty() {
        return (None, evaluate(position), SearchStats { nodes: 1 });
    }

    order_root_captures_first(&mut moves);

    let maximizing = position.side_to_move() == Color::White;
    let mut best_move = moves[0];
    let mut best_value = if maximizing { NEG_INFINITY } else { POS_INFINITY };

    let (scored, stats) = score_root_moves(position, &moves, depth, pool);

    // Only a strict improvement replaces the incumbent: ties go to the earlier move.
    for (mv, eval) in scored {
        let improves = if maximizing {
            eval > best_value
        } else {
            eval < best_value
        };

        if improves {
            best_move = mv;
            best_value = eval;
        }
    }

    (Some(best_move), best_value, stats)
}
