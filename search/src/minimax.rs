use evaluation::{evaluate, Eval, NEG_INFINITY, POS_INFINITY};
use utils::Position;

use crate::ordering::order_captures_first;

/// Counters collected while searching. Never influences the result.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Positions visited, interior and leaf.
    pub nodes: u64,
}

impl SearchStats {
    #[inline(always)]
    pub fn merge(&mut self, other: SearchStats) {
        self.nodes += other.nodes;
    }
}

/// Depth-limited minimax with alpha-beta pruning. Scores are White-relative; `maximizing`
/// tells whether the side to move at `position` is the maximizer (White).
///
/// At `depth == 0` or on a finished game the static evaluation is returned as is: there is
/// no quiescence search and no mate scoring.
pub fn minimax<P: Position>(
    position: &P,
    depth: u8,
    alpha: Eval,
    beta: Eval,
    maximizing: bool,
) -> Eval {
    alpha_beta(position, depth, alpha, beta, maximizing, &mut SearchStats::default())
}

pub(crate) fn alpha_beta<P: Position>(
    position: &P,
    depth: u8,
    mut alpha: Eval,
    mut beta: Eval,
    maximizing: bool,
    stats: &mut SearchStats,
) -> Eval {
    stats.nodes += 1;

    if depth == 0 || position.is_game_over() {
        return evaluate(position);
    }

    let mut moves = position.legal_moves();
    assert!(
        !moves.is_empty(),
        "rules engine reported an ongoing game without legal moves: {}",
        position.to_fen()
    );
    order_captures_first(&mut moves);

    if maximizing {
        let mut max_eval = NEG_INFINITY;
        for mv in moves {
            let child = position.apply(mv);
            let eval = alpha_beta(&child, depth - 1, alpha, beta, false, stats);

            max_eval = max_eval.max(eval);
            alpha = alpha.max(max_eval);

            if beta <= alpha {
                break;
            }
        }
        max_eval
    } else {
        let mut min_eval = POS_INFINITY;
        for mv in moves {
            let child = position.apply(mv);
            let eval = alpha_beta(&child, depth - 1, alpha, beta, true, stats);

            min_eval = min_eval.min(eval);
            beta = beta.min(min_eval);

            if beta <= alpha {
                break;
            }
        }
        min_eval
    }
}
