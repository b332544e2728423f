use evaluation::{Eval, NEG_INFINITY, POS_INFINITY};
use log::debug;
use rayon::prelude::*;
use rayon::ThreadPool;
use utils::{Color, Move, Position};

use crate::minimax::{alpha_beta, SearchStats};

/// Scores every root move with a full-window search of its child, keeping the input order.
///
/// With a pool the children are searched concurrently; each one owns its subtree, so the
/// scores are the same as a serial pass.
pub(crate) fn score_root_moves<P: Position>(
    position: &P,
    moves: &[Move],
    depth: u8,
    pool: Option<&ThreadPool>,
) -> (Vec<(Move, Eval)>, SearchStats) {
    let child_maximizing = position.side_to_move() != Color::White;

    let score = |mv: &Move| {
        let mut stats = SearchStats::default();
        let child = position.apply(*mv);
        let eval = alpha_beta(
            &child,
            depth - 1,
            NEG_INFINITY,
            POS_INFINITY,
            child_maximizing,
            &mut stats,
        );
        debug!("root {} -> {} ({} nodes)", mv, eval, stats.nodes);
        (*mv, eval, stats)
    };

    let scored: Vec<(Move, Eval, SearchStats)> = match pool {
        Some(pool) => pool.install(|| moves.par_iter().map(score).collect()),
        None => moves.iter().map(score).collect(),
    };

    // The root itself counts as a visited node.
    let mut stats = SearchStats { nodes: 1 };
    let results = scored
        .into_iter()
        .map(|(mv, eval, child_stats)| {
            stats.merge(child_stats);
            (mv, eval)
        })
        .collect();

    (results, stats)
}
