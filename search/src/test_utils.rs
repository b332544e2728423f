use evaluation::{evaluate, Eval};
use utils::Position;

pub const SAMPLE_POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4k3/8/4p3/3q4/4P3/8/8/4K3 w - - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
];

/// Plain minimax without pruning or move ordering.
pub fn full_minimax<P: Position>(position: &P, depth: u8, maximizing: bool) -> Eval {
    if depth == 0 || position.is_game_over() {
        return evaluate(position);
    }

    let evals = position
        .legal_moves()
        .into_iter()
        .map(|mv| full_minimax(&position.apply(mv), depth - 1, !maximizing));

    if maximizing {
        evals.max().unwrap()
    } else {
        evals.min().unwrap()
    }
}

/// Number of positions in the full tree down to `depth`, root included.
pub fn perft_nodes<P: Position>(position: &P, depth: u8) -> u64 {
    if depth == 0 || position.is_game_over() {
        return 1;
    }

    1 + position
        .legal_moves()
        .into_iter()
        .map(|mv| perft_nodes(&position.apply(mv), depth - 1))
        .sum::<u64>()
}
