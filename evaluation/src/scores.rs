// Score type and alpha-beta window bounds.

/// Centipawns from White's perspective.
pub type Eval = i32;

const SCORE_INF: Eval = 1_000_000_000;
/// Strictly above any reachable evaluation.
pub const POS_INFINITY: Eval = SCORE_INF;
/// Strictly below any reachable evaluation.
pub const NEG_INFINITY: Eval = -SCORE_INF;
