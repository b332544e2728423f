use chess::Color;

/// Flip eval perspective between White's view and side-to-move's view.
#[inline(always)]
pub fn flip_eval_perspective(side_to_move: Color, score: i32) -> i32 {
    if side_to_move == Color::White {
        score
    } else {
        -score
    }
}
