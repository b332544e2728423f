use chess::{Color, ALL_SQUARES};
use utils::Position;

use crate::pst::pst_value;
use crate::values::piece_value;
use crate::Eval;

/// Static evaluation from White's perspective (positive = White advantage).
///
/// Material plus piece-square bonus for every occupied square. Checkmate and stalemate are
/// not recognized here; kings simply count for their material value.
pub fn evaluate<P: Position>(position: &P) -> Eval {
    let mut score = 0;

    for square in ALL_SQUARES {
        let Some((piece, color)) = position.piece_at(square) else {
            continue;
        };

        let piece_score = piece_value(piece) + pst_value(piece, color, square);
        match color {
            Color::White => score += piece_score,
            Color::Black => score -= piece_score,
        }
    }

    score
}
