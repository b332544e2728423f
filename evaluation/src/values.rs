use chess::Piece;

use crate::Eval;

pub const PAWN_VALUE: Eval = 100;
pub const KNIGHT_VALUE: Eval = 320;
pub const BISHOP_VALUE: Eval = 330;
pub const ROOK_VALUE: Eval = 500;
pub const QUEEN_VALUE: Eval = 900;
// Large enough that no amount of material ever trades against the king.
pub const KING_VALUE: Eval = 20_000;

#[inline(always)]
pub fn piece_value(piece: Piece) -> Eval {
    match piece {
        Piece::Pawn => PAWN_VALUE,
        Piece::Knight => KNIGHT_VALUE,
        Piece::Bishop => BISHOP_VALUE,
        Piece::Rook => ROOK_VALUE,
        Piece::Queen => QUEEN_VALUE,
        Piece::King => KING_VALUE,
    }
}
