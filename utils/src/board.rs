use chess::{BitBoard, Board, BoardStatus, Color, MoveGen, Piece, Square, EMPTY};

use crate::{Move, Position};

const LIGHT_SQUARES_MASK: u64 = 0x55AA55AA55AA55AA;

impl Position for Board {
    fn legal_moves(&self) -> Vec<Move> {
        MoveGen::new_legal(self)
            .map(|mv| Move::from_chess_move(self, mv))
            .collect()
    }

    fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        MoveGen::new_legal(self)
            .filter(|mv| mv.get_source() == square)
            .map(|mv| Move::from_chess_move(self, mv))
            .collect()
    }

    #[inline(always)]
    fn apply(&self, mv: Move) -> Self {
        self.make_move_new(mv.into())
    }

    // chess::Board keeps no move history, so repetition and the fifty-move rule are not
    // visible here.
    fn is_game_over(&self) -> bool {
        self.status() != BoardStatus::Ongoing || has_insufficient_material(self)
    }

    #[inline(always)]
    fn side_to_move(&self) -> Color {
        Board::side_to_move(self)
    }

    #[inline(always)]
    fn piece_at(&self, square: Square) -> Option<(Piece, Color)> {
        Some((self.piece_on(square)?, self.color_on(square)?))
    }

    fn to_fen(&self) -> String {
        self.to_string()
    }
}

/// Checks if the position has insufficient material for either side to force checkmate.
/// Returns true for dead drawn positions like:
/// - K vs K
/// - K+N vs K (either side)
/// - K+B vs K (either side)
/// - K+B vs K+B with same-colored bishops
pub fn has_insufficient_material(board: &Board) -> bool {
    let pawns = board.pieces(Piece::Pawn);
    let rooks = board.pieces(Piece::Rook);
    let queens = board.pieces(Piece::Queen);

    if (pawns | rooks | queens) != EMPTY {
        return false;
    }

    let white = board.color_combined(Color::White);
    let black = board.color_combined(Color::Black);
    let knights = board.pieces(Piece::Knight);
    let bishops = board.pieces(Piece::Bishop);

    let white_knights = (white & knights).popcnt();
    let black_knights = (black & knights).popcnt();
    let white_bishops = (white & bishops).popcnt();
    let black_bishops = (black & bishops).popcnt();

    let white_minors = white_knights + white_bishops;
    let black_minors = black_knights + black_bishops;

    match (white_minors, black_minors) {
        (0, 0) => true,
        (1, 0) | (0, 1) => true,
        (1, 1) if white_bishops == 1 && black_bishops == 1 => {
            let light_squares = BitBoard(LIGHT_SQUARES_MASK);
            let white_on_light = (white & bishops & light_squares) != EMPTY;
            let black_on_light = (black & bishops & light_squares) != EMPTY;

            white_on_light == black_on_light
        }
        _ => false,
    }
}
