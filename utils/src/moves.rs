use std::fmt;

use chess::{Board, ChessMove, Piece, Square};

use crate::Position;

/// A generated move. Immutable once produced by the rules engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub promotion: Option<Piece>,
    /// Kind of the piece taken by this move, if any. En passant reports a pawn.
    pub captured: Option<Piece>,
}

impl Move {
    /// Builds a move from the `chess` crate representation, reading the capture from `board`
    /// (the position the move is played from).
    pub fn from_chess_move(board: &Board, mv: ChessMove) -> Self {
        let from = mv.get_source();
        let to = mv.get_dest();

        let captured = board.piece_on(to).or_else(|| {
            let is_pawn = board.piece_on(from) == Some(Piece::Pawn);
            let diagonal = from.get_file() != to.get_file();
            // A pawn moving diagonally onto an empty square is taking en passant.
            (is_pawn && diagonal).then_some(Piece::Pawn)
        });

        Self {
            from,
            to,
            promotion: mv.get_promotion(),
            captured,
        }
    }

    #[inline(always)]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

impl From<Move> for ChessMove {
    fn from(mv: Move) -> Self {
        ChessMove::new(mv.from, mv.to, mv.promotion)
    }
}

/// UCI long algebraic notation (`e2e4`, `e7e8q`).
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", ChessMove::from(*self))
    }
}

/// Resolves a UCI move string against the legal moves of `position`.
pub fn parse_uci_move<P: Position>(position: &P, text: &str) -> Result<Move, String> {
    let text = text.trim();
    position
        .legal_moves()
        .into_iter()
        .find(|mv| mv.to_string() == text)
        .ok_or_else(|| format!("Illegal or malformed move '{}' in {}", text, position.to_fen()))
}
