use chess::{Color, Piece, Square};

use crate::Move;

/// Rules-engine view of a game state.
///
/// Search and evaluation treat implementors as an oracle: legality, check, castling rights,
/// en passant and promotion are all the implementor's business. Positions are values;
/// [`Position::apply`] returns a new one and leaves `self` untouched, so a search never
/// mutates the position its caller handed in.
pub trait Position: Clone + Send + Sync {
    /// All legal moves for the side to move, in generator order.
    fn legal_moves(&self) -> Vec<Move>;

    /// Legal moves originating from `square`.
    fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        self.legal_moves()
            .into_iter()
            .filter(|mv| mv.from == square)
            .collect()
    }

    /// Returns the position after playing `mv`, which must be legal here.
    fn apply(&self, mv: Move) -> Self;

    /// True on checkmate, stalemate, or any other draw the rules engine recognizes.
    fn is_game_over(&self) -> bool;

    fn side_to_move(&self) -> Color;

    fn piece_at(&self, square: Square) -> Option<(Piece, Color)>;

    /// FEN serialization.
    fn to_fen(&self) -> String;
}
