use chess::{Color, Piece, Square};

use crate::Eval;

/// Piece-Square Table: position-dependent bonus/penalty for one piece kind.
///
/// Values are in centipawns. Tables are defined for White (a1 = index 0, h8 = index 63);
/// Black uses the same table mirrored across the rank axis, not negated.
///
/// <https://www.chessprogramming.org/Simplified_Evaluation_Function>
#[allow(clippy::upper_case_acronyms)]
pub type PST = [Eval; 64];

/// Indexed by `[color][piece]`, following `Color::to_index` and `Piece::to_index`.
const PST_TABLE: [[PST; 6]; 2] = [
    [
        WHITE_PAWN_PST,
        WHITE_KNIGHT_PST,
        WHITE_BISHOP_PST,
        WHITE_ROOK_PST,
        WHITE_QUEEN_PST,
        WHITE_KING_PST,
    ],
    [
        invert_pst(&WHITE_PAWN_PST),
        invert_pst(&WHITE_KNIGHT_PST),
        invert_pst(&WHITE_BISHOP_PST),
        invert_pst(&WHITE_ROOK_PST),
        invert_pst(&WHITE_QUEEN_PST),
        invert_pst(&WHITE_KING_PST),
    ],
];

#[inline(always)]
pub fn pst_value(piece: Piece, color: Color, square: Square) -> Eval {
    PST_TABLE[color.to_index()][piece.to_index()][square.to_index()]
}

/// Mirrors a White PST vertically to create Black's perspective.
/// Black's a8 corresponds to White's a1, etc.
const fn invert_pst(source: &PST) -> PST {
    let mut table = [0; 64];
    let mut i = 0;
    while i < 64 {
        let rank = i / 8;
        let file = i % 8;
        table[i] = source[(7 - rank) * 8 + file];
        i += 1;
    }
    table
}

// Pawns: push the center pawns, keep the shield in front of a castled king.
pub const WHITE_PAWN_PST: PST = [
    0, 0, 0, 0, 0, 0, 0, 0, // rank 1 (a1-h1)
    5, 10, 10, -20, -20, 10, 10, 5, // rank 2
    5, -5, -10, 0, 0, -10, -5, 5, // rank 3
    0, 0, 0, 20, 20, 0, 0, 0, // rank 4
    5, 5, 10, 25, 25, 10, 5, 5, // rank 5
    10, 10, 20, 30, 30, 20, 10, 10, // rank 6
    50, 50, 50, 50, 50, 50, 50, 50, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

// Knights: a knight on the rim is dim.
pub const WHITE_KNIGHT_PST: PST = [
    -50, -40, -30, -30, -30, -30, -40, -50, // rank 1
    -40, -20, 0, 5, 5, 0, -20, -40, // rank 2
    -30, 5, 10, 15, 15, 10, 5, -30, // rank 3
    -30, 0, 15, 20, 20, 15, 0, -30, // rank 4
    -30, 5, 15, 20, 20, 15, 5, -30, // rank 5
    -30, 0, 10, 15, 15, 10, 0, -30, // rank 6
    -40, -20, 0, 0, 0, 0, -20, -40, // rank 7
    -50, -40, -30, -30, -30, -30, -40, -50, // rank 8
];

// Bishops: avoid corners and edges, favor b2/g2 and the long diagonals.
pub const WHITE_BISHOP_PST: PST = [
    -20, -10, -10, -10, -10, -10, -10, -20, // rank 1
    -10, 5, 0, 0, 0, 0, 5, -10, // rank 2
    -10, 10, 10, 10, 10, 10, 10, -10, // rank 3
    -10, 0, 10, 10, 10, 10, 0, -10, // rank 4
    -10, 5, 5, 10, 10, 5, 5, -10, // rank 5
    -10, 0, 5, 10, 10, 5, 0, -10, // rank 6
    -10, 0, 0, 0, 0, 0, 0, -10, // rank 7
    -20, -10, -10, -10, -10, -10, -10, -20, // rank 8
];

// Rooks: seventh rank, centralize on the back rank, stay off the a/h files.
pub const WHITE_ROOK_PST: PST = [
    0, 0, 0, 5, 5, 0, 0, 0, // rank 1
    -5, 0, 0, 0, 0, 0, 0, -5, // rank 2
    -5, 0, 0, 0, 0, 0, 0, -5, // rank 3
    -5, 0, 0, 0, 0, 0, 0, -5, // rank 4
    -5, 0, 0, 0, 0, 0, 0, -5, // rank 5
    -5, 0, 0, 0, 0, 0, 0, -5, // rank 6
    5, 10, 10, 10, 10, 10, 10, 5, // rank 7
    0, 0, 0, 0, 0, 0, 0, 0, // rank 8
];

// Queens: mild center bonus, corners are bad.
pub const WHITE_QUEEN_PST: PST = [
    -20, -10, -10, -5, -5, -10, -10, -20, // rank 1
    -10, 0, 5, 0, 0, 0, 0, -10, // rank 2
    -10, 5, 5, 5, 5, 5, 0, -10, // rank 3
    0, 0, 5, 5, 5, 5, 0, -5, // rank 4
    -5, 0, 5, 5, 5, 5, 0, -5, // rank 5
    -10, 0, 5, 5, 5, 5, 0, -10, // rank 6
    -10, 0, 0, 0, 0, 0, 0, -10, // rank 7
    -20, -10, -10, -5, -5, -10, -10, -20, // rank 8
];

// Kings: stay home behind the pawns, castled squares are best.
pub const WHITE_KING_PST: PST = [
    20, 30, 10, 0, 0, 10, 30, 20, // rank 1
    20, 20, 0, 0, 0, 0, 20, 20, // rank 2
    -10, -20, -20, -20, -20, -20, -20, -10, // rank 3
    -20, -30, -30, -40, -40, -30, -30, -20, // rank 4
    -30, -40, -40, -50, -50, -40, -40, -30, // rank 5
    -30, -40, -40, -50, -50, -40, -40, -30, // rank 6
    -30, -40, -40, -50, -50, -40, -40, -30, // rank 7
    -30, -40, -40, -50, -50, -40, -40, -30, // rank 8
];
