use std::str::FromStr;

use chess::Board;

pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

pub fn parse_fen(fen: &str) -> Result<Board, String> {
    Board::from_str(fen.trim()).map_err(|e| format!("Invalid FEN '{}': {}", fen.trim(), e))
}

/// The same position seen from the other side of the board: every piece changes color and is
/// mirrored across the rank axis, and the other side is to move.
pub fn flip_colors(board: &Board) -> Result<Board, String> {
    let fen = board.to_string();
    let fields: [&str; 6] = fen
        .split_whitespace()
        .collect::<Vec<_>>()
        .try_into()
        .map_err(|_| format!("Unexpected FEN layout: {}", fen))?;
    let [placement, side, castling, en_passant, halfmove, fullmove] = fields;

    let placement = placement
        .split('/')
        .rev()
        .map(swap_case)
        .collect::<Vec<_>>()
        .join("/");

    let side = if side == "w" { "b" } else { "w" };

    let castling = if castling == "-" {
        castling.to_string()
    } else {
        let swapped = swap_case(castling);
        "KQkq".chars().filter(|c| swapped.contains(*c)).collect()
    };

    let en_passant = match en_passant.as_bytes() {
        [file, rank] => format!("{}{}", *file as char, (b'1' + b'8' - rank) as char),
        _ => en_passant.to_string(),
    };

    parse_fen(&format!(
        "{} {} {} {} {} {}",
        placement, side, castling, en_passant, halfmove, fullmove
    ))
}

fn swap_case(text: &str) -> String {
    text.chars()
        .map(|c| {
            if c.is_ascii_uppercase() {
                c.to_ascii_lowercase()
            } else {
                c.to_ascii_uppercase()
            }
        })
        .collect()
}
