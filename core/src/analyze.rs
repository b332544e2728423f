//! One-shot position analysis for the command line.

use std::error::Error;
use std::time::Instant;

use evaluation::{evaluate, Eval};
use search::Searcher;
use utils::{parse_fen, Board, Move, Position};

pub fn rank(fen: &str, depth: u8, count: usize, threads: usize) -> Result<(), Box<dyn Error>> {
    let board = parse_fen(fen)?;
    let searcher = Searcher::new(threads);

    let start = Instant::now();
    let (ranked, stats) = searcher.top_moves(&board, depth, count);
    let elapsed = start.elapsed();

    print_header(&board, depth);
    if ranked.is_empty() {
        println!("No legal moves ({})", game_state(&board));
    }
    for line in format_ranking(&ranked) {
        println!("{}", line);
    }
    println!("\n{} nodes in {} ms", stats.nodes, elapsed.as_millis());

    Ok(())
}

pub fn best(fen: &str, depth: u8, threads: usize) -> Result<(), Box<dyn Error>> {
    let board = parse_fen(fen)?;
    let searcher = Searcher::new(threads);

    let start = Instant::now();
    let (best, eval, stats) = searcher.best_move(&board, depth);
    let elapsed = start.elapsed();

    print_header(&board, depth);
    match best {
        Some(mv) => println!("Best move: {}", mv),
        None => println!("No legal moves ({})", game_state(&board)),
    }
    println!("Evaluation: {}", format_eval(eval));
    println!("\n{} nodes in {} ms", stats.nodes, elapsed.as_millis());

    Ok(())
}

pub fn static_eval(fen: &str) -> Result<(), Box<dyn Error>> {
    let board = parse_fen(fen)?;
    println!("Position: {}", board.to_fen());
    println!("Static evaluation: {}", format_eval(evaluate(&board)));
    Ok(())
}

fn print_header(board: &Board, depth: u8) {
    println!("Position: {}", board.to_fen());
    println!("Side to move: {:?}, depth {}\n", Position::side_to_move(board), depth);
}

fn game_state(board: &Board) -> &'static str {
    if board.checkers().popcnt() > 0 {
        "checkmate"
    } else {
        "stalemate"
    }
}

fn format_ranking(ranked: &[(Move, Eval)]) -> Vec<String> {
    ranked
        .iter()
        .enumerate()
        .map(|(i, (mv, eval))| {
            format!("{:>3}. {:<6} {}", i + 1, mv.to_string(), format_eval(*eval))
        })
        .collect()
}

/// White-relative centipawns, signed.
fn format_eval(eval: Eval) -> String {
    format!("{:+} cp", eval)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_eval() {
        assert_eq!(format_eval(115), "+115 cp");
        assert_eq!(format_eval(-40), "-40 cp");
        assert_eq!(format_eval(0), "+0 cp");
    }

    #[test]
    fn test_format_ranking() {
        let board = parse_fen("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1").unwrap();
        let ranked = search::find_top_moves(&board, 2, 2);

        let lines = format_ranking(&ranked);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].starts_with("  1. e4d5"), "{}", lines[0]);
    }

    #[test]
    fn test_game_state() {
        let mated = parse_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
            .unwrap();
        let stalemate = parse_fen("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1").unwrap();

        assert_eq!(game_state(&mated), "checkmate");
        assert_eq!(game_state(&stalemate), "stalemate");
    }

    #[test]
    fn test_rejects_bad_fen() {
        assert!(static_eval("definitely not a fen").is_err());
        assert!(rank("8/8/8 w", 2, 3, 1).is_err());
    }
}
