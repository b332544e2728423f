use search::{evaluate, find_best_move, find_top_moves, minimax, Searcher};
use utils::{flip_colors, parse_fen, Board, Color, Position};

const INF: i32 = 1_000_000_000;

const MIDDLEGAMES: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR w KQkq - 4 4",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

const ENDGAMES: &[&str] = &[
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "4k3/8/4p3/3q4/4P3/8/8/4K3 w - - 0 1",
    "8/8/3k4/8/2R5/8/5K2/8 b - - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
];

fn board(fen: &str) -> Board {
    parse_fen(fen).unwrap()
}

fn white_to_move(board: &Board) -> bool {
    Position::side_to_move(board) == Color::White
}

// Integration tests link against the library without `cfg(test)`, so the crate's own
// unpruned search in `test_utils` is out of reach here.
fn unpruned(position: &Board, depth: u8, maximizing: bool) -> i32 {
    if depth == 0 || position.is_game_over() {
        return evaluate(position);
    }

    let evals = position
        .legal_moves()
        .into_iter()
        .map(|mv| unpruned(&position.apply(mv), depth - 1, !maximizing));

    if maximizing {
        evals.max().unwrap()
    } else {
        evals.min().unwrap()
    }
}

#[test]
fn color_flip_negates_evaluation() {
    for fen in MIDDLEGAMES.iter().chain(ENDGAMES) {
        let board = board(fen);
        let flipped = flip_colors(&board).unwrap();
        assert_eq!(evaluate(&flipped), -evaluate(&board), "{}", fen);
    }
}

#[test]
fn depth_zero_is_static_evaluation() {
    for fen in MIDDLEGAMES.iter().chain(ENDGAMES) {
        let board = board(fen);
        for maximizing in [true, false] {
            assert_eq!(minimax(&board, 0, -INF, INF, maximizing), evaluate(&board));
        }
    }
}

#[test]
fn pruning_keeps_root_values() {
    for fen in MIDDLEGAMES {
        let board = board(fen);
        let maximizing = white_to_move(&board);
        for depth in 1..=3 {
            assert_eq!(
                minimax(&board, depth, -INF, INF, maximizing),
                unpruned(&board, depth, maximizing),
                "{} at depth {}",
                fen,
                depth
            );
        }
    }

    for fen in ENDGAMES {
        let board = board(fen);
        let maximizing = white_to_move(&board);
        assert_eq!(
            minimax(&board, 4, -INF, INF, maximizing),
            unpruned(&board, 4, maximizing),
            "{} at depth 4",
            fen
        );
    }
}

#[test]
fn best_move_value_matches_unpruned_children() {
    for fen in MIDDLEGAMES.iter().chain(ENDGAMES) {
        let board = board(fen);
        let maximizing = white_to_move(&board);

        for depth in 1..=3 {
            let children = board
                .legal_moves()
                .into_iter()
                .map(|mv| unpruned(&board.apply(mv), depth - 1, !maximizing));
            let expected = if maximizing {
                children.max()
            } else {
                children.min()
            };

            let (best, value) = find_best_move(&board, depth);
            assert!(best.is_some(), "{}", fen);
            assert_eq!(Some(value), expected, "{} at depth {}", fen, depth);
        }
    }
}

#[test]
fn ranked_values_match_unpruned_children() {
    let board = board(ENDGAMES[1]);
    let ranked = find_top_moves(&board, 3, usize::MAX);

    assert_eq!(ranked.len(), board.legal_moves().len());
    for (mv, eval) in ranked {
        assert_eq!(eval, unpruned(&board.apply(mv), 2, false), "{}", mv);
    }
}

#[test]
fn no_legal_moves() {
    let checkmate = board("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3");
    let stalemate = board("7k/5Q2/6K1/8/8/8/8/8 b - - 0 1");

    for position in [checkmate, stalemate] {
        assert!(find_top_moves(&position, 3, 10).is_empty());
        assert_eq!(find_best_move(&position, 3), (None, evaluate(&position)));
    }
}

#[test]
fn ranking_order_and_truncation() {
    let white = Board::default();
    let all = find_top_moves(&white, 2, 100);
    assert_eq!(all.len(), 20);
    assert!(all.windows(2).all(|w| w[0].1 >= w[1].1));
    assert_eq!(find_top_moves(&white, 2, 5), all[..5]);
    assert!(find_top_moves(&white, 2, 0).is_empty());

    let black = board("rnbqkbnr/pppppppp/8/8/3P4/8/PPP1PPPP/RNBQKBNR b KQkq - 0 1");
    let all = find_top_moves(&black, 2, 100);
    assert!(all.windows(2).all(|w| w[0].1 <= w[1].1));
}

#[test]
fn start_position_is_level_at_depth_two() {
    let board = Board::default();
    let (best, eval) = find_best_move(&board, 2);

    assert_eq!(eval, 0);
    assert!(board.legal_moves().contains(&best.unwrap()));
}

#[test]
fn pawn_takes_free_queen() {
    let board = board("4k3/8/8/3q4/4P3/8/8/4K3 w - - 0 1");
    let static_eval = evaluate(&board);

    let (best, eval) = find_best_move(&board, 2);
    assert_eq!(best.map(|mv| mv.to_string()), Some("e4d5".to_string()));
    assert!(eval > static_eval + 850, "{} vs {}", eval, static_eval);

    let ranked = find_top_moves(&board, 2, 1);
    assert_eq!(ranked[0].0.to_string(), "e4d5");
    assert_eq!(ranked[0].1, eval);
}

#[test]
fn pawn_takes_defended_queen() {
    // The pawn on e6 recaptures, so White nets a queen for a pawn.
    let board = board("4k3/8/4p3/3q4/4P3/8/8/4K3 w - - 0 1");
    let static_eval = evaluate(&board);

    let (best, eval) = find_best_move(&board, 2);
    assert_eq!(best.map(|mv| mv.to_string()), Some("e4d5".to_string()));
    assert!(eval > static_eval + 700, "{} vs {}", eval, static_eval);
}

#[test]
fn parallel_search_matches_serial() {
    let parallel = Searcher::new(4);

    for fen in MIDDLEGAMES.iter().chain(ENDGAMES) {
        let board = board(fen);
        let (best, eval, _) = parallel.best_move(&board, 3);
        assert_eq!((best, eval), find_best_move(&board, 3), "{}", fen);

        let (ranked, _) = parallel.top_moves(&board, 2, 10);
        assert_eq!(ranked, find_top_moves(&board, 2, 10), "{}", fen);
    }
}

// Root ordering in best-move search may reorder quiet moves among themselves, unlike the
// stable ordering used below the root. Only the value is guaranteed to agree with ranking;
// on ties the chosen move is any of the best-valued moves.
#[test]
fn best_move_root_ordering_is_looser_on_purpose() {
    for fen in MIDDLEGAMES {
        let board = board(fen);
        let (best, eval) = find_best_move(&board, 2);
        let ranked = find_top_moves(&board, 2, usize::MAX);

        assert_eq!(eval, ranked[0].1);
        let best = best.unwrap();
        assert!(ranked
            .iter()
            .take_while(|(_, value)| *value == eval)
            .any(|(mv, _)| *mv == best));
    }
}

#[test]
#[should_panic(expected = "search depth")]
fn depth_zero_root_search_panics() {
    find_best_move(&Board::default(), 0);
}

#[test]
#[should_panic(expected = "search depth")]
fn depth_beyond_limit_panics() {
    find_top_moves(&Board::default(), search::MAX_DEPTH + 1, 1);
}
