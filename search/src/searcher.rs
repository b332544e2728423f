use evaluation::Eval;
use log::{info, warn};
use rayon::{ThreadPool, ThreadPoolBuilder};
use utils::{Move, Position};

use crate::assert_root_depth;
use crate::best_move::select_best_move;
use crate::minimax::SearchStats;
use crate::top_moves::rank_moves;

/// Runs root searches, optionally spreading the root moves over a dedicated thread pool.
///
/// Results never depend on the number of threads.
pub struct Searcher {
    pool: Option<ThreadPool>,
}

impl Searcher {
    /// A searcher using `threads` workers for the root moves. One thread (or zero) searches
    /// on the calling thread.
    pub fn new(threads: usize) -> Self {
        if threads <= 1 {
            return Self::serial();
        }

        match ThreadPoolBuilder::new()
            .num_threads(threads)
            .thread_name(|i| format!("search-{}", i))
            .build()
        {
            Ok(pool) => Self { pool: Some(pool) },
            Err(e) => {
                warn!("Failed to build a {}-thread pool, searching serially: {}", threads, e);
                Self::serial()
            }
        }
    }

    pub fn serial() -> Self {
        Self { pool: None }
    }

    pub fn threads(&self) -> usize {
        self.pool
            .as_ref()
            .map_or(1, |pool| pool.current_num_threads())
    }

    /// Ranked root moves, see [`crate::find_top_moves`].
    pub fn top_moves<P: Position>(
        &self,
        position: &P,
        depth: u8,
        count: usize,
    ) -> (Vec<(Move, Eval)>, SearchStats) {
        assert_root_depth(depth);

        let (ranked, stats) = rank_moves(position, depth, count, self.pool.as_ref());
        info!(
            "ranked {} moves at depth {} ({} nodes, {} threads)",
            ranked.len(),
            depth,
            stats.nodes,
            self.threads()
        );
        (ranked, stats)
    }

    /// Best root move, see [`crate::find_best_move`].
    pub fn best_move<P: Position>(
        &self,
        position: &P,
        depth: u8,
    ) -> (Option<Move>, Eval, SearchStats) {
        assert_root_depth(depth);

        let (best, eval, stats) = select_best_move(position, depth, self.pool.as_ref());
        match best {
            Some(mv) => info!(
                "best {} at depth {}: {} ({} nodes, {} threads)",
                mv,
                depth,
                eval,
                stats.nodes,
                self.threads()
            ),
            None => info!("no legal moves in {}", position.to_fen()),
        }
        (best, eval, stats)
    }
}

impl Default for Searcher {
    fn default() -> Self {
        Self::serial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::SAMPLE_POSITIONS;
    use utils::parse_fen;

    #[test]
    fn test_thread_count() {
        assert_eq!(Searcher::new(0).threads(), 1);
        assert_eq!(Searcher::new(1).threads(), 1);
        assert_eq!(Searcher::new(3).threads(), 3);
    }

    #[test]
    fn test_parallel_matches_serial() {
        let serial = Searcher::serial();
        let parallel = Searcher::new(4);

        for fen in SAMPLE_POSITIONS {
            let board = parse_fen(fen).unwrap();

            assert_eq!(
                serial.best_move(&board, 2),
                parallel.best_move(&board, 2),
                "{}",
                fen
            );
            assert_eq!(
                serial.top_moves(&board, 2, 5),
                parallel.top_moves(&board, 2, 5),
                "{}",
                fen
            );
        }
    }

    #[test]
    #[should_panic(expected = "search depth")]
    fn test_rejects_zero_depth() {
        Searcher::serial().best_move(&utils::Board::default(), 0);
    }
}
