use std::sync::mpsc::Sender;
use std::time::Instant;

use evaluation::Eval;
use log::debug;
use uci::commands::{GoParams, Info};
use uci::UciOutput;
use utils::{flip_eval_perspective, Board, Move};

use crate::minimax::SearchStats;
use crate::{SearchConfig, Searcher, MAX_DEPTH};

/// Search state behind the UCI front end: the current position, the active configuration
/// and a searcher sized to it.
pub struct Engine {
    config: SearchConfig,
    searcher: Searcher,
    board: Board,
}

impl Engine {
    pub fn new(config: &SearchConfig) -> Self {
        Self {
            config: config.clone(),
            searcher: Searcher::new(config.threads.value),
            board: Board::default(),
        }
    }

    pub fn configure(&mut self, config: &SearchConfig) {
        if config.threads.value != self.config.threads.value {
            self.searcher = Searcher::new(config.threads.value);
        }
        self.config = config.clone();
    }

    pub fn new_game(&mut self) {
        self.board = Board::default();
    }

    pub fn set_position(&mut self, board: Board) {
        self.board = board;
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Searches the current position and reports one `info` line per line of play. The
    /// returned evaluation is White-relative; `info` scores are from the side to move.
    pub fn search(
        &mut self,
        params: &GoParams,
        output: Option<&Sender<UciOutput>>,
    ) -> Option<(Move, Eval)> {
        let depth = params
            .depth
            .unwrap_or(self.config.depth.value)
            .clamp(1, MAX_DEPTH);
        let lines = self.config.multi_pv.value.max(1);
        let start = Instant::now();

        let (ranked, stats) = if lines > 1 {
            self.searcher.top_moves(&self.board, depth, lines)
        } else {
            let (best, eval, stats) = self.searcher.best_move(&self.board, depth);
            (best.map(|mv| vec![(mv, eval)]).unwrap_or_default(), stats)
        };

        debug!(
            "search depth {} finished in {:?} with {} lines",
            depth,
            start.elapsed(),
            ranked.len()
        );

        if let Some(output) = output {
            let time = start.elapsed().as_millis() as u64;
            for (index, (mv, eval)) in ranked.iter().enumerate() {
                let info = self.info(depth, index + 1, *mv, *eval, stats, time);
                if output.send(UciOutput::Info(info)).is_err() {
                    debug!("Output channel closed, dropping search info");
                    break;
                }
            }
        }

        ranked.first().copied()
    }

    fn info(
        &self,
        depth: u8,
        multi_pv: usize,
        mv: Move,
        eval: Eval,
        stats: SearchStats,
        time: u64,
    ) -> Info {
        Info {
            depth,
            multi_pv,
            nodes: stats.nodes,
            nodes_per_second: stats.nodes * 1000 / time.max(1),
            time,
            pv: vec![mv.to_string()],
            score: flip_eval_perspective(self.board.side_to_move(), eval),
        }
    }
}
