use std::sync::mpsc::{Receiver, Sender};

use search::{Engine, SearchConfig};
use uci::commands::GoParams;
use uci::{UciOutput, NULL_MOVE};
use utils::Board;

/// Commands sent from the UCI thread to the engine worker.
pub enum EngineCommand {
    /// Update engine configuration.
    Configure(Box<SearchConfig>),
    /// Reset engine state for a new game.
    NewGame,
    /// Set the position to search from.
    SetPosition(Box<Board>),
    /// Search the current position.
    Go(GoParams),
    /// Shut down the worker thread.
    Quit,
}

/// Owns the engine on a dedicated thread so the UCI loop keeps reading input while a
/// search runs.
pub struct EngineWorker {
    engine: Engine,
    rx: Receiver<EngineCommand>,
    output: Sender<UciOutput>,
}

impl EngineWorker {
    pub fn new(engine: Engine, rx: Receiver<EngineCommand>, output: Sender<UciOutput>) -> Self {
        Self { engine, rx, output }
    }

    /// Processes commands until Quit is received or the sender goes away.
    pub fn run(mut self) {
        while let Ok(cmd) = self.rx.recv() {
            match cmd {
                EngineCommand::Go(params) => {
                    let result = self.engine.search(&params, Some(&self.output));

                    // Every go gets a bestmove, even without legal moves.
                    let best_move = result
                        .map(|(mv, _)| mv.to_string())
                        .unwrap_or_else(|| NULL_MOVE.to_string());

                    let _ = self.output.send(UciOutput::BestMove(best_move));
                }
                EngineCommand::SetPosition(board) => self.engine.set_position(*board),
                EngineCommand::NewGame => self.engine.new_game(),
                EngineCommand::Configure(config) => self.engine.configure(&config),
                EngineCommand::Quit => break,
            }
        }
    }
}
