//! UCI application - handles the UCI protocol and coordinates the engine worker.

use std::io::BufRead;
use std::sync::mpsc::{self, Sender};
use std::thread::{self, JoinHandle};

use log::debug;
use search::{Engine, SearchConfig};
use uci::{Decoder, UciConnection, UciInput, UciOutput};

use crate::worker::{EngineCommand, EngineWorker};

const ENGINE_NAME: &str = "Lodestar";
const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");
const ENGINE_AUTHOR: &str = "Jørgen Hanssen";

/// The main UCI application.
pub struct Lodestar {
    config: SearchConfig,
    cmd_tx: Sender<EngineCommand>,
    output: Sender<UciOutput>,
    connection: UciConnection,
    worker_handle: JoinHandle<()>,
}

impl Lodestar {
    /// Creates the application and spawns the engine worker thread.
    pub fn new() -> Self {
        let (cmd_tx, cmd_rx) = mpsc::channel();

        let connection = UciConnection::new();
        let output = connection.output_sender();

        let config = SearchConfig::default();
        let engine = Engine::new(&config);

        let worker = EngineWorker::new(engine, cmd_rx, output.clone());
        let worker_handle = thread::spawn(move || worker.run());

        Self {
            config,
            cmd_tx,
            output,
            connection,
            worker_handle,
        }
    }

    /// Runs the UCI protocol loop until quit or end of input.
    pub fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        self.send_greeting();

        let decoder = Decoder::new();
        let stdin = std::io::stdin();

        for line in stdin.lock().lines() {
            let line = line?;
            debug!("Input: {:?}", line.trim());

            let input = decoder.decode(&line);
            if !self.handle(input) {
                break;
            }
        }

        self.shutdown();
        Ok(())
    }

    /// Handles a single UCI input. Returns false if we should quit.
    fn handle(&mut self, input: UciInput) -> bool {
        match input {
            UciInput::Uci => {
                let _ = self.output.send(UciOutput::IdName(format!(
                    "{} {}",
                    ENGINE_NAME, ENGINE_VERSION
                )));
                let _ = self
                    .output
                    .send(UciOutput::IdAuthor(ENGINE_AUTHOR.to_string()));
                let _ = self.config.to_uci(&self.output);
                let _ = self.output.send(UciOutput::UciOk);
            }
            UciInput::IsReady => {
                let _ = self.output.send(UciOutput::ReadyOk);
            }
            UciInput::SetOption { name, value } => {
                if let Err(e) = self.config.update_from_uci(&name, &value) {
                    debug!("Option setting failed: {}", e);
                } else {
                    debug!("Set option '{}' to '{}'", name, value);
                    let _ = self
                        .cmd_tx
                        .send(EngineCommand::Configure(Box::new(self.config.clone())));
                }
            }
            UciInput::UciNewGame => {
                let _ = self.cmd_tx.send(EngineCommand::NewGame);
            }
            UciInput::Position(board) => {
                let _ = self.cmd_tx.send(EngineCommand::SetPosition(board));
            }
            UciInput::Go(params) => {
                let _ = self.cmd_tx.send(EngineCommand::Go(params));
            }
            // Fixed-depth searches run to completion.
            UciInput::Stop => debug!("Ignoring stop, searches are not interruptible"),
            UciInput::Quit => return false,
            UciInput::Unknown(line) => debug!("Unknown command: {}", line),
        }
        true
    }

    fn send_greeting(&self) {
        let _ = self.output.send(UciOutput::Raw(format!(
            "{} {} by {}",
            ENGINE_NAME, ENGINE_VERSION, ENGINE_AUTHOR
        )));
    }

    /// Lets a running search finish, then flushes everything it printed.
    fn shutdown(self) {
        let _ = self.cmd_tx.send(EngineCommand::Quit);
        if self.worker_handle.join().is_err() {
            debug!("Engine worker panicked");
        }

        drop(self.output);
        self.connection.close();
    }
}
