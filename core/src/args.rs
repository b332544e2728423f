use std::path::PathBuf;

use clap::{Parser, Subcommand};
use search::MAX_DEPTH;
use utils::START_FEN;

#[derive(Parser, Debug)]
#[command(name = "Lodestar")]
#[command(author = "Jørgen Hanssen")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Minimax chess move search with a UCI front end")]
pub struct Args {
    /// Write logs to a file. In UCI mode this is the only place logs go.
    #[arg(short, long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Debug-level logging.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Speak UCI over stdin/stdout (the default).
    Uci,

    /// Rank the legal moves of a position.
    Analyze {
        #[arg(long, default_value = START_FEN)]
        fen: String,

        #[arg(short, long, default_value_t = 3, value_parser = depth_parser())]
        depth: u8,

        /// Number of ranked moves to print.
        #[arg(short, long, default_value_t = 5)]
        count: usize,

        /// Root search threads, 0 for one per CPU.
        #[arg(short, long, default_value_t = 1)]
        threads: usize,
    },

    /// Print the best move of a position.
    Best {
        #[arg(long, default_value = START_FEN)]
        fen: String,

        #[arg(short, long, default_value_t = 3, value_parser = depth_parser())]
        depth: u8,

        /// Root search threads, 0 for one per CPU.
        #[arg(short, long, default_value_t = 1)]
        threads: usize,
    },

    /// Print the static evaluation of a position.
    Eval {
        #[arg(long, default_value = START_FEN)]
        fen: String,
    },

    /// Search a fixed suite of positions and report throughput.
    Bench {
        #[arg(short, long, default_value_t = 4, value_parser = depth_parser())]
        depth: u8,

        /// Root search threads, 0 for one per CPU.
        #[arg(short, long, default_value_t = 1)]
        threads: usize,
    },
}

fn depth_parser() -> clap::builder::RangedI64ValueParser<u8> {
    clap::value_parser!(u8).range(1..=MAX_DEPTH as i64)
}

/// `0` means one thread per logical CPU.
pub fn resolve_threads(threads: usize) -> usize {
    if threads == 0 {
        num_cpus::get()
    } else {
        threads
    }
}
