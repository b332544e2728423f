mod analyze;
mod args;
mod bench;
mod lodestar;
mod worker;

use std::error::Error;
use std::fs::File;

use args::{resolve_threads, Args, Command};
use clap::Parser;
use lodestar::Lodestar;
use log::LevelFilter;
use simplelog::{Config, SimpleLogger, WriteLogger};

fn main() -> Result<(), Box<dyn Error>> {
    let args = Args::parse();
    let command = args.command.clone().unwrap_or(Command::Uci);

    init_logging(&args, matches!(command, Command::Uci))?;

    match command {
        Command::Uci => Lodestar::new().run(),
        Command::Analyze {
            fen,
            depth,
            count,
            threads,
        } => analyze::rank(&fen, depth, count, resolve_threads(threads)),
        Command::Best {
            fen,
            depth,
            threads,
        } => analyze::best(&fen, depth, resolve_threads(threads)),
        Command::Eval { fen } => analyze::static_eval(&fen),
        Command::Bench { depth, threads } => bench::run(depth, resolve_threads(threads)),
    }
}

/// Stdout belongs to the protocol in UCI mode, so logs only go to `--log-file` there. The
/// other commands log to the terminal unless a file is given.
fn init_logging(args: &Args, uci_mode: bool) -> Result<(), Box<dyn Error>> {
    let level = if args.verbose || uci_mode {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    match &args.log_file {
        Some(log_file) => WriteLogger::init(level, Config::default(), File::create(log_file)?)?,
        None if uci_mode => {}
        None => SimpleLogger::init(level, Config::default())?,
    }

    Ok(())
}
