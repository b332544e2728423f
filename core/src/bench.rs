use std::sync::mpsc::{self, Receiver, Sender};
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use evaluation::Eval;
use search::{Engine, SearchConfig};
use uci::commands::{GoParams, Info};
use uci::UciOutput;
use utils::{parse_fen, Move};

/// Perft positions from https://github.com/AndyGrant/Ethereal/blob/master/src/perft/standard.epd
const BENCH_POSITIONS: &[&str] = &[
    "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1",
    "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1",
    "n1n5/PPPk4/8/8/8/8/4Kppp/5N1N b - - 0 1",
    "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8 w - - 0 1",
    "rnbqkb1r/ppppp1pp/7n/4Pp2/8/8/PPPP1PPP/RNBQKBNR w KQkq f6 0 3",
];

pub fn run(depth: u8, threads: usize) -> Result<(), Box<dyn std::error::Error>> {
    let mut config = SearchConfig::default();
    config.threads.value = threads;

    let benchmark = Benchmark::new(Engine::new(&config), depth);
    benchmark.run()
}

struct Benchmark {
    depth: u8,
    engine: Engine,
}

impl Benchmark {
    fn new(engine: Engine, depth: u8) -> Self {
        Self { depth, engine }
    }

    fn run(mut self) -> Result<(), Box<dyn std::error::Error>> {
        println!("Running benchmark: depth {}\n", self.depth);

        let mut total = Totals::default();
        for fen in BENCH_POSITIONS {
            self.engine.set_position(parse_fen(fen)?);
            println!("{}", fen);

            let (tx, rx) = mpsc::channel();
            let printer = InfoPrinter::spawn(rx);
            let result = self.execute_search(tx);
            let last_info = printer.join();

            total.add(&result, last_info.as_ref());
            Self::print_result(&result);
            println!();
        }

        total.print();
        Ok(())
    }

    fn execute_search(&mut self, tx: Sender<UciOutput>) -> SearchResult {
        let params = GoParams {
            depth: Some(self.depth),
        };

        let start = Instant::now();
        let result = self.engine.search(&params, Some(&tx));
        let elapsed = start.elapsed();

        SearchResult { result, elapsed }
    }

    fn print_result(search_result: &SearchResult) {
        match search_result.result {
            Some((best_move, score)) => println!("Best move: {} ({:+})", best_move, score),
            None => println!("No legal moves"),
        }
    }
}

struct SearchResult {
    result: Option<(Move, Eval)>,
    elapsed: Duration,
}

#[derive(Default)]
struct Totals {
    nodes: u64,
    elapsed: Duration,
}

impl Totals {
    fn add(&mut self, result: &SearchResult, last_info: Option<&Info>) {
        self.nodes += last_info.map_or(0, |info| info.nodes);
        self.elapsed += result.elapsed;
    }

    fn print(&self) {
        let millis = self.elapsed.as_millis().max(1) as u64;

        println!("=== Benchmark Summary ===");
        println!("Nodes: {}", self.nodes);
        println!("Time: {} ms", millis);
        println!("NPS: {}", self.nodes * 1000 / millis);
    }
}

struct InfoPrinter {
    handle: JoinHandle<Option<Info>>,
}

impl InfoPrinter {
    fn spawn(rx: Receiver<UciOutput>) -> Self {
        let handle = thread::spawn(move || {
            let mut last_info = None;

            for output in rx {
                if let UciOutput::Info(info) = output {
                    Self::print_info(&info);
                    last_info = Some(info);
                }
            }

            last_info
        });

        Self { handle }
    }

    fn join(self) -> Option<Info> {
        self.handle.join().unwrap_or(None)
    }

    fn print_info(info: &Info) {
        println!(
            "info depth {} score cp {} nodes {} nps {} time {} pv {}",
            info.depth,
            info.score,
            info.nodes,
            info.nodes_per_second,
            info.time,
            info.pv.join(" ")
        );
    }
}
