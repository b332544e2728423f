use std::sync::mpsc::{channel, Receiver, Sender};
use std::thread::{self, JoinHandle};

use log::debug;

use super::commands::UciOutput;
use super::encoder::Encoder;

/// Owns the stdout side of the protocol: outputs sent through [`UciConnection::output_sender`]
/// are encoded and printed, in order, by a dedicated writer thread.
pub struct UciConnection {
    output_tx: Sender<UciOutput>,
    writer: JoinHandle<()>,
}

impl Default for UciConnection {
    fn default() -> Self {
        Self::new()
    }
}

impl UciConnection {
    pub fn new() -> Self {
        let (output_tx, output_rx) = channel();
        let writer = Self::spawn_output_handler(output_rx);

        Self { output_tx, writer }
    }

    pub fn output_sender(&self) -> Sender<UciOutput> {
        self.output_tx.clone()
    }

    /// Waits until everything sent so far is printed. Every other sender must be dropped
    /// first, otherwise this blocks forever.
    pub fn close(self) {
        drop(self.output_tx);
        if self.writer.join().is_err() {
            debug!("UCI writer thread panicked");
        }
    }

    fn spawn_output_handler(output_rx: Receiver<UciOutput>) -> JoinHandle<()> {
        thread::spawn(move || {
            let encoder = Encoder {};

            while let Ok(output) = output_rx.recv() {
                let out_line = encoder.encode(&output);
                debug!("Output: {:?}", out_line);
                println!("{}", out_line);
            }
        })
    }
}
