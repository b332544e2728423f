use chess::Board;
use log::warn;
use utils::{parse_fen, parse_uci_move, Position};

use super::commands::{GoParams, UciInput};

pub struct Decoder;

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl Decoder {
    pub fn new() -> Self {
        Self
    }

    pub fn decode(&self, input: &str) -> UciInput {
        let input = input.trim();
        let command = input.split_whitespace().next().unwrap_or("");

        match command {
            "uci" => UciInput::Uci,
            "isready" => UciInput::IsReady,
            "ucinewgame" => UciInput::UciNewGame,
            "stop" => UciInput::Stop,
            "quit" => UciInput::Quit,

            "position" => match self.decode_position(input) {
                Ok(board) => UciInput::Position(Box::new(board)),
                Err(e) => {
                    warn!("Rejected position command: {}", e);
                    UciInput::Unknown(input.to_string())
                }
            },
            "go" => UciInput::Go(self.decode_go(input)),
            "setoption" => self.decode_setoption(input),

            _ => UciInput::Unknown(input.to_string()),
        }
    }

    /// `position startpos|fen <fen> [moves <move>...]`
    fn decode_position(&self, input: &str) -> Result<Board, String> {
        let (setup, moves) = input.split_once(" moves").unwrap_or((input, ""));
        let mut setup = setup.split_whitespace().skip(1);

        let mut board = match setup.next() {
            Some("startpos") => Board::default(),
            Some("fen") => parse_fen(&setup.collect::<Vec<_>>().join(" "))?,
            other => {
                return Err(format!(
                    "Expected 'startpos' or 'fen', got '{}'",
                    other.unwrap_or("")
                ))
            }
        };

        for text in moves.split_whitespace() {
            let mv = parse_uci_move(&board, text)?;
            board = board.apply(mv);
        }

        Ok(board)
    }

    /// `setoption name <name> [value <value>]`
    fn decode_setoption(&self, input: &str) -> UciInput {
        let Some(rest) = input.strip_prefix("setoption name ") else {
            warn!("Malformed setoption: {}", input);
            return UciInput::Unknown(input.to_string());
        };

        let (name, value) = match rest.split_once(" value ") {
            Some((n, v)) => (n.trim(), v.trim()),
            None => (rest.trim(), ""),
        };

        UciInput::SetOption {
            name: name.to_string(),
            value: value.to_string(),
        }
    }

    fn decode_go(&self, input: &str) -> GoParams {
        GoParams {
            depth: extract_numeric_param(input, "depth")
                .map(|d| u8::try_from(d).unwrap_or(u8::MAX)),
        }
    }
}

fn extract_numeric_param(input: &str, param: &str) -> Option<u64> {
    input
        .split_whitespace()
        .collect::<Vec<&str>>()
        .windows(2)
        .find(|w| w[0] == param)
        .and_then(|w| w[1].parse().ok())
}
