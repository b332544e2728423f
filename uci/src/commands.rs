use chess::Board;

#[derive(Debug)]
pub enum UciInput {
    Uci,
    IsReady,

    UciNewGame,
    Position(Box<Board>),
    Go(GoParams),

    Stop,
    Quit,
    SetOption {
        name: String,
        value: String,
    },
    Unknown(String),
}

#[derive(Debug)]
pub enum UciOutput {
    IdName(String),
    IdAuthor(String),
    UciOk,
    ReadyOk,
    BestMove(String),
    Info(Info),
    Option(String),
    Raw(String),
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Info {
    pub depth: u8,
    pub multi_pv: usize,
    pub nodes: u64,
    pub nodes_per_second: u64,
    pub time: u64,
    pub pv: Vec<String>,
    /// Centipawns from the side to move's point of view.
    pub score: i32,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GoParams {
    // Search depth in plies. Falls back to the configured depth when absent.
    pub depth: Option<u8>,
}
