use memory_core::model::{Level, Record, Status};

/// How the last attempt ended, awaiting the player's choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Won {
        level: Level,
        time_remaining: u32,
        next_level: Level,
    },
    Lost {
        level: Level,
    },
}

/// One board position as the presentation should draw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardView {
    /// Face glyph, only present while the card is face up or matched.
    pub face: Option<String>,
    pub face_up: bool,
    pub matched: bool,
}

/// Read-only snapshot of everything the presentation renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameView {
    pub level: Level,
    pub seconds_remaining: u32,
    pub attempts: u32,
    pub pairs_found: usize,
    pub pairs_total: usize,
    pub status: Status,
    pub cards: Vec<CardView>,
    pub is_running: bool,
    /// Running at or under the configured hurry threshold.
    pub hurry: bool,
    pub input_locked: bool,
    pub menu_open: bool,
    pub outcome: Option<Outcome>,
    pub current_record: Option<Record>,
    pub records: Vec<Record>,
}
