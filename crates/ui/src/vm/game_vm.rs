use memory_core::model::{Level, Record, Status, Tone};
use services::{CardView, GameCommand, GameView, Outcome};

use crate::vm::time_fmt::{format_countdown, format_date};

const CARD_BACK: &str = "?";
const MAX_COLUMNS: usize = 6;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardSlotVm {
    pub index: usize,
    pub label: String,
    pub class: &'static str,
    pub disabled: bool,
}

impl CardSlotVm {
    fn new(index: usize, card: &CardView, input_locked: bool) -> Self {
        let class = if card.matched {
            "card matched"
        } else if card.face_up {
            "card face-up"
        } else {
            "card face-down"
        };
        Self {
            index,
            label: card.face.clone().unwrap_or_else(|| CARD_BACK.to_string()),
            class,
            disabled: input_locked || card.face_up || card.matched,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoardVm {
    pub level_label: String,
    pub timer_label: String,
    pub timer_urgent: bool,
    pub attempts_label: String,
    pub pairs_label: String,
    pub record_label: Option<String>,
    pub status_text: String,
    pub status_class: &'static str,
    pub columns: usize,
    pub cards: Vec<CardSlotVm>,
}

impl From<&GameView> for BoardVm {
    fn from(view: &GameView) -> Self {
        Self {
            level_label: level_label(view.level),
            timer_label: format_countdown(view.seconds_remaining),
            timer_urgent: view.hurry,
            attempts_label: attempts_label(view.attempts),
            pairs_label: format!("{}/{} pairs", view.pairs_found, view.pairs_total),
            record_label: best_label(view),
            status_text: view.status.message().to_string(),
            status_class: status_class(view.status),
            columns: columns_for(view.cards.len()),
            cards: view
                .cards
                .iter()
                .enumerate()
                .map(|(index, card)| CardSlotVm::new(index, card, view.input_locked))
                .collect(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MenuVm {
    pub level_label: String,
    pub attempts_label: String,
    pub continue_label: String,
    pub best_label: Option<String>,
    pub status_text: String,
    pub status_class: &'static str,
}

impl From<&GameView> for MenuVm {
    fn from(view: &GameView) -> Self {
        let fresh = view.level == Level::FIRST && view.attempts == 0 && view.records.is_empty();
        let continue_label = if fresh {
            "Start".to_string()
        } else {
            format!("Continue ({})", level_label(view.level))
        };
        Self {
            level_label: level_label(view.level),
            attempts_label: attempts_label(view.attempts),
            continue_label,
            best_label: best_label(view),
            status_text: view.status.message().to_string(),
            status_class: status_class(view.status),
        }
    }
}

/// End-of-level dialog with the two choices the player gets.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OutcomeVm {
    pub title: String,
    pub body: String,
    pub primary_label: &'static str,
    pub primary: GameCommand,
    pub secondary_label: &'static str,
    pub secondary: GameCommand,
    pub celebrate: bool,
}

impl From<Outcome> for OutcomeVm {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won {
                level,
                time_remaining,
                next_level,
            } => Self {
                title: format!("{} complete!", level_label(level)),
                body: format!(
                    "Finished with {time_remaining}s left. {} is next.",
                    level_label(next_level)
                ),
                primary_label: "Next level",
                primary: GameCommand::AcknowledgeWin,
                secondary_label: "Menu",
                secondary: GameCommand::OpenMenu,
                celebrate: true,
            },
            Outcome::Lost { level } => Self {
                title: "Out of time".to_string(),
                body: format!("{} was not finished.", level_label(level)),
                primary_label: "Try again",
                primary: GameCommand::Retry,
                secondary_label: "Menu",
                secondary: GameCommand::OpenMenu,
                celebrate: false,
            },
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordRowVm {
    pub level_label: String,
    pub time_label: String,
    pub achieved_on: String,
}

impl From<&Record> for RecordRowVm {
    fn from(record: &Record) -> Self {
        Self {
            level_label: level_label(record.level()),
            time_label: format!("{}s left", record.best_time_remaining()),
            achieved_on: format_date(record.achieved_at()),
        }
    }
}

#[must_use]
pub fn map_records(records: &[Record]) -> Vec<RecordRowVm> {
    records.iter().map(RecordRowVm::from).collect()
}

#[must_use]
pub fn status_class(status: Status) -> &'static str {
    match status.tone() {
        Tone::Info => "status status-info",
        Tone::Neutral => "status status-neutral",
        Tone::Success => "status status-success",
        Tone::Danger => "status status-danger",
        Tone::Celebrate => "status status-celebrate",
    }
}

/// Roughly square grid, capped so large boards stay readable.
fn columns_for(cards: usize) -> usize {
    let mut columns = 2;
    while columns < MAX_COLUMNS && columns * columns < cards {
        columns += 1;
    }
    columns
}

fn best_label(view: &GameView) -> Option<String> {
    view.current_record
        .as_ref()
        .map(|record| format!("Best: {}s left", record.best_time_remaining()))
}

fn level_label(level: Level) -> String {
    format!("Level {level}")
}

fn attempts_label(attempts: u32) -> String {
    if attempts == 1 {
        "1 failed attempt".to_string()
    } else {
        format!("{attempts} failed attempts")
    }
}
