use std::fmt;

use crate::model::ids::Level;

/// Color family the presentation should use for a status line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tone {
    Info,
    Neutral,
    Success,
    Danger,
    Celebrate,
}

/// What the status line says.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusMessage {
    PressStart,
    FindPairs { level: Level, pairs: usize },
    PairsRemaining { pairs: usize },
    PairFound,
    TryAgain,
    Hurry { seconds: u32 },
    TimeUp,
    LevelComplete { level: Level },
    Advancing { from: Level, to: Level },
    Restarting { level: Level },
    ProgressReset,
}

impl StatusMessage {
    #[must_use]
    pub fn tone(&self) -> Tone {
        match self {
            StatusMessage::PressStart | StatusMessage::PairsRemaining { .. } => Tone::Neutral,
            StatusMessage::FindPairs { .. } | StatusMessage::Restarting { .. } => Tone::Info,
            StatusMessage::PairFound
            | StatusMessage::LevelComplete { .. }
            | StatusMessage::ProgressReset => Tone::Success,
            StatusMessage::Advancing { .. } => Tone::Celebrate,
            StatusMessage::TryAgain | StatusMessage::Hurry { .. } | StatusMessage::TimeUp => {
                Tone::Danger
            }
        }
    }
}

fn pairs_word(pairs: usize) -> &'static str {
    if pairs == 1 { "pair" } else { "pairs" }
}

impl fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatusMessage::PressStart => write!(f, "Press Start to begin!"),
            StatusMessage::FindPairs { level, pairs } => {
                write!(f, "Level {level}: find {pairs} {}!", pairs_word(*pairs))
            }
            StatusMessage::PairsRemaining { pairs } => {
                write!(f, "Find {pairs} more {}", pairs_word(*pairs))
            }
            StatusMessage::PairFound => write!(f, "Pair found!"),
            StatusMessage::TryAgain => write!(f, "Try again!"),
            StatusMessage::Hurry { seconds } => write!(f, "Hurry! {seconds}s left!"),
            StatusMessage::TimeUp => write!(f, "Time is up! Try again."),
            StatusMessage::LevelComplete { level } => {
                write!(f, "Congratulations! Level {level} complete!")
            }
            StatusMessage::Advancing { from, to } => {
                write!(f, "Level {from} complete! Heading to level {to}...")
            }
            StatusMessage::Restarting { level } => write!(f, "Restarting level {level}..."),
            StatusMessage::ProgressReset => write!(f, "Progress reset."),
        }
    }
}

/// Status line shown above the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Status {
    message: StatusMessage,
    tone: Tone,
}

impl Status {
    #[must_use]
    pub fn new(message: StatusMessage) -> Self {
        Self {
            message,
            tone: message.tone(),
        }
    }

    #[must_use]
    pub fn message(&self) -> StatusMessage {
        self.message
    }

    #[must_use]
    pub fn tone(&self) -> Tone {
        self.tone
    }
}

impl From<StatusMessage> for Status {
    fn from(message: StatusMessage) -> Self {
        Self::new(message)
    }
}
