//! Card pool and dealing.
//!
//! A level draws the first `min(level + 1, pool size)` faces from the pool,
//! emits two cards per face, and shuffles them with the caller's rng.

use rand::Rng;
use rand::seq::SliceRandom;
use thiserror::Error;

use crate::model::{Card, Level, PairId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PoolError {
    #[error("card pool must contain at least one face")]
    Empty,
}

const DEFAULT_FACES: [&str; 17] = [
    "🐉", "⚔️", "🛡️", "🏰", "🔮", "🌙", "🔥", "⚡", "🗡️", "👑", "🦅", "🐺", "🏹", "💀", "🌋", "🐙",
    "🗿",
];

/// Ordered list of faces cards can show. A card's `PairId` indexes into it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPool {
    faces: Vec<String>,
}

impl CardPool {
    /// Build a pool from the given faces.
    ///
    /// # Errors
    ///
    /// Returns `PoolError::Empty` if `faces` is empty.
    pub fn new<I, S>(faces: I) -> Result<Self, PoolError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let faces: Vec<String> = faces.into_iter().map(Into::into).collect();
        if faces.is_empty() {
            return Err(PoolError::Empty);
        }
        Ok(Self { faces })
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }

    #[must_use]
    pub fn face(&self, pair: PairId) -> Option<&str> {
        let idx = usize::try_from(pair.value()).ok()?;
        self.faces.get(idx).map(String::as_str)
    }

    /// Number of pairs dealt at `level`.
    #[must_use]
    pub fn pairs_for(&self, level: Level) -> usize {
        level.pair_count(self.faces.len())
    }

    /// Deal a freshly shuffled, face-down set of cards for `level`.
    pub fn deal<R: Rng + ?Sized>(&self, level: Level, rng: &mut R) -> Vec<Card> {
        let pairs = self.pairs_for(level);
        let mut cards: Vec<Card> = (0..pairs)
            .filter_map(|idx| u32::try_from(idx).ok())
            .flat_map(|idx| {
                let pair = PairId::new(idx);
                [Card::new(pair), Card::new(pair)]
            })
            .collect();
        cards.shuffle(rng);
        cards
    }
}

impl Default for CardPool {
    fn default() -> Self {
        Self {
            faces: DEFAULT_FACES.iter().map(|face| (*face).to_string()).collect(),
        }
    }
}
