use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum LevelError {
    #[error("level must be >= 1")]
    Zero,

    #[error("failed to parse level from {raw:?}")]
    Parse { raw: String },
}

/// A game level, starting at 1.
///
/// Level `n` deals `n + 1` pairs, capped by the size of the card pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Level(u32);

impl Level {
    pub const FIRST: Level = Level(1);

    /// Creates a new `Level`
    ///
    /// # Errors
    ///
    /// Returns `LevelError::Zero` for `0`.
    pub fn new(value: u32) -> Result<Self, LevelError> {
        if value == 0 {
            return Err(LevelError::Zero);
        }
        Ok(Self(value))
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn next(&self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Number of pairs dealt at this level for a pool of `pool_size` faces.
    #[must_use]
    pub fn pair_count(&self, pool_size: usize) -> usize {
        let wanted = usize::try_from(self.0).unwrap_or(usize::MAX).saturating_add(1);
        wanted.min(pool_size)
    }
}

impl Default for Level {
    fn default() -> Self {
        Self::FIRST
    }
}

impl TryFrom<u32> for Level {
    type Error = LevelError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Level> for u32 {
    fn from(level: Level) -> Self {
        level.0
    }
}

/// Identity shared by exactly two cards of a deal: the index of their face in the pool.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PairId(u32);

impl PairId {
    /// Creates a new `PairId`
    #[must_use]
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying u32 value
    #[must_use]
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Debug for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Level({})", self.0)
    }
}

impl fmt::Debug for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PairId({})", self.0)
    }
}

// ─── Display Implementations ───────────────────────────────────────────────────

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Display for PairId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ─── FromStr Implementations ───────────────────────────────────────────────────

impl FromStr for Level {
    type Err = LevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value = s.trim().parse::<u32>().map_err(|_| LevelError::Parse {
            raw: s.to_string(),
        })?;
        Self::new(value)
    }
}

// ─── Tests ─────────────────────────────────────────────────────────────────────
