use std::time::Duration;

/// Seconds on the countdown at the start of every level.
pub const LEVEL_DURATION_SECS: u32 = 60;

/// Remaining seconds at or below which the status switches to an urgency message.
pub const HURRY_THRESHOLD_SECS: u32 = 10;

/// Timing knobs for a game.
///
/// `Default` gives the production values; tests shrink the delays.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameRules {
    level_duration_secs: u32,
    hurry_threshold_secs: u32,
    tick_interval: Duration,
    mismatch_delay: Duration,
    advance_delay: Duration,
}

impl Default for GameRules {
    fn default() -> Self {
        Self {
            level_duration_secs: LEVEL_DURATION_SECS,
            hurry_threshold_secs: HURRY_THRESHOLD_SECS,
            tick_interval: Duration::from_secs(1),
            mismatch_delay: Duration::from_secs(1),
            advance_delay: Duration::from_secs(1),
        }
    }
}

impl GameRules {
    #[must_use]
    pub fn with_level_duration_secs(mut self, secs: u32) -> Self {
        self.level_duration_secs = secs;
        self
    }

    #[must_use]
    pub fn with_hurry_threshold_secs(mut self, secs: u32) -> Self {
        self.hurry_threshold_secs = secs;
        self
    }

    #[must_use]
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.tick_interval = interval;
        self
    }

    #[must_use]
    pub fn with_mismatch_delay(mut self, delay: Duration) -> Self {
        self.mismatch_delay = delay;
        self
    }

    #[must_use]
    pub fn with_advance_delay(mut self, delay: Duration) -> Self {
        self.advance_delay = delay;
        self
    }

    #[must_use]
    pub fn level_duration_secs(&self) -> u32 {
        self.level_duration_secs
    }

    #[must_use]
    pub fn hurry_threshold_secs(&self) -> u32 {
        self.hurry_threshold_secs
    }

    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    /// How long two mismatched faces stay visible before flipping back.
    #[must_use]
    pub fn mismatch_delay(&self) -> Duration {
        self.mismatch_delay
    }

    /// Pause between acknowledging a win and dealing the next level.
    #[must_use]
    pub fn advance_delay(&self) -> Duration {
        self.advance_delay
    }
}
