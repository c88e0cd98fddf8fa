use std::collections::BTreeMap;

use chrono::{DateTime, Utc};

use crate::model::ids::Level;

/// Best time remaining ever achieved on a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    level: Level,
    best_time_remaining: u32,
    achieved_at: DateTime<Utc>,
}

impl Record {
    #[must_use]
    pub fn new(level: Level, best_time_remaining: u32, achieved_at: DateTime<Utc>) -> Self {
        Self {
            level,
            best_time_remaining,
            achieved_at,
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn best_time_remaining(&self) -> u32 {
        self.best_time_remaining
    }

    #[must_use]
    pub fn achieved_at(&self) -> DateTime<Utc> {
        self.achieved_at
    }

    /// Whether `time_remaining` should replace this record.
    ///
    /// Ties keep the existing record so the first achievement date survives.
    #[must_use]
    pub fn is_beaten_by(&self, time_remaining: u32) -> bool {
        time_remaining > self.best_time_remaining
    }
}

/// Durable progress: current level, failed attempts, and per-level records.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ProgressSnapshot {
    pub level: Level,
    pub attempts: u32,
    pub records: BTreeMap<Level, Record>,
}

impl ProgressSnapshot {
    #[must_use]
    pub fn best_for(&self, level: Level) -> Option<&Record> {
        self.records.get(&level)
    }

    /// Store a record for `level` if it beats the current one (or none exists).
    ///
    /// Returns the stored record when it was written.
    pub fn record_if_best(
        &mut self,
        level: Level,
        time_remaining: u32,
        achieved_at: DateTime<Utc>,
    ) -> Option<&Record> {
        let beaten = self
            .records
            .get(&level)
            .is_none_or(|current| current.is_beaten_by(time_remaining));
        if !beaten {
            return None;
        }
        self.records
            .insert(level, Record::new(level, time_remaining, achieved_at));
        self.records.get(&level)
    }

    /// Records ordered by level.
    pub fn records(&self) -> impl Iterator<Item = &Record> {
        self.records.values()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;
    use chrono::Duration;

    fn level(n: u32) -> Level {
        Level::new(n).unwrap()
    }

    #[test]
    fn default_snapshot_starts_at_level_one() {
        let snapshot = ProgressSnapshot::default();
        assert_eq!(snapshot.level, Level::FIRST);
        assert_eq!(snapshot.attempts, 0);
        assert!(snapshot.records.is_empty());
    }

    #[test]
    fn lower_time_keeps_existing_record() {
        let mut snapshot = ProgressSnapshot::default();
        assert!(snapshot.record_if_best(level(3), 40, fixed_now()).is_some());
        assert!(snapshot.record_if_best(level(3), 30, fixed_now()).is_none());
        assert_eq!(snapshot.best_for(level(3)).unwrap().best_time_remaining(), 40);
    }

    #[test]
    fn higher_time_replaces_record() {
        let mut snapshot = ProgressSnapshot::default();
        snapshot.record_if_best(level(3), 40, fixed_now());
        let later = fixed_now() + Duration::days(2);
        let stored = snapshot.record_if_best(level(3), 45, later).cloned().unwrap();
        assert_eq!(stored.best_time_remaining(), 45);
        assert_eq!(stored.achieved_at(), later);
    }

    #[test]
    fn tie_keeps_first_achievement_date() {
        let mut snapshot = ProgressSnapshot::default();
        snapshot.record_if_best(level(2), 25, fixed_now());
        let later = fixed_now() + Duration::hours(1);
        assert!(snapshot.record_if_best(level(2), 25, later).is_none());
        assert_eq!(snapshot.best_for(level(2)).unwrap().achieved_at(), fixed_now());
    }

    #[test]
    fn records_iterate_in_level_order() {
        let mut snapshot = ProgressSnapshot::default();
        snapshot.record_if_best(level(4), 10, fixed_now());
        snapshot.record_if_best(level(1), 50, fixed_now());
        snapshot.record_if_best(level(2), 30, fixed_now());
        let levels: Vec<u32> = snapshot.records().map(|r| r.level().value()).collect();
        assert_eq!(levels, vec![1, 2, 4]);
    }
}
