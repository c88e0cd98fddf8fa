use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::warn;

use memory_core::Clock;
use memory_core::model::{Level, ProgressSnapshot, Record};
use storage::repository::KeyValueStore;

use crate::error::ProgressError;

pub const LEVEL_KEY: &str = "memory_match.level";
pub const ATTEMPTS_KEY: &str = "memory_match.attempts";
pub const RECORDS_KEY: &str = "memory_match.records";

/// Persisted shape of a record inside the records blob.
///
/// Keeps the JSON layout out of the domain `Record`.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredRecord {
    level: u32,
    best_time_remaining: u32,
    achieved_at: DateTime<Utc>,
}

impl StoredRecord {
    fn from_record(record: &Record) -> Self {
        Self {
            level: record.level().value(),
            best_time_remaining: record.best_time_remaining(),
            achieved_at: record.achieved_at(),
        }
    }

    fn into_record(self) -> Option<Record> {
        let level = Level::new(self.level).ok()?;
        Some(Record::new(level, self.best_time_remaining, self.achieved_at))
    }
}

/// Persists level, attempts, and per-level best times in a key-value store.
#[derive(Clone)]
pub struct ProgressStore {
    clock: Clock,
    kv: Arc<dyn KeyValueStore>,
}

impl ProgressStore {
    #[must_use]
    pub fn new(clock: Clock, kv: Arc<dyn KeyValueStore>) -> Self {
        Self { clock, kv }
    }

    #[must_use]
    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Load persisted progress, falling back to defaults field by field.
    ///
    /// Never fails: unreadable or malformed values are logged and replaced
    /// by their defaults.
    pub async fn load(&self) -> ProgressSnapshot {
        let level = match self.read(LEVEL_KEY).await {
            Some(raw) => raw.parse::<Level>().unwrap_or_else(|err| {
                warn!(%err, "discarding malformed saved level");
                Level::FIRST
            }),
            None => Level::FIRST,
        };

        let attempts = match self.read(ATTEMPTS_KEY).await {
            Some(raw) => raw.trim().parse::<u32>().unwrap_or_else(|err| {
                warn!(%err, raw = %raw, "discarding malformed saved attempts");
                0
            }),
            None => 0,
        };

        let records = match self.read(RECORDS_KEY).await {
            Some(raw) => decode_records(&raw),
            None => BTreeMap::new(),
        };

        ProgressSnapshot {
            level,
            attempts,
            records,
        }
    }

    /// Write the current level and attempt count. Records are left untouched.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if either write fails.
    pub async fn save(&self, level: Level, attempts: u32) -> Result<(), ProgressError> {
        self.kv.set(LEVEL_KEY, &level.value().to_string()).await?;
        self.kv.set(ATTEMPTS_KEY, &attempts.to_string()).await?;
        Ok(())
    }

    /// Store a record for `level` if `time_remaining` beats the persisted one.
    ///
    /// Returns the written record, or `None` when the stored one stands.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError` if the blob cannot be read, encoded, or written.
    pub async fn record_if_best(
        &self,
        level: Level,
        time_remaining: u32,
    ) -> Result<Option<Record>, ProgressError> {
        let records = match self.kv.get(RECORDS_KEY).await? {
            Some(raw) => decode_records(&raw),
            None => BTreeMap::new(),
        };

        let mut snapshot = ProgressSnapshot {
            records,
            ..ProgressSnapshot::default()
        };
        let Some(written) = snapshot
            .record_if_best(level, time_remaining, self.clock.now())
            .cloned()
        else {
            return Ok(None);
        };

        let blob = encode_records(&snapshot.records)?;
        self.kv.set(RECORDS_KEY, &blob).await?;
        Ok(Some(written))
    }

    /// Clear level, attempts, and every record.
    ///
    /// # Errors
    ///
    /// Returns `ProgressError::Storage` if a key cannot be removed.
    pub async fn reset(&self) -> Result<(), ProgressError> {
        self.kv.remove(LEVEL_KEY).await?;
        self.kv.remove(ATTEMPTS_KEY).await?;
        self.kv.remove(RECORDS_KEY).await?;
        Ok(())
    }

    async fn read(&self, key: &str) -> Option<String> {
        match self.kv.get(key).await {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, key, "failed to read progress");
                None
            }
        }
    }
}

fn encode_records(records: &BTreeMap<Level, Record>) -> Result<String, serde_json::Error> {
    let map: BTreeMap<String, StoredRecord> = records
        .iter()
        .map(|(level, record)| (level.to_string(), StoredRecord::from_record(record)))
        .collect();
    serde_json::to_string(&map)
}

/// Decode the records blob, keeping every entry that parses on its own.
fn decode_records(raw: &str) -> BTreeMap<Level, Record> {
    let entries: Map<String, Value> = match serde_json::from_str(raw) {
        Ok(entries) => entries,
        Err(err) => {
            warn!(%err, "discarding malformed records blob");
            return BTreeMap::new();
        }
    };

    let mut records = BTreeMap::new();
    for (key, value) in entries {
        let Ok(level) = key.parse::<Level>() else {
            warn!(key = %key, "discarding record with malformed level key");
            continue;
        };
        let record = serde_json::from_value::<StoredRecord>(value)
            .ok()
            .and_then(StoredRecord::into_record);
        match record {
            Some(record) if record.level() == level => {
                records.insert(level, record);
            }
            _ => warn!(key = %key, "discarding malformed record entry"),
        }
    }
    records
}
