use std::sync::Arc;

use storage::repository::Storage;

use crate::Clock;
use crate::error::AppServicesError;
use crate::game::{GameConfig, GameHandle, GameLoop};
use crate::progress_service::ProgressStore;

/// Assembles the progress store and the running game loop.
#[derive(Clone)]
pub struct AppServices {
    progress: ProgressStore,
    game: GameHandle,
}

impl AppServices {
    /// Build services backed by `SQLite` storage.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if storage initialization fails.
    pub async fn new_sqlite(
        db_url: &str,
        clock: Clock,
        config: GameConfig,
    ) -> Result<Self, AppServicesError> {
        let storage = Storage::sqlite(db_url).await?;
        Ok(Self::from_storage(&storage, clock, config).await)
    }

    /// Build services over a process-local store. Nothing survives a restart.
    pub async fn in_memory(clock: Clock, config: GameConfig) -> Self {
        Self::from_storage(&Storage::in_memory(), clock, config).await
    }

    async fn from_storage(storage: &Storage, clock: Clock, config: GameConfig) -> Self {
        let progress = ProgressStore::new(clock, Arc::clone(&storage.kv));
        let game = GameLoop::spawn(config, progress.clone()).await;
        Self { progress, game }
    }

    #[must_use]
    pub fn progress(&self) -> ProgressStore {
        self.progress.clone()
    }

    #[must_use]
    pub fn game(&self) -> GameHandle {
        self.game.clone()
    }
}
