use std::sync::Arc;

use services::GameHandle;

pub trait UiApp: Send + Sync {
    fn game(&self) -> GameHandle;
}

#[derive(Clone)]
pub struct AppContext {
    game: GameHandle,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self { game: app.game() }
    }

    #[must_use]
    pub fn game(&self) -> GameHandle {
        self.game.clone()
    }
}

// Provided by the composition root in `crates/app`.

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}
