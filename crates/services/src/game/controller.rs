use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info, warn};

use memory_core::GameRules;
use memory_core::deal::CardPool;
use memory_core::model::{
    FlipOutcome, Level, Phase, ProgressSnapshot, Session, StatusMessage, TickOutcome,
};

use super::scheduler::{Scheduler, TimerEvent, TimerFired};
use super::view::{CardView, GameView, Outcome};
use crate::progress_service::ProgressStore;

/// User intents coming from the presentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameCommand {
    /// Menu "continue": next level after an unacknowledged win, otherwise (re)start the current level.
    Continue,
    Flip(usize),
    /// Play the next level after a win.
    AcknowledgeWin,
    /// Replay the current level.
    Retry,
    /// Back to level 1 with zero attempts. Records are kept.
    NewGame,
    OpenMenu,
    ResetProgress,
}

/// Static inputs for a controller: timing, faces, and an optional shuffle seed.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    rules: GameRules,
    pool: CardPool,
    seed: Option<u64>,
}

impl GameConfig {
    #[must_use]
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_pool(mut self, pool: CardPool) -> Self {
        self.pool = pool;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: Option<u64>) -> Self {
        self.seed = seed;
        self
    }

    #[must_use]
    pub fn rules(&self) -> &GameRules {
        &self.rules
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }
}

/// Owns the active session and drives it through start, play, win or loss, and advance.
///
/// Timers go through the `Scheduler`; each firing is checked against the
/// current epoch, which changes whenever a session starts or stops.
pub struct GameController {
    rules: GameRules,
    pool: CardPool,
    progress: ProgressStore,
    snapshot: ProgressSnapshot,
    session: Session,
    epoch: u64,
    rng: StdRng,
    scheduler: Box<dyn Scheduler>,
    menu_open: bool,
    outcome: Option<Outcome>,
}

impl GameController {
    /// Load saved progress and show the menu at the saved level.
    pub async fn launch(
        config: GameConfig,
        progress: ProgressStore,
        scheduler: Box<dyn Scheduler>,
    ) -> Self {
        let snapshot = progress.load().await;
        let rng = config.rng();
        let GameConfig { rules, pool, .. } = config;
        let session = Session::idle(snapshot.level, &rules, StatusMessage::PressStart);
        info!(
            level = snapshot.level.value(),
            attempts = snapshot.attempts,
            records = snapshot.records.len(),
            "progress loaded"
        );

        Self {
            rules,
            pool,
            progress,
            snapshot,
            session,
            epoch: 0,
            rng,
            scheduler,
            menu_open: true,
            outcome: None,
        }
    }

    #[must_use]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[must_use]
    pub fn snapshot(&self) -> &ProgressSnapshot {
        &self.snapshot
    }

    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    pub async fn handle(&mut self, command: GameCommand) {
        match command {
            GameCommand::Continue => self.continue_game().await,
            GameCommand::Flip(position) => self.flip(position).await,
            GameCommand::AcknowledgeWin => self.advance_level().await,
            GameCommand::Retry => self.retry_level(),
            GameCommand::NewGame => self.new_game().await,
            GameCommand::OpenMenu => self.open_menu(),
            GameCommand::ResetProgress => self.reset_progress().await,
        }
    }

    /// Apply a timer firing. Firings from an older epoch are dropped.
    pub async fn on_timer(&mut self, fired: TimerFired) {
        if fired.epoch != self.epoch {
            debug!(
                fired_epoch = fired.epoch,
                epoch = self.epoch,
                event = ?fired.event,
                "ignoring stale timer"
            );
            return;
        }
        match fired.event {
            TimerEvent::Tick => self.tick().await,
            TimerEvent::ResolveMismatch => {
                self.session.resolve_mismatch();
            }
            TimerEvent::AdvanceLevel => {
                if self.session.phase() == Phase::Idle {
                    self.start_level(self.snapshot.level, None);
                }
            }
        }
    }

    /// Deal `level` and start the countdown.
    pub fn start_level(&mut self, level: Level, status: Option<StatusMessage>) {
        self.stop_timers();
        let cards = self.pool.deal(level, &mut self.rng);
        self.session = Session::start(level, cards, &self.rules, status);
        self.snapshot.level = level;
        self.outcome = None;
        self.menu_open = false;
        self.scheduler
            .start_ticking(self.epoch, self.rules.tick_interval());
        info!(
            level = level.value(),
            pairs = self.session.total_pairs(),
            epoch = self.epoch,
            "level started"
        );
    }

    pub async fn continue_game(&mut self) {
        if self.session.phase() == Phase::Won {
            self.advance_level().await;
            return;
        }
        self.start_level(self.snapshot.level, None);
    }

    pub fn retry_level(&mut self) {
        let level = self.snapshot.level;
        self.start_level(level, Some(StatusMessage::Restarting { level }));
    }

    pub async fn new_game(&mut self) {
        self.snapshot.level = Level::FIRST;
        self.snapshot.attempts = 0;
        self.persist_progress().await;
        self.start_level(Level::FIRST, None);
    }

    pub async fn flip(&mut self, position: usize) {
        match self.session.flip(position) {
            FlipOutcome::Mismatched => self.scheduler.schedule_once(
                self.epoch,
                self.rules.mismatch_delay(),
                TimerEvent::ResolveMismatch,
            ),
            FlipOutcome::Matched => self.check_victory().await,
            FlipOutcome::Revealed | FlipOutcome::Ignored => {}
        }
    }

    pub async fn tick(&mut self) {
        if self.session.tick() != TickOutcome::TimedOut {
            return;
        }
        self.stop_timers();
        let level = self.session.level();
        self.snapshot.attempts = self.snapshot.attempts.saturating_add(1);
        self.outcome = Some(Outcome::Lost { level });
        info!(
            level = level.value(),
            attempts = self.snapshot.attempts,
            "level lost on timeout"
        );
        self.persist_progress().await;
    }

    async fn check_victory(&mut self) {
        let Some(victory) = self.session.check_victory() else {
            return;
        };
        self.stop_timers();
        let level = victory.level;
        let time_remaining = victory.time_remaining;
        self.outcome = Some(Outcome::Won {
            level,
            time_remaining,
            next_level: level.next(),
        });
        info!(level = level.value(), time_remaining, "level won");

        let now = self.progress.clock().now();
        let improved = self
            .snapshot
            .record_if_best(level, time_remaining, now)
            .is_some();
        if improved {
            if let Err(err) = self.progress.record_if_best(level, time_remaining).await {
                warn!(%err, level = level.value(), "failed to save record");
            }
        }
    }

    /// After a win: bump the level, persist it, and deal the next level after a short pause.
    ///
    /// Does nothing unless the last attempt was won and not yet advanced.
    pub async fn advance_level(&mut self) {
        if self.session.phase() != Phase::Won {
            return;
        }
        let from = self.session.level();
        let to = from.next();
        self.snapshot.level = to;
        self.persist_progress().await;

        self.stop_timers();
        self.session = Session::idle(to, &self.rules, StatusMessage::Advancing { from, to });
        self.outcome = None;
        self.menu_open = false;
        self.scheduler.schedule_once(
            self.epoch,
            self.rules.advance_delay(),
            TimerEvent::AdvanceLevel,
        );
    }

    pub fn open_menu(&mut self) {
        self.stop_timers();
        self.session.abandon();
        self.outcome = None;
        self.menu_open = true;
    }

    pub async fn reset_progress(&mut self) {
        self.stop_timers();
        if let Err(err) = self.progress.reset().await {
            warn!(%err, "failed to reset progress");
        }
        self.snapshot = ProgressSnapshot::default();
        self.session = Session::idle(Level::FIRST, &self.rules, StatusMessage::ProgressReset);
        self.outcome = None;
        self.menu_open = true;
        info!("progress reset");
    }

    #[must_use]
    pub fn view(&self) -> GameView {
        let cards = self
            .session
            .cards()
            .iter()
            .map(|card| {
                let showing = card.is_face_up() || card.is_matched();
                CardView {
                    face: showing
                        .then(|| self.pool.face(card.pair()).unwrap_or("?").to_string()),
                    face_up: card.is_face_up(),
                    matched: card.is_matched(),
                }
            })
            .collect();

        GameView {
            level: self.session.level(),
            seconds_remaining: self.session.seconds_remaining(),
            attempts: self.snapshot.attempts,
            pairs_found: self.session.pairs_found(),
            pairs_total: self.session.total_pairs(),
            status: self.session.status(),
            cards,
            is_running: self.session.is_running(),
            hurry: self.session.is_hurrying(),
            input_locked: self.session.is_input_locked(),
            menu_open: self.menu_open,
            outcome: self.outcome,
            current_record: self.snapshot.best_for(self.snapshot.level).cloned(),
            records: self.snapshot.records().cloned().collect(),
        }
    }

    fn stop_timers(&mut self) {
        self.scheduler.cancel_all();
        self.epoch = self.epoch.wrapping_add(1);
    }

    async fn persist_progress(&self) {
        if let Err(err) = self
            .progress
            .save(self.snapshot.level, self.snapshot.attempts)
            .await
        {
            warn!(%err, "failed to save progress");
        }
    }
}
