//! Cancelable timers for the game loop.
//!
//! Every firing carries the epoch of the session that scheduled it, so a
//! firing that was already queued when its task got cancelled can still be
//! recognised as stale by the controller.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, interval_at, sleep};

/// What a timer asks the controller to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Tick,
    ResolveMismatch,
    AdvanceLevel,
}

/// A timer firing tagged with the session epoch that scheduled it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerFired {
    pub epoch: u64,
    pub event: TimerEvent,
}

/// Scheduled-task abstraction owned by the controller.
pub trait Scheduler: Send + Sync {
    /// Fire `TimerEvent::Tick` every `interval`, replacing any running ticker.
    fn start_ticking(&mut self, epoch: u64, interval: Duration);

    /// Fire `event` once after `delay`, replacing any pending one-shot.
    fn schedule_once(&mut self, epoch: u64, delay: Duration, event: TimerEvent);

    /// Drop the ticker and any pending one-shot.
    fn cancel_all(&mut self);
}

/// `Scheduler` backed by tokio tasks that report into a channel.
pub struct TokioScheduler {
    fired: mpsc::UnboundedSender<TimerFired>,
    ticker: Option<JoinHandle<()>>,
    pending: Option<JoinHandle<()>>,
}

impl TokioScheduler {
    #[must_use]
    pub fn new(fired: mpsc::UnboundedSender<TimerFired>) -> Self {
        Self {
            fired,
            ticker: None,
            pending: None,
        }
    }
}

impl Scheduler for TokioScheduler {
    fn start_ticking(&mut self, epoch: u64, interval: Duration) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        let fired = self.fired.clone();
        self.ticker = Some(tokio::spawn(async move {
            let mut ticks = interval_at(Instant::now() + interval, interval);
            loop {
                ticks.tick().await;
                let msg = TimerFired {
                    epoch,
                    event: TimerEvent::Tick,
                };
                if fired.send(msg).is_err() {
                    break;
                }
            }
        }));
    }

    fn schedule_once(&mut self, epoch: u64, delay: Duration, event: TimerEvent) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let fired = self.fired.clone();
        self.pending = Some(tokio::spawn(async move {
            sleep(delay).await;
            let _ = fired.send(TimerFired { epoch, event });
        }));
    }

    fn cancel_all(&mut self) {
        if let Some(handle) = self.ticker.take() {
            handle.abort();
        }
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for TokioScheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

/// A request captured by `RecordingScheduler`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScheduledTask {
    Ticking { epoch: u64, interval: Duration },
    Once { epoch: u64, delay: Duration, event: TimerEvent },
}

/// `Scheduler` that only records what is active, for driving the controller by hand.
///
/// Clones share state, so a test can keep one clone while the controller owns another.
#[derive(Clone, Default)]
pub struct RecordingScheduler {
    state: Arc<Mutex<RecordingState>>,
}

#[derive(Default)]
struct RecordingState {
    ticking: Option<ScheduledTask>,
    pending: Option<ScheduledTask>,
    cancellations: usize,
}

impl RecordingScheduler {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The active ticker, if any.
    #[must_use]
    pub fn ticking(&self) -> Option<ScheduledTask> {
        self.state.lock().ok().and_then(|state| state.ticking)
    }

    /// The pending one-shot, if any.
    #[must_use]
    pub fn pending(&self) -> Option<ScheduledTask> {
        self.state.lock().ok().and_then(|state| state.pending)
    }

    /// Take the pending one-shot as the firing it would produce.
    pub fn fire_pending(&self) -> Option<TimerFired> {
        let mut state = self.state.lock().ok()?;
        match state.pending.take()? {
            ScheduledTask::Once { epoch, event, .. } => Some(TimerFired { epoch, event }),
            ScheduledTask::Ticking { .. } => None,
        }
    }

    /// The firing the active ticker would produce next.
    #[must_use]
    pub fn next_tick(&self) -> Option<TimerFired> {
        match self.ticking()? {
            ScheduledTask::Ticking { epoch, .. } => Some(TimerFired {
                epoch,
                event: TimerEvent::Tick,
            }),
            ScheduledTask::Once { .. } => None,
        }
    }

    #[must_use]
    pub fn cancellations(&self) -> usize {
        self.state.lock().map(|state| state.cancellations).unwrap_or(0)
    }
}

impl Scheduler for RecordingScheduler {
    fn start_ticking(&mut self, epoch: u64, interval: Duration) {
        if let Ok(mut state) = self.state.lock() {
            state.ticking = Some(ScheduledTask::Ticking { epoch, interval });
        }
    }

    fn schedule_once(&mut self, epoch: u64, delay: Duration, event: TimerEvent) {
        if let Ok(mut state) = self.state.lock() {
            state.pending = Some(ScheduledTask::Once {
                epoch,
                delay,
                event,
            });
        }
    }

    fn cancel_all(&mut self) {
        if let Ok(mut state) = self.state.lock() {
            state.ticking = None;
            state.pending = None;
            state.cancellations += 1;
        }
    }
}
