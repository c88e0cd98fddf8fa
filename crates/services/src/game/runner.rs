use tokio::sync::{mpsc, watch};
use tracing::debug;

use super::controller::{GameCommand, GameConfig, GameController};
use super::scheduler::{TimerFired, TokioScheduler};
use super::view::GameView;
use crate::progress_service::ProgressStore;

/// Cloneable handle to a running game loop.
///
/// Commands are queued in order; the latest `GameView` is published after
/// each command or timer firing.
#[derive(Clone)]
pub struct GameHandle {
    commands: mpsc::UnboundedSender<GameCommand>,
    view: watch::Receiver<GameView>,
}

impl GameHandle {
    /// Queue a command. Returns `false` once the loop has stopped.
    pub fn send(&self, command: GameCommand) -> bool {
        self.commands.send(command).is_ok()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<GameView> {
        self.view.clone()
    }

    #[must_use]
    pub fn current(&self) -> GameView {
        self.view.borrow().clone()
    }
}

/// Runs a `GameController` on its own task so commands and timer firings never interleave.
pub struct GameLoop;

impl GameLoop {
    /// Load progress, then spawn the loop on the current tokio runtime.
    pub async fn spawn(config: GameConfig, progress: ProgressStore) -> GameHandle {
        let (fired_tx, fired_rx) = mpsc::unbounded_channel();
        let scheduler = TokioScheduler::new(fired_tx);
        let controller = GameController::launch(config, progress, Box::new(scheduler)).await;

        let (command_tx, command_rx) = mpsc::unbounded_channel();
        let (view_tx, view_rx) = watch::channel(controller.view());
        tokio::spawn(run(controller, command_rx, fired_rx, view_tx));

        GameHandle {
            commands: command_tx,
            view: view_rx,
        }
    }
}

async fn run(
    mut controller: GameController,
    mut commands: mpsc::UnboundedReceiver<GameCommand>,
    mut fired: mpsc::UnboundedReceiver<TimerFired>,
    view: watch::Sender<GameView>,
) {
    loop {
        tokio::select! {
            command = commands.recv() => match command {
                Some(command) => {
                    debug!(?command, "game command");
                    controller.handle(command).await;
                }
                None => break,
            },
            Some(timer) = fired.recv() => controller.on_timer(timer).await,
        }

        let next = controller.view();
        view.send_if_modified(|current| {
            if *current == next {
                false
            } else {
                *current = next;
                true
            }
        });
    }
    debug!("game loop stopped");
}
