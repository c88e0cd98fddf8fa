pub mod controller;
pub mod runner;
pub mod scheduler;
pub mod view;

pub use controller::{GameCommand, GameConfig, GameController};
pub use runner::{GameHandle, GameLoop};
pub use scheduler::{RecordingScheduler, ScheduledTask, Scheduler, TimerEvent, TimerFired, TokioScheduler};
pub use view::{CardView, GameView, Outcome};
