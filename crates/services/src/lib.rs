#![forbid(unsafe_code)]

pub mod app_services;
pub mod error;
pub mod game;
pub mod progress_service;

pub use memory_core::Clock;

pub use app_services::AppServices;
pub use error::{AppServicesError, ProgressError};
pub use game::{
    CardView, GameCommand, GameConfig, GameController, GameHandle, GameLoop, GameView, Outcome,
};
pub use progress_service::ProgressStore;
