#![forbid(unsafe_code)]

pub mod deal;
pub mod error;
pub mod model;
pub mod rules;
pub mod time;

pub use error::Error;
pub use rules::GameRules;
pub use time::Clock;
