mod card;
mod ids;
mod record;
mod session;
mod status;

pub use ids::{Level, LevelError, PairId};

pub use card::Card;
pub use record::{ProgressSnapshot, Record};
pub use session::{FlipOutcome, Phase, Session, TickOutcome, Victory};
pub use status::{Status, StatusMessage, Tone};
