mod game_vm;
mod time_fmt;

pub use game_vm::{
    BoardVm, CardSlotVm, MenuVm, OutcomeVm, RecordRowVm, map_records, status_class,
};
pub use time_fmt::{format_countdown, format_date};
