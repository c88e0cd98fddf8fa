mod board;
mod menu;
mod outcome;
mod play;
mod records;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use board::Board;
pub use menu::MenuPanel;
pub use outcome::OutcomeDialog;
pub use play::PlayView;
pub use records::RecordsPanel;
