use crate::model::ids::PairId;

/// A single card on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Card {
    pair: PairId,
    face_up: bool,
    matched: bool,
}

impl Card {
    /// A face-down, unmatched card.
    #[must_use]
    pub fn new(pair: PairId) -> Self {
        Self {
            pair,
            face_up: false,
            matched: false,
        }
    }

    #[must_use]
    pub fn pair(&self) -> PairId {
        self.pair
    }

    #[must_use]
    pub fn is_face_up(&self) -> bool {
        self.face_up
    }

    #[must_use]
    pub fn is_matched(&self) -> bool {
        self.matched
    }

    #[must_use]
    pub fn pairs_with(&self, other: &Card) -> bool {
        self.pair == other.pair
    }

    pub(crate) fn turn_up(&mut self) {
        self.face_up = true;
    }

    pub(crate) fn turn_down(&mut self) {
        self.face_up = false;
    }

    pub(crate) fn mark_matched(&mut self) {
        self.face_up = true;
        self.matched = true;
    }
}
