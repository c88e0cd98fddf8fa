use std::collections::BTreeSet;

use crate::model::card::Card;
use crate::model::ids::Level;
use crate::model::status::{Status, StatusMessage};
use crate::rules::GameRules;

/// Where a session is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Menu shown, nothing dealt or the last attempt was abandoned.
    Idle,
    /// Accepting flips and ticking.
    Running,
    /// Two mismatched cards are showing; flips are locked until resolved.
    Resolving,
    /// Every pair matched before the countdown ran out.
    Won,
    /// The countdown reached zero first.
    Lost,
}

/// Result of a flip request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Locked, out of range, already showing, or not running.
    Ignored,
    /// First card of a pair turned up.
    Revealed,
    /// Second card matched the first.
    Matched,
    /// Second card differs; call `resolve_mismatch` after the reveal delay.
    Mismatched,
}

/// Result of one countdown step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing is running.
    Ignored,
    /// Plenty of time left.
    Counting { remaining: u32 },
    /// At or under the hurry threshold.
    Hurry { remaining: u32 },
    /// Reached zero; the session is now lost.
    TimedOut,
}

/// A completed level.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Victory {
    pub level: Level,
    pub time_remaining: u32,
}

/// State of one attempt at a level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    level: Level,
    cards: Vec<Card>,
    seconds_remaining: u32,
    hurry_threshold_secs: u32,
    phase: Phase,
    flipped: Vec<usize>,
    matched: BTreeSet<usize>,
    status: Status,
}

impl Session {
    /// An idle session at `level` with nothing dealt.
    #[must_use]
    pub fn idle(level: Level, rules: &GameRules, status: StatusMessage) -> Self {
        Self {
            level,
            cards: Vec::new(),
            seconds_remaining: rules.level_duration_secs(),
            hurry_threshold_secs: rules.hurry_threshold_secs(),
            phase: Phase::Idle,
            flipped: Vec::new(),
            matched: BTreeSet::new(),
            status: Status::new(status),
        }
    }

    /// A running session over freshly dealt `cards`.
    ///
    /// When `status` is `None` the status announces how many pairs to find.
    #[must_use]
    pub fn start(
        level: Level,
        cards: Vec<Card>,
        rules: &GameRules,
        status: Option<StatusMessage>,
    ) -> Self {
        let pairs = cards.len() / 2;
        let status = status.unwrap_or(StatusMessage::FindPairs { level, pairs });
        Self {
            level,
            cards,
            seconds_remaining: rules.level_duration_secs(),
            hurry_threshold_secs: rules.hurry_threshold_secs(),
            phase: Phase::Running,
            flipped: Vec::with_capacity(2),
            matched: BTreeSet::new(),
            status: Status::new(status),
        }
    }

    #[must_use]
    pub fn level(&self) -> Level {
        self.level
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn seconds_remaining(&self) -> u32 {
        self.seconds_remaining
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_running(&self) -> bool {
        matches!(self.phase, Phase::Running | Phase::Resolving)
    }

    /// Running with no more than the hurry threshold left.
    #[must_use]
    pub fn is_hurrying(&self) -> bool {
        self.is_running() && self.seconds_remaining <= self.hurry_threshold_secs
    }

    #[must_use]
    pub fn is_input_locked(&self) -> bool {
        self.phase != Phase::Running
    }

    #[must_use]
    pub fn flipped(&self) -> &[usize] {
        &self.flipped
    }

    #[must_use]
    pub fn matched(&self) -> &BTreeSet<usize> {
        &self.matched
    }

    #[must_use]
    pub fn status(&self) -> Status {
        self.status
    }

    #[must_use]
    pub fn total_pairs(&self) -> usize {
        self.cards.len() / 2
    }

    #[must_use]
    pub fn pairs_found(&self) -> usize {
        self.matched.len() / 2
    }

    #[must_use]
    pub fn remaining_pairs(&self) -> usize {
        self.total_pairs().saturating_sub(self.pairs_found())
    }

    pub fn set_status(&mut self, message: StatusMessage) {
        self.status = Status::new(message);
    }

    /// Turn the card at `position` face up.
    pub fn flip(&mut self, position: usize) -> FlipOutcome {
        if self.is_input_locked()
            || position >= self.cards.len()
            || self.flipped.contains(&position)
            || self.matched.contains(&position)
        {
            return FlipOutcome::Ignored;
        }

        self.cards[position].turn_up();
        self.flipped.push(position);

        let [first, second] = self.flipped[..] else {
            self.set_status(StatusMessage::PairsRemaining {
                pairs: self.remaining_pairs(),
            });
            return FlipOutcome::Revealed;
        };

        self.phase = Phase::Resolving;
        if self.cards[first].pairs_with(&self.cards[second]) {
            self.cards[first].mark_matched();
            self.cards[second].mark_matched();
            self.matched.insert(first);
            self.matched.insert(second);
            self.flipped.clear();
            self.phase = Phase::Running;
            self.set_status(StatusMessage::PairFound);
            FlipOutcome::Matched
        } else {
            self.set_status(StatusMessage::TryAgain);
            FlipOutcome::Mismatched
        }
    }

    /// Turn a mismatched pair back down and unlock input.
    ///
    /// Returns `false` when there was nothing to resolve.
    pub fn resolve_mismatch(&mut self) -> bool {
        if self.phase != Phase::Resolving {
            return false;
        }
        self.turn_down_flipped();
        self.phase = Phase::Running;
        self.set_status(StatusMessage::PairsRemaining {
            pairs: self.remaining_pairs(),
        });
        true
    }

    /// Count down one second.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_running() {
            return TickOutcome::Ignored;
        }
        self.seconds_remaining = self.seconds_remaining.saturating_sub(1);
        let remaining = self.seconds_remaining;
        if remaining == 0 {
            self.turn_down_flipped();
            self.phase = Phase::Lost;
            self.set_status(StatusMessage::TimeUp);
            return TickOutcome::TimedOut;
        }
        if remaining <= self.hurry_threshold_secs {
            self.set_status(StatusMessage::Hurry { seconds: remaining });
            return TickOutcome::Hurry { remaining };
        }
        TickOutcome::Counting { remaining }
    }

    /// Finish the level if every card is matched.
    pub fn check_victory(&mut self) -> Option<Victory> {
        if !self.is_running() || self.cards.is_empty() || self.matched.len() != self.cards.len() {
            return None;
        }
        let victory = Victory {
            level: self.level,
            time_remaining: self.seconds_remaining,
        };
        self.phase = Phase::Won;
        self.seconds_remaining = 0;
        self.set_status(StatusMessage::LevelComplete { level: self.level });
        Some(victory)
    }

    /// Stop a running attempt without a result.
    pub fn abandon(&mut self) {
        if self.is_running() {
            self.turn_down_flipped();
            self.phase = Phase::Idle;
        }
    }

    fn turn_down_flipped(&mut self) {
        for &position in &self.flipped {
            self.cards[position].turn_down();
        }
        self.flipped.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deal::CardPool;
    use crate::model::PairId;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn running(level: u32) -> Session {
        let level = Level::new(level).unwrap();
        let cards = CardPool::default().deal(level, &mut StdRng::seed_from_u64(5));
        Session::start(level, cards, &GameRules::default(), None)
    }

    fn positions_of(session: &Session, pair: PairId) -> (usize, usize) {
        let found: Vec<usize> = session
            .cards()
            .iter()
            .enumerate()
            .filter(|(_, card)| card.pair() == pair)
            .map(|(idx, _)| idx)
            .collect();
        (found[0], found[1])
    }

    fn mismatched_positions(session: &Session) -> (usize, usize) {
        let first = session.cards()[0].pair();
        let other = session
            .cards()
            .iter()
            .position(|card| card.pair() != first)
            .unwrap();
        (0, other)
    }

    #[test]
    fn start_announces_pairs() {
        let session = running(2);
        assert_eq!(session.cards().len(), 6);
        assert_eq!(session.seconds_remaining(), 60);
        assert!(session.is_running());
        assert!(!session.is_input_locked());
        assert_eq!(
            session.status().message(),
            StatusMessage::FindPairs {
                level: Level::new(2).unwrap(),
                pairs: 3
            }
        );
    }

    #[test]
    fn first_flip_reports_remaining_pairs() {
        let mut session = running(1);
        assert_eq!(session.flip(0), FlipOutcome::Revealed);
        assert_eq!(session.flipped(), &[0]);
        assert!(session.cards()[0].is_face_up());
        assert_eq!(
            session.status().message(),
            StatusMessage::PairsRemaining { pairs: 2 }
        );
    }

    #[test]
    fn repeated_or_invalid_flips_are_ignored() {
        let mut session = running(1);
        session.flip(0);
        let before = session.clone();
        assert_eq!(session.flip(0), FlipOutcome::Ignored);
        assert_eq!(session.flip(99), FlipOutcome::Ignored);
        assert_eq!(session, before);
    }

    #[test]
    fn matching_pair_unlocks_immediately() {
        let mut session = running(3);
        let (a, b) = positions_of(&session, PairId::new(0));
        session.flip(a);
        assert_eq!(session.flip(b), FlipOutcome::Matched);
        assert!(session.matched().contains(&a));
        assert!(session.matched().contains(&b));
        assert!(session.flipped().is_empty());
        assert!(!session.is_input_locked());
        assert_eq!(session.status().message(), StatusMessage::PairFound);

        let before = session.clone();
        assert_eq!(session.flip(a), FlipOutcome::Ignored);
        assert_eq!(session, before);
    }

    #[test]
    fn mismatch_locks_until_resolved() {
        let mut session = running(3);
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        assert_eq!(session.flip(b), FlipOutcome::Mismatched);
        assert!(session.is_input_locked());
        assert_eq!(session.phase(), Phase::Resolving);
        assert_eq!(session.flipped().len(), 2);

        let third = (0..session.cards().len()).find(|p| *p != a && *p != b).unwrap();
        assert_eq!(session.flip(third), FlipOutcome::Ignored);
        assert_eq!(session.flipped().len(), 2);

        assert!(session.resolve_mismatch());
        assert!(session.flipped().is_empty());
        assert!(!session.is_input_locked());
        assert!(!session.cards()[a].is_face_up());
        assert!(!session.cards()[b].is_face_up());
        assert!(!session.resolve_mismatch());
    }

    #[test]
    fn sixty_ticks_time_out_once() {
        let mut session = running(1);
        let mut losses = 0;
        for _ in 0..60 {
            if session.tick() == TickOutcome::TimedOut {
                losses += 1;
            }
        }
        assert_eq!(session.seconds_remaining(), 0);
        assert_eq!(losses, 1);
        assert_eq!(session.phase(), Phase::Lost);
        assert_eq!(session.tick(), TickOutcome::Ignored);
    }

    #[test]
    fn timeout_during_mismatch_turns_the_pair_back_down() {
        let mut session = running(3);
        for _ in 0..59 {
            session.tick();
        }
        let (a, b) = mismatched_positions(&session);
        session.flip(a);
        assert_eq!(session.flip(b), FlipOutcome::Mismatched);

        assert_eq!(session.tick(), TickOutcome::TimedOut);
        assert_eq!(session.phase(), Phase::Lost);
        assert!(session.flipped().is_empty());
        assert!(
            session
                .cards()
                .iter()
                .all(|card| card.is_matched() || !card.is_face_up())
        );
        assert!(!session.resolve_mismatch());
    }

    #[test]
    fn last_ten_seconds_hurry() {
        let mut session = running(1);
        for _ in 0..49 {
            assert!(matches!(session.tick(), TickOutcome::Counting { .. }));
        }
        assert!(!session.is_hurrying());
        assert_eq!(session.tick(), TickOutcome::Hurry { remaining: 10 });
        assert!(session.is_hurrying());
        assert_eq!(
            session.status().message(),
            StatusMessage::Hurry { seconds: 10 }
        );
    }

    #[test]
    fn matching_everything_wins_with_time_left() {
        let mut session = running(1);
        for _ in 0..5 {
            session.tick();
        }
        for pair in 0..2 {
            let (a, b) = positions_of(&session, PairId::new(pair));
            session.flip(a);
            session.flip(b);
        }
        let victory = session.check_victory().unwrap();
        assert_eq!(victory.time_remaining, 55);
        assert_eq!(victory.level, Level::FIRST);
        assert_eq!(session.phase(), Phase::Won);
        assert_eq!(session.seconds_remaining(), 0);
        assert!(session.check_victory().is_none());
        assert_eq!(session.flip(0), FlipOutcome::Ignored);
    }

    #[test]
    fn partial_board_is_not_a_victory() {
        let mut session = running(2);
        let (a, b) = positions_of(&session, PairId::new(0));
        session.flip(a);
        session.flip(b);
        assert!(session.check_victory().is_none());
    }

    #[test]
    fn hurry_follows_configured_threshold() {
        let level = Level::FIRST;
        let rules = GameRules::default().with_hurry_threshold_secs(30);
        let cards = CardPool::default().deal(level, &mut StdRng::seed_from_u64(5));
        let mut session = Session::start(level, cards, &rules, None);
        for _ in 0..29 {
            session.tick();
        }
        assert!(!session.is_hurrying());
        assert_eq!(session.tick(), TickOutcome::Hurry { remaining: 30 });
        assert!(session.is_hurrying());
    }

    #[test]
    fn idle_session_ignores_input() {
        let mut session = Session::idle(Level::FIRST, &GameRules::default(), StatusMessage::PressStart);
        assert!(!session.is_running());
        assert_eq!(session.flip(0), FlipOutcome::Ignored);
        assert_eq!(session.tick(), TickOutcome::Ignored);
        assert!(session.check_victory().is_none());
    }

    #[test]
    fn abandon_stops_running_session() {
        let mut session = running(2);
        session.flip(0);
        session.abandon();
        assert_eq!(session.phase(), Phase::Idle);
        assert!(session.flipped().is_empty());
        assert!(!session.cards()[0].is_face_up());
        assert_eq!(session.tick(), TickOutcome::Ignored);
    }
}
