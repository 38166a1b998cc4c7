//! Practice session state machine.
//!
//! A session walks the deck in a traversal order: either the identity
//! permutation or a uniformly shuffled one. The order is derived from the
//! current card count and never persisted, so `reconcile` must run before
//! every render to pick up cards added or removed elsewhere.

use rand::Rng;
use tracing::debug;

/// Whether there is anything to practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No cards.
    Empty,
    /// At least one card and an order matching the card count.
    Active,
}

/// Shuffle `order` in place (Fisher-Yates).
///
/// Walks from the last position down to the second, swapping each with a
/// uniformly chosen position at or before it.
pub fn fisher_yates<T, R: Rng + ?Sized>(order: &mut [T], rng: &mut R) {
    for i in (1..order.len()).rev() {
        let j = rng.gen_range(0..=i);
        order.swap(i, j);
    }
}

/// Ordering and position state for one practice run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PracticeSession {
    order: Vec<usize>,
    position: usize,
    shuffled: bool,
}

impl PracticeSession {
    /// Create a session. The order is built on the first `reconcile`.
    pub fn new(shuffled: bool) -> Self {
        Self {
            order: Vec::new(),
            position: 0,
            shuffled,
        }
    }

    pub fn state(&self) -> SessionState {
        if self.order.is_empty() {
            SessionState::Empty
        } else {
            SessionState::Active
        }
    }

    pub fn order(&self) -> &[usize] {
        &self.order
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_shuffled(&self) -> bool {
        self.shuffled
    }

    /// Bring the session in line with the deck's current size.
    ///
    /// If the size changed the order is rebuilt (identity, then shuffled
    /// when shuffle mode is on) and the position goes back to the start.
    /// An unchanged size leaves everything as it was.
    pub fn reconcile<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) -> SessionState {
        if card_count == 0 {
            if !self.order.is_empty() {
                debug!("Practice session emptied");
            }
            self.order.clear();
            self.position = 0;
            return SessionState::Empty;
        }

        if self.order.len() != card_count {
            debug!(
                "Card count changed ({} -> {}), rebuilding practice order",
                self.order.len(),
                card_count
            );
            self.regenerate(card_count, rng);
        }

        SessionState::Active
    }

    /// Advance one card, wrapping from the last back to the first.
    pub fn next(&mut self) {
        let count = self.order.len();
        if count == 0 {
            return;
        }
        self.position = (self.position + 1) % count;
    }

    /// Step back one card, wrapping from the first to the last.
    pub fn prev(&mut self) {
        let count = self.order.len();
        if count == 0 {
            return;
        }
        self.position = (self.position + count - 1) % count;
    }

    /// Flip shuffle mode and restart from the beginning of a fresh order.
    pub fn toggle_shuffle<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        self.shuffled = !self.shuffled;
        debug!("Shuffle {}", if self.shuffled { "on" } else { "off" });
        self.regenerate(card_count, rng);
    }

    /// Index into the card list of the card currently shown.
    ///
    /// `None` when the session is empty.
    pub fn current_card_index(&self) -> Option<usize> {
        self.order.get(self.position).copied()
    }

    /// One-based position and total, for "Card K of N".
    pub fn progress(&self) -> Option<(usize, usize)> {
        if self.order.is_empty() {
            None
        } else {
            Some((self.position + 1, self.order.len()))
        }
    }

    fn regenerate<R: Rng + ?Sized>(&mut self, card_count: usize, rng: &mut R) {
        self.order = (0..card_count).collect();
        if self.shuffled {
            fisher_yates(&mut self.order, rng);
        }
        self.position = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(7)
    }

    fn is_permutation(order: &[usize], n: usize) -> bool {
        let mut sorted = order.to_vec();
        sorted.sort_unstable();
        sorted == (0..n).collect::<Vec<_>>()
    }

    #[test]
    fn test_new_session_is_empty() {
        let session = PracticeSession::new(false);
        assert_eq!(session.state(), SessionState::Empty);
        assert_eq!(session.current_card_index(), None);
        assert_eq!(session.progress(), None);
    }

    #[test]
    fn test_reconcile_zero_cards_is_empty() {
        let mut session = PracticeSession::new(true);
        assert_eq!(session.reconcile(0, &mut rng()), SessionState::Empty);
    }

    #[test]
    fn test_reconcile_single_card() {
        let mut session = PracticeSession::new(false);
        assert_eq!(session.reconcile(1, &mut rng()), SessionState::Active);
        assert_eq!(session.order(), &[0]);
        assert_eq!(session.current_card_index(), Some(0));
    }

    #[test]
    fn test_reconcile_produces_permutation() {
        let mut r = rng();
        for shuffled in [false, true] {
            for n in 1..20 {
                let mut session = PracticeSession::new(shuffled);
                session.reconcile(n, &mut r);
                assert!(is_permutation(session.order(), n));
                assert_eq!(session.position(), 0);
            }
        }
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut r = rng();
        let mut session = PracticeSession::new(true);
        session.reconcile(8, &mut r);
        session.next();
        session.next();
        let before = session.clone();

        session.reconcile(8, &mut r);
        assert_eq!(session, before);
    }

    #[test]
    fn test_reconcile_after_count_change_resets_position() {
        let mut r = rng();
        let mut session = PracticeSession::new(false);
        session.reconcile(3, &mut r);
        session.next();
        session.next();
        assert_eq!(session.position(), 2);

        session.reconcile(2, &mut r);
        assert_eq!(session.order(), &[0, 1]);
        assert_eq!(session.position(), 0);

        session.reconcile(0, &mut r);
        assert_eq!(session.state(), SessionState::Empty);
    }

    #[test]
    fn test_next_wraps_around() {
        let mut session = PracticeSession::new(false);
        session.reconcile(5, &mut rng());
        for _ in 0..5 {
            session.next();
        }
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_prev_wraps_to_last() {
        let mut session = PracticeSession::new(false);
        session.reconcile(5, &mut rng());
        session.prev();
        assert_eq!(session.position(), 4);
        assert_eq!(session.progress(), Some((5, 5)));
    }

    #[test]
    fn test_navigation_on_empty_is_noop() {
        let mut session = PracticeSession::new(false);
        session.next();
        session.prev();
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_toggle_shuffle_on_then_off_restores_identity() {
        let mut r = rng();
        let mut session = PracticeSession::new(false);
        session.reconcile(6, &mut r);
        session.next();

        session.toggle_shuffle(6, &mut r);
        assert!(session.is_shuffled());
        assert_eq!(session.position(), 0);
        assert!(is_permutation(session.order(), 6));

        session.next();
        session.toggle_shuffle(6, &mut r);
        assert!(!session.is_shuffled());
        assert_eq!(session.order(), &[0, 1, 2, 3, 4, 5]);
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_current_card_index_follows_order() {
        let mut session = PracticeSession::new(true);
        session.reconcile(4, &mut rng());
        let order = session.order().to_vec();
        for expected in order {
            assert_eq!(session.current_card_index(), Some(expected));
            session.next();
        }
    }

    #[test]
    fn test_fisher_yates_is_roughly_uniform() {
        let mut r = StdRng::seed_from_u64(42);
        let n = 4;
        let trials = 8000;
        let mut counts = vec![vec![0usize; n]; n];

        for _ in 0..trials {
            let mut order: Vec<usize> = (0..n).collect();
            fisher_yates(&mut order, &mut r);
            for (slot, &card) in order.iter().enumerate() {
                counts[slot][card] += 1;
            }
        }

        let expected = trials / n;
        for row in &counts {
            for &count in row {
                assert!(
                    count.abs_diff(expected) < expected / 10,
                    "count {} too far from {}",
                    count,
                    expected
                );
            }
        }
    }
}
