//! Practice ordering properties, checked over many seeds.

use flashdeck::practice::fisher_yates;
use flashdeck::{PracticeSession, SessionState};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn sorted(order: &[usize]) -> Vec<usize> {
    let mut v = order.to_vec();
    v.sort_unstable();
    v
}

#[test]
fn test_shuffled_order_is_always_a_permutation() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let count = (seed % 17) as usize + 1;
        let mut session = PracticeSession::new(true);
        assert_eq!(session.reconcile(count, &mut rng), SessionState::Active);
        assert_eq!(sorted(session.order()), (0..count).collect::<Vec<_>>());
        assert_eq!(session.position(), 0);
    }
}

#[test]
fn test_every_position_is_reachable_by_shuffle() {
    // With 3 cards, every card should land first for some seed
    let mut firsts = [false; 3];
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut order = vec![0, 1, 2];
        fisher_yates(&mut order, &mut rng);
        firsts[order[0]] = true;
    }
    assert_eq!(firsts, [true; 3]);
}

#[test]
fn test_unshuffled_order_is_identity() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = PracticeSession::new(false);
    session.reconcile(4, &mut rng);
    assert_eq!(session.order(), &[0, 1, 2, 3]);
    assert_eq!(session.progress(), Some((1, 4)));
}

#[test]
fn test_navigation_wraps_both_ways() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = PracticeSession::new(false);
    session.reconcile(3, &mut rng);

    session.prev();
    assert_eq!(session.current_card_index(), Some(2));
    session.next();
    assert_eq!(session.current_card_index(), Some(0));

    for _ in 0..3 {
        session.next();
    }
    assert_eq!(session.position(), 0);
}

#[test]
fn test_reconcile_only_rebuilds_on_count_change() {
    let mut rng = StdRng::seed_from_u64(42);
    let mut session = PracticeSession::new(true);
    session.reconcile(6, &mut rng);
    session.next();
    session.next();
    let before = session.order().to_vec();

    session.reconcile(6, &mut rng);
    assert_eq!(session.order(), before.as_slice());
    assert_eq!(session.position(), 2);

    session.reconcile(7, &mut rng);
    assert_eq!(session.position(), 0);
    assert_eq!(sorted(session.order()), (0..7).collect::<Vec<_>>());
}

#[test]
fn test_empty_deck_is_a_no_op() {
    let mut rng = StdRng::seed_from_u64(0);
    let mut session = PracticeSession::new(false);
    assert_eq!(session.reconcile(0, &mut rng), SessionState::Empty);
    session.next();
    session.prev();
    assert_eq!(session.current_card_index(), None);
    assert_eq!(session.progress(), None);

    session.reconcile(2, &mut rng);
    session.next();
    assert_eq!(session.reconcile(0, &mut rng), SessionState::Empty);
    assert_eq!(session.position(), 0);
}

#[test]
fn test_toggle_shuffle_restarts_from_first() {
    let mut rng = StdRng::seed_from_u64(9);
    let mut session = PracticeSession::new(false);
    session.reconcile(5, &mut rng);
    session.next();

    session.toggle_shuffle(5, &mut rng);
    assert!(session.is_shuffled());
    assert_eq!(session.position(), 0);

    session.toggle_shuffle(5, &mut rng);
    assert!(!session.is_shuffled());
    assert_eq!(session.order(), &[0, 1, 2, 3, 4]);
}
