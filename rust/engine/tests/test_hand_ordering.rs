use std::cmp::Ordering;

use showdown_engine::cards::Card;
use showdown_engine::deck::Deck;
use showdown_engine::detectors::classify;
use showdown_engine::hand::{best_five, best_hand, compare_hands, HandRanking};

fn dealt_seven(seed: u64) -> [Card; 7] {
    let mut deck = Deck::new_with_seed(seed);
    let mut seven = [deck.draw().unwrap(); 7];
    for slot in seven.iter_mut().skip(1) {
        *slot = deck.draw().unwrap();
    }
    seven
}

fn dealt_five(seed: u64) -> HandRanking {
    let mut deck = Deck::new_with_seed(seed);
    let five: Vec<Card> = (0..5).map(|_| deck.draw().unwrap()).collect();
    classify(&five)
}

#[test]
fn exactly_one_relation_holds_between_any_two_hands() {
    let hands: Vec<HandRanking> = (0..200).map(dealt_five).collect();
    for a in &hands {
        for b in &hands {
            let gt = compare_hands(a, b) == Ordering::Greater;
            let lt = compare_hands(a, b) == Ordering::Less;
            let eq = compare_hands(a, b) == Ordering::Equal;
            assert_eq!([gt, lt, eq].iter().filter(|&&x| x).count(), 1);
            // antisymmetry
            assert_eq!(compare_hands(a, b), compare_hands(b, a).reverse());
            // derived ordering agrees with the explicit comparison
            assert_eq!(a.cmp(b), compare_hands(a, b));
            assert_eq!(eq, a == b);
        }
    }
}

#[test]
fn ordering_is_transitive() {
    let hands: Vec<HandRanking> = (1_000..1_060).map(dealt_five).collect();
    for a in &hands {
        for b in &hands {
            for c in &hands {
                if compare_hands(a, b).is_ge() && compare_hands(b, c).is_ge() {
                    assert!(compare_hands(a, c).is_ge(), "{:?} {:?} {:?}", a, b, c);
                }
            }
        }
    }
}

#[test]
fn category_dominates_kickers() {
    let mut hands: Vec<HandRanking> = (0..500).map(dealt_five).collect();
    hands.sort();
    for pair in hands.windows(2) {
        assert!(pair[0].category <= pair[1].category);
    }
}

#[test]
fn reevaluation_is_idempotent() {
    for seed in 0..100u64 {
        let seven = dealt_seven(seed);
        let first = best_five(&seven);
        for _ in 0..3 {
            assert_eq!(best_five(&seven), first);
        }
        assert_eq!(best_hand(&seven), first.ranking);
    }
}

#[test]
fn best_hand_is_at_least_every_subset() {
    for seed in 500..600u64 {
        let seven = dealt_seven(seed);
        let best = best_hand(&seven);
        for skip_a in 0..7 {
            for skip_b in (skip_a + 1)..7 {
                let five: Vec<Card> = seven
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip_a && i != skip_b)
                    .map(|(_, &c)| c)
                    .collect();
                assert!(best >= classify(&five));
            }
        }
    }
}
