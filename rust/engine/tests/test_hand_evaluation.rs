use showdown_engine::cards::{Card, Rank as R, Suit as S};
use showdown_engine::hand::{best_five, best_hand, compare_hands, Category};

fn c(s: S, r: R) -> Card {
    Card { suit: s, rank: r }
}

#[test]
fn detects_royal_flush() {
    let cards = [
        c(S::Hearts, R::Ten),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Ace),
        c(S::Clubs, R::Two),
        c(S::Diamonds, R::Three),
    ];
    let hs = best_hand(&cards);
    assert_eq!(hs.category, Category::RoyalFlush);
    assert_eq!(hs.kickers, [14, 0, 0, 0, 0]);
}

#[test]
fn king_high_straight_flush_is_not_royal() {
    let cards = [
        c(S::Clubs, R::Nine),
        c(S::Clubs, R::Ten),
        c(S::Clubs, R::Jack),
        c(S::Clubs, R::Queen),
        c(S::Clubs, R::King),
        c(S::Hearts, R::Ace),
        c(S::Diamonds, R::Ace),
    ];
    let hs = best_hand(&cards);
    assert_eq!(hs.category, Category::StraightFlush);
    assert_eq!(hs.kickers[0], 13);
}

#[test]
fn category_ordering_is_correct() {
    // Four of a kind vs full house
    let quads = [
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Ace),
        c(S::Clubs, R::King),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
    ];
    let full_house = [
        c(S::Clubs, R::King),
        c(S::Diamonds, R::King),
        c(S::Hearts, R::King),
        c(S::Clubs, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
    ];
    let a = best_hand(&quads);
    let b = best_hand(&full_house);
    assert_eq!(a.category, Category::FourOfAKind);
    assert_eq!(a.kickers, [14, 13, 0, 0, 0]);
    assert_eq!(b.category, Category::FullHouse);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn straight_beats_three_of_a_kind() {
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let trips = [
        c(S::Clubs, R::Queen),
        c(S::Hearts, R::Queen),
        c(S::Diamonds, R::Queen),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
        c(S::Hearts, R::Four),
        c(S::Diamonds, R::Nine),
    ];
    let a = best_hand(&straight);
    let b = best_hand(&trips);
    assert_eq!(a.category, Category::Straight);
    assert_eq!(a.kickers[0], 9);
    assert_eq!(b.category, Category::ThreeOfAKind);
    assert_eq!(b.kickers, [12, 9, 4, 0, 0]);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn flush_beats_straight_and_is_detected() {
    let flush = [
        c(S::Hearts, R::Two),
        c(S::Hearts, R::Seven),
        c(S::Hearts, R::Jack),
        c(S::Hearts, R::Queen),
        c(S::Hearts, R::Nine),
        c(S::Clubs, R::Ace),
        c(S::Diamonds, R::King),
    ];
    let straight = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Six),
        c(S::Clubs, R::Seven),
        c(S::Hearts, R::Eight),
        c(S::Diamonds, R::Nine),
        c(S::Spades, R::Two),
        c(S::Clubs, R::Three),
    ];
    let a = best_hand(&flush);
    assert_eq!(a.category, Category::Flush);
    assert_eq!(a.kickers, [12, 11, 9, 7, 2]);
    let b = best_hand(&straight);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn pair_vs_high_card() {
    let pair = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Ace),
        c(S::Spades, R::Two),
        c(S::Diamonds, R::Three),
        c(S::Clubs, R::Four),
        c(S::Diamonds, R::Nine),
        c(S::Hearts, R::Seven),
    ];
    let high = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::King),
        c(S::Spades, R::Nine),
        c(S::Diamonds, R::Eight),
        c(S::Clubs, R::Seven),
        c(S::Diamonds, R::Three),
        c(S::Hearts, R::Two),
    ];
    let a = best_hand(&pair);
    let b = best_hand(&high);
    assert_eq!(a.category, Category::OnePair);
    assert_eq!(a.kickers, [14, 9, 7, 4, 0]);
    assert_eq!(b.category, Category::HighCard);
    assert_eq!(b.kickers, [14, 13, 9, 8, 7]);
    assert!(compare_hands(&a, &b).is_gt());
}

#[test]
fn three_pairs_keep_the_best_two_and_best_kicker() {
    let cards = [
        c(S::Clubs, R::Ten),
        c(S::Hearts, R::Ten),
        c(S::Spades, R::Six),
        c(S::Diamonds, R::Six),
        c(S::Clubs, R::Four),
        c(S::Diamonds, R::Four),
        c(S::Hearts, R::Two),
    ];
    let hs = best_hand(&cards);
    assert_eq!(hs.category, Category::TwoPair);
    // the third pair supplies the kicker
    assert_eq!(hs.kickers, [10, 6, 4, 0, 0]);
}

#[test]
fn two_triples_make_the_highest_full_house() {
    let cards = [
        c(S::Clubs, R::Five),
        c(S::Hearts, R::Five),
        c(S::Spades, R::Five),
        c(S::Diamonds, R::Nine),
        c(S::Clubs, R::Nine),
        c(S::Hearts, R::Nine),
        c(S::Hearts, R::King),
    ];
    let hs = best_hand(&cards);
    assert_eq!(hs.category, Category::FullHouse);
    assert_eq!(hs.kickers, [9, 5, 0, 0, 0]);
}

#[test]
fn wheel_is_found_inside_seven_cards() {
    let cards = [
        c(S::Clubs, R::Ace),
        c(S::Hearts, R::Two),
        c(S::Spades, R::Three),
        c(S::Diamonds, R::Four),
        c(S::Clubs, R::Five),
        c(S::Hearts, R::King),
        c(S::Hearts, R::Queen),
    ];
    let hs = best_hand(&cards);
    assert_eq!(hs.category, Category::Straight);
    assert_eq!(hs.kickers[0], 5);
}

#[test]
fn best_five_reports_the_cards_used() {
    let cards = [
        c(S::Hearts, R::Two),
        c(S::Clubs, R::Three),
        c(S::Spades, R::Ten),
        c(S::Spades, R::Jack),
        c(S::Spades, R::Queen),
        c(S::Spades, R::King),
        c(S::Spades, R::Ace),
    ];
    let best = best_five(&cards);
    assert_eq!(best.ranking.category, Category::RoyalFlush);
    assert!(best.cards.iter().all(|card| card.suit == S::Spades));
}

#[test]
fn category_names_match_display() {
    assert_eq!(Category::RoyalFlush.to_string(), "Royal Flush");
    assert_eq!(Category::ThreeOfAKind.name(), "Three of a Kind");
    assert_eq!(Category::HighCard.to_string(), "High Card");
}
