//! One detector per hand category.
//!
//! Every detector is a pure function over a slice of cards that answers
//! "present, with this tie-break key" or "absent". They are written for five
//! cards but stay well-defined on larger slices (a flush then means five or
//! more cards of one suit, a full house may be built from two triples).
//!
//! Keys hold rank values (2..=14, Ace high) from most to least significant,
//! padded with zeros, so two keys of the same category compare
//! lexicographically.

use crate::cards::{all_suits, Card, Rank};
use crate::hand::{Category, HandRanking};

pub type Key = [u8; 5];

const ACE: u8 = Rank::Ace as u8;

/// Returns the key for `category` if the cards contain that category.
pub fn detect(category: Category, cards: &[Card]) -> Option<Key> {
    match category {
        Category::HighCard => Some(high_card(cards)),
        Category::OnePair => n_of_a_kind(cards, 2),
        Category::TwoPair => two_pair(cards),
        Category::ThreeOfAKind => n_of_a_kind(cards, 3),
        Category::Straight => straight(cards).map(top_only),
        Category::Flush => flush(cards),
        Category::FullHouse => full_house(cards),
        Category::FourOfAKind => n_of_a_kind(cards, 4),
        Category::StraightFlush => straight_flush(cards).map(top_only),
        Category::RoyalFlush => royal_flush(cards).then_some(top_only(ACE)),
    }
}

/// Assigns the strongest category whose detector fires.
pub fn classify(cards: &[Card]) -> HandRanking {
    Category::DESCENDING
        .iter()
        .find_map(|&category| {
            detect(category, cards).map(|kickers| HandRanking { category, kickers })
        })
        .unwrap_or(HandRanking {
            category: Category::HighCard,
            kickers: high_card(cards),
        })
}

pub fn flush(cards: &[Card]) -> Option<Key> {
    all_suits().into_iter().find_map(|suit| {
        let ranks = ranks_desc(cards.iter().filter(|c| c.suit == suit));
        (ranks.len() >= 5).then(|| pad(&ranks))
    })
}

/// Top rank of the highest five-card run; 5 for the wheel.
pub fn straight(cards: &[Card]) -> Option<u8> {
    // bit v set when some card reads as value v; the Ace sets both 14 and 1
    let mut mask: u16 = 0;
    for c in cards {
        mask |= 1 << c.rank.value();
        mask |= 1 << c.rank.low_value();
    }
    (5..=ACE).rev().find(|&high| {
        let window = 0b1_1111u16 << (high - 4);
        mask & window == window
    })
}

/// Top rank of the best straight formed inside a single suit.
pub fn straight_flush(cards: &[Card]) -> Option<u8> {
    all_suits()
        .into_iter()
        .filter_map(|suit| {
            let suited: Vec<Card> = cards.iter().copied().filter(|c| c.suit == suit).collect();
            if suited.len() < 5 {
                None
            } else {
                straight(&suited)
            }
        })
        .max()
}

pub fn royal_flush(cards: &[Card]) -> bool {
    straight_flush(cards) == Some(ACE)
}

/// Highest rank seen exactly `n` times, followed by the best `5 - n` other cards.
pub fn n_of_a_kind(cards: &[Card], n: usize) -> Option<Key> {
    let counts = rank_counts(cards);
    let rank = (2..=ACE).rev().find(|&r| counts[r as usize] as usize == n)?;
    let mut key = vec![rank];
    key.extend(
        ranks_desc(cards.iter().filter(|c| c.rank.value() != rank))
            .into_iter()
            .take(5usize.saturating_sub(n)),
    );
    Some(pad(&key))
}

pub fn two_pair(cards: &[Card]) -> Option<Key> {
    let counts = rank_counts(cards);
    let pairs: Vec<u8> = (2..=ACE)
        .rev()
        .filter(|&r| counts[r as usize] >= 2)
        .collect();
    if pairs.len() < 2 {
        return None;
    }
    let (high, low) = (pairs[0], pairs[1]);
    let kicker = ranks_desc(
        cards
            .iter()
            .filter(|c| c.rank.value() != high && c.rank.value() != low),
    )
    .first()
    .copied()
    .unwrap_or(0);
    Some([high, low, kicker, 0, 0])
}

pub fn full_house(cards: &[Card]) -> Option<Key> {
    let counts = rank_counts(cards);
    let trips = (2..=ACE).rev().find(|&r| counts[r as usize] == 3)?;
    // a second triple also qualifies as the pair
    let pair = (2..=ACE)
        .rev()
        .find(|&r| r != trips && counts[r as usize] >= 2)?;
    Some([trips, pair, 0, 0, 0])
}

pub fn high_card(cards: &[Card]) -> Key {
    pad(&ranks_desc(cards.iter()))
}

fn rank_counts(cards: &[Card]) -> [u8; 15] {
    let mut counts = [0u8; 15];
    for c in cards {
        counts[c.rank.value() as usize] += 1;
    }
    counts
}

fn ranks_desc<'a>(cards: impl Iterator<Item = &'a Card>) -> Vec<u8> {
    let mut v: Vec<u8> = cards.map(|c| c.rank.value()).collect();
    v.sort_unstable_by(|a, b| b.cmp(a));
    v
}

fn pad(values: &[u8]) -> Key {
    let mut k = [0u8; 5];
    for (slot, &v) in k.iter_mut().zip(values) {
        *slot = v;
    }
    k
}

fn top_only(high: u8) -> Key {
    [high, 0, 0, 0, 0]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Suit;

    fn c(r: Rank, s: Suit) -> Card {
        Card::new(r, s)
    }

    #[test]
    fn pad_truncates_and_fills() {
        assert_eq!(pad(&[9, 8]), [9, 8, 0, 0, 0]);
        assert_eq!(pad(&[9, 8, 7, 6, 5, 4]), [9, 8, 7, 6, 5]);
    }

    #[test]
    fn rank_counts_tally_each_rank() {
        let cards = [
            c(Rank::Ace, Suit::Spades),
            c(Rank::Ace, Suit::Clubs),
            c(Rank::Two, Suit::Hearts),
        ];
        let counts = rank_counts(&cards);
        assert_eq!(counts[14], 2);
        assert_eq!(counts[2], 1);
        assert_eq!(counts.iter().map(|&n| n as usize).sum::<usize>(), 3);
    }
}
