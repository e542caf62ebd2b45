use std::cmp::Ordering;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::detectors::classify;

/// The ten poker hand categories, weakest first.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub enum Category {
    HighCard = 0,
    OnePair = 1,
    TwoPair = 2,
    ThreeOfAKind = 3,
    Straight = 4,
    Flush = 5,
    FullHouse = 6,
    FourOfAKind = 7,
    StraightFlush = 8,
    RoyalFlush = 9,
}

impl Category {
    /// Strongest first; the order detectors are tried in.
    pub const DESCENDING: [Category; 10] = [
        Category::RoyalFlush,
        Category::StraightFlush,
        Category::FourOfAKind,
        Category::FullHouse,
        Category::Flush,
        Category::Straight,
        Category::ThreeOfAKind,
        Category::TwoPair,
        Category::OnePair,
        Category::HighCard,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Category::HighCard => "High Card",
            Category::OnePair => "One Pair",
            Category::TwoPair => "Two Pair",
            Category::ThreeOfAKind => "Three of a Kind",
            Category::Straight => "Straight",
            Category::Flush => "Flush",
            Category::FullHouse => "Full House",
            Category::FourOfAKind => "Four of a Kind",
            Category::StraightFlush => "Straight Flush",
            Category::RoyalFlush => "Royal Flush",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Category plus tie-break ranks. Field order gives the derived ordering:
/// category first, then kickers lexicographically.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize)]
pub struct HandRanking {
    pub category: Category,
    // kickers: ordered high -> low for tiebreaks, zero padded
    pub kickers: [u8; 5],
}

/// The winning five-card subset of a seven-card hand.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct BestHand {
    pub ranking: HandRanking,
    pub cards: [Card; 5],
}

/// Two hole cards followed by the five shared cards.
pub fn seven_cards(hole: &[Card; 2], board: &[Card; 5]) -> [Card; 7] {
    [
        hole[0], hole[1], board[0], board[1], board[2], board[3], board[4],
    ]
}

/// All 21 ways of choosing five of the seven cards, input order kept.
pub fn five_card_subsets(cards: &[Card; 7]) -> impl Iterator<Item = [Card; 5]> + '_ {
    (0..7).flat_map(move |skip_a| {
        ((skip_a + 1)..7).map(move |skip_b| {
            let mut five = [cards[0]; 5];
            let kept = cards
                .iter()
                .enumerate()
                .filter(|&(i, _)| i != skip_a && i != skip_b)
                .map(|(_, &c)| c);
            for (slot, c) in five.iter_mut().zip(kept) {
                *slot = c;
            }
            five
        })
    })
}

/// Exhaustive best-of-21 search. On equal rankings the earlier candidate is
/// kept, so the result is stable for a given card order.
pub fn best_five(cards: &[Card; 7]) -> BestHand {
    let first = [cards[0], cards[1], cards[2], cards[3], cards[4]];
    let mut best = BestHand {
        ranking: classify(&first),
        cards: first,
    };
    for five in five_card_subsets(cards) {
        let ranking = classify(&five);
        if ranking > best.ranking {
            best = BestHand {
                ranking,
                cards: five,
            };
        }
    }
    best
}

pub fn best_hand(cards: &[Card; 7]) -> HandRanking {
    best_five(cards).ranking
}

pub fn compare_hands(a: &HandRanking, b: &HandRanking) -> Ordering {
    match a.category.cmp(&b.category) {
        Ordering::Equal => a.kickers.cmp(&b.kickers),
        ord => ord,
    }
}
