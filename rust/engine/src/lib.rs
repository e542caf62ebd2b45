//! # showdown-engine: Heads-up Showdown Poker Core
//!
//! Resolves single-showdown poker rounds between a player and the dealer:
//! each side gets two hole cards, both share five board cards, and the best
//! five-card hand wins a flat 1:1 payout.
//!
//! ## Core Modules
//!
//! - [`cards`] - Card representation (Suit, Rank, Card), parsing and deck construction
//! - [`deck`] - Shuffled per-round deck with injectable or seeded ChaCha RNG
//! - [`detectors`] - One pure detector per hand category
//! - [`hand`] - Categories, rankings and the best-of-21 selector
//! - [`rules`] - Table limits and bet validation
//! - [`round`] - Dealing, showdown and round outcomes
//! - [`session`] - Balance and statistics across rounds
//! - [`logger`] - JSONL round records
//! - [`errors`] - Error types for game operations
//!
//! ## Quick Start
//!
//! ```rust
//! use showdown_engine::cards::{Card, Rank, Suit};
//! use showdown_engine::hand::{best_hand, Category};
//!
//! let cards = [
//!     Card::new(Rank::Ten, Suit::Spades),
//!     Card::new(Rank::Jack, Suit::Spades),
//!     Card::new(Rank::Queen, Suit::Spades),
//!     Card::new(Rank::King, Suit::Spades),
//!     Card::new(Rank::Ace, Suit::Spades),
//!     Card::new(Rank::Two, Suit::Hearts),
//!     Card::new(Rank::Three, Suit::Diamonds),
//! ];
//!
//! let ranking = best_hand(&cards);
//! assert_eq!(ranking.category, Category::RoyalFlush);
//! ```
//!
//! ## Playing a Round
//!
//! ```rust
//! use showdown_engine::round::{resolve_round, RoundResult};
//!
//! match resolve_round(100, 10) {
//!     Ok(outcome) => match outcome.result {
//!         RoundResult::PlayerWins => println!("{}", outcome.message()),
//!         RoundResult::DealerWins => println!("{}", outcome.message()),
//!         RoundResult::Push => println!("push"),
//!     },
//!     Err(e) => println!("Invalid bet: {}", e),
//! }
//! ```
//!
//! ## Deterministic Dealing
//!
//! ```rust
//! use showdown_engine::deck::Deck;
//!
//! // Same seed produces same shuffle
//! let mut deck1 = Deck::new_with_seed(42);
//! let mut deck2 = Deck::new_with_seed(42);
//! assert_eq!(deck1.draw(), deck2.draw());
//! ```

pub mod cards;
pub mod deck;
pub mod detectors;
pub mod errors;
pub mod hand;
pub mod logger;
pub mod round;
pub mod rules;
pub mod session;
