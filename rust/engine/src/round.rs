use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::cards::Card;
use crate::deck::Deck;
use crate::errors::GameError;
use crate::hand::{best_five, seven_cards, BestHand, Category};
use crate::rules::{validate_bet, BetLimits};

/// Cards dealt for one round: two hole cards per side and five shared cards.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct Deal {
    pub player_hole: [Card; 2],
    pub dealer_hole: [Card; 2],
    pub board: [Card; 5],
}

impl Deal {
    /// Hole cards alternate player, dealer, player, dealer; then the board.
    pub fn from_deck(deck: &mut Deck) -> Result<Self, GameError> {
        let p1 = deck.draw()?;
        let d1 = deck.draw()?;
        let p2 = deck.draw()?;
        let d2 = deck.draw()?;
        let board = [
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
            deck.draw()?,
        ];
        Ok(Self {
            player_hole: [p1, p2],
            dealer_hole: [d1, d2],
            board,
        })
    }

    pub fn player_cards(&self) -> [Card; 7] {
        seven_cards(&self.player_hole, &self.board)
    }

    pub fn dealer_cards(&self) -> [Card; 7] {
        seven_cards(&self.dealer_hole, &self.board)
    }
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub enum RoundResult {
    PlayerWins,
    DealerWins,
    Push,
}

impl RoundResult {
    /// Flat 1:1 payout whatever the winning category.
    pub fn payout_multiplier(self) -> i64 {
        match self {
            RoundResult::PlayerWins => 1,
            RoundResult::DealerWins => -1,
            RoundResult::Push => 0,
        }
    }
}

/// Everything a caller needs to settle and report one showdown.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundOutcome {
    pub result: RoundResult,
    pub bet: u32,
    pub deal: Deal,
    pub player: BestHand,
    pub dealer: BestHand,
}

impl RoundOutcome {
    /// Category of the winning hand; on a push both sides share it.
    pub fn winning_category(&self) -> Category {
        match self.result {
            RoundResult::DealerWins => self.dealer.ranking.category,
            RoundResult::PlayerWins | RoundResult::Push => self.player.ranking.category,
        }
    }

    pub fn category_name(&self) -> &'static str {
        self.winning_category().name()
    }

    pub fn payout_multiplier(&self) -> i64 {
        self.result.payout_multiplier()
    }

    /// Signed change to the player's balance.
    pub fn net(&self) -> i64 {
        i64::from(self.bet) * self.payout_multiplier()
    }

    /// Balance after this round, given the balance the bet was validated
    /// against.
    pub fn settle(&self, balance: u32) -> u32 {
        match self.result {
            RoundResult::PlayerWins => balance.saturating_add(self.bet),
            RoundResult::DealerWins => balance.saturating_sub(self.bet),
            RoundResult::Push => balance,
        }
    }

    pub fn message(&self) -> String {
        match self.result {
            RoundResult::PlayerWins => format!("You win with a {}!", self.category_name()),
            RoundResult::DealerWins => format!("Dealer wins with a {}!", self.category_name()),
            RoundResult::Push => "It's a tie! Bet returned.".to_string(),
        }
    }
}

/// Evaluates both sides of a deal and decides the round.
pub fn showdown(deal: Deal, bet: u32) -> RoundOutcome {
    let player = best_five(&deal.player_cards());
    let dealer = best_five(&deal.dealer_cards());
    let result = match player.ranking.cmp(&dealer.ranking) {
        std::cmp::Ordering::Greater => RoundResult::PlayerWins,
        std::cmp::Ordering::Less => RoundResult::DealerWins,
        std::cmp::Ordering::Equal => RoundResult::Push,
    };
    RoundOutcome {
        result,
        bet,
        deal,
        player,
        dealer,
    }
}

/// Plays one round with default table limits and the thread RNG.
///
/// # Examples
///
/// ```
/// use showdown_engine::round::resolve_round;
///
/// let outcome = resolve_round(50, 10).expect("valid bet");
/// assert!([60, 40, 50].contains(&outcome.settle(50)));
///
/// assert!(resolve_round(50, 0).is_err());
/// assert!(resolve_round(50, 75).is_err());
/// ```
pub fn resolve_round(balance: u32, bet: u32) -> Result<RoundOutcome, GameError> {
    resolve_round_with(&BetLimits::default(), balance, bet, &mut rand::rng())
}

/// Plays one round with explicit limits and random source. The bet is
/// validated before a deck exists; after that the round always completes.
pub fn resolve_round_with<R: Rng + ?Sized>(
    limits: &BetLimits,
    balance: u32,
    bet: u32,
    rng: &mut R,
) -> Result<RoundOutcome, GameError> {
    let bet = validate_bet(balance, bet, limits).inspect_err(|e| {
        debug!(balance, bet, error = %e, "bet rejected");
    })?;
    let mut deck = Deck::shuffled(rng);
    let deal = Deal::from_deck(&mut deck)?;
    let outcome = showdown(deal, bet);
    debug!(
        bet,
        result = ?outcome.result,
        player = %outcome.player.ranking.category,
        dealer = %outcome.dealer.ranking.category,
        "round resolved"
    );
    Ok(outcome)
}

/// Deals a sequence of rounds at one table from a single seeded RNG, so a
/// whole session replays from its seed. Every round still gets a fresh deck.
///
/// # Examples
///
/// ```
/// use showdown_engine::round::Dealer;
/// use showdown_engine::rules::BetLimits;
///
/// let mut a = Dealer::new(Some(7), BetLimits::default());
/// let mut b = Dealer::new(Some(7), BetLimits::default());
/// assert_eq!(a.resolve(100, 10).unwrap(), b.resolve(100, 10).unwrap());
/// ```
#[derive(Debug, Clone)]
pub struct Dealer {
    seed: u64,
    limits: BetLimits,
    rng: ChaCha20Rng,
    rounds: u32,
}

impl Dealer {
    pub fn new(seed: Option<u64>, limits: BetLimits) -> Self {
        let seed = seed.unwrap_or_else(rand::random);
        Self {
            seed,
            limits,
            rng: ChaCha20Rng::seed_from_u64(seed),
            rounds: 0,
        }
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn limits(&self) -> &BetLimits {
        &self.limits
    }

    pub fn rounds_dealt(&self) -> u32 {
        self.rounds
    }

    pub fn resolve(&mut self, balance: u32, bet: u32) -> Result<RoundOutcome, GameError> {
        let outcome = resolve_round_with(&self.limits, balance, bet, &mut self.rng)?;
        self.rounds += 1;
        Ok(outcome)
    }
}
