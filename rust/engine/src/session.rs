//! In-memory bookkeeping for a run of rounds at one table.
//!
//! A [`Session`] owns the player's balance between rounds, tallies wins,
//! losses and money moved, and watches the recent win rate. Saving any of
//! this somewhere durable is up to the caller.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::errors::GameError;
use crate::round::{Dealer, RoundOutcome, RoundResult};

/// Number of most recent rounds the win-rate check looks at.
pub const WIN_RATE_WINDOW: usize = 20;
/// Win rate over the window at which a session is flagged.
pub const SUSPICIOUS_WIN_RATE: f64 = 0.8;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStats {
    pub rounds: u32,
    pub wins: u32,
    pub losses: u32,
    pub pushes: u32,
    pub total_wagered: u64,
    pub net_winnings: i64,
}

#[derive(Debug, Clone)]
pub struct Session {
    balance: u32,
    stats: SessionStats,
    // true for a win; pushes count as non-wins
    recent: VecDeque<bool>,
}

impl Session {
    pub fn new(balance: u32) -> Self {
        Self {
            balance,
            stats: SessionStats::default(),
            recent: VecDeque::with_capacity(WIN_RATE_WINDOW),
        }
    }

    pub fn balance(&self) -> u32 {
        self.balance
    }

    pub fn stats(&self) -> &SessionStats {
        &self.stats
    }

    /// Resolves one round against the current balance and records it.
    /// A rejected bet leaves the session untouched.
    pub fn play(&mut self, dealer: &mut Dealer, bet: u32) -> Result<RoundOutcome, GameError> {
        let outcome = dealer.resolve(self.balance, bet)?;
        self.record(&outcome);
        Ok(outcome)
    }

    pub fn record(&mut self, outcome: &RoundOutcome) {
        self.balance = outcome.settle(self.balance);

        let s = &mut self.stats;
        s.rounds += 1;
        s.total_wagered += u64::from(outcome.bet);
        s.net_winnings += outcome.net();
        match outcome.result {
            RoundResult::PlayerWins => s.wins += 1,
            RoundResult::DealerWins => s.losses += 1,
            RoundResult::Push => s.pushes += 1,
        }

        if self.recent.len() == WIN_RATE_WINDOW {
            self.recent.pop_front();
        }
        self.recent
            .push_back(outcome.result == RoundResult::PlayerWins);

        if self.is_flagged() {
            warn!(
                rounds = self.stats.rounds,
                win_rate = self.recent_win_rate().unwrap_or_default(),
                "suspicious win rate"
            );
        }
    }

    pub fn is_bust(&self) -> bool {
        self.balance == 0
    }

    /// Win rate over the last [`WIN_RATE_WINDOW`] rounds, once that many
    /// have been played.
    pub fn recent_win_rate(&self) -> Option<f64> {
        if self.recent.len() < WIN_RATE_WINDOW {
            return None;
        }
        let wins = self.recent.iter().filter(|&&w| w).count();
        Some(wins as f64 / WIN_RATE_WINDOW as f64)
    }

    pub fn is_flagged(&self) -> bool {
        self.recent_win_rate()
            .is_some_and(|rate| rate >= SUSPICIOUS_WIN_RATE)
    }
}
