use serde::{Deserialize, Serialize};

use crate::errors::{BetRejection, GameError};

/// Smallest bet the table accepts by default.
pub const DEFAULT_MIN_BET: u32 = 5;
/// Largest bet the table accepts by default.
pub const DEFAULT_MAX_BET: u32 = 100;

/// Per-round betting limits of a table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BetLimits {
    pub min: u32,
    pub max: u32,
}

impl Default for BetLimits {
    fn default() -> Self {
        Self {
            min: DEFAULT_MIN_BET,
            max: DEFAULT_MAX_BET,
        }
    }
}

impl BetLimits {
    pub fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }
}

/// Validates a bet against the table limits and the player's balance.
///
/// Runs before anything is dealt; a rejected bet leaves no trace.
///
/// # Arguments
///
/// * `balance` - Player's current balance
/// * `bet` - Amount the player wants to stake on this round
/// * `limits` - Table minimum and ceiling
///
/// # Returns
///
/// Returns `Ok(bet)` if the stake is acceptable.
///
/// # Errors
///
/// Returns [`GameError::InvalidBet`] carrying a [`BetRejection`] when:
/// - [`BetRejection::NotPositive`] - the bet is zero
/// - [`BetRejection::BelowMinimum`] - the bet is under the table minimum
/// - [`BetRejection::AboveCeiling`] - the bet is over the table ceiling
/// - [`BetRejection::InsufficientBalance`] - the bet is more than the balance
///
/// # Examples
///
/// ```
/// use showdown_engine::rules::{validate_bet, BetLimits};
///
/// let limits = BetLimits::default();
/// assert_eq!(validate_bet(50, 20, &limits), Ok(20));
/// ```
///
/// ```
/// use showdown_engine::errors::{BetRejection, GameError};
/// use showdown_engine::rules::{validate_bet, BetLimits};
///
/// let limits = BetLimits::default();
/// let err = validate_bet(50, 75, &limits).unwrap_err();
/// assert_eq!(
///     err,
///     GameError::InvalidBet {
///         amount: 75,
///         reason: BetRejection::InsufficientBalance { balance: 50 },
///     }
/// );
/// ```
pub fn validate_bet(balance: u32, bet: u32, limits: &BetLimits) -> Result<u32, GameError> {
    let reject = |reason| GameError::InvalidBet {
        amount: bet,
        reason,
    };
    if bet == 0 {
        return Err(reject(BetRejection::NotPositive));
    }
    if bet < limits.min {
        return Err(reject(BetRejection::BelowMinimum {
            minimum: limits.min,
        }));
    }
    if bet > limits.max {
        return Err(reject(BetRejection::AboveCeiling {
            ceiling: limits.max,
        }));
    }
    if bet > balance {
        return Err(reject(BetRejection::InsufficientBalance { balance }));
    }
    Ok(bet)
}
