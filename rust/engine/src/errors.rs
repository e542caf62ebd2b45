use thiserror::Error;

/// Why a bet was turned away before any card was dealt.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum BetRejection {
    #[error("bet must be positive")]
    NotPositive,
    #[error("minimum bet is {minimum}")]
    BelowMinimum { minimum: u32 },
    #[error("maximum bet is {ceiling}")]
    AboveCeiling { ceiling: u32 },
    #[error("balance is only {balance}")]
    InsufficientBalance { balance: u32 },
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid bet amount: {amount}, {reason}")]
    InvalidBet { amount: u32, reason: BetRejection },
    #[error("Deck exhausted")]
    DeckExhausted,
}
