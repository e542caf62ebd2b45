//! Input parsing and validation for card arguments.
//!
//! Turns `--hole`, `--board` and `--vs` text into fixed-size card arrays and
//! rejects impossible inputs, such as the same card appearing twice, before
//! the engine sees them.
//!
//! ## Example
//!
//! ```rust
//! use showdown_cli::validation::{parse_board, parse_hole};
//!
//! let hole = parse_hole("As Ks").unwrap();
//! let board = parse_board("Qs,Js,Ts,2h,3d").unwrap();
//! assert_eq!(hole.len() + board.len(), 7);
//!
//! assert!(parse_hole("As").is_err());
//! ```

use std::collections::HashSet;

use showdown_engine::cards::{Card, parse_cards};

use crate::error::CliError;

fn parse_exact<const N: usize>(text: &str, what: &str) -> Result<[Card; N], CliError> {
    let cards = parse_cards(text)?;
    let found = cards.len();
    cards.try_into().map_err(|_| {
        CliError::InvalidInput(format!("{} needs {} cards, got {}", what, N, found))
    })
}

/// Parse exactly two hole cards.
pub fn parse_hole(text: &str) -> Result<[Card; 2], CliError> {
    parse_exact(text, "hole")
}

/// Parse exactly five board cards.
pub fn parse_board(text: &str) -> Result<[Card; 5], CliError> {
    parse_exact(text, "board")
}

/// Fails on the first card that appears more than once.
pub fn ensure_distinct(cards: &[Card]) -> Result<(), CliError> {
    let mut seen = HashSet::with_capacity(cards.len());
    for card in cards {
        if !seen.insert(*card) {
            return Err(CliError::InvalidInput(format!(
                "duplicate card: {}",
                card.short()
            )));
        }
    }
    Ok(())
}
