//! Deal command handler.
//!
//! Deals one round from a fresh shuffled deck and prints both sides' hole
//! cards and the board, without evaluating anything. With a seed the output
//! is reproducible.

use crate::error::CliError;
use crate::formatters::format_board;
use showdown_engine::deck::Deck;
use showdown_engine::round::Deal;
use std::io::Write;

/// Handle the deal command.
///
/// Prints exactly three lines: `Player:`, `Dealer:` and `Board:`.
pub fn handle_deal_command(seed: Option<u64>, out: &mut dyn Write) -> Result<(), CliError> {
    let seed = seed.unwrap_or_else(rand::random);
    let mut deck = Deck::new_with_seed(seed);
    let deal = Deal::from_deck(&mut deck)?;

    writeln!(out, "Player: {}", format_board(&deal.player_hole))?;
    writeln!(out, "Dealer: {}", format_board(&deal.dealer_hole))?;
    writeln!(out, "Board: {}", format_board(&deal.board))?;
    Ok(())
}
