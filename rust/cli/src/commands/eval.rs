//! Eval command handler.
//!
//! Evaluates fixed cards instead of dealing: prints the best five-card hand
//! for `--hole` plus `--board`, and with `--vs` settles a showdown against
//! the given opponent hole cards, the opponent sitting in the dealer's seat.

use crate::error::CliError;
use crate::formatters::{format_best_hand, format_result};
use crate::validation::{ensure_distinct, parse_board, parse_hole};
use showdown_engine::hand::{best_five, seven_cards};
use showdown_engine::round::{Deal, showdown};
use std::io::Write;

pub fn handle_eval_command(
    hole: &str,
    board: &str,
    vs: Option<&str>,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let hole = parse_hole(hole)?;
    let board = parse_board(board)?;

    let Some(vs) = vs else {
        let cards = seven_cards(&hole, &board);
        ensure_distinct(&cards)?;
        writeln!(out, "Hand: {}", format_best_hand(&best_five(&cards)))?;
        return Ok(());
    };

    let opponent = parse_hole(vs)?;
    let mut all = seven_cards(&hole, &board).to_vec();
    all.extend_from_slice(&opponent);
    ensure_distinct(&all)?;

    let outcome = showdown(
        Deal {
            player_hole: hole,
            dealer_hole: opponent,
            board,
        },
        0,
    );
    writeln!(out, "Hand: {}", format_best_hand(&outcome.player))?;
    writeln!(out, "Opponent: {}", format_best_hand(&outcome.dealer))?;
    writeln!(out, "Result: {}", format_result(outcome.result))?;
    writeln!(out, "{}", outcome.message())?;
    Ok(())
}
