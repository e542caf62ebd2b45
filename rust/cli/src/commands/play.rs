//! # Play Command
//!
//! Plays a session of showdown rounds against the dealer at a fixed bet.
//!
//! Each round prints the deal, both best hands, the result message and the
//! running balance. The session ends after the requested number of rounds,
//! or earlier when:
//!
//! - the balance can no longer cover the bet (including going bust)
//! - the win rate over the last 20 rounds trips the table's suspicion check
//!
//! With `--log FILE` every round is also written as one JSON line.

use crate::config;
use crate::error::CliError;
use crate::formatters::{format_best_hand, format_board, format_net};
use crate::ui;
use showdown_engine::logger::{RoundLogger, RoundRecord};
use showdown_engine::round::Dealer;
use showdown_engine::rules::validate_bet;
use showdown_engine::session::{SUSPICIOUS_WIN_RATE, Session, WIN_RATE_WINDOW};
use std::io::Write;

/// Arguments of the play command after clap parsing; `None` falls back to
/// the resolved configuration.
#[derive(Debug, Clone, Default)]
pub struct PlayArgs {
    pub bet: u32,
    pub rounds: u32,
    pub balance: Option<u32>,
    pub seed: Option<u64>,
    pub log: Option<String>,
}

/// Handle the play command.
///
/// # Errors
///
/// * `CliError::Config` if configuration cannot be resolved
/// * `CliError::InvalidInput` if `rounds` or the starting balance is zero
/// * `CliError::Engine` if the bet is rejected for the starting balance
/// * `CliError::Io` if the log file or output stream fails
pub fn handle_play_command(
    args: PlayArgs,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    if args.rounds == 0 {
        return Err(CliError::InvalidInput("rounds must be >= 1".to_string()));
    }

    let cfg = config::load_with_sources()?.config;
    let balance = args.balance.unwrap_or(cfg.starting_balance);
    if balance == 0 {
        return Err(CliError::InvalidInput("balance must be > 0".to_string()));
    }
    let limits = cfg.limits();
    let bet = validate_bet(balance, args.bet, &limits)?;
    let seed = args.seed.or(cfg.seed).unwrap_or_else(rand::random);

    let mut logger = match &args.log {
        Some(path) => Some(RoundLogger::create(path)?),
        None => None,
    };

    writeln!(
        out,
        "play: bet={} rounds={} balance={} seed={}",
        bet, args.rounds, balance, seed
    )?;

    let mut dealer = Dealer::new(Some(seed), limits);
    let mut session = Session::new(balance);

    for i in 1..=args.rounds {
        if session.balance() < bet {
            writeln!(
                out,
                "Balance {} no longer covers the bet of {}.",
                session.balance(),
                bet
            )?;
            break;
        }

        let outcome = session.play(&mut dealer, bet)?;
        let deal = &outcome.deal;

        writeln!(out, "Round {}", i)?;
        writeln!(
            out,
            "Player: {}  Dealer: {}  Board: {}",
            format_board(&deal.player_hole),
            format_board(&deal.dealer_hole),
            format_board(&deal.board)
        )?;
        writeln!(out, "Player hand: {}", format_best_hand(&outcome.player))?;
        writeln!(out, "Dealer hand: {}", format_best_hand(&outcome.dealer))?;
        writeln!(out, "{}", outcome.message())?;
        writeln!(
            out,
            "Balance: {} ({})",
            session.balance(),
            format_net(outcome.net())
        )?;

        if let Some(logger) = logger.as_mut() {
            let record =
                RoundRecord::from_outcome(logger.next_id(), Some(seed), &outcome, session.balance());
            logger.write(&record)?;
        }

        if session.is_flagged() {
            ui::display_warning(
                err,
                &format!(
                    "won at least {:.0}% of the last {} rounds; the table is closed to you",
                    SUSPICIOUS_WIN_RATE * 100.0,
                    WIN_RATE_WINDOW
                ),
            )?;
            break;
        }
    }

    let stats = session.stats();
    writeln!(
        out,
        "Session complete: rounds={} wins={} losses={} pushes={} wagered={} net={} balance={}",
        stats.rounds,
        stats.wins,
        stats.losses,
        stats.pushes,
        stats.total_wagered,
        format_net(stats.net_winnings),
        session.balance()
    )?;
    if session.is_bust() {
        writeln!(out, "You are out of money.")?;
    }
    Ok(())
}
