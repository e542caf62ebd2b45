//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "showdown",
    version,
    about = "Heads-up showdown poker against the dealer"
)]
pub struct ShowdownCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Play a session of showdown rounds at a fixed bet
    Play {
        /// Stake per round
        #[arg(long)]
        bet: u32,
        /// Number of rounds to play
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        rounds: u32,
        /// Starting balance, overrides configuration
        #[arg(long)]
        balance: Option<u32>,
        /// RNG seed, overrides configuration
        #[arg(long)]
        seed: Option<u64>,
        /// Append one JSON line per round to this file
        #[arg(long)]
        log: Option<String>,
    },
    /// Deal one round and print the cards
    Deal {
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Evaluate the best hand for given cards
    Eval {
        /// Two hole cards, e.g. "As Ks"
        #[arg(long)]
        hole: String,
        /// Five board cards, e.g. "Qs Js Ts 2h 3d"
        #[arg(long)]
        board: String,
        /// Opponent hole cards for a showdown
        #[arg(long)]
        vs: Option<String>,
    },
    /// Print the resolved configuration and where each value came from
    Cfg,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_subcommand() {
        let commands = vec![
            vec!["showdown", "cfg"],
            vec!["showdown", "deal"],
            vec!["showdown", "deal", "--seed", "7"],
            vec!["showdown", "play", "--bet", "10"],
            vec![
                "showdown", "play", "--bet", "10", "--rounds", "3", "--balance", "50", "--seed",
                "1", "--log", "out.jsonl",
            ],
            vec!["showdown", "eval", "--hole", "As Ks", "--board", "Qs Js Ts 2h 3d"],
        ];
        for args in commands {
            let result = ShowdownCli::try_parse_from(&args);
            assert!(result.is_ok(), "Failed to parse: {:?}", args);
        }
    }

    #[test]
    fn play_requires_bet_and_positive_rounds() {
        assert!(ShowdownCli::try_parse_from(["showdown", "play"]).is_err());
        assert!(
            ShowdownCli::try_parse_from(["showdown", "play", "--bet", "5", "--rounds", "0"])
                .is_err()
        );
    }

    #[test]
    fn play_defaults_to_one_round() {
        let cli = ShowdownCli::try_parse_from(["showdown", "play", "--bet", "5"]).unwrap();
        match cli.cmd {
            Commands::Play { rounds, seed, .. } => {
                assert_eq!(rounds, 1);
                assert_eq!(seed, None);
            }
            other => panic!("expected play, got {:?}", other),
        }
    }
}
