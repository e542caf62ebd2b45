//! Configuration command handler.
//!
//! Implements the `cfg` command, which prints the resolved settings and the
//! layer each one came from (default, configuration file, or environment).
//!
//! # Example Output
//!
//! ```json
//! {
//!   "starting_balance": {
//!     "value": 100,
//!     "source": "default"
//!   },
//!   "min_bet": {
//!     "value": 5,
//!     "source": "env"
//!   },
//!   ...
//! }
//! ```

use crate::config;
use crate::error::CliError;
use std::io::Write;

/// Handle the cfg command.
///
/// # Errors
///
/// Returns `CliError::Config` if the configuration cannot be loaded or fails
/// validation, `CliError::Io` if writing to the output stream fails.
pub fn handle_cfg_command(out: &mut dyn Write) -> Result<(), CliError> {
    let config::ConfigResolved { config, sources } = config::load_with_sources()?;

    let display = serde_json::json!({
        "starting_balance": {
            "value": config.starting_balance,
            "source": sources.starting_balance,
        },
        "min_bet": {
            "value": config.min_bet,
            "source": sources.min_bet,
        },
        "max_bet": {
            "value": config.max_bet,
            "source": sources.max_bet,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        }
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
