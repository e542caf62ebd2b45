use serde::{Deserialize, Serialize};

use crate::cards::Card;
use crate::round::{RoundOutcome, RoundResult};

/// Summary of one resolved round, one JSON object per line in the round log.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// Unique identifier for this round (format: YYYYMMDD-NNNNNN)
    pub round_id: String,
    /// Seed of the dealer that produced the round, when known
    pub seed: Option<u64>,
    pub bet: u32,
    pub player_hole: Vec<Card>,
    pub dealer_hole: Vec<Card>,
    pub board: Vec<Card>,
    /// Display name of the player's best category
    pub player_hand: String,
    /// Display name of the dealer's best category
    pub dealer_hand: String,
    pub result: RoundResult,
    /// Signed change to the player's balance
    pub net: i64,
    pub balance_after: u32,
    /// Timestamp when the round was logged (RFC3339 format)
    #[serde(default)]
    pub ts: Option<String>,
}

impl RoundRecord {
    pub fn from_outcome(
        round_id: String,
        seed: Option<u64>,
        outcome: &RoundOutcome,
        balance_after: u32,
    ) -> Self {
        Self {
            round_id,
            seed,
            bet: outcome.bet,
            player_hole: outcome.deal.player_hole.to_vec(),
            dealer_hole: outcome.deal.dealer_hole.to_vec(),
            board: outcome.deal.board.to_vec(),
            player_hand: outcome.player.ranking.category.name().to_string(),
            dealer_hand: outcome.dealer.ranking.category.name().to_string(),
            result: outcome.result,
            net: outcome.net(),
            balance_after,
            ts: None,
        }
    }
}

pub fn format_round_id(yyyymmdd: &str, seq: u32) -> String {
    format!("{}-{:06}", yyyymmdd, seq)
}

use chrono::{SecondsFormat, Utc};
use std::fs::{create_dir_all, File};
use std::io::{BufWriter, Write};
use std::path::Path;

pub struct RoundLogger {
    writer: Option<BufWriter<File>>,
    date: String,
    seq: u32,
}

impl RoundLogger {
    pub fn create<P: AsRef<Path>>(path: P) -> std::io::Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                create_dir_all(parent)?;
            }
        }
        let f = File::create(path)?;
        Ok(Self {
            writer: Some(BufWriter::new(f)),
            date: Utc::now().format("%Y%m%d").to_string(),
            seq: 0,
        })
    }

    pub fn with_seq_for_test(date: &str) -> Self {
        Self {
            writer: None,
            date: date.to_string(),
            seq: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.seq += 1;
        format_round_id(&self.date, self.seq)
    }

    pub fn write(&mut self, record: &RoundRecord) -> std::io::Result<()> {
        // inject timestamp if missing
        let mut rec = record.clone();
        if rec.ts.is_none() {
            rec.ts = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        let line = serde_json::to_string(&rec).map_err(std::io::Error::other)?;
        if let Some(w) = &mut self.writer {
            w.write_all(line.as_bytes())?;
            w.write_all(b"\n")?;
            w.flush()?;
        }
        Ok(())
    }
}
