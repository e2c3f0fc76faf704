//! Trade: one completed position recorded in the journal.

use super::ids::TradeId;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Errors from parsing trade enum values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TradeError {
    #[error("unknown direction '{0}' (expected long or short)")]
    UnknownDirection(String),

    #[error("unknown outcome '{0}' (expected win or loss)")]
    UnknownOutcome(String),
}

/// Position direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Direction {
    Long,
    Short,
}

impl Direction {
    pub fn label(self) -> &'static str {
        match self {
            Direction::Long => "Long",
            Direction::Short => "Short",
        }
    }
}

impl FromStr for Direction {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "long" | "buy" => Ok(Direction::Long),
            "short" | "sell" => Ok(Direction::Short),
            _ => Err(TradeError::UnknownDirection(s.to_string())),
        }
    }
}

impl TryFrom<String> for Direction {
    type Error = TradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a trade was a win or a loss.
///
/// Stored independently of `pnl`; see [`crate::store::OutcomePolicy`] for how
/// the two are kept consistent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Outcome {
    Win,
    Loss,
}

impl Outcome {
    /// Outcome implied by the sign of a pnl: break-even counts as a win.
    pub fn from_pnl(pnl: f64) -> Self {
        if pnl >= 0.0 {
            Outcome::Win
        } else {
            Outcome::Loss
        }
    }

    pub fn is_win(self) -> bool {
        self == Outcome::Win
    }

    /// Upper-case badge used by the trade list.
    pub fn badge(self) -> &'static str {
        match self {
            Outcome::Win => "WIN",
            Outcome::Loss => "LOSS",
        }
    }
}

impl FromStr for Outcome {
    type Err = TradeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "win" | "w" => Ok(Outcome::Win),
            "loss" | "l" => Ok(Outcome::Loss),
            _ => Err(TradeError::UnknownOutcome(s.to_string())),
        }
    }
}

impl TryFrom<String> for Outcome {
    type Error = TradeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Win => f.write_str("Win"),
            Outcome::Loss => f.write_str("Loss"),
        }
    }
}

/// A completed trade: entry, exit and realized pnl on one calendar date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trade {
    pub id: TradeId,
    pub date: NaiveDate,
    pub instrument: String,
    pub direction: Direction,
    pub strategy: String,

    pub entry_price: f64,
    pub exit_price: f64,

    /// Signed result: profit positive, loss negative.
    pub pnl: f64,
    pub outcome: Outcome,

    pub notes: String,
}

impl Trade {
    pub fn is_win(&self) -> bool {
        self.outcome.is_win()
    }

    /// True when `outcome` agrees with the sign of `pnl`.
    pub fn outcome_matches_pnl(&self) -> bool {
        Outcome::from_pnl(self.pnl) == self.outcome
    }
}
