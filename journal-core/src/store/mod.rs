//! Trade Store: owns the journal's trades as an immutable snapshot.
//!
//! Mutation never happens in place: `with_trade`, `without_trade` and
//! `with_replaced` each return a new store, so a snapshot handed to the
//! aggregator or a UI frame stays valid for as long as it is held.
//!
//! Validation happens here, at the boundary:
//! - trade IDs are unique
//! - dates are real calendar dates (parsed from `YYYY-MM-DD`)
//! - prices and pnl are finite
//! - outcome agrees with the pnl sign, under [`OutcomePolicy::Strict`]

pub mod records;
pub mod seed;

use std::collections::HashSet;
use std::fmt;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::{InvalidDateError, Outcome, Trade, TradeId};

pub use records::TradeRecord;

/// Errors from building or loading a trade store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate trade id {0}")]
    DuplicateId(TradeId),

    #[error("trade {0} not found")]
    NotFound(TradeId),

    #[error("trade {id}: outcome {outcome} disagrees with pnl {pnl} (strict outcome policy)")]
    OutcomeMismatch { id: TradeId, outcome: Outcome, pnl: f64 },

    #[error("trade {id}: {field} is not a finite number")]
    NonFinite { id: TradeId, field: &'static str },

    #[error("trade {id}: {source}")]
    InvalidDate {
        id: TradeId,
        #[source]
        source: InvalidDateError,
    },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unsupported trade file format: {0} (expected .json, .csv or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// How the store treats a trade whose outcome disagrees with its pnl sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutcomePolicy {
    /// Reject the trade: outcome must be Win iff pnl >= 0.
    #[default]
    Strict,
    /// Accept any combination, e.g. a break-even trade marked as a loss.
    Independent,
}

impl FromStr for OutcomePolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(OutcomePolicy::Strict),
            "independent" => Ok(OutcomePolicy::Independent),
            other => Err(format!(
                "unknown outcome policy '{other}' (expected strict or independent)"
            )),
        }
    }
}

impl fmt::Display for OutcomePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutcomePolicy::Strict => f.write_str("strict"),
            OutcomePolicy::Independent => f.write_str("independent"),
        }
    }
}

/// Immutable, shareable view of the store's trades.
pub type Snapshot = Arc<[Trade]>;

/// The ordered trade collection plus the policy it was validated under.
#[derive(Debug, Clone)]
pub struct TradeStore {
    trades: Snapshot,
    policy: OutcomePolicy,
}

impl TradeStore {
    /// Validate `trades` and wrap them in a store. Input order is preserved.
    pub fn new(trades: Vec<Trade>, policy: OutcomePolicy) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(trades.len());
        for trade in &trades {
            if !seen.insert(trade.id) {
                return Err(StoreError::DuplicateId(trade.id));
            }
            validate(trade, policy)?;
        }
        tracing::debug!(count = trades.len(), %policy, "trade store validated");
        Ok(Self {
            trades: trades.into(),
            policy,
        })
    }

    /// Empty store.
    pub fn empty(policy: OutcomePolicy) -> Self {
        Self {
            trades: Vec::<Trade>::new().into(),
            policy,
        }
    }

    /// Store holding the built-in sample journal.
    pub fn seeded() -> Self {
        Self {
            trades: seed::sample_trades().into(),
            policy: OutcomePolicy::Strict,
        }
    }

    /// Build a store from raw records (dates parsed, missing outcomes derived).
    pub fn from_records(
        records: Vec<TradeRecord>,
        policy: OutcomePolicy,
    ) -> Result<Self, StoreError> {
        let trades = records
            .into_iter()
            .map(TradeRecord::into_trade)
            .collect::<Result<Vec<_>, _>>()?;
        Self::new(trades, policy)
    }

    /// Load trades from a `.json`, `.csv` or `.toml` file.
    pub fn load(path: &Path, policy: OutcomePolicy) -> Result<Self, StoreError> {
        let io_err = |source| StoreError::Io {
            path: path.to_path_buf(),
            source,
        };
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        let records = match ext.as_deref() {
            Some("json") => records::parse_json(&std::fs::read_to_string(path).map_err(io_err)?)?,
            Some("toml") => records::parse_toml(&std::fs::read_to_string(path).map_err(io_err)?)?,
            Some("csv") => records::parse_csv(File::open(path).map_err(io_err)?)?,
            _ => return Err(StoreError::UnsupportedFormat(path.to_path_buf())),
        };

        let store = Self::from_records(records, policy)?;
        tracing::info!(path = %path.display(), count = store.len(), "loaded trades");
        Ok(store)
    }

    /// Cheap clone of the current trades.
    pub fn snapshot(&self) -> Snapshot {
        Arc::clone(&self.trades)
    }

    pub fn trades(&self) -> &[Trade] {
        &self.trades
    }

    pub fn policy(&self) -> OutcomePolicy {
        self.policy
    }

    pub fn len(&self) -> usize {
        self.trades.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trades.is_empty()
    }

    pub fn get(&self, id: TradeId) -> Option<&Trade> {
        self.trades.iter().find(|t| t.id == id)
    }

    /// One past the highest ID in use, or 1 for an empty store.
    pub fn next_id(&self) -> TradeId {
        self.trades
            .iter()
            .map(|t| t.id)
            .max()
            .map(TradeId::next)
            .unwrap_or(TradeId(1))
    }

    /// New store with `trade` appended.
    pub fn with_trade(&self, trade: Trade) -> Result<Self, StoreError> {
        if self.get(trade.id).is_some() {
            return Err(StoreError::DuplicateId(trade.id));
        }
        validate(&trade, self.policy)?;
        let mut trades = self.trades.to_vec();
        trades.push(trade);
        Ok(Self {
            trades: trades.into(),
            policy: self.policy,
        })
    }

    /// New store without the trade `id`.
    pub fn without_trade(&self, id: TradeId) -> Result<Self, StoreError> {
        if self.get(id).is_none() {
            return Err(StoreError::NotFound(id));
        }
        let trades: Vec<Trade> = self.trades.iter().filter(|t| t.id != id).cloned().collect();
        Ok(Self {
            trades: trades.into(),
            policy: self.policy,
        })
    }

    /// New store with the trade sharing `trade.id` replaced, keeping its position.
    pub fn with_replaced(&self, trade: Trade) -> Result<Self, StoreError> {
        let pos = self
            .trades
            .iter()
            .position(|t| t.id == trade.id)
            .ok_or(StoreError::NotFound(trade.id))?;
        validate(&trade, self.policy)?;
        let mut trades = self.trades.to_vec();
        trades[pos] = trade;
        Ok(Self {
            trades: trades.into(),
            policy: self.policy,
        })
    }

    /// BLAKE3 hash over every trade field, in store order.
    ///
    /// Two stores with the same trades in the same order share a fingerprint.
    pub fn fingerprint(&self) -> String {
        let mut hasher = blake3::Hasher::new();
        for trade in self.trades.iter() {
            hasher.update(&trade.id.0.to_le_bytes());
            hasher.update(trade.date.to_string().as_bytes());
            hasher.update(trade.instrument.as_bytes());
            hasher.update(&[0]);
            hasher.update(trade.direction.label().as_bytes());
            hasher.update(trade.strategy.as_bytes());
            hasher.update(&[0]);
            hasher.update(&trade.entry_price.to_le_bytes());
            hasher.update(&trade.exit_price.to_le_bytes());
            hasher.update(&trade.pnl.to_le_bytes());
            hasher.update(trade.outcome.badge().as_bytes());
            hasher.update(trade.notes.as_bytes());
            hasher.update(&[0]);
        }
        hasher.finalize().to_hex().to_string()
    }
}

fn validate(trade: &Trade, policy: OutcomePolicy) -> Result<(), StoreError> {
    for (field, value) in [
        ("pnl", trade.pnl),
        ("entry_price", trade.entry_price),
        ("exit_price", trade.exit_price),
    ] {
        if !value.is_finite() {
            return Err(StoreError::NonFinite { id: trade.id, field });
        }
    }
    if policy == OutcomePolicy::Strict && !trade.outcome_matches_pnl() {
        return Err(StoreError::OutcomeMismatch {
            id: trade.id,
            outcome: trade.outcome,
            pnl: trade.pnl,
        });
    }
    Ok(())
}
