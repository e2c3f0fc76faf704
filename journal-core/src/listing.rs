//! Sortable trade list and day-detail selection.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::Trade;

/// Column the trade list is sorted by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    #[default]
    Date,
    Pnl,
    Instrument,
    Strategy,
}

impl SortKey {
    pub const ALL: [SortKey; 4] = [
        SortKey::Date,
        SortKey::Pnl,
        SortKey::Instrument,
        SortKey::Strategy,
    ];

    /// Next key in `ALL`, wrapping around.
    pub fn cycle(self) -> SortKey {
        let idx = SortKey::ALL.iter().position(|k| *k == self).unwrap_or(0);
        SortKey::ALL[(idx + 1) % SortKey::ALL.len()]
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Date => "date",
            SortKey::Pnl => "pnl",
            SortKey::Instrument => "instrument",
            SortKey::Strategy => "strategy",
        }
    }
}

impl FromStr for SortKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "date" => Ok(SortKey::Date),
            "pnl" => Ok(SortKey::Pnl),
            "instrument" | "pair" => Ok(SortKey::Instrument),
            "strategy" => Ok(SortKey::Strategy),
            other => Err(format!("unknown sort key '{other}'")),
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortOrder {
    Ascending,
    /// Newest / largest first.
    #[default]
    Descending,
}

impl SortOrder {
    pub fn reversed(self) -> SortOrder {
        match self {
            SortOrder::Ascending => SortOrder::Descending,
            SortOrder::Descending => SortOrder::Ascending,
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            SortOrder::Ascending => "↑",
            SortOrder::Descending => "↓",
        }
    }
}

/// Trades ordered by `key`. Ties fall back to ascending trade ID regardless
/// of `order`, so equal rows keep a fixed relative order.
pub fn sort_trades(trades: &[Trade], key: SortKey, order: SortOrder) -> Vec<&Trade> {
    let mut sorted: Vec<&Trade> = trades.iter().collect();
    sorted.sort_by(|a, b| {
        let primary = compare(a, b, key);
        let primary = match order {
            SortOrder::Ascending => primary,
            SortOrder::Descending => primary.reverse(),
        };
        primary.then_with(|| a.id.cmp(&b.id))
    });
    sorted
}

fn compare(a: &Trade, b: &Trade, key: SortKey) -> Ordering {
    match key {
        SortKey::Date => a.date.cmp(&b.date),
        SortKey::Pnl => a.pnl.total_cmp(&b.pnl),
        SortKey::Instrument => a.instrument.cmp(&b.instrument),
        SortKey::Strategy => a.strategy.cmp(&b.strategy),
    }
}

/// Trades dated exactly `date`, in store order.
pub fn trades_on(trades: &[Trade], date: NaiveDate) -> Vec<&Trade> {
    trades.iter().filter(|t| t.date == date).collect()
}
