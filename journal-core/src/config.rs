//! Journal configuration loaded from TOML.
//!
//! Every field is optional; command-line flags override whatever is set here.
//!
//! ```toml
//! trades = "journal.csv"
//! outcome_policy = "independent"
//! start_month = "2024-01"
//! theme = "light"
//! default_sort = "pnl"
//! log_level = "debug"
//! log_file = "journal-tui.log"
//! open_at_latest = true
//! ```

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calendar::YearMonth;
use crate::domain::Trade;
use crate::listing::SortKey;
use crate::store::{OutcomePolicy, StoreError, TradeStore};
use crate::synthetic::generate_synthetic_trades;

/// Errors from loading the config file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid start_month '{0}' (expected YYYY-MM)")]
    InvalidStartMonth(String),

    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Color scheme for the terminal UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    #[default]
    Dark,
    Light,
}

impl ThemeMode {
    pub fn toggled(self) -> ThemeMode {
        match self {
            ThemeMode::Dark => ThemeMode::Light,
            ThemeMode::Light => ThemeMode::Dark,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct JournalConfig {
    /// Trade file (.json, .csv or .toml). The sample journal is used when unset.
    pub trades: Option<PathBuf>,
    pub outcome_policy: OutcomePolicy,
    /// Month shown at startup, `YYYY-MM`. Defaults to the current month.
    pub start_month: Option<String>,
    /// Open on the latest trade's month instead of the current month.
    pub open_at_latest: bool,
    pub theme: ThemeMode,
    pub default_sort: SortKey,
    /// Tracing filter directive, overridden by `RUST_LOG`.
    pub log_level: String,
    /// Log destination for the TUI. The TUI does not log when unset.
    pub log_file: Option<PathBuf>,
    /// Generate this many synthetic trades instead of loading a file.
    pub synthetic_count: Option<usize>,
    pub synthetic_seed: String,
}

impl Default for JournalConfig {
    fn default() -> Self {
        Self {
            trades: None,
            outcome_policy: OutcomePolicy::Strict,
            start_month: None,
            open_at_latest: false,
            theme: ThemeMode::Dark,
            default_sort: SortKey::Date,
            log_level: "info".into(),
            log_file: None,
            synthetic_count: None,
            synthetic_seed: "journal".into(),
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub trades: Option<PathBuf>,
    pub synthetic_count: Option<usize>,
    pub synthetic_seed: Option<String>,
    pub outcome_policy: Option<OutcomePolicy>,
    pub log_file: Option<PathBuf>,
    pub open_at_latest: bool,
}

impl JournalConfig {
    /// Config from `path` (defaults when `None`) with `overrides` applied.
    pub fn resolve(path: Option<&Path>, overrides: ConfigOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply(overrides);
        Ok(config)
    }

    pub fn apply(&mut self, overrides: ConfigOverrides) {
        if let Some(path) = overrides.trades {
            self.trades = Some(path);
            self.synthetic_count = None;
        }
        if let Some(count) = overrides.synthetic_count {
            self.synthetic_count = Some(count);
        }
        if let Some(seed) = overrides.synthetic_seed {
            self.synthetic_seed = seed;
        }
        if let Some(policy) = overrides.outcome_policy {
            self.outcome_policy = policy;
        }
        if let Some(path) = overrides.log_file {
            self.log_file = Some(path);
        }
        if overrides.open_at_latest {
            self.open_at_latest = true;
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: JournalConfig = toml::from_str(content)?;
        config.start_month()?;
        Ok(config)
    }

    /// Parsed `start_month`, if set.
    pub fn start_month(&self) -> Result<Option<YearMonth>, ConfigError> {
        self.start_month
            .as_deref()
            .map(|s| {
                s.parse::<YearMonth>()
                    .map_err(|_| ConfigError::InvalidStartMonth(s.to_string()))
            })
            .transpose()
    }

    /// Open the configured trade source: synthetic trades when
    /// `synthetic_count` is set, else the `trades` file, else the sample journal.
    pub fn open_store(&self) -> Result<TradeStore, ConfigError> {
        let start_month = self.start_month()?;
        if let Some(count) = self.synthetic_count {
            let start = match start_month {
                Some(month) => month
                    .first_day()
                    .map_err(|_| ConfigError::InvalidStartMonth(month.to_string()))?,
                None => synthetic_start(),
            };
            let trades = generate_synthetic_trades(&self.synthetic_seed, start, count);
            return Ok(TradeStore::new(trades, self.outcome_policy)?);
        }
        match &self.trades {
            Some(path) => Ok(TradeStore::load(path, self.outcome_policy)?),
            None => {
                tracing::info!("no trade file configured, using the sample journal");
                Ok(TradeStore::seeded())
            }
        }
    }

    /// Month shown first: `start_month` if set, else the month containing
    /// `today`. With `open_at_latest`, the latest trade's month replaces
    /// `today` when there are trades.
    pub fn initial_month(
        &self,
        trades: &[Trade],
        today: NaiveDate,
    ) -> Result<YearMonth, ConfigError> {
        if let Some(month) = self.start_month()? {
            return Ok(month);
        }
        let latest = trades.iter().map(|t| t.date).max();
        let date = match latest {
            Some(date) if self.open_at_latest => date,
            _ => today,
        };
        Ok(YearMonth::from_date(date))
    }
}

fn synthetic_start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).expect("2024-01-01 is a valid date")
}
