//! Application state. Single owner, main thread only.
//!
//! Everything drawn on screen is derived from the store snapshot held here.
//! The day index and summary are cached and rebuilt only when the store's
//! fingerprint changes.

use chrono::{Datelike, Duration, NaiveDate};

use journal_core::calendar::CalendarCell;
use journal_core::{
    build_month_grid, compute_day_aggregates, compute_global_summary, compute_month_summary,
    sort_trades, trades_on, DayAggregate, DayIndex, GlobalSummary, InvalidDateError,
    JournalConfig, SortKey, SortOrder, ThemeMode, Trade, TradeStore, YearMonth,
};

use crate::theme::Theme;

/// Which panel has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panel {
    Calendar,
    Trades,
}

impl Panel {
    pub fn label(self) -> &'static str {
        match self {
            Panel::Calendar => "Calendar",
            Panel::Trades => "Trades",
        }
    }

    pub fn toggled(self) -> Panel {
        match self {
            Panel::Calendar => Panel::Trades,
            Panel::Trades => Panel::Calendar,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
    Error,
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Overlay {
    None,
    DayDetail(NaiveDate),
    Help,
}

/// Top-level application state.
pub struct AppState {
    // Navigation
    pub active_panel: Panel,
    pub running: bool,
    pub month: YearMonth,
    /// Selected day, always inside `month`.
    pub cursor: NaiveDate,
    /// Selected row of the sorted trade list.
    pub trade_cursor: usize,
    pub sort_key: SortKey,
    pub sort_order: SortOrder,
    pub theme_mode: ThemeMode,

    // Data
    store: TradeStore,
    fingerprint: String,
    index: DayIndex,
    summary: GlobalSummary,
    /// Source used to reload the store.
    config: JournalConfig,

    // Cross-cutting
    pub status_message: Option<(String, StatusLevel)>,
    pub overlay: Overlay,
}

impl AppState {
    pub fn new(store: TradeStore, config: JournalConfig, month: YearMonth) -> Self {
        let cursor = initial_cursor(store.trades(), month);
        let index = compute_day_aggregates(store.trades());
        let summary = compute_global_summary(store.trades());
        let fingerprint = store.fingerprint();
        Self {
            active_panel: Panel::Calendar,
            running: true,
            month,
            cursor,
            trade_cursor: 0,
            sort_key: config.default_sort,
            sort_order: SortOrder::Descending,
            theme_mode: config.theme,
            store,
            fingerprint,
            index,
            summary,
            config,
            status_message: None,
            overlay: Overlay::None,
        }
    }

    pub fn store(&self) -> &TradeStore {
        &self.store
    }

    pub fn fingerprint(&self) -> &str {
        &self.fingerprint
    }

    pub fn index(&self) -> &DayIndex {
        &self.index
    }

    pub fn summary(&self) -> &GlobalSummary {
        &self.summary
    }

    pub fn theme(&self) -> Theme {
        Theme::for_mode(self.theme_mode)
    }

    /// Swap in a new store. Returns false (and keeps the cached index) when
    /// the contents are unchanged.
    pub fn replace_store(&mut self, store: TradeStore) -> bool {
        let fingerprint = store.fingerprint();
        if fingerprint == self.fingerprint {
            return false;
        }
        self.index = compute_day_aggregates(store.trades());
        self.summary = compute_global_summary(store.trades());
        self.fingerprint = fingerprint;
        self.store = store;
        self.trade_cursor = self.trade_cursor.min(self.store.len().saturating_sub(1));
        tracing::debug!(
            fingerprint = %self.fingerprint,
            trades = self.store.len(),
            "index rebuilt"
        );
        true
    }

    /// Re-open the configured trade source.
    pub fn reload(&mut self) {
        match self.config.open_store() {
            Ok(store) => {
                let count = store.len();
                if self.replace_store(store) {
                    self.set_status(format!("Reloaded {count} trades"));
                } else {
                    self.set_status("No changes");
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "reload failed");
                self.set_error(format!("Reload failed: {e}"));
            }
        }
    }

    pub fn grid(&self) -> Result<Vec<CalendarCell>, InvalidDateError> {
        build_month_grid(self.month.year(), self.month.month(), &self.index)
    }

    pub fn month_summary(&self) -> GlobalSummary {
        compute_month_summary(self.store.trades(), self.month)
    }

    pub fn sorted_trades(&self) -> Vec<&Trade> {
        sort_trades(self.store.trades(), self.sort_key, self.sort_order)
    }

    pub fn day(&self, date: NaiveDate) -> (Vec<&Trade>, Option<&DayAggregate>) {
        (trades_on(self.store.trades(), date), self.index.get(&date))
    }

    /// Move the displayed month by `delta`, keeping the cursor's day of month
    /// where the new month has it.
    pub fn change_month(&mut self, delta: i32) {
        let month = match self.month.advance(delta) {
            Ok(month) => month,
            Err(e) => {
                self.set_error(e.to_string());
                return;
            }
        };
        let day = self.cursor.day().min(month.days_in_month());
        match month.date(day) {
            Ok(cursor) => {
                self.month = month;
                self.cursor = cursor;
            }
            Err(e) => self.set_error(e.to_string()),
        }
    }

    /// Move the day cursor; crossing a month edge switches the month.
    pub fn move_cursor(&mut self, days: i64) {
        let Some(cursor) = self.cursor.checked_add_signed(Duration::days(days)) else {
            self.set_warning("Date out of range");
            return;
        };
        self.cursor = cursor;
        if !self.month.contains(cursor) {
            self.month = YearMonth::from_date(cursor);
        }
    }

    pub fn move_trade_cursor(&mut self, delta: isize) {
        let len = self.store.len();
        if len == 0 {
            return;
        }
        self.trade_cursor = self
            .trade_cursor
            .saturating_add_signed(delta)
            .min(len - 1);
    }

    pub fn open_day_detail(&mut self) {
        let date = match self.active_panel {
            Panel::Calendar => Some(self.cursor),
            Panel::Trades => self.sorted_trades().get(self.trade_cursor).map(|t| t.date),
        };
        if let Some(date) = date {
            self.overlay = Overlay::DayDetail(date);
        }
    }

    pub fn cycle_sort(&mut self) {
        self.sort_key = self.sort_key.cycle();
        self.set_status(format!("Sorted by {}", self.sort_key));
    }

    pub fn reverse_sort(&mut self) {
        self.sort_order = self.sort_order.reversed();
    }

    pub fn toggle_theme(&mut self) {
        self.theme_mode = self.theme_mode.toggled();
    }

    /// Set an info status message.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    /// Set a warning status message.
    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }

    pub fn set_error(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Error));
    }
}

/// Latest traded date inside `month`, else the first of the month.
fn initial_cursor(trades: &[Trade], month: YearMonth) -> NaiveDate {
    trades
        .iter()
        .map(|t| t.date)
        .filter(|d| month.contains(*d))
        .max()
        .or_else(|| month.first_day().ok())
        .unwrap_or_default()
}
