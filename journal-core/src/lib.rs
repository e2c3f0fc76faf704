//! Journal Core: trade store, aggregation and calendar classification.
//!
//! This crate contains everything the presentation layers compute from:
//! - Domain types (trades, directions, outcomes, IDs)
//! - Trade store with immutable snapshots and boundary validation
//! - Aggregator: global summary and per-day classification
//! - Calendar builder: month grids and month navigation
//! - Trade list sorting and day-detail selection
//! - Display formatting, TOML config and synthetic journals
//!
//! Data flows one way: store snapshot → aggregator → calendar builder.

pub mod aggregate;
pub mod calendar;
pub mod config;
pub mod domain;
pub mod format;
pub mod listing;
pub mod store;
pub mod synthetic;

pub use aggregate::{
    compute_day_aggregates, compute_global_summary, compute_month_summary, DayAggregate,
    DayClassification, DayIndex, GlobalSummary,
};
pub use calendar::{advance_month, build_month_grid, CalendarCell, DayCell, YearMonth};
pub use config::{ConfigError, ConfigOverrides, JournalConfig, ThemeMode};
pub use domain::{Direction, InvalidDateError, Outcome, Trade, TradeId};
pub use listing::{sort_trades, trades_on, SortKey, SortOrder};
pub use store::{OutcomePolicy, Snapshot, StoreError, TradeStore};

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: snapshots and everything derived from them can be
    /// handed across threads.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send>() {}
        fn require_sync<T: Sync>() {}

        require_send::<Trade>();
        require_sync::<Trade>();
        require_send::<Snapshot>();
        require_sync::<Snapshot>();
        require_send::<TradeStore>();
        require_sync::<TradeStore>();
        require_send::<DayIndex>();
        require_sync::<DayIndex>();
        require_send::<GlobalSummary>();
        require_sync::<GlobalSummary>();
        require_send::<CalendarCell>();
        require_sync::<CalendarCell>();
        require_send::<YearMonth>();
        require_sync::<YearMonth>();
    }

    #[test]
    fn end_to_end_seeded_january() {
        let store = TradeStore::seeded();
        let snapshot = store.snapshot();
        let index = compute_day_aggregates(&snapshot);
        let cells = build_month_grid(2024, 0, &index).unwrap();

        let classified: Vec<(u32, DayClassification)> = cells
            .iter()
            .filter_map(CalendarCell::as_day)
            .filter(|d| d.classification != DayClassification::Empty)
            .map(|d| (d.day, d.classification))
            .collect();

        assert_eq!(
            classified,
            vec![
                (8, DayClassification::AllWin),
                (9, DayClassification::AllWin),
                (10, DayClassification::AllLoss),
                (11, DayClassification::Mixed),
                (12, DayClassification::AllLoss),
                (13, DayClassification::AllWin),
                (14, DayClassification::AllLoss),
                (15, DayClassification::AllWin),
            ]
        );

        // Navigating away and back keeps the same index and grid.
        let (y, m) = advance_month(2024, 0, 1).unwrap();
        let feb = build_month_grid(y, m, &index).unwrap();
        assert!(feb
            .iter()
            .filter_map(CalendarCell::as_day)
            .all(|d| d.classification == DayClassification::Empty));
        let (y, m) = advance_month(y, m, -1).unwrap();
        assert_eq!(build_month_grid(y, m, &index).unwrap(), cells);
    }
}
