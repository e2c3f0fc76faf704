//! Aggregator: global statistics and per-day classification over a trade snapshot.
//!
//! Everything here is a pure function of its input. Wins and losses are counted
//! from each trade's `outcome` field, never re-derived from `pnl`.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::YearMonth;
use crate::domain::Trade;

/// Per-day label used to color a calendar cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DayClassification {
    Empty,
    AllWin,
    AllLoss,
    Mixed,
}

impl DayClassification {
    /// Classify a day from its win and loss counts.
    pub fn from_counts(win_count: usize, loss_count: usize) -> Self {
        match (win_count, loss_count) {
            (0, 0) => DayClassification::Empty,
            (_, 0) => DayClassification::AllWin,
            (0, _) => DayClassification::AllLoss,
            _ => DayClassification::Mixed,
        }
    }

    /// Legend text.
    pub fn label(self) -> &'static str {
        match self {
            DayClassification::Empty => "No Trades",
            DayClassification::AllWin => "All Wins",
            DayClassification::AllLoss => "All Losses",
            DayClassification::Mixed => "Mixed",
        }
    }

    /// Single-character marker for text grids.
    pub fn marker(self) -> char {
        match self {
            DayClassification::Empty => '.',
            DayClassification::AllWin => 'W',
            DayClassification::AllLoss => 'L',
            DayClassification::Mixed => 'M',
        }
    }
}

/// Statistics for one calendar date that has at least one trade.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayAggregate {
    pub date: NaiveDate,
    pub trade_count: usize,
    pub win_count: usize,
    pub loss_count: usize,
    pub net_pnl: f64,
    pub classification: DayClassification,
}

/// Dates with trades, in calendar order. Dates without trades are absent.
pub type DayIndex = BTreeMap<NaiveDate, DayAggregate>;

/// Summary statistics over a set of trades.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GlobalSummary {
    pub total_trades: usize,
    pub total_wins: usize,
    pub total_losses: usize,
    /// Percentage of winning trades, rounded to one decimal place. Zero when
    /// there are no trades.
    pub win_rate_percent: f64,
    pub net_pnl: f64,
}

/// Compute count, win rate and net pnl over all trades.
pub fn compute_global_summary(trades: &[Trade]) -> GlobalSummary {
    summarize(trades.iter())
}

/// Group trades by exact date and classify each day.
pub fn compute_day_aggregates(trades: &[Trade]) -> DayIndex {
    let mut index = DayIndex::new();

    for trade in trades {
        let day = index.entry(trade.date).or_insert_with(|| DayAggregate {
            date: trade.date,
            trade_count: 0,
            win_count: 0,
            loss_count: 0,
            net_pnl: 0.0,
            classification: DayClassification::Empty,
        });
        day.trade_count += 1;
        if trade.is_win() {
            day.win_count += 1;
        } else {
            day.loss_count += 1;
        }
        day.net_pnl += trade.pnl;
    }

    for day in index.values_mut() {
        day.classification = DayClassification::from_counts(day.win_count, day.loss_count);
    }

    index
}

/// Summary restricted to trades dated within one calendar month.
pub fn compute_month_summary(trades: &[Trade], month: YearMonth) -> GlobalSummary {
    summarize(trades.iter().filter(|t| month.contains(t.date)))
}

/// Classification of a date, `Empty` when the index has no entry for it.
pub fn classify(index: &DayIndex, date: NaiveDate) -> DayClassification {
    index
        .get(&date)
        .map(|day| day.classification)
        .unwrap_or(DayClassification::Empty)
}

fn summarize<'a>(trades: impl Iterator<Item = &'a Trade>) -> GlobalSummary {
    let mut summary = GlobalSummary::default();
    for trade in trades {
        summary.total_trades += 1;
        if trade.is_win() {
            summary.total_wins += 1;
        } else {
            summary.total_losses += 1;
        }
        summary.net_pnl += trade.pnl;
    }
    summary.win_rate_percent = win_rate_percent(summary.total_wins, summary.total_trades);
    summary
}

fn win_rate_percent(wins: usize, total: usize) -> f64 {
    if total == 0 {
        return 0.0;
    }
    let pct = 100.0 * wins as f64 / total as f64;
    (pct * 10.0).round() / 10.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Direction, Outcome, TradeId};

    fn trade(id: u64, date: (i32, u32, u32), outcome: Outcome, pnl: f64) -> Trade {
        Trade {
            id: TradeId(id),
            date: NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap(),
            instrument: "EUR/USD".into(),
            direction: Direction::Long,
            strategy: "Trend".into(),
            entry_price: 1.0,
            exit_price: 1.0,
            pnl,
            outcome,
            notes: String::new(),
        }
    }

    fn example_trades() -> Vec<Trade> {
        vec![
            trade(1, (2024, 1, 15), Outcome::Win, 35.0),
            trade(2, (2024, 1, 15), Outcome::Win, 30.0),
            trade(3, (2024, 1, 14), Outcome::Loss, -40.0),
        ]
    }

    #[test]
    fn empty_summary_is_zero() {
        let summary = compute_global_summary(&[]);
        assert_eq!(summary, GlobalSummary::default());
        assert_eq!(summary.win_rate_percent, 0.0);
    }

    #[test]
    fn example_summary() {
        let summary = compute_global_summary(&example_trades());
        assert_eq!(summary.total_trades, 3);
        assert_eq!(summary.total_wins, 2);
        assert_eq!(summary.total_losses, 1);
        assert_eq!(summary.win_rate_percent, 66.7);
        assert_eq!(summary.net_pnl, 25.0);
    }

    #[test]
    fn example_day_classification() {
        let index = compute_day_aggregates(&example_trades());
        let jan15 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
        let jan14 = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
        let jan13 = NaiveDate::from_ymd_opt(2024, 1, 13).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(index[&jan15].classification, DayClassification::AllWin);
        assert_eq!(index[&jan15].trade_count, 2);
        assert_eq!(index[&jan15].net_pnl, 65.0);
        assert_eq!(index[&jan14].classification, DayClassification::AllLoss);
        assert!(!index.contains_key(&jan13));
        assert_eq!(classify(&index, jan13), DayClassification::Empty);
    }

    #[test]
    fn mixed_day() {
        let trades = vec![
            trade(6, (2024, 1, 11), Outcome::Win, 30.0),
            trade(7, (2024, 1, 11), Outcome::Loss, -20.0),
        ];
        let index = compute_day_aggregates(&trades);
        let day = &index[&NaiveDate::from_ymd_opt(2024, 1, 11).unwrap()];
        assert_eq!(day.win_count, 1);
        assert_eq!(day.loss_count, 1);
        assert_eq!(day.classification, DayClassification::Mixed);
    }

    #[test]
    fn counts_follow_outcome_not_pnl() {
        // Break-even trade recorded as a loss.
        let trades = vec![trade(1, (2024, 3, 1), Outcome::Loss, 0.0)];
        let summary = compute_global_summary(&trades);
        assert_eq!(summary.total_losses, 1);
        let index = compute_day_aggregates(&trades);
        assert_eq!(
            index.values().next().unwrap().classification,
            DayClassification::AllLoss
        );
    }

    #[test]
    fn classification_from_counts() {
        assert_eq!(DayClassification::from_counts(0, 0), DayClassification::Empty);
        assert_eq!(DayClassification::from_counts(3, 0), DayClassification::AllWin);
        assert_eq!(DayClassification::from_counts(0, 2), DayClassification::AllLoss);
        assert_eq!(DayClassification::from_counts(1, 1), DayClassification::Mixed);
    }

    #[test]
    fn month_summary_filters_by_month() {
        let mut trades = example_trades();
        trades.push(trade(4, (2024, 2, 1), Outcome::Loss, -10.0));

        let jan = compute_month_summary(&trades, YearMonth::new(2024, 0).unwrap());
        assert_eq!(jan.total_trades, 3);
        assert_eq!(jan.net_pnl, 25.0);

        let feb = compute_month_summary(&trades, YearMonth::new(2024, 1).unwrap());
        assert_eq!(feb.total_trades, 1);
        assert_eq!(feb.win_rate_percent, 0.0);

        let mar = compute_month_summary(&trades, YearMonth::new(2024, 2).unwrap());
        assert_eq!(mar, GlobalSummary::default());
    }

    #[test]
    fn win_rate_rounds_to_one_decimal() {
        assert_eq!(win_rate_percent(1, 3), 33.3);
        assert_eq!(win_rate_percent(6, 10), 60.0);
        assert_eq!(win_rate_percent(1, 8), 12.5);
        assert_eq!(win_rate_percent(0, 0), 0.0);
    }
}
