//! Plain-text rendering for terminal output.

use std::fmt::Write;

use chrono::NaiveDate;
use journal_core::calendar::{weeks, WEEKDAY_LABELS};
use journal_core::format::{format_date, format_net_pnl, format_number, format_pnl, format_win_rate};
use journal_core::{
    CalendarCell, DayAggregate, DayClassification, GlobalSummary, SortKey, SortOrder, Trade,
    YearMonth,
};

const CELL_WIDTH: usize = 5;

pub fn summary(summary: &GlobalSummary) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "Total trades  {}", summary.total_trades);
    let _ = writeln!(out, "Wins          {}", summary.total_wins);
    let _ = writeln!(out, "Losses        {}", summary.total_losses);
    let _ = writeln!(out, "Win rate      {}", format_win_rate(summary.win_rate_percent));
    let _ = writeln!(out, "Net P&L       {}", format_net_pnl(summary.net_pnl));
    out
}

/// Month grid with one marker per day: `W`, `L`, `M`, or `.` for no trades.
pub fn calendar(month: YearMonth, cells: &[CalendarCell], month_summary: &GlobalSummary) -> String {
    let mut out = String::new();
    let width = CELL_WIDTH * 7;
    let _ = writeln!(out, "{:^width$}", month.title());

    let header: String = WEEKDAY_LABELS
        .iter()
        .map(|label| format!("{label:>CELL_WIDTH$}"))
        .collect();
    let _ = writeln!(out, "{}", header.trim_end());

    for week in weeks(cells) {
        let row: String = week.iter().map(cell).collect();
        let _ = writeln!(out, "{}", row.trim_end());
    }

    out.push('\n');
    let _ = writeln!(
        out,
        "{} trades, {} wins, {} losses, win rate {}, net {}",
        month_summary.total_trades,
        month_summary.total_wins,
        month_summary.total_losses,
        format_win_rate(month_summary.win_rate_percent),
        format_net_pnl(month_summary.net_pnl),
    );
    let legend: Vec<String> = [
        DayClassification::AllWin,
        DayClassification::AllLoss,
        DayClassification::Mixed,
        DayClassification::Empty,
    ]
    .iter()
    .map(|c| format!("{} {}", c.marker(), c.label()))
    .collect();
    let _ = writeln!(out, "{}", legend.join("  "));
    out
}

fn cell(cell: &CalendarCell) -> String {
    match cell.as_day() {
        Some(day) => format!("{:>4}{}", day.day, day.classification.marker()),
        None => " ".repeat(CELL_WIDTH),
    }
}

pub fn trade_table(trades: &[&Trade], key: SortKey, order: SortOrder) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:>4}  {:<13} {:<8} {:<5} {:<9} {:>9} {:>9} {:>6}  {}",
        "ID", "Date", "Pair", "Dir", "Strategy", "Entry", "Exit", "P&L", "Result"
    );
    for t in trades {
        let _ = writeln!(
            out,
            "{:>4}  {:<13} {:<8} {:<5} {:<9} {:>9} {:>9} {:>6}  {}",
            t.id.0,
            format_date(t.date),
            t.instrument,
            t.direction.label(),
            t.strategy,
            format_number(t.entry_price),
            format_number(t.exit_price),
            format_pnl(t.pnl),
            t.outcome.badge(),
        );
    }
    let _ = writeln!(out, "{} trades, sorted by {} {}", trades.len(), key, order.arrow());
    out
}

pub fn day_detail(date: NaiveDate, trades: &[&Trade], aggregate: Option<&DayAggregate>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", format_date(date));

    let Some(day) = aggregate.filter(|_| !trades.is_empty()) else {
        let _ = writeln!(out, "No trades on this day");
        return out;
    };

    for t in trades {
        let _ = writeln!(
            out,
            "  #{} {} {} ({})  {} -> {}  {}  {}",
            t.id,
            t.instrument,
            t.direction.label(),
            t.strategy,
            format_number(t.entry_price),
            format_number(t.exit_price),
            format_pnl(t.pnl),
            t.outcome.badge(),
        );
        if !t.notes.is_empty() {
            let _ = writeln!(out, "      {}", t.notes);
        }
    }
    let _ = writeln!(
        out,
        "{}: {} trades, {} wins, {} losses, net {}",
        day.classification.label(),
        day.trade_count,
        day.win_count,
        day.loss_count,
        format_net_pnl(day.net_pnl),
    );
    out
}
