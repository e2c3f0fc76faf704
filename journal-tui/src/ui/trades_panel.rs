//! Sortable trade list.

use ratatui::layout::{Constraint, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Borders, Cell, Row, Table, TableState};
use ratatui::Frame;

use journal_core::format::{format_date, format_number, format_pnl};

use crate::app::{AppState, Panel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let active = app.active_panel == Panel::Trades;
    let trades = app.sorted_trades();

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(active))
        .title(format!(
            " Trades ({}) · {} {} [s/r] ",
            trades.len(),
            app.sort_key,
            app.sort_order.arrow()
        ))
        .title_style(theme.panel_title(active));

    let header = Row::new(
        ["Date", "Pair", "Dir", "Strategy", "Entry", "Exit", "P&L", "Result"]
            .into_iter()
            .map(|h| Cell::from(h).style(theme.accent_bold())),
    )
    .height(1);

    let rows = trades.iter().map(|t| {
        Row::new(vec![
            Cell::from(format_date(t.date)),
            Cell::from(t.instrument.clone()),
            Cell::from(t.direction.label())
                .style(Style::default().fg(theme.direction_color(t.direction))),
            Cell::from(t.strategy.clone()),
            Cell::from(format_number(t.entry_price)),
            Cell::from(format_number(t.exit_price)),
            Cell::from(format_pnl(t.pnl)).style(Style::default().fg(theme.pnl_color(t.pnl))),
            Cell::from(t.outcome.badge()).style(
                Style::default()
                    .fg(theme.outcome_color(t.outcome))
                    .add_modifier(Modifier::BOLD),
            ),
        ])
        .style(theme.text())
    });

    // 55 cells plus 7 gaps: fits the 64-cell interior of a 120-column terminal.
    let widths = [
        Constraint::Length(12),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Length(8),
        Constraint::Length(7),
        Constraint::Length(7),
        Constraint::Length(5),
        Constraint::Min(4),
    ];

    let highlight = if active {
        theme.selected()
    } else {
        Style::default()
    };
    let table = Table::new(rows, widths)
        .header(header)
        .block(block)
        .column_spacing(1)
        .row_highlight_style(highlight);

    let mut state = TableState::default();
    if !trades.is_empty() {
        state.select(Some(app.trade_cursor));
    }
    f.render_stateful_widget(table, area, &mut state);
}
