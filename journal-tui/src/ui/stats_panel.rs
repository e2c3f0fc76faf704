//! Summary strip: total trades, wins, losses, win rate and net P&L.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use journal_core::format::{format_net_pnl, format_win_rate};

use crate::app::AppState;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let summary = app.summary();

    let cards = [
        ("Total Trades", summary.total_trades.to_string(), theme.text_primary),
        ("Wins", summary.total_wins.to_string(), theme.positive),
        ("Losses", summary.total_losses.to_string(), theme.negative),
        (
            "Win Rate",
            format_win_rate(summary.win_rate_percent),
            theme.win_rate_color(summary.win_rate_percent),
        ),
        ("Net P&L", format_net_pnl(summary.net_pnl), theme.pnl_color(summary.net_pnl)),
    ];

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 5); 5])
        .split(area);

    for ((label, value, color), chunk) in cards.into_iter().zip(chunks.iter()) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(theme.muted_style())
            .title(format!(" {label} "))
            .title_style(theme.secondary());
        let para = Paragraph::new(Line::from(Span::styled(
            value,
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center)
        .block(block);
        f.render_widget(para, *chunk);
    }
}
