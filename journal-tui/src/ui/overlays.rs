//! Overlay widgets: day detail and key help.

use chrono::NaiveDate;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

use journal_core::format::{format_date, format_net_pnl, format_number, format_pnl};
use journal_core::DayClassification;

use crate::app::AppState;
use crate::theme::Theme;
use crate::ui::centered_rect;

/// Every trade on `date`, with the day's totals.
pub fn render_day_detail(f: &mut Frame, area: Rect, app: &AppState, date: NaiveDate) {
    let theme = app.theme();
    let (trades, aggregate) = app.day(date);
    let classification = aggregate
        .map(|d| d.classification)
        .unwrap_or(DayClassification::Empty);

    let popup = centered_rect(70, 70, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.classification_color(classification)))
        .title(format!(" {} · {} ", format_date(date), classification.label()))
        .title_style(theme.accent_bold())
        .style(theme.base());

    let mut lines: Vec<Line> = Vec::new();

    match aggregate {
        Some(day) if !trades.is_empty() => {
            lines.push(Line::from(vec![
                Span::styled(
                    format!(
                        "{} trades  {} wins  {} losses  net ",
                        day.trade_count, day.win_count, day.loss_count
                    ),
                    theme.secondary(),
                ),
                Span::styled(
                    format_net_pnl(day.net_pnl),
                    Style::default()
                        .fg(theme.pnl_color(day.net_pnl))
                        .add_modifier(Modifier::BOLD),
                ),
            ]));
            lines.push(Line::from(""));

            for t in &trades {
                lines.push(Line::from(vec![
                    Span::styled(format!("{:<8} ", t.instrument), theme.accent_bold()),
                    Span::styled(
                        format!("{:<6}", t.direction.label()),
                        Style::default().fg(theme.direction_color(t.direction)),
                    ),
                    Span::styled(format!("{:<10}", t.strategy), theme.text()),
                    Span::styled(
                        format!(
                            "{} → {}  ",
                            format_number(t.entry_price),
                            format_number(t.exit_price)
                        ),
                        theme.secondary(),
                    ),
                    Span::styled(
                        format!("{:>5}  ", format_pnl(t.pnl)),
                        Style::default().fg(theme.pnl_color(t.pnl)),
                    ),
                    Span::styled(
                        t.outcome.badge(),
                        Style::default()
                            .fg(theme.outcome_color(t.outcome))
                            .add_modifier(Modifier::BOLD),
                    ),
                ]));
                if !t.notes.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("  {}", t.notes),
                        theme.muted_style(),
                    )));
                }
            }
        }
        _ => {
            lines.push(Line::from(Span::styled("No trades on this day", theme.muted_style())));
        }
    }

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "[h/l] previous/next day  [Esc] close",
        theme.muted_style(),
    )));

    let para = Paragraph::new(lines).block(block).wrap(Wrap { trim: false });
    f.render_widget(para, popup);
}

pub fn render_help(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let popup = centered_rect(60, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.accent_style())
        .title(" Keys ")
        .title_style(theme.accent_bold())
        .style(theme.base());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, &theme, "Calendar");
    key(&mut lines, &theme, "h / l, ← / →", "Previous / next day");
    key(&mut lines, &theme, "k / j, ↑ / ↓", "Previous / next week");
    key(&mut lines, &theme, "n / p, ] / [", "Next / previous month");
    key(&mut lines, &theme, "Enter", "Day detail");
    lines.push(Line::from(""));

    section(&mut lines, &theme, "Trades");
    key(&mut lines, &theme, "Tab", "Switch focus calendar / trades");
    key(&mut lines, &theme, "j / k", "Move selection");
    key(&mut lines, &theme, "g / G", "First / last trade");
    key(&mut lines, &theme, "s", "Cycle sort column");
    key(&mut lines, &theme, "r", "Reverse sort order");
    lines.push(Line::from(""));

    section(&mut lines, &theme, "General");
    key(&mut lines, &theme, "R", "Reload trades");
    key(&mut lines, &theme, "t", "Toggle dark / light theme");
    key(&mut lines, &theme, "?", "This help");
    key(&mut lines, &theme, "Esc", "Close overlay / clear status");
    key(&mut lines, &theme, "q", "Quit");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme.accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, theme: &Theme, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>14}  ", keys), theme.accent_style()),
        Span::styled(desc.to_string(), theme.secondary()),
    ]));
}
