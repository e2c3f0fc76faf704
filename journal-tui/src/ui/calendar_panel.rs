//! Month grid. Each day is colored by its classification; the cursor day is
//! drawn reversed.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use journal_core::calendar::{weeks, WEEKDAY_LABELS};
use journal_core::format::{format_net_pnl, format_win_rate};
use journal_core::{CalendarCell, DayClassification};

use crate::app::{AppState, Panel};
use crate::theme::Theme;

const MIN_CELL_WIDTH: usize = 4;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let active = app.active_panel == Panel::Calendar;

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.panel_border(active))
        .title(format!(" {} [n/p] ", app.month.title()))
        .title_style(theme.panel_title(active));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let cells = match app.grid() {
        Ok(cells) => cells,
        Err(e) => {
            let style = Style::default().fg(theme.negative);
            let msg = Paragraph::new(Span::styled(e.to_string(), style));
            f.render_widget(msg, inner);
            return;
        }
    };

    let width = (inner.width as usize / 7).max(MIN_CELL_WIDTH);
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(
        WEEKDAY_LABELS
            .iter()
            .map(|label| Span::styled(format!("{label:^width$}"), theme.accent_bold()))
            .collect::<Vec<_>>(),
    ));

    for week in weeks(&cells) {
        let spans: Vec<Span> = week
            .iter()
            .map(|cell| day_span(cell, app, &theme, width))
            .collect();
        lines.push(Line::from(spans));
    }

    lines.push(Line::from(""));
    let month = app.month_summary();
    lines.push(Line::from(vec![
        Span::styled("Month: ", theme.secondary()),
        Span::styled(format!("{} trades  ", month.total_trades), theme.text()),
        Span::styled(
            format!("{} ", format_win_rate(month.win_rate_percent)),
            Style::default().fg(theme.win_rate_color(month.win_rate_percent)),
        ),
        Span::styled(
            format_net_pnl(month.net_pnl),
            Style::default().fg(theme.pnl_color(month.net_pnl)),
        ),
    ]));
    lines.push(legend(&theme));

    f.render_widget(Paragraph::new(lines), inner);
}

fn day_span<'a>(cell: &CalendarCell, app: &AppState, theme: &Theme, width: usize) -> Span<'a> {
    let Some(day) = cell.as_day() else {
        return Span::raw(" ".repeat(width));
    };

    let label = match day.classification {
        DayClassification::Empty => day.day.to_string(),
        c => format!("{}{}", day.day, c.marker()),
    };
    let mut style = Style::default().fg(theme.classification_color(day.classification));
    if day.classification != DayClassification::Empty {
        style = style.add_modifier(Modifier::BOLD);
    }
    if day.date == app.cursor {
        style = style.add_modifier(Modifier::REVERSED);
    }
    Span::styled(format!("{label:^width$}"), style)
}

fn legend<'a>(theme: &Theme) -> Line<'a> {
    let mut spans = Vec::new();
    for c in [
        DayClassification::AllWin,
        DayClassification::AllLoss,
        DayClassification::Mixed,
    ] {
        spans.push(Span::styled(
            format!("{} {}  ", c.marker(), c.label()),
            Style::default().fg(theme.classification_color(c)),
        ));
    }
    Line::from(spans)
}
