//! Top-level layout: summary strip, calendar and trade list, status bar.

pub mod calendar_panel;
pub mod overlays;
pub mod stats_panel;
pub mod status_bar;
pub mod trades_panel;

use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Block;
use ratatui::Frame;

use crate::app::{AppState, Overlay};

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &AppState) {
    let theme = app.theme();
    f.render_widget(Block::default().style(theme.base()), f.area());

    // Split: summary strip + main area + 1-line status bar.
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Min(8),
            Constraint::Length(1),
        ])
        .split(f.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(45), Constraint::Percentage(55)])
        .split(rows[1]);

    stats_panel::render(f, rows[0], app);
    calendar_panel::render(f, columns[0], app);
    trades_panel::render(f, columns[1], app);
    status_bar::render(f, rows[2], app);

    // Overlays on top.
    match &app.overlay {
        Overlay::DayDetail(date) => overlays::render_day_detail(f, rows[1], app, *date),
        Overlay::Help => overlays::render_help(f, rows[1], app),
        Overlay::None => {}
    }
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
