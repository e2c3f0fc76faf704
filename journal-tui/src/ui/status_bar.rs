//! Bottom status bar: key hints, last status message, dataset fingerprint.

use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, StatusLevel};

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let theme = app.theme();
    let mut spans: Vec<Span> = Vec::new();

    spans.push(Span::styled(
        format!(
            " [{}] hjkl:move n/p:month Enter:day Tab:focus ?:help q:quit",
            app.active_panel.label()
        ),
        theme.muted_style(),
    ));

    spans.push(Span::raw(" | "));

    if let Some((msg, level)) = &app.status_message {
        let color = match level {
            StatusLevel::Info => theme.accent,
            StatusLevel::Warning => theme.warning,
            StatusLevel::Error => theme.negative,
        };
        spans.push(Span::styled(msg.as_str(), Style::default().fg(color)));
        spans.push(Span::raw(" | "));
    }

    let short: String = app.fingerprint().chars().take(8).collect();
    spans.push(Span::styled(format!("#{short}"), theme.secondary()));

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
