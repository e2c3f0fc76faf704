//! Keyboard input dispatch: overlays, then global keys, then the focused panel.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind};

use crate::app::{AppState, Overlay, Panel};

pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }

    // 1. Overlays consume input first.
    match &app.overlay {
        Overlay::DayDetail(_) => {
            handle_day_overlay(app, key);
            return;
        }
        Overlay::Help => {
            if matches!(
                key.code,
                KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q') | KeyCode::Enter
            ) {
                app.overlay = Overlay::None;
            }
            return;
        }
        Overlay::None => {}
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.active_panel = app.active_panel.toggled();
            return;
        }
        KeyCode::Char('n') | KeyCode::Char(']') => {
            app.change_month(1);
            return;
        }
        KeyCode::Char('p') | KeyCode::Char('[') => {
            app.change_month(-1);
            return;
        }
        KeyCode::Char('s') => {
            app.cycle_sort();
            return;
        }
        KeyCode::Char('r') => {
            app.reverse_sort();
            return;
        }
        KeyCode::Char('R') => {
            app.reload();
            return;
        }
        KeyCode::Char('t') => {
            app.toggle_theme();
            return;
        }
        KeyCode::Enter => {
            app.open_day_detail();
            return;
        }
        KeyCode::Esc => {
            app.status_message = None;
            return;
        }
        _ => {}
    }

    // 3. Panel-specific keys.
    match app.active_panel {
        Panel::Calendar => handle_calendar_key(app, key),
        Panel::Trades => handle_trades_key(app, key),
    }
}

fn handle_day_overlay(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => {
            app.overlay = Overlay::None;
        }
        // Step through days without closing the overlay.
        KeyCode::Char('h') | KeyCode::Left | KeyCode::Char('l') | KeyCode::Right
            if app.active_panel == Panel::Calendar =>
        {
            let step = if matches!(key.code, KeyCode::Char('h') | KeyCode::Left) {
                -1
            } else {
                1
            };
            app.move_cursor(step);
            app.overlay = Overlay::DayDetail(app.cursor);
        }
        _ => {}
    }
}

fn handle_calendar_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_cursor(-7),
        KeyCode::Char('j') | KeyCode::Down => app.move_cursor(7),
        _ => {}
    }
}

fn handle_trades_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('k') | KeyCode::Up => app.move_trade_cursor(-1),
        KeyCode::Char('j') | KeyCode::Down => app.move_trade_cursor(1),
        KeyCode::PageUp => app.move_trade_cursor(-10),
        KeyCode::PageDown => app.move_trade_cursor(10),
        KeyCode::Home | KeyCode::Char('g') => app.trade_cursor = 0,
        KeyCode::End | KeyCode::Char('G') => app.move_trade_cursor(isize::MAX),
        _ => {}
    }
}
