//! Color themes for the journal TUI.
//!
//! Two palettes share one set of tokens:
//! - **Dark**: neon accents on a near-black background
//! - **Light**: saturated but darker accents on white
//!
//! Calendar cells take their color from the day classification: positive for
//! all-win days, negative for all-loss days, warning for mixed days and muted
//! for days without trades.

use ratatui::style::{Color, Modifier, Style};

use journal_core::{DayClassification, Direction, Outcome, ThemeMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Primary surface
    pub background: Color,
    /// Focus, highlights, titles
    pub accent: Color,
    /// Wins, gains, long
    pub positive: Color,
    /// Losses, short
    pub negative: Color,
    /// Mixed days, warnings
    pub warning: Color,
    /// Selection background
    pub neutral: Color,
    /// Empty days, hints, borders of unfocused panels
    pub muted: Color,
    pub text_primary: Color,
    pub text_secondary: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self::dark()
    }
}

impl Theme {
    pub fn for_mode(mode: ThemeMode) -> Self {
        match mode {
            ThemeMode::Dark => Self::dark(),
            ThemeMode::Light => Self::light(),
        }
    }

    pub fn dark() -> Self {
        Self {
            background: Color::Rgb(18, 18, 20),
            accent: Color::Rgb(0, 255, 255),
            positive: Color::Rgb(0, 255, 128),
            negative: Color::Rgb(255, 20, 147),
            warning: Color::Rgb(255, 140, 0),
            neutral: Color::Rgb(147, 112, 219),
            muted: Color::Rgb(100, 149, 237),
            text_primary: Color::White,
            text_secondary: Color::Rgb(170, 170, 170),
        }
    }

    pub fn light() -> Self {
        Self {
            background: Color::Rgb(250, 250, 247),
            accent: Color::Rgb(0, 112, 160),
            positive: Color::Rgb(16, 140, 64),
            negative: Color::Rgb(200, 30, 70),
            warning: Color::Rgb(196, 110, 0),
            neutral: Color::Rgb(200, 190, 235),
            muted: Color::Rgb(120, 130, 150),
            text_primary: Color::Rgb(24, 24, 28),
            text_secondary: Color::Rgb(90, 90, 96),
        }
    }

    /// Positive for zero and up, negative below.
    pub fn pnl_color(&self, value: f64) -> Color {
        if value >= 0.0 {
            self.positive
        } else {
            self.negative
        }
    }

    pub fn classification_color(&self, classification: DayClassification) -> Color {
        match classification {
            DayClassification::AllWin => self.positive,
            DayClassification::AllLoss => self.negative,
            DayClassification::Mixed => self.warning,
            DayClassification::Empty => self.muted,
        }
    }

    pub fn outcome_color(&self, outcome: Outcome) -> Color {
        match outcome {
            Outcome::Win => self.positive,
            Outcome::Loss => self.negative,
        }
    }

    pub fn direction_color(&self, direction: Direction) -> Color {
        match direction {
            Direction::Long => self.positive,
            Direction::Short => self.negative,
        }
    }

    /// Color for a win-rate percentage (0-100).
    pub fn win_rate_color(&self, percent: f64) -> Color {
        match percent {
            w if w >= 60.0 => self.positive,
            w if w >= 50.0 => self.accent,
            w if w >= 40.0 => self.neutral,
            _ => self.warning,
        }
    }

    // Styles

    pub fn base(&self) -> Style {
        Style::default().fg(self.text_primary).bg(self.background)
    }

    pub fn text(&self) -> Style {
        Style::default().fg(self.text_primary)
    }

    pub fn secondary(&self) -> Style {
        Style::default().fg(self.text_secondary)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    pub fn accent_style(&self) -> Style {
        Style::default().fg(self.accent)
    }

    pub fn accent_bold(&self) -> Style {
        self.accent_style().add_modifier(Modifier::BOLD)
    }

    pub fn selected(&self) -> Style {
        Style::default()
            .bg(self.neutral)
            .fg(self.text_primary)
            .add_modifier(Modifier::BOLD)
    }

    pub fn panel_border(&self, active: bool) -> Style {
        if active {
            self.accent_style()
        } else {
            self.muted_style()
        }
    }

    pub fn panel_title(&self, active: bool) -> Style {
        if active {
            self.accent_bold()
        } else {
            self.secondary()
        }
    }
}
