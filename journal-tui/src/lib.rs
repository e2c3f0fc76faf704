//! Journal TUI: box calendar of daily trading results.
//!
//! - Summary strip with global statistics
//! - Month grid colored by day classification, with a day cursor
//! - Sortable trade list
//! - Day detail and help overlays

pub mod app;
pub mod input;
pub mod theme;
pub mod ui;

pub use app::AppState;
pub use input::handle_key;
pub use theme::Theme;
