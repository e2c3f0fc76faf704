//! Domain types for the trading journal

pub mod date;
pub mod ids;
pub mod trade;

pub use date::{parse_date, InvalidDateError, DATE_FORMAT};
pub use ids::TradeId;
pub use trade::{Direction, Outcome, Trade, TradeError};
