//! Built-in sample journal: ten forex trades from 2024-01-08 to 2024-01-15.

use chrono::NaiveDate;

use crate::domain::{Direction, Outcome, Trade, TradeId};

#[allow(clippy::too_many_arguments)]
fn trade(
    id: u64,
    (y, m, d): (i32, u32, u32),
    instrument: &str,
    direction: Direction,
    strategy: &str,
    entry_price: f64,
    exit_price: f64,
    pnl: f64,
    outcome: Outcome,
    notes: &str,
) -> Trade {
    Trade {
        id: TradeId(id),
        date: NaiveDate::from_ymd_opt(y, m, d).expect("sample dates are valid"),
        instrument: instrument.to_string(),
        direction,
        strategy: strategy.to_string(),
        entry_price,
        exit_price,
        pnl,
        outcome,
        notes: notes.to_string(),
    }
}

/// The sample trades, in id order.
pub fn sample_trades() -> Vec<Trade> {
    use Direction::{Long, Short};
    use Outcome::{Loss, Win};

    vec![
        trade(
            1,
            (2024, 1, 15),
            "EUR/USD",
            Long,
            "Breakout",
            1.0950,
            1.0985,
            35.0,
            Win,
            "Clean breakout above resistance",
        ),
        trade(
            2,
            (2024, 1, 15),
            "GBP/USD",
            Short,
            "Pullback",
            1.2750,
            1.2720,
            30.0,
            Win,
            "Short on retest of broken support",
        ),
        trade(
            3,
            (2024, 1, 14),
            "USD/JPY",
            Long,
            "Trend",
            145.20,
            144.80,
            -40.0,
            Loss,
            "Failed breakout, stopped out",
        ),
        trade(
            4,
            (2024, 1, 13),
            "EUR/USD",
            Short,
            "Reversal",
            1.0980,
            1.0960,
            20.0,
            Win,
            "Nice reversal at resistance",
        ),
        trade(
            5,
            (2024, 1, 12),
            "AUD/USD",
            Long,
            "Breakout",
            0.6720,
            0.6700,
            -20.0,
            Loss,
            "False breakout",
        ),
        trade(
            6,
            (2024, 1, 11),
            "EUR/USD",
            Long,
            "Trend",
            1.0920,
            1.0950,
            30.0,
            Win,
            "Trend continuation",
        ),
        trade(
            7,
            (2024, 1, 11),
            "GBP/USD",
            Short,
            "Reversal",
            1.2780,
            1.2800,
            -20.0,
            Loss,
            "Early reversal call",
        ),
        trade(
            8,
            (2024, 1, 10),
            "USD/CAD",
            Long,
            "Breakout",
            1.3400,
            1.3370,
            -30.0,
            Loss,
            "False breakout",
        ),
        trade(
            9,
            (2024, 1, 9),
            "EUR/USD",
            Short,
            "Pullback",
            1.0970,
            1.0940,
            30.0,
            Win,
            "Perfect pullback entry",
        ),
        trade(
            10,
            (2024, 1, 8),
            "GBP/USD",
            Long,
            "Trend",
            1.2720,
            1.2750,
            30.0,
            Win,
            "Strong trend day",
        ),
    ]
}
