//! Synthetic journal generation for demos and benchmarks.
//!
//! Output is fully determined by the label: the RNG is seeded from a BLAKE3
//! hash of it. Synthetic trades skip weekends and always have an outcome
//! consistent with their pnl, so they pass the strict outcome policy.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::domain::{Direction, Outcome, Trade, TradeId};

const INSTRUMENTS: [(&str, f64); 5] = [
    ("EUR/USD", 1.09),
    ("GBP/USD", 1.27),
    ("USD/JPY", 145.0),
    ("AUD/USD", 0.67),
    ("USD/CAD", 1.34),
];

const STRATEGIES: [&str; 4] = ["Breakout", "Pullback", "Trend", "Reversal"];

/// Generate `count` trades on weekdays from `start` onwards, 0-3 per day,
/// with IDs 1..=count.
pub fn generate_synthetic_trades(label: &str, start: NaiveDate, count: usize) -> Vec<Trade> {
    let seed: [u8; 32] = *blake3::hash(label.as_bytes()).as_bytes();
    let mut rng = StdRng::from_seed(seed);

    let mut trades = Vec::with_capacity(count);
    let mut date = start;

    while trades.len() < count {
        if date.weekday() != Weekday::Sat && date.weekday() != Weekday::Sun {
            let per_day = rng.gen_range(0..=3usize);
            for _ in 0..per_day {
                if trades.len() == count {
                    break;
                }
                let id = TradeId(trades.len() as u64 + 1);
                trades.push(random_trade(&mut rng, id, date));
            }
        }
        date += Duration::days(1);
    }

    tracing::debug!(label, count, %start, last = %date, "generated synthetic trades");
    trades
}

fn random_trade(rng: &mut StdRng, id: TradeId, date: NaiveDate) -> Trade {
    let (instrument, base) = INSTRUMENTS[rng.gen_range(0..INSTRUMENTS.len())];
    let strategy = STRATEGIES[rng.gen_range(0..STRATEGIES.len())];
    let direction = if rng.gen_bool(0.5) {
        Direction::Long
    } else {
        Direction::Short
    };

    // pnl in pips; JPY pairs quote two decimals, the rest four.
    let pip = if instrument.contains("JPY") { 0.01 } else { 0.0001 };
    let pnl = f64::from(rng.gen_range(-50..=50i32));
    let entry_price = base * (1.0 + rng.gen_range(-0.02..0.02));
    let move_size = pnl * pip;
    let exit_price = match direction {
        Direction::Long => entry_price + move_size,
        Direction::Short => entry_price - move_size,
    };

    Trade {
        id,
        date,
        instrument: instrument.to_string(),
        direction,
        strategy: strategy.to_string(),
        entry_price,
        exit_price,
        pnl,
        outcome: Outcome::from_pnl(pnl),
        notes: "synthetic".to_string(),
    }
}
