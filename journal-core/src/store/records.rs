//! Raw trade records as they appear in JSON, CSV and TOML files.
//!
//! Field names accept the short aliases `pair`, `entry`, `exit` and `result`.
//! A missing `outcome` is derived from the sign of `pnl`.

use std::io::Read;

use serde::{Deserialize, Serialize};

use crate::domain::{parse_date, Direction, Outcome, Trade, TradeId};

use super::StoreError;

/// One trade as written in an input file, before date parsing and validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TradeRecord {
    pub id: u64,
    pub date: String,
    #[serde(alias = "pair")]
    pub instrument: String,
    pub direction: Direction,
    #[serde(default)]
    pub strategy: String,
    #[serde(alias = "entry")]
    pub entry_price: f64,
    #[serde(alias = "exit")]
    pub exit_price: f64,
    pub pnl: f64,
    #[serde(default, alias = "result")]
    pub outcome: Option<Outcome>,
    #[serde(default)]
    pub notes: String,
}

impl TradeRecord {
    /// Parse the date and fill in a missing outcome.
    pub fn into_trade(self) -> Result<Trade, StoreError> {
        let date = parse_date(&self.date).map_err(|source| StoreError::InvalidDate {
            id: TradeId(self.id),
            source,
        })?;
        let outcome = self.outcome.unwrap_or_else(|| Outcome::from_pnl(self.pnl));
        Ok(Trade {
            id: TradeId(self.id),
            date,
            instrument: self.instrument,
            direction: self.direction,
            strategy: self.strategy,
            entry_price: self.entry_price,
            exit_price: self.exit_price,
            pnl: self.pnl,
            outcome,
            notes: self.notes,
        })
    }
}

/// `{ "trades": [...] }` in JSON, `[[trades]]` tables in TOML.
#[derive(Debug, Deserialize)]
struct TradeFile {
    trades: Vec<TradeRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum JsonTrades {
    List(Vec<TradeRecord>),
    Wrapped(TradeFile),
}

/// Parse a JSON array of records, or an object with a `trades` array.
pub fn parse_json(content: &str) -> Result<Vec<TradeRecord>, StoreError> {
    let parsed: JsonTrades = serde_json::from_str(content)?;
    Ok(match parsed {
        JsonTrades::List(records) => records,
        JsonTrades::Wrapped(file) => file.trades,
    })
}

/// Parse a TOML document of `[[trades]]` tables.
pub fn parse_toml(content: &str) -> Result<Vec<TradeRecord>, StoreError> {
    let file: TradeFile = toml::from_str(content)?;
    Ok(file.trades)
}

/// Parse CSV with a header row. Empty `outcome` cells are derived from pnl.
pub fn parse_csv<R: Read>(reader: R) -> Result<Vec<TradeRecord>, StoreError> {
    let mut rdr = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
    let mut records = Vec::new();
    for row in rdr.deserialize() {
        records.push(row?);
    }
    Ok(records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn json_accepts_short_aliases() {
        let json = r#"[{
            "id": 1, "date": "2024-01-15", "pair": "EUR/USD", "direction": "Long",
            "strategy": "Breakout", "entry": 1.095, "exit": 1.0985, "pnl": 35,
            "result": "win", "notes": "Clean breakout above resistance"
        }]"#;
        let records = parse_json(json).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].instrument, "EUR/USD");
        assert_eq!(records[0].outcome, Some(Outcome::Win));
        assert_eq!(records[0].pnl, 35.0);
    }

    #[test]
    fn json_accepts_wrapped_object() {
        let json = r#"{"trades": [{
            "id": 4, "date": "2024-01-13", "instrument": "EUR/USD", "direction": "short",
            "entry_price": 1.098, "exit_price": 1.096, "pnl": 20.0
        }]}"#;
        let records = parse_json(json).unwrap();
        assert_eq!(records[0].id, 4);
        assert_eq!(records[0].outcome, None);
        assert_eq!(records[0].strategy, "");
    }

    #[test]
    fn toml_tables() {
        let toml = r#"
            [[trades]]
            id = 3
            date = "2024-01-14"
            instrument = "USD/JPY"
            direction = "Long"
            strategy = "Trend"
            entry_price = 145.20
            exit_price = 144.80
            pnl = -40
            outcome = "loss"
        "#;
        let records = parse_toml(toml).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].pnl, -40.0);
        assert_eq!(records[0].outcome, Some(Outcome::Loss));
    }

    #[test]
    fn csv_with_empty_outcome() {
        let csv = "id,date,instrument,direction,strategy,entry_price,exit_price,pnl,outcome,notes\n\
                   5,2024-01-12,AUD/USD,Long,Breakout,0.672,0.670,-20,,False breakout\n\
                   6,2024-01-11,EUR/USD,Long,Trend,1.092,1.095,30,win,\n";
        let records = parse_csv(csv.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].outcome, None);
        assert_eq!(records[0].notes, "False breakout");
        assert_eq!(records[1].outcome, Some(Outcome::Win));

        let trade = records[0].clone().into_trade().unwrap();
        assert_eq!(trade.outcome, Outcome::Loss);
    }

    #[test]
    fn into_trade_rejects_bad_date() {
        let record = TradeRecord {
            id: 9,
            date: "2023-02-30".into(),
            instrument: "EUR/USD".into(),
            direction: Direction::Short,
            strategy: String::new(),
            entry_price: 1.0,
            exit_price: 1.0,
            pnl: 0.0,
            outcome: None,
            notes: String::new(),
        };
        let err = record.into_trade().unwrap_err();
        assert!(matches!(err, StoreError::InvalidDate { id: TradeId(9), .. }));
    }

    #[test]
    fn into_trade_derives_outcome() {
        let record = TradeRecord {
            id: 1,
            date: "2024-01-15".into(),
            instrument: "EUR/USD".into(),
            direction: Direction::Long,
            strategy: String::new(),
            entry_price: 1.0,
            exit_price: 1.0,
            pnl: 0.0,
            outcome: None,
            notes: String::new(),
        };
        let trade = record.into_trade().unwrap();
        assert_eq!(trade.outcome, Outcome::Win);
        assert_eq!(trade.date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
    }
}
