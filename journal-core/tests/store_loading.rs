use std::fs;

use chrono::NaiveDate;
use journal_core::{
    compute_day_aggregates, compute_global_summary, DayClassification, Outcome, OutcomePolicy,
    StoreError, TradeId, TradeStore,
};

const CSV: &str = "\
id,date,instrument,direction,strategy,entry_price,exit_price,pnl,outcome,notes
1,2024-01-15,EUR/USD,Long,Breakout,1.0950,1.0985,35,win,Clean breakout above resistance
2,2024-01-15,GBP/USD,Short,Pullback,1.2750,1.2720,30,,Short on retest of broken support
3,2024-01-14,USD/JPY,Long,Trend,145.20,144.80,-40,loss,\"Failed breakout, stopped out\"
";

const JSON: &str = r#"[
  {"id": 1, "date": "2024-01-15", "pair": "EUR/USD", "direction": "Long", "strategy": "Breakout",
   "entry": 1.0950, "exit": 1.0985, "pnl": 35, "result": "win", "notes": "Clean breakout"},
  {"id": 2, "date": "2024-01-15", "pair": "GBP/USD", "direction": "Short", "strategy": "Pullback",
   "entry": 1.2750, "exit": 1.2720, "pnl": 30, "result": "win", "notes": ""},
  {"id": 3, "date": "2024-01-14", "pair": "USD/JPY", "direction": "Long", "strategy": "Trend",
   "entry": 145.20, "exit": 144.80, "pnl": -40, "result": "loss", "notes": ""}
]"#;

const TOML: &str = r#"
[[trades]]
id = 1
date = "2024-01-15"
instrument = "EUR/USD"
direction = "long"
entry_price = 1.0950
exit_price = 1.0985
pnl = 35

[[trades]]
id = 2
date = "2024-01-15"
instrument = "GBP/USD"
direction = "short"
entry_price = 1.2750
exit_price = 1.2720
pnl = 30

[[trades]]
id = 3
date = "2024-01-14"
instrument = "USD/JPY"
direction = "long"
entry_price = 145.20
exit_price = 144.80
pnl = -40
"#;

fn assert_three_trade_journal(store: &TradeStore) {
    assert_eq!(store.len(), 3);

    let summary = compute_global_summary(store.trades());
    assert_eq!(summary.total_trades, 3);
    assert_eq!(summary.total_wins, 2);
    assert_eq!(summary.total_losses, 1);
    assert_eq!(summary.win_rate_percent, 66.7);
    assert_eq!(summary.net_pnl, 25.0);

    let index = compute_day_aggregates(store.trades());
    let jan15 = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
    let jan14 = NaiveDate::from_ymd_opt(2024, 1, 14).unwrap();
    assert_eq!(index[&jan15].classification, DayClassification::AllWin);
    assert_eq!(index[&jan14].classification, DayClassification::AllLoss);
}

#[test]
fn loads_csv() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.csv");
    fs::write(&path, CSV).unwrap();

    let store = TradeStore::load(&path, OutcomePolicy::Strict).unwrap();
    assert_three_trade_journal(&store);
    assert_eq!(store.get(TradeId(2)).unwrap().outcome, Outcome::Win);
    assert_eq!(store.get(TradeId(3)).unwrap().notes, "Failed breakout, stopped out");
}

#[test]
fn loads_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.json");
    fs::write(&path, JSON).unwrap();

    let store = TradeStore::load(&path, OutcomePolicy::Strict).unwrap();
    assert_three_trade_journal(&store);
    assert_eq!(store.get(TradeId(1)).unwrap().instrument, "EUR/USD");
}

#[test]
fn loads_toml() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("trades.TOML");
    fs::write(&path, TOML).unwrap();

    let store = TradeStore::load(&path, OutcomePolicy::Strict).unwrap();
    assert_three_trade_journal(&store);
    assert_eq!(store.get(TradeId(3)).unwrap().strategy, "");
}

#[test]
fn same_content_same_fingerprint_across_formats() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("a.csv");
    let toml = dir.path().join("b.toml");
    fs::write(
        &csv,
        "id,date,instrument,direction,strategy,entry_price,exit_price,pnl,outcome,notes\n\
         1,2024-01-15,EUR/USD,Long,Breakout,1.095,1.0985,35,win,x\n",
    )
    .unwrap();
    fs::write(
        &toml,
        "[[trades]]\nid = 1\ndate = \"2024-01-15\"\ninstrument = \"EUR/USD\"\n\
         direction = \"Long\"\nstrategy = \"Breakout\"\nentry_price = 1.095\n\
         exit_price = 1.0985\npnl = 35.0\noutcome = \"win\"\nnotes = \"x\"\n",
    )
    .unwrap();

    let a = TradeStore::load(&csv, OutcomePolicy::Strict).unwrap();
    let b = TradeStore::load(&toml, OutcomePolicy::Strict).unwrap();
    assert_eq!(a.fingerprint(), b.fingerprint());
}

#[test]
fn invalid_date_is_rejected_at_the_boundary() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("bad.json");
    fs::write(
        &path,
        r#"[{"id": 7, "date": "2024-02-30", "instrument": "EUR/USD", "direction": "Long",
             "entry_price": 1.0, "exit_price": 1.0, "pnl": 0}]"#,
    )
    .unwrap();

    let err = TradeStore::load(&path, OutcomePolicy::Strict).unwrap_err();
    assert!(matches!(err, StoreError::InvalidDate { id: TradeId(7), .. }));
}

#[test]
fn outcome_mismatch_depends_on_policy() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("mismatch.json");
    fs::write(
        &path,
        r#"[{"id": 1, "date": "2024-03-01", "instrument": "EUR/USD", "direction": "Long",
             "entry_price": 1.0, "exit_price": 1.0, "pnl": 0, "outcome": "loss"}]"#,
    )
    .unwrap();

    let strict = TradeStore::load(&path, OutcomePolicy::Strict);
    assert!(matches!(strict, Err(StoreError::OutcomeMismatch { .. })));

    let independent = TradeStore::load(&path, OutcomePolicy::Independent).unwrap();
    let summary = compute_global_summary(independent.trades());
    assert_eq!(summary.total_losses, 1);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = TradeStore::load(&dir.path().join("absent.csv"), OutcomePolicy::Strict).unwrap_err();
    assert!(matches!(err, StoreError::Io { .. }));
}

#[test]
fn unknown_direction_is_a_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("dir.json");
    fs::write(
        &path,
        r#"[{"id": 1, "date": "2024-03-01", "instrument": "EUR/USD", "direction": "sideways",
             "entry_price": 1.0, "exit_price": 1.0, "pnl": 1}]"#,
    )
    .unwrap();
    assert!(matches!(
        TradeStore::load(&path, OutcomePolicy::Strict),
        Err(StoreError::Json(_))
    ));
}
