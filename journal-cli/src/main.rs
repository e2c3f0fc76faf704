//! Journal CLI: summary, calendar, trade list and day detail.
//!
//! Commands:
//! - `summary`: global statistics (JSON with `--json`)
//! - `calendar`: month grid with per-day win/loss markers
//! - `trades`: sortable trade table
//! - `day`: every trade on one date

mod render;

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use journal_core::domain::parse_date;
use journal_core::{
    build_month_grid, compute_day_aggregates, compute_global_summary, compute_month_summary,
    sort_trades, trades_on, ConfigOverrides, JournalConfig, OutcomePolicy, SortKey, SortOrder,
    TradeStore, YearMonth,
};

#[derive(Parser)]
#[command(name = "journal", about = "Trading journal: box calendar of daily results")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Trade file (.json, .csv or .toml). Defaults to the sample journal.
    #[arg(long, global = true)]
    trades: Option<PathBuf>,

    /// Generate N synthetic trades instead of loading a file.
    #[arg(long, global = true, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed label for synthetic trades.
    #[arg(long, global = true)]
    seed: Option<String>,

    /// Outcome validation: strict (win iff pnl >= 0) or independent.
    #[arg(long, global = true)]
    policy: Option<OutcomePolicy>,

    /// Default the calendar to the latest trade's month instead of today's.
    #[arg(long, global = true, default_value_t = false)]
    latest: bool,

    /// Log at debug level (repeat for trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Total trades, wins, losses, win rate and net P&L.
    Summary {
        /// Print JSON including the dataset fingerprint.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
    /// Month grid: W all wins, L all losses, M mixed, . no trades.
    Calendar {
        /// Month to show (YYYY-MM). Defaults to start_month or the current month.
        #[arg(long)]
        month: Option<YearMonth>,

        /// Months to move from the chosen month (negative goes back).
        #[arg(long, default_value_t = 0, allow_hyphen_values = true)]
        offset: i32,
    },
    /// Trade table.
    Trades {
        /// Sort column: date, pnl, instrument, strategy.
        #[arg(long)]
        sort: Option<SortKey>,

        /// Ascending instead of descending.
        #[arg(long, default_value_t = false)]
        asc: bool,
    },
    /// Trades on one date.
    Day {
        /// Date (YYYY-MM-DD).
        date: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = resolve_config(&cli)?;
    init_logging(&config.log_level, cli.verbose);

    let store = config.open_store().context("failed to open trade store")?;
    tracing::debug!(trades = store.len(), policy = %store.policy(), "store ready");

    match cli.command {
        Commands::Summary { json } => run_summary(&store, json),
        Commands::Calendar { month, offset } => run_calendar(&store, &config, month, offset),
        Commands::Trades { sort, asc } => run_trades(&store, &config, sort, asc),
        Commands::Day { date } => run_day(&store, &date),
    }
}

/// Config file (if any) with command-line overrides applied.
fn resolve_config(cli: &Cli) -> Result<JournalConfig> {
    let overrides = ConfigOverrides {
        trades: cli.trades.clone(),
        synthetic_count: cli.synthetic,
        synthetic_seed: cli.seed.clone(),
        outcome_policy: cli.policy,
        log_file: None,
        open_at_latest: cli.latest,
    };
    JournalConfig::resolve(cli.config.as_deref(), overrides).context("failed to load config")
}

fn init_logging(level: &str, verbose: u8) {
    let level = match verbose {
        0 => level,
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn run_summary(store: &TradeStore, json: bool) -> Result<()> {
    let summary = compute_global_summary(store.trades());
    if json {
        let out = serde_json::json!({
            "fingerprint": store.fingerprint(),
            "summary": summary,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        print!("{}", render::summary(&summary));
    }
    Ok(())
}

fn run_calendar(
    store: &TradeStore,
    config: &JournalConfig,
    month: Option<YearMonth>,
    offset: i32,
) -> Result<()> {
    let base = match month {
        Some(month) => month,
        None => config.initial_month(store.trades(), chrono::Local::now().date_naive())?,
    };
    let month = base
        .advance(offset)
        .with_context(|| format!("cannot move {offset} months from {base}"))?;

    let index = compute_day_aggregates(store.trades());
    let cells = build_month_grid(month.year(), month.month(), &index)?;
    let summary = compute_month_summary(store.trades(), month);
    print!("{}", render::calendar(month, &cells, &summary));
    Ok(())
}

fn run_trades(
    store: &TradeStore,
    config: &JournalConfig,
    sort: Option<SortKey>,
    asc: bool,
) -> Result<()> {
    let key = sort.unwrap_or(config.default_sort);
    let order = if asc {
        SortOrder::Ascending
    } else {
        SortOrder::Descending
    };
    let sorted = sort_trades(store.trades(), key, order);
    print!("{}", render::trade_table(&sorted, key, order));
    Ok(())
}

fn run_day(store: &TradeStore, date: &str) -> Result<()> {
    let Ok(date) = parse_date(date) else {
        bail!("invalid date '{date}' (expected YYYY-MM-DD)");
    };
    let trades = trades_on(store.trades(), date);
    let index = compute_day_aggregates(store.trades());
    print!("{}", render::day_detail(date, &trades, index.get(&date)));
    Ok(())
}
