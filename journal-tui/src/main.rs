//! Journal TUI: summary strip, month calendar, trade list.

use std::fs::File;
use std::io::{self, stdout};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event};
use crossterm::execute;
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;
use tracing_subscriber::EnvFilter;

use journal_core::{ConfigOverrides, JournalConfig, OutcomePolicy};
use journal_tui::{handle_key, ui, AppState};

#[derive(Parser)]
#[command(name = "journal-tui", about = "Trading journal box calendar (terminal UI)")]
struct Args {
    /// TOML config file.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Trade file (.json, .csv or .toml). Defaults to the sample journal.
    #[arg(long)]
    trades: Option<PathBuf>,

    /// Generate N synthetic trades instead of loading a file.
    #[arg(long, value_name = "N")]
    synthetic: Option<usize>,

    /// Seed label for synthetic trades.
    #[arg(long)]
    seed: Option<String>,

    /// Outcome validation: strict (win iff pnl >= 0) or independent.
    #[arg(long)]
    policy: Option<OutcomePolicy>,

    /// Open on the latest trade's month instead of today's.
    #[arg(long, default_value_t = false)]
    latest: bool,

    /// Write logs to this file (the TUI never logs to the terminal).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = resolve_config(&args)?;
    if let Some(path) = &config.log_file {
        init_logging(path, &config.log_level)?;
    }

    // Load before touching the terminal so errors print normally.
    let store = config.open_store().context("failed to open trade store")?;
    let month = config.initial_month(store.trades(), chrono::Local::now().date_naive())?;
    tracing::info!(trades = store.len(), %month, "starting journal TUI");
    let mut app = AppState::new(store, config, month);

    // Install a panic hook that restores the terminal before printing the panic.
    let default_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), LeaveAlternateScreen);
        default_hook(info);
    }));

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut AppState,
) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        // 50ms poll keeps the loop responsive without spinning.
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                handle_key(app, key);
            }
        }

        if !app.running {
            break;
        }
    }
    Ok(())
}

fn resolve_config(args: &Args) -> Result<JournalConfig> {
    let overrides = ConfigOverrides {
        trades: args.trades.clone(),
        synthetic_count: args.synthetic,
        synthetic_seed: args.seed.clone(),
        outcome_policy: args.policy,
        log_file: args.log_file.clone(),
        open_at_latest: args.latest,
    };
    JournalConfig::resolve(args.config.as_deref(), overrides).context("failed to load config")
}

fn init_logging(path: &Path, level: &str) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}
