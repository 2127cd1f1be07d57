use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use connect_four::config::{AppConfig, ConfigSource};
use connect_four::game::GameEngine;
use connect_four::logging;
use connect_four::ui::App;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

/// Play Connect Four in the terminal.
#[derive(Parser)]
#[command(name = "connect-four", about = "Two-player Connect Four")]
struct Cli {
    /// Path to TOML configuration file
    #[arg(long, default_value = "config.toml")]
    config: PathBuf,

    /// Override number of columns
    #[arg(long)]
    columns: Option<usize>,

    /// Override number of rows
    #[arg(long)]
    rows: Option<usize>,

    /// Print the default configuration and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.print_config {
        print!("{}", AppConfig::default_toml());
        return Ok(());
    }

    let (mut config, source) = AppConfig::load_or_default(&cli.config)
        .with_context(|| format!("loading config from {}", cli.config.display()))?;

    // Apply CLI overrides
    if let Some(columns) = cli.columns {
        config.board.columns = columns;
    }
    if let Some(rows) = cli.rows {
        config.board.rows = rows;
    }
    config.validate().context("invalid configuration")?;

    logging::init(&config.log)
        .with_context(|| format!("opening log file {}", config.log.file.display()))?;

    if source == ConfigSource::Defaults {
        log::warn!("config file '{}' not found, using defaults", cli.config.display());
    }

    let dims = config.dimensions()?;
    let palette = config.ui.palette()?;
    log::info!(
        "starting {}x{} game (config {})",
        dims.columns(),
        dims.rows(),
        cli.config.display()
    );

    let mut app = App::new(
        GameEngine::new(dims),
        palette,
        Duration::from_millis(config.ui.tick_rate_ms),
    );
    run(&mut app).context("terminal error")
}

fn run(app: &mut App) -> io::Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal even when the loop failed
    let _ = disable_raw_mode();
    let _ = execute!(terminal.backend_mut(), LeaveAlternateScreen);
    let _ = terminal.show_cursor();

    res
}
