//! MovieHub - terminal movie catalog with an embed player
//!
//! # Usage
//!
//! ```bash
//! # Launch interactive TUI
//! moviehub
//! moviehub --route /watch/603
//!
//! # CLI mode (for automation)
//! moviehub search "blade runner"
//! moviehub watch 603
//! ```

use std::io::{stdout, Stdout};
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::mpsc;

use moviehub::api::{EmbedService, TmdbClient};
use moviehub::app::{App, AppMessage};
use moviehub::cli::{Cli, Command, ExitCode, Output};
use moviehub::commands::{self, CommandContext};
use moviehub::config::Config;
use moviehub::launcher::BrowserLauncher;
use moviehub::route::Route;
use moviehub::worker::Worker;
use moviehub::{logging, ui};

/// Terminal type alias for convenience
type Tui = Terminal<CrosstermBackend<Stdout>>;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let loaded = match &cli.config {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };
    // Logging needs the config for its directory, so a bad file is reported
    // once the subscriber is up
    let (config, config_error) = match loaded {
        Ok(config) => (config, None),
        Err(e) => (Config::default(), Some(e)),
    };

    if cli.is_cli_mode() {
        // CLI mode: execute command and exit
        if let Err(e) = logging::init_stderr() {
            eprintln!("{}", e);
        }
        report_config(config_error.as_ref(), &config);
        let exit_code = run_cli(cli, &config).await;
        std::process::exit(exit_code.into());
    } else {
        // TUI mode: logs go to a file so they don't corrupt the screen
        let _guard = match logging::init_file(&config.log_dir()) {
            Ok(guard) => Some(guard),
            Err(e) => {
                eprintln!("Logging disabled: {}", e);
                None
            }
        };
        report_config(config_error.as_ref(), &config);
        run_tui(&config, cli.route).await
    }
}

fn report_config(error: Option<&anyhow::Error>, config: &Config) {
    if let Some(e) = error {
        let detail = format!("{:#}", e);
        tracing::warn!(error = %detail, "config: ignoring unusable file, using defaults");
    }
    if config.bearer_token().is_none() {
        tracing::warn!("no TMDB bearer token configured; set TMDB_BEARER or tmdb_bearer in config");
    }
}

/// Run CLI command and return exit code
async fn run_cli(cli: Cli, config: &Config) -> ExitCode {
    let output = Output::new(&cli);
    let ctx = CommandContext::from_config(config);

    match cli.command {
        Some(Command::Trending(cmd)) => commands::trending_cmd(cmd, &ctx, &output).await,

        Some(Command::Search(cmd)) => commands::search_cmd(cmd, &ctx, &output).await,

        Some(Command::Info(cmd)) => commands::info_cmd(cmd, &ctx, &output).await,

        Some(Command::Similar(cmd)) => commands::similar_cmd(cmd, &ctx, &output).await,

        Some(Command::Embed(cmd)) => commands::embed_cmd(cmd, &ctx, &output).await,

        Some(Command::Watch(cmd)) => commands::watch_cmd(cmd, &ctx, &output).await,

        None => {
            // This shouldn't happen (handled by is_cli_mode check)
            ExitCode::Success
        }
    }
}

// =============================================================================
// TUI Mode
// =============================================================================

/// Initialize the terminal for TUI mode
fn init_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal to normal state
fn restore_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Run interactive TUI
async fn run_tui(config: &Config, route: Route) -> Result<()> {
    let (mut app, cmd_rx) = App::with_channels();
    app.embed = EmbedService::new(config.embed_base_url());

    let (msg_tx, mut msg_rx) = mpsc::unbounded_channel::<AppMessage>();
    let worker = Worker::new(TmdbClient::from_config(config), BrowserLauncher::default());
    let worker_handle = worker.spawn(cmd_rx, msg_tx);

    tracing::info!(%route, "tui: starting");
    app.start(route);

    let mut terminal = init_terminal()?;

    // Run the main event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut msg_rx).await;

    // Always restore terminal, even on error
    restore_terminal(&mut terminal)?;

    // In-flight requests are simply abandoned
    worker_handle.abort();
    tracing::info!("tui: exiting");

    result
}

/// Main event loop - handles input, applies worker results, renders UI
async fn run_event_loop(
    terminal: &mut Tui,
    app: &mut App,
    msg_rx: &mut mpsc::UnboundedReceiver<AppMessage>,
) -> Result<()> {
    const TICK_RATE: Duration = Duration::from_millis(100);

    while app.running {
        // Render current state
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout so worker results get picked up
        if event::poll(TICK_RATE)? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events (ignore releases on Windows)
                if key.kind == KeyEventKind::Press {
                    app.handle_key(key);
                }
            }
        }

        while let Ok(msg) = msg_rx.try_recv() {
            app.handle_message(msg);
        }
    }

    Ok(())
}
