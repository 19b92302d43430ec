//! CLI - Command Line Interface for MovieHub
//!
//! Every lookup the TUI performs is also scriptable. Output is
//! JSON-parseable when `--json` is given or stdout is not a terminal.
//!
//! # Examples
//!
//! ```bash
//! # Browse
//! moviehub trending --limit 5
//! moviehub search "the matrix" --json
//!
//! # Watch
//! moviehub info 603
//! moviehub similar 603
//! moviehub watch 603
//!
//! # Start the TUI on a watch screen
//! moviehub --route /watch/603
//! ```

use clap::{Args, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::IsTerminal;
use std::path::PathBuf;

use crate::route::Route;

// =============================================================================
// Exit Codes
// =============================================================================

/// Exit codes for CLI operations (semantic for scripting)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success
    Success = 0,
    /// General error
    Error = 1,
    /// Invalid arguments
    InvalidArgs = 2,
    /// Network error
    NetworkError = 3,
    /// Movie not found
    NotFound = 4,
    /// Search or list came back empty
    NoResults = 5,
    /// Browser could not be opened
    LaunchFailed = 6,
}

impl From<ExitCode> for i32 {
    fn from(code: ExitCode) -> i32 {
        code as i32
    }
}

impl From<ExitCode> for std::process::ExitCode {
    fn from(code: ExitCode) -> std::process::ExitCode {
        std::process::ExitCode::from(code as u8)
    }
}

// =============================================================================
// Main CLI Structure
// =============================================================================

/// MovieHub - browse movies and open them in an embed player
///
/// Run without arguments to launch interactive TUI.
/// Use subcommands for scriptable automation.
#[derive(Parser, Debug)]
#[command(
    name = "moviehub",
    version,
    about = "Terminal movie catalog with an embed player",
    long_about = "Search TMDB, browse this week's trending movies, and open \
                  any of them in a web embed player.\n\n\
                  Run without arguments to launch the interactive TUI.\n\
                  Use subcommands for automation and scripting.",
    after_help = "EXAMPLES:\n\
                  moviehub                            Launch interactive TUI\n\
                  moviehub --route /watch/603         Start on a watch screen\n\
                  moviehub search \"blade runner\"      Search for movies\n\
                  moviehub watch 603                  Open the player"
)]
pub struct Cli {
    /// Output format as JSON (default for non-TTY)
    #[arg(long, short = 'j', global = true)]
    pub json: bool,

    /// Suppress non-essential output
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Path to config file
    #[arg(long, short = 'c', global = true)]
    pub config: Option<PathBuf>,

    /// Initial TUI route (`/` or `/watch/<id>`)
    #[arg(long, short = 'r', default_value = "/", value_parser = parse_route)]
    pub route: Route,

    /// Subcommand to run (omit for TUI mode)
    #[command(subcommand)]
    pub command: Option<Command>,
}

fn parse_route(s: &str) -> Result<Route, String> {
    s.parse::<Route>().map_err(|e| e.to_string())
}

impl Cli {
    /// Check if running in CLI mode (has subcommand)
    pub fn is_cli_mode(&self) -> bool {
        self.command.is_some()
    }

    /// Check if JSON output should be used
    pub fn should_json(&self) -> bool {
        self.json || !std::io::stdout().is_terminal()
    }
}

// =============================================================================
// Subcommands
// =============================================================================

#[derive(Subcommand, Debug)]
pub enum Command {
    /// This week's trending movies
    #[command(visible_alias = "tr")]
    Trending(TrendingCmd),

    /// Search movies by title
    #[command(visible_alias = "s")]
    Search(SearchCmd),

    /// Title of a movie by TMDB id
    #[command(visible_alias = "i")]
    Info(IdCmd),

    /// Movies similar to a TMDB id
    #[command(visible_alias = "sim")]
    Similar(SimilarCmd),

    /// Print the embed player URL for a TMDB id
    #[command(visible_alias = "e")]
    Embed(IdCmd),

    /// Open the embed player in the system browser
    #[command(visible_alias = "w")]
    Watch(IdCmd),
}

/// Get this week's trending movies
#[derive(Args, Debug)]
pub struct TrendingCmd {
    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

/// Search movies by query (first page only)
#[derive(Args, Debug)]
pub struct SearchCmd {
    /// Search query (title, keywords)
    #[arg(required = true)]
    pub query: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "20")]
    pub limit: usize,
}

/// Commands that take a single movie id
#[derive(Args, Debug)]
pub struct IdCmd {
    /// TMDB movie id (digits)
    #[arg(required = true)]
    pub id: String,
}

/// Get movies similar to one movie
#[derive(Args, Debug)]
pub struct SimilarCmd {
    /// TMDB movie id (digits)
    #[arg(required = true)]
    pub id: String,

    /// Maximum number of results
    #[arg(long, short = 'l', default_value = "10")]
    pub limit: usize,
}

// =============================================================================
// JSON Output Types
// =============================================================================

/// Generic JSON output wrapper with status
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonOutput<T: Serialize> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "is_zero")]
    pub exit_code: i32,
}

fn is_zero(n: &i32) -> bool {
    *n == 0
}

impl<T: Serialize> JsonOutput<T> {
    /// Create success output with data
    pub fn success(data: T) -> Self {
        Self {
            data: Some(data),
            error: None,
            exit_code: 0,
        }
    }

    /// Create error output (no data)
    pub fn error_msg(msg: impl Into<String>, code: ExitCode) -> JsonOutput<()> {
        JsonOutput::<()> {
            data: None,
            error: Some(msg.into()),
            exit_code: code.into(),
        }
    }
}

/// `info` response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct InfoResponse {
    pub id: u64,
    /// Title as shown on the watch screen (default when missing)
    pub title: String,
    pub embed_url: String,
}

/// `embed` and `watch` response
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct EmbedResponse {
    pub id: String,
    pub embed_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub opened: Option<bool>,
}

// =============================================================================
// Output Helpers
// =============================================================================

/// Output handler for consistent formatting
pub struct Output {
    pub json: bool,
    pub quiet: bool,
}

impl Output {
    pub fn new(cli: &Cli) -> Self {
        Self {
            json: cli.should_json(),
            quiet: cli.quiet,
        }
    }

    /// Print success data as JSON
    pub fn print<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.json {
            let output = JsonOutput::success(data);
            println!("{}", serde_json::to_string_pretty(&output)?);
        } else {
            println!("{}", serde_json::to_string_pretty(&data)?);
        }
        Ok(())
    }

    /// Print one human-readable line per item
    pub fn print_lines<T: std::fmt::Display>(&self, items: &[T]) {
        for item in items {
            println!("{}", item);
        }
    }

    /// Print error and return exit code
    pub fn error(&self, msg: impl Into<String>, code: ExitCode) -> ExitCode {
        let msg = msg.into();
        if self.json {
            let output = JsonOutput::<()>::error_msg(&msg, code);
            if let Ok(json) = serde_json::to_string_pretty(&output) {
                eprintln!("{}", json);
            }
        } else if !self.quiet {
            eprintln!("Error: {}", msg);
        }
        code
    }

    /// Print info message (suppressed in quiet mode)
    pub fn info(&self, msg: impl std::fmt::Display) {
        if !self.quiet && !self.json {
            eprintln!("{}", msg);
        }
    }
}

// =============================================================================
// Movie ID Validation
// =============================================================================

/// Validate a TMDB movie id (non-empty, digits only)
pub fn validate_movie_id(id: &str) -> Result<&str, &'static str> {
    if !id.is_empty() && id.chars().all(|c| c.is_ascii_digit()) {
        Ok(id)
    } else {
        Err("Invalid movie id (expected a numeric TMDB id)")
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["moviehub"]);
        assert!(!cli.is_cli_mode());
        assert_eq!(cli.route, Route::Catalog);
    }

    #[test]
    fn test_route_flag() {
        let cli = Cli::parse_from(["moviehub", "--route", "/watch/603"]);
        assert_eq!(cli.route, Route::watch(603_u64));

        let cli = Cli::parse_from(["moviehub", "-r", "/watch"]);
        assert_eq!(cli.route, Route::Watch(None));

        assert!(Cli::try_parse_from(["moviehub", "--route", "/nope"]).is_err());
    }

    #[test]
    fn test_search_command() {
        let cli = Cli::parse_from(["moviehub", "search", "matrix", "-l", "3"]);
        assert!(cli.is_cli_mode());
        if let Some(Command::Search(cmd)) = cli.command {
            assert_eq!(cmd.query, "matrix");
            assert_eq!(cmd.limit, 3);
        } else {
            panic!("Expected Search command");
        }
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from(["moviehub", "trending", "--json", "--quiet", "-c", "/tmp/c.toml"]);
        assert!(cli.json);
        assert!(cli.quiet);
        assert_eq!(cli.config, Some(PathBuf::from("/tmp/c.toml")));
    }

    #[test]
    fn test_aliases() {
        assert!(matches!(
            Cli::parse_from(["moviehub", "w", "550"]).command,
            Some(Command::Watch(_))
        ));
        assert!(matches!(
            Cli::parse_from(["moviehub", "sim", "550"]).command,
            Some(Command::Similar(_))
        ));
    }

    #[test]
    fn test_validate_movie_id() {
        assert!(validate_movie_id("550").is_ok());
        assert!(validate_movie_id("").is_err());
        assert!(validate_movie_id("tt0137523").is_err());
        assert!(validate_movie_id("-1").is_err());
    }

    #[test]
    fn test_exit_codes() {
        assert_eq!(i32::from(ExitCode::Success), 0);
        assert_eq!(i32::from(ExitCode::NotFound), 4);
        assert_eq!(i32::from(ExitCode::NoResults), 5);
        assert_eq!(i32::from(ExitCode::LaunchFailed), 6);
    }

    #[test]
    fn test_json_output_skips_empty_fields() {
        let ok = serde_json::to_value(JsonOutput::success(1)).unwrap();
        assert_eq!(ok, serde_json::json!({ "data": 1 }));

        let err = serde_json::to_value(JsonOutput::<()>::error_msg("nope", ExitCode::NotFound)).unwrap();
        assert_eq!(err, serde_json::json!({ "error": "nope", "exit_code": 4 }));
    }
}
