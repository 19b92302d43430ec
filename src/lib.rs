//! MovieHub - terminal movie catalog with an embed player
//!
//! Search TMDB, browse this week's trending movies, and open any of them in
//! a web embed player.
//!
//! # Modules
//!
//! - `models` - Movie summaries, details and identifiers
//! - `api` - TMDB client and embed/poster URL builders
//! - `route` - `/` and `/watch/:id` navigation targets
//! - `app` - Application state, navigation and the worker protocol
//! - `worker` - Background request execution
//! - `launcher` - Opening the player in the system browser
//! - `ui` - TUI components
//! - `cli` / `commands` - Scriptable subcommands
//! - `config` / `logging` - Ambient setup

pub mod api;
pub mod app;
pub mod cli;
pub mod commands;
pub mod config;
pub mod launcher;
pub mod logging;
pub mod models;
pub mod route;
pub mod ui;
pub mod worker;

// Re-export commonly used types
pub use models::{MovieDetail, MovieId, MovieSummary};

pub use api::{EmbedService, TmdbClient, TmdbError};
pub use app::{App, AppCommand, AppMessage, DetailPhase, DetailState};
pub use route::Route;
