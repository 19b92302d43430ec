//! API clients for external services
//!
//! - TMDB: movie metadata, search, trending and similar lists
//! - Embed: player and poster URLs keyed by movie id

pub mod embed;
pub mod tmdb;

pub use embed::EmbedService;
pub use tmdb::{AdultFilter, TmdbClient, TmdbError};
