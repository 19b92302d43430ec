//! Configuration management for MovieHub
//!
//! Handles config file loading and TMDB bearer token resolution.
//! Config is stored at ~/.config/moviehub/config.toml

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::api::embed::DEFAULT_EMBED_BASE_URL;
use crate::api::tmdb::{DEFAULT_LANGUAGE, TMDB_BASE_URL};

/// Environment variables checked for the bearer token, in order
pub const TOKEN_ENV_VARS: &[&str] = &["TMDB_BEARER", "VITE_TMDB_BEARER"];

/// Application configuration
///
/// Loaded once at startup and treated as read-only afterwards.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// TMDB v4 read access token (bearer)
    pub tmdb_bearer: Option<String>,
    /// Response language, e.g. "en-US"
    pub language: Option<String>,
    /// Override for the TMDB API root
    pub api_base_url: Option<String>,
    /// Override for the embed player root
    pub embed_base_url: Option<String>,
    /// Directory for the TUI log file
    pub log_dir: Option<PathBuf>,
}

impl Config {
    /// Get config file path (~/.config/moviehub/config.toml)
    pub fn path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("moviehub").join("config.toml"))
    }

    /// Load config from the default path, or return default if not found
    pub fn load() -> Result<Self> {
        match Self::path() {
            Some(path) => Self::load_from(&path),
            None => Ok(Self::default()),
        }
    }

    /// Load config from a specific file. A missing file yields the default;
    /// an unreadable or malformed one is an error.
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = match std::fs::read_to_string(path) {
            Ok(s) => s,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(Self::default()),
            Err(e) => {
                return Err(e).with_context(|| format!("Failed to read {}", path.display()))
            }
        };
        toml::from_str(&contents).with_context(|| format!("Malformed config {}", path.display()))
    }

    /// Get the TMDB bearer token with fallback chain:
    /// 1. Environment variable TMDB_BEARER
    /// 2. Environment variable VITE_TMDB_BEARER
    /// 3. Token from config file
    pub fn bearer_token(&self) -> Option<String> {
        TOKEN_ENV_VARS
            .iter()
            .find_map(|var| std::env::var(var).ok())
            .or_else(|| self.tmdb_bearer.clone())
            .filter(|t| !t.trim().is_empty())
    }

    pub fn language(&self) -> &str {
        self.language.as_deref().unwrap_or(DEFAULT_LANGUAGE)
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or(TMDB_BASE_URL)
    }

    pub fn embed_base_url(&self) -> &str {
        self.embed_base_url.as_deref().unwrap_or(DEFAULT_EMBED_BASE_URL)
    }

    /// Directory for the TUI log file (defaults to the cache dir)
    pub fn log_dir(&self) -> PathBuf {
        self.log_dir
            .clone()
            .or_else(|| dirs::cache_dir().map(|p| p.join("moviehub")))
            .unwrap_or_else(std::env::temp_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert!(config.tmdb_bearer.is_none());
        assert_eq!(config.language(), "en-US");
        assert_eq!(config.api_base_url(), "https://api.themoviedb.org/3");
        assert_eq!(config.embed_base_url(), "https://vidsrc.icu/embed/movie");
    }

    #[test]
    fn test_config_parses_toml() {
        let config: Config = toml::from_str(
            r#"
            tmdb_bearer = "abc"
            language = "fr-FR"
            embed_base_url = "https://player.example/movie"
            "#,
        )
        .unwrap();
        assert_eq!(config.tmdb_bearer.as_deref(), Some("abc"));
        assert_eq!(config.language(), "fr-FR");
        assert_eq!(config.embed_base_url(), "https://player.example/movie");
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("moviehub-config-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config("valid", "language = \"es-ES\"\n");
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.language(), "es-ES");

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let path = temp_config("malformed", "language = [unclosed\n");
        let err = Config::load_from(&path).unwrap_err();
        assert!(err.to_string().contains("Malformed config"));

        let _ = std::fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let config = Config::load_from(Path::new("/nonexistent/moviehub/config.toml")).unwrap();
        assert!(config.tmdb_bearer.is_none());
    }
}
