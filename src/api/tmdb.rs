//! TMDB (The Movie Database) API client
//!
//! Trending, search, title lookup and similar-movie lists for the catalog
//! and watch screens. Only the first page of any list is ever requested.
//! API docs: https://developer.themoviedb.org/docs

use anyhow::Result;
use reqwest::StatusCode;
use serde::Deserialize;
use thiserror::Error;

use crate::config::Config;
use crate::models::{MovieDetail, MovieId, MovieSummary};

/// Default TMDB v3 endpoint
pub const TMDB_BASE_URL: &str = "https://api.themoviedb.org/3";

/// Default response language
pub const DEFAULT_LANGUAGE: &str = "en-US";

/// TMDB API error types
#[derive(Error, Debug)]
pub enum TmdbError {
    #[error("Resource not found (404)")]
    NotFound,

    #[error("Unauthorized (401): check the TMDB bearer token")]
    Unauthorized,

    #[error("Server error: {0}")]
    ServerError(u16),

    #[error("Unexpected status: {0}")]
    UnexpectedStatus(u16),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),
}

/// Adult-content filter sent with a search
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdultFilter {
    /// Send `include_adult=false`
    #[default]
    Exclude,
    /// Leave the parameter out and let the API decide
    Unspecified,
}

/// TMDB API client
///
/// Authenticates every call with a bearer token. A missing or rejected token
/// is not detected up front: each call simply fails with [`TmdbError`].
pub struct TmdbClient {
    bearer_token: String,
    base_url: String,
    language: String,
    client: reqwest::Client,
}

impl TmdbClient {
    /// Create a new TMDB client with the given bearer token
    pub fn new(bearer_token: impl Into<String>) -> Self {
        Self::with_base_url(bearer_token, TMDB_BASE_URL)
    }

    /// Create a client with a custom base URL (for testing)
    pub fn with_base_url(bearer_token: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            bearer_token: bearer_token.into(),
            base_url: base_url.into(),
            language: DEFAULT_LANGUAGE.to_string(),
            client: reqwest::Client::new(),
        }
    }

    /// Build a client from resolved configuration
    pub fn from_config(config: &Config) -> Self {
        let token = config.bearer_token().unwrap_or_default();
        Self::with_base_url(token, config.api_base_url()).with_language(config.language())
    }

    /// Override the response language
    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = language.into();
        self
    }

    pub fn language(&self) -> &str {
        &self.language
    }

    /// Make an authenticated GET request
    async fn get<T: for<'de> Deserialize<'de>>(&self, endpoint: &str) -> Result<T> {
        let url = format!("{}{}", self.base_url, endpoint);
        tracing::debug!(endpoint, "tmdb: GET");

        let response = self
            .client
            .get(&url)
            .header("Authorization", format!("Bearer {}", self.bearer_token))
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(TmdbError::RequestFailed)?;

        match response.status() {
            StatusCode::OK => {
                let body = response.text().await.map_err(TmdbError::RequestFailed)?;
                let parsed: T = serde_json::from_str(&body).map_err(|e| {
                    TmdbError::InvalidResponse(format!("JSON parse error: {}", e))
                })?;
                Ok(parsed)
            }
            StatusCode::NOT_FOUND => Err(TmdbError::NotFound.into()),
            StatusCode::UNAUTHORIZED => Err(TmdbError::Unauthorized.into()),
            status if status.is_server_error() => {
                Err(TmdbError::ServerError(status.as_u16()).into())
            }
            status => Err(TmdbError::UnexpectedStatus(status.as_u16()).into()),
        }
    }

    /// This week's trending movies
    pub async fn trending_week(&self) -> Result<Vec<MovieSummary>> {
        let endpoint = format!(
            "/trending/movie/week?language={}",
            urlencoding::encode(&self.language)
        );
        let response: ListResponse = self.get(&endpoint).await?;
        Ok(response.into_summaries())
    }

    /// Search movies by title, first page only
    pub async fn search_movies(&self, query: &str, adult: AdultFilter) -> Result<Vec<MovieSummary>> {
        let adult_param = match adult {
            AdultFilter::Exclude => "&include_adult=false",
            AdultFilter::Unspecified => "",
        };
        let endpoint = format!(
            "/search/movie?query={}{}&language={}&page=1",
            urlencoding::encode(query),
            adult_param,
            urlencoding::encode(&self.language)
        );
        let response: ListResponse = self.get(&endpoint).await?;
        Ok(response.into_summaries())
    }

    /// Movie detail lookup, used for its title
    pub async fn movie_detail(&self, id: &MovieId) -> Result<MovieDetail> {
        let endpoint = format!("/movie/{}", urlencoding::encode(id.as_str()));
        let response: MovieResponse = self.get(&endpoint).await?;
        Ok(response.into_detail(id))
    }

    /// Movies similar to the given one, first page only
    pub async fn similar_movies(&self, id: &MovieId) -> Result<Vec<MovieSummary>> {
        let endpoint = format!(
            "/movie/{}/similar?language={}&page=1",
            urlencoding::encode(id.as_str()),
            urlencoding::encode(&self.language)
        );
        let response: ListResponse = self.get(&endpoint).await?;
        Ok(response.into_summaries())
    }
}

// =============================================================================
// Response Structures (internal deserialization)
// =============================================================================

/// Any paged list response. `results` may be absent or null.
#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    results: Option<Vec<MovieSummaryRaw>>,
}

impl ListResponse {
    fn into_summaries(self) -> Vec<MovieSummary> {
        self.results
            .unwrap_or_default()
            .into_iter()
            .filter_map(MovieSummaryRaw::into_summary)
            .collect()
    }
}

#[derive(Debug, Deserialize)]
struct MovieSummaryRaw {
    id: Option<u64>,
    title: Option<String>,
    poster_path: Option<String>,
}

impl MovieSummaryRaw {
    /// Entries without an id can't be linked to, so they are skipped
    fn into_summary(self) -> Option<MovieSummary> {
        Some(MovieSummary {
            id: self.id?,
            title: self.title.unwrap_or_default(),
            // An empty path is as good as none
            poster_path: self.poster_path.filter(|p| !p.is_empty()),
        })
    }
}

#[derive(Debug, Deserialize)]
struct MovieResponse {
    id: Option<u64>,
    title: Option<String>,
}

impl MovieResponse {
    fn into_detail(self, requested: &MovieId) -> MovieDetail {
        MovieDetail {
            id: self.id.or_else(|| requested.as_u64()).unwrap_or(0),
            title: self.title.filter(|t| !t.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_list_response_skips_entries_without_id() {
        let parsed: ListResponse = serde_json::from_str(
            r#"{"results": [{"id": 1, "title": "One"}, {"id": null, "title": "Ghost"}, {"title": "Nameless"}, {"id": 3, "title": "Three"}]}"#,
        )
        .unwrap();
        let ids: Vec<u64> = parsed.into_summaries().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_list_response_missing_results() {
        let parsed: ListResponse = serde_json::from_str(r#"{"page": 1}"#).unwrap();
        assert!(parsed.into_summaries().is_empty());

        let parsed: ListResponse = serde_json::from_str(r#"{"results": null}"#).unwrap();
        assert!(parsed.into_summaries().is_empty());
    }

    #[test]
    fn test_summary_defaults() {
        let raw = MovieSummaryRaw {
            id: Some(7),
            title: None,
            poster_path: Some(String::new()),
        };
        let summary = raw.into_summary().unwrap();
        assert_eq!(summary.id, 7);
        assert_eq!(summary.title, "");
        assert!(summary.poster_path.is_none());
    }

    #[test]
    fn test_detail_falls_back_to_requested_id() {
        let response = MovieResponse {
            id: None,
            title: Some(String::new()),
        };
        let detail = response.into_detail(&MovieId::from(550));
        assert_eq!(detail.id, 550);
        assert!(detail.title.is_none());
    }

    #[test]
    fn test_client_language_override() {
        let client = TmdbClient::new("token").with_language("de-DE");
        assert_eq!(client.language(), "de-DE");
    }
}
