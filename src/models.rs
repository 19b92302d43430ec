//! Data structures shared across MovieHub
//!
//! - **Catalog**: movie summaries from search, trending and similar lists
//! - **Detail**: the title-only movie lookup used by the watch screen
//! - **Identifiers**: the opaque movie id carried by navigation

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Identifiers
// =============================================================================

/// Movie identifier as carried by a navigation route.
///
/// TMDB assigns integer ids, but a route segment is an opaque token: whatever
/// follows `/watch/` is kept verbatim and flows unchanged into request paths
/// and the embed URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MovieId(String);

impl MovieId {
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Numeric value, when the token is an integer
    pub fn as_u64(&self) -> Option<u64> {
        self.0.parse().ok()
    }
}

impl From<u64> for MovieId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl fmt::Display for MovieId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Catalog Models (TMDB)
// =============================================================================

/// Minimal display record for a movie tile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    pub id: u64,
    pub title: String,
    pub poster_path: Option<String>,
}

impl MovieSummary {
    /// Navigation target for this movie. Only the id is trusted for this.
    pub fn movie_id(&self) -> MovieId {
        MovieId::from(self.id)
    }
}

impl fmt::Display for MovieSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} [{}]", self.title, self.id)
    }
}

/// Title-only movie detail
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetail {
    pub id: u64,
    pub title: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_movie_id_from_integer() {
        let id = MovieId::from(550);
        assert_eq!(id.as_str(), "550");
        assert_eq!(id.as_u64(), Some(550));
        assert_eq!(id.to_string(), "550");
    }

    #[test]
    fn test_movie_id_keeps_token_verbatim() {
        let id = MovieId::new("tt0137523");
        assert_eq!(id.as_str(), "tt0137523");
        assert_eq!(id.as_u64(), None);
    }

    #[test]
    fn test_summary_navigation_target_uses_id() {
        let movie = MovieSummary {
            id: 603,
            title: "The Matrix".to_string(),
            poster_path: Some("/f89U3ADr1oiB1s9GkdPOEpXUk5H.jpg".to_string()),
        };
        assert_eq!(movie.movie_id(), MovieId::new("603"));
        assert_eq!(movie.to_string(), "The Matrix [603]");
    }

    #[test]
    fn test_movie_id_serializes_as_string() {
        let json = serde_json::to_string(&MovieId::from(42)).unwrap();
        assert_eq!(json, "\"42\"");
    }
}
