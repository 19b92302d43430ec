//! Third-party URLs derived from movie data
//!
//! The player is reached purely by URL template: the movie id is the only
//! dynamic part and is inserted verbatim. Poster images come from the TMDB
//! image CDN.

use crate::models::MovieId;

/// Default embed player endpoint
pub const DEFAULT_EMBED_BASE_URL: &str = "https://vidsrc.icu/embed/movie";

/// TMDB image CDN root
pub const IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Fixed poster reference used by the related grid when a movie has none
pub const PLACEHOLDER_POSTER_URL: &str = "https://via.placeholder.com/300x450?text=No+Image";

/// Poster widths requested from the image CDN
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosterSize {
    /// Catalog tiles
    W500,
    /// Related-movie tiles
    W300,
}

impl PosterSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            PosterSize::W500 => "w500",
            PosterSize::W300 => "w300",
        }
    }
}

/// Build a poster image URL from a TMDB poster path (e.g. `/abc.jpg`)
pub fn poster_url(poster_path: &str, size: PosterSize) -> String {
    format!("{}/{}{}", IMAGE_BASE_URL, size.as_str(), poster_path)
}

/// Embed player service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedService {
    base_url: String,
}

impl Default for EmbedService {
    fn default() -> Self {
        Self::new(DEFAULT_EMBED_BASE_URL)
    }
}

impl EmbedService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Player URL for a movie. The id is not sanitized.
    pub fn embed_url(&self, id: &MovieId) -> String {
        format!("{}/{}", self.base_url, id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embed_url_default() {
        let embed = EmbedService::default();
        assert_eq!(
            embed.embed_url(&MovieId::from(550)),
            "https://vidsrc.icu/embed/movie/550"
        );
    }

    #[test]
    fn test_embed_url_trims_trailing_slash() {
        let embed = EmbedService::new("https://player.example/movie/");
        assert_eq!(
            embed.embed_url(&MovieId::new("27205")),
            "https://player.example/movie/27205"
        );
    }

    #[test]
    fn test_poster_urls() {
        assert_eq!(
            poster_url("/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg", PosterSize::W500),
            "https://image.tmdb.org/t/p/w500/pB8BM7pdSp6B6Ih7QZ4DrQ3PmJK.jpg"
        );
        assert_eq!(
            poster_url("/x.jpg", PosterSize::W300),
            "https://image.tmdb.org/t/p/w300/x.jpg"
        );
    }
}
