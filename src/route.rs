//! Navigation routes
//!
//! Two path shapes exist: `/` for the catalog and `/watch/:id` for the watch
//! screen. The id segment is the only state handed from one screen to the
//! next.

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::models::MovieId;

/// Routing errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    #[error("No route matches path: {0}")]
    Unmatched(String),
}

/// A navigable location
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Route {
    /// Search box, search results, trending
    #[default]
    Catalog,
    /// Player for one movie; `None` when the path carries no id
    Watch(Option<MovieId>),
}

impl Route {
    /// Watch route for a movie id
    pub fn watch(id: impl Into<MovieId>) -> Self {
        Route::Watch(Some(id.into()))
    }

    /// Path form of this route
    pub fn to_path(&self) -> String {
        match self {
            Route::Catalog => "/".to_string(),
            Route::Watch(Some(id)) => format!("/watch/{}", id),
            Route::Watch(None) => "/watch".to_string(),
        }
    }

    /// Movie id carried by the route, if any
    pub fn movie_id(&self) -> Option<&MovieId> {
        match self {
            Route::Watch(Some(id)) => Some(id),
            _ => None,
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}

impl FromStr for Route {
    type Err = RouteError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let trimmed = path.trim();
        let trimmed = trimmed.strip_suffix('/').unwrap_or(trimmed);

        if trimmed.is_empty() {
            return Ok(Route::Catalog);
        }

        let segments: Vec<&str> = trimmed.strip_prefix('/').unwrap_or(trimmed).split('/').collect();
        match segments.as_slice() {
            ["watch"] => Ok(Route::Watch(None)),
            ["watch", id] if !id.is_empty() => Ok(Route::Watch(Some(MovieId::new(*id)))),
            _ => Err(RouteError::Unmatched(path.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        assert_eq!("/".parse::<Route>(), Ok(Route::Catalog));
        assert_eq!("".parse::<Route>(), Ok(Route::Catalog));
    }

    #[test]
    fn test_parse_watch_with_id() {
        assert_eq!("/watch/550".parse::<Route>(), Ok(Route::watch(550_u64)));
        assert_eq!("/watch/550/".parse::<Route>(), Ok(Route::watch(550_u64)));
        assert_eq!(
            "watch/abc".parse::<Route>(),
            Ok(Route::Watch(Some(MovieId::new("abc"))))
        );
    }

    #[test]
    fn test_parse_watch_without_id() {
        assert_eq!("/watch".parse::<Route>(), Ok(Route::Watch(None)));
        assert_eq!("/watch/".parse::<Route>(), Ok(Route::Watch(None)));
    }

    #[test]
    fn test_parse_unmatched() {
        assert!(matches!(
            "/movies/550".parse::<Route>(),
            Err(RouteError::Unmatched(_))
        ));
        assert!("/watch/550/extra".parse::<Route>().is_err());
        assert!("/watch//".parse::<Route>().is_err());
    }

    #[test]
    fn test_to_path_roundtrip() {
        for route in [Route::Catalog, Route::watch(603_u64), Route::Watch(None)] {
            assert_eq!(route.to_path().parse::<Route>(), Ok(route.clone()));
        }
        assert_eq!(Route::watch(603_u64).to_string(), "/watch/603");
    }
}
