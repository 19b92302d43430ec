//! CLI Command Handlers
//!
//! Implements all CLI commands by calling the appropriate backend services.
//! Each handler takes CLI args, the shared context and Output, returns
//! ExitCode.

use serde::Serialize;

use crate::api::{AdultFilter, EmbedService, TmdbClient, TmdbError};
use crate::app::DEFAULT_TITLE;
use crate::cli::{
    validate_movie_id, EmbedResponse, ExitCode, IdCmd, InfoResponse, Output, SearchCmd,
    SimilarCmd, TrendingCmd,
};
use crate::config::Config;
use crate::launcher::BrowserLauncher;
use crate::models::{MovieId, MovieSummary};

/// Services shared by every command
pub struct CommandContext {
    pub tmdb: TmdbClient,
    pub embed: EmbedService,
    pub launcher: BrowserLauncher,
}

impl CommandContext {
    pub fn from_config(config: &Config) -> Self {
        Self {
            tmdb: TmdbClient::from_config(config),
            embed: EmbedService::new(config.embed_base_url()),
            launcher: BrowserLauncher::default(),
        }
    }
}

/// Map a request failure to an exit code
pub fn exit_code_for(error: &anyhow::Error) -> ExitCode {
    match error.downcast_ref::<TmdbError>() {
        Some(TmdbError::NotFound) => ExitCode::NotFound,
        Some(TmdbError::InvalidResponse(_)) => ExitCode::Error,
        Some(_) | None => ExitCode::NetworkError,
    }
}

/// Print a movie list, or fail with NoResults when it is empty
fn print_movies(mut movies: Vec<MovieSummary>, limit: usize, output: &Output) -> ExitCode {
    if movies.is_empty() {
        return output.error("No movies found", ExitCode::NoResults);
    }
    movies.truncate(limit);

    if output.json {
        return print_or_fail(&movies, output);
    }
    output.print_lines(&movies);
    ExitCode::Success
}

fn print_or_fail<T: Serialize>(data: T, output: &Output) -> ExitCode {
    match output.print(data) {
        Ok(()) => ExitCode::Success,
        Err(e) => output.error(format!("Failed to serialize: {}", e), ExitCode::Error),
    }
}

fn parse_id(raw: &str, output: &Output) -> Result<MovieId, ExitCode> {
    validate_movie_id(raw)
        .map(MovieId::new)
        .map_err(|e| output.error(e, ExitCode::InvalidArgs))
}

// =============================================================================
// Trending Command
// =============================================================================

pub async fn trending_cmd(cmd: TrendingCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    output.info("Fetching trending this week...");

    match ctx.tmdb.trending_week().await {
        Ok(movies) => print_movies(movies, cmd.limit, output),
        Err(e) => output.error(format!("Trending fetch failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Search Command
// =============================================================================

pub async fn search_cmd(cmd: SearchCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    output.info(format!("Searching for: {}", cmd.query));

    match ctx.tmdb.search_movies(&cmd.query, AdultFilter::Exclude).await {
        Ok(movies) => print_movies(movies, cmd.limit, output),
        Err(e) => output.error(format!("Search failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Info Command
// =============================================================================

pub async fn info_cmd(cmd: IdCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    let id = match parse_id(&cmd.id, output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    match ctx.tmdb.movie_detail(&id).await {
        Ok(detail) => {
            let response = InfoResponse {
                id: detail.id,
                title: detail.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
                embed_url: ctx.embed.embed_url(&id),
            };
            if output.json {
                return print_or_fail(&response, output);
            }
            println!("{}", response.title);
            println!("{}", response.embed_url);
            ExitCode::Success
        }
        Err(e) => output.error(format!("Movie info failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Similar Command
// =============================================================================

pub async fn similar_cmd(cmd: SimilarCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    let id = match parse_id(&cmd.id, output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    match ctx.tmdb.similar_movies(&id).await {
        Ok(movies) => print_movies(movies, cmd.limit, output),
        Err(e) => output.error(format!("Similar fetch failed: {}", e), exit_code_for(&e)),
    }
}

// =============================================================================
// Embed / Watch Commands
// =============================================================================

pub async fn embed_cmd(cmd: IdCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    let id = match parse_id(&cmd.id, output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let embed_url = ctx.embed.embed_url(&id);
    if output.json {
        return print_or_fail(
            EmbedResponse {
                id: id.to_string(),
                embed_url,
                opened: None,
            },
            output,
        );
    }
    println!("{}", embed_url);
    ExitCode::Success
}

pub async fn watch_cmd(cmd: IdCmd, ctx: &CommandContext, output: &Output) -> ExitCode {
    let id = match parse_id(&cmd.id, output) {
        Ok(id) => id,
        Err(code) => return code,
    };

    let embed_url = ctx.embed.embed_url(&id);
    output.info(format!("Opening {} with {}...", embed_url, ctx.launcher.opener()));

    if let Err(e) = ctx.launcher.open(&embed_url).await {
        tracing::warn!(error = %e, "watch: launch failed");
        return output.error(e.to_string(), ExitCode::LaunchFailed);
    }

    if output.json {
        return print_or_fail(
            EmbedResponse {
                id: id.to_string(),
                embed_url,
                opened: Some(true),
            },
            output,
        );
    }
    ExitCode::Success
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_code_mapping() {
        let not_found: anyhow::Error = TmdbError::NotFound.into();
        assert_eq!(exit_code_for(&not_found), ExitCode::NotFound);

        let auth: anyhow::Error = TmdbError::Unauthorized.into();
        assert_eq!(exit_code_for(&auth), ExitCode::NetworkError);

        let parse: anyhow::Error = TmdbError::InvalidResponse("bad".into()).into();
        assert_eq!(exit_code_for(&parse), ExitCode::Error);

        let other = anyhow::anyhow!("socket closed");
        assert_eq!(exit_code_for(&other), ExitCode::NetworkError);
    }

    #[test]
    fn test_empty_list_is_no_results() {
        let output = Output {
            json: true,
            quiet: true,
        };
        assert_eq!(print_movies(Vec::new(), 10, &output), ExitCode::NoResults);
    }

    #[test]
    fn test_invalid_id_rejected() {
        let output = Output {
            json: false,
            quiet: true,
        };
        assert_eq!(parse_id("abc", &output).unwrap_err(), ExitCode::InvalidArgs);
        assert_eq!(parse_id("550", &output).unwrap(), MovieId::new("550"));
    }
}
