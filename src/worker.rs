//! Background request worker
//!
//! Receives [`AppCommand`]s from the app, runs each one on its own task, and
//! sends the outcome back as an [`AppMessage`]. The worker never decides
//! whether a response is still wanted; the app drops stale ones.

use std::sync::Arc;
use tokio::sync::mpsc;

use crate::api::{AdultFilter, TmdbClient};
use crate::app::{AppCommand, AppMessage, RequestKind};
use crate::launcher::BrowserLauncher;

/// Shared handles used by every request task
pub struct Worker {
    tmdb: Arc<TmdbClient>,
    launcher: Arc<BrowserLauncher>,
}

impl Worker {
    pub fn new(tmdb: TmdbClient, launcher: BrowserLauncher) -> Self {
        Self {
            tmdb: Arc::new(tmdb),
            launcher: Arc::new(launcher),
        }
    }

    /// Spawn the worker loop. It ends when the command channel closes.
    pub fn spawn(
        self,
        mut cmd_rx: mpsc::UnboundedReceiver<AppCommand>,
        msg_tx: mpsc::UnboundedSender<AppMessage>,
    ) -> tokio::task::JoinHandle<()> {
        tokio::spawn(async move {
            while let Some(cmd) = cmd_rx.recv().await {
                let tmdb = Arc::clone(&self.tmdb);
                let launcher = Arc::clone(&self.launcher);
                let tx = msg_tx.clone();
                tokio::spawn(async move {
                    let msg = handle_command(&tmdb, &launcher, cmd).await;
                    // Receiver gone means the app is shutting down
                    let _ = tx.send(msg);
                });
            }
            tracing::debug!("worker: command channel closed");
        })
    }
}

/// Run one command to completion
pub async fn handle_command(
    tmdb: &TmdbClient,
    launcher: &BrowserLauncher,
    cmd: AppCommand,
) -> AppMessage {
    match cmd {
        AppCommand::FetchTrending { generation } => match tmdb.trending_week().await {
            Ok(movies) => AppMessage::TrendingLoaded { generation, movies },
            Err(e) => failed(generation, RequestKind::Trending, e),
        },
        AppCommand::SearchCatalog {
            generation,
            seq,
            query,
        } => match tmdb.search_movies(&query, AdultFilter::Exclude).await {
            Ok(movies) => AppMessage::SearchLoaded {
                generation,
                seq,
                movies,
            },
            Err(e) => failed(generation, RequestKind::Search, e),
        },
        AppCommand::FetchTitle { generation, id } => match tmdb.movie_detail(&id).await {
            Ok(detail) => AppMessage::TitleLoaded {
                generation,
                title: detail.title,
            },
            Err(e) => failed(generation, RequestKind::Title, e),
        },
        AppCommand::FetchRelated { generation, id } => match tmdb.similar_movies(&id).await {
            Ok(movies) => AppMessage::RelatedLoaded { generation, movies },
            Err(e) => failed(generation, RequestKind::Related, e),
        },
        AppCommand::JumpSearch { generation, query } => {
            match tmdb.search_movies(&query, AdultFilter::Unspecified).await {
                Ok(movies) => AppMessage::JumpResolved {
                    generation,
                    first: movies.first().map(|m| m.movie_id()),
                },
                Err(e) => failed(generation, RequestKind::JumpSearch, e),
            }
        }
        AppCommand::OpenPlayer { url } => match launcher.open(&url).await {
            Ok(()) => AppMessage::PlayerOpened { url },
            Err(e) => {
                tracing::warn!(url, error = %e, "worker: failed to open player");
                AppMessage::PlayerFailed {
                    error: e.to_string(),
                }
            }
        },
    }
}

fn failed(generation: u64, kind: RequestKind, error: anyhow::Error) -> AppMessage {
    tracing::warn!(?kind, error = %error, "worker: request failed");
    AppMessage::RequestFailed {
        generation,
        kind,
        error: error.to_string(),
    }
}
