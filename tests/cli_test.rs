//! CLI Command Tests
//!
//! Argument parsing plus the command handlers against a mock TMDB server.
//! Covers exit codes and input validation.

// =============================================================================
// CLI Argument Parsing Tests
// =============================================================================

mod cli_parsing {
    use clap::Parser;
    use moviehub::cli::{Cli, Command};
    use moviehub::Route;

    #[test]
    fn test_no_args_is_tui_mode() {
        let cli = Cli::parse_from(["moviehub"]);
        assert!(!cli.is_cli_mode());
        assert_eq!(cli.route, Route::Catalog);
    }

    #[test]
    fn test_trending_default_limit() {
        let cli = Cli::parse_from(["moviehub", "trending"]);
        match cli.command {
            Some(Command::Trending(cmd)) => assert_eq!(cmd.limit, 10),
            _ => panic!("Expected Trending command"),
        }
    }

    #[test]
    fn test_search_command_basic() {
        let cli = Cli::parse_from(["moviehub", "search", "blade runner"]);
        match cli.command {
            Some(Command::Search(cmd)) => {
                assert_eq!(cmd.query, "blade runner");
                assert_eq!(cmd.limit, 20);
            }
            _ => panic!("Expected Search command"),
        }
    }

    #[test]
    fn test_search_requires_query() {
        assert!(Cli::try_parse_from(["moviehub", "search"]).is_err());
    }

    #[test]
    fn test_id_commands() {
        for (name, id) in [("info", "550"), ("embed", "603"), ("watch", "807")] {
            let cli = Cli::parse_from(["moviehub", name, id]);
            let parsed = match cli.command {
                Some(Command::Info(cmd)) | Some(Command::Embed(cmd)) | Some(Command::Watch(cmd)) => {
                    cmd.id
                }
                other => panic!("Unexpected command {:?}", other),
            };
            assert_eq!(parsed, id);
        }
    }

    #[test]
    fn test_similar_with_limit() {
        let cli = Cli::parse_from(["moviehub", "similar", "603", "--limit", "3"]);
        match cli.command {
            Some(Command::Similar(cmd)) => {
                assert_eq!(cmd.id, "603");
                assert_eq!(cmd.limit, 3);
            }
            _ => panic!("Expected Similar command"),
        }
    }

    #[test]
    fn test_route_is_top_level_only() {
        let cli = Cli::parse_from(["moviehub", "--route", "/watch/550/"]);
        assert_eq!(cli.route, Route::watch(550_u64));
    }
}

// =============================================================================
// Command Handler Tests
// =============================================================================

mod handlers {
    use mockito::{Matcher, Server};
    use moviehub::api::{EmbedService, TmdbClient};
    use moviehub::cli::{ExitCode, IdCmd, Output, SearchCmd, SimilarCmd, TrendingCmd};
    use moviehub::commands::{self, CommandContext};
    use moviehub::launcher::BrowserLauncher;

    fn quiet_json() -> Output {
        Output {
            json: true,
            quiet: true,
        }
    }

    fn context(base_url: String) -> CommandContext {
        CommandContext {
            tmdb: TmdbClient::with_base_url("test_token", base_url),
            embed: EmbedService::default(),
            launcher: BrowserLauncher::default(),
        }
    }

    #[tokio::test]
    async fn test_trending_success() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/trending/movie/week")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"id": 1, "title": "One"}, {"id": 2, "title": "Two"}]}"#)
            .create_async()
            .await;

        let code = commands::trending_cmd(TrendingCmd { limit: 1 }, &context(server.url()), &quiet_json()).await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_search_no_results() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"page": 1, "results": []}"#)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "zzzzzz".into(),
            limit: 20,
        };
        let code = commands::search_cmd(cmd, &context(server.url()), &quiet_json()).await;
        assert_eq!(code, ExitCode::NoResults);
    }

    #[tokio::test]
    async fn test_search_network_error() {
        let mut server = Server::new_async().await;
        let _mock = server
            .mock("GET", "/search/movie")
            .match_query(Matcher::Any)
            .with_status(502)
            .create_async()
            .await;

        let cmd = SearchCmd {
            query: "matrix".into(),
            limit: 20,
        };
        let code = commands::search_cmd(cmd, &context(server.url()), &quiet_json()).await;
        assert_eq!(code, ExitCode::NetworkError);
    }

    #[tokio::test]
    async fn test_info_success_and_not_found() {
        let mut server = Server::new_async().await;
        let _found = server
            .mock("GET", "/movie/550")
            .with_status(200)
            .with_body(r#"{"id": 550, "title": "Fight Club"}"#)
            .create_async()
            .await;
        let _missing = server
            .mock("GET", "/movie/1")
            .with_status(404)
            .create_async()
            .await;
        let ctx = context(server.url());

        let code = commands::info_cmd(IdCmd { id: "550".into() }, &ctx, &quiet_json()).await;
        assert_eq!(code, ExitCode::Success);

        let code = commands::info_cmd(IdCmd { id: "1".into() }, &ctx, &quiet_json()).await;
        assert_eq!(code, ExitCode::NotFound);
    }

    #[tokio::test]
    async fn test_similar_success() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", "/movie/603/similar")
            .match_query(Matcher::Any)
            .with_status(200)
            .with_body(r#"{"results": [{"id": 604, "title": "Reloaded"}]}"#)
            .create_async()
            .await;

        let cmd = SimilarCmd {
            id: "603".into(),
            limit: 10,
        };
        let code = commands::similar_cmd(cmd, &context(server.url()), &quiet_json()).await;
        mock.assert_async().await;
        assert_eq!(code, ExitCode::Success);
    }

    #[tokio::test]
    async fn test_invalid_ids_rejected_before_requests() {
        let mut server = Server::new_async().await;
        let mock = server
            .mock("GET", Matcher::Any)
            .expect(0)
            .create_async()
            .await;
        let ctx = context(server.url());

        for bad in ["", "abc", "tt0137523"] {
            let code = commands::info_cmd(IdCmd { id: bad.into() }, &ctx, &quiet_json()).await;
            assert_eq!(code, ExitCode::InvalidArgs);
            let code = commands::embed_cmd(IdCmd { id: bad.into() }, &ctx, &quiet_json()).await;
            assert_eq!(code, ExitCode::InvalidArgs);
            let code = commands::watch_cmd(IdCmd { id: bad.into() }, &ctx, &quiet_json()).await;
            assert_eq!(code, ExitCode::InvalidArgs);
        }
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_embed_needs_no_network() {
        let ctx = context("http://127.0.0.1:9".into());
        let code = commands::embed_cmd(IdCmd { id: "603".into() }, &ctx, &quiet_json()).await;
        assert_eq!(code, ExitCode::Success);
    }
}
