//! Plenary server binary.
//!
//! Boots the voting-session service: loads configuration, connects to
//! PostgreSQL, wires the command handlers, spawns the expiration sweep,
//! and serves the REST API until SIGINT.

use std::sync::Arc;
use std::time::Duration;

use sqlx::postgres::PgPoolOptions;
use tokio::sync::watch;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use plenary::adapters::http::{session_routes, vote_routes, SessionHandlers, VoteHandlers};
use plenary::adapters::identity::{HttpIdentityVerifier, IdentityVerifierConfig};
use plenary::adapters::postgres::{PostgresDirectory, PostgresSessionStore, PostgresVoteLedger};
use plenary::adapters::SystemClock;
use plenary::application::handlers::session::{
    CloseSessionHandler, CreateSessionHandler, GetSessionHandler, StartSessionHandler,
};
use plenary::application::handlers::tally::GetTallyHandler;
use plenary::application::handlers::vote::{CastVoteHandler, HasVotedHandler};
use plenary::application::{ExpirationSweeper, SweeperConfig};
use plenary::config::AppConfig;
use plenary::ports::{Clock, SessionStore, VoteLedger, VoterRegistry};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::load()?;
    config.validate()?;

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&config.server.log_level))
        .init();

    tracing::info!(
        environment = ?config.server.environment,
        "starting plenary"
    );

    let pool = PgPoolOptions::new()
        .min_connections(config.database.min_connections)
        .max_connections(config.database.max_connections)
        .acquire_timeout(config.database.acquire_timeout())
        .connect(&config.database.url)
        .await?;

    if config.database.run_migrations {
        tracing::info!("running database migrations");
        sqlx::migrate!("./migrations").run(&pool).await?;
    }

    // Adapters
    let store: Arc<dyn SessionStore> = Arc::new(PostgresSessionStore::new(pool.clone()));
    let ledger: Arc<dyn VoteLedger> = Arc::new(PostgresVoteLedger::new(pool.clone()));
    let directory = Arc::new(PostgresDirectory::new(pool.clone()));
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);

    let voters: Arc<dyn VoterRegistry> = match &config.identity {
        Some(identity) => {
            tracing::info!(base_url = %identity.base_url, "using remote identity service");
            Arc::new(HttpIdentityVerifier::new(
                IdentityVerifierConfig::new(&identity.base_url, &identity.api_key)
                    .with_timeout(Duration::from_secs(identity.timeout_secs)),
            )?)
        }
        None => directory.clone(),
    };

    // Command and query handlers
    let create_handler = Arc::new(CreateSessionHandler::new(
        store.clone(),
        directory.clone(),
        clock.clone(),
    ));
    let start_handler = Arc::new(StartSessionHandler::new(store.clone(), clock.clone()));
    let close_handler = Arc::new(CloseSessionHandler::new(store.clone()));
    let get_handler = Arc::new(GetSessionHandler::new(store.clone()));
    let tally_handler = Arc::new(GetTallyHandler::new(store.clone(), ledger.clone()));
    let cast_handler = Arc::new(CastVoteHandler::new(
        store.clone(),
        ledger.clone(),
        voters,
        clock.clone(),
    ));
    let has_voted_handler = Arc::new(HasVotedHandler::new(ledger));

    // Expiration sweep
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let sweeper = Arc::new(ExpirationSweeper::with_config(
        store,
        close_handler.clone(),
        clock,
        SweeperConfig::default()
            .with_interval(config.sweep.interval())
            .with_batch_size(config.sweep.batch_size),
    ));
    let sweeper_task = tokio::spawn({
        let sweeper = sweeper.clone();
        async move { sweeper.run(shutdown_rx).await }
    });

    // HTTP surface
    let session_handlers = SessionHandlers::new(
        create_handler,
        start_handler,
        close_handler,
        get_handler,
        tally_handler,
    );
    let vote_handlers = VoteHandlers::new(cast_handler, has_voted_handler);

    let origins: Vec<http::HeaderValue> = config
        .server
        .cors_origins_list()
        .iter()
        .filter_map(|o| o.parse().ok())
        .collect();
    let cors = if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    let app = axum::Router::new()
        .nest("/api/v1/voting-sessions", session_routes(session_handlers))
        .nest("/api/v1/votes", vote_routes(vote_handlers))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )));

    let addr = config.server.socket_addr()?;
    tracing::info!(%addr, "listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = tokio::signal::ctrl_c().await;
            tracing::info!("shutdown signal received");
        })
        .await?;

    // Stop the sweep after the server drains.
    let _ = shutdown_tx.send(true);
    let _ = sweeper_task.await;

    tracing::info!("plenary stopped");
    Ok(())
}
