//! HTTP server initialization and runtime setup.
//!
//! Handles the database pool, migrations, dependency wiring, and the Axum
//! server lifecycle.

use crate::application::services::LinkService;
use crate::config::Config;
use crate::infrastructure::persistence::SqliteLinkRepository;
use crate::infrastructure::reporting::{CrashReporter, HttpReporter, NoopReporter};
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use sqlx::sqlite::{SqliteConnectOptions, SqliteJournalMode, SqlitePoolOptions};
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - SQLite connection pool (the database file is created if missing)
/// - Embedded migrations
/// - Crash reporter (HTTP endpoint, or no-op when no DSN is configured)
/// - Axum HTTP server
///
/// # Errors
///
/// Returns an error if:
/// - Database connection or migration fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let options = config
        .database_url
        .parse::<SqliteConnectOptions>()?
        .create_if_missing(true)
        .journal_mode(SqliteJournalMode::Wal)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(options)
        .await?;
    tracing::info!("Connected to database");

    sqlx::migrate!("./migrations").run(&pool).await?;
    tracing::info!("Database migrations applied");

    let reporter: Arc<dyn CrashReporter> = match config.error_report_dsn.as_deref() {
        Some(dsn) => match HttpReporter::from_dsn(dsn) {
            Some(reporter) => {
                tracing::info!("Crash reporting enabled");
                Arc::new(reporter)
            }
            None => {
                tracing::warn!("ERROR_REPORT_DSN is not a valid http(s) URL, reporting disabled");
                Arc::new(NoopReporter::new())
            }
        },
        None => Arc::new(NoopReporter::new()),
    };

    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repository));

    let state = AppState {
        link_service,
        base_url: config.base_url.clone(),
        reporter,
    };

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app)).await?;

    Ok(())
}
