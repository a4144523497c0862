#![allow(dead_code)]

use sqlx::SqlitePool;
use std::sync::Arc;

use shortio::application::services::LinkService;
use shortio::infrastructure::persistence::SqliteLinkRepository;
use shortio::infrastructure::reporting::{CrashReporter, NoopReporter};
use shortio::state::AppState;

/// Base address used for `short_url` fields in every test.
pub const BASE_URL: &str = "https://short.io";

pub fn create_test_state(pool: SqlitePool) -> AppState {
    create_test_state_with_reporter(pool, Arc::new(NoopReporter::new()))
}

pub fn create_test_state_with_reporter(
    pool: SqlitePool,
    reporter: Arc<dyn CrashReporter>,
) -> AppState {
    let link_repository = Arc::new(SqliteLinkRepository::new(Arc::new(pool)));
    let link_service = Arc::new(LinkService::new(link_repository));

    AppState {
        link_service,
        base_url: BASE_URL.to_string(),
        reporter,
    }
}

pub async fn seed_link(pool: &SqlitePool, original_url: &str, short_name: &str) -> i64 {
    sqlx::query_scalar(
        "INSERT INTO links (original_url, short_name) VALUES (?1, ?2) RETURNING id",
    )
    .bind(original_url)
    .bind(short_name)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn count_links_named(pool: &SqlitePool, short_name: &str) -> i64 {
    sqlx::query_scalar("SELECT COUNT(*) FROM links WHERE short_name = ?1")
        .bind(short_name)
        .fetch_one(pool)
        .await
        .unwrap()
}
