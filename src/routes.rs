//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET /ping`              - Liveness probe, returns `pong`
//! - `GET /r/{short_name}`    - Short link redirect
//! - `/api/links*`            - Link CRUD and listing
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **CORS** - Allow-all policy for browser frontends
//! - **Crash reporting** - Forwards 5xx responses to the configured reporter
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::{ping_handler, redirect_handler};
use crate::api::middleware::{cors, reporting, tracing};
use crate::state::AppState;
use axum::Router;
use axum::{middleware, routing::get};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let router = Router::new()
        .route("/ping", get(ping_handler))
        .route("/r/{short_name}", get(redirect_handler))
        .nest("/api", api::routes::api_routes())
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reporting::layer,
        ))
        .with_state(state)
        .layer(cors::layer())
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
