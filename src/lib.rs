//! # Shortio
//!
//! A small URL shortening service built with Axum and SQLite.
//!
//! ## Architecture
//!
//! The crate follows a layered layout with clear separation:
//!
//! - **Domain Layer** ([`domain`]) - The link entity and repository trait
//! - **Application Layer** ([`application`]) - Link store orchestration
//! - **Infrastructure Layer** ([`infrastructure`]) - SQLite persistence and
//!   crash reporting
//! - **API Layer** ([`api`]) - REST handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Client-chosen short names with uniqueness enforced by the storage layer
//! - 307 redirects via `GET /r/{short_name}`
//! - CRUD over links with `Content-Range` style offset pagination
//! - Optional crash reporting behind a capability interface
//!
//! ## Quick Start
//!
//! ```bash
//! # Everything has a local default; the SQLite file is created on first run
//! export DATABASE_URL="sqlite:./shortio.db"
//! export BASE_URL="https://short.example.com"
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::LinkService;
    pub use crate::domain::entities::{Link, LinkPatch, NewLink};
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
