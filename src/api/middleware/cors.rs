//! CORS middleware for browser clients.

use tower_http::cors::CorsLayer;

/// Allow-all CORS layer.
///
/// Mirrors the request origin and allows credentials, any method, and any
/// header, so browser frontends on other origins can call the API during
/// local development. Lock this down before exposing the service publicly.
pub fn layer() -> CorsLayer {
    CorsLayer::very_permissive()
}
