//! Handler for the liveness probe.

/// Returns the literal string `pong` regardless of store state.
///
/// # Endpoint
///
/// `GET /ping`
pub async fn ping_handler() -> &'static str {
    "pong"
}
