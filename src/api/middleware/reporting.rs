//! Middleware forwarding server errors to the crash reporter.

use axum::{extract::Request, extract::State, middleware::Next, response::Response};

use crate::infrastructure::reporting::CrashEvent;
use crate::state::AppState;

/// Captures 5xx responses and hands them to the configured reporter.
///
/// Request-local failures (4xx) are the client's problem and are not
/// reported. The reporter is a no-op when no DSN is configured, so this
/// layer runs unconditionally.
pub async fn layer(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let method = req.method().to_string();
    let path = req.uri().path().to_string();

    let response = next.run(req).await;

    let status = response.status();
    if status.is_server_error() {
        state
            .reporter
            .capture(CrashEvent::new(method, path, status.as_u16()));
    }

    response
}
