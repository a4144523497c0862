//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Redirect},
};
use tracing::debug;

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a short name to its original URL.
///
/// # Endpoint
///
/// `GET /r/{short_name}`
///
/// Responds with 307 Temporary Redirect so clients never cache the mapping
/// as permanent.
///
/// # Errors
///
/// Returns 404 Not Found if the short name doesn't exist.
pub async fn redirect_handler(
    Path(short_name): Path<String>,
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let link = state.link_service.resolve_short_name(&short_name).await?;

    debug!(%short_name, target = %link.original_url, "Redirecting");

    Ok(Redirect::temporary(&link.original_url))
}
