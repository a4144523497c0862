//! Application error taxonomy and its HTTP mapping.
//!
//! Every failure surfaced to a client is one of four kinds, rendered as a
//! JSON envelope:
//!
//! ```json
//! { "error": { "code": "not_found", "message": "Link not found", "details": { "id": 7 } } }
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::{Value, json};

#[derive(Debug)]
pub enum AppError {
    Validation { message: String, details: Value },
    NotFound { message: String, details: Value },
    Conflict { message: String, details: Value },
    Internal { message: String, details: Value },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, details: Value) -> Self {
        Self::Validation { message: message.into(), details }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound { message: message.into(), details }
    }

    pub fn conflict(message: impl Into<String>, details: Value) -> Self {
        Self::Conflict { message: message.into(), details }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal { message: message.into(), details }
    }

    /// The HTTP status for this error.
    ///
    /// `Conflict` is surfaced as 400 Bad Request: a taken short name is a
    /// client input problem and the client must pick a different name.
    fn status(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The machine-readable `code` field of the envelope.
    fn code(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "validation_error",
            Self::NotFound { .. } => "not_found",
            Self::Conflict { .. } => "conflict",
            Self::Internal { .. } => "internal_error",
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let code = self.code();

        let (message, details) = match self {
            Self::Validation { message, details }
            | Self::NotFound { message, details }
            | Self::Conflict { message, details }
            | Self::Internal { message, details } => (message, details),
        };

        let body = json!({
            "error": { "code": code, "message": message, "details": details }
        });

        (status, Json(body)).into_response()
    }
}

/// The `links` table carries a single unique constraint (on `short_name`),
/// so any unique violation is a short name collision.
impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error()
            && db.is_unique_violation()
        {
            return AppError::conflict("Short name already in use", json!({}));
        }

        tracing::error!(error = ?e, "Database error");
        AppError::internal("Database error", json!({}))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(&e).unwrap_or_else(|_| json!({}));
        AppError::bad_request("Validation failed", details)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_renders_as_bad_request() {
        let response = AppError::conflict("Short name already in use", json!({})).into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            AppError::bad_request("x", json!({})).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::not_found("x", json!({})).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::internal("x", json!({})).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
