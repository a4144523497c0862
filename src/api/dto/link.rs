//! DTOs for the link CRUD endpoints.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::Link;
use crate::utils::short_url::build_short_url;

/// Request body for `POST /api/links`.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateLinkRequest {
    /// The redirect target. Any non-empty string is accepted.
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: String,

    /// Client-chosen short name, unique across all live links.
    #[validate(length(min = 1, message = "short_name must not be empty"))]
    pub short_name: String,
}

/// Request body for `PUT /api/links/{id}`.
///
/// Both fields are optional; only provided fields are changed. A field
/// absent from the JSON keeps its stored value.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateLinkRequest {
    #[validate(length(min = 1, message = "original_url must not be empty"))]
    pub original_url: Option<String>,

    #[validate(length(min = 1, message = "short_name must not be empty"))]
    pub short_name: Option<String>,
}

/// JSON representation of a link.
///
/// `short_url` is derived from the configured base address at serialization
/// time and never stored.
#[derive(Debug, Serialize)]
pub struct LinkResponse {
    pub id: i64,
    pub original_url: String,
    pub short_name: String,
    pub short_url: String,
    pub created_at: NaiveDateTime,
}

impl LinkResponse {
    /// Builds the response shape from a stored link.
    pub fn from_link(link: Link, base_url: &str) -> Self {
        let short_url = build_short_url(base_url, &link.short_name);

        Self {
            id: link.id,
            original_url: link.original_url,
            short_name: link.short_name,
            short_url,
            created_at: link.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_from_link_derives_short_url() {
        let link = Link {
            id: 3,
            original_url: "https://google.com".to_string(),
            short_name: "goo".to_string(),
            created_at: Utc::now().naive_utc(),
        };

        let response = LinkResponse::from_link(link, "https://short.io");

        assert_eq!(response.id, 3);
        assert_eq!(response.short_url, "https://short.io/r/goo");
    }

    #[test]
    fn test_create_request_rejects_empty_fields() {
        let request = CreateLinkRequest {
            original_url: String::new(),
            short_name: "goo".to_string(),
        };
        assert!(request.validate().is_err());

        let request = CreateLinkRequest {
            original_url: "https://google.com".to_string(),
            short_name: String::new(),
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_update_request_allows_absent_fields() {
        let request: UpdateLinkRequest = serde_json::from_str("{}").unwrap();
        assert!(request.validate().is_ok());
        assert!(request.original_url.is_none());
        assert!(request.short_name.is_none());
    }

    #[test]
    fn test_update_request_rejects_empty_supplied_field() {
        let request: UpdateLinkRequest = serde_json::from_str(r#"{"short_name": ""}"#).unwrap();
        assert!(request.validate().is_err());
    }
}
