//! Handlers for link management endpoints (create, read, update, delete, list).

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
};
use serde_json::json;
use validator::Validate;

use crate::api::dto::link::{CreateLinkRequest, LinkResponse, UpdateLinkRequest};
use crate::api::dto::range::{ListLinksParams, content_range};
use crate::domain::entities::{LinkPatch, NewLink};
use crate::error::AppError;
use crate::state::AppState;

/// Lists links with optional offset pagination.
///
/// # Endpoint
///
/// `GET /api/links?range=[start,end]`
///
/// # Pagination
///
/// `range` is an inclusive `[start,end]` window over the id-ordered listing.
/// When absent or malformed, the full set is returned. The response always
/// carries a `Content-Range: links {start}-{end}/{total}` header; empty pages
/// report `links */{total}`.
pub async fn list_links_handler(
    State(state): State<AppState>,
    Query(params): Query<ListLinksParams>,
) -> Result<impl IntoResponse, AppError> {
    let window = params.window();

    let (links, total) = state.link_service.list_links(window).await?;

    let start = window.map_or(0, |(start, _)| start);
    let descriptor = content_range(start, links.len(), total);

    let items: Vec<LinkResponse> = links
        .into_iter()
        .map(|link| LinkResponse::from_link(link, &state.base_url))
        .collect();

    Ok(([(header::CONTENT_RANGE, descriptor)], Json(items)))
}

/// Creates a new link.
///
/// # Endpoint
///
/// `POST /api/links`
///
/// # Errors
///
/// Returns 400 Bad Request if a field is empty or the short name is already
/// taken.
pub async fn create_link_handler(
    State(state): State<AppState>,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    payload.validate()?;

    let link = state
        .link_service
        .create_link(NewLink {
            original_url: payload.original_url,
            short_name: payload.short_name,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(LinkResponse::from_link(link, &state.base_url)),
    ))
}

/// Fetches a single link by id.
///
/// # Endpoint
///
/// `GET /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has that id.
pub async fn get_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<Json<LinkResponse>, AppError> {
    let link = state.link_service.get_link(id).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Partially updates a link.
///
/// # Endpoint
///
/// `PUT /api/links/{id}`
///
/// # Request Body
///
/// Both fields are optional. Only provided fields are changed.
///
/// ```json
/// {
///   "original_url": "https://new-destination.com",
///   "short_name": "new-name"
/// }
/// ```
///
/// # Errors
///
/// Returns 404 Not Found if no link has that id.
/// Returns 400 Bad Request if validation fails or the new short name belongs
/// to a different link.
pub async fn update_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<LinkResponse>, AppError> {
    payload.validate()?;

    let patch = LinkPatch {
        original_url: payload.original_url,
        short_name: payload.short_name,
    };

    let link = state.link_service.update_link(id, patch).await?;

    Ok(Json(LinkResponse::from_link(link, &state.base_url)))
}

/// Permanently deletes a link.
///
/// # Endpoint
///
/// `DELETE /api/links/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if no link has that id.
pub async fn delete_link_handler(
    Path(id): Path<i64>,
    State(state): State<AppState>,
) -> Result<StatusCode, AppError> {
    let deleted = state.link_service.delete_link(id).await?;

    if !deleted {
        return Err(AppError::not_found("Link not found", json!({ "id": id })));
    }

    Ok(StatusCode::NO_CONTENT)
}
