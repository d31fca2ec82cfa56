//! Owner-facing link management handlers.

use axum::Json;
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use serde_json::json;
use uuid::Uuid;

use securelink_service::link::service as link_service;

use crate::dto::request::{CreateLinkRequest, UpdateLinkRequest};
use crate::error::ApiError;
use crate::extractors::{AuthOwner, PaginationParams};
use crate::state::AppState;

/// POST /api/links
pub async fn create_link(
    State(state): State<AppState>,
    owner: AuthOwner,
    Json(payload): Json<CreateLinkRequest>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    let req = link_service::CreateLinkRequest {
        name: payload.name,
        destination_url: payload.destination_url,
        thumbnail_url: payload.thumbnail_url,
        secret: payload.secret,
    };

    let link = state.link_service.create_link(owner.context(), req).await?;

    Ok((
        StatusCode::CREATED,
        Json(json!({
            "success": true,
            "data": link,
        })),
    ))
}

/// GET /api/links
pub async fn list_links(
    State(state): State<AppState>,
    owner: AuthOwner,
    Query(params): Query<PaginationParams>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let page = state
        .link_service
        .list_links(owner.context(), params.into_page_request())
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": page,
    })))
}

/// PUT /api/links/{id}
pub async fn update_link(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<Uuid>,
    Json(payload): Json<UpdateLinkRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let req = link_service::UpdateLinkRequest {
        name: payload.name,
        destination_url: payload.destination_url,
        thumbnail_url: payload.thumbnail_url,
        secret: payload.secret,
    };

    let link = state
        .link_service
        .update_link(owner.context(), id, req)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": link,
    })))
}

/// DELETE /api/links/{id}
pub async fn delete_link(
    State(state): State<AppState>,
    owner: AuthOwner,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, ApiError> {
    state.link_service.delete_link(owner.context(), id).await?;

    Ok(Json(json!({
        "success": true,
        "data": { "id": id },
    })))
}
