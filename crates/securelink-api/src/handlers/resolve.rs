//! Public resolution handlers. No authentication: possession of the token
//! is the capability.

use axum::Json;
use axum::extract::{Path, State};
use serde_json::json;

use crate::dto::request::VerifySecretRequest;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/l/{token}
pub async fn resolve_link(
    State(state): State<AppState>,
    Path(token): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let resolution = state.resolve_service.resolve(&token).await?;

    Ok(Json(json!({
        "success": true,
        "data": resolution,
    })))
}

/// POST /api/l/{token}/verify
///
/// A wrong secret is a 200 with `ok: false`; only unknown tokens error.
pub async fn verify_secret(
    State(state): State<AppState>,
    Path(token): Path<String>,
    Json(payload): Json<VerifySecretRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let check = state
        .resolve_service
        .check_secret(&token, &payload.secret)
        .await?;

    Ok(Json(json!({
        "success": true,
        "data": check,
    })))
}
