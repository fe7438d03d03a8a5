//! Per-user drive handlers: onboarding and the root folder.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use drive_core::error::AppError;
use drive_entity::Folder;

use crate::dto::response::{ApiResponse, OnboardResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/onboard
pub async fn onboard(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<(StatusCode, Json<ApiResponse<OnboardResponse>>), ApiError> {
    let root_folder_id = state.mutations.onboard_user(&auth.user_id).await?;
    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::ok(OnboardResponse { root_folder_id })),
    ))
}

/// GET /api/drive
pub async fn get_root(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<Folder>>, ApiError> {
    let root = state
        .queries
        .get_root_folder_for_user(&auth.user_id)
        .await?
        .ok_or_else(|| AppError::not_found("Root folder not found"))?;
    Ok(Json(ApiResponse::ok(root)))
}
