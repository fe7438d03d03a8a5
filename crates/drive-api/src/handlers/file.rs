//! File record handlers.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;

use drive_entity::File;

use crate::dto::request::CreateFileRequest;
use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::extractors::{AuthUser, ValidatedJson};
use crate::state::AppState;

/// POST /api/files
///
/// Records a file that has already been uploaded to the object store.
pub async fn create_file(
    State(state): State<AppState>,
    auth: AuthUser,
    ValidatedJson(req): ValidatedJson<CreateFileRequest>,
) -> Result<(StatusCode, Json<ApiResponse<File>>), ApiError> {
    let file = state
        .mutations
        .create_file(req.into(), &auth.user_id)
        .await?;

    Ok((StatusCode::CREATED, Json(ApiResponse::ok(file))))
}
