//! The folder page.

use axum::Json;
use axum::extract::{Path, State};

use drive_entity::FolderView;

use crate::dto::response::ApiResponse;
use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/f/{folder_id}
pub async fn open_folder(
    State(state): State<AppState>,
    Path(raw): Path<String>,
) -> Result<Json<ApiResponse<FolderView>>, ApiError> {
    let view = state.browse.open_folder_raw(&raw).await?;
    Ok(Json(ApiResponse::ok(view)))
}
