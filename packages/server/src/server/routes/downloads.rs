use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    Json,
};
use serde_json::{json, Value};

use crate::common::ResourceId;
use crate::domains::resources::actions::track_download;
use crate::server::app::AppState;
use crate::server::error::AppError;

use super::newsletter::INVALID_METHOD_MESSAGE;

pub const RESOURCE_NOT_FOUND_MESSAGE: &str = "Resource not found";

fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "success": false,
            "error": RESOURCE_NOT_FOUND_MESSAGE,
        })),
    )
}

/// POST /api/track-download/:id/
pub async fn track_download_handler(
    Extension(state): Extension<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<Value>), AppError> {
    let Ok(resource_id) = ResourceId::parse(&id) else {
        return Ok(not_found());
    };

    match track_download(resource_id, &state.deps).await? {
        Some(download_count) => Ok((
            StatusCode::OK,
            Json(json!({
                "success": true,
                "download_count": download_count,
            })),
        )),
        None => Ok(not_found()),
    }
}

/// GET /api/track-download/:id/
pub async fn track_download_get() -> (StatusCode, Json<Value>) {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "success": false,
            "error": INVALID_METHOD_MESSAGE,
        })),
    )
}
