use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
};

use crate::{app::models::api_error::ApiError, AppState};

pub async fn get_asset_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    match state.assets.get(&id).await {
        Some(asset) => Ok((
            [
                (header::CONTENT_TYPE, asset.mime_type.to_string()),
                (header::CACHE_CONTROL, "private, max-age=3600".to_string()),
            ],
            asset.data,
        )),
        None => Err(ApiError {
            code: StatusCode::NOT_FOUND,
            message: "Asset not found.".to_string(),
        }),
    }
}
