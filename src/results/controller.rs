use axum::{
    extract::{Path, State},
    http::{header, StatusCode},
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};

use crate::{
    app::models::api_error::ApiError,
    education::models::education_content::EducationSnapshot,
    AppState,
};

use super::{
    errors::ResultsApiError, models::share_payload::SharePayload, service, templates,
};

pub async fn get_result_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let Some(view) = state.results.get(&id).await else {
        return Err(ResultsApiError::ResultNotFound.value());
    };

    let share = SharePayload::for_style(&view.style);

    Ok(Html(templates::result_page(&view, &share)))
}

pub async fn get_education(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<EducationSnapshot>, ApiError> {
    match state.results.get(&id).await {
        Some(view) => Ok(Json(view.education.snapshot())),
        None => Err(ResultsApiError::ResultNotFound.value()),
    }
}

pub async fn toggle_info(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    match service::toggle_info(&id, &state).await {
        Ok(_) => Ok(Redirect::to(&format!("/results/{}", id))),
        Err(e) => Err(e.value()),
    }
}

pub async fn download_result(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match service::download(&id, &state).await {
        Ok(download) => (
            [
                (header::CONTENT_TYPE, download.asset.mime_type.to_string()),
                (
                    header::CONTENT_DISPOSITION,
                    format!("attachment; filename=\"{}\"", download.filename),
                ),
            ],
            download.asset.data,
        )
            .into_response(),
        Err(e) => {
            tracing::warn!("download for {} failed: {:?}", id, e);
            (StatusCode::NOT_FOUND, Html(templates::download_failed_page())).into_response()
        }
    }
}

pub async fn reset_result(State(state): State<AppState>, Path(id): Path<String>) -> Redirect {
    if !service::reset(&id, &state).await {
        tracing::debug!("reset for unknown result {}", id);
    }

    Redirect::to("/")
}
