use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Json,
};
use validator::Validate;

use crate::{
    app::{
        models::api_error::ApiError,
        util::multipart::{
            get_form_parts, models::image_file_properties::ImageFileProperties,
        },
    },
    results,
    transfer::models::transfer_job::{JobStatus, TransferJobSnapshot},
    AppState,
};

use super::{dtos::transfer_dto::TransferDto, errors::TransferApiError, service, templates};

pub async fn create_transfer(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Redirect, ApiError> {
    let mut form = get_form_parts(multipart).await?;

    let Some(style_id) = form.field("style_id") else {
        return Err(TransferApiError::StyleMissing.value());
    };
    let dto = TransferDto {
        style_id: style_id.to_string(),
    }
    .sanitized();

    if let Err(e) = dto.validate() {
        return Err(ApiError {
            code: StatusCode::BAD_REQUEST,
            message: e.to_string(),
        });
    }

    let Some(style) = state.styles.get(&dto.style_id).cloned() else {
        return Err(TransferApiError::StyleNotFound.value());
    };

    let Some(photo) = form.take_file("photo") else {
        return Err(TransferApiError::PhotoMissing.value());
    };
    let photo = ImageFileProperties::try_from(photo)?;

    let job = service::create_transfer(photo, style, &state).await;

    Ok(Redirect::to(&format!("/jobs/{}", job.id)))
}

pub async fn get_job_by_id(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    let Some(job) = state.jobs.get(&id).await else {
        return Err(TransferApiError::JobNotFound.value());
    };

    match job.status {
        JobStatus::Pending => Ok(Html(templates::progress_page(&job)).into_response()),
        JobStatus::Succeeded => match results::service::mount(&job, &state).await {
            Some(result_id) => Ok(Redirect::to(&format!("/results/{}", result_id)).into_response()),
            None => Err(TransferApiError::JobNotFound.value()),
        },
        JobStatus::Failed | JobStatus::Timeout => {
            Ok(Html(templates::failure_page(&job)).into_response())
        }
    }
}

pub async fn get_job_progress(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<TransferJobSnapshot>, ApiError> {
    match state.jobs.get(&id).await {
        Some(job) => Ok(Json(job.snapshot())),
        None => Err(TransferApiError::JobNotFound.value()),
    }
}

pub async fn cancel_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Redirect, ApiError> {
    match service::cancel_transfer(&id, &state).await {
        true => Ok(Redirect::to("/")),
        false => Err(TransferApiError::JobNotFound.value()),
    }
}
