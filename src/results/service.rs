use std::sync::Arc;

use crate::{
    app::util::{cancel::CancelToken, time::current_time_in_millis},
    assets::models::asset::Asset,
    backend::service::StyleTransferApi,
    education::{self, models::education_content::EducationState},
    styles::models::style::Style,
    transfer::models::transfer_job::TransferJob,
    AppState,
};

use super::{errors::ResultsApiError, models::result_view::ResultView, store::ResultStore};

pub fn download_filename(style_id: &str, epoch_millis: u128) -> String {
    format!("picoart-{}-{}.jpg", style_id, epoch_millis)
}

/// Mounts the result screen for a finished job. Mounting twice is a no-op.
/// Oriental styles resolve their text right here; everything else starts
/// loading in the background.
pub async fn mount(job: &TransferJob, state: &AppState) -> Option<String> {
    let success = job.success.as_ref()?;
    let artist = success.ai_selected_artist.clone();

    let education = match education::service::static_education(&job.style, artist.as_deref()) {
        Some(content) => EducationState::Ready(content),
        None => EducationState::Loading,
    };

    let view = ResultView::new(
        &job.id,
        job.style.clone(),
        job.original.clone(),
        success.result.clone(),
        artist.clone(),
        education,
    );
    let needs_generation = view.education.is_loading();
    let cancel = view.cancel.clone();

    if state.results.insert_if_absent(view).await {
        tracing::debug!("mounted result {} ({})", job.id, job.style.id);
        if needs_generation {
            spawn_education_task(
                &job.id,
                job.style.clone(),
                artist,
                cancel,
                state.backend.clone(),
                state.results.clone(),
            );
        }
    }

    Some(job.id.to_string())
}

pub fn spawn_education_task(
    id: &str,
    style: Style,
    ai_selected_artist: Option<String>,
    cancel: CancelToken,
    api: Arc<dyn StyleTransferApi>,
    results: Arc<ResultStore>,
) {
    let id = id.to_string();

    tokio::spawn(async move {
        let Some(content) = education::service::resolve_education(
            api.as_ref(),
            &style,
            ai_selected_artist.as_deref(),
            &cancel,
        )
        .await
        else {
            return;
        };

        if !results.set_education(&id, content).await {
            tracing::debug!("education for {} dropped, view is gone", id);
        }
    });
}

pub async fn toggle_info(id: &str, state: &AppState) -> Result<bool, ResultsApiError> {
    state
        .results
        .toggle_info(id)
        .await
        .ok_or(ResultsApiError::ResultNotFound)
}

pub struct Download {
    pub filename: String,
    pub asset: Asset,
}

pub async fn download(id: &str, state: &AppState) -> Result<Download, ResultsApiError> {
    let Some(view) = state.results.get(id).await else {
        return Err(ResultsApiError::ResultNotFound);
    };

    let Some(asset) = state.assets.get(&view.result.id).await else {
        tracing::warn!("result asset {} for {} is gone", view.result.id, id);
        return Err(ResultsApiError::ResultNotFound);
    };

    Ok(Download {
        filename: download_filename(&view.style.id, current_time_in_millis()),
        asset,
    })
}

/// Tears the screen down: pending education is cancelled and the transient
/// images are released.
pub async fn reset(id: &str, state: &AppState) -> bool {
    let view = state.results.remove(id).await;
    let job = state.jobs.remove(id).await;

    if view.is_none() && job.is_none() {
        return false;
    }

    if let Some(view) = view {
        view.cancel.cancel();
        state.assets.remove(&view.original.id).await;
        state.assets.remove(&view.result.id).await;
    }
    if let Some(job) = job {
        job.cancel.cancel();
        state.assets.remove(&job.original.id).await;
        if let Some(success) = &job.success {
            state.assets.remove(&success.result.id).await;
        }
    }

    true
}

#[cfg(test)]
mod tests {
    use std::{sync::Arc, time::Duration};

    use bytes::Bytes;

    use super::*;
    use crate::{
        backend::fake::ScriptedBackend,
        education::models::education_content::EducationContent,
        transfer::{
            errors::TransferError,
            models::transfer_outcome::{TransferOutcome, TransferSuccess},
        },
    };

    async fn finished_job(state: &AppState, style_id: &str, artist: Option<&str>) -> TransferJob {
        let style = state.styles.get(style_id).unwrap().clone();
        let original = state
            .assets
            .insert(mime::IMAGE_JPEG, Bytes::from_static(b"original"))
            .await;
        let result = state
            .assets
            .insert(mime::IMAGE_JPEG, Bytes::from_static(b"result"))
            .await;

        let mut job = TransferJob::new("job-1", style, original);
        job.complete(TransferOutcome::Success(Box::new(TransferSuccess {
            result,
            bytes: Bytes::from_static(b"result"),
            remote_url: Some("https://cdn.test/out.jpg".to_string()),
            model: "m",
            cost: 0.0,
            time: "",
            ai_selected_artist: artist.map(|a| a.to_string()),
            selection_method: None,
            selection_details: None,
            is_mock: false,
        })));
        state.jobs.insert(job.clone()).await;
        job
    }

    async fn wait_for_education(state: &AppState, id: &str) -> EducationState {
        for _ in 0..200 {
            let view = state.results.get(id).await.unwrap();
            if !view.education.is_loading() {
                return view.education;
            }
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
        panic!("education for {} never resolved", id);
    }

    #[test]
    fn filename_matches_download_pattern() {
        assert_eq!(
            download_filename("vangogh", 1_700_000_000_123),
            "picoart-vangogh-1700000000123.jpg"
        );
    }

    #[tokio::test]
    async fn oriental_result_is_ready_on_mount_without_network() {
        let backend = Arc::new(ScriptedBackend::new());
        let state = AppState::for_tests(backend.clone());
        let job = finished_job(&state, "chinese", Some("공필화 화원")).await;

        let id = mount(&job, &state).await.unwrap();
        let view = state.results.get(&id).await.unwrap();

        let EducationState::Ready(EducationContent::Static(text)) = view.education else {
            panic!("expected static text, got {:?}", view.education);
        };
        assert!(text.contains("공필화"));
        assert_eq!(view.subtitle(), "공필화 화원");
        assert_eq!(backend.education_calls(), 0);
    }

    #[tokio::test]
    async fn movement_result_generates_once() {
        let backend = Arc::new(ScriptedBackend::new());
        let state = AppState::for_tests(backend.clone());
        let job = finished_job(&state, "impressionism", Some("클로드 모네")).await;

        let id = mount(&job, &state).await.unwrap();
        mount(&job, &state).await.unwrap();

        let education = wait_for_education(&state, &id).await;
        assert_eq!(
            education,
            EducationState::Ready(EducationContent::Generated("생성된 설명".to_string()))
        );
        assert_eq!(backend.education_calls(), 1);
    }

    #[tokio::test]
    async fn generation_failure_shows_fallback() {
        let backend = Arc::new(
            ScriptedBackend::new()
                .with_education(Err(TransferError::Network("API Error: 500".to_string()))),
        );
        let state = AppState::for_tests(backend);
        let job = finished_job(&state, "baroque", None).await;

        let id = mount(&job, &state).await.unwrap();

        assert_eq!(
            wait_for_education(&state, &id).await,
            EducationState::Ready(EducationContent::Fallback(
                "이 작품은 바로크 스타일로 변환되었습니다.".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn download_names_the_file_after_the_style() {
        let state = AppState::for_tests(Arc::new(ScriptedBackend::new()));
        let job = finished_job(&state, "klimt", None).await;
        let id = mount(&job, &state).await.unwrap();

        let download = download(&id, &state).await.unwrap();

        assert!(download.filename.starts_with("picoart-klimt-"));
        assert!(download.filename.ends_with(".jpg"));
        let millis = &download.filename["picoart-klimt-".len()..download.filename.len() - 4];
        assert!(millis.parse::<u128>().is_ok());
        assert_eq!(download.asset.data, Bytes::from_static(b"result"));
    }

    #[tokio::test]
    async fn reset_releases_everything() {
        let state = AppState::for_tests(Arc::new(ScriptedBackend::new()));
        let job = finished_job(&state, "korean", None).await;
        let id = mount(&job, &state).await.unwrap();
        let view = state.results.get(&id).await.unwrap();

        assert!(reset(&id, &state).await);

        assert!(view.cancel.is_cancelled());
        assert!(state.results.get(&id).await.is_none());
        assert!(state.jobs.get(&id).await.is_none());
        assert_eq!(state.assets.len().await, 0);
        assert!(!reset(&id, &state).await);
        assert!(download(&id, &state).await.is_err());
    }

    #[tokio::test]
    async fn toggle_flips_visibility() {
        let state = AppState::for_tests(Arc::new(ScriptedBackend::new()));
        let job = finished_job(&state, "korean", None).await;
        let id = mount(&job, &state).await.unwrap();

        assert!(!toggle_info(&id, &state).await.unwrap());
        assert!(toggle_info(&id, &state).await.unwrap());
        assert!(toggle_info("missing", &state).await.is_err());
    }
}
