use std::{sync::Arc, time::Duration};

use bytes::Bytes;
use tokio::time::sleep;

use crate::{
    app::{
        config::{DEFAULT_MAX_POLL_ATTEMPTS, DEFAULT_POLL_INTERVAL_MS},
        util::cancel::CancelToken,
    },
    assets::{models::asset::sniff_mime, store::AssetStore},
    backend::{
        models::{
            input_spec::{AiSelectionInputSpec, FluxTransferInput, TemplateInputSpec},
            prediction_state::{PredictionOutput, PredictionState},
        },
        service::StyleTransferApi,
    },
    styles::{models::style::Style, service::model_config_for_style},
    transfer::{
        errors::TransferError,
        models::{
            transfer_outcome::{TransferOutcome, TransferSuccess},
            transfer_progress::{report, ProgressSender, TransferProgress},
        },
        photo::{resize_photo, to_data_url},
    },
};

/// Runs one photo through the backend: resize, encode, submit, poll, fetch.
pub struct TransferClient {
    api: Arc<dyn StyleTransferApi>,
    assets: Arc<AssetStore>,
    poll_interval: Duration,
    max_attempts: u32,
}

impl TransferClient {
    pub fn new(api: Arc<dyn StyleTransferApi>, assets: Arc<AssetStore>) -> Self {
        Self {
            api,
            assets,
            poll_interval: Duration::from_millis(DEFAULT_POLL_INTERVAL_MS),
            max_attempts: DEFAULT_MAX_POLL_ATTEMPTS,
        }
    }

    pub fn with_polling(mut self, poll_interval: Duration, max_attempts: u32) -> Self {
        self.poll_interval = poll_interval;
        self.max_attempts = max_attempts;
        self
    }

    pub async fn process_style_transfer(
        &self,
        photo: Bytes,
        style: &Style,
        progress: &ProgressSender,
        cancel: &CancelToken,
    ) -> TransferOutcome {
        match self.run(photo, style, progress, cancel).await {
            Ok(success) => TransferOutcome::Success(Box::new(success)),
            Err(e) => {
                tracing::error!("style transfer for {} failed: {}", style.id, e);
                TransferOutcome::Failure(e)
            }
        }
    }

    /// Older entry point, kept for callers that still use it.
    pub async fn apply_style_transfer(
        &self,
        photo: Bytes,
        style: &Style,
        progress: &ProgressSender,
        cancel: &CancelToken,
    ) -> TransferOutcome {
        self.process_style_transfer(photo, style, progress, cancel)
            .await
    }

    async fn run(
        &self,
        photo: Bytes,
        style: &Style,
        progress: &ProgressSender,
        cancel: &CancelToken,
    ) -> Result<TransferSuccess, TransferError> {
        let jpeg = tokio::task::spawn_blocking(move || resize_photo(&photo))
            .await
            .map_err(|e| TransferError::Image(e.to_string()))??;
        let image = to_data_url(&jpeg);

        let model_config = model_config_for_style(style);
        report(
            progress,
            TransferProgress::PreparingModel {
                label: model_config.label.to_string(),
            },
        );

        let input = match model_config.is_flux() {
            true => FluxTransferInput::Template(TemplateInputSpec::depth(image, &style.prompt)),
            false => FluxTransferInput::AiSelection(AiSelectionInputSpec {
                image,
                selected_style: style.clone(),
            }),
        };

        ensure_active(cancel)?;
        report(
            progress,
            TransferProgress::Submitting {
                ai_selection: input.is_ai_selection(),
            },
        );
        let prediction = self.api.create_prediction(&input).await?;
        tracing::debug!(
            "prediction {} created for {} ({:?})",
            prediction.id,
            style.id,
            prediction.status
        );
        report(
            progress,
            TransferProgress::Submitted {
                prediction_id: prediction.id.to_string(),
            },
        );

        let output = self.poll_prediction(&prediction.id, progress, cancel).await?;

        ensure_active(cancel)?;
        report(progress, TransferProgress::Downloading);
        let bytes = self.api.fetch_asset(&output.output_url).await?;

        ensure_active(cancel)?;
        let result = self.assets.insert(sniff_mime(&bytes), bytes.clone()).await;

        Ok(TransferSuccess {
            result,
            bytes,
            remote_url: Some(output.output_url),
            model: model_config.model,
            cost: model_config.cost,
            time: model_config.time,
            ai_selected_artist: output.selected_artist,
            selection_method: output.selection_method,
            selection_details: output.selection_details,
            is_mock: false,
        })
    }

    /// Checks the prediction every `poll_interval` until it is terminal or
    /// `max_attempts` checks were made.
    pub async fn poll_prediction(
        &self,
        id: &str,
        progress: &ProgressSender,
        cancel: &CancelToken,
    ) -> Result<PredictionOutput, TransferError> {
        let mut attempts: u32 = 0;

        while attempts < self.max_attempts {
            tokio::select! {
                _ = sleep(self.poll_interval) => {}
                _ = cancel.cancelled() => return Err(TransferError::Cancelled),
            }
            attempts += 1;

            ensure_active(cancel)?;
            tracing::debug!("checking prediction {} (attempt {})", id, attempts);

            match self.api.check_prediction(id).await? {
                PredictionState::Succeeded(output) => return Ok(output),
                PredictionState::Failed { error } => {
                    tracing::warn!("prediction {} failed: {:?}", id, error);
                    return Err(TransferError::ProcessingFailed);
                }
                PredictionState::Pending { status } => {
                    tracing::debug!("prediction {} is {}", id, status);
                    report(progress, TransferProgress::converting(attempts));
                }
            }
        }

        tracing::error!("prediction {} ran out of time after {} checks", id, attempts);
        Err(TransferError::Timeout)
    }
}

fn ensure_active(cancel: &CancelToken) -> Result<(), TransferError> {
    match cancel.is_cancelled() {
        true => Err(TransferError::Cancelled),
        false => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use tokio::sync::mpsc;

    use super::*;
    use crate::{
        backend::fake::{pending, ScriptedBackend},
        styles::{enums::style_category::StyleCategory, service::tests::style},
        transfer::{models::transfer_progress::ProgressReceiver, photo::tests::png_bytes},
    };

    fn succeeded() -> Result<PredictionState, TransferError> {
        Ok(PredictionState::Succeeded(PredictionOutput {
            output_url: "https://cdn.test/out.jpg".to_string(),
            selected_artist: Some("클로드 모네".to_string()),
            selection_method: Some("ai".to_string()),
            selection_details: None,
        }))
    }

    fn client(backend: Arc<ScriptedBackend>, assets: Arc<AssetStore>) -> TransferClient {
        TransferClient::new(backend, assets).with_polling(Duration::ZERO, 90)
    }

    fn drain(rx: &mut ProgressReceiver) -> Vec<TransferProgress> {
        let mut events = Vec::new();
        while let Ok(event) = rx.try_recv() {
            events.push(event);
        }
        events
    }

    #[tokio::test]
    async fn succeeds_after_k_plus_one_checks() {
        for k in [0usize, 1, 5, 89] {
            let backend = Arc::new(
                ScriptedBackend::new()
                    .with_statuses(std::iter::repeat_with(pending).take(k).chain([succeeded()])),
            );
            let client = client(backend.clone(), Arc::new(AssetStore::new()));
            let (tx, _rx) = mpsc::unbounded_channel();

            let output = client
                .poll_prediction("pred-1", &tx, &CancelToken::new())
                .await
                .unwrap();

            assert_eq!(output.output_url, "https://cdn.test/out.jpg");
            assert_eq!(backend.check_calls(), k as u32 + 1);
        }
    }

    #[tokio::test]
    async fn all_pending_times_out_without_a_91st_check() {
        let backend = Arc::new(ScriptedBackend::new());
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, mut rx) = mpsc::unbounded_channel();

        let err = client
            .poll_prediction("pred-1", &tx, &CancelToken::new())
            .await
            .unwrap_err();

        assert_eq!(err, TransferError::Timeout);
        assert_eq!(backend.check_calls(), 90);

        let events = drain(&mut rx);
        assert_eq!(events.len(), 90);
        assert_eq!(events.last(), Some(&TransferProgress::Converting { percent: 95 }));
    }

    #[tokio::test]
    async fn failed_status_stops_polling_immediately() {
        let backend = Arc::new(ScriptedBackend::new().with_statuses([
            pending(),
            pending(),
            Ok(PredictionState::Failed { error: None }),
            succeeded(),
        ]));
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();

        let err = client
            .poll_prediction("pred-1", &tx, &CancelToken::new())
            .await
            .unwrap_err();

        assert_eq!(err, TransferError::ProcessingFailed);
        assert_eq!(backend.check_calls(), 3);
    }

    #[tokio::test]
    async fn check_errors_are_not_retried() {
        let backend = Arc::new(ScriptedBackend::new().with_statuses([
            pending(),
            Err(TransferError::Network("Failed to check status".to_string())),
        ]));
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();

        let err = client
            .poll_prediction("pred-1", &tx, &CancelToken::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "Failed to check status");
        assert_eq!(backend.check_calls(), 2);
    }

    #[tokio::test]
    async fn full_transfer_stores_result_locally() {
        let backend = Arc::new(ScriptedBackend::new().with_statuses([pending(), succeeded()]));
        let assets = Arc::new(AssetStore::new());
        let client = client(backend.clone(), assets.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let style = style("impressionism", "인상주의", StyleCategory::Impressionism);

        let outcome = client
            .process_style_transfer(
                Bytes::from(png_bytes(2000, 1000)),
                &style,
                &tx,
                &CancelToken::new(),
            )
            .await;

        let TransferOutcome::Success(success) = outcome else {
            panic!("expected success, got {:?}", outcome);
        };
        assert_eq!(success.remote_url.as_deref(), Some("https://cdn.test/out.jpg"));
        assert_eq!(success.ai_selected_artist.as_deref(), Some("클로드 모네"));
        assert_eq!(success.model, "picoart/artist-selection-sdxl");
        assert_eq!(
            assets.get(&success.result.id).await.unwrap().data,
            Bytes::from_static(b"result-bytes")
        );
        assert_eq!(
            backend.fetched.lock().unwrap().as_slice(),
            ["https://cdn.test/out.jpg".to_string()]
        );

        let submitted = backend.submitted.lock().unwrap();
        let FluxTransferInput::AiSelection(input) = &submitted[0] else {
            panic!("expected the AI selection shape");
        };
        assert!(input.image.starts_with("data:image/jpeg;base64,"));
        assert_eq!(input.selected_style, style);

        let messages: Vec<String> = drain(&mut rx).iter().map(|e| e.to_string()).collect();
        assert_eq!(
            messages,
            [
                "AI 화가 선택 모델 준비 중...",
                "AI 자동 화가 선택 시작...",
                "변환 요청이 접수되었습니다...",
                "변환 중... 11%",
                "이미지 다운로드 중...",
            ]
        );
    }

    #[tokio::test]
    async fn flux_styles_submit_the_template_shape() {
        let backend = Arc::new(ScriptedBackend::new().with_statuses([succeeded()]));
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let mut style = style("vangogh", "빈센트 반 고흐", StyleCategory::Masters);
        style.model = Some("FLUX".to_string());

        let outcome = client
            .process_style_transfer(Bytes::from(png_bytes(10, 10)), &style, &tx, &CancelToken::new())
            .await;
        assert!(outcome.is_success());

        let submitted = backend.submitted.lock().unwrap();
        let FluxTransferInput::Template(input) = &submitted[0] else {
            panic!("expected the template shape");
        };
        assert_eq!(input.prompt, style.prompt);
        assert_eq!(input.control_type, "depth");
        assert_eq!(input.num_inference_steps, 28);
    }

    #[tokio::test]
    async fn submit_errors_become_uniform_failures() {
        let backend = Arc::new(
            ScriptedBackend::new()
                .with_create(Err(TransferError::Network("FLUX API error: 502".to_string()))),
        );
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let style = style("baroque", "바로크", StyleCategory::Baroque);

        let outcome = client
            .process_style_transfer(Bytes::from(png_bytes(10, 10)), &style, &tx, &CancelToken::new())
            .await;

        assert_eq!(
            outcome.to_json(),
            serde_json::json!({ "success": false, "error": "FLUX API error: 502" })
        );
        assert_eq!(backend.check_calls(), 0);
    }

    #[tokio::test]
    async fn failed_result_download_keeps_nothing() {
        let backend = Arc::new(
            ScriptedBackend::new()
                .with_statuses([succeeded()])
                .with_asset(Err(TransferError::Network("No result image".to_string()))),
        );
        let assets = Arc::new(AssetStore::new());
        let client = client(backend.clone(), assets.clone());
        let (tx, mut rx) = mpsc::unbounded_channel();
        let style = style("baroque", "바로크", StyleCategory::Baroque);

        let outcome = client
            .process_style_transfer(Bytes::from(png_bytes(10, 10)), &style, &tx, &CancelToken::new())
            .await;

        assert_eq!(
            outcome.to_json(),
            serde_json::json!({ "success": false, "error": "No result image" })
        );
        assert_eq!(assets.len().await, 0);
        assert_eq!(
            backend.fetched.lock().unwrap().as_slice(),
            ["https://cdn.test/out.jpg".to_string()]
        );
        let last = drain(&mut rx).pop().map(|e| e.to_string());
        assert_eq!(last.as_deref(), Some("이미지 다운로드 중..."));
    }

    #[tokio::test]
    async fn unreadable_photo_fails_before_any_network_call() {
        let backend = Arc::new(ScriptedBackend::new());
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let style = style("baroque", "바로크", StyleCategory::Baroque);

        let outcome = client
            .process_style_transfer(Bytes::from_static(b"nope"), &style, &tx, &CancelToken::new())
            .await;

        assert!(matches!(outcome, TransferOutcome::Failure(TransferError::Image(_))));
        assert!(backend.submitted.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn cancelled_transfer_makes_no_calls() {
        let backend = Arc::new(ScriptedBackend::new());
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let cancel = CancelToken::new();
        cancel.cancel();
        let style = style("baroque", "바로크", StyleCategory::Baroque);

        let outcome = client
            .process_style_transfer(Bytes::from(png_bytes(10, 10)), &style, &tx, &cancel)
            .await;

        assert!(matches!(outcome, TransferOutcome::Failure(TransferError::Cancelled)));
        assert!(backend.submitted.lock().unwrap().is_empty());
        assert_eq!(backend.check_calls(), 0);
    }

    #[tokio::test]
    async fn cancel_interrupts_the_poll_delay() {
        let backend = Arc::new(ScriptedBackend::new());
        let client = TransferClient::new(backend.clone(), Arc::new(AssetStore::new()))
            .with_polling(Duration::from_secs(3600), 90);
        let (tx, _rx) = mpsc::unbounded_channel();
        let cancel = CancelToken::new();

        let canceller = cancel.clone();
        tokio::spawn(async move { canceller.cancel() });

        let err = tokio::time::timeout(
            Duration::from_secs(5),
            client.poll_prediction("pred-1", &tx, &cancel),
        )
        .await
        .expect("poll loop ignored cancellation")
        .unwrap_err();

        assert_eq!(err, TransferError::Cancelled);
        assert_eq!(backend.check_calls(), 0);
    }

    #[tokio::test]
    async fn alias_entry_point_behaves_the_same() {
        let backend = Arc::new(ScriptedBackend::new().with_statuses([succeeded()]));
        let client = client(backend.clone(), Arc::new(AssetStore::new()));
        let (tx, _rx) = mpsc::unbounded_channel();
        let style = style("rococo", "로코코", StyleCategory::Rococo);

        let outcome = client
            .apply_style_transfer(Bytes::from(png_bytes(10, 10)), &style, &tx, &CancelToken::new())
            .await;

        assert!(outcome.is_success());
        assert_eq!(backend.check_calls(), 1);
    }
}
