use bytes::Bytes;
use tokio::sync::mpsc;
use uuid::Uuid;

use crate::{
    app::util::multipart::models::image_file_properties::ImageFileProperties,
    styles::models::style::Style,
    transfer::{
        mock::{mock_style_transfer, MOCK_STEP},
        models::{
            transfer_job::TransferJob,
            transfer_outcome::TransferOutcome,
            transfer_progress::{ProgressReceiver, ProgressSender},
        },
    },
    AppState,
};

pub async fn create_transfer(
    photo: ImageFileProperties,
    style: Style,
    state: &AppState,
) -> TransferJob {
    let file = photo.file_properties;
    tracing::info!(
        "transfer requested: {} ({}x{}, {}) as {}",
        file.file_name,
        photo.image_size.width,
        photo.image_size.height,
        file.mime_type,
        style.id
    );

    let original = state.assets.insert(file.mime_type, file.data.clone()).await;
    let job = TransferJob::new(&Uuid::new_v4().to_string(), style, original);

    state.jobs.insert(job.clone()).await;
    spawn_transfer_task(&job, file.data, state.clone());

    job
}

pub fn spawn_transfer_task(job: &TransferJob, photo: Bytes, state: AppState) {
    let job_id = job.id.to_string();
    let style = job.style.clone();
    let cancel = job.cancel.clone();

    tokio::spawn(async move {
        let (tx, mut rx): (ProgressSender, ProgressReceiver) = mpsc::unbounded_channel();

        let jobs = state.jobs.clone();
        let progress_job_id = job_id.to_string();
        let progress_task = tokio::spawn(async move {
            while let Some(event) = rx.recv().await {
                jobs.apply_progress(&progress_job_id, &event).await;
            }
        });

        let outcome = match state.envy.mock_transfer() {
            true => {
                mock_style_transfer(photo, &style, &state.assets, &tx, &cancel, MOCK_STEP).await
            }
            false => {
                state
                    .transfer
                    .process_style_transfer(photo, &style, &tx, &cancel)
                    .await
            }
        };

        drop(tx);
        let _ = progress_task.await;
        tracing::info!("transfer {} finished (success: {})", job_id, outcome.is_success());

        if let Err(outcome) = state.jobs.complete(&job_id, outcome).await {
            tracing::debug!("transfer {} finished after teardown", job_id);
            if let TransferOutcome::Success(success) = outcome {
                state.assets.remove(&success.result.id).await;
            }
        }
    });
}

/// Stops a running transfer and releases what it holds.
pub async fn cancel_transfer(id: &str, state: &AppState) -> bool {
    let Some(job) = state.jobs.remove(id).await else {
        return false;
    };

    job.cancel.cancel();
    state.assets.remove(&job.original.id).await;
    if let Some(success) = &job.success {
        state.assets.remove(&success.result.id).await;
    }

    true
}
