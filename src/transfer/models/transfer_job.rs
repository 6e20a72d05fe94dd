use serde::Serialize;

use crate::{
    app::util::{cancel::CancelToken, time::current_time_in_secs},
    assets::models::asset::AssetHandle,
    styles::models::style::Style,
    transfer::{
        errors::TransferError,
        models::{
            transfer_outcome::{TransferOutcome, TransferSuccess},
            transfer_progress::TransferProgress,
        },
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum JobStatus {
    Pending,
    Succeeded,
    Failed,
    Timeout,
}

impl JobStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}

#[derive(Debug, Clone)]
pub struct TransferJob {
    pub id: String,
    pub prediction_id: Option<String>,
    pub status: JobStatus,
    pub output_url: Option<String>,
    pub selected_artist: Option<String>,
    pub selection_method: Option<String>,

    pub style: Style,
    pub original: AssetHandle,
    pub message: String,
    pub error: Option<String>,
    pub success: Option<Box<TransferSuccess>>,
    pub cancel: CancelToken,
    pub updated_at: u64,
}

impl TransferJob {
    pub fn new(id: &str, style: Style, original: AssetHandle) -> Self {
        Self {
            id: id.to_string(),
            prediction_id: None,
            status: JobStatus::Pending,
            output_url: None,
            selected_artist: None,
            selection_method: None,
            style,
            original,
            message: "변환을 준비하고 있습니다...".to_string(),
            error: None,
            success: None,
            cancel: CancelToken::new(),
            updated_at: current_time_in_secs(),
        }
    }

    /// Terminal jobs ignore late progress.
    pub fn apply_progress(&mut self, event: &TransferProgress) {
        if self.status.is_terminal() {
            return;
        }

        if let TransferProgress::Submitted { prediction_id } = event {
            self.prediction_id = Some(prediction_id.to_string());
        }
        self.message = event.to_string();
        self.updated_at = current_time_in_secs();
    }

    /// Moves the job into its terminal state. Returns false if it already was terminal.
    pub fn complete(&mut self, outcome: TransferOutcome) -> bool {
        if self.status.is_terminal() {
            return false;
        }

        match outcome {
            TransferOutcome::Success(success) => {
                self.status = JobStatus::Succeeded;
                self.output_url = success.remote_url.clone();
                self.selected_artist = success.ai_selected_artist.clone();
                self.selection_method = success.selection_method.clone();
                self.message = "완성!".to_string();
                self.success = Some(success);
            }
            TransferOutcome::Failure(error) => {
                self.status = match error {
                    TransferError::Timeout => JobStatus::Timeout,
                    _ => JobStatus::Failed,
                };
                self.message = error.to_string();
                self.error = Some(error.to_string());
            }
        }
        self.updated_at = current_time_in_secs();

        true
    }

    pub fn snapshot(&self) -> TransferJobSnapshot {
        TransferJobSnapshot {
            id: self.id.to_string(),
            status: self.status,
            message: self.message.to_string(),
            prediction_id: self.prediction_id.clone(),
            output_url: self.output_url.clone(),
            selected_artist: self.selected_artist.clone(),
            selection_method: self.selection_method.clone(),
            error: self.error.clone(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TransferJobSnapshot {
    pub id: String,
    pub status: JobStatus,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prediction_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selected_artist: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub selection_method: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
