use bytes::Bytes;
use serde_json::{json, Value};

use crate::{assets::models::asset::AssetHandle, transfer::errors::TransferError};

#[derive(Debug, Clone)]
pub struct TransferSuccess {
    pub result: AssetHandle,
    pub bytes: Bytes,
    pub remote_url: Option<String>,
    pub model: &'static str,
    pub cost: f32,
    pub time: &'static str,
    pub ai_selected_artist: Option<String>,
    pub selection_method: Option<String>,
    pub selection_details: Option<Value>,
    pub is_mock: bool,
}

/// Uniform result of one transfer; failures never escape as faults.
#[derive(Debug, Clone)]
pub enum TransferOutcome {
    Success(Box<TransferSuccess>),
    Failure(TransferError),
}

impl TransferOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success(_))
    }

    pub fn to_json(&self) -> Value {
        match self {
            Self::Success(success) => json!({
                "success": true,
                "resultUrl": success.result.url(),
                "remoteUrl": success.remote_url,
                "model": success.model,
                "cost": success.cost,
                "time": success.time,
                "aiSelectedArtist": success.ai_selected_artist,
                "selectionMethod": success.selection_method,
                "selectionDetails": success.selection_details,
                "isMock": success.is_mock,
            }),
            Self::Failure(error) => json!({
                "success": false,
                "error": error.to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failure_has_uniform_shape() {
        let outcome = TransferOutcome::Failure(TransferError::Timeout);

        assert_eq!(
            outcome.to_json(),
            json!({ "success": false, "error": "Processing timeout" })
        );
    }
}
