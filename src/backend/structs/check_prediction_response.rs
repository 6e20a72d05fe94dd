use serde::Deserialize;
use serde_json::Value;

use crate::{
    backend::{
        enums::prediction_status::PredictionStatus,
        models::prediction_state::{PredictionOutput, PredictionState},
    },
    transfer::errors::TransferError,
};

#[derive(Debug, Clone, Deserialize)]
pub struct CheckPredictionResponse {
    pub status: Option<String>,
    pub output: Option<Value>,
    pub error: Option<String>,
    pub selected_artist: Option<String>,
    pub selection_method: Option<String>,
    pub selection_details: Option<Value>,
}

impl CheckPredictionResponse {
    pub fn into_state(self) -> Result<PredictionState, TransferError> {
        let Some(status) = self.status else {
            return Err(TransferError::MalformedResponse(
                "Missing prediction status".to_string(),
            ));
        };

        match PredictionStatus::from_wire(&status) {
            PredictionStatus::Pending => Ok(PredictionState::Pending { status }),
            PredictionStatus::Failed => Ok(PredictionState::Failed { error: self.error }),
            PredictionStatus::Succeeded => {
                let Some(output_url) = first_output_url(self.output.as_ref()) else {
                    return Err(TransferError::MalformedResponse("No result image".to_string()));
                };

                Ok(PredictionState::Succeeded(PredictionOutput {
                    output_url,
                    selected_artist: self.selected_artist,
                    selection_method: self.selection_method,
                    selection_details: self.selection_details,
                }))
            }
        }
    }
}

/// `output` is either a single url or a list of urls; the first one wins.
fn first_output_url(output: Option<&Value>) -> Option<String> {
    let url = match output? {
        Value::String(url) => url.as_str(),
        Value::Array(urls) => urls.first()?.as_str()?,
        _ => return None,
    };

    match url.is_empty() {
        true => None,
        false => Some(url.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn parse(value: Value) -> Result<PredictionState, TransferError> {
        serde_json::from_value::<CheckPredictionResponse>(value)
            .unwrap()
            .into_state()
    }

    #[test]
    fn succeeded_with_array_output_uses_first_url() {
        let state = parse(json!({
            "status": "succeeded",
            "output": ["https://cdn.test/a.jpg", "https://cdn.test/b.jpg"],
            "selected_artist": "Claude Monet",
            "selection_method": "ai",
            "selection_details": { "reason": "water" }
        }))
        .unwrap();

        let PredictionState::Succeeded(output) = state else {
            panic!("expected succeeded, got {:?}", state);
        };
        assert_eq!(output.output_url, "https://cdn.test/a.jpg");
        assert_eq!(output.selected_artist.as_deref(), Some("Claude Monet"));
        assert_eq!(output.selection_method.as_deref(), Some("ai"));
        assert_eq!(output.selection_details, Some(json!({ "reason": "water" })));
    }

    #[test]
    fn succeeded_with_string_output() {
        let state = parse(json!({ "status": "succeeded", "output": "https://cdn.test/a.jpg" }))
            .unwrap();

        assert!(matches!(state, PredictionState::Succeeded(o) if o.output_url == "https://cdn.test/a.jpg"));
    }

    #[test]
    fn succeeded_without_output_is_malformed() {
        for output in [Value::Null, json!([]), json!(""), json!(42)] {
            let err = parse(json!({ "status": "succeeded", "output": output })).unwrap_err();
            assert_eq!(err, TransferError::MalformedResponse("No result image".to_string()));
        }
    }

    #[test]
    fn missing_status_is_malformed() {
        let err = parse(json!({ "output": "x" })).unwrap_err();
        assert!(matches!(err, TransferError::MalformedResponse(_)));
    }

    #[test]
    fn processing_is_pending() {
        let state = parse(json!({ "status": "processing" })).unwrap();
        assert_eq!(
            state,
            PredictionState::Pending {
                status: "processing".to_string()
            }
        );
    }

    #[test]
    fn failed_keeps_backend_error() {
        let state = parse(json!({ "status": "failed", "error": "NSFW" })).unwrap();
        assert_eq!(
            state,
            PredictionState::Failed {
                error: Some("NSFW".to_string())
            }
        );
    }
}
