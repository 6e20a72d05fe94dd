use serde_json::Value;

/// A poll response after validation at the backend boundary.
#[derive(Debug, Clone, PartialEq)]
pub enum PredictionState {
    Pending { status: String },
    Succeeded(PredictionOutput),
    Failed { error: Option<String> },
}

#[derive(Debug, Clone, PartialEq)]
pub struct PredictionOutput {
    pub output_url: String,
    pub selected_artist: Option<String>,
    pub selection_method: Option<String>,
    pub selection_details: Option<Value>,
}
