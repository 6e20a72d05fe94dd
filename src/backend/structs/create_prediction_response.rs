use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct CreatePredictionResponse {
    pub id: String,
    pub status: Option<String>,
}
