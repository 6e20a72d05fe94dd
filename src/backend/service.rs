use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use crate::{
    app::util,
    backend::{
        config::{CHECK_PREDICTION_PATH, FLUX_TRANSFER_PATH, GENERATE_EDUCATION_PATH},
        models::{
            input_spec::{FluxTransferInput, GenerateEducationInput},
            prediction_state::PredictionState,
        },
        structs::{
            check_prediction_response::CheckPredictionResponse,
            create_prediction_response::CreatePredictionResponse,
            generate_education_response::GenerateEducationResponse,
        },
    },
    transfer::errors::TransferError,
};

/// The backend endpoints the app consumes.
#[async_trait]
pub trait StyleTransferApi: Send + Sync {
    async fn create_prediction(
        &self,
        input: &FluxTransferInput,
    ) -> Result<CreatePredictionResponse, TransferError>;

    async fn check_prediction(&self, id: &str) -> Result<PredictionState, TransferError>;

    async fn fetch_asset(&self, url: &str) -> Result<Bytes, TransferError>;

    async fn generate_education(
        &self,
        prompt: &str,
    ) -> Result<GenerateEducationResponse, TransferError>;
}

#[derive(Debug, Clone)]
pub struct BackendClient {
    base_url: String,
    client: Client,
}

impl BackendClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Result urls may be absolute (cdn) or relative to the backend.
    fn resolve(&self, url: &str) -> String {
        match url.starts_with('/') {
            true => self.url(url),
            false => url.to_string(),
        }
    }
}

#[async_trait]
impl StyleTransferApi for BackendClient {
    async fn create_prediction(
        &self,
        input: &FluxTransferInput,
    ) -> Result<CreatePredictionResponse, TransferError> {
        let result = self
            .client
            .post(self.url(FLUX_TRANSFER_PATH))
            .json(input)
            .send()
            .await;

        match result {
            Ok(res) if !res.status().is_success() => {
                tracing::warn!("create_prediction (1): {}", res.status());
                Err(TransferError::Network(format!(
                    "FLUX API error: {}",
                    res.status().as_u16()
                )))
            }
            Ok(res) => match res.text().await {
                Ok(text) => match serde_json::from_str(&text) {
                    Ok(create_prediction_response) => Ok(create_prediction_response),
                    Err(_) => {
                        tracing::warn!("create_prediction (2): {:?}", text);
                        Err(TransferError::MalformedResponse(
                            "Missing prediction id".to_string(),
                        ))
                    }
                },
                Err(e) => {
                    tracing::warn!("create_prediction (3): {:?}", e);
                    Err(TransferError::Network(e.to_string()))
                }
            },
            Err(e) => {
                tracing::warn!("create_prediction (4): {:?}", e);
                Err(TransferError::Network(e.to_string()))
            }
        }
    }

    async fn check_prediction(&self, id: &str) -> Result<PredictionState, TransferError> {
        let result = self
            .client
            .get(self.url(CHECK_PREDICTION_PATH))
            .query(&[("id", id)])
            .send()
            .await;

        match result {
            Ok(res) if !res.status().is_success() => {
                tracing::warn!("check_prediction (1): {} for {}", res.status(), id);
                Err(TransferError::Network("Failed to check status".to_string()))
            }
            Ok(res) => match res.text().await {
                Ok(text) => match serde_json::from_str::<CheckPredictionResponse>(&text) {
                    Ok(check_prediction_response) => check_prediction_response.into_state(),
                    Err(_) => {
                        tracing::warn!("check_prediction (2): {:?}", text);
                        Err(TransferError::MalformedResponse(
                            "Unreadable prediction status".to_string(),
                        ))
                    }
                },
                Err(e) => {
                    tracing::warn!("check_prediction (3): {:?}", e);
                    Err(TransferError::Network("Failed to check status".to_string()))
                }
            },
            Err(e) => {
                tracing::warn!("check_prediction (4): {:?}", e);
                Err(TransferError::Network("Failed to check status".to_string()))
            }
        }
    }

    async fn fetch_asset(&self, url: &str) -> Result<Bytes, TransferError> {
        util::reqwest::get_bytes(&self.client, &self.resolve(url)).await
    }

    async fn generate_education(
        &self,
        prompt: &str,
    ) -> Result<GenerateEducationResponse, TransferError> {
        let input = GenerateEducationInput {
            prompt: prompt.to_string(),
        };

        let result = self
            .client
            .post(self.url(GENERATE_EDUCATION_PATH))
            .json(&input)
            .send()
            .await;

        match result {
            Ok(res) if !res.status().is_success() => {
                tracing::warn!("generate_education (1): {}", res.status());
                Err(TransferError::Network(format!(
                    "API Error: {}",
                    res.status().as_u16()
                )))
            }
            Ok(res) => match res.json::<GenerateEducationResponse>().await {
                Ok(generate_education_response) => Ok(generate_education_response),
                Err(e) => {
                    tracing::warn!("generate_education (2): {:?}", e);
                    Err(TransferError::MalformedResponse(
                        "Invalid response format".to_string(),
                    ))
                }
            },
            Err(e) => {
                tracing::warn!("generate_education (3): {:?}", e);
                Err(TransferError::Network(e.to_string()))
            }
        }
    }
}
