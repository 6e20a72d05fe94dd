use std::{
    collections::VecDeque,
    sync::{
        atomic::{AtomicU32, Ordering},
        Mutex,
    },
};

use async_trait::async_trait;
use bytes::Bytes;

use crate::{
    backend::{
        models::{input_spec::FluxTransferInput, prediction_state::PredictionState},
        service::StyleTransferApi,
        structs::{
            create_prediction_response::CreatePredictionResponse,
            generate_education_response::GenerateEducationResponse,
        },
    },
    transfer::errors::TransferError,
};

/// In-memory backend with scripted answers. Once the scripted statuses run
/// out every check answers `pending`.
pub struct ScriptedBackend {
    create: Mutex<Result<CreatePredictionResponse, TransferError>>,
    statuses: Mutex<VecDeque<Result<PredictionState, TransferError>>>,
    asset: Mutex<Result<Bytes, TransferError>>,
    education: Mutex<Result<GenerateEducationResponse, TransferError>>,

    pub submitted: Mutex<Vec<FluxTransferInput>>,
    pub fetched: Mutex<Vec<String>>,
    pub prompts: Mutex<Vec<String>>,
    check_calls: AtomicU32,
}

impl ScriptedBackend {
    pub fn new() -> Self {
        Self {
            create: Mutex::new(Ok(CreatePredictionResponse {
                id: "pred-1".to_string(),
                status: Some("starting".to_string()),
            })),
            statuses: Mutex::new(VecDeque::new()),
            asset: Mutex::new(Ok(Bytes::from_static(b"result-bytes"))),
            education: Mutex::new(Ok(GenerateEducationResponse {
                success: true,
                text: Some("생성된 설명".to_string()),
            })),
            submitted: Mutex::new(Vec::new()),
            fetched: Mutex::new(Vec::new()),
            prompts: Mutex::new(Vec::new()),
            check_calls: AtomicU32::new(0),
        }
    }

    pub fn with_create(self, create: Result<CreatePredictionResponse, TransferError>) -> Self {
        *self.create.lock().unwrap() = create;
        self
    }

    pub fn with_statuses(
        self,
        statuses: impl IntoIterator<Item = Result<PredictionState, TransferError>>,
    ) -> Self {
        self.statuses.lock().unwrap().extend(statuses);
        self
    }

    pub fn with_asset(self, asset: Result<Bytes, TransferError>) -> Self {
        *self.asset.lock().unwrap() = asset;
        self
    }

    pub fn with_education(
        self,
        education: Result<GenerateEducationResponse, TransferError>,
    ) -> Self {
        *self.education.lock().unwrap() = education;
        self
    }

    pub fn check_calls(&self) -> u32 {
        self.check_calls.load(Ordering::SeqCst)
    }

    pub fn education_calls(&self) -> usize {
        self.prompts.lock().unwrap().len()
    }
}

pub fn pending() -> Result<PredictionState, TransferError> {
    Ok(PredictionState::Pending {
        status: "processing".to_string(),
    })
}

#[async_trait]
impl StyleTransferApi for ScriptedBackend {
    async fn create_prediction(
        &self,
        input: &FluxTransferInput,
    ) -> Result<CreatePredictionResponse, TransferError> {
        self.submitted.lock().unwrap().push(input.clone());
        self.create.lock().unwrap().clone()
    }

    async fn check_prediction(&self, _id: &str) -> Result<PredictionState, TransferError> {
        self.check_calls.fetch_add(1, Ordering::SeqCst);
        self.statuses.lock().unwrap().pop_front().unwrap_or_else(pending)
    }

    async fn fetch_asset(&self, url: &str) -> Result<Bytes, TransferError> {
        self.fetched.lock().unwrap().push(url.to_string());
        self.asset.lock().unwrap().clone()
    }

    async fn generate_education(
        &self,
        prompt: &str,
    ) -> Result<GenerateEducationResponse, TransferError> {
        self.prompts.lock().unwrap().push(prompt.to_string());
        self.education.lock().unwrap().clone()
    }
}
