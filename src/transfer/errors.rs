use axum::http::StatusCode;
use thiserror::Error;

use crate::app::models::api_error::ApiError;

/// Everything that can go wrong between picking a photo and holding the result.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransferError {
    #[error("{0}")]
    Network(String),
    #[error("Processing failed")]
    ProcessingFailed,
    #[error("Processing timeout")]
    Timeout,
    #[error("{0}")]
    MalformedResponse(String),
    #[error("{0}")]
    Image(String),
    #[error("Cancelled")]
    Cancelled,
}

#[derive(Debug)]
pub enum TransferApiError {
    PhotoMissing,
    StyleMissing,
    StyleNotFound,
    JobNotFound,
}

impl TransferApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::PhotoMissing => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "A photo is required.".to_string(),
            },
            Self::StyleMissing => ApiError {
                code: StatusCode::BAD_REQUEST,
                message: "A style is required.".to_string(),
            },
            Self::StyleNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Style not found.".to_string(),
            },
            Self::JobNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Transfer not found.".to_string(),
            },
        }
    }
}
