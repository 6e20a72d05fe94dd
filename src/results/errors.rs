use axum::http::StatusCode;

use crate::app::models::api_error::ApiError;

#[derive(Debug)]
pub enum ResultsApiError {
    ResultNotFound,
}

impl ResultsApiError {
    pub fn value(&self) -> ApiError {
        match *self {
            Self::ResultNotFound => ApiError {
                code: StatusCode::NOT_FOUND,
                message: "Result not found.".to_string(),
            },
        }
    }
}
