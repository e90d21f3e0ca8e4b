use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use thiserror::Error;

use crate::models::response::ErrorDetail;

#[derive(Debug, Clone, Error)]
pub enum CoachError {
    #[error("{0}")]
    Validation(String),
    #[error("model unavailable: {0}")]
    ModelUnavailable(String),
    #[error("provider error: {0}")]
    Provider(String),
    #[error("failed to generate answer")]
    EmptyResponse,
    #[error("config error: {0}")]
    Config(String),
}

impl CoachError {
    /// Message placed in the `detail` field of the error body.
    pub fn detail(&self) -> String {
        match self {
            CoachError::Validation(_) | CoachError::ModelUnavailable(_) => self.to_string(),
            CoachError::Provider(_) | CoachError::EmptyResponse | CoachError::Config(_) => {
                format!("Internal error: {self}")
            }
        }
    }
}

impl ResponseError for CoachError {
    fn status_code(&self) -> StatusCode {
        match self {
            CoachError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            CoachError::ModelUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            CoachError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            CoachError::EmptyResponse => StatusCode::INTERNAL_SERVER_ERROR,
            CoachError::Config(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorDetail {
            detail: self.detail(),
        })
    }
}

impl From<reqwest::Error> for CoachError {
    fn from(err: reqwest::Error) -> Self {
        CoachError::Provider(err.to_string())
    }
}

impl From<reqwest::header::ToStrError> for CoachError {
    fn from(err: reqwest::header::ToStrError) -> Self {
        CoachError::Provider(err.to_string())
    }
}

impl From<serde_json::Error> for CoachError {
    fn from(err: serde_json::Error) -> Self {
        CoachError::Provider(err.to_string())
    }
}

impl From<std::io::Error> for CoachError {
    fn from(err: std::io::Error) -> Self {
        CoachError::Config(err.to_string())
    }
}
