use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(String),

    #[error("{0}")]
    Validation(String),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    // The cause is logged where the error is raised; clients only see the fixed message.
    #[error("Failed to generate answer from AI")]
    Model(String),

    #[error("Failed to process transcript")]
    Processing(String),
}

impl AppError {
    /// Underlying cause, including the detail hidden from clients.
    pub fn detail(&self) -> &str {
        match self {
            AppError::StorageRead(msg)
            | AppError::InvalidTimestamp(msg)
            | AppError::Validation(msg)
            | AppError::MalformedRequest(msg)
            | AppError::Model(msg)
            | AppError::Processing(msg) => msg,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::StorageRead(_)
            | AppError::InvalidTimestamp(_)
            | AppError::MalformedRequest(_)
            | AppError::Model(_)
            | AppError::Processing(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::Model(err.to_string())
    }
}

impl From<actix_web::error::JsonPayloadError> for AppError {
    fn from(err: actix_web::error::JsonPayloadError) -> Self {
        AppError::MalformedRequest(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
