use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

use crate::quiz::unwrap::ParseError;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Provider error: {message}")]
    ProviderError {
        message: String,
        details: Option<String>,
    },

    #[error("Parse error: {0}")]
    ParseError(String),

    #[error("Timed out: {0}")]
    OcrTimeout(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    pub fn provider(message: impl Into<String>, details: impl std::fmt::Display) -> Self {
        AppError::ProviderError {
            message: message.into(),
            details: Some(details.to_string()),
        }
    }

    pub fn error_code(&self) -> &'static str {
        match self {
            AppError::NotFound(_) => "NOT_FOUND",
            AppError::ValidationError(_) => "VALIDATION_ERROR",
            AppError::ProviderError { .. } => "PROVIDER_ERROR",
            AppError::ParseError(_) => "PARSE_ERROR",
            AppError::OcrTimeout(_) => "OCR_TIMEOUT",
            AppError::DatabaseError(_) => "DATABASE_ERROR",
            AppError::InternalError(_) => "INTERNAL_ERROR",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::ProviderError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::ParseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::OcrTimeout(_) => StatusCode::GATEWAY_TIMEOUT,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        if self.status_code().is_server_error() {
            log::error!("[{}] {}", self.error_code(), self);
        }

        let (error, details) = match self {
            AppError::ProviderError { message, details } => (message.clone(), details.clone()),
            other => (other.to_string(), None),
        };

        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error,
            code: self.status_code().as_u16(),
            details,
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}
impl From<mongodb::bson::ser::Error> for AppError {
    fn from(err: mongodb::bson::ser::Error) -> Self {
        AppError::InternalError(format!("BSON serialization error: {}", err))
    }
}
impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
impl From<async_openai::error::OpenAIError> for AppError {
    fn from(err: async_openai::error::OpenAIError) -> Self {
        AppError::provider("Text generation provider call failed", err)
    }
}
impl From<reqwest::Error> for AppError {
    fn from(err: reqwest::Error) -> Self {
        AppError::provider("Provider request failed", err)
    }
}
impl From<actix_multipart::MultipartError> for AppError {
    fn from(err: actix_multipart::MultipartError) -> Self {
        AppError::ValidationError(format!("Malformed multipart body: {}", err))
    }
}
impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        log::warn!("Provider reply was not valid JSON ({}): {}", err.reason, err.raw);
        AppError::ParseError("Failed to parse the generated content".to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
