//! Error handling for the weather evaluation API
//!
//! Domain outcomes (city not found, upstream failures, bad forecast data)
//! are values carried to the edge and mapped to HTTP responses here.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use thiserror::Error;

use crate::evaluation::EvaluationError;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    /// The provider has no data for the requested city
    #[error("city {0} not found")]
    CityNotFound(String),

    /// Bad request input
    #[error("validation error: {message}")]
    Validation { field: String, message: String },

    /// Out-of-domain scalar reached the evaluation pipeline
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// The provider call failed or returned an unusable payload
    #[error("upstream weather provider error: {0}")]
    Upstream(String),

    /// Provider data is missing a field the forecast evaluation requires
    #[error("incomplete weather data: {0}")]
    IncompleteData(String),

    /// The forecast window had nothing to compare the reference day against
    #[error("forecast window too small: {0}")]
    EmptyComparisonSet(String),

    /// Invalid configuration detected at startup
    #[error("configuration error: {0}")]
    Configuration(String),

    /// Internal errors
    #[error("internal server error")]
    Internal(#[from] anyhow::Error),
}

impl From<EvaluationError> for AppError {
    fn from(error: EvaluationError) -> Self {
        match error {
            EvaluationError::InvalidProfile => AppError::Configuration(error.to_string()),
            EvaluationError::MissingField { .. } => AppError::IncompleteData(error.to_string()),
            EvaluationError::EmptyComparisonSet { .. } => {
                AppError::EmptyComparisonSet(error.to_string())
            }
            EvaluationError::WindSpeed(_) => AppError::InvalidInput(error.to_string()),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let field = errors
            .field_errors()
            .keys()
            .next()
            .map_or_else(|| "query".to_string(), |field| (*field).to_string());
        AppError::Validation {
            field,
            message: errors.to_string(),
        }
    }
}

/// Error response structure
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the error for debugging
        tracing::error!("Error: {:?}", self);

        let (status, code, field) = match &self {
            AppError::CityNotFound(_) => (StatusCode::NO_CONTENT, "CITY_NOT_FOUND", None),
            AppError::Validation { field, .. } => {
                (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", Some(field.clone()))
            }
            AppError::InvalidInput(_) => (StatusCode::UNPROCESSABLE_ENTITY, "INVALID_INPUT", None),
            AppError::Upstream(_) => (StatusCode::BAD_GATEWAY, "UPSTREAM_ERROR", None),
            AppError::IncompleteData(_) => (StatusCode::BAD_GATEWAY, "INCOMPLETE_DATA", None),
            AppError::EmptyComparisonSet(_) => {
                (StatusCode::BAD_GATEWAY, "EMPTY_COMPARISON_SET", None)
            }
            AppError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIGURATION_ERROR", None)
            }
            AppError::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR", None),
        };

        // 204 carries no body by definition
        if status == StatusCode::NO_CONTENT {
            return status.into_response();
        }

        let body = ErrorResponse {
            error: ErrorDetail {
                code: code.to_string(),
                message: self.to_string(),
                field,
            },
        };

        (status, Json(body)).into_response()
    }
}

/// Result type alias for handlers
pub type AppResult<T> = Result<T, AppError>;
