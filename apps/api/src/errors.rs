use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::StatusCode,
    response::{Html, IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::generation::formatting::error_fragment;

/// Error type for the JSON API.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
/// Body shape: `{"error": "<message>"}`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    /// The model produced nothing usable. Detail is logged, not returned.
    #[error("Failed to generate {0}")]
    GenerationFailed(&'static str),

    /// Anything else; the message is returned to the caller verbatim.
    #[error("{0}")]
    Unhandled(String),
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::Unhandled(rejection.body_text())
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Validation(msg) => {
                tracing::warn!("Rejected request: {msg}");
                StatusCode::BAD_REQUEST
            }
            AppError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::Unhandled(msg) => {
                tracing::error!("Unhandled error: {msg}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

/// Error type for the form endpoints.
/// Renders as a `<div class="error-message">` fragment for direct DOM insertion.
#[derive(Debug, Error)]
pub enum FragmentError {
    #[error("Please provide all required fields")]
    MissingFields,

    /// Sent with 200: the fragment is the research result.
    #[error("Invalid analysis type: {0}")]
    InvalidAnalysisType(String),

    /// Generic failure for questions/titles; detail is logged, not returned.
    #[error("Failed to generate {0}. Please try again.")]
    GenerationFailed(&'static str),

    /// Research reports surface the model failure itself, with 200.
    #[error("{0}")]
    Generation(String),

    #[error("An error occurred while generating {what}: {message}")]
    Unhandled { what: &'static str, message: String },
}

impl FragmentError {
    pub fn from_form_rejection(what: &'static str, rejection: FormRejection) -> Self {
        FragmentError::Unhandled {
            what,
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for FragmentError {
    fn into_response(self) -> Response {
        let status = match &self {
            FragmentError::MissingFields => {
                tracing::warn!("Rejected form: {self}");
                StatusCode::BAD_REQUEST
            }
            FragmentError::InvalidAnalysisType(_) => {
                tracing::warn!("Rejected form: {self}");
                StatusCode::OK
            }
            FragmentError::Generation(_) => StatusCode::OK,
            FragmentError::GenerationFailed(_) => StatusCode::INTERNAL_SERVER_ERROR,
            FragmentError::Unhandled { what, message } => {
                tracing::error!("Error in generate {what}: {message}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, Html(error_fragment(&self.to_string()))).into_response()
    }
}
