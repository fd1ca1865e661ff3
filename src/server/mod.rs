//! The user-facing JSON web server that listens for prediction requests

use std::sync::Arc;

use actix_web::http::header::ContentType;
use actix_web::http::StatusCode;
use actix_web::{web, HttpResponse};
use thiserror::Error;

use crate::preprocess::PreprocessError;
use crate::torch::{Classifier, ModelError};

pub mod protocol;
pub mod routes;

/// Shared per-process state: the once-loaded model handle, injected at the
/// composition point so tests can substitute stubs
pub struct AppState {
    pub model: Arc<dyn Classifier>,
}

impl AppState {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        AppState { model }
    }
}

/// Route table, shared between `main` and the handler tests
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(routes::home).service(
        web::resource("/predict")
            .route(web::post().to(routes::predict))
            .default_service(web::to(routes::method_not_allowed)),
    );
}

/// An error that terminates a request. Every variant renders as a JSON
/// object with a single `error` field.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The caller sent something unusable; they can retry with corrected
    /// input
    #[error("{0}")]
    BadRequest(String),

    /// The model produced a class index outside the lookup tables. A
    /// model/table mismatch, not a transient condition.
    #[error("Invalid prediction")]
    InvalidPrediction,

    /// Anything else: decode failure, shape mismatch, libtorch error
    #[error("Internal server error: {0}")]
    Internal(#[source] anyhow::Error),
}

impl actix_web::error::ResponseError for ApiError {
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code())
            .insert_header(ContentType::json())
            .json(protocol::ErrorResponse {
                error: self.to_string(),
            })
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidPrediction | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ModelError> for ApiError {
    fn from(err: ModelError) -> Self {
        ApiError::Internal(err.into())
    }
}

impl From<PreprocessError> for ApiError {
    fn from(err: PreprocessError) -> Self {
        ApiError::Internal(err.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::error::ResponseError;

    #[test]
    fn test_status_codes() {
        assert_eq!(
            ApiError::BadRequest("nope".into()).status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            ApiError::InvalidPrediction.status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            ApiError::Internal(anyhow::anyhow!("boom")).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_message_prefix() {
        let err = ApiError::Internal(anyhow::anyhow!("tensor shape mismatch"));
        assert_eq!(
            err.to_string(),
            "Internal server error: tensor shape mismatch"
        );
    }
}
