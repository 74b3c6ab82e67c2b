//! Error kinds of the sources API and their HTTP rendering.
//!
//! Handlers return `Result<_, ApiError>`; actix calls [`ResponseError`] to turn the
//! error into a JSON [`ErrorBody`]. This is also where failures get logged, so the
//! store's code, hint and details reach the log without being echoed to callers.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use common::model::error::{ErrorBody, ValidationErrors};
use log::{debug, error, warn};

use crate::store::StoreError;

pub const UNEXPECTED_ERROR: &str = "An unexpected error occurred";
pub const VALIDATION_FAILED: &str = "Validation failed";

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request body is not valid JSON.
    #[error("Malformed JSON body: {0}")]
    MalformedInput(String),
    #[error("Validation failed: {0}")]
    Validation(ValidationErrors),
    #[error("Source '{0}' not found")]
    NotFound(String),
    #[error("Request body exceeds the limit of {0} bytes")]
    PayloadTooLarge(usize),
    /// Unknown path under the API prefix, as `"<METHOD> <path>"`.
    #[error("No API route for {0}")]
    NoRoute(String),
    #[error("Method not allowed: {0}")]
    MethodNotAllowed(String),
    #[error(transparent)]
    Store(#[from] StoreError),
    /// Anything else; the detail is logged, never sent.
    #[error("An unexpected error occurred")]
    Internal(String),
}

impl ApiError {
    fn body(&self) -> ErrorBody {
        match self {
            ApiError::Validation(errors) => ErrorBody {
                error: VALIDATION_FAILED.to_string(),
                details: Some(errors.violations.clone()),
            },
            ApiError::Store(store) => ErrorBody::new(store.message.clone()),
            ApiError::Internal(_) => ErrorBody::new(UNEXPECTED_ERROR),
            other => ErrorBody::new(other.to_string()),
        }
    }

    fn log(&self) {
        match self {
            ApiError::MalformedInput(reason) => debug!("Rejected malformed body: {}", reason),
            ApiError::Validation(errors) => debug!("Rejected invalid source: {}", errors),
            ApiError::NotFound(id) => warn!("Source '{}' not found", id),
            ApiError::PayloadTooLarge(limit) => warn!("Rejected body over {} bytes", limit),
            ApiError::NoRoute(route) | ApiError::MethodNotAllowed(route) => {
                debug!("Unrouted API request: {}", route)
            }
            ApiError::Store(store) => error!(
                "Store error: {} (code: {}, hint: {}, details: {})",
                store.message,
                store.code.as_deref().unwrap_or("-"),
                store.hint.as_deref().unwrap_or("-"),
                store.details.as_deref().unwrap_or("-"),
            ),
            ApiError::Internal(detail) => error!("Unexpected failure: {}", detail),
        }
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::MalformedInput(_) | ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) | ApiError::NoRoute(_) => StatusCode::NOT_FOUND,
            ApiError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            ApiError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            ApiError::Store(_) | ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        self.log();
        HttpResponse::build(self.status_code()).json(self.body())
    }
}
