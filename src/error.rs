use actix_web::{error, http::StatusCode, HttpRequest, HttpResponse};
use thiserror::Error;
use crate::core::{AnswerError, ProgressError, RecommendError};
use crate::models::ErrorResponse;
use crate::services::{AuthError, CacheError, PostgresError};

/// Errors returned by HTTP handlers, rendered as JSON `ErrorResponse`s
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Invalid JSON: {0}")]
    InvalidJson(String),

    #[error("Invalid query: {0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error(transparent)]
    Auth(#[from] AuthError),

    #[error("{0} not found")]
    NotFound(String),

    #[error(transparent)]
    Store(#[from] PostgresError),

    #[error(transparent)]
    Cache(#[from] CacheError),

    #[error(transparent)]
    Recommend(#[from] RecommendError),

    #[error(transparent)]
    Answer(#[from] AnswerError),

    #[error(transparent)]
    Progress(#[from] ProgressError),

    #[error("Blocking task failed: {0}")]
    Blocking(#[from] error::BlockingError),
}

impl ApiError {
    /// Short machine-readable error code
    pub fn code(&self) -> &'static str {
        match self {
            ApiError::BadRequest(_) => "bad_request",
            ApiError::InvalidJson(_) => "invalid_json",
            ApiError::InvalidQuery(_) => "invalid_query",
            ApiError::Validation(_) => "validation_failed",
            ApiError::Auth(AuthError::MalformedHash | AuthError::Hashing(_)) => "internal_error",
            ApiError::Auth(_) => "unauthorized",
            ApiError::NotFound(_) => "not_found",
            ApiError::Store(PostgresError::NotFound(_)) => "not_found",
            ApiError::Store(PostgresError::Conflict(_)) => "conflict",
            ApiError::Store(PostgresError::InvalidInput(_)) => "bad_request",
            ApiError::Store(_) | ApiError::Cache(_) | ApiError::Blocking(_) => "internal_error",
            ApiError::Recommend(RecommendError::InterestsNotSet) => "interests_not_set",
            ApiError::Answer(_) => "invalid_answer",
            ApiError::Progress(_) => "invalid_progress",
        }
    }
}

impl error::ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_)
            | ApiError::InvalidJson(_)
            | ApiError::InvalidQuery(_)
            | ApiError::Validation(_)
            | ApiError::Recommend(_)
            | ApiError::Answer(_)
            | ApiError::Progress(_) => StatusCode::BAD_REQUEST,
            ApiError::Auth(AuthError::MalformedHash | AuthError::Hashing(_)) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
            ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Store(PostgresError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Store(PostgresError::Conflict(_)) => StatusCode::CONFLICT,
            ApiError::Store(PostgresError::InvalidInput(_)) => StatusCode::BAD_REQUEST,
            ApiError::Store(_) | ApiError::Cache(_) | ApiError::Blocking(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        // Internal details stay in the logs
        let message = if status == StatusCode::INTERNAL_SERVER_ERROR {
            tracing::error!("Request failed: {}", self);
            "Internal server error".to_string()
        } else {
            self.to_string()
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: self.code().to_string(),
            message,
            status_code: status.as_u16(),
        })
    }
}

/// Handle JSON payload errors
pub fn handle_json_payload_error(err: error::JsonPayloadError, req: &HttpRequest) -> actix_web::Error {
    tracing::info!("JSON payload error on {}: {}", req.path(), err);
    ApiError::InvalidJson(err.to_string()).into()
}

/// Handle query payload errors
pub fn handle_query_payload_error(err: error::QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::InvalidQuery(err.to_string()).into()
}
