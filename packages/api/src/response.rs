// ABOUTME: Shared API response types and error handling
// ABOUTME: Every failure renders as {"error": message} with a 400, 404 or 500 status

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json as ResponseJson, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::{error, info};

use roster_storage::StorageError;

/// Message returned when an `{id}` path segment is not a base-10 integer
pub const INVALID_ID_MESSAGE: &str = "Invalid User Id";

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("{}", INVALID_ID_MESSAGE)]
    InvalidId,

    /// The request body could not be decoded into the expected shape
    #[error("{0}")]
    InvalidBody(String),

    #[error("not found")]
    RouteNotFound,

    #[error("method not allowed")]
    MethodNotAllowed,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::InvalidId | ApiError::InvalidBody(_) => StatusCode::BAD_REQUEST,
            ApiError::RouteNotFound => StatusCode::NOT_FOUND,
            ApiError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            // A missing row stays a server error on the wire; only the logs tell it apart.
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

/// Body for update and delete
#[derive(Debug, Serialize)]
pub struct ResultBody {
    pub result: &'static str,
}

impl ResultBody {
    pub fn success() -> Self {
        Self { result: "success" }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        match &self {
            ApiError::Storage(StorageError::Database(err)) => {
                error!(error = %err, "Storage failure");
            }
            ApiError::Storage(StorageError::NotFound(id)) => {
                info!(id = %id, "Person not found");
            }
            _ => {
                info!(status = %status, error = %self, "Client error response");
            }
        }

        let body = ErrorBody {
            error: self.to_string(),
        };

        (status, ResponseJson(body)).into_response()
    }
}

/// Result type alias for API handlers
pub type ApiResult<T> = Result<T, ApiError>;

/// Fallback for unmatched routes
pub async fn route_not_found() -> ApiError {
    ApiError::RouteNotFound
}

/// Fallback for a known path requested with an unsupported method
pub async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed
}
