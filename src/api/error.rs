//! API error type with HTTP status code mapping

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::error::MergeError;

#[derive(Error, Debug)]
pub enum ApiError {
    /// Merge pipeline error, always caused by the request or the stored lines
    #[error("{0}")]
    Merge(#[from] MergeError),

    /// Posted line contains none of the accepted delimiters
    #[error("Invalid delimiter.")]
    InvalidDelimiter,

    #[error("Record {0} not found")]
    NotFound(u64),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl ApiError {
    /// Map error to HTTP status code
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Merge(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidDelimiter => StatusCode::BAD_REQUEST,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("{}", self);
        } else {
            log::warn!("{}", self);
        }
        (status, Json(ErrorBody { error: self.to_string() })).into_response()
    }
}
