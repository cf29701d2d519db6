//! Application error type and its HTTP translation.
//!
//! Every handler returns [`AppError`]; [`IntoResponse`] is the single place where
//! errors become status codes and `{"error": "<message>"}` bodies.

use axum::{
    Json,
    http::{HeaderValue, StatusCode, header::WWW_AUTHENTICATE},
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every failed request.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Malformed body, malformed path parameter.
    #[error("{0}")]
    BadRequest(String),

    /// Missing, malformed, invalid or expired credential.
    #[error("{0}")]
    Unauthorized(String),

    /// Valid credential presented for someone else's account.
    #[error("{0}")]
    Forbidden(String),

    #[error("account with id {id} not found")]
    NotFound { id: i64 },

    #[error("method not allowed: {0}")]
    MethodNotAllowed(String),

    /// Operation is part of the storage contract but has no implementation yet.
    #[error("{0} is not supported yet")]
    NotImplemented(&'static str),

    #[error("request deadline exceeded")]
    Timeout,

    #[error("storage error: {0}")]
    Storage(#[from] sqlx::Error),

    #[error("{0}")]
    Internal(String),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest(message.into())
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized(message.into())
    }

    pub fn forbidden(message: impl Into<String>) -> Self {
        Self::Forbidden(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            AppError::Forbidden(_) => StatusCode::FORBIDDEN,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::NotImplemented(_) => StatusCode::NOT_IMPLEMENTED,
            AppError::Timeout => StatusCode::GATEWAY_TIMEOUT,
            AppError::Storage(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to show to clients. Database details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::Storage(_) => "storage error".to_string(),
            AppError::Internal(_) => "internal error".to_string(),
            other => other.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::debug!(error = %self, status = status.as_u16(), "request rejected");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        let mut response = (status, Json(body)).into_response();

        if matches!(self, AppError::Unauthorized(_)) {
            response
                .headers_mut()
                .insert(WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }

        response
    }
}
