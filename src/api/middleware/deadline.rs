//! Per-request deadline middleware.

use std::time::Duration;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Aborts a request that runs longer than `deadline`.
///
/// The inner future is dropped on expiry, which cancels any in-flight
/// storage call. Responds with `504` and a JSON error body.
pub async fn layer(
    State(deadline): State<Duration>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let method = req.method().clone();
    let path = req.uri().path().to_owned();

    tokio::time::timeout(deadline, next.run(req))
        .await
        .map_err(|_| {
            tracing::warn!(%method, %path, ?deadline, "request deadline exceeded");
            AppError::Timeout
        })
}
