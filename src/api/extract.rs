//! Extractors that turn request data into domain values or [`AppError`]s.

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;

use crate::application::services::AccountClaims;
use crate::error::AppError;

/// JSON body extractor whose rejection is a `400` [`AppError::BadRequest`].
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| AppError::bad_request(rejection.body_text()))?;

        Ok(Self(value))
    }
}

/// Claims of the credential verified by [`crate::api::middleware::auth::layer`].
///
/// Fails with `401` if the middleware did not run for this route.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AccountClaims);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AccountClaims>()
            .cloned()
            .map(Authenticated)
            .ok_or_else(|| AppError::unauthorized("authentication required"))
    }
}

/// Parses an account id taken from the request path.
///
/// `None` means the route has no id segment at all.
pub fn parse_account_id(raw: Option<&str>) -> Result<i64, AppError> {
    let raw = raw.unwrap_or_default();

    raw.parse::<i64>()
        .map_err(|_| AppError::bad_request(format!("invalid id given: {raw:?}")))
}
