//! Bearer credential authentication middleware.

use axum::{
    extract::{FromRequestParts, Request, State},
    middleware::Next,
    response::Response,
};
use axum_auth::AuthBearer;

use crate::{error::AppError, state::AppState};

/// Authenticates requests using the credential issued at account creation.
///
/// # Header Format
///
/// ```text
/// Authorization: Bearer <token>
/// ```
///
/// The header must hold exactly the scheme and the token separated by one
/// space. On success the verified [`crate::application::services::AccountClaims`]
/// are stored in the request extensions for
/// [`crate::api::extract::Authenticated`].
///
/// # Errors
///
/// Returns `401 Unauthorized` before the handler runs if:
/// - Authorization header is missing
/// - Header format is invalid
/// - Token signature, algorithm or expiry does not verify
///
/// # Example
///
/// ```rust,ignore
/// let protected = Router::new()
///     .route("/account/{id}", get(get_account_handler))
///     .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));
/// ```
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (mut parts, body) = req.into_parts();

    let AuthBearer(token) = AuthBearer::from_request_parts(&mut parts, &())
        .await
        .map_err(|_| AppError::unauthorized("invalid token"))?;

    if token.is_empty() || token.contains(char::is_whitespace) {
        return Err(AppError::unauthorized("invalid token"));
    }

    let claims = st.credential_service.verify_token(&token)?;

    let mut req = Request::from_parts(parts, body);
    req.extensions_mut().insert(claims);

    Ok(next.run(req).await)
}
