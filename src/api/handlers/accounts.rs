//! Handlers for account endpoints.

use axum::{
    Json,
    extract::{Path, State},
    http::Method,
};

use crate::api::dto::account::{
    CreateAccountRequest, CreateAccountResponse, DeleteAccountResponse,
};
use crate::api::extract::{Authenticated, JsonBody, parse_account_id};
use crate::application::services::AccountClaims;
use crate::domain::entities::Account;
use crate::error::AppError;
use crate::state::AppState;

/// Lists all accounts.
///
/// # Endpoint
///
/// `GET /account` (also `PUT /account` with legacy collection routes)
pub async fn list_accounts_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<Account>>, AppError> {
    let accounts = state.account_service.list_accounts().await?;

    Ok(Json(accounts))
}

/// Creates an account and issues its credential.
///
/// # Endpoint
///
/// `POST /account`
///
/// # Request Body
///
/// ```json
/// { "firstName": "Ada", "lastName": "Lovelace" }
/// ```
///
/// # Errors
///
/// Returns 400 if the body is not a valid create request.
/// Returns 500 if the account cannot be persisted.
pub async fn create_account_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<CreateAccountRequest>,
) -> Result<Json<CreateAccountResponse>, AppError> {
    let account = state
        .account_service
        .create_account(payload.first_name, payload.last_name)
        .await?;

    let token = state.credential_service.issue_token(&account)?;

    Ok(Json(CreateAccountResponse {
        account_data: account,
        token,
    }))
}

/// Fetches the caller's own account.
///
/// # Endpoint
///
/// `GET /account/{id}` (Bearer credential required)
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 403 if the credential belongs to another account.
/// Returns 404 if the account does not exist.
pub async fn get_account_handler(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    Path(raw_id): Path<String>,
) -> Result<Json<Account>, AppError> {
    let id = parse_account_id(Some(&raw_id))?;
    ensure_owner(&claims, id)?;

    let account = state.account_service.get_account(id).await?;

    Ok(Json(account))
}

/// Deletes the caller's own account.
///
/// # Endpoint
///
/// `DELETE /account/{id}` (Bearer credential required)
///
/// Deleting an account that is already gone still returns 200.
///
/// # Errors
///
/// Returns 400 if `id` is not an integer.
/// Returns 403 if the credential belongs to another account.
pub async fn delete_account_handler(
    State(state): State<AppState>,
    Authenticated(claims): Authenticated,
    Path(raw_id): Path<String>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let id = parse_account_id(Some(&raw_id))?;
    ensure_owner(&claims, id)?;

    delete_by_id(&state, id).await
}

/// `DELETE /account` with legacy collection routes enabled.
///
/// Runs delete-by-id without an id segment, so it always fails with 400.
pub async fn delete_collection_handler(
    State(state): State<AppState>,
) -> Result<Json<DeleteAccountResponse>, AppError> {
    let id = parse_account_id(None)?;

    delete_by_id(&state, id).await
}

/// Fallback for methods a route does not support.
pub async fn method_not_allowed_handler(method: Method) -> AppError {
    AppError::MethodNotAllowed(method.to_string())
}

async fn delete_by_id(state: &AppState, id: i64) -> Result<Json<DeleteAccountResponse>, AppError> {
    state.account_service.delete_account(id).await?;

    Ok(Json(DeleteAccountResponse { delete: id }))
}

fn ensure_owner(claims: &AccountClaims, id: i64) -> Result<(), AppError> {
    if claims.account.id != id {
        tracing::warn!(
            token_account = claims.account.id,
            requested = id,
            "credential used for another account"
        );
        return Err(AppError::forbidden("token does not grant access to this account"));
    }

    Ok(())
}
