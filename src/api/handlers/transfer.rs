//! Handler for the transfer endpoint.

use axum::{Json, extract::State};

use crate::api::dto::transfer::TransferRequest;
use crate::api::extract::JsonBody;
use crate::domain::entities::TransferOutcome;
use crate::error::AppError;
use crate::state::AppState;

/// Accepts a transfer instruction and echoes it back.
///
/// # Endpoint
///
/// `/account/transfer` (any method)
///
/// No balance is changed.
///
/// # Errors
///
/// Returns 400 if the body is not a valid transfer request.
pub async fn transfer_handler(
    State(state): State<AppState>,
    JsonBody(payload): JsonBody<TransferRequest>,
) -> Result<Json<TransferRequest>, AppError> {
    match state.account_service.transfer(payload.into()).await? {
        TransferOutcome::NotApplied(transfer) => Ok(Json(transfer.into())),
    }
}
