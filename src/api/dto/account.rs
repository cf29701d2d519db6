//! DTOs for account endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::entities::Account;

/// Body of `POST /account`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountRequest {
    pub first_name: String,
    pub last_name: String,
}

/// Response of `POST /account`: the persisted account and its credential.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateAccountResponse {
    pub account_data: Account,
    pub token: String,
}

/// Response of `DELETE /account/{id}`.
#[derive(Debug, Serialize)]
pub struct DeleteAccountResponse {
    pub delete: i64,
}
