//! Account management service.

use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount, Transfer, TransferOutcome};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

/// Service orchestrating account operations over an [`AccountRepository`].
///
/// Every operation issues at most one storage call and surfaces the first
/// error it meets.
pub struct AccountService {
    repository: Arc<dyn AccountRepository>,
}

impl AccountService {
    /// Creates a new account service.
    pub fn new(repository: Arc<dyn AccountRepository>) -> Self {
        Self { repository }
    }

    /// Builds and persists a new account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] if persisting fails.
    pub async fn create_account(
        &self,
        first_name: String,
        last_name: String,
    ) -> Result<Account, AppError> {
        let new_account = NewAccount::new(first_name, last_name);
        let account = self.repository.create(&new_account).await?;

        tracing::info!(id = account.id, number = account.number, "account created");

        Ok(account)
    }

    /// Lists all accounts in storage order.
    pub async fn list_accounts(&self) -> Result<Vec<Account>, AppError> {
        self.repository.list().await
    }

    /// Fetches one account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the account does not exist.
    pub async fn get_account(&self, id: i64) -> Result<Account, AppError> {
        self.repository.get_by_id(id).await
    }

    /// Deletes an account. Unknown ids are not an error.
    pub async fn delete_account(&self, id: i64) -> Result<(), AppError> {
        self.repository.delete(id).await?;

        tracing::info!(id, "account deleted");

        Ok(())
    }

    /// Updates an account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotImplemented`] with the PostgreSQL backend.
    pub async fn update_account(&self, account: &Account) -> Result<(), AppError> {
        self.repository.update(account).await
    }

    /// Accepts a transfer instruction without moving funds.
    pub async fn transfer(&self, transfer: Transfer) -> Result<TransferOutcome, AppError> {
        tracing::info!(
            from = transfer.from_account,
            to = transfer.to_account,
            amount = transfer.amount,
            "transfer accepted but not applied"
        );

        Ok(TransferOutcome::NotApplied(transfer))
    }

    /// Returns `true` if storage is reachable.
    pub async fn health_check(&self) -> bool {
        self.repository.health_check().await
    }
}
