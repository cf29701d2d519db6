//! Repository trait for account storage.

use crate::domain::entities::{Account, NewAccount};
use crate::error::AppError;
use async_trait::async_trait;

/// Storage contract every account backend implements.
///
/// Each method issues at most one statement; no operation is retried.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgAccountRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
///
/// # Examples
///
/// See integration tests: `tests/repository_account.rs`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Persists a new account and returns it with its assigned identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on connectivity or constraint failures.
    async fn create(&self, new_account: &NewAccount) -> Result<Account, AppError>;

    /// Deletes the account with the given id.
    ///
    /// Deleting an id that does not exist succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn delete(&self, id: i64) -> Result<(), AppError>;

    /// Updates an existing account.
    ///
    /// # Errors
    ///
    /// Backends may return [`AppError::NotImplemented`]; callers must not
    /// assume the account was changed.
    async fn update(&self, account: &Account) -> Result<(), AppError>;

    /// Returns every account. Order is whatever the backend scans in.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Storage`] on database errors.
    async fn list(&self) -> Result<Vec<Account>, AppError>;

    /// Fetches a single account.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] carrying `id` if no account matches.
    /// Returns [`AppError::Storage`] on database errors.
    async fn get_by_id(&self, id: i64) -> Result<Account, AppError>;

    /// Returns `true` if the backend answers a trivial query.
    async fn health_check(&self) -> bool;
}
