//! PostgreSQL implementation of the account repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{Account, NewAccount};
use crate::domain::repositories::AccountRepository;
use crate::error::AppError;

const CREATE_ACCOUNT_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS account (
        id          BIGSERIAL PRIMARY KEY,
        first_name  VARCHAR(50) NOT NULL,
        last_name   VARCHAR(50) NOT NULL,
        number      BIGINT NOT NULL,
        balance     BIGINT NOT NULL DEFAULT 0,
        created_at  TIMESTAMPTZ NOT NULL
    )
"#;

/// Row shape of the `account` table.
///
/// Columns are matched by name, so reordering them in the schema is harmless.
#[derive(Debug, sqlx::FromRow)]
struct AccountRow {
    id: i64,
    first_name: String,
    last_name: String,
    number: i64,
    balance: i64,
    created_at: DateTime<Utc>,
}

impl From<AccountRow> for Account {
    fn from(row: AccountRow) -> Self {
        Account {
            id: row.id,
            first_name: row.first_name,
            last_name: row.last_name,
            number: row.number,
            balance: row.balance,
            created_at: row.created_at,
        }
    }
}

/// PostgreSQL repository for accounts.
///
/// Uses hard delete; there is a single table and nothing references it.
pub struct PgAccountRepository {
    pool: Arc<PgPool>,
}

impl PgAccountRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }

    /// Creates the `account` table if it does not exist yet.
    ///
    /// Idempotent; run once at startup before serving traffic.
    pub async fn init_schema(&self) -> Result<(), AppError> {
        sqlx::query(CREATE_ACCOUNT_TABLE)
            .execute(self.pool.as_ref())
            .await?;

        Ok(())
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, new_account: &NewAccount) -> Result<Account, AppError> {
        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO account (first_name, last_name, number, balance, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id
            "#,
        )
        .bind(&new_account.first_name)
        .bind(&new_account.last_name)
        .bind(new_account.number)
        .bind(new_account.balance)
        .bind(new_account.created_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(Account::from_new(id, new_account.clone()))
    }

    async fn delete(&self, id: i64) -> Result<(), AppError> {
        let result = sqlx::query("DELETE FROM account WHERE id = $1")
            .bind(id)
            .execute(self.pool.as_ref())
            .await?;

        if result.rows_affected() == 0 {
            tracing::debug!(id, "delete matched no account");
        }

        Ok(())
    }

    async fn update(&self, _account: &Account) -> Result<(), AppError> {
        Err(AppError::NotImplemented("account update"))
    }

    async fn list(&self) -> Result<Vec<Account>, AppError> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            "#,
        )
        .fetch_all(self.pool.as_ref())
        .await?;

        Ok(rows.into_iter().map(Account::from).collect())
    }

    async fn get_by_id(&self, id: i64) -> Result<Account, AppError> {
        let row = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT id, first_name, last_name, number, balance, created_at
            FROM account
            WHERE id = $1
            "#,
        )
        .bind(id)
        .fetch_optional(self.pool.as_ref())
        .await?;

        row.map(Account::from).ok_or(AppError::NotFound { id })
    }

    async fn health_check(&self) -> bool {
        sqlx::query("SELECT 1")
            .execute(self.pool.as_ref())
            .await
            .is_ok()
    }
}
