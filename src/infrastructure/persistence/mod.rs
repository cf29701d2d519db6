//! PostgreSQL repository implementations.
//!
//! - [`PgAccountRepository`] - Account storage, retrieval and schema bootstrap

pub mod pg_account_repository;

pub use pg_account_repository::PgAccountRepository;
