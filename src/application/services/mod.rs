//! Business logic services for the application layer.

pub mod account_service;
pub mod credential_service;

pub use account_service::AccountService;
pub use credential_service::{AccountClaims, CredentialService};
