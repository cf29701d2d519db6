//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP handlers.
//!
//! - [`services::account_service::AccountService`] - Account lifecycle and transfers
//! - [`services::credential_service::CredentialService`] - Bearer credential issuance and verification

pub mod services;
