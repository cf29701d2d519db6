//! Core domain entities.
//!
//! - [`Account`] - A persisted account
//! - [`NewAccount`] - An account built in memory, before storage assigns an id
//! - [`Transfer`] - A transfer instruction (accepted, never applied)

pub mod account;
pub mod transfer;

pub use account::{ACCOUNT_NUMBER_RANGE, Account, NewAccount};
pub use transfer::{Transfer, TransferOutcome};
