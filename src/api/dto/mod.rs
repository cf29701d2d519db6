//! Data Transfer Objects for API requests and responses.

pub mod account;
pub mod health;
pub mod transfer;
