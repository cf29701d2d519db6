//! HTTP request handlers for API endpoints.

pub mod accounts;
pub mod health;
pub mod transfer;

pub use accounts::{
    create_account_handler, delete_account_handler, delete_collection_handler,
    get_account_handler, list_accounts_handler, method_not_allowed_handler,
};
pub use health::health_handler;
pub use transfer::transfer_handler;
