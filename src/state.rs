//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::{AccountService, CredentialService};
use crate::domain::repositories::AccountRepository;

#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<AccountService>,
    pub credential_service: Arc<CredentialService>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn AccountRepository>,
        credential_service: CredentialService,
    ) -> Self {
        Self {
            account_service: Arc::new(AccountService::new(repository)),
            credential_service: Arc::new(credential_service),
        }
    }
}
