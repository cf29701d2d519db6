#![allow(dead_code)]

use account_service::application::services::CredentialService;
use account_service::domain::entities::{Account, NewAccount};
use account_service::domain::repositories::AccountRepository;
use account_service::infrastructure::persistence::PgAccountRepository;
use account_service::routes::{RouterOptions, api_router};
use account_service::state::AppState;
use axum_test::TestServer;
use sqlx::PgPool;
use std::sync::Arc;

pub const TEST_SECRET: &str = "test-signing-secret";

pub async fn create_repository(pool: PgPool) -> PgAccountRepository {
    let repo = PgAccountRepository::new(Arc::new(pool));
    repo.init_schema().await.unwrap();
    repo
}

pub fn credential_service(secret: &str) -> CredentialService {
    CredentialService::new(secret, chrono::Duration::seconds(60))
}

pub async fn create_test_state(pool: PgPool) -> AppState {
    let repo = create_repository(pool).await;
    AppState::new(Arc::new(repo), credential_service(TEST_SECRET))
}

pub async fn make_server_with(pool: PgPool, options: RouterOptions) -> TestServer {
    let state = create_test_state(pool).await;
    TestServer::new(api_router(state, options)).unwrap()
}

pub async fn make_server(pool: PgPool) -> TestServer {
    make_server_with(pool, RouterOptions::default()).await
}

pub async fn create_test_account(pool: &PgPool, first_name: &str, last_name: &str) -> Account {
    let repo = create_repository(pool.clone()).await;
    repo.create(&NewAccount::new(first_name, last_name))
        .await
        .unwrap()
}

pub fn token_for(account: &Account) -> String {
    credential_service(TEST_SECRET).issue_token(account).unwrap()
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {token}")
}
