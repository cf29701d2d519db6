mod common;

use account_service::domain::entities::{Account, NewAccount};
use axum::http::StatusCode;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_missing_authorization_header(pool: PgPool) {
    let account = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let server = common::make_server(pool).await;

    let response = server.get(&format!("/account/{}", account.id)).await;

    response.assert_status_unauthorized();
    assert!(response.json::<serde_json::Value>()["error"].is_string());
    assert_eq!(response.header("WWW-Authenticate"), "Bearer");
}

#[sqlx::test(migrations = false)]
async fn test_missing_header_checked_before_id(pool: PgPool) {
    let server = common::make_server(pool).await;

    server
        .get("/account/not-a-number")
        .await
        .assert_status_unauthorized();
}

#[sqlx::test(migrations = false)]
async fn test_malformed_authorization_header(pool: PgPool) {
    let account = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let token = common::token_for(&account);
    let server = common::make_server(pool).await;
    let path = format!("/account/{}", account.id);

    server
        .get(&path)
        .add_header("Authorization", token.clone())
        .await
        .assert_status_unauthorized();

    server
        .get(&path)
        .add_header("Authorization", format!("Bearer {token} trailing"))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test(migrations = false)]
async fn test_wrong_secret_token(pool: PgPool) {
    let account = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let forged = common::credential_service("not-the-server-secret")
        .issue_token(&account)
        .unwrap();
    let server = common::make_server(pool).await;

    server
        .get(&format!("/account/{}", account.id))
        .add_header("Authorization", common::bearer(&forged))
        .await
        .assert_status_unauthorized();
}

#[sqlx::test(migrations = false)]
async fn test_garbage_token(pool: PgPool) {
    let server = common::make_server(pool).await;

    server
        .delete("/account/1")
        .add_header("Authorization", "Bearer abc.def.ghi")
        .await
        .assert_status_unauthorized();
}

#[sqlx::test(migrations = false)]
async fn test_delete_requires_token(pool: PgPool) {
    let account = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let server = common::make_server(pool.clone()).await;

    server
        .delete(&format!("/account/{}", account.id))
        .await
        .assert_status_unauthorized();

    let token = common::token_for(&account);
    server
        .get(&format!("/account/{}", account.id))
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status_ok();
}

#[sqlx::test(migrations = false)]
async fn test_unsupported_method_on_account(pool: PgPool) {
    let account = common::create_test_account(&pool, "Ada", "Lovelace").await;
    let token = common::token_for(&account);
    let server = common::make_server(pool).await;

    server
        .patch(&format!("/account/{}", account.id))
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status(StatusCode::METHOD_NOT_ALLOWED);
}

#[sqlx::test(migrations = false)]
async fn test_token_for_missing_account(pool: PgPool) {
    let ghost = Account::from_new(987_654, NewAccount::new("No", "One"));
    let token = common::token_for(&ghost);
    let server = common::make_server(pool).await;

    server
        .get("/account/987654")
        .add_header("Authorization", common::bearer(&token))
        .await
        .assert_status_not_found();
}
