mod common;

use account_service::AppError;
use account_service::domain::entities::NewAccount;
use account_service::domain::repositories::AccountRepository;
use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_init_schema_is_idempotent(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    assert!(repo.init_schema().await.is_ok());
    assert!(repo.init_schema().await.is_ok());
}

#[sqlx::test(migrations = false)]
async fn test_create_assigns_id(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    let first = repo.create(&NewAccount::new("Ada", "Lovelace")).await.unwrap();
    let second = repo.create(&NewAccount::new("Alan", "Turing")).await.unwrap();

    assert!(first.id > 0);
    assert_ne!(first.id, second.id);
}

#[sqlx::test(migrations = false)]
async fn test_create_then_get_round_trip(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    let new_account = NewAccount::new("Ada", "Lovelace");
    let created = repo.create(&new_account).await.unwrap();

    let fetched = repo.get_by_id(created.id).await.unwrap();

    assert_eq!(fetched.first_name, "Ada");
    assert_eq!(fetched.last_name, "Lovelace");
    assert_eq!(fetched.number, new_account.number);
    assert_eq!(fetched.balance, 0);
    assert_eq!(
        fetched.created_at.timestamp_micros(),
        new_account.created_at.timestamp_micros()
    );
}

#[sqlx::test(migrations = false)]
async fn test_get_missing_account_not_found(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    let result = repo.get_by_id(999_999).await;

    assert!(matches!(result, Err(AppError::NotFound { id: 999_999 })));
}

#[sqlx::test(migrations = false)]
async fn test_list_returns_all_accounts(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    assert!(repo.list().await.unwrap().is_empty());

    let a = repo.create(&NewAccount::new("Ada", "Lovelace")).await.unwrap();
    let b = repo.create(&NewAccount::new("Alan", "Turing")).await.unwrap();

    let mut ids: Vec<i64> = repo.list().await.unwrap().iter().map(|a| a.id).collect();
    ids.sort_unstable();

    let mut expected = vec![a.id, b.id];
    expected.sort_unstable();

    assert_eq!(ids, expected);
}

#[sqlx::test(migrations = false)]
async fn test_delete_removes_account(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    let account = repo.create(&NewAccount::new("Ada", "Lovelace")).await.unwrap();

    repo.delete(account.id).await.unwrap();

    assert!(matches!(
        repo.get_by_id(account.id).await,
        Err(AppError::NotFound { .. })
    ));
}

#[sqlx::test(migrations = false)]
async fn test_delete_missing_account_succeeds(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    assert!(repo.delete(424_242).await.is_ok());
}

#[sqlx::test(migrations = false)]
async fn test_update_not_implemented(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    let mut account = repo.create(&NewAccount::new("Ada", "Lovelace")).await.unwrap();
    account.balance = 1_000;

    let result = repo.update(&account).await;

    assert!(matches!(result, Err(AppError::NotImplemented(_))));
    assert_eq!(repo.get_by_id(account.id).await.unwrap().balance, 0);
}

#[sqlx::test(migrations = false)]
async fn test_health_check(pool: PgPool) {
    let repo = common::create_repository(pool).await;

    assert!(repo.health_check().await);
}
