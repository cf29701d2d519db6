mod common;

use sqlx::PgPool;

#[sqlx::test(migrations = false)]
async fn test_health_ok(pool: PgPool) {
    let server = common::make_server(pool).await;

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["database"], "ok");
    assert!(json["version"].is_string());
}
