//! API route configuration.

use crate::api::handlers::{
    create_account_handler, delete_account_handler, delete_collection_handler,
    get_account_handler, list_accounts_handler, method_not_allowed_handler, transfer_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{MethodRouter, any, get},
};

/// Routes reachable without a credential.
///
/// # Endpoints
///
/// - `GET    /account`           - List accounts
/// - `POST   /account`           - Create an account and issue its credential
/// - `*      /account/transfer`  - Accept and echo a transfer (funds never move)
///
/// With `legacy_collection_routes`, `/account` additionally answers:
///
/// - `PUT    /account`           - Same as `GET`
/// - `DELETE /account`           - Delete-by-id without an id (always 400)
///
/// Any other method answers 405.
pub fn public_routes(legacy_collection_routes: bool) -> Router<AppState> {
    Router::new()
        .route("/account", collection_route(legacy_collection_routes))
        .route("/account/transfer", any(transfer_handler))
}

/// Routes that require a Bearer credential.
///
/// # Endpoints
///
/// - `GET    /account/{id}`      - Fetch the caller's account
/// - `DELETE /account/{id}`      - Delete the caller's account
pub fn protected_routes() -> Router<AppState> {
    Router::new().route(
        "/account/{id}",
        get(get_account_handler)
            .delete(delete_account_handler)
            .fallback(method_not_allowed_handler),
    )
}

fn collection_route(legacy_collection_routes: bool) -> MethodRouter<AppState> {
    let route = get(list_accounts_handler).post(create_account_handler);

    let route = if legacy_collection_routes {
        route
            .put(list_accounts_handler)
            .delete(delete_collection_handler)
    } else {
        route
    };

    route.fallback(method_not_allowed_handler)
}
