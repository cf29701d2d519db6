//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`                 - Health check (public)
//! - `/account`, `/account/transfer` - Account collection and transfer (public)
//! - `/account/{id}`                - Single account (Bearer credential required)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Deadline** - Per-request timeout that cancels in-flight storage calls
//! - **Authentication** - Bearer credential on `/account/{id}` only
//! - **Path normalization** - Trailing slash handling

use std::time::Duration;

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{auth, deadline, tracing};
use crate::config::Config;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Options that change how routes are wired.
#[derive(Debug, Clone, Copy)]
pub struct RouterOptions {
    /// Answer `PUT /account` as a list and `DELETE /account` as a
    /// delete-by-id without an id, instead of 405.
    pub legacy_collection_routes: bool,
    /// Deadline applied to every request.
    pub request_timeout: Duration,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            legacy_collection_routes: false,
            request_timeout: Duration::from_secs(30),
        }
    }
}

impl From<&Config> for RouterOptions {
    fn from(config: &Config) -> Self {
        Self {
            legacy_collection_routes: config.legacy_collection_routes,
            request_timeout: Duration::from_secs(config.request_timeout_seconds),
        }
    }
}

/// Builds the router with all routes and middleware, without path normalization.
pub fn api_router(state: AppState, options: RouterOptions) -> Router {
    let protected = api::routes::protected_routes()
        .route_layer(middleware::from_fn_with_state(state.clone(), auth::layer));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::public_routes(options.legacy_collection_routes))
        .merge(protected)
        .with_state(state)
        .layer(middleware::from_fn_with_state(
            options.request_timeout,
            deadline::layer,
        ))
        .layer(tracing::layer())
}

/// Constructs the application router, trimming trailing slashes before routing.
pub fn app_router(state: AppState, options: RouterOptions) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state, options))
}
