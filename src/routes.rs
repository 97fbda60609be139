//! Top-level router combining API and admin routes.
//!
//! # Route Structure
//!
//! - `GET  /health`               - Health check: DB, view queue
//! - `GET  /api/venues/count`     - Venue count
//! - `POST /api/venues/{id}/views`- View beacon
//! - `/admin/*`                   - Admin panel (session cookie gate)
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on login
//! - **Session** - Admin authentication status resolution
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::admin_session;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    let api_router = api::routes::public_routes().layer(rate_limit::layer());

    let admin_gated = web::routes::gated_routes()
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            admin_session::layer,
        ))
        .layer(rate_limit::layer());

    let admin_login = web::routes::login_routes().layer(rate_limit::secure_layer());

    let admin_router = Router::new().merge(admin_gated).merge(admin_login);

    let router = Router::new()
        .route("/health", get(health_handler))
        .nest("/api", api_router)
        .nest("/admin", admin_router)
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
