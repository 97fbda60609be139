//! Admin route configuration.

use crate::state::AppState;
use crate::web::handlers::{backfill_handler, login_handler, logout_handler};
use axum::{
    Router,
    routing::{get, post},
};

/// Admin pages behind the authentication gate.
///
/// Must be wrapped with [`crate::web::middleware::admin_session::layer`], which
/// provides the [`crate::domain::admin_gate::AuthStatus`] the pages render from.
///
/// # Endpoints
///
/// - `GET  /backfill` - Login form or backfill dashboard
/// - `POST /logout`   - Ends the admin session
pub fn gated_routes() -> Router<AppState> {
    Router::new()
        .route("/backfill", get(backfill_handler))
        .route("/logout", post(logout_handler))
}

/// Credential submission, rate limited separately.
///
/// # Endpoints
///
/// - `POST /login` - Exchanges an admin token for a session cookie
pub fn login_routes() -> Router<AppState> {
    Router::new().route("/login", post(login_handler))
}
