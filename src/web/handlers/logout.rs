//! Admin logout handler.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Redirect},
};

use crate::state::AppState;
use crate::utils::cookie::{ADMIN_COOKIE, expired_cookie};

/// Clears the admin session cookie and returns to the gate.
///
/// # Endpoint
///
/// `POST /admin/logout` → **303 See Other** to `/admin/backfill`
pub async fn logout_handler(State(state): State<AppState>) -> impl IntoResponse {
    (
        [(
            header::SET_COOKIE,
            expired_cookie(ADMIN_COOKIE, state.site.is_https()),
        )],
        Redirect::to("/admin/backfill"),
    )
}
