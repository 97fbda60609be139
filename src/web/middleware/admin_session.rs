//! Cookie-based session resolution for the admin panel.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use tracing::{debug, warn};

use crate::domain::admin_gate::AuthStatus;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::{ADMIN_COOKIE, read_cookie};

/// Resolves the caller's [`AuthStatus`] and stores it as a request extension.
///
/// # Cookie Format
///
/// ```text
/// Cookie: admin_token=<token>
/// ```
///
/// The token is re-validated on every request, so revoking it ends open
/// sessions immediately. Unlike an access guard, this layer never rejects:
/// the handler decides what an unauthenticated caller sees.
///
/// # Example
///
/// ```rust,ignore
/// let admin = web::routes::gated_routes()
///     .route_layer(middleware::from_fn_with_state(state.clone(), admin_session::layer));
/// ```
pub async fn layer(State(st): State<AppState>, mut req: Request, next: Next) -> Response {
    let status = match read_cookie(req.headers(), ADMIN_COOKIE) {
        Some(token) => match st.auth_service.authenticate(&token).await {
            Ok(()) => AuthStatus::Authenticated,
            Err(AppError::Unauthorized { .. }) => {
                debug!("Admin session cookie rejected");
                AuthStatus::Unauthenticated
            }
            Err(e) => {
                warn!(error = %e, "Admin session check failed");
                AuthStatus::Unauthenticated
            }
        },
        None => AuthStatus::Unauthenticated,
    };

    req.extensions_mut().insert(status);

    next.run(req).await
}
