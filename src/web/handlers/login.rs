//! Admin login handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use regex::Regex;
use serde::Deserialize;
use std::sync::LazyLock;
use tracing::{info, warn};
use validator::Validate;

use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::{ADMIN_COOKIE, session_cookie};

/// Characters allowed in a cookie value without quoting.
static TOKEN_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9._~-]+$").unwrap());

/// Template for the login form.
///
/// Renders `templates/login.html` with an optional error banner.
#[derive(Template, WebTemplate, Default)]
#[template(path = "login.html")]
pub struct LoginTemplate {
    pub error: Option<String>,
}

impl LoginTemplate {
    fn with_error(message: &str) -> Self {
        Self {
            error: Some(message.to_string()),
        }
    }
}

/// Form body of `POST /admin/login`.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginForm {
    #[validate(length(min = 1, max = 256))]
    #[validate(regex(path = *TOKEN_REGEX))]
    pub token: String,
}

/// Exchanges an admin token for a session cookie.
///
/// # Endpoint
///
/// `POST /admin/login` (`application/x-www-form-urlencoded`, field `token`)
///
/// # Responses
///
/// - **303 See Other** to `/admin/backfill` with `Set-Cookie: admin_token=...`
/// - **401 Unauthorized** with the login form when the token is malformed,
///   unknown or revoked
/// - **500 Internal Server Error** with the login form when the token store
///   cannot be queried
///
/// The cookie has no `Max-Age`, so the session ends with the browser session.
pub async fn login_handler(State(state): State<AppState>, Form(form): Form<LoginForm>) -> Response {
    if form.validate().is_err() {
        return (
            StatusCode::UNAUTHORIZED,
            LoginTemplate::with_error("Invalid token"),
        )
            .into_response();
    }

    match state.auth_service.authenticate(&form.token).await {
        Ok(()) => {
            info!("Admin session started");
            let cookie = session_cookie(ADMIN_COOKIE, &form.token, state.site.is_https());
            (
                [(header::SET_COOKIE, cookie)],
                Redirect::to("/admin/backfill"),
            )
                .into_response()
        }
        Err(AppError::Unauthorized { .. }) => {
            warn!("Admin login rejected");
            (
                StatusCode::UNAUTHORIZED,
                LoginTemplate::with_error("Invalid token"),
            )
                .into_response()
        }
        Err(e) => {
            warn!(error = %e, "Admin login failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                LoginTemplate::with_error("Login is temporarily unavailable"),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_form_validation() {
        let form = |token: &str| LoginForm {
            token: token.to_string(),
        };

        assert!(form("AbC123xyz").validate().is_ok());
        assert!(form("").validate().is_err());
        assert!(form("has;semicolon").validate().is_err());
        assert!(form("has space").validate().is_err());
        assert!(form(&"a".repeat(257)).validate().is_err());
    }

    #[test]
    fn test_login_template_renders_error() {
        let html = LoginTemplate::with_error("Invalid token").render().unwrap();

        assert!(html.contains("Invalid token"));
        assert!(html.contains(r#"action="/admin/login""#));
    }

    #[test]
    fn test_login_template_without_error() {
        let html = LoginTemplate::default().render().unwrap();

        assert!(!html.contains("class=\"error\""));
    }
}
