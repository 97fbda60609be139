//! Cookie helpers for the admin session.

use axum::http::{HeaderMap, header::COOKIE};

/// Name of the admin session cookie.
pub const ADMIN_COOKIE: &str = "admin_token";

/// Path the admin session cookie is scoped to.
const ADMIN_PATH: &str = "/admin";

/// Extracts a cookie value from the `Cookie` header.
///
/// Handles multiple cookies separated by semicolons and ignores the rest.
/// Empty values are treated as absent.
pub fn read_cookie(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get_all(COOKIE)
        .iter()
        .filter_map(|cookie_header| cookie_header.to_str().ok())
        .flat_map(|cookie_str| cookie_str.split(';'))
        .find_map(|cookie| {
            let mut parts = cookie.trim().splitn(2, '=');
            match (parts.next(), parts.next()) {
                (Some(key), Some(value)) if key == name && !value.is_empty() => {
                    Some(value.to_string())
                }
                _ => None,
            }
        })
}

/// Builds a browser-session cookie (no `Max-Age`, no `Expires`).
pub fn session_cookie(name: &str, value: &str, secure: bool) -> String {
    let mut cookie = format!("{name}={value}; Path={ADMIN_PATH}; HttpOnly; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds a cookie that makes the browser drop `name` immediately.
pub fn expired_cookie(name: &str, secure: bool) -> String {
    let mut cookie = format!("{name}=; Path={ADMIN_PATH}; Max-Age=0; HttpOnly; SameSite=Strict");
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}
