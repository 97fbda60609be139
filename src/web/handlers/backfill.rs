//! Backfill page: the admin authentication gate.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Extension,
    extract::State,
    response::{IntoResponse, Response},
};
use tracing::error;

use crate::domain::admin_gate::{AdminView, AuthStatus, admin_gate};
use crate::state::AppState;
use crate::web::handlers::login::LoginTemplate;

/// Template for the backfill dashboard.
///
/// Counts are `None` when their query failed; the page shows them as
/// unavailable instead of zero.
#[derive(Template, WebTemplate)]
#[template(path = "backfill.html")]
pub struct BackfillTemplate {
    pub site_url: String,
    pub venue_count: Option<i64>,
    pub view_count: Option<i64>,
}

/// Renders the login form or the backfill dashboard.
///
/// # Endpoint
///
/// `GET /admin/backfill`
///
/// # Gate
///
/// - [`AuthStatus::Unauthenticated`] → login form, dashboard withheld
/// - [`AuthStatus::Authenticated`] → dashboard, login form withheld
///
/// Both answer `200 OK`; the URL stays the same either way.
pub async fn backfill_handler(
    State(state): State<AppState>,
    Extension(status): Extension<AuthStatus>,
) -> Response {
    match admin_gate(status) {
        AdminView::Login => LoginTemplate::default().into_response(),
        AdminView::Dashboard => dashboard(&state).await.into_response(),
    }
}

async fn dashboard(state: &AppState) -> BackfillTemplate {
    let venue_count = state
        .venue_service
        .count_venues()
        .await
        .inspect_err(|e| error!(error = ?e, "Failed to get venue count"))
        .ok();

    let view_count = state
        .venue_service
        .count_views(None)
        .await
        .inspect_err(|e| error!(error = ?e, "Failed to get view count"))
        .ok();

    BackfillTemplate {
        site_url: state.site.site_url.clone(),
        venue_count,
        view_count,
    }
}
