//! API route configuration.

use crate::api::handlers::{track_view_handler, venue_count_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Public API routes. None of them require authentication.
///
/// # Endpoints
///
/// - `GET  /venues/count`       - Current number of venues
/// - `POST /venues/{id}/views`  - View beacon for a venue page
pub fn public_routes() -> Router<AppState> {
    Router::new()
        .route("/venues/count", get(venue_count_handler))
        .route("/venues/{id}/views", post(track_view_handler))
}
