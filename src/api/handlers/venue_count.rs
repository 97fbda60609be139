//! Handler for the venue count endpoint.

use axum::{Json, extract::State, http::StatusCode};
use tracing::error;

use crate::api::dto::venue_count::{VenueCountError, VenueCountResponse};
use crate::state::AppState;

/// Returns the current number of venues.
///
/// # Endpoint
///
/// `GET /api/venues/count`
///
/// # Response Codes
///
/// - **200 OK**: `{"count": 128}`, the store's value unchanged
/// - **500 Internal Server Error**: `{"error": "Failed to get venue count"}`
///
/// The underlying error is logged and never included in the body. A 500 means
/// "count unavailable", not zero.
pub async fn venue_count_handler(
    State(state): State<AppState>,
) -> Result<Json<VenueCountResponse>, (StatusCode, Json<VenueCountError>)> {
    match state.venue_service.count_venues().await {
        Ok(count) => Ok(Json(VenueCountResponse { count })),
        Err(e) => {
            error!(error = ?e, "Failed to get venue count");
            Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(VenueCountError::default()),
            ))
        }
    }
}
