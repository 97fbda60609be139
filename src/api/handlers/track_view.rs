//! Handler for the venue view beacon.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::StatusCode,
};
use validator::Validate;

use crate::api::dto::view::{TrackViewRequest, VenuePath};
use crate::domain::view_tracker::ViewTracker;
use crate::error::AppError;
use crate::state::AppState;

/// Records a view of a venue page.
///
/// # Endpoint
///
/// `POST /api/venues/{id}/views`
///
/// # Request Body
///
/// ```json
/// { "slug": "ball-pit-park" }
/// ```
///
/// Each beacon mounts a fresh [`ViewTracker`], so exactly one event reaches
/// the analytics emitter per accepted request. The event is queued without
/// waiting for persistence; a full queue drops it silently.
///
/// # Response Codes
///
/// - **202 Accepted**: event handed to the emitter
/// - **400 Bad Request**: id that is not a positive integer, unreadable body,
///   or malformed slug; always the standard error envelope
pub async fn track_view_handler(
    State(state): State<AppState>,
    path: Result<Path<VenuePath>, PathRejection>,
    payload: Result<Json<TrackViewRequest>, JsonRejection>,
) -> Result<StatusCode, AppError> {
    let Path(path) = path?;
    let Json(payload) = payload?;

    path.validate()?;
    payload.validate()?;

    let mut tracker = ViewTracker::new(state.emitter.clone());
    tracker.render(path.id, &payload.slug);
    tracker.detach();

    Ok(StatusCode::ACCEPTED)
}
