//! Recorded venue views.

use chrono::{DateTime, Utc};

use crate::domain::view_event::ViewEvent;

/// A venue view persisted by the view worker.
#[derive(Debug, Clone)]
pub struct VenueView {
    pub id: i64,
    pub venue_id: i64,
    pub slug: String,
    pub viewed_at: DateTime<Utc>,
}

/// Input data for recording a view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewVenueView {
    pub venue_id: i64,
    pub slug: String,
    pub viewed_at: DateTime<Utc>,
}

impl NewVenueView {
    /// Stamps an emitted event with the time it was dequeued.
    pub fn from_event(event: ViewEvent, viewed_at: DateTime<Utc>) -> Self {
        Self {
            venue_id: event.venue_id,
            slug: event.slug,
            viewed_at,
        }
    }
}
