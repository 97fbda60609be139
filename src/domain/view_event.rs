//! View event model for venue page analytics.

/// A single venue view, passed from the tracker to the analytics emitter.
///
/// Ephemeral: the event itself is never stored. The view worker converts it
/// into a [`crate::domain::entities::NewVenueView`] when persisting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewEvent {
    pub venue_id: i64,
    pub slug: String,
}

impl ViewEvent {
    pub fn new(venue_id: i64, slug: impl Into<String>) -> Self {
        Self {
            venue_id,
            slug: slug.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_event_creation() {
        let event = ViewEvent::new(42, "ball-pit-park");

        assert_eq!(event.venue_id, 42);
        assert_eq!(event.slug, "ball-pit-park");
    }

    #[test]
    fn test_view_event_equality_covers_both_fields() {
        let a = ViewEvent::new(42, "ball-pit-park");

        assert_eq!(a, ViewEvent::new(42, "ball-pit-park".to_string()));
        assert_ne!(a, ViewEvent::new(43, "ball-pit-park"));
        assert_ne!(a, ViewEvent::new(42, "ball-pit-park-2"));
    }
}
