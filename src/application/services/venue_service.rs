//! Venue count and view statistics service.

use std::sync::Arc;

use crate::domain::repositories::{VenueRepository, ViewRepository};
use crate::error::AppError;

/// Service answering venue-level questions for the API and the admin panel.
///
/// Counts are never cached: each call goes to the store.
pub struct VenueService {
    venues: Arc<dyn VenueRepository>,
    views: Arc<dyn ViewRepository>,
}

impl VenueService {
    pub fn new(venues: Arc<dyn VenueRepository>, views: Arc<dyn ViewRepository>) -> Self {
        Self { venues, views }
    }

    /// Returns the current number of venues, exactly as the store reports it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_venues(&self) -> Result<i64, AppError> {
        self.venues.count().await
    }

    /// Returns the number of recorded views, optionally for one venue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn count_views(&self, venue_id: Option<i64>) -> Result<i64, AppError> {
        self.views.count_views(venue_id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::repositories::{MockVenueRepository, MockViewRepository};
    use serde_json::json;

    #[tokio::test]
    async fn test_count_venues_passes_value_through() {
        let mut venues = MockVenueRepository::new();
        venues.expect_count().times(1).returning(|| Ok(1_234));

        let service = VenueService::new(Arc::new(venues), Arc::new(MockViewRepository::new()));

        assert_eq!(service.count_venues().await.unwrap(), 1_234);
    }

    #[tokio::test]
    async fn test_count_venues_is_not_cached() {
        let mut venues = MockVenueRepository::new();
        let mut seq = mockall::Sequence::new();
        venues
            .expect_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(10));
        venues
            .expect_count()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|| Ok(11));

        let service = VenueService::new(Arc::new(venues), Arc::new(MockViewRepository::new()));

        assert_eq!(service.count_venues().await.unwrap(), 10);
        assert_eq!(service.count_venues().await.unwrap(), 11);
    }

    #[tokio::test]
    async fn test_count_venues_propagates_error() {
        let mut venues = MockVenueRepository::new();
        venues
            .expect_count()
            .times(1)
            .returning(|| Err(AppError::internal("Database error", json!({}))));

        let service = VenueService::new(Arc::new(venues), Arc::new(MockViewRepository::new()));

        assert!(matches!(
            service.count_venues().await,
            Err(AppError::Internal { .. })
        ));
    }

    #[tokio::test]
    async fn test_count_views_for_venue() {
        let mut views = MockViewRepository::new();
        views
            .expect_count_views()
            .withf(|venue_id| *venue_id == Some(42))
            .times(1)
            .returning(|_| Ok(3));

        let service = VenueService::new(Arc::new(MockVenueRepository::new()), Arc::new(views));

        assert_eq!(service.count_views(Some(42)).await.unwrap(), 3);
    }
}
