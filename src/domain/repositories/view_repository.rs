//! Repository trait for venue view persistence.

use crate::domain::entities::{NewVenueView, VenueView};
use crate::error::AppError;
use async_trait::async_trait;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// Stores a single view.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn record_view(&self, view: NewVenueView) -> Result<VenueView, AppError>;

    /// Counts recorded views, optionally for a single venue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count_views(&self, venue_id: Option<i64>) -> Result<i64, AppError>;
}
