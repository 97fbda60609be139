//! Repository trait for venue queries.

use crate::error::AppError;
use async_trait::async_trait;

/// Read access to the venue store.
///
/// The venue schema itself is owned elsewhere; this layer only counts rows.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::PgVenueRepository`] - PostgreSQL implementation
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VenueRepository: Send + Sync {
    /// Counts venue records at the instant of the query.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    async fn count(&self) -> Result<i64, AppError>;
}
