//! PostgreSQL implementation of venue repository.

use async_trait::async_trait;
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::repositories::VenueRepository;
use crate::error::AppError;

pub struct PgVenueRepository {
    pool: Arc<PgPool>,
}

impl PgVenueRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl VenueRepository for PgVenueRepository {
    async fn count(&self) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM venues")
            .fetch_one(self.pool.as_ref())
            .await?;

        Ok(count)
    }
}
