//! PostgreSQL implementation of view repository.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use std::sync::Arc;

use crate::domain::entities::{NewVenueView, VenueView};
use crate::domain::repositories::ViewRepository;
use crate::error::AppError;

/// PostgreSQL repository for venue views.
///
/// Views reference venues by id without a foreign key, so a view for a venue
/// deleted in the meantime is still stored.
pub struct PgViewRepository {
    pool: Arc<PgPool>,
}

impl PgViewRepository {
    /// Creates a new repository with a database connection pool.
    pub fn new(pool: Arc<PgPool>) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct VenueViewRow {
    id: i64,
    venue_id: i64,
    slug: String,
    viewed_at: DateTime<Utc>,
}

impl From<VenueViewRow> for VenueView {
    fn from(row: VenueViewRow) -> Self {
        Self {
            id: row.id,
            venue_id: row.venue_id,
            slug: row.slug,
            viewed_at: row.viewed_at,
        }
    }
}

#[async_trait]
impl ViewRepository for PgViewRepository {
    async fn record_view(&self, view: NewVenueView) -> Result<VenueView, AppError> {
        let row = sqlx::query_as::<_, VenueViewRow>(
            r#"
            INSERT INTO venue_views (venue_id, slug, viewed_at)
            VALUES ($1, $2, $3)
            RETURNING id, venue_id, slug, viewed_at
            "#,
        )
        .bind(view.venue_id)
        .bind(&view.slug)
        .bind(view.viewed_at)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(row.into())
    }

    async fn count_views(&self, venue_id: Option<i64>) -> Result<i64, AppError> {
        let count: i64 = sqlx::query_scalar(
            r#"
            SELECT COUNT(*)
            FROM venue_views
            WHERE ($1::BIGINT IS NULL OR venue_id = $1)
            "#,
        )
        .bind(venue_id)
        .fetch_one(self.pool.as_ref())
        .await?;

        Ok(count)
    }
}
