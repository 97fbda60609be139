//! PostgreSQL repository implementations.
//!
//! Queries are built at runtime with `sqlx::query_as` / `sqlx::query_scalar`
//! against the schema in `migrations/`.
//!
//! # Repositories
//!
//! - [`PgVenueRepository`] - Venue counts
//! - [`PgViewRepository`] - Venue view storage
//! - [`PgTokenRepository`] - Admin token storage and validation

pub mod pg_token_repository;
pub mod pg_venue_repository;
pub mod pg_view_repository;

pub use pg_token_repository::PgTokenRepository;
pub use pg_venue_repository::PgVenueRepository;
pub use pg_view_repository::PgViewRepository;
