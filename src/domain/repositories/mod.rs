//! Repository trait definitions for the domain layer.
//!
//! Implementations live in `crate::infrastructure::persistence`; mocks are
//! generated with `mockall` for unit tests.
//!
//! # Available Repositories
//!
//! - [`VenueRepository`] - Venue count queries
//! - [`ViewRepository`] - Venue view persistence
//! - [`TokenRepository`] - Admin token authentication

pub mod token_repository;
pub mod venue_repository;
pub mod view_repository;

pub use token_repository::TokenRepository;
pub use venue_repository::VenueRepository;
pub use view_repository::ViewRepository;

#[cfg(test)]
pub use token_repository::MockTokenRepository;
#[cfg(test)]
pub use venue_repository::MockVenueRepository;
#[cfg(test)]
pub use view_repository::MockViewRepository;
