//! Persisted domain entities.
//!
//! Entities are plain data structures. Creation inputs live in separate
//! `New*` structs.
//!
//! - [`VenueView`] / [`NewVenueView`] - a recorded venue page view
//! - [`AdminToken`] - an admin panel credential (stored hashed)

pub mod admin_token;
pub mod venue_view;

pub use admin_token::AdminToken;
pub use venue_view::{NewVenueView, VenueView};
