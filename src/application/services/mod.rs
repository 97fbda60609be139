//! Business logic services for the application layer.

pub mod auth_service;
pub mod venue_service;

pub use auth_service::AuthService;
pub use venue_service::VenueService;
