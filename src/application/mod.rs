//! Application layer services implementing business logic.
//!
//! Services consume repository traits and give HTTP handlers and the admin
//! CLI a narrow API.
//!
//! # Available Services
//!
//! - [`services::venue_service::VenueService`] - Venue counts and view totals
//! - [`services::auth_service::AuthService`] - Admin token authentication

pub mod services;
