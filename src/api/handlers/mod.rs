//! HTTP request handlers for API endpoints.

pub mod health;
pub mod track_view;
pub mod venue_count;

pub use health::health_handler;
pub use track_view::track_view_handler;
pub use venue_count::venue_count_handler;
