//! Data Transfer Objects for API requests and responses.

pub mod health;
pub mod venue_count;
pub mod view;
