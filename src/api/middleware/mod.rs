//! HTTP middleware shared by the API and the admin panel.

pub mod rate_limit;
pub mod tracing;
