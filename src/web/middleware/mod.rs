//! Admin panel middleware.

pub mod admin_session;
