//! Admin panel served as server-rendered HTML.
//!
//! Uses Askama templates from `templates/`.
//!
//! # Modules
//!
//! - [`handlers`] - Gate, login and logout handlers
//! - [`middleware`] - Session resolution
//! - [`routes`] - Admin route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
