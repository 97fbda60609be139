//! Helpers shared across layers.
//!
//! - [`cookie`] - Admin session cookie parsing and construction
//! - [`token`] - Admin token generation

pub mod cookie;
pub mod token;
