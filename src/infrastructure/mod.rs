//! Infrastructure layer for external integrations.
//!
//! Implements the interfaces defined by the domain layer.
//!
//! # Modules
//!
//! - [`analytics`] - Channel-backed analytics emitter
//! - [`persistence`] - PostgreSQL repository implementations

pub mod analytics;
pub mod persistence;
