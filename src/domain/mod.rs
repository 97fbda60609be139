//! Domain layer containing business entities and logic.
//!
//! Nothing in this module depends on infrastructure or presentation layers.
//!
//! # Architecture
//!
//! - [`entities`] - Persisted data structures
//! - [`repositories`] - Data access trait definitions
//! - [`view_event`] - Venue view event model
//! - [`analytics`] - Analytics emitter seam
//! - [`view_tracker`] - Once-per-pair view emission
//! - [`view_worker`] - Asynchronous view persistence worker
//! - [`admin_gate`] - Admin authentication gate
//!
//! # View Tracking Flow
//!
//! 1. The view beacon handler mounts a [`view_tracker::ViewTracker`]
//! 2. The tracker hands a [`view_event::ViewEvent`] to an [`analytics::AnalyticsEmitter`]
//! 3. The channel emitter enqueues it without blocking
//! 4. [`view_worker::run_view_worker`] persists it via [`repositories::ViewRepository`]

pub mod admin_gate;
pub mod analytics;
pub mod entities;
pub mod repositories;
pub mod view_event;
pub mod view_tracker;
pub mod view_worker;
