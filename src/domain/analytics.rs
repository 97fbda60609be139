//! Analytics emitter seam.

use std::sync::Arc;

use crate::domain::view_event::ViewEvent;

/// Records venue view events.
///
/// Emission is fire-and-forget: implementations must not block the caller and
/// report nothing back. Delivery failures are handled (or dropped) inside the
/// implementation.
///
/// # Implementations
///
/// - [`crate::infrastructure::analytics::ChannelEmitter`] - queues events for
///   [`crate::domain::view_worker::run_view_worker`]
#[cfg_attr(test, mockall::automock)]
pub trait AnalyticsEmitter: Send + Sync {
    fn emit(&self, event: ViewEvent);
}

impl<T: AnalyticsEmitter + ?Sized> AnalyticsEmitter for Arc<T> {
    fn emit(&self, event: ViewEvent) {
        (**self).emit(event)
    }
}
