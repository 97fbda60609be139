//! Channel-backed analytics emitter.

use tokio::sync::mpsc::{self, error::TrySendError};
use tracing::warn;

use crate::domain::analytics::AnalyticsEmitter;
use crate::domain::view_event::ViewEvent;

/// Queues view events for [`crate::domain::view_worker::run_view_worker`].
///
/// Uses `try_send`, so emitting never waits. When the queue is full or the
/// worker has stopped, the event is dropped and counted.
#[derive(Clone)]
pub struct ChannelEmitter {
    sender: mpsc::Sender<ViewEvent>,
}

impl ChannelEmitter {
    pub fn new(sender: mpsc::Sender<ViewEvent>) -> Self {
        Self { sender }
    }

    /// Whether the worker side of the queue is gone.
    pub fn is_closed(&self) -> bool {
        self.sender.is_closed()
    }

    /// Remaining queue slots.
    pub fn capacity(&self) -> usize {
        self.sender.capacity()
    }
}

impl AnalyticsEmitter for ChannelEmitter {
    fn emit(&self, event: ViewEvent) {
        match self.sender.try_send(event) {
            Ok(()) => {}
            Err(TrySendError::Full(event)) => {
                metrics::counter!("venue_views_dropped_total", "reason" => "full").increment(1);
                warn!(venue_id = event.venue_id, slug = %event.slug, "View queue full, dropping event");
            }
            Err(TrySendError::Closed(event)) => {
                metrics::counter!("venue_views_dropped_total", "reason" => "closed").increment(1);
                warn!(venue_id = event.venue_id, slug = %event.slug, "View queue closed, dropping event");
            }
        }
    }
}
