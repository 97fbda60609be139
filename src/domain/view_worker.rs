//! Background worker persisting venue views.

use chrono::Utc;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio_retry::Retry;
use tokio_retry::strategy::{ExponentialBackoff, jitter};
use tracing::{debug, error, warn};

use crate::domain::entities::NewVenueView;
use crate::domain::repositories::ViewRepository;
use crate::domain::view_event::ViewEvent;

/// Number of retries after the first failed insert.
const MAX_RETRIES: usize = 3;

/// Drains the view queue until every sender is dropped.
///
/// Each event is stamped with the dequeue time and written through
/// [`ViewRepository::record_view`]. Failed inserts are retried with jittered
/// exponential backoff; an event that still fails is logged and discarded.
pub async fn run_view_worker(
    mut rx: mpsc::Receiver<ViewEvent>,
    repository: Arc<dyn ViewRepository>,
) {
    while let Some(event) = rx.recv().await {
        process_event(event, repository.as_ref()).await;
    }

    debug!("View queue closed, worker exiting");
}

/// Waits for a spawned worker to finish draining after every sender is gone.
///
/// Returns `false` when the worker panicked or was still draining after
/// `timeout`; events left in the queue at that point are lost.
pub async fn wait_for_drain(handle: JoinHandle<()>, timeout: Duration) -> bool {
    match tokio::time::timeout(timeout, handle).await {
        Ok(Ok(())) => true,
        Ok(Err(e)) => {
            error!(error = %e, "View worker stopped abnormally");
            false
        }
        Err(_) => {
            warn!(timeout = ?timeout, "View worker did not drain in time");
            false
        }
    }
}

async fn process_event(event: ViewEvent, repository: &dyn ViewRepository) {
    let view = NewVenueView::from_event(event, Utc::now());

    // 5ms, 25ms, 125ms before jitter
    let strategy = ExponentialBackoff::from_millis(5)
        .max_delay(Duration::from_secs(1))
        .map(jitter)
        .take(MAX_RETRIES);

    let attempt = view.clone();
    let result = Retry::start(strategy, move || repository.record_view(attempt.clone())).await;

    match result {
        Ok(recorded) => {
            metrics::counter!("venue_views_recorded_total").increment(1);
            debug!(venue_id = recorded.venue_id, slug = %recorded.slug, "View recorded");
        }
        Err(e) => {
            metrics::counter!("venue_views_failed_total").increment(1);
            error!(
                venue_id = view.venue_id,
                slug = %view.slug,
                error = %e,
                "Failed to record view after retries"
            );
        }
    }
}
