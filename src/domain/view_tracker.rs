//! View tracker: emits one analytics event per distinct venue it is shown with.

use crate::domain::analytics::AnalyticsEmitter;
use crate::domain::view_event::ViewEvent;

/// Attachment point that reports venue views to an [`AnalyticsEmitter`].
///
/// The tracker remembers the last `(venue_id, slug)` pair it emitted. Calling
/// [`ViewTracker::render`] with the same pair again is a no-op; a change to
/// either value emits exactly one new event. Nothing is emitted before the
/// first render, and the tracker never retries a failed emission.
///
/// # Example
///
/// ```
/// use std::sync::Mutex;
/// use softplay_directory::domain::analytics::AnalyticsEmitter;
/// use softplay_directory::domain::view_event::ViewEvent;
/// use softplay_directory::domain::view_tracker::ViewTracker;
///
/// #[derive(Default)]
/// struct Recorder(Mutex<Vec<ViewEvent>>);
///
/// impl AnalyticsEmitter for Recorder {
///     fn emit(&self, event: ViewEvent) {
///         self.0.lock().unwrap().push(event);
///     }
/// }
///
/// let mut tracker = ViewTracker::new(Recorder::default());
/// tracker.render(42, "ball-pit-park");
/// tracker.render(42, "ball-pit-park");
/// assert_eq!(tracker.emitter().0.lock().unwrap().len(), 1);
/// ```
pub struct ViewTracker<E: AnalyticsEmitter> {
    emitter: E,
    last: Option<(i64, String)>,
}

impl<E: AnalyticsEmitter> ViewTracker<E> {
    /// Creates a detached tracker. No event is emitted until the first render.
    pub fn new(emitter: E) -> Self {
        Self {
            emitter,
            last: None,
        }
    }

    /// Attaches or re-renders the tracker with the current venue.
    ///
    /// Returns `true` when an event was emitted.
    pub fn render(&mut self, venue_id: i64, slug: &str) -> bool {
        let unchanged = matches!(
            &self.last,
            Some((last_id, last_slug)) if *last_id == venue_id && last_slug == slug
        );
        if unchanged {
            return false;
        }

        self.emitter.emit(ViewEvent::new(venue_id, slug));
        self.last = Some((venue_id, slug.to_string()));
        true
    }

    /// The emitter this tracker reports to.
    pub fn emitter(&self) -> &E {
        &self.emitter
    }

    /// Detaches the tracker. There is nothing to cancel.
    pub fn detach(self) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::analytics::MockAnalyticsEmitter;
    use std::sync::{Arc, Mutex};

    #[derive(Default)]
    struct RecordingEmitter {
        events: Mutex<Vec<ViewEvent>>,
    }

    impl RecordingEmitter {
        fn events(&self) -> Vec<ViewEvent> {
            self.events.lock().unwrap().clone()
        }
    }

    impl AnalyticsEmitter for RecordingEmitter {
        fn emit(&self, event: ViewEvent) {
            self.events.lock().unwrap().push(event);
        }
    }

    #[test]
    fn test_mount_emits_once_with_exact_values() {
        let mut mock = MockAnalyticsEmitter::new();
        mock.expect_emit()
            .withf(|event| event.venue_id == 42 && event.slug == "ball-pit-park")
            .times(1)
            .return_const(());

        let mut tracker = ViewTracker::new(mock);

        assert!(tracker.render(42, "ball-pit-park"));
    }

    #[test]
    fn test_nothing_emitted_before_mount() {
        let emitter = Arc::new(RecordingEmitter::default());
        let tracker = ViewTracker::new(emitter.clone());

        assert!(emitter.events().is_empty());
        tracker.detach();
        assert!(emitter.events().is_empty());
    }

    #[test]
    fn test_unchanged_rerender_does_not_emit() {
        let emitter = Arc::new(RecordingEmitter::default());
        let mut tracker = ViewTracker::new(emitter.clone());

        tracker.render(42, "ball-pit-park");
        assert!(!tracker.render(42, "ball-pit-park"));
        assert!(!tracker.render(42, "ball-pit-park"));

        assert_eq!(emitter.events(), vec![ViewEvent::new(42, "ball-pit-park")]);
    }

    #[test]
    fn test_slug_change_emits_once_more() {
        let emitter = Arc::new(RecordingEmitter::default());
        let mut tracker = ViewTracker::new(emitter.clone());

        tracker.render(42, "ball-pit-park");
        assert!(tracker.render(42, "ball-pit-park-2"));
        tracker.render(42, "ball-pit-park-2");

        assert_eq!(
            emitter.events(),
            vec![
                ViewEvent::new(42, "ball-pit-park"),
                ViewEvent::new(42, "ball-pit-park-2"),
            ]
        );
    }

    #[test]
    fn test_id_change_emits_once_more() {
        let emitter = Arc::new(RecordingEmitter::default());
        let mut tracker = ViewTracker::new(emitter.clone());

        tracker.render(42, "ball-pit-park");
        tracker.render(7, "ball-pit-park");

        assert_eq!(emitter.events().len(), 2);
        assert_eq!(emitter.events()[1], ViewEvent::new(7, "ball-pit-park"));
    }

    #[test]
    fn test_returning_to_previous_pair_emits_again() {
        let emitter = Arc::new(RecordingEmitter::default());
        let mut tracker = ViewTracker::new(emitter.clone());

        tracker.render(42, "ball-pit-park");
        tracker.render(42, "ball-pit-park-2");
        tracker.render(42, "ball-pit-park");

        assert_eq!(emitter.events().len(), 3);
    }
}
