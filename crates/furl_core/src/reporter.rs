//! Offset reporting
//!
//! An [`OffsetReporter`] is attached to one measured view. On every layout
//! pass it measures the view's top edge inside a named coordinate space and
//! publishes the value to its subscribers.
//!
//! Measurements are coalesced: several calls to [`OffsetReporter::measure`]
//! before a [`OffsetReporter::flush`] leave only the latest value pending, and
//! a flush delivers nothing when the value equals the last delivered one.
//! Observers subscribing after a delivery are brought up to date at once.

use slotmap::{new_key_type, SlotMap};

use crate::coordinate::CoordinateSpaces;
use crate::geometry::Rect;

new_key_type! {
    /// Handle returned by [`OffsetReporter::subscribe`]
    pub struct SubscriptionId;
}

/// Receiver of offset-changed notifications
pub trait OffsetObserver {
    fn offset_changed(&mut self, offset: f32);
}

impl<F: FnMut(f32)> OffsetObserver for F {
    fn offset_changed(&mut self, offset: f32) {
        self(offset)
    }
}

/// Measures a view inside a named coordinate space and notifies observers
pub struct OffsetReporter {
    space: String,
    observers: SlotMap<SubscriptionId, Box<dyn OffsetObserver>>,
    pending: Option<f32>,
    last_delivered: Option<f32>,
}

impl OffsetReporter {
    /// Create a reporter measuring against the coordinate space `space`
    pub fn new(space: impl Into<String>) -> Self {
        Self {
            space: space.into(),
            observers: SlotMap::with_key(),
            pending: None,
            last_delivered: None,
        }
    }

    /// Name of the coordinate space this reporter measures against
    pub fn space(&self) -> &str {
        &self.space
    }

    /// Add an observer. It immediately receives the last delivered offset, if any.
    pub fn subscribe(&mut self, observer: impl OffsetObserver + 'static) -> SubscriptionId {
        let mut observer: Box<dyn OffsetObserver> = Box::new(observer);
        if let Some(offset) = self.last_delivered {
            observer.offset_changed(offset);
        }
        self.observers.insert(observer)
    }

    /// Remove a subscription. Returns `false` if it was already gone.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.observers.remove(id).is_some()
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Measure `frame` (window coordinates) and store the result as pending.
    ///
    /// An undeclared coordinate space measures as `0.0`.
    pub fn measure(&mut self, spaces: &CoordinateSpaces, frame: Rect) -> f32 {
        let offset = match spaces.offset_in(&self.space, frame) {
            Ok(offset) => offset,
            Err(err) => {
                tracing::warn!("offset measurement degraded to 0: {}", err);
                0.0
            }
        };
        self.record(offset);
        offset
    }

    /// Store a raw measurement, superseding any undelivered one
    pub fn record(&mut self, offset: f32) {
        if let Some(stale) = self.pending.replace(offset) {
            tracing::trace!(stale, offset, "superseded pending offset");
        }
    }

    /// Deliver the pending measurement if it differs from the last one delivered
    pub fn flush(&mut self) -> Option<f32> {
        let offset = self.pending.take()?;
        if self.last_delivered == Some(offset) {
            return None;
        }

        tracing::trace!(
            space = %self.space,
            offset,
            observers = self.observers.len(),
            "delivering offset"
        );
        for (_, observer) in self.observers.iter_mut() {
            observer.offset_changed(offset);
        }
        self.last_delivered = Some(offset);
        Some(offset)
    }

    /// Measure and deliver in one layout pass
    pub fn report(&mut self, spaces: &CoordinateSpaces, frame: Rect) -> Option<f32> {
        self.measure(spaces, frame);
        self.flush()
    }

    /// Last value delivered to observers
    pub fn latest(&self) -> Option<f32> {
        self.last_delivered
    }

    /// Whether a measurement is waiting for [`flush`](Self::flush)
    pub fn has_pending(&self) -> bool {
        self.pending.is_some()
    }
}

impl std::fmt::Debug for OffsetReporter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OffsetReporter")
            .field("space", &self.space)
            .field("observers", &self.observers.len())
            .field("pending", &self.pending)
            .field("last_delivered", &self.last_delivered)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn spaces_at(y: f32) -> CoordinateSpaces {
        let mut spaces = CoordinateSpaces::new();
        spaces
            .declare("SCROLL", Rect::new(0.0, y, 390.0, 800.0))
            .unwrap();
        spaces
    }

    fn recording(reporter: &mut OffsetReporter) -> Rc<RefCell<Vec<f32>>> {
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        reporter.subscribe(move |offset: f32| sink.borrow_mut().push(offset));
        log
    }

    #[test]
    fn test_report_measures_top_edge() {
        let mut reporter = OffsetReporter::new("SCROLL");
        let log = recording(&mut reporter);

        let delivered = reporter.report(&spaces_at(0.0), Rect::new(0.0, -25.0, 390.0, 2000.0));

        assert_eq!(delivered, Some(-25.0));
        assert_eq!(*log.borrow(), vec![-25.0]);
        assert_eq!(reporter.latest(), Some(-25.0));
    }

    #[test]
    fn test_last_write_wins() {
        let mut reporter = OffsetReporter::new("SCROLL");
        let log = recording(&mut reporter);
        let spaces = spaces_at(0.0);

        reporter.measure(&spaces, Rect::new(0.0, -10.0, 1.0, 1.0));
        reporter.measure(&spaces, Rect::new(0.0, -20.0, 1.0, 1.0));
        reporter.measure(&spaces, Rect::new(0.0, -30.0, 1.0, 1.0));
        assert!(reporter.has_pending());
        reporter.flush();

        assert_eq!(*log.borrow(), vec![-30.0]);
        assert!(!reporter.has_pending());
    }

    #[test]
    fn test_unchanged_measurement_not_redelivered() {
        let mut reporter = OffsetReporter::new("SCROLL");
        let log = recording(&mut reporter);
        let spaces = spaces_at(0.0);
        let frame = Rect::new(0.0, -5.0, 1.0, 1.0);

        assert_eq!(reporter.report(&spaces, frame), Some(-5.0));
        assert_eq!(reporter.report(&spaces, frame), None);
        assert_eq!(log.borrow().len(), 1);
    }

    #[test]
    fn test_missing_space_falls_back_to_zero() {
        let mut reporter = OffsetReporter::new("ELSEWHERE");
        let log = recording(&mut reporter);

        let measured = reporter.measure(&spaces_at(100.0), Rect::new(0.0, 40.0, 1.0, 1.0));
        reporter.flush();

        assert_eq!(measured, 0.0);
        assert_eq!(*log.borrow(), vec![0.0]);
    }

    #[test]
    fn test_unsubscribe_stops_delivery() {
        let mut reporter = OffsetReporter::new("SCROLL");
        let log = Rc::new(RefCell::new(Vec::new()));
        let sink = log.clone();
        let id = reporter.subscribe(move |offset: f32| sink.borrow_mut().push(offset));

        reporter.record(-1.0);
        reporter.flush();
        assert!(reporter.unsubscribe(id));
        assert!(!reporter.unsubscribe(id));
        reporter.record(-2.0);
        reporter.flush();

        assert_eq!(*log.borrow(), vec![-1.0]);
        assert_eq!(reporter.observer_count(), 0);
    }

    #[test]
    fn test_late_subscriber_receives_latest() {
        let mut reporter = OffsetReporter::new("SCROLL");
        reporter.report(&spaces_at(0.0), Rect::new(0.0, -100.0, 1.0, 1.0));

        let log = recording(&mut reporter);
        assert_eq!(*log.borrow(), vec![-100.0]);

        // Unchanged layout: still a single delivery
        reporter.report(&spaces_at(0.0), Rect::new(0.0, -100.0, 1.0, 1.0));
        assert_eq!(*log.borrow(), vec![-100.0]);
    }

    #[test]
    fn test_flush_without_measurement() {
        let mut reporter = OffsetReporter::new("SCROLL");
        assert_eq!(reporter.flush(), None);
        assert_eq!(reporter.latest(), None);
    }
}
