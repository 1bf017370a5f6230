//! Container width observation.
//!
//! Resizes arrive from outside the controller (window events, layout
//! callbacks). The host publishes into a [`WidthFeed`]; the carousel holds a
//! [`WidthSubscription`] and drains it before it needs geometry. Only the
//! newest width matters, so the feed is a `watch` channel: publishing
//! overwrites and never blocks.

use tokio::sync::watch;

/// Something that can hand out width subscriptions.
pub trait WidthSource {
    /// Start observing. Dropping the returned subscription stops it.
    fn subscribe(&self) -> WidthSubscription;
}

/// Publisher side of width observation.
#[derive(Debug)]
pub struct WidthFeed {
    tx: watch::Sender<f32>,
}

impl Default for WidthFeed {
    fn default() -> Self {
        Self::new()
    }
}

impl WidthFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(0.0);
        Self { tx }
    }

    /// Overwrite the latest width. Works with or without subscribers.
    pub fn publish(&self, width: f32) {
        self.tx.send_replace(width);
    }

    pub fn latest(&self) -> f32 {
        *self.tx.borrow()
    }

    /// Number of live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl WidthSource for WidthFeed {
    fn subscribe(&self) -> WidthSubscription {
        let rx = self.tx.subscribe();
        let initial = *rx.borrow();
        WidthSubscription {
            rx,
            pending: Some(initial),
        }
    }
}

/// Receiving side held by the carousel.
#[derive(Debug)]
pub struct WidthSubscription {
    rx: watch::Receiver<f32>,
    /// Width current at subscription time, delivered on the first drain.
    pending: Option<f32>,
}

impl WidthSubscription {
    /// Newest width published since the last call, if any.
    pub fn take_latest(&mut self) -> Option<f32> {
        match self.rx.has_changed() {
            Ok(true) => {
                self.pending = None;
                Some(*self.rx.borrow_and_update())
            }
            Ok(false) => self.pending.take(),
            // Publisher dropped: nothing new will ever arrive.
            Err(_) => self.pending.take(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_drain_delivers_current_width() {
        let feed = WidthFeed::new();
        feed.publish(900.0);
        let mut sub = feed.subscribe();
        assert_eq!(sub.take_latest(), Some(900.0));
        assert_eq!(sub.take_latest(), None);
    }

    #[test]
    fn only_latest_width_is_kept() {
        let feed = WidthFeed::new();
        let mut sub = feed.subscribe();
        sub.take_latest();

        feed.publish(800.0);
        feed.publish(1200.0);
        assert_eq!(sub.take_latest(), Some(1200.0));
        assert_eq!(sub.take_latest(), None);
    }

    #[test]
    fn dropping_subscription_unsubscribes() {
        let feed = WidthFeed::new();
        let sub = feed.subscribe();
        assert_eq!(feed.subscriber_count(), 1);
        drop(sub);
        assert_eq!(feed.subscriber_count(), 0);
        feed.publish(10.0);
        assert_eq!(feed.latest(), 10.0);
    }

    #[test]
    fn survives_publisher_drop() {
        let feed = WidthFeed::new();
        feed.publish(640.0);
        let mut sub = feed.subscribe();
        drop(feed);
        assert_eq!(sub.take_latest(), Some(640.0));
        assert_eq!(sub.take_latest(), None);
    }
}
