//! # Broadcast bus: the in-process feed implementation.
//!
//! [`FeedBus`] is a thin wrapper around [`tokio::sync::broadcast`] that
//! provides non-blocking snapshot publishing to any number of subscriptions,
//! plus a refresh side channel the producer can await.
//!
//! ## Architecture
//! ```text
//! Producer (one):                     Subscribers (many):
//!                                   ┌────► controller subscription
//!   publish(snapshot) ───► FeedBus ─┼────► auxiliary consumer
//!                            ▲      └────► ...
//!   refresh_requested() ◄────┘
//!         (Notify)          request_refresh() from any consumer
//! ```
//!
//! ## Rules
//! - **Non-blocking publish**: `publish()` never blocks; it calls
//!   `broadcast::Sender::send`.
//! - **Bounded capacity**: a single ring buffer stores recent emissions for
//!   all subscriptions.
//! - **Lag handling**: slow subscriptions get [`FeedError::Lagged`] and skip
//!   the superseded snapshots.
//! - **No persistence**: an emission published while nobody is subscribed is
//!   dropped.
//! - **Refresh coalescing**: refresh requests are a [`Notify`] permit; several
//!   requests arriving before the producer looks collapse into one wake-up.
//!   A request issued before the producer first awaits is not lost.
//!
//! [`FeedError::Lagged`]: crate::FeedError::Lagged

use std::sync::Arc;

use tokio::sync::{broadcast, Notify};

use super::feed::{Feed, FeedSubscription};

/// Broadcast channel for feed emissions.
///
/// Cheap to clone; clones share the same channel and refresh signal, so the
/// producer typically keeps one clone and hands others out as
/// `Arc<dyn Feed<T>>`.
#[derive(Clone, Debug)]
pub struct FeedBus<T> {
    tx: broadcast::Sender<T>,
    refresh: Arc<Notify>,
}

impl<T: Clone + Send + 'static> FeedBus<T> {
    /// Creates a new bus with the given ring-buffer capacity.
    ///
    /// The minimum capacity is 1 (clamped).
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        let (tx, _rx) = broadcast::channel::<T>(capacity);
        Self {
            tx,
            refresh: Arc::new(Notify::new()),
        }
    }

    /// Publishes an emission to all active subscriptions.
    ///
    /// If there are no subscriptions, the emission is dropped (this function
    /// still returns immediately).
    pub fn publish(&self, value: T) {
        let _ = self.tx.send(value);
    }

    /// Waits until at least one consumer has requested a refresh.
    ///
    /// Producer-side half of [`Feed::request_refresh`]. A pending request is
    /// consumed; concurrent requests coalesce.
    pub async fn refresh_requested(&self) {
        self.refresh.notified().await;
    }

    /// Number of currently active subscriptions.
    pub fn subscription_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl<T: Clone + Send + 'static> Feed<T> for FeedBus<T> {
    fn subscribe(&self) -> FeedSubscription<T> {
        FeedSubscription::new(self.tx.subscribe())
    }

    fn request_refresh(&self) {
        self.refresh.notify_one();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FeedError;

    #[tokio::test]
    async fn subscription_observes_emissions_sent_after_subscribe() {
        let bus = FeedBus::<u32>::new(8);
        bus.publish(1); // nobody subscribed; dropped

        let mut sub = bus.subscribe();
        bus.publish(2);
        assert_eq!(sub.recv().await, Ok(2));
    }

    #[tokio::test]
    async fn lagged_subscription_skips_superseded_emissions() {
        let bus = FeedBus::<u32>::new(1);
        let mut sub = bus.subscribe();

        bus.publish(1);
        bus.publish(2);

        assert_eq!(sub.recv().await, Err(FeedError::Lagged { skipped: 1 }));
        assert_eq!(sub.recv().await, Ok(2));
    }

    #[tokio::test]
    async fn dropped_producer_closes_subscriptions() {
        let bus = FeedBus::<u32>::new(8);
        let mut sub = bus.subscribe();
        drop(bus);

        assert_eq!(sub.recv().await, Err(FeedError::Closed));
    }

    #[tokio::test]
    async fn refresh_request_is_not_lost_when_producer_is_late() {
        let bus = FeedBus::<u32>::new(8);
        bus.request_refresh();

        // The permit was stored; this completes immediately.
        bus.refresh_requested().await;
    }

    #[tokio::test]
    async fn clones_share_the_channel() {
        let bus = FeedBus::<u32>::new(8);
        let producer = bus.clone();

        let mut sub = bus.subscribe();
        assert_eq!(bus.subscription_count(), 1);

        producer.publish(7);
        assert_eq!(sub.recv().await, Ok(7));
    }
}
