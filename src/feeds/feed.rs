//! # Feed contract and subscription handle.
//!
//! [`Feed`] is the seam between the controller and its externally-owned data
//! sources. The controller receives two `Arc<dyn Feed<_>>` handles by explicit
//! dependency injection and only ever calls the two operations below; fetch,
//! caching, and retry policy belong entirely to the implementor.
//!
//! ## Contract
//! - `subscribe()` returns an independent [`FeedSubscription`] that observes
//!   emissions sent **after** the call.
//! - `request_refresh()` is fire-and-forget: it asks the producer to publish
//!   its current state and returns immediately. Implementors decide their own
//!   de-duplication/caching policy; callers may treat it as idempotent.
//!
//! ## Example (skeleton)
//! ```rust
//! // struct RegistryFeed { /* http client, FeedBus, ... */ }
//! //
//! // impl Feed<InputsSnapshot> for RegistryFeed {
//! //     fn subscribe(&self) -> FeedSubscription<InputsSnapshot> { self.bus.subscribe() }
//! //     fn request_refresh(&self) { /* schedule a fetch, publish on completion */ }
//! // }
//! ```

use tokio::sync::broadcast;

use crate::error::FeedError;

/// Contract for a push-based data source.
///
/// `T` is the emission payload, delivered whole on every change (never a
/// delta).
pub trait Feed<T>: Send + Sync + 'static {
    /// Creates a new, independent subscription to this feed.
    fn subscribe(&self) -> FeedSubscription<T>;

    /// Asks the producer to publish its current state (fire-and-forget).
    fn request_refresh(&self);
}

/// Receiving half of a feed subscription.
///
/// Wraps a broadcast receiver; dropping the handle releases the subscription.
/// [`FeedSubscription::release`] is the explicit form of the same thing.
pub struct FeedSubscription<T> {
    rx: broadcast::Receiver<T>,
}

impl<T: Clone> FeedSubscription<T> {
    pub(crate) fn new(rx: broadcast::Receiver<T>) -> Self {
        Self { rx }
    }

    /// Receives the next emission.
    ///
    /// ### Errors
    /// - [`FeedError::Lagged`] - this subscription fell behind; the skipped
    ///   emissions are superseded by whatever arrives next.
    /// - [`FeedError::Closed`] - the producer is gone; no further emissions.
    pub async fn recv(&mut self) -> Result<T, FeedError> {
        match self.rx.recv().await {
            Ok(value) => Ok(value),
            Err(broadcast::error::RecvError::Closed) => Err(FeedError::Closed),
            Err(broadcast::error::RecvError::Lagged(skipped)) => Err(FeedError::Lagged { skipped }),
        }
    }

    /// Releases the subscription; no further emissions are observed.
    ///
    /// Equivalent to dropping the handle.
    pub fn release(self) {}
}
