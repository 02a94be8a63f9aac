//! Push-based data feeds: the boundary contract and the broadcast bus.
//!
//! This module groups the feed **contract** and the in-process **bus** the
//! controller consumes emissions from.
//!
//! ## Contents
//! - [`Feed`], [`FeedSubscription`] subscribe/refresh contract and receive handle
//! - [`FeedBus`] thin wrapper over `tokio::sync::broadcast` with a refresh
//!   side channel
//!
//! ## Quick reference
//! - **Publishers**: whatever owns the data (a registry client, a cluster
//!   client, a test fixture).
//! - **Consumers**: `InputListController::run()` (one subscription per feed),
//!   plus any other interested party - subscriptions are independent.

mod bus;
mod feed;

pub use bus::FeedBus;
pub use feed::{Feed, FeedSubscription};
