//! Error types used by the inputvisor subscriptions and controller.
//!
//! This module defines two error enums:
//!
//! - [`FeedError`] - errors observed while receiving from a feed subscription.
//! - [`ControllerError`] - errors raised by the controller lifecycle itself.
//!
//! Both types provide `as_label` for logging/metrics. Malformed entities (an
//! input whose scope flag is not a boolean) are rejected earlier, at the serde
//! decode boundary on [`InputScope`](crate::InputScope); they never reach
//! these types.

use thiserror::Error;

/// # Errors observed on a feed subscription.
///
/// These surface the two failure modes of the underlying broadcast channel.
/// Neither is retried by the controller: a lag is skipped (the next snapshot
/// fully replaces state anyway) and a close permanently silences that feed.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedError {
    /// The feed channel is closed; no further emissions will arrive.
    #[error("feed channel closed")]
    Closed,

    /// The subscription fell behind and skipped `skipped` emissions.
    ///
    /// Feeds deliver whole snapshots, so a later emission supersedes anything
    /// that was skipped.
    #[error("subscription lagged; skipped {skipped} emissions")]
    Lagged {
        /// Number of emissions that were dropped for this subscription.
        skipped: u64,
    },
}

impl FeedError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    ///
    /// # Example
    /// ```
    /// use inputvisor::FeedError;
    ///
    /// assert_eq!(FeedError::Closed.as_label(), "feed_closed");
    /// assert_eq!(FeedError::Lagged { skipped: 3 }.as_label(), "feed_lagged");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            FeedError::Closed => "feed_closed",
            FeedError::Lagged { .. } => "feed_lagged",
        }
    }

    /// True if this error only means missed (superseded) emissions.
    pub fn is_lag(&self) -> bool {
        matches!(self, FeedError::Lagged { .. })
    }
}

/// # Errors raised by the controller lifecycle.
#[non_exhaustive]
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerError {
    /// `run()` was called on a controller that is already running.
    ///
    /// The event loop subscribes and issues the initial refresh requests
    /// exactly once; a second loop would violate that contract.
    #[error("controller is already running")]
    AlreadyRunning,
}

impl ControllerError {
    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(&self) -> &'static str {
        match self {
            ControllerError::AlreadyRunning => "controller_already_running",
        }
    }
}
