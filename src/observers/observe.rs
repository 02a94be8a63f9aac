//! # Core observer trait
//!
//! `Observe` is the extension point for plugging renderers and other view
//! consumers into the controller. Each observer is driven by a dedicated
//! worker loop fed by a bounded queue owned by the
//! [`ObserverSet`](crate::observers::ObserverSet).
//!
//! ## Contract
//! - Implementations may be slow (layout, I/O, batching) - they do **not**
//!   block the controller nor other observers.
//! - Every delivered snapshot is complete; there is no partial or incremental
//!   update to reassemble.
//! - Each observer **declares** its preferred queue capacity via
//!   [`Observe::queue_capacity`]. If a queue overflows, view updates for that
//!   observer are **dropped** (warn) - the next delivered snapshot fully
//!   supersedes them.

use async_trait::async_trait;

use crate::core::ViewModel;

/// Contract for view-model observers.
///
/// Called from an observer-dedicated worker task. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Observe: Send + Sync + 'static {
    /// Handle one published view snapshot.
    ///
    /// # Parameters
    /// - `view`: Reference to the snapshot (does not transfer ownership)
    async fn on_view(&self, view: &ViewModel);

    /// Human-readable name (for logs/metrics).
    fn name(&self) -> &'static str {
        std::any::type_name::<Self>()
    }

    /// Preferred capacity of this observer's queue.
    ///
    /// On overflow, view updates for this observer are **dropped** (warn).
    fn queue_capacity(&self) -> usize {
        64
    }
}
