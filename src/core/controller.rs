//! # InputListController: two-feed synchronization behind one loading gate.
//!
//! The controller owns one subscription per feed, the derived
//! [`PartitionedState`], and the publication side of the view: a
//! `tokio::sync::watch` channel plus the [`ObserverSet`] fan-out.
//!
//! ## Key responsibilities
//! - subscribe to both feeds, then issue **exactly one** refresh request each
//! - recompute the partition on every inputs emission (full replace)
//! - store the node descriptor on every node emission
//! - publish one complete [`ViewModel`] per change (atomic publication)
//! - release both subscriptions at teardown; never publish afterwards
//!
//! ## Event flow
//! ```text
//! run(token)
//!   ├─► inputs_feed.subscribe()      ┐ one subscription each,
//!   ├─► node_feed.subscribe()        ┘ held by the loop
//!   ├─► inputs_feed.request_refresh()  (fire-and-forget, once)
//!   ├─► node_feed.request_refresh()
//!   └─► loop {
//!         select! {
//!           token.cancelled()   ─► release subscriptions, exit
//!           inputs emission     ─► state.apply_inputs ─► publish(view)
//!           node emission       ─► state.apply_node   ─► publish(view)
//!           Lagged              ─► warn; next snapshot supersedes
//!           Closed              ─► warn; stop polling that feed only
//!         }
//!       }
//! ```
//!
//! The two feeds emit in any relative order, any number of times. The loop
//! never blocks on anything but the select, performs no retries, and owns the
//! derived state outright, so no locking is involved. A feed that never emits
//! leaves the published view in the loading state indefinitely; recovery is
//! the producer's concern.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;

use crate::config::Config;
use crate::error::{ControllerError, FeedError};
use crate::feeds::Feed;
use crate::model::{InputsSnapshot, NodeSnapshot};
use crate::observers::ObserverSet;

use super::state::PartitionedState;
use super::view::ViewModel;

/// Bridges the inputs feed and the node feed into one consistent,
/// render-ready snapshot.
///
/// Construct via [`InputListController::builder`], start with
/// [`InputListController::run`], consume via [`InputListController::watch`]
/// or registered observers.
pub struct InputListController {
    cfg: Config,
    inputs_feed: Arc<dyn Feed<InputsSnapshot>>,
    node_feed: Arc<dyn Feed<NodeSnapshot>>,
    observers: Arc<ObserverSet>,
    view_tx: watch::Sender<ViewModel>,
    started: AtomicBool,
}

impl InputListController {
    /// Returns a builder over the given configuration and feed handles.
    pub fn builder(
        cfg: Config,
        inputs_feed: Arc<dyn Feed<InputsSnapshot>>,
        node_feed: Arc<dyn Feed<NodeSnapshot>>,
    ) -> super::builder::ControllerBuilder {
        super::builder::ControllerBuilder::new(cfg, inputs_feed, node_feed)
    }

    pub(super) fn new_internal(
        cfg: Config,
        inputs_feed: Arc<dyn Feed<InputsSnapshot>>,
        node_feed: Arc<dyn Feed<NodeSnapshot>>,
        observers: Arc<ObserverSet>,
        view_tx: watch::Sender<ViewModel>,
    ) -> Self {
        Self {
            cfg,
            inputs_feed,
            node_feed,
            observers,
            view_tx,
            started: AtomicBool::new(false),
        }
    }

    /// Returns a receiver observing every published view model.
    ///
    /// The channel always holds the latest snapshot, starting at the loading
    /// placeholder; late subscribers see the current value immediately.
    pub fn watch(&self) -> watch::Receiver<ViewModel> {
        self.view_tx.subscribe()
    }

    /// Returns the most recently published view model.
    pub fn view(&self) -> ViewModel {
        self.view_tx.borrow().clone()
    }

    /// Starts the event loop.
    ///
    /// Subscribes to both feeds and issues one refresh request each, then
    /// processes emissions until `token` is cancelled. The returned handle
    /// completes once teardown has released both subscriptions.
    ///
    /// ### Errors
    /// [`ControllerError::AlreadyRunning`] if the loop was started before;
    /// the subscriptions and initial refreshes happen exactly once per
    /// controller.
    pub fn run(
        self: &Arc<Self>,
        token: CancellationToken,
    ) -> Result<JoinHandle<()>, ControllerError> {
        if self.started.swap(true, Ordering::SeqCst) {
            return Err(ControllerError::AlreadyRunning);
        }

        let me = Arc::clone(self);
        Ok(tokio::spawn(async move { me.event_loop(token).await }))
    }

    async fn event_loop(&self, token: CancellationToken) {
        let mut inputs_rx = self.inputs_feed.subscribe();
        let mut node_rx = self.node_feed.subscribe();

        self.inputs_feed.request_refresh();
        self.node_feed.request_refresh();

        let mut state = PartitionedState::new();
        let mut inputs_open = true;
        let mut node_open = true;

        loop {
            tokio::select! {
                _ = token.cancelled() => break,

                emission = inputs_rx.recv(), if inputs_open => match emission {
                    Ok(snapshot) => {
                        state.apply_inputs(snapshot);
                        self.publish(&state);
                    }
                    Err(FeedError::Lagged { skipped }) => {
                        tracing::warn!(skipped, "inputs feed lagged; awaiting the next snapshot");
                    }
                    Err(FeedError::Closed) => {
                        tracing::warn!("inputs feed closed; listing will no longer update");
                        inputs_open = false;
                    }
                },

                emission = node_rx.recv(), if node_open => match emission {
                    Ok(snapshot) => {
                        state.apply_node(snapshot);
                        self.publish(&state);
                    }
                    Err(FeedError::Lagged { skipped }) => {
                        tracing::warn!(skipped, "node feed lagged; awaiting the next descriptor");
                    }
                    Err(FeedError::Closed) => {
                        tracing::warn!("node feed closed; node descriptor will no longer update");
                        node_open = false;
                    }
                },
            }
        }

        inputs_rx.release();
        node_rx.release();
    }

    /// Publishes one complete snapshot to the watch channel and the observers.
    fn publish(&self, state: &PartitionedState) {
        let view = state.to_view(&self.cfg);
        self.view_tx.send_replace(view.clone());
        self.observers.emit(&view);
    }
}
