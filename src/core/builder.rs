use std::sync::Arc;

use tokio::sync::watch;

use crate::config::Config;
use crate::feeds::Feed;
use crate::model::{InputsSnapshot, NodeSnapshot};
use crate::observers::{Observe, ObserverSet};

use super::controller::InputListController;
use super::view::ViewModel;

/// Builder wiring the two feed handles and optional observers into a
/// controller.
///
/// Both feeds are required and injected explicitly; there is no implicit
/// registry to discover them from.
pub struct ControllerBuilder {
    cfg: Config,
    inputs_feed: Arc<dyn Feed<InputsSnapshot>>,
    node_feed: Arc<dyn Feed<NodeSnapshot>>,
    observers: Vec<Arc<dyn Observe>>,
}

impl ControllerBuilder {
    /// Creates a new builder over the given configuration and feed handles.
    pub fn new(
        cfg: Config,
        inputs_feed: Arc<dyn Feed<InputsSnapshot>>,
        node_feed: Arc<dyn Feed<NodeSnapshot>>,
    ) -> Self {
        Self {
            cfg,
            inputs_feed,
            node_feed,
            observers: Vec::new(),
        }
    }

    /// Sets the view observers (renderers, loggers, metrics).
    ///
    /// Observers receive every published [`ViewModel`] through dedicated
    /// workers with bounded queues.
    pub fn with_observers(mut self, observers: Vec<Arc<dyn Observe>>) -> Self {
        self.observers = observers;
        self
    }

    /// Adds a single observer.
    pub fn with_observer(mut self, observer: Arc<dyn Observe>) -> Self {
        self.observers.push(observer);
        self
    }

    /// Builds the controller.
    ///
    /// The watch channel starts at the loading placeholder. When observers
    /// are registered this must be called within a Tokio runtime (their
    /// workers are spawned here).
    pub fn build(self) -> Arc<InputListController> {
        let initial = ViewModel::loading(self.cfg.can_create_inputs());
        let (view_tx, _view_rx) = watch::channel(initial);
        let observers = Arc::new(ObserverSet::new(self.observers));

        Arc::new(InputListController::new_internal(
            self.cfg,
            self.inputs_feed,
            self.node_feed,
            observers,
            view_tx,
        ))
    }
}
