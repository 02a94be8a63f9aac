//! # Tri-state fields and the derived partition.
//!
//! "Undefined means not loaded" is made explicit here: every field the loading
//! gate depends on is a [`Loadable`], so "loaded but empty" and "not loaded
//! yet" can never be confused.
//!
//! [`PartitionedState`] is derived, not independently owned: it is created
//! empty when the controller starts, recomputed in full (never incrementally
//! patched) on every inputs emission, and dropped at teardown.

use crate::config::Config;
use crate::model::{Input, InputsSnapshot, Node, NodeSnapshot};
use crate::partition::split_inputs;

use super::view::ViewModel;

/// A value that has either arrived at least once or not at all.
///
/// The default is [`Loadable::NotLoaded`].
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Loadable<T> {
    /// No emission carrying this value has been received yet.
    #[default]
    NotLoaded,
    /// The value as of the most recent emission.
    Loaded(T),
}

impl<T> Loadable<T> {
    /// True once a value has arrived, even an empty one.
    #[inline]
    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    /// Borrows the value, if loaded.
    pub fn as_loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            Loadable::NotLoaded => None,
        }
    }

    /// Consumes the tri-state, yielding the value if loaded.
    pub fn loaded(self) -> Option<T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            Loadable::NotLoaded => None,
        }
    }
}

/// Derived state of the input listing: both groups plus the node descriptor.
///
/// Invariant: whenever the groups are `Loaded`, they were computed together
/// from one snapshot and form a disjoint partition of exactly that snapshot.
/// [`PartitionedState::apply_inputs`] replaces both wholesale, so no mixed
/// generation is ever observable.
#[derive(Clone, Debug, Default)]
pub struct PartitionedState {
    global_inputs: Loadable<Vec<Input>>,
    local_inputs: Loadable<Vec<Input>>,
    node: Loadable<Node>,
}

impl PartitionedState {
    /// Creates the initial, fully unloaded state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recomputes both groups from a full inputs snapshot.
    pub fn apply_inputs(&mut self, snapshot: InputsSnapshot) {
        let (global, local) = split_inputs(snapshot.inputs);
        self.global_inputs = Loadable::Loaded(global);
        self.local_inputs = Loadable::Loaded(local);
    }

    /// Stores the current node descriptor.
    pub fn apply_node(&mut self, snapshot: NodeSnapshot) {
        self.node = Loadable::Loaded(snapshot.node);
    }

    /// The loading gate: true once every field has arrived at least once.
    ///
    /// An empty group counts as present; only "never received" blocks
    /// readiness.
    pub fn is_ready(&self) -> bool {
        self.global_inputs.is_loaded() && self.local_inputs.is_loaded() && self.node.is_loaded()
    }

    /// Assembles the render-ready snapshot.
    ///
    /// Before readiness this is the loading placeholder: no list content, no
    /// node, `ready == false`.
    pub fn to_view(&self, cfg: &Config) -> ViewModel {
        let can_create = cfg.can_create_inputs();
        if !self.is_ready() {
            return ViewModel::loading(can_create);
        }

        ViewModel {
            ready: true,
            global_inputs: self.global_inputs.as_loaded().cloned().unwrap_or_default(),
            local_inputs: self.local_inputs.as_loaded().cloned().unwrap_or_default(),
            node: self.node.as_loaded().cloned(),
            can_create,
        }
    }
}
