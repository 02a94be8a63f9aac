//! Render-ready view model.
//!
//! One complete, self-contained snapshot per publication; the renderer never
//! sees a half-updated pair of groups.

use serde::Serialize;

use crate::model::{Input, Node};

/// Snapshot handed to the renderer on every state change.
///
/// While `ready` is false the snapshot is the loading placeholder: empty
/// groups and no node, regardless of what has partially arrived. Once the
/// gate opens it stays open across subsequent re-emissions.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ViewModel {
    /// False until both an inputs snapshot and a node have arrived.
    pub ready: bool,
    /// Cluster-wide inputs, in natural title order.
    pub global_inputs: Vec<Input>,
    /// Node-only inputs, in natural title order.
    pub local_inputs: Vec<Input>,
    /// The currently viewed node, once received.
    pub node: Option<Node>,
    /// True if the viewer may be offered the input-creation control.
    pub can_create: bool,
}

impl ViewModel {
    /// The placeholder published before the loading gate opens.
    pub fn loading(can_create: bool) -> Self {
        Self {
            ready: false,
            global_inputs: Vec::new(),
            local_inputs: Vec::new(),
            node: None,
            can_create,
        }
    }

    /// Number of global inputs configured on this node.
    pub fn global_count(&self) -> usize {
        self.global_inputs.len()
    }

    /// Number of local inputs configured on this node.
    pub fn local_count(&self) -> usize {
        self.local_inputs.len()
    }

    /// Total number of configured inputs.
    pub fn total_count(&self) -> usize {
        self.global_count() + self.local_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::InputScope;

    #[test]
    fn loading_placeholder_has_no_content() {
        let view = ViewModel::loading(true);
        assert!(!view.ready);
        assert_eq!(view.total_count(), 0);
        assert!(view.node.is_none());
        assert!(view.can_create);
    }

    #[test]
    fn counts_track_the_groups() {
        let view = ViewModel {
            ready: true,
            global_inputs: vec![Input::new("a", "A", InputScope::Global)],
            local_inputs: vec![
                Input::new("b", "B", InputScope::Local),
                Input::new("c", "C", InputScope::Local),
            ],
            node: Some(Node::new("node-1")),
            can_create: false,
        };
        assert_eq!(view.global_count(), 1);
        assert_eq!(view.local_count(), 2);
        assert_eq!(view.total_count(), 3);
    }
}
