//! Node descriptor and the node-feed payload.
//!
//! The controller treats the node as an opaque value beyond presence/absence;
//! everything but the id is carried through for the renderer.

use serde::{Deserialize, Serialize};

/// The currently viewed processing node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Identifier of the node.
    pub id: String,

    /// Remaining descriptor fields (hostname, transport address, ...), kept
    /// opaque for the renderer.
    #[serde(flatten)]
    pub details: serde_json::Map<String, serde_json::Value>,
}

impl Node {
    /// Creates a bare descriptor with no extra details.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            details: serde_json::Map::new(),
        }
    }
}

/// Payload of a node-feed emission: the current node descriptor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    /// The current node.
    pub node: Node,
}

impl NodeSnapshot {
    /// Creates a snapshot carrying the given descriptor.
    pub fn new(node: Node) -> Self {
        Self { node }
    }
}
