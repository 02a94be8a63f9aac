//! # Entity model and feed emission payloads.
//!
//! This module provides the data carried by the two feeds:
//! - [`Input`] - a configured data-ingestion input with its scope flag
//! - [`InputScope`] - `Global`/`Local`, decoded strictly from the wire boolean
//! - [`Node`] - the currently viewed processing node (opaque beyond its id)
//! - [`InputsSnapshot`] / [`NodeSnapshot`] - whole-collection emission payloads

mod input;
mod node;

pub use input::{Input, InputScope, InputsSnapshot};
pub use node::{Node, NodeSnapshot};
