//! # Input entity and the inputs-feed payload.
//!
//! An [`Input`] is immutable from the controller's perspective: the feed only
//! ever delivers whole replacement collections ([`InputsSnapshot`]), never
//! deltas.
//!
//! ## Scope decoding
//! On the wire the scope is the boolean field `global`. [`InputScope`] decodes
//! `true` → `Global` and `false` → `Local`, and **rejects anything else** with
//! a typed serde error. The partition logic therefore never has to guess what
//! a malformed flag meant; a bad entity fails fast at the feed boundary.

use std::fmt;

use serde::de::{Deserializer, Visitor};
use serde::ser::Serializer;
use serde::{Deserialize, Serialize};

/// Where an input is active: across the whole cluster, or on one node only.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputScope {
    /// Active cluster-wide, not tied to one node.
    Global,
    /// Active only on the currently viewed node.
    Local,
}

impl InputScope {
    /// True for [`InputScope::Global`].
    #[inline]
    pub fn is_global(self) -> bool {
        matches!(self, InputScope::Global)
    }

    /// True for [`InputScope::Local`].
    #[inline]
    pub fn is_local(self) -> bool {
        matches!(self, InputScope::Local)
    }

    /// Returns a short stable label (snake_case) for use in logs/metrics.
    pub fn as_label(self) -> &'static str {
        match self {
            InputScope::Global => "global",
            InputScope::Local => "local",
        }
    }
}

impl From<bool> for InputScope {
    fn from(global: bool) -> Self {
        if global {
            InputScope::Global
        } else {
            InputScope::Local
        }
    }
}

impl From<InputScope> for bool {
    fn from(scope: InputScope) -> Self {
        scope.is_global()
    }
}

impl Serialize for InputScope {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_bool(self.is_global())
    }
}

impl<'de> Deserialize<'de> for InputScope {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct ScopeVisitor;

        impl Visitor<'_> for ScopeVisitor {
            type Value = InputScope;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "a boolean scope flag (true = global, false = local)")
            }

            fn visit_bool<E: serde::de::Error>(self, global: bool) -> Result<Self::Value, E> {
                Ok(InputScope::from(global))
            }
        }

        deserializer.deserialize_bool(ScopeVisitor)
    }
}

/// A configured data-ingestion input.
///
/// Carries a unique id, a human-readable title (the sort key for listings),
/// the scope flag, and an opaque configuration payload that the controller
/// never inspects.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Input {
    /// Unique identifier.
    pub id: String,

    /// Human-readable title; listings sort on this in natural order.
    pub title: String,

    /// Scope flag, `global` on the wire.
    #[serde(rename = "global")]
    pub scope: InputScope,

    /// Opaque configuration payload (codec, bind address, ...). Passed through
    /// to the renderer untouched.
    #[serde(default)]
    pub attributes: serde_json::Value,
}

impl Input {
    /// Creates an input with an empty configuration payload.
    pub fn new(id: impl Into<String>, title: impl Into<String>, scope: InputScope) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            scope,
            attributes: serde_json::Value::Null,
        }
    }

    /// Attaches a configuration payload.
    #[inline]
    pub fn with_attributes(mut self, attributes: serde_json::Value) -> Self {
        self.attributes = attributes;
        self
    }

    /// Convenience: true if the input is active cluster-wide.
    #[inline]
    pub fn is_global(&self) -> bool {
        self.scope.is_global()
    }
}

/// Payload of an inputs-feed emission: the full current set of inputs.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct InputsSnapshot {
    /// The complete input collection, in registry order.
    pub inputs: Vec<Input>,
}

impl InputsSnapshot {
    /// Creates a snapshot from the full current collection.
    pub fn new(inputs: Vec<Input>) -> Self {
        Self { inputs }
    }

    /// An empty snapshot (a registry with nothing configured).
    pub fn empty() -> Self {
        Self { inputs: Vec::new() }
    }

    /// Number of inputs in the snapshot.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// True if the snapshot carries no inputs.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scope_decodes_from_wire_booleans() {
        let global: Input =
            serde_json::from_value(json!({"id": "a", "title": "A", "global": true})).unwrap();
        assert_eq!(global.scope, InputScope::Global);

        let local: Input =
            serde_json::from_value(json!({"id": "b", "title": "B", "global": false})).unwrap();
        assert_eq!(local.scope, InputScope::Local);
    }

    #[test]
    fn scope_rejects_non_boolean_flags() {
        for bad in [json!("true"), json!(1), json!(null), json!({})] {
            let result: Result<Input, _> =
                serde_json::from_value(json!({"id": "a", "title": "A", "global": bad}));
            let err = result.expect_err("non-boolean scope flag must fail fast");
            assert!(
                err.to_string().contains("boolean scope flag"),
                "unexpected message: {err}"
            );
        }
    }

    #[test]
    fn scope_is_rejected_when_missing() {
        let result: Result<Input, _> = serde_json::from_value(json!({"id": "a", "title": "A"}));
        assert!(result.is_err());
    }

    #[test]
    fn scope_serializes_back_to_a_boolean() {
        let input = Input::new("a", "A", InputScope::Local);
        let wire = serde_json::to_value(&input).unwrap();
        assert_eq!(wire["global"], json!(false));
    }

    #[test]
    fn attributes_default_to_null_and_round_trip() {
        let input: Input =
            serde_json::from_value(json!({"id": "a", "title": "A", "global": true})).unwrap();
        assert_eq!(input.attributes, serde_json::Value::Null);

        let configured = Input::new("b", "B", InputScope::Local)
            .with_attributes(json!({"bind_address": "0.0.0.0", "port": 12201}));
        let wire = serde_json::to_value(&configured).unwrap();
        let back: Input = serde_json::from_value(wire).unwrap();
        assert_eq!(back, configured);
    }

    #[test]
    fn snapshot_reports_emptiness() {
        assert!(InputsSnapshot::empty().is_empty());
        assert_eq!(
            InputsSnapshot::new(vec![Input::new("a", "A", InputScope::Global)]).len(),
            1
        );
    }
}
