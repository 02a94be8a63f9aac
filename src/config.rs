//! # Viewer and channel configuration.
//!
//! Provides [`Config`], the per-controller settings bundle.
//!
//! Config is used in two ways:
//! 1. **Controller creation**: `InputListController::builder(config, ..)`
//! 2. **Bus sizing**: `FeedBus::new(config.bus_capacity_clamped())`
//!
//! ## Sentinel values
//! - `bus_capacity = 0` → clamped to 1 by [`Config::bus_capacity_clamped`]

use std::collections::HashSet;

/// Permission required for the creation control to be offered to the viewer.
pub const CREATE_INPUTS: &str = "inputs:create";

/// Configuration for an input-list controller.
///
/// Defines:
/// - **Viewer identity**: the permission strings granted to the current viewer
/// - **Channel sizing**: ring-buffer capacity for feed broadcast channels
///
/// ## Field semantics
/// - `permissions`: used only to gate the creation control in the view model,
///   never by the partition logic
/// - `bus_capacity`: feed ring buffer size (min 1; clamp via
///   [`Config::bus_capacity_clamped`])
///
/// ## Notes
/// All fields are public for flexibility. Feeds emit whole snapshots, so a
/// small ring buffer suffices; a lagging consumer re-syncs on the next
/// emission.
#[derive(Clone, Debug)]
pub struct Config {
    /// Permission strings granted to the current viewer.
    pub permissions: HashSet<String>,

    /// Capacity of feed broadcast channels created from this config.
    ///
    /// Subscriptions that lag behind more than `bus_capacity` emissions
    /// observe [`FeedError::Lagged`](crate::FeedError::Lagged) and skip the
    /// superseded items.
    pub bus_capacity: usize,
}

impl Config {
    /// Creates a config for a viewer holding the given permissions.
    pub fn with_permissions<I, S>(permissions: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            permissions: permissions.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }

    /// True if the viewer holds the given permission.
    #[inline]
    pub fn can(&self, permission: &str) -> bool {
        self.permissions.contains(permission)
    }

    /// True if the viewer may be offered the input-creation control.
    #[inline]
    pub fn can_create_inputs(&self) -> bool {
        self.can(CREATE_INPUTS)
    }

    /// Returns a bus capacity clamped to a minimum of 1.
    ///
    /// [`FeedBus`](crate::FeedBus) should use this value to avoid constructing
    /// an invalid channel.
    #[inline]
    pub fn bus_capacity_clamped(&self) -> usize {
        self.bus_capacity.max(1)
    }
}

impl Default for Config {
    /// Default configuration:
    ///
    /// - `permissions = {}` (no creation control)
    /// - `bus_capacity = 64` (snapshots are self-contained; a small ring is enough)
    fn default() -> Self {
        Self {
            permissions: HashSet::new(),
            bus_capacity: 64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_viewer_cannot_create_inputs() {
        let cfg = Config::default();
        assert!(!cfg.can_create_inputs());
    }

    #[test]
    fn create_permission_is_recognized() {
        let cfg = Config::with_permissions([CREATE_INPUTS]);
        assert!(cfg.can_create_inputs());
        assert!(!cfg.can("inputs:terminate"));
    }

    #[test]
    fn zero_capacity_clamps_to_one() {
        let cfg = Config {
            bus_capacity: 0,
            ..Config::default()
        };
        assert_eq!(cfg.bus_capacity_clamped(), 1);
    }
}
