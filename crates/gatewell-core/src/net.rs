//! Replicated object state.
//!
//! Every networked world object carries a small replicated key/value store.
//! This module provides the [`NetworkedState`] seam consumed by the plate and
//! an in-memory [`ReplicatedObject`] implementation used by the simulation
//! driver and tests.
//!
//! # Validity
//!
//! A freshly spawned object is *invalid* until its replicated state has
//! completed initial synchronization (late join, object pooling). Consumers
//! must treat an invalid object as "not yet initialized" and retry next tick
//! rather than acting on default values.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Replicated key under which a plate stores its public/private flag.
///
/// This is the plate's only durable state; everything else is rebuilt from
/// live detection after a restart.
pub const IS_PUBLIC_KEY: &str = "pressure_plate_is_public";

// =============================================================================
// NetworkedState
// =============================================================================

/// Per-object replicated key/value state.
///
/// The store itself resolves concurrent writes from multiple clients;
/// consumers perform plain read-modify-write sequences against it.
pub trait NetworkedState {
    /// Returns true once initial synchronization has completed.
    fn is_valid(&self) -> bool;

    /// Reads a replicated boolean. Unset keys read as `false`.
    fn get_bool(&self, key: &str) -> bool;

    /// Writes a replicated boolean.
    fn set_bool(&mut self, key: &str, value: bool);
}

// =============================================================================
// ReplicatedObject
// =============================================================================

/// In-memory replicated store for a single world object.
///
/// Serializable so a host process can persist and restore replicated state
/// across restarts; transient consumers only ever see it through the
/// [`NetworkedState`] trait.
///
/// # Example
///
/// ```
/// use gatewell_core::net::{NetworkedState, ReplicatedObject, IS_PUBLIC_KEY};
///
/// let mut object = ReplicatedObject::synced();
/// assert!(!object.get_bool(IS_PUBLIC_KEY));
///
/// object.set_bool(IS_PUBLIC_KEY, true);
/// assert!(object.get_bool(IS_PUBLIC_KEY));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReplicatedObject {
    /// Whether initial synchronization has completed.
    synced: bool,
    /// Replicated boolean values keyed by name.
    bools: BTreeMap<String, bool>,
}

impl ReplicatedObject {
    /// Creates an unsynchronized object, as seen right after spawn.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an object whose initial synchronization has already completed.
    #[must_use]
    pub fn synced() -> Self {
        Self {
            synced: true,
            bools: BTreeMap::new(),
        }
    }

    /// Marks initial synchronization as complete.
    pub fn mark_synced(&mut self) {
        self.synced = true;
    }
}

impl NetworkedState for ReplicatedObject {
    fn is_valid(&self) -> bool {
        self.synced
    }

    fn get_bool(&self, key: &str) -> bool {
        self.bools.get(key).copied().unwrap_or(false)
    }

    fn set_bool(&mut self, key: &str, value: bool) {
        self.bools.insert(key.to_string(), value);
    }
}

// =============================================================================
// Tests
// =============================================================================
