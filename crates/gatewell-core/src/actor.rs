//! Actor identity and location queries.
//!
//! This module provides:
//! - [`ActorId`]: Unique identifier for live actors (players, NPCs)
//! - [`ActorLocator`]: The query seam plates use to find nearby actors
//! - [`ActorRoster`]: In-memory locator backed by a `BTreeMap`
//!
//! # Architecture
//!
//! Plates never own actors. They record at most an [`ActorId`] back-reference
//! and resolve it through an [`ActorLocator`] when attribution is needed. An
//! actor disconnecting between ticks is therefore harmless: the stale ID is
//! simply absent from subsequent queries.
//!
//! # Example
//!
//! ```
//! use gatewell_core::actor::{ActorLocator, ActorRoster};
//! use glam::Vec3;
//!
//! let mut roster = ActorRoster::new();
//! let id = roster.spawn(Vec3::new(1.5, 0.2, 0.0));
//!
//! let actors = roster.all_actors();
//! assert_eq!(actors, vec![(id, Vec3::new(1.5, 0.2, 0.0))]);
//! ```

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};

// =============================================================================
// ActorId
// =============================================================================

/// Unique identifier for an actor.
///
/// `ActorId` is a newtype wrapper around `u64` that provides type safety and
/// a clear semantic meaning. IDs are assigned monotonically by the roster and
/// never reused within a session.
///
/// # Ordering
///
/// Actor IDs are ordered by their numeric value, which gives the roster a
/// deterministic iteration order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ActorId(u64);

impl ActorId {
    /// Creates a new `ActorId` from a raw `u64` value.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw `u64` value of this identifier.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Debug for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ActorId({})", self.0)
    }
}

impl fmt::Display for ActorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ActorId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<ActorId> for u64 {
    fn from(id: ActorId) -> Self {
        id.0
    }
}

// =============================================================================
// ActorLocator
// =============================================================================

/// Query seam for the current set of live actors and their positions.
///
/// The locator is a synchronous in-process call, O(number of live actors).
/// The returned list is sorted by [`ActorId`] so that "first actor in range"
/// decisions are deterministic across ticks and platforms.
pub trait ActorLocator {
    /// Returns every live actor and its world position, sorted by ID.
    fn all_actors(&self) -> Vec<(ActorId, Vec3)>;

    /// Returns the position of a single actor, if it is still live.
    fn position_of(&self, id: ActorId) -> Option<Vec3>;
}

// =============================================================================
// ActorRoster
// =============================================================================

/// In-memory actor locator backed by a `BTreeMap`.
///
/// The roster tracks actor positions for a single simulation region. It is
/// the production implementation behind [`ActorLocator`]; a dedicated server
/// would feed it from its connection layer each tick.
///
/// # Determinism
///
/// `BTreeMap` storage means `all_actors()` always yields actors in ID order,
/// so two plates scanning the same roster resolve the same "first" actor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ActorRoster {
    /// Monotonically increasing actor ID counter.
    next_id: u64,
    /// Actor positions keyed by ID.
    actors: BTreeMap<ActorId, Vec3>,
}

impl ActorRoster {
    /// Creates an empty roster.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Spawns an actor at the given position and returns its ID.
    pub fn spawn(&mut self, position: Vec3) -> ActorId {
        let id = ActorId::new(self.next_id);
        self.next_id += 1;
        self.actors.insert(id, position);
        id
    }

    /// Removes an actor from the roster.
    ///
    /// Returns true if the actor was present.
    pub fn despawn(&mut self, id: ActorId) -> bool {
        self.actors.remove(&id).is_some()
    }

    /// Moves an actor to a new position.
    ///
    /// Returns true if the actor was present and updated.
    pub fn set_position(&mut self, id: ActorId, position: Vec3) -> bool {
        match self.actors.get_mut(&id) {
            Some(slot) => {
                *slot = position;
                true
            }
            None => false,
        }
    }

    /// Returns the number of live actors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.actors.len()
    }

    /// Returns true if no actors are live.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actors.is_empty()
    }
}

impl ActorLocator for ActorRoster {
    fn all_actors(&self) -> Vec<(ActorId, Vec3)> {
        self.actors.iter().map(|(id, pos)| (*id, *pos)).collect()
    }

    fn position_of(&self, id: ActorId) -> Option<Vec3> {
        self.actors.get(&id).copied()
    }
}

// =============================================================================
// Tests
// =============================================================================
