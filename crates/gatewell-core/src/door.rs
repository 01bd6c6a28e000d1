//! Doors and the plate-powering registry.
//!
//! This module provides:
//! - [`DoorId`]: Unique identifier for doors
//! - [`Door`]: A powered door tracking the set of plates holding it open
//! - [`DoorRegistry`]: Container with range queries from a plate position
//!
//! # Powering protocol
//!
//! Many plates can hold one door open. A plate adds itself to the door's
//! powering set when it transitions to pressed in range, and removes itself
//! when it transitions to released. The releasing plate checks the powering
//! set (excluding itself, to avoid a stale self-reference at the moment of
//! removal) before closing: the door closes only when the last powering
//! plate releases.
//!
//! The door is the sole owner and arbiter of its powering set; plates only
//! ever add or remove themselves. `open()` is idempotent and is re-asserted
//! every tick a plate stays pressed, so late joiners and desynced observers
//! converge on the authoritative state.
//!
//! # Determinism
//!
//! Doors live in a `BTreeMap` and powering sets in `BTreeSet`s, so range
//! queries and membership iteration are ordered by ID across platforms.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use glam::Vec3;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::actor::ActorId;
use crate::plate::PlateId;

// =============================================================================
// DoorId
// =============================================================================

/// Unique identifier for a door.
///
/// Newtype wrapper around `u64`, ordered by numeric value for deterministic
/// registry iteration.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct DoorId(u64);

impl DoorId {
    /// Creates a new `DoorId` from a raw `u64` value.
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

impl fmt::Debug for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DoorId({})", self.0)
    }
}

impl fmt::Display for DoorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for DoorId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<DoorId> for u64 {
    fn from(id: DoorId) -> Self {
        id.0
    }
}

// =============================================================================
// Door
// =============================================================================

/// A powered door.
///
/// Doors do not decide when to open or close; plates drive them through the
/// powering protocol. The door records who last drove it for attribution.
///
/// # Example
///
/// ```
/// use gatewell_core::actor::ActorId;
/// use gatewell_core::door::{Door, DoorId};
/// use gatewell_core::plate::PlateId;
/// use glam::Vec3;
///
/// let mut door = Door::new(DoorId::new(0), Vec3::ZERO);
/// door.add_powering_plate(PlateId::new(7));
/// door.open(ActorId::new(1), PlateId::new(7));
///
/// assert!(door.is_open());
/// assert!(door.powering_plates().contains(&PlateId::new(7)));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Door {
    id: DoorId,
    position: Vec3,
    /// Configured hold-open time in seconds; `None` defers to the plate's
    /// fallback delay.
    open_time: Option<f32>,
    is_open: bool,
    /// Actor attributed with the most recent open/close.
    last_user: Option<ActorId>,
    /// Plates currently holding this door open.
    powering: BTreeSet<PlateId>,
}

impl Door {
    /// Creates a closed door with no configured open time.
    #[must_use]
    pub fn new(id: DoorId, position: Vec3) -> Self {
        Self {
            id,
            position,
            open_time: None,
            is_open: false,
            last_user: None,
            powering: BTreeSet::new(),
        }
    }

    /// Sets the configured hold-open time.
    #[must_use]
    pub fn with_open_time(mut self, seconds: f32) -> Self {
        self.open_time = Some(seconds);
        self
    }

    /// Returns this door's ID.
    #[must_use]
    pub const fn id(&self) -> DoorId {
        self.id
    }

    /// Returns this door's world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns the configured hold-open time, if any.
    #[must_use]
    pub const fn open_time(&self) -> Option<f32> {
        self.open_time
    }

    /// Returns true if the door is currently open.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    /// Returns the actor attributed with the most recent open/close.
    #[must_use]
    pub const fn last_user(&self) -> Option<ActorId> {
        self.last_user
    }

    /// Returns the set of plates currently holding this door open.
    #[must_use]
    pub const fn powering_plates(&self) -> &BTreeSet<PlateId> {
        &self.powering
    }

    /// Opens the door on behalf of `actor`, driven by `plate`.
    ///
    /// Idempotent: re-opening an already-open door only refreshes the
    /// attribution.
    pub fn open(&mut self, actor: ActorId, plate: PlateId) {
        if !self.is_open {
            debug!(door = %self.id, %plate, %actor, "door opened");
        }
        self.is_open = true;
        self.last_user = Some(actor);
    }

    /// Closes the door on behalf of `actor`, driven by `plate`.
    ///
    /// The caller is responsible for checking the powering set first; the
    /// door itself closes unconditionally.
    pub fn close(&mut self, actor: ActorId, plate: PlateId) {
        if self.is_open {
            debug!(door = %self.id, %plate, %actor, "door closed");
        }
        self.is_open = false;
        self.last_user = Some(actor);
    }

    /// Adds a plate to the powering set.
    ///
    /// Returns true if the plate was not already powering this door.
    pub fn add_powering_plate(&mut self, plate: PlateId) -> bool {
        let added = self.powering.insert(plate);
        if added {
            debug!(door = %self.id, %plate, powering = self.powering.len(), "powering plate added");
        }
        added
    }

    /// Removes a plate from the powering set.
    ///
    /// Returns true if the plate was present.
    pub fn remove_powering_plate(&mut self, plate: PlateId) -> bool {
        let removed = self.powering.remove(&plate);
        if removed {
            debug!(door = %self.id, %plate, powering = self.powering.len(), "powering plate removed");
        }
        removed
    }

    /// Returns true if any plate other than `plate` is powering this door.
    #[must_use]
    pub fn powered_by_other(&self, plate: PlateId) -> bool {
        self.powering.iter().any(|p| *p != plate)
    }
}

// =============================================================================
// DoorRegistry
// =============================================================================

/// Container for every door in a simulation region.
///
/// The registry answers "which doors are within activation range of this
/// plate position" with a sphere test against a registry-wide search radius.
/// Results are sorted by [`DoorId`] for deterministic signaling order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DoorRegistry {
    /// Monotonically increasing door ID counter.
    next_id: u64,
    /// Door storage with deterministic iteration order.
    doors: BTreeMap<DoorId, Door>,
    /// Plate-to-door activation range.
    search_radius: f32,
}

impl DoorRegistry {
    /// Creates an empty registry with the given activation range.
    #[must_use]
    pub fn new(search_radius: f32) -> Self {
        Self {
            next_id: 0,
            doors: BTreeMap::new(),
            search_radius,
        }
    }

    /// Spawns a door at `position` and returns its ID.
    ///
    /// `open_time` is the door's configured hold-open time; pass `None` to
    /// defer to the plate's fallback delay.
    pub fn spawn(&mut self, position: Vec3, open_time: Option<f32>) -> DoorId {
        let id = DoorId::new(self.next_id);
        self.next_id += 1;
        let mut door = Door::new(id, position);
        if let Some(seconds) = open_time {
            door = door.with_open_time(seconds);
        }
        self.doors.insert(id, door);
        id
    }

    /// Returns a reference to a door by ID.
    #[must_use]
    pub fn get(&self, id: DoorId) -> Option<&Door> {
        self.doors.get(&id)
    }

    /// Returns a mutable reference to a door by ID.
    #[must_use]
    pub fn get_mut(&mut self, id: DoorId) -> Option<&mut Door> {
        self.doors.get_mut(&id)
    }

    /// Returns the IDs of all doors within activation range of `center`,
    /// sorted by ID. The boundary is inclusive.
    #[must_use]
    pub fn find_in_range(&self, center: Vec3) -> Vec<DoorId> {
        let radius_sq = self.search_radius * self.search_radius;
        self.doors
            .iter()
            .filter(|(_, door)| door.position.distance_squared(center) <= radius_sq)
            .map(|(id, _)| *id)
            .collect()
    }

    /// Returns the activation range used by [`DoorRegistry::find_in_range`].
    #[must_use]
    pub const fn search_radius(&self) -> f32 {
        self.search_radius
    }

    /// Returns the number of doors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.doors.len()
    }

    /// Returns true if the registry holds no doors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn plate(id: u64) -> PlateId {
        PlateId::new(id)
    }

    fn actor(id: u64) -> ActorId {
        ActorId::new(id)
    }

    mod door_tests {
        use super::*;

        #[test]
        fn new_door_is_closed_and_unpowered() {
            let door = Door::new(DoorId::new(0), Vec3::ZERO);
            assert!(!door.is_open());
            assert!(door.powering_plates().is_empty());
            assert!(door.last_user().is_none());
            assert!(door.open_time().is_none());
        }

        #[test]
        fn open_is_idempotent() {
            let mut door = Door::new(DoorId::new(0), Vec3::ZERO);
            door.open(actor(1), plate(0));
            door.open(actor(2), plate(0));

            assert!(door.is_open());
            // Attribution follows the most recent driver
            assert_eq!(door.last_user(), Some(actor(2)));
        }

        #[test]
        fn powering_set_ignores_duplicates() {
            let mut door = Door::new(DoorId::new(0), Vec3::ZERO);
            assert!(door.add_powering_plate(plate(1)));
            assert!(!door.add_powering_plate(plate(1)));
            assert_eq!(door.powering_plates().len(), 1);

            assert!(door.remove_powering_plate(plate(1)));
            assert!(!door.remove_powering_plate(plate(1)));
            assert!(door.powering_plates().is_empty());
        }

        #[test]
        fn powered_by_other_excludes_self() {
            let mut door = Door::new(DoorId::new(0), Vec3::ZERO);
            door.add_powering_plate(plate(1));

            assert!(!door.powered_by_other(plate(1)));
            assert!(door.powered_by_other(plate(2)));

            door.add_powering_plate(plate(2));
            assert!(door.powered_by_other(plate(1)));
        }
    }

    mod registry_tests {
        use super::*;

        #[test]
        fn spawn_assigns_monotonic_ids() {
            let mut registry = DoorRegistry::new(6.0);
            let a = registry.spawn(Vec3::ZERO, None);
            let b = registry.spawn(Vec3::ZERO, Some(5.0));

            assert!(a < b);
            assert_eq!(registry.len(), 2);
            assert_eq!(registry.get(b).unwrap().open_time(), Some(5.0));
        }

        #[test]
        fn find_in_range_is_sorted_and_inclusive() {
            let mut registry = DoorRegistry::new(6.0);
            let near = registry.spawn(Vec3::new(3.0, 0.0, 0.0), None);
            let far = registry.spawn(Vec3::new(20.0, 0.0, 0.0), None);
            let boundary = registry.spawn(Vec3::new(6.0, 0.0, 0.0), None);

            let found = registry.find_in_range(Vec3::ZERO);
            assert_eq!(found, vec![near, boundary]);
            assert!(!found.contains(&far));
        }

        #[test]
        fn find_in_range_with_no_doors_is_empty() {
            let registry = DoorRegistry::new(6.0);
            assert!(registry.find_in_range(Vec3::ZERO).is_empty());
            assert!(registry.is_empty());
        }
    }
}
