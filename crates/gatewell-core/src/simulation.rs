//! Simulation driver for a region of plates and doors.
//!
//! The `Simulation` struct is the fixed-rate tick boundary: it owns the
//! collaborator services (actor roster, door registry, effect log, ward
//! table) and steps every plate once per tick with a fresh
//! [`TickContext`](crate::plate::TickContext).
//!
//! # Scheduling
//!
//! Single-threaded cooperative stepping: each plate's detection decision and
//! its propagation to all in-range doors complete before the next plate
//! runs, so door powering sets are never observed mid-update. Plates are
//! stepped in ID order (`BTreeMap`) for reproducible tick outcomes.
//!
//! # Example
//!
//! ```
//! use gatewell_core::config::PlateConfig;
//! use gatewell_core::simulation::Simulation;
//! use glam::Vec3;
//!
//! let mut sim = Simulation::new(PlateConfig::default());
//! let plate = sim.spawn_plate(Vec3::ZERO);
//! let door = sim.spawn_door(Vec3::new(3.0, 0.0, 0.0), Some(5.0));
//! sim.actors_mut().spawn(Vec3::new(1.0, 0.0, 0.0));
//!
//! sim.step();
//!
//! assert!(sim.plate(plate).unwrap().is_pressed());
//! assert!(sim.doors().get(door).unwrap().is_open());
//! ```

use std::collections::BTreeMap;
use std::fmt;

use glam::Vec3;

use crate::access::WardTable;
use crate::actor::{ActorId, ActorRoster};
use crate::capability::{Hoverable, Interactable, InteractContext, ItemId};
use crate::config::PlateConfig;
use crate::door::{DoorId, DoorRegistry};
use crate::effect::EffectLog;
use crate::net::ReplicatedObject;
use crate::plate::{PlateId, PressurePlate, TickContext};

/// Fixed timestep for simulation ticks (1/60 second).
pub const FIXED_DT: f32 = 1.0 / 60.0;

/// Owns one simulation region: plates, doors, actors, wards, and the
/// effect sink.
///
/// Hosts embedding the crate can instead drive [`PressurePlate`] directly
/// against their own collaborator implementations; this driver wires up the
/// in-memory ones.
pub struct Simulation {
    config: PlateConfig,
    actors: ActorRoster,
    doors: DoorRegistry,
    effects: EffectLog,
    wards: WardTable,
    plates: BTreeMap<PlateId, PressurePlate>,
    next_plate_id: u64,
    tick: u64,
}

impl fmt::Debug for Simulation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Simulation")
            .field("tick", &self.tick)
            .field("plates", &self.plates.len())
            .field("doors", &self.doors.len())
            .field("actors", &self.actors.len())
            .finish_non_exhaustive()
    }
}

impl Simulation {
    /// Creates an empty simulation with the given plate configuration.
    #[must_use]
    pub fn new(config: PlateConfig) -> Self {
        Self {
            config,
            actors: ActorRoster::new(),
            doors: DoorRegistry::new(config.door_search_radius),
            effects: EffectLog::new(),
            wards: WardTable::new(),
            plates: BTreeMap::new(),
            next_plate_id: 0,
            tick: 0,
        }
    }

    /// Spawns a plate at `position` with an already-synchronized replicated
    /// state handle, and returns its ID.
    pub fn spawn_plate(&mut self, position: Vec3) -> PlateId {
        let id = PlateId::new(self.next_plate_id);
        self.next_plate_id += 1;
        let plate = PressurePlate::new(
            id,
            position,
            self.config,
            Box::new(ReplicatedObject::synced()),
        );
        self.plates.insert(id, plate);
        id
    }

    /// Spawns a door at `position` and returns its ID.
    ///
    /// `open_time` is the door's configured hold-open time; pass `None` to
    /// defer to the plate fallback delay.
    pub fn spawn_door(&mut self, position: Vec3, open_time: Option<f32>) -> DoorId {
        self.doors.spawn(position, open_time)
    }

    /// Advances every plate by one fixed tick.
    pub fn step(&mut self) {
        self.step_dt(FIXED_DT);
    }

    /// Advances every plate by one tick of `dt` seconds.
    ///
    /// Plates run to completion one at a time in ID order; the tick counter
    /// advances once per call.
    pub fn step_dt(&mut self, dt: f32) {
        for plate in self.plates.values_mut() {
            let mut ctx = TickContext {
                actors: &self.actors,
                doors: &mut self.doors,
                effects: &mut self.effects,
            };
            plate.fixed_update(dt, &mut ctx);
        }
        self.tick += 1;
    }

    /// Routes a use-key interaction to a plate.
    ///
    /// Returns false for unknown plates and for interactions the plate does
    /// not handle.
    pub fn interact(&mut self, plate: PlateId, actor: ActorId, hold: bool) -> bool {
        let ctx = InteractContext {
            access: &self.wards,
        };
        match self.plates.get_mut(&plate) {
            Some(target) => target.interact(actor, hold, &ctx),
            None => false,
        }
    }

    /// Routes an item offer to a plate.
    pub fn use_item(&mut self, plate: PlateId, actor: ActorId, item: &ItemId) -> bool {
        let ctx = InteractContext {
            access: &self.wards,
        };
        match self.plates.get_mut(&plate) {
            Some(target) => target.use_item(actor, item, &ctx),
            None => false,
        }
    }

    /// Returns a plate's hover text, or `None` for unknown plates.
    #[must_use]
    pub fn hover_text(&self, plate: PlateId) -> Option<String> {
        self.plates.get(&plate).map(Hoverable::hover_text)
    }

    /// Returns a plate's hover name, or `None` for unknown plates.
    #[must_use]
    pub fn hover_name(&self, plate: PlateId) -> Option<String> {
        self.plates.get(&plate).map(Hoverable::hover_name)
    }

    /// Returns the current tick count.
    #[must_use]
    pub const fn tick(&self) -> u64 {
        self.tick
    }

    /// Returns a plate by ID.
    #[must_use]
    pub fn plate(&self, id: PlateId) -> Option<&PressurePlate> {
        self.plates.get(&id)
    }

    /// Returns the actor roster.
    #[must_use]
    pub const fn actors(&self) -> &ActorRoster {
        &self.actors
    }

    /// Returns the actor roster mutably (spawn/despawn/move actors).
    pub fn actors_mut(&mut self) -> &mut ActorRoster {
        &mut self.actors
    }

    /// Returns the door registry.
    #[must_use]
    pub const fn doors(&self) -> &DoorRegistry {
        &self.doors
    }

    /// Returns the door registry mutably.
    pub fn doors_mut(&mut self) -> &mut DoorRegistry {
        &mut self.doors
    }

    /// Returns the effect log.
    #[must_use]
    pub const fn effects(&self) -> &EffectLog {
        &self.effects
    }

    /// Returns the effect log mutably (drain into the host's renderer).
    pub fn effects_mut(&mut self) -> &mut EffectLog {
        &mut self.effects
    }

    /// Returns the ward table mutably (register private areas).
    pub fn wards_mut(&mut self) -> &mut WardTable {
        &mut self.wards
    }
}

// =============================================================================
// Tests
// =============================================================================
