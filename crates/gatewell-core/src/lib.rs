//! # Gatewell Core
//!
//! Networked pressure-plate trigger simulation for Gatewell.
//!
//! This crate provides the per-tick state machine of a proximity-activated
//! pressure plate and its coordination protocol with powered doors:
//! debounced press/release detection, cooldown hysteresis, multi-plate door
//! powering (the door closes only when the last powering plate releases),
//! and a network-authoritative public/private toggle.
//!
//! ## Architecture
//!
//! - **Plate**: [`plate::PressurePlate`] — detection + hysteresis, stepped
//!   once per fixed tick
//! - **Doors**: [`door::DoorRegistry`] — range queries and the powering set
//!   protocol
//! - **Collaborator seams**: [`actor::ActorLocator`],
//!   [`net::NetworkedState`], [`effect::EffectPlayer`],
//!   [`access::AccessControl`] — consumed at their interface boundary only
//! - **Driver**: [`simulation::Simulation`] — single-threaded fixed-rate
//!   stepping of a region
//!
//! ## Usage
//!
//! ```
//! use gatewell_core::{PlateConfig, Simulation};
//! use glam::Vec3;
//!
//! let mut sim = Simulation::new(PlateConfig::default());
//! let plate = sim.spawn_plate(Vec3::ZERO);
//! let door = sim.spawn_door(Vec3::new(2.0, 0.0, 0.0), Some(5.0));
//! let actor = sim.actors_mut().spawn(Vec3::new(0.5, 0.0, 0.5));
//!
//! sim.step();
//! assert!(sim.doors().get(door).unwrap().is_open());
//!
//! // The actor walks away; the plate holds the door for its cooldown.
//! sim.actors_mut().despawn(actor);
//! sim.step();
//! assert!(sim.plate(plate).unwrap().is_pressed());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod access;
pub mod actor;
pub mod capability;
pub mod config;
pub mod door;
pub mod effect;
pub mod locale;
pub mod net;
pub mod plate;
pub mod simulation;

#[cfg(test)]
mod tests;

// Re-exports for convenience
pub use access::{AccessControl, OpenAccess, WardTable};
pub use actor::{ActorId, ActorLocator, ActorRoster};
pub use capability::{Hoverable, Interactable, InteractContext, ItemId};
pub use config::{ConfigError, PlateConfig};
pub use door::{Door, DoorId, DoorRegistry};
pub use effect::{EffectKind, EffectLog, EffectPlayer};
pub use net::{NetworkedState, ReplicatedObject, IS_PUBLIC_KEY};
pub use plate::{PlateId, PressurePlate, TickContext};
pub use simulation::{Simulation, FIXED_DT};
