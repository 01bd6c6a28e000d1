//! The pressure plate and its per-tick state machine.
//!
//! A plate detects nearby actors, toggles its physical state with hysteresis,
//! and drives the door powering protocol. Each fixed tick it:
//!
//! 1. Skips entirely while its replicated state is not yet valid
//! 2. Scans for an actor within its detection cylinder (XZ radius + Y
//!    tolerance, both inclusive)
//! 3. While detected: stays pressed and refreshes the cooldown to the max
//!    configured open time among in-range doors (fallback delay otherwise)
//! 4. While vacated: burns down the cooldown, releasing only at zero
//! 5. Re-asserts the visual offset every tick
//! 6. On a press/release edge: plays the matching effect and adds/removes
//!    itself from the powering set of every in-range door
//! 7. While pressed (and on edges): re-opens every in-range door each tick;
//!    on release, closes a door only if no other plate still powers it
//!
//! The continuous re-`open()` tolerates late joiners and desynced observers
//! of the replicated door state; a single open call is not trusted to
//! persist everywhere.
//!
//! # Concurrency
//!
//! All of this executes to completion inside one tick call on a
//! single-threaded driver. Within a tick, a plate's decision and its
//! propagation to all in-range doors are atomic from the perspective of
//! other plates.

use std::fmt;

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::access::AccessControl;
use crate::actor::{ActorId, ActorLocator};
use crate::capability::{Hoverable, Interactable, InteractContext, ItemId};
use crate::config::PlateConfig;
use crate::door::{Door, DoorRegistry};
use crate::effect::{EffectKind, EffectPlayer};
use crate::locale;
use crate::net::{NetworkedState, IS_PUBLIC_KEY};

/// Local Y offset of the plate visual while pressed.
pub const PRESSED_OFFSET: f32 = -0.025;

/// Local Y offset of the plate visual while raised.
pub const RAISED_OFFSET: f32 = 0.05;

// =============================================================================
// PlateId
// =============================================================================

/// Unique identifier for a pressure plate.
///
/// Newtype wrapper around `u64`, ordered by numeric value. Door powering
/// sets key on `PlateId`, so ordering also fixes membership iteration order.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PlateId(u64);

impl PlateId {
    /// Creates a new `PlateId` from a raw `u64` value.
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

impl fmt::Debug for PlateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "PlateId({})", self.0)
    }
}

impl fmt::Display for PlateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for PlateId {
    fn from(id: u64) -> Self {
        Self::new(id)
    }
}

impl From<PlateId> for u64 {
    fn from(id: PlateId) -> Self {
        id.0
    }
}

// =============================================================================
// TickContext
// =============================================================================

/// Collaborators a plate needs during one tick.
///
/// The driver builds a fresh context per plate per tick; the plate holds no
/// references to world services between ticks.
pub struct TickContext<'a> {
    /// Live actor positions.
    pub actors: &'a dyn ActorLocator,
    /// Doors reachable from this simulation region.
    pub doors: &'a mut DoorRegistry,
    /// Effect playback sink.
    pub effects: &'a mut dyn EffectPlayer,
}

impl fmt::Debug for TickContext<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TickContext")
            .field("doors", &self.doors)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// PressurePlate
// =============================================================================

/// A proximity-activated mechanical trigger.
///
/// Everything except the replicated public/private flag is transient,
/// tick-local state rebuilt from live detection; there is nothing to tear
/// down when the host object despawns.
///
/// # Example
///
/// ```
/// use gatewell_core::actor::ActorRoster;
/// use gatewell_core::config::PlateConfig;
/// use gatewell_core::door::DoorRegistry;
/// use gatewell_core::effect::EffectLog;
/// use gatewell_core::net::ReplicatedObject;
/// use gatewell_core::plate::{PlateId, PressurePlate, TickContext};
/// use glam::Vec3;
///
/// let mut plate = PressurePlate::new(
///     PlateId::new(0),
///     Vec3::ZERO,
///     PlateConfig::default(),
///     Box::new(ReplicatedObject::synced()),
/// );
///
/// let mut roster = ActorRoster::new();
/// roster.spawn(Vec3::new(1.0, 0.0, 0.5));
/// let mut doors = DoorRegistry::new(6.0);
/// let mut effects = EffectLog::new();
///
/// let mut ctx = TickContext {
///     actors: &roster,
///     doors: &mut doors,
///     effects: &mut effects,
/// };
/// plate.fixed_update(1.0 / 60.0, &mut ctx);
///
/// assert!(plate.is_pressed());
/// ```
pub struct PressurePlate {
    id: PlateId,
    /// Host transform position; plates are static fixtures.
    position: Vec3,
    config: PlateConfig,
    /// Replicated state handle of the host object.
    net: Box<dyn NetworkedState>,
    is_pressed: bool,
    /// Remaining seconds the plate stays pressed after the last detection.
    press_cooldown: f32,
    /// Most recent actor detected in range; lookup-only back reference.
    last_actor: Option<ActorId>,
    /// Local Y offset of the plate visual.
    visual_offset: f32,
}

impl fmt::Debug for PressurePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PressurePlate")
            .field("id", &self.id)
            .field("position", &self.position)
            .field("is_pressed", &self.is_pressed)
            .field("press_cooldown", &self.press_cooldown)
            .field("last_actor", &self.last_actor)
            .finish_non_exhaustive()
    }
}

impl PressurePlate {
    /// Creates a released plate at `position`.
    ///
    /// `net` is the replicated state handle of the host object; the plate
    /// produces no state until it reports valid.
    #[must_use]
    pub fn new(
        id: PlateId,
        position: Vec3,
        config: PlateConfig,
        net: Box<dyn NetworkedState>,
    ) -> Self {
        Self {
            id,
            position,
            config,
            net,
            is_pressed: false,
            press_cooldown: 0.0,
            last_actor: None,
            visual_offset: RAISED_OFFSET,
        }
    }

    /// Returns this plate's ID.
    #[must_use]
    pub const fn id(&self) -> PlateId {
        self.id
    }

    /// Returns this plate's world position.
    #[must_use]
    pub const fn position(&self) -> Vec3 {
        self.position
    }

    /// Returns true if the plate is currently pressed (debounced).
    #[must_use]
    pub const fn is_pressed(&self) -> bool {
        self.is_pressed
    }

    /// Returns the remaining cooldown in seconds.
    #[must_use]
    pub const fn press_cooldown(&self) -> f32 {
        self.press_cooldown
    }

    /// Returns the most recent actor detected in range, if any.
    #[must_use]
    pub const fn last_actor(&self) -> Option<ActorId> {
        self.last_actor
    }

    /// Returns the current visual Y offset.
    #[must_use]
    pub const fn visual_offset(&self) -> f32 {
        self.visual_offset
    }

    /// Returns the replicated state handle.
    #[must_use]
    pub fn net(&self) -> &dyn NetworkedState {
        self.net.as_ref()
    }

    /// Returns the replicated state handle mutably.
    ///
    /// The host uses this to mark synchronization complete.
    pub fn net_mut(&mut self) -> &mut dyn NetworkedState {
        self.net.as_mut()
    }

    /// Advances the plate by one fixed tick of `dt` seconds.
    ///
    /// No-op while the replicated state is invalid; retried implicitly next
    /// tick once synchronization completes.
    pub fn fixed_update(&mut self, dt: f32, ctx: &mut TickContext<'_>) {
        if !self.net.is_valid() {
            // wait for network spawn
            return;
        }

        let was_pressed = self.is_pressed;

        if self.detect_actor(ctx.actors) {
            // Refresh the cooldown every detected tick, not just on the
            // rising edge, so standing on the plate keeps it armed.
            let doors = ctx.doors.find_in_range(self.position);
            let max_open = doors
                .iter()
                .filter_map(|id| ctx.doors.get(*id))
                .filter_map(Door::open_time)
                .fold(None::<f32>, |acc, t| Some(acc.map_or(t, |a| a.max(t))));
            self.press_cooldown = max_open.unwrap_or(self.config.open_delay);
            self.is_pressed = true;
        } else if self.press_cooldown > 0.0 {
            self.press_cooldown -= dt;
            self.is_pressed = true;
        } else {
            self.is_pressed = false;
        }

        let state_change = self.is_pressed != was_pressed;

        // Idempotent, re-asserted every tick
        self.visual_offset = if self.is_pressed {
            PRESSED_OFFSET
        } else {
            RAISED_OFFSET
        };

        if state_change {
            debug!(plate = %self.id, pressed = self.is_pressed, "plate state changed");
            let kind = if self.is_pressed {
                EffectKind::Press
            } else {
                EffectKind::Release
            };
            ctx.effects.play(kind, self.position, Quat::IDENTITY);

            for id in ctx.doors.find_in_range(self.position) {
                if let Some(door) = ctx.doors.get_mut(id) {
                    if self.is_pressed {
                        door.add_powering_plate(self.id);
                    } else {
                        door.remove_powering_plate(self.id);
                    }
                }
            }
        }

        // No actor identity to attribute door signaling to yet
        let Some(actor) = self.last_actor else {
            return;
        };

        if state_change || self.is_pressed {
            for id in ctx.doors.find_in_range(self.position) {
                if let Some(door) = ctx.doors.get_mut(id) {
                    if self.is_pressed {
                        // always re-open while pressed; replicated observers
                        // may have missed an earlier call
                        door.open(actor, self.id);
                    } else if !door.powered_by_other(self.id) {
                        door.close(actor, self.id);
                    }
                }
            }
        }
    }

    /// Scans for an actor inside the detection cylinder, recording the first
    /// match as `last_actor`.
    fn detect_actor(&mut self, actors: &dyn ActorLocator) -> bool {
        let found = actors
            .all_actors()
            .into_iter()
            .find(|(_, position)| self.in_range(*position));

        match found {
            Some((id, _)) => {
                self.last_actor = Some(id);
                true
            }
            None => false,
        }
    }

    /// Cylinder range test: XZ Euclidean distance and absolute Y difference,
    /// both inclusive.
    fn in_range(&self, target: Vec3) -> bool {
        let delta = self.position - target;
        let in_xz =
            delta.x * delta.x + delta.z * delta.z <= self.config.radius_xz * self.config.radius_xz;
        let in_y = delta.y.abs() <= self.config.radius_y;
        in_xz && in_y
    }
}

impl Hoverable for PressurePlate {
    fn hover_text(&self) -> String {
        if !self.net.is_valid() {
            return String::new();
        }

        let text = if self.net.get_bool(IS_PUBLIC_KEY) {
            "$plate_public\n[$KEY_Use] $plate_make_private"
        } else {
            "$plate_private\n[$KEY_Use] $plate_make_public"
        };
        locale::localize(text)
    }

    fn hover_name(&self) -> String {
        locale::localize("$plate_name")
    }
}

impl Interactable for PressurePlate {
    fn interact(&mut self, actor: ActorId, hold: bool, ctx: &InteractContext<'_>) -> bool {
        if hold {
            // discrete activation only
            return false;
        }

        if !ctx.access.check_access(self.position) {
            debug!(plate = %self.id, %actor, "interact denied: no area access");
            return true;
        }

        let is_public = self.net.get_bool(IS_PUBLIC_KEY);
        self.net.set_bool(IS_PUBLIC_KEY, !is_public);
        debug!(plate = %self.id, %actor, is_public = !is_public, "visibility toggled");
        true
    }

    fn use_item(&mut self, _actor: ActorId, _item: &ItemId, _ctx: &InteractContext<'_>) -> bool {
        false
    }
}

// =============================================================================
// Tests
// =============================================================================
