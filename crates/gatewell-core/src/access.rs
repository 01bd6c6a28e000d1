//! Area access control.
//!
//! Interactive objects consult an [`AccessControl`] collaborator before
//! letting an actor change their settings. The plate only sees the yes/no
//! answer for a position; ward ownership and permission lists live behind
//! this seam.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// Permission check for interacting with objects at a position.
pub trait AccessControl {
    /// Returns true if interaction is permitted at `position`.
    fn check_access(&self, position: Vec3) -> bool;
}

/// Access control that permits everything.
///
/// Useful for unwarded worlds and for tests that are not about permissions.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAccess;

impl AccessControl for OpenAccess {
    fn check_access(&self, _position: Vec3) -> bool {
        true
    }
}

/// A circular private area denying interaction inside its radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ward {
    /// Center of the protected area.
    pub center: Vec3,
    /// Protection radius (inclusive).
    pub radius: f32,
}

impl Ward {
    fn covers(&self, position: Vec3) -> bool {
        self.center.distance_squared(position) <= self.radius * self.radius
    }
}

/// Access control backed by a list of [`Ward`]s.
///
/// A position is accessible when no ward covers it. Permission lists per ward
/// are a host concern; this table models the locked-out default.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WardTable {
    wards: Vec<Ward>,
}

impl WardTable {
    /// Creates a table with no wards (everything accessible).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a ward covering a circular area.
    pub fn add_ward(&mut self, center: Vec3, radius: f32) {
        self.wards.push(Ward { center, radius });
    }

    /// Returns the number of wards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.wards.len()
    }

    /// Returns true if no wards are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.wards.is_empty()
    }
}

impl AccessControl for WardTable {
    fn check_access(&self, position: Vec3) -> bool {
        !self.wards.iter().any(|ward| ward.covers(position))
    }
}
