//! Visual/audio cue playback.
//!
//! Effects are fire-and-forget: the plate requests a cue at a position and
//! orientation and never observes the result. The [`EffectLog`] implementation
//! records requests so the host can drain them into its renderer/mixer, and so
//! tests can assert on edge-triggered playback.

use glam::{Quat, Vec3};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Cue categories a plate can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EffectKind {
    /// Plate depressed (actor arrived).
    Press,
    /// Plate raised (cooldown expired).
    Release,
}

/// Fire-and-forget playback of a visual/audio cue.
pub trait EffectPlayer {
    /// Requests a cue at the given position and orientation.
    fn play(&mut self, kind: EffectKind, position: Vec3, rotation: Quat);
}

/// A single recorded cue request.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectRecord {
    /// Cue category.
    pub kind: EffectKind,
    /// World position of the cue.
    pub position: Vec3,
    /// Orientation of the cue.
    pub rotation: Quat,
}

/// Effect player that records every request in order.
///
/// The host drains the log each frame; tests inspect it directly.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EffectLog {
    records: Vec<EffectRecord>,
}

impl EffectLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the recorded cue requests in playback order.
    #[must_use]
    pub fn records(&self) -> &[EffectRecord] {
        &self.records
    }

    /// Removes and returns all recorded requests.
    pub fn drain(&mut self) -> Vec<EffectRecord> {
        std::mem::take(&mut self.records)
    }
}

impl EffectPlayer for EffectLog {
    fn play(&mut self, kind: EffectKind, position: Vec3, rotation: Quat) {
        debug!(?kind, ?position, "effect requested");
        self.records.push(EffectRecord {
            kind,
            position,
            rotation,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn play_records_in_order() {
        let mut log = EffectLog::new();
        log.play(EffectKind::Press, Vec3::ZERO, Quat::IDENTITY);
        log.play(EffectKind::Release, Vec3::new(1.0, 0.0, 0.0), Quat::IDENTITY);

        let kinds: Vec<_> = log.records().iter().map(|r| r.kind).collect();
        assert_eq!(kinds, vec![EffectKind::Press, EffectKind::Release]);
    }

    #[test]
    fn drain_empties_the_log() {
        let mut log = EffectLog::new();
        log.play(EffectKind::Press, Vec3::ZERO, Quat::IDENTITY);

        let drained = log.drain();
        assert_eq!(drained.len(), 1);
        assert!(log.records().is_empty());
    }
}
