//! Property tests for the detection geometry and the pressed-state
//! invariant.

use glam::Vec3;
use proptest::prelude::*;

use super::helpers::TEST_DT;
use crate::actor::ActorLocator;
use crate::config::PlateConfig;
use crate::simulation::Simulation;

/// Reference predicate for the detection cylinder, written independently of
/// the plate's own range test.
fn cylinder_contains(config: &PlateConfig, offset: Vec3) -> bool {
    let xz_sq = offset.x * offset.x + offset.z * offset.z;
    xz_sq <= config.radius_xz * config.radius_xz && offset.y.abs() <= config.radius_y
}

proptest! {
    /// A single actor at an arbitrary offset presses the plate exactly when
    /// the cylinder predicate holds. Exercises both inclusive boundaries.
    #[test]
    fn detection_matches_cylinder_predicate(
        dx in -3.0f32..3.0,
        dy in -2.0f32..2.0,
        dz in -3.0f32..3.0,
    ) {
        let config = PlateConfig::default();
        let mut sim = Simulation::new(config);
        let plate = sim.spawn_plate(Vec3::ZERO);
        sim.actors_mut().spawn(Vec3::new(dx, dy, dz));

        sim.step_dt(TEST_DT);

        let expected = cylinder_contains(&config, Vec3::new(dx, dy, dz));
        prop_assert_eq!(sim.plate(plate).unwrap().is_pressed(), expected);
    }

    /// Over an arbitrary enter/leave schedule, the plate is always pressed
    /// while an actor is in range or the cooldown is positive, and it only
    /// reads released when both are false.
    #[test]
    fn pressed_invariant_holds_over_random_walk(
        steps in proptest::collection::vec(
            proptest::option::of((-4.0f32..4.0, -4.0f32..4.0)),
            1..60,
        ),
    ) {
        let config = PlateConfig::default();
        let mut sim = Simulation::new(config);
        let plate = sim.spawn_plate(Vec3::ZERO);
        let mut actor = None;

        for step in steps {
            match step {
                Some((x, z)) => {
                    let position = Vec3::new(x, 0.0, z);
                    match actor {
                        Some(id) => {
                            sim.actors_mut().set_position(id, position);
                        }
                        None => actor = Some(sim.actors_mut().spawn(position)),
                    }
                }
                None => {
                    if let Some(id) = actor.take() {
                        sim.actors_mut().despawn(id);
                    }
                }
            }

            sim.step_dt(TEST_DT);

            let state = sim.plate(plate).unwrap();
            let in_range = actor
                .and_then(|id| sim.actors().position_of(id))
                .is_some_and(|p| cylinder_contains(&config, p));

            if in_range || state.press_cooldown() > 0.0 {
                prop_assert!(state.is_pressed());
            }
            if !state.is_pressed() {
                prop_assert!(!in_range);
                prop_assert!(state.press_cooldown() <= 0.0);
            }
        }
    }
}
