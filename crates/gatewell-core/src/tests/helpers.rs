//! Test helper functions for setting up simulations.
//!
//! Factory functions shared by the scenario tests. All helpers use the
//! default [`PlateConfig`] (XZ radius 2.0, Y tolerance 1.0, fallback delay
//! 3.0 s) and a 0.1 s test timestep.

use glam::Vec3;

use crate::config::PlateConfig;
use crate::door::DoorId;
use crate::plate::PlateId;
use crate::simulation::Simulation;

/// Timestep used by the scenario tests (10 Hz keeps timelines readable).
pub const TEST_DT: f32 = 0.1;

/// Creates a simulation with one plate at the origin and no doors.
pub fn setup_single_plate() -> (Simulation, PlateId) {
    let mut sim = Simulation::new(PlateConfig::default());
    let plate = sim.spawn_plate(Vec3::ZERO);
    (sim, plate)
}

/// Creates a simulation with one plate at the origin and one door at
/// (3, 0, 0) inside activation range.
pub fn setup_plate_with_door(open_time: Option<f32>) -> (Simulation, PlateId, DoorId) {
    let mut sim = Simulation::new(PlateConfig::default());
    let plate = sim.spawn_plate(Vec3::ZERO);
    let door = sim.spawn_door(Vec3::new(3.0, 0.0, 0.0), open_time);
    (sim, plate, door)
}

/// Creates two plates sharing one door.
///
/// Layout: plate A at the origin, plate B at (4, 0, 0), door midway at
/// (2, 0, 0). Both plates are within the 6.0 door activation range; the
/// plates' own 2.0 detection radii do not overlap.
pub fn setup_shared_door() -> (Simulation, PlateId, PlateId, DoorId) {
    let mut sim = Simulation::new(PlateConfig::default());
    let plate_a = sim.spawn_plate(Vec3::ZERO);
    let plate_b = sim.spawn_plate(Vec3::new(4.0, 0.0, 0.0));
    let door = sim.spawn_door(Vec3::new(2.0, 0.0, 0.0), None);
    (sim, plate_a, plate_b, door)
}

/// Steps the simulation for at least `seconds` of simulated time, plus a
/// couple of extra ticks so cooldown boundaries are safely crossed.
pub fn settle(sim: &mut Simulation, seconds: f32) {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    let ticks = (seconds / TEST_DT).ceil() as u32 + 2;
    for _ in 0..ticks {
        sim.step_dt(TEST_DT);
    }
}
