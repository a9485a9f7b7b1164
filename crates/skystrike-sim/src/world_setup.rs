//! Entity spawn factories for setting up the simulation world.

use glam::{DQuat, DVec3, EulerRot};
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Aircraft, Drone, FlightDynamics};
use skystrike_core::constants::*;
use skystrike_core::services::{Transform, VisualKind, VisualProxyService};
use skystrike_core::types::{Orientation, Position};

/// Set up the initial world: the aircraft and a full pool of drones.
pub fn setup_world(world: &mut World, rng: &mut ChaCha8Rng, visuals: &mut dyn VisualProxyService) {
    spawn_aircraft(world, visuals);
    for _ in 0..TARGET_COUNT {
        spawn_drone(world, rng, visuals);
    }
}

/// Spawn the player aircraft at its start pose.
pub fn spawn_aircraft(world: &mut World, visuals: &mut dyn VisualProxyService) -> hecs::Entity {
    let position = Position(DVec3::new(0.0, INITIAL_ALTITUDE, 0.0));
    let orientation = Orientation::default();

    let handle = visuals.create_visual(
        VisualKind::Aircraft,
        &Transform::new(position.0, orientation.0),
    );

    world.spawn((
        Aircraft,
        position,
        orientation,
        FlightDynamics {
            speed: INITIAL_SPEED,
            ..Default::default()
        },
        handle,
    ))
}

/// Spawn a single drone at a random point in the target field.
///
/// Altitude is banded relative to the ground base elevation, not the terrain
/// surface beneath — drones are not terrain-following. Orientation is
/// cosmetic; collision is a sphere around the center.
pub fn spawn_drone(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    visuals: &mut dyn VisualProxyService,
) -> hecs::Entity {
    let x = rng.gen_range(-TARGET_FIELD_HALF_EXTENT..TARGET_FIELD_HALF_EXTENT);
    let z = rng.gen_range(-TARGET_FIELD_HALF_EXTENT..TARGET_FIELD_HALF_EXTENT);
    let y = GROUND_BASE_ELEVATION + rng.gen_range(MIN_TARGET_ALTITUDE..MAX_TARGET_ALTITUDE);
    let position = Position(DVec3::new(x, y, z));

    let orientation = Orientation(DQuat::from_euler(
        EulerRot::XYZ,
        rng.gen_range(0.0..std::f64::consts::PI),
        rng.gen_range(0.0..std::f64::consts::PI),
        rng.gen_range(0.0..std::f64::consts::PI),
    ));

    let handle = visuals.create_visual(
        VisualKind::Drone,
        &Transform::new(position.0, orientation.0),
    );

    world.spawn((
        Drone {
            radius: TARGET_COLLISION_RADIUS,
        },
        position,
        orientation,
        handle,
    ))
}
