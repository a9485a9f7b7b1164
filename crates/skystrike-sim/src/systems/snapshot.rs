//! Snapshot system: queries the ECS world and builds a complete
//! `FrameSnapshot`.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use skystrike_core::components::{Aircraft, Drone, FlightDynamics, Projectile};
use skystrike_core::constants::HUD_SPEED_FACTOR;
use skystrike_core::events::SimEvent;
use skystrike_core::services::{GroundHeight, VisualHandle};
use skystrike_core::state::{
    AircraftView, CameraView, FrameSnapshot, HudView, ProjectileView, TargetView,
};
use skystrike_core::types::{Orientation, Position, SimTime, Velocity};

/// Build a complete `FrameSnapshot` from the current world state.
pub fn build(
    world: &World,
    time: &SimTime,
    score: u32,
    ground: &dyn GroundHeight,
    events: Vec<SimEvent>,
) -> FrameSnapshot {
    let aircraft = build_aircraft(world);

    FrameSnapshot {
        time: *time,
        score,
        camera: CameraView {
            position: aircraft.position,
            orientation: aircraft.orientation,
        },
        hud: build_hud(&aircraft, ground, score),
        aircraft,
        projectiles: build_projectiles(world),
        targets: build_targets(world),
        events,
    }
}

fn build_aircraft(world: &World) -> AircraftView {
    world
        .query::<(&Aircraft, &Position, &Orientation, &FlightDynamics)>()
        .iter()
        .next()
        .map(|(_, (_, position, orientation, dynamics))| AircraftView {
            position: *position,
            orientation: *orientation,
            speed: dynamics.speed,
        })
        .unwrap_or_default()
}

/// HUD scalars. Altitude is height above the terrain surface beneath the
/// aircraft, clamped to be non-negative before display.
fn build_hud(aircraft: &AircraftView, ground: &dyn GroundHeight, score: u32) -> HudView {
    let p = aircraft.position.0;
    let terrain = ground.ground_height_at(p.x, p.z);
    let (pitch_deg, roll_deg) = aircraft.orientation.pitch_roll_deg();

    HudView {
        speed: aircraft.speed * HUD_SPEED_FACTOR,
        altitude: (p.y - terrain).max(0.0),
        pitch_deg,
        roll_deg,
        score,
    }
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut views: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity, &VisualHandle)>()
        .iter()
        .map(|(_, (_projectile, position, velocity, handle))| ProjectileView {
            id: handle.0,
            position: *position,
            velocity: *velocity,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}

fn build_targets(world: &World) -> Vec<TargetView> {
    let mut views: Vec<TargetView> = world
        .query::<(&Drone, &Position, &Orientation, &VisualHandle)>()
        .iter()
        .map(|(_, (_drone, position, orientation, handle))| TargetView {
            id: handle.0,
            position: *position,
            orientation: *orientation,
        })
        .collect();

    views.sort_by_key(|v| v.id);
    views
}
