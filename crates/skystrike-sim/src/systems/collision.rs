//! Collision engine: projectile-versus-drone sphere tests, scoring, and
//! same-tick pool replenishment.

use glam::DVec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use skystrike_core::components::{Drone, Projectile};
use skystrike_core::events::SimEvent;
use skystrike_core::services::{VisualHandle, VisualProxyService};
use skystrike_core::types::Position;

use crate::world_setup;

struct Shot {
    entity: Entity,
    position: DVec3,
    radius: f64,
    handle: VisualHandle,
}

struct Candidate {
    entity: Entity,
    position: DVec3,
    radius: f64,
    handle: VisualHandle,
    destroyed: bool,
}

/// Test all live projectiles against all live drones.
///
/// First hit wins per projectile: the drone is destroyed and immediately
/// replaced, the projectile is consumed, score increments by one, and the
/// scan moves on to the next projectile. Both loops walk stable snapshots
/// taken before any mutation, so removal never skips a neighbor and a
/// replacement spawned mid-tick is not a candidate until the next tick.
///
/// O(P·T) per tick — fine at tens of projectiles against tens of drones.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    score: &mut u32,
    visuals: &mut dyn VisualProxyService,
    events: &mut Vec<SimEvent>,
) {
    let shots: Vec<Shot> = world
        .query_mut::<(&Projectile, &Position, &VisualHandle)>()
        .into_iter()
        .map(|(entity, (projectile, position, handle))| Shot {
            entity,
            position: position.0,
            radius: projectile.radius,
            handle: *handle,
        })
        .collect();

    let mut candidates: Vec<Candidate> = world
        .query_mut::<(&Drone, &Position, &VisualHandle)>()
        .into_iter()
        .map(|(entity, (drone, position, handle))| Candidate {
            entity,
            position: position.0,
            radius: drone.radius,
            handle: *handle,
            destroyed: false,
        })
        .collect();

    for shot in shots {
        for candidate in candidates.iter_mut() {
            if candidate.destroyed {
                continue;
            }
            let distance = shot.position.distance(candidate.position);
            if distance < shot.radius + candidate.radius {
                candidate.destroyed = true;
                let _ = world.despawn(candidate.entity);
                visuals.remove_visual(candidate.handle);

                let _ = world.despawn(shot.entity);
                visuals.remove_visual(shot.handle);

                *score += 1;
                events.push(SimEvent::TargetDestroyed { score: *score });

                // Replenish immediately so the pool never dips below its
                // fixed size at the end of the tick.
                world_setup::spawn_drone(world, rng, visuals);
                break;
            }
        }
    }
}
