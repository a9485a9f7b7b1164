//! Projectile lifecycle: cooldown-gated firing, advancement, and expiry.

use hecs::{Entity, World};

use skystrike_core::components::{Aircraft, Projectile};
use skystrike_core::constants::*;
use skystrike_core::events::SimEvent;
use skystrike_core::services::{Transform, VisualHandle, VisualKind, VisualProxyService};
use skystrike_core::types::{Orientation, Position, Velocity};

/// Spawn a projectile from the aircraft muzzle if the cooldown has elapsed.
///
/// A suppressed request is a silent no-op, not an error. Velocity is
/// `forward * BULLET_SPEED` — projectiles do not inherit aircraft speed.
pub fn fire(
    world: &mut World,
    last_shot: &mut Option<f64>,
    now: f64,
    visuals: &mut dyn VisualProxyService,
    events: &mut Vec<SimEvent>,
) -> Option<Entity> {
    if let Some(last) = *last_shot {
        if now - last < SHOOT_COOLDOWN {
            return None;
        }
    }

    let (aircraft_pos, aircraft_orientation) = {
        let mut query = world.query::<(&Aircraft, &Position, &Orientation)>();
        let (_entity, (_aircraft, pos, orientation)) = query.iter().next()?;
        (*pos, *orientation)
    };

    *last_shot = Some(now);

    let position = Position(aircraft_pos.0 + aircraft_orientation.rotate(MUZZLE_OFFSET));
    let velocity = Velocity(aircraft_orientation.forward() * BULLET_SPEED);

    let handle = visuals.create_visual(
        VisualKind::Projectile,
        &Transform::from_position(position.0),
    );
    events.push(SimEvent::ShotFired);

    Some(world.spawn((
        Projectile {
            spawned_at: now,
            radius: BULLET_RADIUS,
        },
        position,
        velocity,
        handle,
    )))
}

/// Integrate every live projectile and expire the ones past their lifetime.
///
/// Expiry collects into a buffer first, so removal can never skip a
/// projectile that still needs evaluation.
pub fn advance(
    world: &mut World,
    dt: f64,
    elapsed: f64,
    visuals: &mut dyn VisualProxyService,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    let mut expired_handles: Vec<VisualHandle> = Vec::new();
    for (entity, (projectile, position, velocity, handle)) in
        world.query_mut::<(&Projectile, &mut Position, &Velocity, &VisualHandle)>()
    {
        position.0 += velocity.0 * dt;
        if elapsed - projectile.spawned_at > BULLET_LIFETIME {
            despawn_buffer.push(entity);
            expired_handles.push(*handle);
        }
    }

    for handle in expired_handles {
        visuals.remove_visual(handle);
    }
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
