//! Pushes per-entity world transforms to the visual-proxy service.

use hecs::World;

use skystrike_core::services::{Transform, VisualHandle, VisualProxyService};
use skystrike_core::types::{Orientation, Position};

/// Update every proxied entity's transform, once per tick.
///
/// Projectiles carry no orientation of their own; their proxies keep the
/// identity rotation.
pub fn push_transforms(world: &World, visuals: &mut dyn VisualProxyService) {
    for (_entity, (handle, position, orientation)) in world
        .query::<(&VisualHandle, &Position, Option<&Orientation>)>()
        .iter()
    {
        let transform = match orientation {
            Some(o) => Transform::new(position.0, o.0),
            None => Transform::from_position(position.0),
        };
        visuals.update_transform(*handle, &transform);
    }
}
