//! Interfaces to the excluded collaborators: terrain height queries, the
//! scene-graph visual-proxy service, and the HUD sink.
//!
//! The simulation never reads visual state back; handles are opaque and held
//! weakly on the collaborator's behalf.

use glam::{DQuat, DVec3};
use serde::{Deserialize, Serialize};

use crate::state::HudView;

/// Deterministic terrain height query.
pub trait GroundHeight {
    /// Height of the terrain surface at the given column, or the documented
    /// fallback (the ground base elevation) where no surface exists.
    fn ground_height_at(&self, x: f64, z: f64) -> f64;
}

/// World transform of a visual proxy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub position: DVec3,
    pub orientation: DQuat,
}

impl Transform {
    pub fn new(position: DVec3, orientation: DQuat) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Transform with the identity rotation.
    pub fn from_position(position: DVec3) -> Self {
        Self::new(position, DQuat::IDENTITY)
    }
}

/// Entity kinds the renderer knows how to depict.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VisualKind {
    Aircraft,
    Projectile,
    Drone,
}

/// Opaque handle to a scene-graph proxy. Attached to entities as a component
/// so destruction can request the proxy's retirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct VisualHandle(pub u64);

/// Scene-graph insertion/removal/update service.
pub trait VisualProxyService {
    /// Create a proxy for a newly spawned entity.
    fn create_visual(&mut self, kind: VisualKind, transform: &Transform) -> VisualHandle;

    /// Retire the proxy of a destroyed entity.
    fn remove_visual(&mut self, handle: VisualHandle);

    /// Move an existing proxy. Called once per moved entity per tick.
    fn update_transform(&mut self, handle: VisualHandle, transform: &Transform);
}

/// No-op visual service for headless runs and tests. Hands out unique
/// handles and discards everything else.
#[derive(Debug, Default)]
pub struct NullVisuals {
    next_handle: u64,
}

impl VisualProxyService for NullVisuals {
    fn create_visual(&mut self, _kind: VisualKind, _transform: &Transform) -> VisualHandle {
        self.next_handle += 1;
        VisualHandle(self.next_handle)
    }

    fn remove_visual(&mut self, _handle: VisualHandle) {}

    fn update_transform(&mut self, _handle: VisualHandle, _transform: &Transform) {}
}

/// Per-tick HUD scalar sink.
pub trait HudSink {
    fn present(&mut self, hud: &HudView);
}
