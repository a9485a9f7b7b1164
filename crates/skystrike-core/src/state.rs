//! Frame snapshot — the complete visible state exported to the rendering
//! and HUD collaborators each tick.

use serde::{Deserialize, Serialize};

use crate::events::SimEvent;
use crate::types::{Orientation, Position, SimTime, Velocity};

/// Complete per-tick state export.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FrameSnapshot {
    pub time: SimTime,
    pub score: u32,
    pub aircraft: AircraftView,
    pub camera: CameraView,
    pub hud: HudView,
    pub projectiles: Vec<ProjectileView>,
    pub targets: Vec<TargetView>,
    pub events: Vec<SimEvent>,
}

/// Aircraft pose and speed.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct AircraftView {
    pub position: Position,
    pub orientation: Orientation,
    pub speed: f64,
}

/// Camera-follow target. The chase camera trails this pose by
/// `CAMERA_OFFSET` rotated into aircraft space; the smoothing is the
/// renderer's concern.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CameraView {
    pub position: Position,
    pub orientation: Orientation,
}

/// Scalar HUD values. Formatting and rounding are presentation concerns.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct HudView {
    /// Speed in display units.
    pub speed: f64,
    /// Height above the terrain surface, clamped to be non-negative.
    pub altitude: f64,
    pub pitch_deg: f64,
    pub roll_deg: f64,
    pub score: u32,
}

/// A live projectile for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct ProjectileView {
    /// Stable id for frontend reconciliation (the visual handle value).
    pub id: u64,
    pub position: Position,
    pub velocity: Velocity,
}

/// A live drone for display.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct TargetView {
    pub id: u64,
    pub position: Position,
    pub orientation: Orientation,
}
