//! Events emitted by the simulation for frontend audio and UI feedback.

use serde::{Deserialize, Serialize};

/// Events drained into each frame snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// A projectile left the muzzle.
    ShotFired,
    /// A projectile destroyed a drone; `score` is the new total.
    TargetDestroyed { score: u32 },
}
