//! Fundamental geometric and simulation types.
//!
//! World space is right-handed and Y-up: x/z span the horizontal plane,
//! y is altitude. An aircraft at identity orientation faces -Z with +X off
//! its right wing.

use glam::{DQuat, DVec3, EulerRot};
use serde::{Deserialize, Serialize};

/// 3D position in world space.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub DVec3);

/// 3D velocity in world units per second.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub DVec3);

/// World-space orientation. Forward is the local -Z axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Orientation(pub DQuat);

impl Default for Orientation {
    fn default() -> Self {
        Self(DQuat::IDENTITY)
    }
}

impl Position {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self(DVec3::new(x, y, z))
    }

    /// Euclidean distance to another position.
    pub fn distance_to(&self, other: &Position) -> f64 {
        self.0.distance(other.0)
    }
}

impl Orientation {
    /// Unit forward vector (local -Z rotated into world space).
    pub fn forward(&self) -> DVec3 {
        self.0 * DVec3::NEG_Z
    }

    /// Rotate a local-space offset into world space.
    pub fn rotate(&self, local: DVec3) -> DVec3 {
        self.0 * local
    }

    /// Pitch and roll in degrees from the YXZ decomposition the HUD
    /// displays. Positive pitch = nose above the horizon, positive roll =
    /// right wing down.
    pub fn pitch_roll_deg(&self) -> (f64, f64) {
        let (_yaw, pitch, roll) = self.0.to_euler(EulerRot::YXZ);
        (pitch.to_degrees(), -roll.to_degrees())
    }
}

/// Simulation time accumulated from capped frame deltas.
///
/// Cooldowns and lifetimes run on this clock, not wall time, so a stalled
/// host cannot silently eat a cooldown window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SimTime {
    /// Current tick number (increments by 1 each tick).
    pub tick: u64,
    /// Elapsed simulated time in seconds.
    pub elapsed_secs: f64,
}

impl SimTime {
    /// Advance by one frame of `dt` seconds (already capped by the engine).
    pub fn advance(&mut self, dt: f64) {
        self.tick += 1;
        self.elapsed_secs += dt;
    }
}
