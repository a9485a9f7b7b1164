//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

/// Marks the single player-controlled aircraft entity.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Aircraft;

/// Smoothed control rates and forward speed for the aircraft.
/// Mutated exclusively by the flight system, once per tick.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct FlightDynamics {
    /// Forward speed, clamped to [MIN_SPEED, MAX_SPEED].
    pub speed: f64,
    /// Smoothed pitch rate; damped toward zero while no pitch key is held.
    pub pitch_rate: f64,
    /// Smoothed roll rate.
    pub roll_rate: f64,
    /// Smoothed yaw rate.
    pub yaw_rate: f64,
}

/// A live projectile. Identity is positional — no cross-references.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Projectile {
    /// Simulated time at which the projectile left the muzzle (seconds).
    pub spawned_at: f64,
    /// Collision radius.
    pub radius: f64,
}

/// A collectible aerial drone target.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Drone {
    /// Collision radius.
    pub radius: f64,
}
