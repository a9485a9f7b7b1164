//! Simulation engine for SKYSTRIKE.
//!
//! Owns the hecs ECS world, advances the flight-combat simulation one frame
//! at a time in a strict system order, and produces `FrameSnapshot`s for the
//! rendering and HUD collaborators. Completely headless, enabling
//! deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use skystrike_core as core;

#[cfg(test)]
mod tests;
