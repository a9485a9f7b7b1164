//! Headless real-time runner for the SKYSTRIKE simulation.
//!
//! Drives the engine on a dedicated thread at a nominal frame rate and
//! publishes snapshots for whatever frontend is attached. The window,
//! renderer, and input device plumbing are external collaborators; this
//! crate owns only pacing, input forwarding, and HUD export.

pub mod hud;
pub mod runner;
pub mod state;
